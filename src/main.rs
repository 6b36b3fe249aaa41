// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap and set up logging
// 2. Load the config file (if any) and apply flag overrides
// 3. Get the target URL and output file (from flags, or by prompting)
// 4. Run the pipeline: fetch -> classify -> associate -> XML -> file
// 5. Print a summary and exit with a proper code (0 = success, 2 = error)
//
// Rust concepts used:
// - async/await: The page fetch and the file write are async I/O
// - Result<T, E>: For error handling (T = success type, E = error type)
// - Generics: Pipeline<F, S> works with any fetcher and any sink
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;       // src/cli.rs - command-line parsing
mod config;    // src/config.rs - extension list, timeout, user agent
mod error;     // src/error.rs - fetch / sink / config errors
mod fetch;     // src/fetch/ - loading the page and collecting hrefs
mod input;     // src/input.rs - URL and filename (flags or prompts)
mod links;     // src/links/ - classification, dedupe, association
mod logging;   // src/logging.rs - tracing subscriber setup
mod output;    // src/output/ - XML serializer and file sink
mod pipeline;  // src/pipeline.rs - ties the steps together

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use config::Config;
use fetch::HttpFetcher;
use input::{InputSource, PromptInput};
use output::{FileSink, STDOUT_PATH};
use pipeline::{Pipeline, RunReport};
use std::io::Write;
use std::path::Path;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole cause chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = document written
//   Err   = nothing written (bad config, failed fetch, failed write, ...)
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose)?;

    let file_config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let config = file_config.with_overrides(cli.extensions, cli.timeout, cli.user_agent);

    let extensions = config.extension_set();
    if extensions.is_empty() {
        tracing::warn!("extension list is empty, no links will count as files");
    } else {
        tracing::debug!(extensions = ?extensions.iter().collect::<Vec<_>>(), "file extensions");
    }

    let mut input = PromptInput::new(cli.url, cli.output);
    let target_url = input.target_url().context("could not read the URL to scrape")?;
    let output = input.output_path().context("could not read the output filename")?;

    let fetcher = HttpFetcher::new(config.timeout(), config.user_agent())
        .context("could not create HTTP client")?;
    let pipeline = Pipeline::new(fetcher, FileSink, extensions);

    let report = pipeline
        .run(&target_url, Path::new(&output))
        .await
        .context("no data was saved")?;

    print_report(&report, cli.json, &mut std::io::stdout(), &mut std::io::stderr())?;
    Ok(0)
}

// Prints the run summary either as JSON or as a short human-readable block
//
// Both normally go to stdout. When the document itself was written to stdout
// (-o -), the JSON report goes to stderr so neither output is corrupted, and
// the human summary is skipped.
fn print_report<O: Write, E: Write>(
    report: &RunReport,
    json: bool,
    stdout: &mut O,
    stderr: &mut E,
) -> Result<()> {
    let document_on_stdout = report.output == STDOUT_PATH;

    if json {
        let json_output = serde_json::to_string_pretty(report)?;
        if document_on_stdout {
            writeln!(stderr, "{}", json_output)?;
        } else {
            writeln!(stdout, "{}", json_output)?;
        }
        return Ok(());
    }

    if document_on_stdout {
        return Ok(());
    }

    writeln!(stdout, "✅ Data saved to {}", report.output)?;
    writeln!(stdout)?;
    writeln!(stdout, "📊 Summary:")?;
    writeln!(stdout, "   🔗 Links on page: {}", report.links_found)?;
    writeln!(stdout, "   🧭 Sub-URLs: {}", report.sub_urls)?;
    writeln!(stdout, "   📄 Files: {}", report.files)?;
    writeln!(stdout, "   📋 File entries written: {}", report.file_entries)?;
    if !report.unassociated_files.is_empty() {
        writeln!(
            stdout,
            "   ⚠️  Files under no sub-URL (left out): {}",
            report.unassociated_files.len()
        )?;
    }
    Ok(())
}
