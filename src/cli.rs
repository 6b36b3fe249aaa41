// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use clap's "derive" API: the CLI is described by a plain struct and
// the #[arg(...)] attributes on its fields.
//
// Every argument is optional. The URL and output file are prompted for when
// missing (see input.rs), and the rest fall back to the config file or the
// built-in defaults (see config.rs).
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "link-harvest",
    version,
    about = "Scrape a web page and list which downloadable files sit beneath each of its sub-URLs",
    long_about = "link-harvest loads a single web page, collects its same-site links and its \
                  links to downloadable files (pdf, images, office documents, zip archives), \
                  and writes an XML document mapping every sub-URL to the files found beneath it."
)]
pub struct Cli {
    /// URL of the page to scrape (prompted for if omitted)
    ///
    /// Example: link-harvest https://example.com -o data.xml
    pub url: Option<String>,

    /// File to write the XML document to, or "-" for stdout (prompted for if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// File extension that marks a link as a downloadable file
    ///
    /// Repeat to give several: --ext pdf --ext csv
    /// Replaces the default list (.pdf .jpg .jpeg .png .docx .xlsx .zip)
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Page load timeout in seconds (default: 30)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// User-Agent header sent with the page request
    #[arg(long, value_name = "UA")]
    pub user_agent: Option<String>,

    /// TOML config file with extensions, timeout_secs and user_agent
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print a JSON run summary instead of the human-readable one
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging for this tool (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}
