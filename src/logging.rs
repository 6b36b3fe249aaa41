// src/logging.rs
// =============================================================================
// Sets up the tracing subscriber.
//
// Logs always go to stderr. Stdout is kept for the run summary, the --json
// report and the document itself when writing with -o -.
// =============================================================================

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Initialize logging to stderr so stdout stays clean for `--json` and `-o -`.
///
/// The level comes from `RUST_LOG`, falling back to `info` (or `debug` when
/// `verbose` is set).
pub fn init_logging(verbose: bool) -> Result<()> {
    let default_filter = if verbose { "info,link_harvest=debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))?;

    Ok(())
}
