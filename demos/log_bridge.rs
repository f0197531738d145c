//! `log` facade bridge example
//!
//! Run with: PRETTYLOG_LEVEL=debug cargo run --example log_bridge

use prettylog::HandlerOptions;

fn main() -> prettylog::Result<()> {
    prettylog::init(HandlerOptions::from_env()?)?;

    log::debug!("shown when PRETTYLOG_LEVEL=debug");
    log::info!("Server listening on port {}", 8080);
    log::warn!(target: "db", "Connection pool exhausted");
    log::trace!("Rendered as DEBUG-4 when enabled");

    Ok(())
}
