//! Basic handler usage example
//!
//! Demonstrates colorized console output, bound attributes and groups.
//!
//! Run with: cargo run --example basic_usage

use prettylog::prelude::*;
use prettylog::{info, warn};

fn main() -> Result<()> {
    println!("=== prettylog - Basic Usage Example ===\n");

    let logger = Logger::pretty(HandlerOptions::default().with_level(Level::DEBUG));

    println!("1. Logging at different levels:");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error("This is an error message");

    println!("\n2. Attributes and groups:");
    let api = logger
        .with(vec![Attr::new("service", "api")])
        .with_group("request");
    info!(api, "Request served"; "method" => "GET", "status" => 200);
    warn!(api, "Slow request"; "elapsed" => std::time::Duration::from_millis(950));

    println!("\n3. Errors are returned when calling the handler directly:");
    let handler = PrettyHandler::new(HandlerOptions::default());
    let bad = Record::new(Level::INFO, "unencodable").with_attr("ratio", f64::NAN);
    if let Err(e) = handler.handle(&bad) {
        println!("   handle failed: {}", e);
    }
    handler.handle(&Record::new(Level::INFO, "next record still renders"))?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
