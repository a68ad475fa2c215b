//! Basic logger usage example
//!
//! Demonstrates inline configuration, hierarchical levels and console output.
//!
//! Run with: cargo run --example basic_usage

use hierlog::prelude::*;
use hierlog::{debug, info, trace};

fn main() -> Result<()> {
    println!("=== hierlog - Basic Usage Example ===\n");

    let registry = Registry::builder().console_colors(true).build_shared();
    registry.configure_str(
        "inline",
        "rootLogger=STDOUT\n\
         logger.app=DEBUG\n\
         logger.app.db=TRACE\n\
         logger.noisy=ERROR\n",
    )?;

    let app = registry.logger("app");
    let db = registry.logger("app.db");
    let noisy = registry.logger("noisy.module");

    println!("1. Logging at different levels:");
    trace!(app, "Trace message (hidden, app is DEBUG)");
    debug!(app, "Loading {} plugins", 3);
    info!(app, "Application started");
    trace!(db, "Query took {}ms", 1.25);
    db.warn("Pool at {}% capacity", &[Arg::from(85u8)]);

    println!("\n2. Inherited levels:");
    info!(noisy, "Info message (hidden, noisy is ERROR)");
    noisy.error("Error message (visible)", &[]);

    println!("\n3. Escapes and missing arguments:");
    info!(app, r"literal \{} and missing [{}]");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
