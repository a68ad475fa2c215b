//! File logging example
//!
//! Writes a configuration file, loads it into the process-wide registry and
//! logs to a root file plus a dedicated file for one subsystem.
//!
//! Run with: cargo run --example file_logging

use hierlog::prelude::*;
use hierlog::{error, info, warn};

fn main() -> Result<()> {
    println!("=== hierlog - File Logging Example ===\n");

    std::fs::write(
        "demo-logging.properties",
        "# demo configuration\n\
         rootLogger=application.log\n\
         logger.Net.Connector=DEBUG,connector.log\n\
         logger.Net.Connector.Handshake=TRACE\n",
    )?;
    hierlog::configure("demo-logging.properties")?;

    let app = hierlog::get_logger("App");
    let connector = hierlog::get_logger("Net.Connector");
    let handshake = hierlog::get_logger("Net.Connector.Handshake");

    info!(app, "Application started");
    connector.debug("Dialing {}:{}", &[Arg::from("10.0.0.1"), Arg::from(500u16)]);
    handshake.trace("Sent hello, {} bytes", &[Arg::from(42usize)]);

    for i in 1..=5 {
        info!(app, "Processing item {}/5", i);
        if i == 3 {
            warn!(app, "Item {} took longer than expected", i);
        }
    }
    error!(connector, "Connection lost: {}", "timeout");

    Registry::global().flush()?;
    println!("{}", Registry::global().snapshot().to_json()?);

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' and 'connector.log' for the output");

    Ok(())
}
