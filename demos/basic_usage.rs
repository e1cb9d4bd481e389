//! Basic facade usage example
//!
//! Demonstrates canonical record emission with the console transport and
//! the different ways a facade resolves its configuration.
//!
//! Run with: cargo run --example basic_usage

use service_log::prelude::*;

fn main() -> Result<()> {
    println!("=== Service Log - Basic Usage Example ===\n");

    // Process-wide defaults, set once before facades are constructed
    init("checkout-service", RecordFormat::Json, Severity::Debug);

    println!("1. Per-level calls, one JSON record per line:");
    let auth = get_logger("auth");
    auth.debug("session cache warmed");
    auth.info("login accepted");
    auth.warn("password close to expiry");
    auth.error_with(
        "login failed",
        Payload::new().with_error("bad password").with_status(Status::Fail),
    );

    println!("\n2. Payload-level service name override:");
    let cache = get_logger("cache");
    cache.debug("cache miss");
    cache.info_with(
        "fallback to upstream",
        Payload::new().with_service_name("inventory-service"),
    );

    println!("\n3. Explicitly injected configuration and text format:");
    let config = LoggerConfig::new()
        .with_service_name("billing-service")
        .with_environment("prod")
        .with_min_level(Severity::Info)
        .with_format(RecordFormat::Text);
    let billing = Logger::builder("invoices")
        .config(config.clone())
        .transport(ConsoleTransport::new().with_format(config.format))
        .build();

    billing.debug("hidden below the minimum level");
    billing.info_with(
        "invoice issued",
        Payload::new().with_attached_object("invoice-7"),
    );
    billing.flush()?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
