/// Timing playground - runs every library entry point once
///
/// Initializes logging, computes a factorial (which reports its own loop
/// time on stdout), greets, parses a number, and awaits the fixed
/// asynchronous delay.
use anyhow::Result;
use log::LevelFilter;

use _main::{async_operation, factorial, greet, hello, parse_number};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let fac = factorial(20);
    log::info!("factorial(20) = {fac}");

    log::info!("hello() = {}", hello());
    log::info!("greet(\"Rust\") = {}", greet("Rust"));

    let parsed = parse_number("42")?;
    log::info!("parse_number(\"42\") = {parsed}");

    async_operation().await;
    log::info!("Async delay resumed");

    Ok(())
}
