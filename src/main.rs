//! Surf Forecast Scraper - Main Daemon
//!
//! A batch daemon that periodically:
//! 1. Polls the WillyWeather API for swell, wind, and tide forecasts
//!    across the configured Australian surf regions
//! 2. Normalizes each payload onto the canonical 7-slot daily grid
//! 3. Fans each record out to every break in the region as upserted
//!    PostgreSQL rows
//!
//! Usage:
//!   cargo run --release                      # Start the periodic daemon
//!   cargo run --release -- --once            # Single scrape run, then exit
//!   cargo run --release -- --log-file x.log  # Also append logs to a file
//!
//! Environment:
//!   WILLY_WEATHER_API_KEY - WillyWeather API key
//!   DATABASE_URL          - PostgreSQL connection string
//!   RUN_ONCE              - "1"/"true" behaves like --once

use std::env;
use surfcast_service::config;
use surfcast_service::daemon::Daemon;
use surfcast_service::logging::{self, LogLevel};

fn main() {
    println!("🌊 Surf Forecast Scraper");
    println!("========================\n");

    // Parse command-line arguments
    let args: Vec<String> = env::args().collect();
    let mut run_once = matches!(
        env::var("RUN_ONCE").as_deref(),
        Ok("1") | Ok("true") | Ok("TRUE")
    );
    let mut log_file: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--once" => {
                run_once = true;
                i += 1;
            }
            "--log-file" => {
                if i + 1 < args.len() {
                    log_file = Some(args[i + 1].clone());
                    i += 2;
                } else {
                    eprintln!("Error: --log-file requires a path");
                    std::process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                eprintln!("Usage: {} [--once] [--log-file PATH]", args[0]);
                std::process::exit(1);
            }
        }
    }

    logging::init_logger(LogLevel::Info, log_file.as_deref());

    // Load optional tuning; a malformed file is a configuration error
    let tuning = match config::load_tuning() {
        Ok(tuning) => tuning,
        Err(e) => {
            eprintln!("\n❌ Configuration error: {}\n", e);
            std::process::exit(1);
        }
    };

    let mut daemon = Daemon::with_tuning(tuning);

    // Initialize: validate secrets, database, and HTTP client
    println!("📊 Initializing daemon...");
    if let Err(e) = daemon.initialize() {
        eprintln!("\n❌ Initialization failed: {}\n", e);
        std::process::exit(1);
    }
    println!("✓ Daemon initialized\n");

    if run_once {
        println!("🔄 Running a single scrape pass...\n");
        match daemon.run_once() {
            Ok(summary) => {
                println!(
                    "\n✓ Run complete: {}/{} regions, {} rows written, {} row failures",
                    summary.regions_succeeded,
                    summary.regions_attempted,
                    summary.rows_written,
                    summary.row_failures
                );
            }
            Err(e) => {
                eprintln!("\n❌ Run failed: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    println!("🔄 Starting continuous scrape loop...");
    println!("   Poll interval: {} hours", daemon.tuning().poll_interval_hours);
    println!("   Press Ctrl+C to stop\n");

    if let Err(e) = daemon.run() {
        eprintln!("\n❌ Daemon error: {}", e);
        std::process::exit(1);
    }
}
