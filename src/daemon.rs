/// Core daemon implementation for the surf forecast scraper.
///
/// This module implements the region driver that:
/// 1. Validates database connectivity and required tables on startup
/// 2. Resolves which regions to scrape (break rows ∩ static registry)
/// 3. Fetches, normalizes, and fan-out writes one region at a time
/// 4. Applies a fixed inter-request delay to respect API rate limits
/// 5. Repeats on a fixed period in daemon mode
///
/// Region processing is strictly sequential and single-threaded; a region's
/// failure is logged and the driver proceeds to the next region.

use crate::config::{self, Tuning};
use crate::db;
use crate::forecast;
use crate::ingest::willyweather;
use crate::logging::{self, DataSource};
use crate::regions::{self, Region};
use crate::writer::{self, WriteSummary};
use chrono::{Local, Utc};
use postgres::Client;
use std::error::Error;

// ---------------------------------------------------------------------------
// Run summary
// ---------------------------------------------------------------------------

/// Counters for one complete scrape run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub regions_attempted: usize,
    pub regions_succeeded: usize,
    pub rows_written: usize,
    pub row_failures: usize,
}

// ---------------------------------------------------------------------------
// Daemon state
// ---------------------------------------------------------------------------

/// Main daemon state.
pub struct Daemon {
    tuning: Tuning,
    api_key: Option<String>,
    client: Option<Client>,
    http: Option<reqwest::blocking::Client>,
}

impl Daemon {
    /// Create a new daemon instance with default tuning.
    pub fn new() -> Self {
        Self::with_tuning(Tuning::default())
    }

    /// Create a daemon with custom tuning.
    pub fn with_tuning(tuning: Tuning) -> Self {
        Self {
            tuning,
            api_key: None,
            client: None,
            http: None,
        }
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Initialize daemon: load secrets, validate the database, build the
    /// HTTP client. Any failure here is fatal to the process.
    pub fn initialize(&mut self) -> Result<(), Box<dyn Error>> {
        let secrets = config::load_secrets()?;

        let client = db::connect_and_verify(&secrets.database_url, &["surf_breaks", "forecast_data"])?;
        self.client = Some(client);

        let http = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(self.tuning.http_timeout_secs))
            .build()?;
        self.http = Some(http);

        self.api_key = Some(secrets.api_key);

        Ok(())
    }

    /// Resolve the regions to scrape this run: the regions referenced by
    /// break rows, intersected with the static registry. Database regions
    /// without a configured location are skipped with a warning.
    fn regions_to_scrape(&mut self) -> Result<Vec<&'static Region>, Box<dyn Error>> {
        let client = self.client.as_mut().ok_or("Daemon not initialized")?;

        let in_use = db::regions_in_use(client)?;
        let mut resolved = Vec::new();

        for name in &in_use {
            match regions::find_region(name) {
                Some(region) => resolved.push(region),
                None => logging::warn(
                    DataSource::System,
                    Some(name),
                    "Region referenced by breaks has no configured location id; skipping",
                ),
            }
        }

        Ok(resolved)
    }

    /// Fetch, normalize, and write one region. Returns the write summary.
    pub fn scrape_region(&mut self, region: &Region) -> Result<WriteSummary, Box<dyn Error>> {
        let api_key = self.api_key.as_deref().ok_or("Daemon not initialized")?;
        let http = self.http.as_ref().ok_or("Daemon not initialized")?;

        logging::info(
            DataSource::Willy,
            Some(region.name),
            &format!("Fetching forecast (location id {})", region.location_id),
        );

        let start_date = Local::now().date_naive();
        let days = willyweather::fetch_forecast(
            http,
            api_key,
            region.location_id,
            self.tuning.forecast_days,
            start_date,
        )?;

        let mut records = Vec::new();
        for day in &days {
            records.extend(forecast::synthesize(day, self.tuning.missing_timestamp_policy));
        }

        logging::info(
            DataSource::Willy,
            Some(region.name),
            &format!("Normalized {} records across {} days", records.len(), days.len()),
        );

        let client = self.client.as_mut().ok_or("Daemon not initialized")?;
        writer::write_forecasts(client, region.name, &records)
    }

    /// One complete scrape pass over every resolvable region.
    ///
    /// A failure processing one region is logged and the loop continues;
    /// only the inability to list regions at all aborts the run.
    pub fn run_once(&mut self) -> Result<RunSummary, Box<dyn Error>> {
        let regions = self.regions_to_scrape()?;
        let mut summary = RunSummary::default();

        if regions.is_empty() {
            logging::warn(DataSource::System, None, "No scrapeable regions found");
            return Ok(summary);
        }

        for region in regions {
            summary.regions_attempted += 1;

            match self.scrape_region(region) {
                Ok(write) => {
                    summary.regions_succeeded += 1;
                    summary.rows_written += write.rows_written;
                    summary.row_failures += write.failures;
                }
                Err(e) => {
                    logging::log_api_failure(region.name, "scrape", e.as_ref());
                }
            }

            // Courtesy delay between per-region API calls
            std::thread::sleep(std::time::Duration::from_secs(self.tuning.request_delay_secs));
        }

        logging::log_run_summary(
            summary.regions_attempted,
            summary.regions_succeeded,
            summary.rows_written,
            summary.row_failures,
        );

        Ok(summary)
    }

    /// Main daemon loop (runs indefinitely).
    pub fn run(&mut self) -> Result<(), Box<dyn Error>> {
        logging::info(
            DataSource::System,
            None,
            &format!("Starting scrape loop, poll interval {} hours", self.tuning.poll_interval_hours),
        );

        loop {
            let start = Utc::now();

            if let Err(e) = self.run_once() {
                logging::error(DataSource::System, None, &format!("Run failed: {}", e));
            }

            // Sleep out the remainder of the poll interval
            let elapsed = (Utc::now() - start).num_seconds();
            let sleep_seconds = (self.tuning.poll_interval_hours * 3600) as i64 - elapsed;

            if sleep_seconds > 0 {
                std::thread::sleep(std::time::Duration::from_secs(sleep_seconds as u64));
            }
        }
    }
}

impl Default for Daemon {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
