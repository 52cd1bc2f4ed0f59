/// Fan-out writer: replicates region-level forecast records across every
/// break in the region as upserted rows.
///
/// The uniqueness key is (break_id, forecast_date, forecast_time); a later
/// write with the same key fully replaces the earlier row, so re-running the
/// scraper refreshes forecasts instead of duplicating them.

use crate::db;
use crate::logging::{self, DataSource};
use crate::model::SlotForecast;
use postgres::Client;
use std::error::Error;

/// Outcome of one region's fan-out write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteSummary {
    pub rows_written: usize,
    pub failures: usize,
}

const UPSERT_FORECAST: &str = "\
    INSERT INTO forecast_data \
    (break_id, forecast_date, forecast_time, \
     swell_height, swell_direction, swell_period, \
     wind_speed, wind_direction, wind_gust, \
     tide_height, tide_type, tide_trend) \
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
    ON CONFLICT (break_id, forecast_date, forecast_time) DO UPDATE SET \
        swell_height = EXCLUDED.swell_height, \
        swell_direction = EXCLUDED.swell_direction, \
        swell_period = EXCLUDED.swell_period, \
        wind_speed = EXCLUDED.wind_speed, \
        wind_direction = EXCLUDED.wind_direction, \
        wind_gust = EXCLUDED.wind_gust, \
        tide_height = EXCLUDED.tide_height, \
        tide_type = EXCLUDED.tide_type, \
        tide_trend = EXCLUDED.tide_trend";

/// Upserts every (break × record) pair for a region.
///
/// Per-row failures are counted and logged but never abort the batch. A
/// region with no breaks is a logged no-op, not an error — breaks may be
/// created after their region starts appearing in forecasts.
pub fn write_forecasts(
    client: &mut Client,
    region: &str,
    records: &[SlotForecast],
) -> Result<WriteSummary, Box<dyn Error>> {
    let break_ids = db::break_ids_for_region(client, region)?;

    if break_ids.is_empty() {
        logging::warn(DataSource::Database, Some(region), "No breaks found for region; nothing to write");
        return Ok(WriteSummary::default());
    }

    let mut summary = WriteSummary::default();

    for break_id in &break_ids {
        for record in records {
            let tide_trend = record.tide_trend.map(|t| t.as_str());

            let result = client.execute(
                UPSERT_FORECAST,
                &[
                    break_id,
                    &record.forecast_date,
                    &record.slot,
                    &record.swell_height_m,
                    &record.swell_direction_deg,
                    &record.swell_period_s,
                    &record.wind_speed_kn,
                    &record.wind_direction_deg,
                    &record.wind_gust_kn,
                    &record.tide_height_m,
                    &record.tide_type,
                    &tide_trend,
                ],
            );

            match result {
                Ok(_) => summary.rows_written += 1,
                Err(e) => {
                    summary.failures += 1;
                    logging::error(
                        DataSource::Database,
                        Some(region),
                        &format!(
                            "Upsert failed for break {} at {} {}: {}",
                            break_id, record.forecast_date, record.slot, e
                        ),
                    );
                }
            }
        }
    }

    logging::info(
        DataSource::Database,
        Some(region),
        &format!(
            "Wrote {} forecast rows across {} breaks ({} failures)",
            summary.rows_written,
            break_ids.len(),
            summary.failures
        ),
    );

    Ok(summary)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
