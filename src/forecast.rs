/// Nearest-slot forecast normalization.
///
/// Turns the arbitrarily-shaped per-day entry lists produced by
/// `ingest::willyweather` into exactly one `SlotForecast` per canonical time
/// slot, by independently selecting the closest-in-time raw entry for each of
/// swell, wind, and tide.
///
/// All functions here are pure: no I/O, no mutation of input.

use crate::model::{
    DayForecast, SlotForecast, SwellEntry, TideEntry, TideTrend, TimedEntry, WindEntry, SLOT_GRID,
};
use serde::Deserialize;

/// Minimum height change (metres) across a slot window before the tide is
/// considered moving rather than stable.
const TIDE_TREND_THRESHOLD_M: f64 = 0.1;

/// Width of a canonical slot window in hours, used to pick the slot-end tide
/// sample for trend classification.
const SLOT_WIDTH_HOURS: u32 = 2;

// ---------------------------------------------------------------------------
// Entry selection
// ---------------------------------------------------------------------------

/// What to do when no entry in a list carries a usable timestamp.
///
/// Historical scraper variants disagreed here: some gave up, some guessed the
/// entry from its position in the list assuming roughly even spacing through
/// the day. `NoMatch` is the default; `Positional` reproduces the legacy
/// quartile heuristic for operators migrating from the old behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingTimestampPolicy {
    /// Report no match; the slot's fields for this variable become null.
    #[default]
    NoMatch,
    /// Guess by list position: with 4+ entries, bucket the target hour into
    /// quartiles; with fewer, take the first entry.
    Positional,
}

/// Returns the entry whose hour is numerically closest to `target_hour`.
///
/// Entries without a parseable timestamp are skipped. On exact distance ties
/// the first entry encountered in input order wins, so selection is stable
/// and deterministic. Returns `None` for an empty list or a list in which no
/// entry carries an hour.
pub fn find_closest<T: TimedEntry>(entries: &[T], target_hour: u32) -> Option<&T> {
    let mut best: Option<(&T, i64)> = None;

    for entry in entries {
        let Some(hour) = entry.hour() else { continue };
        let distance = (hour as i64 - target_hour as i64).abs();

        // Strictly-less keeps the first entry on ties. Iterator::min_by_key
        // would return the last minimal element, which breaks determinism.
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((entry, distance)),
        }
    }

    best.map(|(entry, _)| entry)
}

/// Selects the raw entry for a slot, applying the missing-timestamp policy.
///
/// When at least one entry carries an hour this is exactly `find_closest`;
/// the policy only matters for lists where every timestamp was unparseable.
pub fn select_entry<T: TimedEntry>(
    entries: &[T],
    target_hour: u32,
    policy: MissingTimestampPolicy,
) -> Option<&T> {
    if entries.iter().any(|e| e.hour().is_some()) {
        return find_closest(entries, target_hour);
    }

    match policy {
        MissingTimestampPolicy::NoMatch => None,
        MissingTimestampPolicy::Positional => positional_fallback(entries, target_hour),
    }
}

/// Legacy positional heuristic: assume entries are roughly evenly distributed
/// through the day and bucket the target hour into quartiles.
fn positional_fallback<T: TimedEntry>(entries: &[T], target_hour: u32) -> Option<&T> {
    if entries.len() >= 4 {
        let index = match target_hour {
            0..=8 => 0,
            9..=12 => 1,
            13..=16 => 2,
            _ => 3,
        };
        return entries.get(index);
    }

    entries.first()
}

// ---------------------------------------------------------------------------
// Tide trend classification
// ---------------------------------------------------------------------------

/// Classifies tide movement from slot-start to slot-end height.
pub fn classify_tide_trend(start_height_m: f64, end_height_m: f64) -> TideTrend {
    let delta = end_height_m - start_height_m;
    if delta > TIDE_TREND_THRESHOLD_M {
        TideTrend::Rising
    } else if delta < -TIDE_TREND_THRESHOLD_M {
        TideTrend::Falling
    } else {
        TideTrend::Stable
    }
}

/// Derives the tide trend for one slot, when both endpoints are obtainable.
///
/// Slot-end is the sample nearest `slot_hour + 2`. If both lookups resolve to
/// the same raw entry only one height is actually known, and the trend is
/// unknown (`None`). Positional fallback is never applied here — guessed
/// endpoints would make the trend meaningless.
fn tide_trend_for_slot(tide_entries: &[TideEntry], slot_hour: u32) -> Option<TideTrend> {
    let start = find_closest(tide_entries, slot_hour)?;
    let end = find_closest(tide_entries, slot_hour + SLOT_WIDTH_HOURS)?;

    if std::ptr::eq(start, end) {
        return None;
    }

    match (start.height_m, end.height_m) {
        (Some(start_h), Some(end_h)) => Some(classify_tide_trend(start_h, end_h)),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Slot synthesis
// ---------------------------------------------------------------------------

/// Produces exactly one `SlotForecast` per canonical slot for one day.
///
/// Each of the three variables is matched independently; a variable with no
/// usable entry yields null fields rather than aborting the slot. The result
/// always has `SLOT_GRID.len()` records, even for a day with zero entries.
pub fn synthesize(day: &DayForecast, policy: MissingTimestampPolicy) -> Vec<SlotForecast> {
    SLOT_GRID
        .iter()
        .map(|slot| {
            let swell: Option<&SwellEntry> = select_entry(&day.swell, slot.hour, policy);
            let wind: Option<&WindEntry> = select_entry(&day.wind, slot.hour, policy);
            let tide: Option<&TideEntry> = select_entry(&day.tide, slot.hour, policy);

            SlotForecast {
                forecast_date: day.date,
                slot: slot.label,
                swell_height_m: swell.and_then(|e| e.height_m),
                swell_direction_deg: swell.and_then(|e| e.direction_deg),
                swell_period_s: swell.and_then(|e| e.period_s),
                wind_speed_kn: wind.and_then(|e| e.speed_kn),
                wind_direction_deg: wind.and_then(|e| e.direction_deg),
                wind_gust_kn: wind.and_then(|e| e.gust_kn),
                tide_height_m: tide.and_then(|e| e.height_m),
                tide_type: tide.and_then(|e| e.kind.clone()),
                tide_trend: tide_trend_for_slot(&day.tide, slot.hour),
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
