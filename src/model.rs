/// Core data types for the surf forecast scraper service.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no I/O and no external service dependencies — only types and
/// the canonical slot grid.

// ---------------------------------------------------------------------------
// Canonical time slots
// ---------------------------------------------------------------------------

/// One of the fixed 2-hour forecast windows used as storage granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    /// Label stored in the `forecast_time` column, e.g. "6am".
    pub label: &'static str,
    /// Representative hour of day (24h) used for nearest-entry matching.
    pub hour: u32,
}

/// The canonical 7-slot daily grid, shared by all regions.
///
/// Every normalized forecast record carries a label from this table; the
/// database uniqueness key is (break_id, forecast_date, forecast_time).
pub static SLOT_GRID: &[TimeSlot] = &[
    TimeSlot { label: "6am", hour: 6 },
    TimeSlot { label: "8am", hour: 8 },
    TimeSlot { label: "10am", hour: 10 },
    TimeSlot { label: "12pm", hour: 12 },
    TimeSlot { label: "2pm", hour: 14 },
    TimeSlot { label: "4pm", hour: 16 },
    TimeSlot { label: "6pm", hour: 18 },
];

// ---------------------------------------------------------------------------
// Raw forecast entries
// ---------------------------------------------------------------------------

/// Anything carrying an hour-of-day derived from its source timestamp.
///
/// `hour()` is `None` when the entry's timestamp was absent or unparseable;
/// such entries are skipped by nearest-hour matching.
pub trait TimedEntry {
    fn hour(&self) -> Option<u32>;
}

/// One timestamped swell observation from a WillyWeather forecast day.
#[derive(Debug, Clone, PartialEq)]
pub struct SwellEntry {
    pub hour: Option<u32>,
    pub height_m: Option<f64>,
    pub direction_deg: Option<f64>,
    pub period_s: Option<f64>,
}

/// One timestamped wind observation.
#[derive(Debug, Clone, PartialEq)]
pub struct WindEntry {
    pub hour: Option<u32>,
    pub speed_kn: Option<f64>,
    pub direction_deg: Option<f64>,
    pub gust_kn: Option<f64>,
}

/// One timestamped tide observation. `kind` is "high" or "low" when present.
#[derive(Debug, Clone, PartialEq)]
pub struct TideEntry {
    pub hour: Option<u32>,
    pub height_m: Option<f64>,
    pub kind: Option<String>,
}

impl TimedEntry for SwellEntry {
    fn hour(&self) -> Option<u32> {
        self.hour
    }
}

impl TimedEntry for WindEntry {
    fn hour(&self) -> Option<u32> {
        self.hour
    }
}

impl TimedEntry for TideEntry {
    fn hour(&self) -> Option<u32> {
        self.hour
    }
}

/// All raw entries for one calendar day, grouped per forecast category.
///
/// Produced by `ingest::willyweather::parse_weather_response`. Any of the
/// three lists may be empty when the API omitted that category for the day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayForecast {
    pub date: chrono::NaiveDate,
    pub swell: Vec<SwellEntry>,
    pub wind: Vec<WindEntry>,
    pub tide: Vec<TideEntry>,
}

// ---------------------------------------------------------------------------
// Normalized output
// ---------------------------------------------------------------------------

/// Direction of tide movement across a slot's 2-hour window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TideTrend {
    Rising,
    Falling,
    Stable,
}

impl TideTrend {
    /// Lowercase form stored in the `tide_trend` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            TideTrend::Rising => "rising",
            TideTrend::Falling => "falling",
            TideTrend::Stable => "stable",
        }
    }
}

/// One normalized forecast record: a single canonical slot on a single day,
/// not yet keyed by break (the fan-out writer replicates it per break).
///
/// Every field except date and slot is nullable — any source variable may be
/// absent for a given slot, and partial records are stored as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotForecast {
    pub forecast_date: chrono::NaiveDate,
    pub slot: &'static str,
    pub swell_height_m: Option<f64>,
    pub swell_direction_deg: Option<f64>,
    pub swell_period_s: Option<f64>,
    pub wind_speed_kn: Option<f64>,
    pub wind_direction_deg: Option<f64>,
    pub wind_gust_kn: Option<f64>,
    pub tide_height_m: Option<f64>,
    pub tide_type: Option<String>,
    pub tide_trend: Option<TideTrend>,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when fetching or processing WillyWeather data.
#[derive(Debug, PartialEq)]
pub enum WillyError {
    /// The HTTP request could not be completed (network failure, timeout).
    RequestFailed(String),
    /// Non-2xx HTTP response from the WillyWeather API.
    HttpError(u16),
    /// The response body could not be deserialized.
    ParseError(String),
    /// The response parsed but contained no usable forecast days.
    NoDataAvailable(String),
}

impl std::fmt::Display for WillyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WillyError::RequestFailed(msg) => write!(f, "Request failed: {}", msg),
            WillyError::HttpError(code) => write!(f, "HTTP error: {}", code),
            WillyError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            WillyError::NoDataAvailable(msg) => write!(f, "No data available: {}", msg),
        }
    }
}

impl std::error::Error for WillyError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_grid_has_seven_slots() {
        assert_eq!(SLOT_GRID.len(), 7);
    }

    #[test]
    fn test_slot_grid_labels_and_hours_match() {
        let expected = [
            ("6am", 6),
            ("8am", 8),
            ("10am", 10),
            ("12pm", 12),
            ("2pm", 14),
            ("4pm", 16),
            ("6pm", 18),
        ];
        for (slot, (label, hour)) in SLOT_GRID.iter().zip(expected.iter()) {
            assert_eq!(slot.label, *label);
            assert_eq!(slot.hour, *hour);
        }
    }

    #[test]
    fn test_slot_grid_hours_are_strictly_ascending() {
        // Out-of-order slots would break tide trend derivation, which
        // assumes slot-end = slot-start + 2 hours.
        for pair in SLOT_GRID.windows(2) {
            assert!(pair[0].hour < pair[1].hour);
            assert_eq!(pair[1].hour - pair[0].hour, 2);
        }
    }

    #[test]
    fn test_slot_grid_labels_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for slot in SLOT_GRID {
            assert!(seen.insert(slot.label), "duplicate slot label '{}'", slot.label);
        }
    }

    #[test]
    fn test_tide_trend_storage_form() {
        assert_eq!(TideTrend::Rising.as_str(), "rising");
        assert_eq!(TideTrend::Falling.as_str(), "falling");
        assert_eq!(TideTrend::Stable.as_str(), "stable");
    }

    #[test]
    fn test_willy_error_display() {
        assert_eq!(WillyError::HttpError(503).to_string(), "HTTP error: 503");
        assert!(WillyError::NoDataAvailable("no days".into())
            .to_string()
            .contains("no days"));
    }
}
