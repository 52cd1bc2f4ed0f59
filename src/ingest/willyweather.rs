/// WillyWeather marine forecast API client.
///
/// Handles URL construction and JSON response parsing for the per-location
/// weather endpoint:
///   https://api.willyweather.com.au/v2/{api key}/locations/{id}/weather.json
///
/// The endpoint returns a `forecasts` object keyed by category (swell, wind,
/// tides), each holding a `days` list of timestamped `entries`. See
/// `fixtures.rs` for annotated examples of the response structure.

use crate::model::{DayForecast, SwellEntry, TideEntry, WillyError, WindEntry};
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

const WILLY_BASE_URL: &str = "https://api.willyweather.com.au/v2";

/// Forecast categories requested on every call.
const FORECAST_CATEGORIES: &str = "swell,wind,tides";

// ---------------------------------------------------------------------------
// Serde structures for WillyWeather JSON deserialization
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct WeatherResponse {
    #[serde(default)]
    forecasts: Forecasts,
}

#[derive(Deserialize, Default)]
struct Forecasts {
    swell: Option<Section<RawSwellEntry>>,
    wind: Option<Section<RawWindEntry>>,
    tides: Option<Section<RawTideEntry>>,
}

#[derive(Deserialize)]
struct Section<E> {
    #[serde(default = "Vec::new")]
    days: Vec<Day<E>>,
}

#[derive(Deserialize)]
struct Day<E> {
    #[serde(default, rename = "dateTime")]
    date_time: Option<String>,
    #[serde(default = "Vec::new")]
    entries: Vec<E>,
}

#[derive(Deserialize)]
struct RawSwellEntry {
    #[serde(default, rename = "dateTime")]
    date_time: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    height: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    direction: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    period: Option<f64>,
}

#[derive(Deserialize)]
struct RawWindEntry {
    #[serde(default, rename = "dateTime")]
    date_time: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    speed: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    direction: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    gust: Option<f64>,
}

#[derive(Deserialize)]
struct RawTideEntry {
    #[serde(default, rename = "dateTime")]
    date_time: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    height: Option<f64>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
}

/// Accepts a JSON number, a numeric string, or anything else as null.
///
/// WillyWeather is not consistent about numeric typing across forecast
/// categories, and a single bad value must not sink the whole payload.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }))
}

// ---------------------------------------------------------------------------
// Timestamp handling
// ---------------------------------------------------------------------------

/// Parses a WillyWeather timestamp. The API normally uses local-time
/// `"YYYY-MM-DD HH:MM:SS"`; some payload variants use ISO 8601 with an
/// offset. Returns `None` for anything else.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    None
}

fn entry_hour(date_time: Option<&str>) -> Option<u32> {
    date_time.and_then(parse_timestamp).map(|dt| dt.hour())
}

// ---------------------------------------------------------------------------
// URL construction
// ---------------------------------------------------------------------------

/// Builds the weather forecast URL for one location.
///
/// Always requests the swell, wind, and tides categories. `days` controls
/// how many forecast days the API returns; `start_date` is the first day
/// requested (normally today).
pub fn build_weather_url(api_key: &str, location_id: u32, days: u32, start_date: NaiveDate) -> String {
    format!(
        "{}/{}/locations/{}/weather.json?forecasts={}&days={}&startDate={}",
        WILLY_BASE_URL,
        api_key,
        location_id,
        FORECAST_CATEGORIES,
        days,
        start_date.format("%Y-%m-%d"),
    )
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

/// Parses a WillyWeather JSON response body into per-day entry lists.
///
/// Days are matched across categories by calendar date, so the result holds
/// one `DayForecast` per date present anywhere in the payload. A day whose
/// date cannot be determined (missing day stamp and no parseable entry
/// timestamp) is skipped; an entry with an unparseable timestamp is kept
/// with `hour = None` so the slot matcher can decide what to do with it.
///
/// # Errors
/// - `WillyError::ParseError` — malformed or unexpected JSON structure.
/// - `WillyError::NoDataAvailable` — structurally valid response with no
///   usable forecast days in any category.
pub fn parse_weather_response(json: &str) -> Result<Vec<DayForecast>, WillyError> {
    let response: WeatherResponse = serde_json::from_str(json)
        .map_err(|e| WillyError::ParseError(format!("JSON deserialization failed: {}", e)))?;

    let mut days: BTreeMap<NaiveDate, DayForecast> = BTreeMap::new();

    if let Some(section) = response.forecasts.swell {
        for day in section.days {
            let Some(date) = day_date(day.date_time.as_deref(), day.entries.iter().map(|e| e.date_time.as_deref()))
            else {
                continue;
            };
            let slot = days.entry(date).or_insert_with(|| DayForecast { date, ..Default::default() });
            for raw in day.entries {
                slot.swell.push(SwellEntry {
                    hour: entry_hour(raw.date_time.as_deref()),
                    height_m: raw.height,
                    direction_deg: raw.direction,
                    period_s: raw.period,
                });
            }
        }
    }

    if let Some(section) = response.forecasts.wind {
        for day in section.days {
            let Some(date) = day_date(day.date_time.as_deref(), day.entries.iter().map(|e| e.date_time.as_deref()))
            else {
                continue;
            };
            let slot = days.entry(date).or_insert_with(|| DayForecast { date, ..Default::default() });
            for raw in day.entries {
                slot.wind.push(WindEntry {
                    hour: entry_hour(raw.date_time.as_deref()),
                    speed_kn: raw.speed,
                    direction_deg: raw.direction,
                    gust_kn: raw.gust,
                });
            }
        }
    }

    if let Some(section) = response.forecasts.tides {
        for day in section.days {
            let Some(date) = day_date(day.date_time.as_deref(), day.entries.iter().map(|e| e.date_time.as_deref()))
            else {
                continue;
            };
            let slot = days.entry(date).or_insert_with(|| DayForecast { date, ..Default::default() });
            for raw in day.entries {
                slot.tide.push(TideEntry {
                    hour: entry_hour(raw.date_time.as_deref()),
                    height_m: raw.height,
                    kind: raw.kind,
                });
            }
        }
    }

    if days.is_empty() {
        return Err(WillyError::NoDataAvailable(
            "response contained no forecast days".to_string(),
        ));
    }

    Ok(days.into_values().collect())
}

/// Determines a day's calendar date from its day stamp, falling back to the
/// first parseable entry timestamp.
fn day_date<'a>(
    day_stamp: Option<&str>,
    entry_stamps: impl Iterator<Item = Option<&'a str>>,
) -> Option<NaiveDate> {
    if let Some(dt) = day_stamp.and_then(parse_timestamp) {
        return Some(dt.date());
    }
    for stamp in entry_stamps {
        if let Some(dt) = stamp.and_then(parse_timestamp) {
            return Some(dt.date());
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Fetch
// ---------------------------------------------------------------------------

/// Fetches and parses the forecast for one location.
///
/// # Errors
/// - `WillyError::RequestFailed` — network failure or timeout.
/// - `WillyError::HttpError` — non-2xx status from the API.
/// - plus everything `parse_weather_response` can return.
pub fn fetch_forecast(
    client: &reqwest::blocking::Client,
    api_key: &str,
    location_id: u32,
    days: u32,
    start_date: NaiveDate,
) -> Result<Vec<DayForecast>, WillyError> {
    let url = build_weather_url(api_key, location_id, days, start_date);

    let response = client
        .get(&url)
        .header("Accept", "application/json")
        .send()
        .map_err(|e| WillyError::RequestFailed(e.to_string()))?;

    if !response.status().is_success() {
        return Err(WillyError::HttpError(response.status().as_u16()));
    }

    let body = response
        .text()
        .map_err(|e| WillyError::RequestFailed(e.to_string()))?;

    parse_weather_response(&body)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
