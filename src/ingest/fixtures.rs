/// Test fixtures: representative JSON payloads from the WillyWeather API.
///
/// These fixtures are structurally complete but truncated to the minimum
/// needed to exercise the parser. They reflect the real envelope returned by:
///   https://api.willyweather.com.au/v2/{key}/locations/{id}/weather.json
///
/// WillyWeather response shape:
///   response.forecasts.{swell|wind|tides}
///     .days[]
///       .dateTime        — local-time day stamp "YYYY-MM-DD 00:00:00"
///       .entries[]
///         .dateTime      — local-time entry stamp
///         swell: height (m), period (s), direction (deg)
///         wind:  speed (kn), direction (deg)
///         tides: height (m), type ("high" | "low")
///
/// Note: numeric fields occasionally arrive as quoted strings; parsers must
/// tolerate that without failing the whole payload.

/// Single day for Wollongong with all three categories. Swell entries sit at
/// hours 5/9/13/17 so nearest-slot selection is observable: slot 6am should
/// pick the hour-5 entry, slot 8am the hour-9 entry.
#[cfg(test)]
pub(crate) fn fixture_wollongong_json() -> &'static str {
    r#"{
      "location": { "id": 17663, "name": "Wollongong", "state": "NSW" },
      "forecasts": {
        "swell": {
          "days": [{
            "dateTime": "2024-05-01 00:00:00",
            "entries": [
              { "dateTime": "2024-05-01 05:00:00", "height": 1.0, "period": 11.0, "direction": 160.0 },
              { "dateTime": "2024-05-01 09:00:00", "height": 1.5, "period": 10.5, "direction": 165.0 },
              { "dateTime": "2024-05-01 13:00:00", "height": 2.0, "period": 10.0, "direction": 170.0 },
              { "dateTime": "2024-05-01 17:00:00", "height": 1.2, "period": 9.5, "direction": 175.0 }
            ]
          }],
          "units": { "height": "m", "period": "sec" }
        },
        "wind": {
          "days": [{
            "dateTime": "2024-05-01 00:00:00",
            "entries": [
              { "dateTime": "2024-05-01 08:00:00", "speed": 8.0, "direction": 220.0 },
              { "dateTime": "2024-05-01 14:00:00", "speed": 14.0, "direction": 230.0 }
            ]
          }],
          "units": { "speed": "knots" }
        },
        "tides": {
          "days": [{
            "dateTime": "2024-05-01 00:00:00",
            "entries": [
              { "dateTime": "2024-05-01 06:12:00", "height": 1.6, "type": "high" },
              { "dateTime": "2024-05-01 12:31:00", "height": 0.4, "type": "low" }
            ]
          }],
          "units": { "height": "m" }
        }
      }
    }"#
}

/// Two forecast days, swell only. Tests per-date grouping across days.
#[cfg(test)]
pub(crate) fn fixture_two_day_json() -> &'static str {
    r#"{
      "forecasts": {
        "swell": {
          "days": [
            {
              "dateTime": "2024-05-01 00:00:00",
              "entries": [
                { "dateTime": "2024-05-01 08:00:00", "height": 1.4, "period": 10.0, "direction": 150.0 }
              ]
            },
            {
              "dateTime": "2024-05-02 00:00:00",
              "entries": [
                { "dateTime": "2024-05-02 08:00:00", "height": 1.8, "period": 12.0, "direction": 155.0 }
              ]
            }
          ]
        }
      }
    }"#
}

/// Swell present, wind and tides sections absent entirely. An inland-ish
/// location can come back like this; the wind and tide lists must simply be
/// empty rather than failing the parse.
#[cfg(test)]
pub(crate) fn fixture_swell_only_json() -> &'static str {
    r#"{
      "forecasts": {
        "swell": {
          "days": [{
            "dateTime": "2024-05-01 00:00:00",
            "entries": [
              { "dateTime": "2024-05-01 10:00:00", "height": 0.9, "period": 8.0, "direction": 140.0 }
            ]
          }]
        }
      }
    }"#
}

/// Numeric fields as quoted strings plus one outright non-numeric value.
#[cfg(test)]
pub(crate) fn fixture_string_numbers_json() -> &'static str {
    r#"{
      "forecasts": {
        "swell": {
          "days": [{
            "dateTime": "2024-05-01 00:00:00",
            "entries": [
              { "dateTime": "2024-05-01 08:00:00", "height": "1.5", "period": "10", "direction": "variable" }
            ]
          }]
        }
      }
    }"#
}

/// One entry with a garbage timestamp alongside a valid one. The bad entry
/// is kept (its values may still be usable under a positional policy) but
/// carries no hour.
#[cfg(test)]
pub(crate) fn fixture_bad_entry_timestamp_json() -> &'static str {
    r#"{
      "forecasts": {
        "swell": {
          "days": [{
            "dateTime": "2024-05-01 00:00:00",
            "entries": [
              { "dateTime": "not-a-timestamp", "height": 1.1, "period": 9.0, "direction": 150.0 },
              { "dateTime": "2024-05-01 13:00:00", "height": 1.9, "period": 10.0, "direction": 160.0 }
            ]
          }]
        }
      }
    }"#
}

/// First day has no day stamp and no parseable entry timestamps, so its date
/// cannot be determined and it is dropped; the second day is normal.
#[cfg(test)]
pub(crate) fn fixture_undated_day_json() -> &'static str {
    r#"{
      "forecasts": {
        "swell": {
          "days": [
            {
              "entries": [
                { "height": 1.0, "period": 9.0, "direction": 150.0 }
              ]
            },
            {
              "dateTime": "2024-05-02 00:00:00",
              "entries": [
                { "dateTime": "2024-05-02 08:00:00", "height": 1.3, "period": 10.0, "direction": 155.0 }
              ]
            }
          ]
        }
      }
    }"#
}

/// Structurally valid response with no forecasts object at all — what the
/// API returns for an unknown or non-marine location id.
#[cfg(test)]
pub(crate) fn fixture_no_forecasts_json() -> &'static str {
    r#"{
      "location": { "id": 999999, "name": "Nowhere", "state": "NSW" }
    }"#
}
