/// surfcast_service: Australian surf forecast scraping service.
///
/// # Module structure
///
/// ```text
/// surfcast_service
/// ├── model       — shared data types (SlotForecast, SwellEntry, WillyError, …)
/// ├── regions     — surf region registry with WillyWeather location ids
/// ├── config      — env secrets + optional scraper.toml tuning
/// ├── logging     — structured level/source/region logging
/// ├── db          — connection validation and break/region queries
/// ├── ingest
/// │   ├── willyweather — WillyWeather API: URL construction + JSON parsing
/// │   └── fixtures (test only) — representative API response payloads
/// ├── forecast    — nearest-slot normalization (entry finder, slot synthesis)
/// ├── writer      — per-break fan-out upserts into forecast_data
/// └── daemon      — region driver loop (startup, run-once, periodic runs)
/// ```

/// Public modules
pub mod config;
pub mod daemon;
pub mod db;
pub mod forecast;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod regions;
pub mod writer;
