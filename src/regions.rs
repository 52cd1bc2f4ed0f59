/// Region registry for the Australian surf forecast scraper.
///
/// Defines the canonical list of surf regions this service can scrape, along
/// with the WillyWeather location id each region maps to. This is the single
/// source of truth for location ids — all other modules should reference
/// regions from here rather than hardcoding ids.
///
/// The registry is immutable configuration: it is intersected at run time
/// with the regions actually referenced by break rows in the database, and
/// regions present in the database but absent here are skipped with a
/// warning.

// ---------------------------------------------------------------------------
// Region metadata
// ---------------------------------------------------------------------------

/// Metadata for a single surf region.
pub struct Region {
    /// Region name as stored in the `surf_breaks.region` column.
    pub name: &'static str,
    /// WillyWeather location id for the region's forecast endpoint.
    pub location_id: u32,
    /// Australian state abbreviation.
    pub state: &'static str,
}

/// All surf regions known to the service, grouped by state.
///
/// Sources:
///   - Location ids: WillyWeather location search (api.willyweather.com.au)
///
/// Note: a few neighbouring regions intentionally share a location id
/// (e.g. Byron Bay / Far North Coast) — WillyWeather does not provide a
/// finer-grained marine location for them.
pub static REGION_REGISTRY: &[Region] = &[
    // New South Wales
    Region { name: "Sydney", location_id: 4950, state: "NSW" },
    Region { name: "Central Coast", location_id: 4934, state: "NSW" },
    Region { name: "Newcastle", location_id: 4988, state: "NSW" },
    Region { name: "Mid North Coast", location_id: 5049, state: "NSW" },
    Region { name: "Byron Bay", location_id: 4947, state: "NSW" },
    Region { name: "Wollongong", location_id: 17663, state: "NSW" },
    Region { name: "South Coast", location_id: 4923, state: "NSW" },
    Region { name: "Far North Coast", location_id: 4947, state: "NSW" },
    // Queensland
    Region { name: "Gold Coast", location_id: 4958, state: "QLD" },
    Region { name: "Sunshine Coast", location_id: 5238, state: "QLD" },
    Region { name: "Fraser Coast", location_id: 5251, state: "QLD" },
    Region { name: "Capricorn Coast", location_id: 4929, state: "QLD" },
    Region { name: "Mackay", location_id: 4983, state: "QLD" },
    Region { name: "Townsville", location_id: 5085, state: "QLD" },
    Region { name: "Cairns", location_id: 4929, state: "QLD" },
    // Victoria
    Region { name: "Melbourne", location_id: 4994, state: "VIC" },
    Region { name: "Torquay", location_id: 5083, state: "VIC" },
    Region { name: "Phillip Island", location_id: 5032, state: "VIC" },
    Region { name: "East Gippsland", location_id: 4948, state: "VIC" },
    Region { name: "West Coast", location_id: 5083, state: "VIC" },
    // South Australia
    Region { name: "Adelaide", location_id: 4909, state: "SA" },
    Region { name: "Fleurieu Peninsula", location_id: 5087, state: "SA" },
    Region { name: "Yorke Peninsula", location_id: 5095, state: "SA" },
    Region { name: "Eyre Peninsula", location_id: 4937, state: "SA" },
    Region { name: "Kangaroo Island", location_id: 4964, state: "SA" },
    // Western Australia
    Region { name: "Perth", location_id: 5026, state: "WA" },
    Region { name: "Margaret River", location_id: 4986, state: "WA" },
    Region { name: "Geraldton", location_id: 4957, state: "WA" },
    Region { name: "Esperance", location_id: 4951, state: "WA" },
    Region { name: "Albany", location_id: 4912, state: "WA" },
    Region { name: "Exmouth", location_id: 4952, state: "WA" },
    Region { name: "Broome", location_id: 4927, state: "WA" },
    // Tasmania
    Region { name: "Hobart", location_id: 4959, state: "TAS" },
    Region { name: "Launceston", location_id: 4975, state: "TAS" },
    Region { name: "North West Coast", location_id: 4944, state: "TAS" },
    Region { name: "East Coast", location_id: 5076, state: "TAS" },
];

/// Looks up a region by name. Returns `None` if the region is not configured.
pub fn find_region(name: &str) -> Option<&'static Region> {
    REGION_REGISTRY.iter().find(|r| r.name == name)
}

/// Returns the names of all configured regions.
pub fn all_region_names() -> Vec<&'static str> {
    REGION_REGISTRY.iter().map(|r| r.name).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
