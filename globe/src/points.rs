//! Geographic data points and the country-centroid lookup table.
//!
//! The table is embedded with `include_str!` so there is no runtime IO.
//! Unknown country codes fall back to coordinate (0, 0) instead of
//! being dropped: silently losing data for an unmapped code is worse
//! than a dot on the null island.

use std::collections::HashMap;
use std::sync::OnceLock;

use globe_geo::{clamp_lat, wrap_lon};

/// Embedded centroid table, lines of `CODE lat lon`.
pub const COUNTRY_TABLE_STR: &str = include_str!("../assets/countries.tbl");

/// One observed country with its share of total observations.
///
/// Immutable per frame; sequences of these are supplied by the caller
/// and only read during the paint pass.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoPoint {
    /// Two-letter identifier, the centroid-table lookup key.
    pub country_code: String,
    /// Display label.
    pub country_name: String,
    /// Absolute observation count.
    pub count: u64,
    /// Share of total observations, 0.0..=100.0.
    pub percentage: f32,
    /// Degrees, clamped to [-90, 90].
    pub latitude: f32,
    /// Degrees, wrapped into [-180, 180).
    pub longitude: f32,
}

impl GeoPoint {
    /// Build a point for `code`, resolving coordinates from the
    /// embedded table. Unknown codes land at (0, 0).
    #[must_use]
    pub fn for_country(code: &str, name: &str, count: u64, percentage: f32) -> Self {
        let (lat, lon) = country_centroid(code).unwrap_or((0.0, 0.0));
        Self::at(code, name, count, percentage, lat, lon)
    }

    /// Build a point at explicit coordinates. Degrees and percentage
    /// are sanitized so one malformed record cannot corrupt the frame.
    #[must_use]
    pub fn at(code: &str, name: &str, count: u64, percentage: f32, lat: f32, lon: f32) -> Self {
        let percentage = if percentage.is_finite() { percentage.clamp(0.0, 100.0) } else { 0.0 };
        Self {
            country_code: code.to_ascii_uppercase(),
            country_name: name.to_string(),
            count,
            percentage,
            latitude: clamp_lat(lat),
            longitude: wrap_lon(lon),
        }
    }
}

/// Parse a centroid table.
///
/// Format: lines of `CODE lat lon`; blank lines and `#` comments are
/// ignored. Coordinates are sanitized on the way in.
pub fn parse_table(src: &str) -> Result<HashMap<String, (f32, f32)>, String> {
    let mut out = HashMap::new();
    for (lineno, raw) in src.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let toks: Vec<&str> = line.split_whitespace().collect();
        if toks.len() != 3 {
            return Err(format!(
                "countries.tbl: line {} expected 3 columns, got {}",
                lineno + 1,
                toks.len()
            ));
        }
        let lat: f32 = toks[1]
            .parse()
            .map_err(|_| format!("countries.tbl: line {} bad lat '{}'", lineno + 1, toks[1]))?;
        let lon: f32 = toks[2]
            .parse()
            .map_err(|_| format!("countries.tbl: line {} bad lon '{}'", lineno + 1, toks[2]))?;
        out.insert(toks[0].to_ascii_uppercase(), (clamp_lat(lat), wrap_lon(lon)));
    }
    if out.is_empty() {
        return Err("countries.tbl: no entries".to_string());
    }
    Ok(out)
}

static COUNTRIES: OnceLock<HashMap<String, (f32, f32)>> = OnceLock::new();

/// Centroid for a two-letter code, if the table knows it. Case
/// insensitive.
#[must_use]
pub fn country_centroid(code: &str) -> Option<(f32, f32)> {
    let table = COUNTRIES.get_or_init(|| {
        parse_table(COUNTRY_TABLE_STR).unwrap_or_else(|e| panic!("countries.tbl: {e}"))
    });
    table.get(&code.to_ascii_uppercase()).copied()
}
