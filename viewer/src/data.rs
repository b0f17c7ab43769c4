//! Visitor statistics loading.
//!
//! Stats arrive as a JSON array of per-country records. Loading runs on a
//! background thread and posts the resolved point set over a channel so the
//! first frames can paint the spinner instead of blocking on IO.

use std::path::Path;
use std::sync::mpsc::Sender;

use serde::Deserialize;

use globe::points::GeoPoint;

/// Bundled sample used when no stats file is given on the command line.
pub const SAMPLE_STATS_STR: &str = include_str!("../assets/sample_stats.json");

#[derive(Deserialize)]
struct StatRecord {
    country_code: String,
    #[serde(default)]
    country_name: String,
    #[serde(default)]
    count: u64,
    #[serde(default)]
    percentage: f32,
}

/// Parses a JSON stats document into geo points, resolving each country
/// code against the embedded centroid table. Unknown codes keep their
/// record and land at the origin fallback.
pub fn parse_stats(json: &str) -> Result<Vec<GeoPoint>, String> {
    let records: Vec<StatRecord> =
        serde_json::from_str(json).map_err(|e| format!("stats json: {e}"))?;
    Ok(records
        .into_iter()
        .map(|r| GeoPoint::for_country(&r.country_code, &r.country_name, r.count, r.percentage))
        .collect())
}

/// Reads and parses a stats file from disk.
pub fn load_stats(path: &Path) -> Result<Vec<GeoPoint>, String> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("read {}: {e}", path.display()))?;
    parse_stats(&json)
}

/// Spawns the loader thread. Sends the point set (or the bundled sample on
/// failure) once ready; the receiver polls with `try_recv` per frame.
pub fn start_load(path: Option<std::path::PathBuf>, tx: Sender<Vec<GeoPoint>>) {
    std::thread::spawn(move || {
        let points = match path {
            Some(p) => match load_stats(&p) {
                Ok(pts) => {
                    log::info!("[data] loaded {} countries from {}", pts.len(), p.display());
                    pts
                }
                Err(e) => {
                    log::warn!("[data] {e}; falling back to bundled sample");
                    parse_stats(SAMPLE_STATS_STR).unwrap_or_default()
                }
            },
            None => {
                let pts = parse_stats(SAMPLE_STATS_STR).unwrap_or_default();
                log::info!("[data] loaded {} countries from bundled sample", pts.len());
                pts
            }
        };
        let _ = tx.send(points);
    });
}
