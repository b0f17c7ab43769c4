//! One complete frame: background, sphere body, graticule, data points,
//! connector arcs. Every frame is rebuilt from scratch; there is no
//! incremental redraw.

use std::cmp::Ordering;

use globe_geo::{geo_to_sphere, sphere_to_screen, Projected};

use crate::canvas::{Canvas, Point};
use crate::color::{self, Rgba};
use crate::points::GeoPoint;
use crate::view::RotationState;

/// Background fill.
pub const BACKGROUND: Rgba = [6, 10, 18, 255];
const BODY_INNER: Rgba = [24, 44, 74, 255];
const BODY_OUTER: Rgba = [10, 18, 34, 255];
const OUTLINE: Rgba = [70, 110, 160, 120];
const GRID: Rgba = [60, 90, 130, 60];
const ARC: Rgba = [120, 180, 255, 110];
const HOVER_RING: Rgba = [235, 243, 255, 200];
const SPINNER: Rgba = [140, 180, 230, 255];

/// Smallest dot radius in pixels.
pub const DOT_RADIUS_MIN: f32 = 4.0;
/// Largest dot radius in pixels; caps outliers so one hot country
/// cannot dominate the frame.
pub const DOT_RADIUS_MAX: f32 = 20.0;
/// How many of the hottest visible points get a connector arc.
pub const TOP_ARCS: usize = 5;
/// Globe radius as a fraction of the short viewport side.
pub const RADIUS_FRAC: f32 = 0.4;

const GRID_STEP_DEG: f32 = 30.0;
const SAMPLE_STEP_DEG: f32 = 5.0;

/// Dot radius for a share of traffic, monotone in the percentage and
/// clamped to `[DOT_RADIUS_MIN, DOT_RADIUS_MAX]`.
#[must_use]
pub fn dot_radius(percentage: f32) -> f32 {
    let t = if percentage.is_finite() { percentage / 100.0 } else { 0.0 };
    (DOT_RADIUS_MIN + t * (DOT_RADIUS_MAX - DOT_RADIUS_MIN)).clamp(DOT_RADIUS_MIN, DOT_RADIUS_MAX)
}

/// Paint one frame.
///
/// Draw order is fixed because later draws must occlude earlier ones:
/// background, sphere body, graticule, depth-sorted points (painter's
/// algorithm, farthest first), connector arcs. When `loading` is set a
/// spinner is painted instead and no point is projected.
pub fn render(
    canvas: &mut dyn Canvas,
    points: &[GeoPoint],
    rot: &RotationState,
    hover: Option<usize>,
    width: f32,
    height: f32,
    loading: bool,
) {
    canvas.clear(BACKGROUND);
    let center = (width * 0.5, height * 0.5);
    let radius = RADIUS_FRAC * width.min(height);

    if loading {
        paint_spinner(canvas, center, radius * 0.25, rot.spin);
        return;
    }

    canvas.gradient_disc(center, radius, BODY_INNER, BODY_OUTER);
    canvas.ring(center, radius, 1.0, OUTLINE);

    paint_graticule(canvas, rot, radius, width, height);

    // Back-to-front so near points visually cover far ones.
    let mut visible: Vec<(usize, Projected)> = points
        .iter()
        .enumerate()
        .filter_map(|(i, p)| {
            let v = geo_to_sphere(p.latitude, p.longitude, radius);
            let s = sphere_to_screen(v, rot.spin, rot.tilt, width, height);
            s.visible.then_some((i, s))
        })
        .collect();
    visible.sort_by(|a, b| a.1.depth.partial_cmp(&b.1.depth).unwrap_or(Ordering::Equal));

    for &(i, s) in &visible {
        let p = &points[i];
        let r = dot_radius(p.percentage);
        canvas.glow((s.x, s.y), r * 2.5, color::glow(p.percentage));
        canvas.disc((s.x, s.y), r, color::heat(p.percentage));
        if hover == Some(i) {
            canvas.ring((s.x, s.y), r + 3.0, 1.5, HOVER_RING);
        }
    }

    // Cosmetic attention arcs; no effect on hit-testing or state.
    let mut hottest: Vec<&(usize, Projected)> = visible.iter().collect();
    hottest.sort_by(|a, b| {
        points[b.0]
            .percentage
            .partial_cmp(&points[a.0].percentage)
            .unwrap_or(Ordering::Equal)
    });
    for &&(_, s) in hottest.iter().take(TOP_ARCS) {
        let mid = ((center.0 + s.x) * 0.5, (center.1 + s.y) * 0.5);
        let span = ((s.x - center.0).powi(2) + (s.y - center.1).powi(2)).sqrt();
        let ctrl = (mid.0, mid.1 - (0.2 * span + 12.0));
        canvas.bezier(center, ctrl, (s.x, s.y), 1.0, ARC);
    }
}

/// Latitude rings every 30° in [-60, 60], longitude rings every 30° in
/// [0, 330], sampled at 5° steps. Segments with an endpoint on the back
/// hemisphere are skipped rather than connected, so no line is drawn
/// across the back of the globe.
fn paint_graticule(canvas: &mut dyn Canvas, rot: &RotationState, radius: f32, width: f32, height: f32) {
    let project = |lat: f32, lon: f32| {
        sphere_to_screen(geo_to_sphere(lat, lon, radius), rot.spin, rot.tilt, width, height)
    };

    let mut lat = -60.0f32;
    while lat <= 60.0 {
        let mut prev: Option<Projected> = None;
        let mut lon = -180.0f32;
        while lon <= 180.0 {
            let s = project(lat, lon);
            if let Some(p) = prev {
                if p.visible && s.visible {
                    canvas.segment((p.x, p.y), (s.x, s.y), 1.0, GRID);
                }
            }
            prev = Some(s);
            lon += SAMPLE_STEP_DEG;
        }
        lat += GRID_STEP_DEG;
    }

    let mut lon = 0.0f32;
    while lon <= 330.0 {
        let mut prev: Option<Projected> = None;
        let mut lat_s = -90.0f32;
        while lat_s <= 90.0 {
            let s = project(lat_s, lon);
            if let Some(p) = prev {
                if p.visible && s.visible {
                    canvas.segment((p.x, p.y), (s.x, s.y), 1.0, GRID);
                }
            }
            prev = Some(s);
            lat_s += SAMPLE_STEP_DEG;
        }
        lon += GRID_STEP_DEG;
    }
}

/// Eight dots circling the center while data loads; the phase rides on
/// the spin value, which keeps advancing, so the indicator moves.
fn paint_spinner(canvas: &mut dyn Canvas, center: Point, radius: f32, phase: f32) {
    for k in 0..8u32 {
        let a = phase * 4.0 + (k as f32) * core::f32::consts::FRAC_PI_4;
        let p = (center.0 + radius * a.cos(), center.1 + radius * a.sin());
        let alpha = 40 + 25 * (k as u8);
        canvas.disc(p, 4.0, [SPINNER[0], SPINNER[1], SPINNER[2], alpha]);
    }
}
