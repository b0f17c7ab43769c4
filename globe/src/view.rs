//! Rotation state, the drag/hover state machine, and the tick
//! scheduler.
//!
//! Everything here runs on one logical thread: the host interleaves
//! pointer callbacks with per-frame ticks, so no locking is needed.

use std::f32::consts::FRAC_PI_2;

use globe_geo::{geo_to_sphere, sphere_to_screen};

use crate::canvas::Canvas;
use crate::frame::{self, RADIUS_FRAC};
use crate::points::GeoPoint;

/// Idle auto-rotation rate, radians per millisecond of wall time.
pub const AUTO_SPIN_PER_MS: f32 = 1.0e-4;
/// Drag sensitivity, radians per pixel of pointer travel.
pub const DRAG_PER_PX: f32 = 0.005;
/// Hover hit-test radius in pixels.
pub const HIT_RADIUS_PX: f32 = 20.0;
/// Pitch the globe starts with.
pub const INITIAL_TILT: f32 = 0.3;

/// Mutable orientation of the globe, owned by the view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    /// Yaw about the vertical axis. Unbounded; wraps through the
    /// trigonometric functions.
    pub spin: f32,
    /// Pitch about the horizontal screen axis, clamped to ±π/2.
    pub tilt: f32,
}

impl Default for RotationState {
    fn default() -> Self {
        Self { spin: 0.0, tilt: INITIAL_TILT }
    }
}

/// Renderer-owned view state: orientation, drag anchor, hover target,
/// and the scheduler run flag.
///
/// Two writers compete for the rotation: the idle auto-rotate tick and
/// pointer-drag deltas. A tick that lands mid-drag is suppressed
/// entirely, so the two never fight within one frame.
#[derive(Debug)]
pub struct GlobeView {
    rotation: RotationState,
    drag_anchor: Option<(f32, f32)>,
    hover: Option<usize>,
    running: bool,
}

impl Default for GlobeView {
    fn default() -> Self {
        Self::new()
    }
}

impl GlobeView {
    /// Fresh view with the default orientation, scheduler running.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rotation: RotationState::default(),
            drag_anchor: None,
            hover: None,
            running: true,
        }
    }

    /// Current orientation.
    #[must_use]
    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    /// Index of the hovered point into the caller's slice, if any.
    #[must_use]
    pub fn hover(&self) -> Option<usize> {
        self.hover
    }

    /// True while a pointer drag is in progress.
    #[must_use]
    pub fn dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// True until [`GlobeView::stop`] is called.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// (Re)start the tick scheduler.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Tear the scheduler down. [`GlobeView::tick`] and
    /// [`GlobeView::paint`] become no-ops until restarted.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Advance the idle auto-rotation by `elapsed_ms` of wall time.
    /// Measured elapsed time, not a fixed constant, so rotation speed
    /// is independent of frame rate. Suppressed while dragging.
    pub fn tick(&mut self, elapsed_ms: f32) {
        if !self.running || self.drag_anchor.is_some() {
            return;
        }
        if elapsed_ms.is_finite() && elapsed_ms > 0.0 {
            self.rotation.spin += elapsed_ms * AUTO_SPIN_PER_MS;
        }
    }

    /// Pointer pressed: enter the dragging state, anchored here.
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.drag_anchor = Some((x, y));
    }

    /// Pointer moved. While dragging, applies the delta since the last
    /// recorded position (delta-driven, so event granularity does not
    /// matter) and re-anchors. Always re-runs the hover hit-test.
    pub fn pointer_move(&mut self, x: f32, y: f32, points: &[GeoPoint], width: f32, height: f32) {
        if let Some((ax, ay)) = self.drag_anchor {
            let dx = x - ax;
            let dy = y - ay;
            self.rotation.spin += dx * DRAG_PER_PX;
            self.rotation.tilt =
                (self.rotation.tilt + dy * DRAG_PER_PX).clamp(-FRAC_PI_2, FRAC_PI_2);
            self.drag_anchor = Some((x, y));
        }
        self.hover = pick(points, self.rotation, width, height, x, y);
    }

    /// Pointer released: back to idle.
    pub fn pointer_up(&mut self) {
        self.drag_anchor = None;
    }

    /// Pointer left the surface: back to idle, hover cleared. No stuck
    /// drag state.
    pub fn pointer_leave(&mut self) {
        self.drag_anchor = None;
        self.hover = None;
    }

    /// Paint one frame through `canvas`. Returns `false`, touching
    /// nothing, once the view is stopped or while the viewport has no
    /// area (the host retries next tick).
    pub fn paint(
        &self,
        canvas: &mut dyn Canvas,
        points: &[GeoPoint],
        width: f32,
        height: f32,
        loading: bool,
    ) -> bool {
        if !self.running || !(width > 0.0) || !(height > 0.0) {
            return false;
        }
        frame::render(canvas, points, &self.rotation, self.hover, width, height, loading);
        true
    }
}

/// Closest front-hemisphere point within [`HIT_RADIUS_PX`] of the
/// pointer. Ties go to the lowest index, so the result is deterministic
/// for a fixed input set. Back-hemisphere points are occluded by the
/// sphere body and never match.
#[must_use]
pub fn pick(
    points: &[GeoPoint],
    rot: RotationState,
    width: f32,
    height: f32,
    px: f32,
    py: f32,
) -> Option<usize> {
    let radius = RADIUS_FRAC * width.min(height);
    let mut best: Option<(usize, f32)> = None;
    for (i, p) in points.iter().enumerate() {
        let s = sphere_to_screen(
            geo_to_sphere(p.latitude, p.longitude, radius),
            rot.spin,
            rot.tilt,
            width,
            height,
        );
        if !s.visible {
            continue;
        }
        let d2 = (s.x - px).powi(2) + (s.y - py).powi(2);
        if d2 <= HIT_RADIUS_PX * HIT_RADIUS_PX && best.map_or(true, |(_, bd)| d2 < bd) {
            best = Some((i, d2));
        }
    }
    best.map(|(i, _)| i)
}
