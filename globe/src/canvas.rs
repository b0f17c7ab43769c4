//! Drawable-surface seam between the frame pass and the host.

use crate::color::Rgba;

/// 2D screen position in canvas-local pixels.
pub type Point = (f32, f32);

/// Minimal draw surface the frame pass paints through.
///
/// The host adapts this onto its real painter (the viewer wraps an
/// egui painter); tests use a recording implementation so the paint
/// sequence is observable without a display.
pub trait Canvas {
    /// Fill the whole viewport.
    fn clear(&mut self, color: Rgba);
    /// Filled circle.
    fn disc(&mut self, center: Point, radius: f32, color: Rgba);
    /// Circle outline.
    fn ring(&mut self, center: Point, radius: f32, width: f32, color: Rgba);
    /// Straight line segment.
    fn segment(&mut self, a: Point, b: Point, width: f32, color: Rgba);
    /// Quadratic bezier from `a` to `b` through control point `ctrl`.
    fn bezier(&mut self, a: Point, ctrl: Point, b: Point, width: f32, color: Rgba);
    /// Soft radial glow centered at `center`.
    fn glow(&mut self, center: Point, radius: f32, color: Rgba);
    /// Radially graded disc, `inner` at the center, `outer` at the rim.
    fn gradient_disc(&mut self, center: Point, radius: f32, inner: Rgba, outer: Rgba);
}
