//! `Canvas` implementation over an egui painter.

use egui::epaint::QuadraticBezierShape;
use egui::{Color32, Painter, Pos2, Rect, Stroke};

use globe::canvas::{Canvas, Point};
use globe::color::Rgba;

/// Paints globe draw calls into an egui clip rect. Coordinates coming
/// from the frame pass are local to the rect.
pub struct EguiCanvas<'p> {
    painter: &'p Painter,
    rect: Rect,
}

impl<'p> EguiCanvas<'p> {
    pub fn new(painter: &'p Painter, rect: Rect) -> Self {
        Self { painter, rect }
    }

    fn pos(&self, p: Point) -> Pos2 {
        Pos2::new(self.rect.left() + p.0, self.rect.top() + p.1)
    }
}

fn col(c: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(c[0], c[1], c[2], c[3])
}

impl Canvas for EguiCanvas<'_> {
    fn clear(&mut self, color: Rgba) {
        self.painter.rect_filled(self.rect, 0.0, col(color));
    }

    fn disc(&mut self, center: Point, radius: f32, color: Rgba) {
        self.painter.circle_filled(self.pos(center), radius, col(color));
    }

    fn ring(&mut self, center: Point, radius: f32, width: f32, color: Rgba) {
        self.painter.circle_stroke(self.pos(center), radius, Stroke::new(width, col(color)));
    }

    fn segment(&mut self, a: Point, b: Point, width: f32, color: Rgba) {
        self.painter.line_segment([self.pos(a), self.pos(b)], Stroke::new(width, col(color)));
    }

    fn bezier(&mut self, a: Point, ctrl: Point, b: Point, width: f32, color: Rgba) {
        self.painter.add(QuadraticBezierShape::from_points_stroke(
            [self.pos(a), self.pos(ctrl), self.pos(b)],
            false,
            Color32::TRANSPARENT,
            Stroke::new(width, col(color)),
        ));
    }

    fn glow(&mut self, center: Point, radius: f32, color: Rgba) {
        // epaint has no radial gradients; stacked translucent discs
        // accumulate toward the center and read the same at dot scale.
        let steps = 4u8;
        let alpha = color[3] / steps;
        for k in 1..=steps {
            let t = f32::from(k) / f32::from(steps);
            self.painter.circle_filled(
                self.pos(center),
                radius * t,
                Color32::from_rgba_unmultiplied(color[0], color[1], color[2], alpha),
            );
        }
    }

    fn gradient_disc(&mut self, center: Point, radius: f32, inner: Rgba, outer: Rgba) {
        let steps = 24u32;
        for k in (1..=steps).rev() {
            let t = (k - 1) as f32 / (steps - 1) as f32; // 0 center, 1 rim
            let mix = |a: u8, b: u8| (f32::from(a) + t * (f32::from(b) - f32::from(a))) as u8;
            let c = Color32::from_rgba_unmultiplied(
                mix(inner[0], outer[0]),
                mix(inner[1], outer[1]),
                mix(inner[2], outer[2]),
                mix(inner[3], outer[3]),
            );
            self.painter.circle_filled(self.pos(center), radius * k as f32 / steps as f32, c);
        }
    }
}
