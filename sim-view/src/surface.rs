//! [`Surface`] implementation over an egui painter.

use glam::Vec2;
use wave_core::render::{LinearGradient, Rgba, Surface};

/// Paints simulation frames with an [`egui::Painter`].
///
/// Simulation coordinates are canvas-local; `origin` is the screen position
/// of the canvas' top-left corner.
pub struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a egui::Painter, origin: egui::Pos2) -> Self {
        Self { painter, origin }
    }

    fn to_screen(&self, p: Vec2) -> egui::Pos2 {
        self.origin + egui::vec2(p.x, p.y)
    }
}

/// Converts a core colour, clamping its alpha into `[0, 1]`.
pub fn to_color32(c: Rgba) -> egui::Color32 {
    let a = (c.a.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, a)
}

/// Builds a quad whose vertex colours reproduce `gradient`.
///
/// A two-stop linear gradient is linear in position, so interpolating the
/// four corner samples across two triangles reproduces it exactly.
pub fn gradient_mesh(origin: egui::Pos2, size: Vec2, gradient: &LinearGradient) -> egui::Mesh {
    let corners = [
        Vec2::ZERO,
        Vec2::new(size.x, 0.0),
        size,
        Vec2::new(0.0, size.y),
    ];

    let mut mesh = egui::Mesh::default();
    for corner in corners {
        mesh.colored_vertex(
            origin + egui::vec2(corner.x, corner.y),
            to_color32(gradient.sample(corner)),
        );
    }
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    mesh
}

impl Surface for PainterSurface<'_> {
    fn fill_gradient(&mut self, size: Vec2, gradient: &LinearGradient) {
        self.painter
            .add(egui::Shape::mesh(gradient_mesh(self.origin, size, gradient)));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.painter
            .circle_filled(self.to_screen(center), radius, to_color32(color));
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            egui::Stroke::new(width, to_color32(color)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_color32_clamps_alpha() {
        assert_eq!(to_color32(Rgba::WHITE.with_alpha(1.2)), egui::Color32::WHITE);
        assert_eq!(
            to_color32(Rgba::WHITE.with_alpha(0.5)),
            egui::Color32::from_rgba_unmultiplied(255, 255, 255, 128)
        );
        assert_eq!(
            to_color32(Rgba::WHITE.with_alpha(-0.3)),
            egui::Color32::from_rgba_unmultiplied(255, 255, 255, 0)
        );
    }

    #[test]
    fn gradient_mesh_samples_corners() {
        let gradient = LinearGradient {
            from: Vec2::ZERO,
            to: Vec2::new(100.0, 100.0),
            start: Rgba::rgb(0, 0, 0),
            end: Rgba::rgb(200, 100, 50),
        };
        let origin = egui::pos2(10.0, 20.0);

        let mesh = gradient_mesh(origin, Vec2::new(100.0, 100.0), &gradient);

        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices, vec![0, 1, 2, 0, 2, 3]);

        assert_eq!(mesh.vertices[0].pos, origin);
        assert_eq!(mesh.vertices[0].color, egui::Color32::from_rgb(0, 0, 0));
        assert_eq!(mesh.vertices[2].pos, egui::pos2(110.0, 120.0));
        assert_eq!(mesh.vertices[2].color, egui::Color32::from_rgb(200, 100, 50));
        // Off-diagonal corners sit halfway along a square's diagonal.
        assert_eq!(mesh.vertices[1].color, egui::Color32::from_rgb(100, 50, 25));
        assert_eq!(mesh.vertices[3].color, egui::Color32::from_rgb(100, 50, 25));
    }
}
