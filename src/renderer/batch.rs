//! Vertex batch render target
//!
//! Collects each frame's primitives as triangles for [`GpuRenderer`](super::GpuRenderer).
//! A full-surface clear drops everything queued so far; the GPU pass clears
//! to the background color on its own.

use glam::Vec2;

use super::shapes;
use super::vertex::Vertex;
use super::{Color, Rect, RenderTarget};

pub struct ShapeBatch {
    width: f32,
    height: f32,
    background: Color,
    vertices: Vec<Vertex>,
}

impl ShapeBatch {
    pub fn new(width: f32, height: f32, background: Color) -> Self {
        Self {
            width,
            height,
            background,
            vertices: Vec::new(),
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn background(&self) -> Color {
        self.background
    }
}

impl RenderTarget for ShapeBatch {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self, region: Rect) {
        if region == self.bounds() {
            self.vertices.clear();
        } else {
            // Partial clears paint background over what is already queued
            self.vertices
                .extend(shapes::rect(region, self.background.to_rgba()));
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.vertices.extend(shapes::circle(
            center,
            radius,
            color.to_rgba(),
            shapes::circle_segments(radius),
        ));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.vertices.extend(shapes::rect(rect, color.to_rgba()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_clear_empties_batch() {
        let mut batch = ShapeBatch::new(800.0, 600.0, Color::BLACK);
        batch.fill_rect(Rect::new(0.0, 0.0, 10.0, 200.0), Color::BLUE);
        assert_eq!(batch.vertices().len(), 6);

        batch.clear(batch.bounds());
        assert!(batch.vertices().is_empty());
    }

    #[test]
    fn test_partial_clear_paints_background() {
        let mut batch = ShapeBatch::new(800.0, 600.0, Color::BLACK);
        batch.fill_circle(Vec2::new(400.0, 300.0), 20.0, Color::RED);
        let before = batch.vertices().len();

        batch.clear(Rect::new(380.0, 280.0, 40.0, 40.0));
        assert_eq!(batch.vertices().len(), before + 6);
        assert_eq!(batch.vertices().last().unwrap().color, [0.0, 0.0, 0.0, 1.0]);
    }
}
