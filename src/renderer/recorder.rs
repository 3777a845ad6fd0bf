//! Recording render target
//!
//! Stores draw calls instead of rasterizing them. The headless binary and
//! the tests use it to observe what a frame would paint. Commands are
//! dropped at the start of each host frame.

use glam::Vec2;

use super::{Color, Rect, RenderTarget};

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Rect),
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Rect { rect: Rect, color: Color },
}

/// Render target that records draw calls
#[derive(Debug, Clone)]
pub struct DrawList {
    width: f32,
    height: f32,
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Commands since the most recent clear of the full surface
    pub fn last_frame(&self) -> &[DrawCommand] {
        let full = self.bounds();
        let start = self
            .commands
            .iter()
            .rposition(|c| *c == DrawCommand::Clear(full))
            .unwrap_or(0);
        &self.commands[start..]
    }
}

impl RenderTarget for DrawList {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self, region: Rect) {
        self.commands.push(DrawCommand::Clear(region));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }

    fn begin_frame(&mut self) {
        self.commands.clear();
    }
}
