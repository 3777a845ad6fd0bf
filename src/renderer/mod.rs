//! Rendering
//!
//! The simulation draws through the [`RenderTarget`] trait only. Backends:
//! - [`DrawList`]: records commands (headless runs, tests)
//! - [`ShapeBatch`] + [`GpuRenderer`]: tessellated triangles through wgpu
//! - `Canvas2dTarget`: browser `CanvasRenderingContext2d` (wasm32 only)

pub mod batch;
#[cfg(target_arch = "wasm32")]
pub mod canvas2d;
pub mod color;
pub mod pipeline;
pub mod recorder;
pub mod shapes;
pub mod vertex;

pub use batch::ShapeBatch;
#[cfg(target_arch = "wasm32")]
pub use canvas2d::Canvas2dTarget;
pub use color::Color;
pub use pipeline::GpuRenderer;
pub use recorder::{DrawCommand, DrawList};

use glam::Vec2;

/// Axis-aligned rectangle, origin at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// A 2D drawing surface of fixed size
///
/// Coordinates are arena pixels with the origin at the top-left and y
/// growing downward.
pub trait RenderTarget {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    /// Erase a region back to the background
    fn clear(&mut self, region: Rect);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Called once per host frame before anything is drawn
    fn begin_frame(&mut self) {}

    /// The whole surface as a rectangle
    fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width(), self.height())
    }
}
