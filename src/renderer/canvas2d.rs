//! Browser Canvas 2D render target

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Color, Rect, RenderTarget};
use crate::error::StartupError;

pub struct Canvas2dTarget {
    ctx: CanvasRenderingContext2d,
    width: f32,
    height: f32,
}

impl Canvas2dTarget {
    /// Bind to the canvas's 2D context, sizing the backing store to the arena
    pub fn new(
        canvas: &HtmlCanvasElement,
        width: f32,
        height: f32,
    ) -> Result<Self, StartupError> {
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let ctx = canvas
            .get_context("2d")
            .map_err(|_| StartupError::NoContext2d)?
            .ok_or(StartupError::NoContext2d)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| StartupError::NoContext2d)?;

        Ok(Self { ctx, width, height })
    }
}

impl RenderTarget for Canvas2dTarget {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self, region: Rect) {
        self.ctx.clear_rect(
            region.x as f64,
            region.y as f64,
            region.width as f64,
            region.height as f64,
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill();
        self.ctx.close_path();
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill_rect(
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
        );
    }
}
