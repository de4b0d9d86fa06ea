//! Browser binding of `Surface` to an HTML canvas 2-D context

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::surface::Surface;

/// A canvas whose context is already scaled for the device pixel ratio
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    /// Size the backing store to the element's CSS box times the pixel
    /// ratio and scale the context so callers draw in CSS pixels.
    pub fn bind(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let dpr = match window.device_pixel_ratio() {
            r if r > 0.0 => r,
            _ => 1.0,
        };
        let rect = canvas.get_bounding_client_rect();
        let (width, height) = (rect.width(), rect.height());

        canvas.set_width((width * dpr).round() as u32);
        canvas.set_height((height * dpr).round() as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("2d context unavailable")?
            .dyn_into()?;
        ctx.scale(dpr, dpr)?;

        Ok(Self { ctx, width, height })
    }

    /// Width in CSS pixels
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Height in CSS pixels
    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn fill(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
    }

    fn stroke(&mut self, color: &str, line_width: f64) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(line_width);
        self.ctx.stroke();
    }
}
