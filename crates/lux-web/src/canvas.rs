use glam::DVec2;
use js_sys::Array;
use lux_engine::renderer::{Color, FillStyle};
use lux_engine::{LuxError, Result, Size, Surface};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

fn surface_error(err: JsValue) -> LuxError {
    LuxError::Surface(format!("{err:?}"))
}

/// [`Surface`] over a `<canvas>` 2D context.
///
/// The canvas backing store is sized to its CSS box times the pixel scale,
/// and drawing happens in CSS pixels.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    size: Size,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> std::result::Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or("2d context unavailable")?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            canvas,
            ctx,
            size: Size::default(),
        })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    fn backend(&self) -> &'static str {
        "canvas2d"
    }

    fn size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, scale: f64) -> Size {
        let width = self.canvas.offset_width() as f64;
        let height = self.canvas.offset_height() as f64;
        self.canvas.set_width((width * scale) as u32);
        self.canvas.set_height((height * scale) as u32);
        if let Err(err) = self.ctx.scale(scale, scale) {
            log::warn!("canvas: scale failed: {err:?}");
        }
        self.size = Size::new(width, height);
        self.size
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.clear_rect(x, y, width, height);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn arc(&mut self, center: DVec2, radius: f64, start_angle: f64, end_angle: f64) -> Result<()> {
        self.ctx
            .arc(center.x, center.y, radius, start_angle, end_angle)
            .map_err(surface_error)
    }

    fn set_fill_style(&mut self, style: &FillStyle) -> Result<()> {
        match style {
            FillStyle::Solid(color) => self.ctx.set_fill_style_str(&color.to_string()),
            FillStyle::Radial(g) => {
                let gradient = self
                    .ctx
                    .create_radial_gradient(g.start.x, g.start.y, g.start_radius, g.end.x, g.end.y, g.end_radius)
                    .map_err(surface_error)?;
                for stop in &g.stops {
                    gradient
                        .add_color_stop(stop.offset as f32, &stop.color.to_string())
                        .map_err(surface_error)?;
                }
                self.ctx.set_fill_style_canvas_gradient(&gradient);
            }
        }
        Ok(())
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn set_stroke_style(&mut self, color: &Color) {
        self.ctx.set_stroke_style_str(&color.to_string());
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_line_dash(&mut self, segments: &[f64]) -> Result<()> {
        let dash: Array = segments.iter().map(|&s| JsValue::from_f64(s)).collect();
        self.ctx.set_line_dash(&dash).map_err(surface_error)
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn set_shadow_color(&mut self, color: &Color) {
        self.ctx.set_shadow_color(&color.to_string());
    }

    fn set_shadow_blur(&mut self, blur: f64) {
        self.ctx.set_shadow_blur(blur);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, offset: DVec2) {
        if let Err(err) = self.ctx.translate(offset.x, offset.y) {
            log::warn!("canvas: translate failed: {err:?}");
        }
    }
}
