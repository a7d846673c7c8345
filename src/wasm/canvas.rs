use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::{Error, Result};
use crate::surface::{Canvas, Color, Point};

/// `<canvas>` element plus its 2D context.
pub struct CanvasSurface {
    element: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(element: HtmlCanvasElement) -> Result<Self> {
        let context = element
            .get_context("2d")?
            .ok_or(Error::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| Error::NoContext)?;
        Ok(Self { element, context })
    }

    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.context
    }
}

impl Canvas for CanvasSurface {
    fn width(&self) -> f64 {
        self.element.width() as f64
    }

    fn height(&self) -> f64 {
        self.element.height() as f64
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.element.set_width(width);
        self.element.set_height(height);
    }

    fn is_attached(&self) -> bool {
        self.element.is_connected()
    }

    fn clear(&mut self) {
        self.context.clear_rect(0.0, 0.0, self.width(), self.height());
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
        self.context.set_fill_style_str(&color.to_string());
        self.context.fill_rect(x, y, width, height);
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.context.set_fill_style_str(&color.to_string());
        self.context.begin_path();
        self.context.move_to(first.x, first.y);
        for point in rest {
            self.context.line_to(point.x, point.y);
        }
        self.context.close_path();
        self.context.fill();
    }
}
