use js_sys::{Array, Function};
use log::error;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

use super::canvas::CanvasSurface;
use super::fullscreen;
use super::render::{self, Show};
use crate::draw::{Draw, Frame};
use crate::error::Error;
use crate::surface::Canvas;

/// Draw function supplied from JavaScript, called as
/// `draw(ctx, width, height, deltaTime, totalTime)`.
pub struct JsDraw {
    callback: Function,
    context: CanvasRenderingContext2d,
    failed: bool,
}

impl JsDraw {
    pub fn new(callback: Function, context: CanvasRenderingContext2d) -> Self {
        Self {
            callback,
            context,
            failed: false,
        }
    }
}

impl Draw for JsDraw {
    fn draw(&mut self, _canvas: &mut dyn Canvas, frame: &Frame) {
        if self.failed {
            return;
        }
        let args = Array::of5(
            &self.context,
            &frame.width.into(),
            &frame.height.into(),
            &frame.delta_time.into(),
            &frame.total_time.into(),
        );
        if let Err(err) = self.callback.apply(&JsValue::NULL, &args) {
            // a throwing callback would throw again every frame
            error!("draw callback threw, no further frames are drawn: {err:?}");
            self.failed = true;
        }
    }
}

/// Fullscreen canvas for pages that bring their own draw function.
///
/// ```js
/// const show = new FullscreenCanvas(canvas, (ctx, w, h, dt, t) => { ... }, true);
/// show.stop();
/// ```
#[wasm_bindgen]
pub struct FullscreenCanvas {
    show: Show<JsDraw>,
    container: Option<Element>,
}

#[wasm_bindgen]
impl FullscreenCanvas {
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: HtmlCanvasElement,
        draw: Function,
        looping: bool,
    ) -> Result<FullscreenCanvas, JsValue> {
        let window = web_sys::window().ok_or(Error::NoWindow)?;
        let context = CanvasSurface::new(canvas.clone())?.context().clone();
        let container = canvas.parent_element();
        let show = render::start(window, canvas, JsDraw::new(draw, context), looping)?;
        Ok(Self { show, container })
    }

    pub fn stop(&mut self) {
        self.show.stop();
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.show.is_running()
    }

    #[wasm_bindgen(js_name = fullscreenOffered)]
    pub fn fullscreen_offered(&self) -> bool {
        web_sys::window()
            .and_then(|window| {
                let document = window.document()?;
                Some(fullscreen::offered(&window, &document))
            })
            .unwrap_or(false)
    }

    #[wasm_bindgen(js_name = enterFullscreen)]
    pub fn enter_fullscreen(&self) {
        if let Some(container) = &self.container {
            fullscreen::request(container);
        }
    }
}
