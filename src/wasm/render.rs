use std::cell::{Ref, RefCell};
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{AddEventListenerOptions, HtmlCanvasElement, Window};

use super::canvas::CanvasSurface;
use crate::draw::Draw;
use crate::driver::{Driver, FrameRequest, FrameScheduler};
use crate::error::{Error, Result};

/// Shared slot for the animation-frame closure. The closure needs a handle to
/// the driver, and the driver's scheduler needs the closure to re-arm it, so it
/// is created after both and stored here.
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `requestAnimationFrame`-backed scheduler.
pub struct AnimationFrames {
    window: Window,
    callback: FrameCallback,
}

impl FrameScheduler for AnimationFrames {
    fn request_frame(&mut self) -> Option<FrameRequest> {
        let callback = self.callback.borrow();
        let callback = callback.as_ref()?;
        match self.window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(request) => Some(request),
            Err(err) => {
                warn!("requestAnimationFrame failed: {err:?}");
                None
            }
        }
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        if let Err(err) = self.window.cancel_animation_frame(request) {
            warn!("cancelAnimationFrame failed: {err:?}");
        }
    }
}

pub type CanvasDriver<D> = Driver<CanvasSurface, D, AnimationFrames>;

/// A viewport-sized canvas animated by `D` on every animation frame.
///
/// Dropping it (or calling [`Show::stop`]) cancels the pending frame and
/// removes the resize listener, so no callback keeps painting onto a canvas
/// that has been replaced.
pub struct Show<D: Draw + 'static> {
    window: Window,
    driver: Rc<RefCell<CanvasDriver<D>>>,
    frame_callback: FrameCallback,
    on_resize: Option<Closure<dyn FnMut()>>,
}

/// Size `canvas` to the window and start drawing `draw` into it.
///
/// With `looping` off exactly one frame is drawn.
pub fn start<D: Draw + 'static>(
    window: Window,
    canvas: HtmlCanvasElement,
    draw: D,
    looping: bool,
) -> Result<Show<D>> {
    let surface = CanvasSurface::new(canvas)?;

    let frame_callback: FrameCallback = Rc::new(RefCell::new(None));
    let scheduler = AnimationFrames {
        window: window.clone(),
        callback: frame_callback.clone(),
    };
    let driver = Rc::new(RefCell::new(Driver::new(surface, draw, scheduler, looping)));

    {
        let driver = driver.clone();
        *frame_callback.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            driver.borrow_mut().tick(timestamp);
        }) as Box<dyn FnMut(f64)>));
    }

    // Resize canvas to fit window
    let on_resize = {
        let driver = driver.clone();
        let window = window.clone();
        Closure::wrap(Box::new(move || {
            let (width, height) = viewport(&window);
            driver.borrow_mut().resize(width, height);
        }) as Box<dyn FnMut()>)
    };
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    window.add_event_listener_with_callback_and_add_event_listener_options(
        "resize",
        on_resize.as_ref().unchecked_ref(),
        &options,
    )?;

    let (width, height) = viewport(&window);
    {
        let mut driver = driver.borrow_mut();
        driver.resize(width, height);
        driver.start();
    }

    Ok(Show {
        window,
        driver,
        frame_callback,
        on_resize: Some(on_resize),
    })
}

impl<D: Draw + 'static> Show<D> {
    /// Cancel the frame loop and detach the resize listener. Idempotent.
    pub fn stop(&mut self) {
        self.driver.borrow_mut().stop();

        if let Some(on_resize) = self.on_resize.take() {
            let _ = self
                .window
                .remove_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
        }
        // the closure holds the driver; dropping it breaks the cycle
        if self.frame_callback.borrow_mut().take().is_some() {
            debug!("canvas show torn down");
        }
    }

    pub fn is_running(&self) -> bool {
        self.driver.borrow().is_running()
    }

    /// Borrow the draw function, e.g. to inspect its state between frames.
    pub fn draw_fn(&self) -> Ref<'_, D> {
        Ref::map(self.driver.borrow(), |driver| driver.draw_fn())
    }
}

impl<D: Draw + 'static> Drop for Show<D> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Current inner size of the window in CSS pixels.
pub fn viewport(window: &Window) -> (u32, u32) {
    let dimension = |value: std::result::Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32
    };
    (dimension(window.inner_width()), dimension(window.inner_height()))
}

/// Look up a canvas element by id.
pub fn find_canvas(window: &Window, id: &str) -> Result<HtmlCanvasElement> {
    let document = window.document().ok_or(Error::NoDocument)?;
    document
        .get_element_by_id(id)
        .ok_or_else(|| Error::ElementNotFound(id.to_string()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| Error::ElementNotFound(id.to_string()))
}
