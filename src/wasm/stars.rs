use std::cell::RefCell;
use std::rc::Rc;

use log::info;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{HtmlCanvasElement, Window};

use super::render::{self, Show};
use crate::config::Config;
use crate::error::Result;
use crate::rotation::{RotatingDraw, SchemeRotation};
use crate::scheme::{Scheme, CATALOG};

/// The star show: a [`Show`] of the scheme catalog plus the timer that
/// rotates through it.
pub struct StarShow {
    show: Show<RotatingDraw>,
    window: Window,
    rotation: Rc<RefCell<SchemeRotation>>,
    on_rotate: Option<Closure<dyn FnMut()>>,
    interval: Option<i32>,
}

pub fn start(window: Window, canvas: HtmlCanvasElement, config: &Config) -> Result<StarShow> {
    let rotation = SchemeRotation::new(CATALOG.len(), config.rotation_interval)
        .starting_at(config.first_scheme);
    let rotation = Rc::new(RefCell::new(rotation));
    let draw =
        RotatingDraw::new(&CATALOG, rotation.clone(), config.star_count, config.trail_alpha);

    let show = render::start(window.clone(), canvas, draw, config.looping)?;
    let mut stars = StarShow {
        show,
        window: window.clone(),
        rotation,
        on_rotate: None,
        interval: None,
    };

    if let Some(millis) = config.rotation_timer_ms() {
        let on_rotate = {
            let rotation = stars.rotation.clone();
            Closure::wrap(Box::new(move || {
                let active = rotation.borrow_mut().step();
                info!("now showing '{}'", CATALOG[active].name);
            }) as Box<dyn FnMut()>)
        };
        // on error `stars` is dropped here, which stops the frame loop
        let interval = window.set_interval_with_callback_and_timeout_and_arguments_0(
            on_rotate.as_ref().unchecked_ref(),
            millis,
        )?;
        stars.on_rotate = Some(on_rotate);
        stars.interval = Some(interval);
    }

    info!("now showing '{}'", stars.scheme().name);
    Ok(stars)
}

impl StarShow {
    /// Stop the frame loop and the scheme timer. Idempotent.
    pub fn stop(&mut self) {
        self.show.stop();
        if let Some(interval) = self.interval.take() {
            self.window.clear_interval_with_handle(interval);
        }
        self.on_rotate = None;
    }

    pub fn next_scheme(&self) -> &'static Scheme {
        let active = self.rotation.borrow_mut().step();
        &CATALOG[active]
    }

    pub fn scheme(&self) -> &'static Scheme {
        &CATALOG[self.rotation.borrow().active()]
    }

    pub fn is_running(&self) -> bool {
        self.show.is_running()
    }

    /// Whether the scheme timer is armed.
    pub fn is_rotating(&self) -> bool {
        self.interval.is_some()
    }
}

impl Drop for StarShow {
    fn drop(&mut self) {
        self.stop();
    }
}
