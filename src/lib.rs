#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! Full-screen star field that cycles through parametric motion schemes.
//!
//! Everything outside the `wasm` module is plain Rust so the animation maths and
//! the frame loop can be tested on the host.

pub mod clock;
pub mod config;
pub mod draw;
pub mod driver;
pub mod error;
pub mod fullscreen;
pub mod rotation;
pub mod scheme;
pub mod star;
pub mod surface;

pub use config::Config;
pub use draw::{Draw, Frame};
pub use driver::{Driver, FrameScheduler};
pub use error::{Error, Result};
pub use fullscreen::FullscreenEnv;
pub use scheme::{Scheme, CATALOG};
pub use surface::{Canvas, Color, Point};

// Only compile wasm-specific code when targeting wasm32.

/// Browser glue. [`wasm::render::start`] runs any [`Draw`] full-screen on a
/// canvas; [`wasm::stars::start`] builds the star show on top of it.
#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use std::cell::RefCell;

    use log::{warn, Level};
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, HtmlElement, UrlSearchParams, Window};

    use crate::config::{self, Config};
    use crate::error::Error;

    pub mod canvas;
    pub mod component;
    pub mod fullscreen;
    pub mod render;
    pub mod stars;

    pub use canvas::CanvasSurface;
    pub use component::FullscreenCanvas;
    pub use fullscreen::FullscreenButton;
    pub use render::{AnimationFrames, Show};
    pub use stars::StarShow;

    const CANVAS_ID: &str = "c";
    const FULLSCREEN_BUTTON_ID: &str = "fullscreen";

    struct App {
        show: StarShow,
        container: Option<Element>,
        button: Option<FullscreenButton>,
    }

    impl Drop for App {
        fn drop(&mut self) {
            if let Some(button) = &self.button {
                button.detach();
            }
            self.show.stop();
        }
    }

    thread_local! {
        static APP: RefCell<Option<App>> = const { RefCell::new(None) };
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        let level = if cfg!(debug_assertions) {
            Level::Debug
        } else {
            Level::Info
        };
        // a second init (e.g. hot reload) keeps the first logger
        let _ = console_log::init_with_level(level);

        let window = web_sys::window().ok_or(Error::NoWindow)?;
        let document = window.document().ok_or(Error::NoDocument)?;
        let canvas = render::find_canvas(&window, CANVAS_ID)?;
        let container = canvas.parent_element();
        let config = config_from_query(&window);

        let show = stars::start(window.clone(), canvas, &config)?;

        let button = document.get_element_by_id(FULLSCREEN_BUTTON_ID);
        let button = match (button, container.clone()) {
            (Some(button), Some(container)) => {
                let button = button
                    .dyn_into::<HtmlElement>()
                    .map_err(|_| Error::ElementNotFound(FULLSCREEN_BUTTON_ID.into()))?;
                Some(FullscreenButton::attach(&window, &document, button, container)?)
            }
            _ => None,
        };
        APP.with(|app| {
            // replacing a previous app drops it, which tears its loop down
            *app.borrow_mut() = Some(App {
                show,
                container,
                button,
            });
        });
        Ok(())
    }

    /// Stop the animation and release every browser callback.
    #[wasm_bindgen]
    pub fn stop() {
        APP.with(|app| app.borrow_mut().take());
    }

    /// Skip to the next scheme, returning its name.
    #[wasm_bindgen(js_name = nextScheme)]
    pub fn next_scheme() -> Option<String> {
        APP.with(|app| {
            let app = app.borrow();
            app.as_ref().map(|app| app.show.next_scheme().name.to_string())
        })
    }

    #[wasm_bindgen(js_name = schemeName)]
    pub fn scheme_name() -> Option<String> {
        APP.with(|app| {
            let app = app.borrow();
            app.as_ref().map(|app| app.show.scheme().name.to_string())
        })
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running() -> bool {
        APP.with(|app| app.borrow().as_ref().is_some_and(|app| app.show.is_running()))
    }

    #[wasm_bindgen(js_name = fullscreenOffered)]
    pub fn fullscreen_offered() -> bool {
        web_sys::window()
            .and_then(|window| {
                let document = window.document()?;
                Some(fullscreen::offered(&window, &document))
            })
            .unwrap_or(false)
    }

    #[wasm_bindgen(js_name = enterFullscreen)]
    pub fn enter_fullscreen() {
        APP.with(|app| {
            let app = app.borrow();
            if let Some(container) = app.as_ref().and_then(|app| app.container.as_ref()) {
                fullscreen::request(container);
            }
        });
    }

    /// Read overrides such as `?scheme=spiral&loop=0` from the page URL.
    fn config_from_query(window: &Window) -> Config {
        let params = window
            .location()
            .search()
            .and_then(|search| UrlSearchParams::new_with_str(&search));
        let params = match params {
            Ok(params) => params,
            Err(err) => {
                warn!("could not read query string: {err:?}");
                return Config::default();
            }
        };

        let pairs = config::KEYS
            .iter()
            .filter_map(|key| params.get(key).map(|value| (*key, value)));
        let (config, errors) = Config::from_pairs(pairs);
        for error in errors {
            warn!("ignoring option: {error}");
        }
        config
    }
}
