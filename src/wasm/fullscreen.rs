use js_sys::{Function, Reflect};
use log::{debug, warn};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::Result;
use crate::fullscreen::FullscreenEnv;

/// Touch input available, either through touch events or pointer touch points.
pub fn is_touch_device(window: &Window) -> bool {
    Reflect::has(window, &JsValue::from_str("ontouchstart")).unwrap_or(false)
        || window.navigator().max_touch_points() > 0
}

pub fn is_fullscreen(document: &Document) -> bool {
    document.fullscreen_element().is_some()
}

pub fn environment(window: &Window, document: &Document) -> FullscreenEnv {
    FullscreenEnv {
        touch_capable: is_touch_device(window),
        fullscreen_active: is_fullscreen(document),
    }
}

/// Whether the "Enter Fullscreen" affordance should be shown.
pub fn offered(window: &Window, document: &Document) -> bool {
    environment(window, document).offers_button()
}

/// Ask the browser to make `container` fullscreen. Rejections are only logged.
pub fn request(container: &Element) {
    let has_standard = Reflect::get(container, &JsValue::from_str("requestFullscreen"))
        .map(|f| f.is_function())
        .unwrap_or(false);

    let result = if has_standard {
        container.request_fullscreen()
    } else {
        // older Safari only ships the prefixed variant
        Reflect::get(container, &JsValue::from_str("webkitRequestFullscreen"))
            .and_then(|f| f.dyn_into::<Function>())
            .and_then(|f| f.call0(container))
            .map(|_| ())
    };

    if let Err(err) = result {
        warn!("fullscreen request rejected: {err:?}");
    }
}

/// The "Enter Fullscreen" button: visible on touch devices while not fullscreen.
pub struct FullscreenButton {
    document: Document,
    button: HtmlElement,
    on_click: Closure<dyn FnMut()>,
    on_change: Closure<dyn FnMut()>,
}

impl FullscreenButton {
    pub fn attach(
        window: &Window,
        document: &Document,
        button: HtmlElement,
        container: Element,
    ) -> Result<Self> {
        let touch = is_touch_device(window);

        let on_click = Closure::wrap(Box::new(move || request(&container)) as Box<dyn FnMut()>);
        button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;

        let on_change = {
            let document = document.clone();
            let button = button.clone();
            Closure::wrap(Box::new(move || refresh(&document, &button, touch)) as Box<dyn FnMut()>)
        };
        document.add_event_listener_with_callback(
            "fullscreenchange",
            on_change.as_ref().unchecked_ref(),
        )?;

        refresh(document, &button, touch);
        Ok(Self {
            document: document.clone(),
            button,
            on_click,
            on_change,
        })
    }

    pub fn detach(&self) {
        let _ = self
            .button
            .remove_event_listener_with_callback("click", self.on_click.as_ref().unchecked_ref());
        let _ = self.document.remove_event_listener_with_callback(
            "fullscreenchange",
            self.on_change.as_ref().unchecked_ref(),
        );
    }
}

fn refresh(document: &Document, button: &HtmlElement, touch_capable: bool) {
    let env = FullscreenEnv {
        touch_capable,
        fullscreen_active: is_fullscreen(document),
    };
    let display = env.button_display();
    debug!("fullscreen button display: {display}");
    if let Err(err) = button.style().set_property("display", display) {
        warn!("could not toggle fullscreen button: {err:?}");
    }
}
