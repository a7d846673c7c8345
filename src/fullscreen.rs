//! When the "Enter Fullscreen" button is offered.

/// The two facts about the page the fullscreen button depends on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FullscreenEnv {
    /// Touch events or pointer touch points are available.
    pub touch_capable: bool,
    /// Some element is currently fullscreen.
    pub fullscreen_active: bool,
}

impl FullscreenEnv {
    /// Only touch devices get the button, and never while fullscreen is active.
    pub fn offers_button(&self) -> bool {
        self.touch_capable && !self.fullscreen_active
    }

    /// CSS `display` value for the button.
    pub fn button_display(&self) -> &'static str {
        if self.offers_button() {
            "block"
        } else {
            "none"
        }
    }
}
