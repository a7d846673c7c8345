use crate::clock::FrameTime;
use crate::surface::Canvas;

/// Arguments of a single draw call.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    /// Seconds since the previous frame.
    pub delta_time: f64,
    /// Seconds since the loop started.
    pub total_time: f64,
}

impl Frame {
    pub fn new(width: f64, height: f64, time: FrameTime) -> Self {
        Self {
            width,
            height,
            delta_time: time.delta_time,
            total_time: time.total_time,
        }
    }
}

/// Paints one frame onto a canvas. Must derive everything from its arguments.
pub trait Draw {
    fn draw(&mut self, canvas: &mut dyn Canvas, frame: &Frame);
}

impl<F> Draw for F
where
    F: FnMut(&mut dyn Canvas, &Frame),
{
    fn draw(&mut self, canvas: &mut dyn Canvas, frame: &Frame) {
        self(canvas, frame)
    }
}
