//! Frame loop that owns a canvas and feeds timing into a draw function.
//!
//! The driver never waits on a real display clock itself. Every frame is
//! requested through a [`FrameScheduler`] and delivered back via
//! [`Driver::tick`] with the host's timestamp, which lets tests step frames
//! with synthetic timestamps.

use log::debug;

use crate::clock::AnimationState;
use crate::draw::{Draw, Frame};
use crate::surface::Canvas;

/// Identifier of a frame request, as handed out by the scheduler.
pub type FrameRequest = i32;

/// Source of "call me back on the next frame" requests.
pub trait FrameScheduler {
    /// Ask for one more [`Driver::tick`]. `None` means the request could not be made.
    fn request_frame(&mut self) -> Option<FrameRequest>;

    fn cancel_frame(&mut self, request: FrameRequest);
}

pub struct Driver<C, D, S> {
    canvas: C,
    draw: D,
    scheduler: S,
    looping: bool,
    running: bool,
    state: AnimationState,
    pending: Option<FrameRequest>,
}

impl<C, D, S> Driver<C, D, S>
where
    C: Canvas,
    D: Draw,
    S: FrameScheduler,
{
    pub fn new(canvas: C, draw: D, scheduler: S, looping: bool) -> Self {
        Self {
            canvas,
            draw,
            scheduler,
            looping,
            running: false,
            state: AnimationState::new(),
            pending: None,
        }
    }

    /// Start (or restart) the loop from a zero clock.
    pub fn start(&mut self) {
        self.stop();
        self.state.reset();
        self.running = true;
        self.request_next();
        debug!("frame loop started (looping: {})", self.looping);
    }

    /// Cancel any outstanding frame. Safe to call at any time.
    pub fn stop(&mut self) {
        if let Some(request) = self.pending.take() {
            self.scheduler.cancel_frame(request);
        }
        if self.running {
            debug!("frame loop stopped after {:.2}s", self.state.total_time());
        }
        self.running = false;
    }

    /// Run one scheduled frame at `timestamp` milliseconds.
    pub fn tick(&mut self, timestamp: f64) {
        self.pending = None;
        if !self.running {
            return;
        }

        if !self.canvas.is_attached() {
            if self.state.has_started() {
                self.schedule_next();
            } else {
                debug!("canvas detached before first frame");
                self.running = false;
            }
            return;
        }

        let time = self.state.advance(timestamp);
        self.canvas.clear();
        let frame = Frame::new(self.canvas.width(), self.canvas.height(), time);
        self.draw.draw(&mut self.canvas, &frame);

        self.schedule_next();
    }

    /// Match the pixel buffer to a new viewport size.
    pub fn resize(&mut self, width: u32, height: u32) {
        debug!("resizing canvas to {width}x{height}");
        self.canvas.resize(width, height);
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    pub fn draw_fn(&self) -> &D {
        &self.draw
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    fn schedule_next(&mut self) {
        if self.looping {
            self.request_next();
        } else {
            self.running = false;
        }
    }

    /// A loop whose next frame could not be requested is over.
    fn request_next(&mut self) {
        self.pending = self.scheduler.request_frame();
        if self.pending.is_none() {
            debug!("no frame could be scheduled, frame loop ends");
            self.running = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Color, Point};

    #[derive(Default)]
    struct Blank {
        width: u32,
        height: u32,
        attached: bool,
        clears: usize,
    }

    impl Canvas for Blank {
        fn width(&self) -> f64 {
            self.width as f64
        }
        fn height(&self) -> f64 {
            self.height as f64
        }
        fn resize(&mut self, width: u32, height: u32) {
            self.width = width;
            self.height = height;
        }
        fn is_attached(&self) -> bool {
            self.attached
        }
        fn clear(&mut self) {
            self.clears += 1;
        }
        fn fill_rect(&mut self, _: f64, _: f64, _: f64, _: f64, _: Color) {}
        fn fill_polygon(&mut self, _: &[Point], _: Color) {}
    }

    #[derive(Default)]
    struct Counter {
        next: FrameRequest,
        requested: usize,
        cancelled: Vec<FrameRequest>,
    }

    impl FrameScheduler for Counter {
        fn request_frame(&mut self) -> Option<FrameRequest> {
            self.next += 1;
            self.requested += 1;
            Some(self.next)
        }
        fn cancel_frame(&mut self, request: FrameRequest) {
            self.cancelled.push(request);
        }
    }

    /// Hands out `budget` requests, then refuses.
    struct Exhausting {
        budget: usize,
    }

    impl FrameScheduler for Exhausting {
        fn request_frame(&mut self) -> Option<FrameRequest> {
            self.budget = self.budget.checked_sub(1)?;
            Some(1)
        }
        fn cancel_frame(&mut self, _: FrameRequest) {}
    }

    fn canvas() -> Blank {
        Blank {
            width: 640,
            height: 480,
            attached: true,
            clears: 0,
        }
    }

    fn recorder() -> impl FnMut(&mut dyn Canvas, &Frame) {
        |_: &mut dyn Canvas, _: &Frame| {}
    }

    #[test]
    fn stop_before_start_is_noop() {
        let mut driver = Driver::new(canvas(), recorder(), Counter::default(), true);
        driver.stop();
        driver.stop();
        assert!(!driver.is_running());
        assert!(driver.scheduler().cancelled.is_empty());
    }

    #[test]
    fn stop_cancels_pending_frame_once() {
        let mut driver = Driver::new(canvas(), recorder(), Counter::default(), true);
        driver.start();
        driver.stop();
        driver.stop();
        assert_eq!(driver.scheduler().cancelled, vec![1]);
    }

    #[test]
    fn single_shot_runs_once() {
        let mut driver = Driver::new(canvas(), recorder(), Counter::default(), false);
        driver.start();
        driver.tick(100.0);
        assert!(!driver.is_running());
        assert_eq!(driver.scheduler().requested, 1);
        assert_eq!(driver.canvas().clears, 1);

        // late callbacks after the loop ended do nothing
        driver.tick(200.0);
        assert_eq!(driver.canvas().clears, 1);
    }

    #[test]
    fn looping_requests_every_frame() {
        let mut driver = Driver::new(canvas(), recorder(), Counter::default(), true);
        driver.start();
        for frame in 0..5 {
            driver.tick(frame as f64 * 16.0);
        }
        assert_eq!(driver.scheduler().requested, 6);
        assert!((driver.state().total_time() - 0.064).abs() < 1e-12);
    }

    #[test]
    fn detached_on_first_frame_ends_loop() {
        let mut blank = canvas();
        blank.attached = false;
        let mut driver = Driver::new(blank, recorder(), Counter::default(), true);
        driver.start();
        driver.tick(0.0);
        assert!(!driver.is_running());
        assert_eq!(driver.scheduler().requested, 1);
        assert_eq!(driver.canvas().clears, 0);
    }

    #[test]
    fn restart_resets_clock() {
        let mut driver = Driver::new(canvas(), recorder(), Counter::default(), true);
        driver.start();
        driver.tick(0.0);
        driver.tick(2_000.0);
        driver.start();
        assert_eq!(driver.state().total_time(), 0.0);
        assert_eq!(driver.scheduler().cancelled, vec![3]);
    }

    #[test]
    fn failed_request_ends_loop() {
        let mut driver = Driver::new(canvas(), recorder(), Exhausting { budget: 1 }, true);
        driver.start();
        assert!(driver.is_running());

        driver.tick(0.0);
        assert!(!driver.is_running());
        assert_eq!(driver.canvas().clears, 1);
    }

    #[test]
    fn failed_first_request_never_runs() {
        let mut driver = Driver::new(canvas(), recorder(), Exhausting { budget: 0 }, true);
        driver.start();
        assert!(!driver.is_running());

        driver.tick(0.0);
        assert_eq!(driver.canvas().clears, 0);
    }
}
