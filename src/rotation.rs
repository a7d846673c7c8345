use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use crate::draw::{Draw, Frame};
use crate::scheme::Scheme;
use crate::surface::Canvas;

/// Seconds each scheme stays on screen.
pub const ROTATION_INTERVAL: f64 = 10.0;

/// Cycles the active scheme on a wall-clock timer, independent of frame timing.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemeRotation {
    active: usize,
    count: usize,
    interval: f64,
    /// Simulated seconds not yet converted into steps.
    carry: f64,
}

impl SchemeRotation {
    pub fn new(count: usize, interval: f64) -> Self {
        Self {
            active: 0,
            count: count.max(1),
            interval,
            carry: 0.0,
        }
    }

    pub fn starting_at(mut self, index: usize) -> Self {
        self.active = index % self.count;
        self
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Move to the next scheme, wrapping after the last one.
    pub fn step(&mut self) -> usize {
        self.active = (self.active + 1) % self.count;
        debug!("active scheme is now #{}", self.active);
        self.active
    }

    /// Let `seconds` of wall-clock time pass, stepping once per elapsed interval.
    /// Returns the number of steps taken.
    pub fn elapse(&mut self, seconds: f64) -> usize {
        if self.interval <= 0.0 || seconds <= 0.0 {
            return 0;
        }
        self.carry += seconds;
        let mut steps = 0;
        while self.carry >= self.interval {
            self.carry -= self.interval;
            self.step();
            steps += 1;
        }
        steps
    }
}

/// Draws whichever scheme the shared rotation currently points at.
pub struct RotatingDraw {
    schemes: &'static [Scheme],
    rotation: Rc<RefCell<SchemeRotation>>,
    star_count: usize,
    trail_alpha: f64,
}

impl RotatingDraw {
    pub fn new(
        schemes: &'static [Scheme],
        rotation: Rc<RefCell<SchemeRotation>>,
        star_count: usize,
        trail_alpha: f64,
    ) -> Self {
        Self {
            schemes,
            rotation,
            star_count,
            trail_alpha,
        }
    }

    pub fn active_scheme(&self) -> &'static Scheme {
        let index = self.rotation.borrow().active();
        &self.schemes[index % self.schemes.len()]
    }
}

impl Draw for RotatingDraw {
    fn draw(&mut self, canvas: &mut dyn Canvas, frame: &Frame) {
        self.active_scheme().paint(canvas, frame, self.star_count, self.trail_alpha);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_around() {
        let mut rotation = SchemeRotation::new(3, ROTATION_INTERVAL);
        assert_eq!(rotation.step(), 1);
        assert_eq!(rotation.step(), 2);
        assert_eq!(rotation.step(), 0);
    }

    #[test]
    fn full_cycle_is_identity() {
        let mut rotation = SchemeRotation::new(17, ROTATION_INTERVAL).starting_at(5);
        for _ in 0..17 {
            rotation.step();
        }
        assert_eq!(rotation.active(), 5);
    }

    #[test]
    fn elapse_steps_per_interval() {
        let mut rotation = SchemeRotation::new(17, ROTATION_INTERVAL);
        assert_eq!(rotation.elapse(9.5), 0);
        assert_eq!(rotation.elapse(0.5), 1);
        assert_eq!(rotation.elapse(25.0), 2);
        assert_eq!(rotation.active(), 3);
    }

    #[test]
    fn zero_count_does_not_divide_by_zero() {
        let mut rotation = SchemeRotation::new(0, ROTATION_INTERVAL);
        assert_eq!(rotation.step(), 0);
    }
}
