//! Parametric star schemes.
//!
//! Every visual attribute of a star is a pure function of the frame time, the
//! star index, the star count and the surface size. Nothing is carried over
//! from one frame to the next, so evaluating a scheme twice with the same inputs
//! yields bit-identical results.

use std::f64::consts::TAU;

use crate::draw::Frame;
use crate::star::fill_star;
use crate::surface::{Canvas, Color, Point};

mod catalog;

pub use catalog::CATALOG;

/// Stars drawn per frame.
pub const STAR_COUNT: usize = 16;

/// Opacity of the black veil painted over the previous frame.
pub const TRAIL_ALPHA: f64 = 0.1;

pub const ORBIT_RADIUS: f64 = 0.35;
pub const BASE_SIZE: f64 = 0.04;
/// Radians per second.
pub const ORBIT_SPEED: f64 = 0.5;
/// Radians per second added to each star's own spin.
pub const ROTATION_SPEED: f64 = 4.0;
/// Full hue turns per second.
pub const COLOR_CYCLE_SPEED: f64 = 0.5;
/// Pulses per second.
pub const PULSE_SPEED: f64 = 0.5;

pub type PositionFn = fn(&Element) -> Point;
pub type SizeFn = fn(&Element) -> f64;
pub type HueFn = fn(&Element) -> f64;

/// One star of a frame, identified by its index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Element {
    pub index: usize,
    pub count: usize,
    pub time: f64,
    pub width: f64,
    pub height: f64,
}

impl Element {
    pub fn new(index: usize, count: usize, time: f64, width: f64, height: f64) -> Self {
        Self {
            index,
            count,
            time,
            width,
            height,
        }
    }

    /// `index / count`, in `[0, 1)`.
    pub fn progress(&self) -> f64 {
        self.index as f64 / self.count.max(1) as f64
    }

    /// Angular slot of this star on a full turn.
    pub fn phase(&self) -> f64 {
        self.progress() * TAU
    }

    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn orbit_radius(&self) -> f64 {
        self.min_side() * ORBIT_RADIUS
    }

    pub fn base_size(&self) -> f64 {
        self.min_side() * BASE_SIZE
    }

    /// Orbit angle of the default motion.
    pub fn angle(&self) -> f64 {
        self.phase() + self.time * ORBIT_SPEED
    }

    /// Shared pulse in `[0, 1]`.
    pub fn pulse(&self) -> f64 {
        0.5 + 0.5 * (self.time * PULSE_SPEED * TAU).sin()
    }

    /// Hue offset driven by the colour cycle, in `[0, 360)`.
    pub fn color_cycle(&self) -> f64 {
        (self.time * COLOR_CYCLE_SPEED * 360.0) % 360.0
    }

    /// Point at `angle` and `radius` around the centre.
    pub fn polar(&self, angle: f64, radius: f64) -> Point {
        let center = self.center();
        Point::new(center.x + angle.cos() * radius, center.y + angle.sin() * radius)
    }
}

/// Everything needed to paint one star.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarParams {
    pub position: Point,
    pub size: f64,
    pub hue: f64,
    pub rotation: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl StarParams {
    pub fn color(&self) -> Color {
        Color::Hsl {
            hue: self.hue,
            saturation: self.saturation,
            lightness: self.lightness,
        }
    }
}

/// Wrap any angle in degrees into `[0, 360)`.
pub fn normalize_hue(hue: f64) -> f64 {
    let wrapped = hue.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Default behaviour shared by every scheme.
pub mod base {
    use super::*;

    pub fn position(element: &Element) -> Point {
        element.polar(element.angle(), element.orbit_radius())
    }

    pub fn size(element: &Element) -> f64 {
        element.base_size() * (0.8 + element.pulse() * 0.4)
    }

    pub fn hue(element: &Element) -> f64 {
        let position_hue = element.progress() * 360.0;
        let pulse_hue = (element.time * PULSE_SPEED * 360.0) % 360.0;
        let global_shift = element.color_cycle();
        (position_hue + pulse_hue + global_shift) % 360.0
    }

    pub fn rotation(element: &Element) -> f64 {
        element.time * ROTATION_SPEED + element.angle()
    }

    pub fn lightness(element: &Element) -> f64 {
        50.0 + element.pulse() * 20.0
    }
}

/// A named motion/colour scheme. Unset functions fall back to [`base`].
#[derive(Clone, Copy)]
pub struct Scheme {
    pub name: &'static str,
    position: Option<PositionFn>,
    size: Option<SizeFn>,
    hue: Option<HueFn>,
}

impl Scheme {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            position: None,
            size: None,
            hue: None,
        }
    }

    pub const fn position(mut self, position: PositionFn) -> Self {
        self.position = Some(position);
        self
    }

    pub const fn size(mut self, size: SizeFn) -> Self {
        self.size = Some(size);
        self
    }

    pub const fn hue(mut self, hue: HueFn) -> Self {
        self.hue = Some(hue);
        self
    }

    pub fn star(&self, element: &Element) -> StarParams {
        let position = self.position.unwrap_or(base::position)(element);
        let size = self.size.unwrap_or(base::size)(element).max(0.0);
        let hue = normalize_hue(self.hue.unwrap_or(base::hue)(element));
        StarParams {
            position,
            size,
            hue,
            rotation: base::rotation(element),
            saturation: 100.0,
            lightness: base::lightness(element),
        }
    }

    /// Fade the previous frame and paint `count` stars.
    pub fn paint(&self, canvas: &mut dyn Canvas, frame: &Frame, count: usize, trail_alpha: f64) {
        let fade = Color::Rgba {
            r: 0,
            g: 0,
            b: 0,
            a: trail_alpha,
        };
        canvas.fill_rect(0.0, 0.0, frame.width, frame.height, fade);

        for index in 0..count {
            let element = Element::new(index, count, frame.total_time, frame.width, frame.height);
            let star = self.star(&element);
            fill_star(canvas, star.position, star.rotation, star.size, star.color());
        }
    }
}

impl std::fmt::Debug for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheme").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Look up a scheme by catalog name, ignoring case.
pub fn find(name: &str) -> Option<usize> {
    CATALOG.iter().position(|scheme| scheme.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn base_orbit_starts_on_phase() {
        let scheme = Scheme::new("plain");
        for index in 0..STAR_COUNT {
            let element = Element::new(index, STAR_COUNT, 0.0, 800.0, 600.0);
            let star = scheme.star(&element);
            let center = element.center();
            assert!((star.position.distance(&center) - 210.0).abs() < EPS);

            let expected = index as f64 / STAR_COUNT as f64 * TAU;
            let angle = (star.position.y - center.y)
                .atan2(star.position.x - center.x)
                .rem_euclid(TAU);
            let diff = (angle - expected).abs();
            assert!(
                diff < 1e-9 || (diff - TAU).abs() < 1e-9,
                "index {index}: {angle} vs {expected}"
            );
        }
    }

    #[test]
    fn base_size_follows_pulse() {
        // at t = 0 the pulse sits at its midpoint
        let element = Element::new(0, STAR_COUNT, 0.0, 1000.0, 500.0);
        assert!((base::size(&element) - 20.0).abs() < EPS);
        // a quarter period later it peaks
        let element = Element::new(0, STAR_COUNT, 0.5, 1000.0, 500.0);
        assert!((base::size(&element) - 24.0).abs() < EPS);
        assert!((base::lightness(&element) - 70.0).abs() < EPS);
    }

    #[test]
    fn base_hue_counts_the_cycle_twice() {
        let element = Element::new(4, 16, 0.25, 100.0, 100.0);
        // 90 (position) + 45 (pulse) + 45 (global)
        assert!((base::hue(&element) - 180.0).abs() < EPS);
    }

    #[test]
    fn normalize_hue_range() {
        assert_eq!(normalize_hue(-30.0), 330.0);
        assert_eq!(normalize_hue(720.0), 0.0);
        assert_eq!(normalize_hue(-1e-17), 0.0);
        assert!(normalize_hue(359.999) < 360.0);
    }

    #[test]
    fn rotation_spins_faster_than_orbit() {
        let element = Element::new(0, 16, 1.0, 100.0, 100.0);
        assert!((base::rotation(&element) - 4.5).abs() < EPS);
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(find("spiral"), Some(3));
        assert_eq!(find("TIME DILATION"), Some(16));
        assert_eq!(find("plasma"), None);
    }
}
