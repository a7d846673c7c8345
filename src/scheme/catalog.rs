use std::f64::consts::{PI, TAU};

use super::{Element, Scheme};
use crate::surface::Point;

/// All schemes in presentation order.
pub static CATALOG: [Scheme; 17] = [
    Scheme::new("Circular Orbit"),
    Scheme::new("Pulsing Stars").position(pulsing::position).size(pulsing::size),
    Scheme::new("Figure 8").position(figure_eight),
    Scheme::new("Spiral").position(spiral::position).size(spiral::size),
    Scheme::new("Sine Wave").position(sine_wave::position).hue(sine_wave::hue),
    Scheme::new("Radial Pulse").position(radial_pulse::position).size(radial_pulse::size),
    Scheme::new("Color Cyclone").position(cyclone::position).hue(cyclone::hue),
    Scheme::new("Black Hole")
        .position(black_hole::position)
        .size(black_hole::size)
        .hue(black_hole::hue),
    Scheme::new("Quantum Rings")
        .position(quantum_rings::position)
        .size(quantum_rings::size)
        .hue(quantum_rings::hue),
    Scheme::new("Chasing Comets")
        .position(comets::position)
        .size(comets::size)
        .hue(comets::hue),
    Scheme::new("Neural Network")
        .position(neural::position)
        .size(neural::size)
        .hue(neural::hue),
    Scheme::new("DNA Helix").position(helix::position).size(helix::size).hue(helix::hue),
    Scheme::new("Magnetic Field").position(magnetic::position).size(magnetic::size),
    Scheme::new("Particle Storm").position(storm::position).size(storm::size).hue(storm::hue),
    Scheme::new("Fractal Bloom").position(bloom::position).size(bloom::size).hue(bloom::hue),
    Scheme::new("Galactic Core")
        .position(galaxy::position)
        .size(galaxy::size)
        .hue(galaxy::hue),
    Scheme::new("Time Dilation")
        .position(dilation::position)
        .size(dilation::size)
        .hue(dilation::hue),
];

mod pulsing {
    use super::*;

    pub fn position(e: &Element) -> Point {
        let breath = 0.6 + 0.4 * (e.time * 2.0 + e.phase()).sin();
        e.polar(e.angle(), e.orbit_radius() * breath)
    }

    pub fn size(e: &Element) -> f64 {
        let beat = 0.5 + 0.5 * (e.time * 3.0 + e.phase()).sin();
        e.base_size() * (0.4 + 0.8 * beat)
    }
}

fn figure_eight(e: &Element) -> Point {
    let center = e.center();
    let a = e.angle();
    let r = e.orbit_radius();
    Point::new(center.x + a.sin() * r, center.y + a.sin() * a.cos() * r)
}

mod spiral {
    use super::*;

    /// Position along the arm in `[0, 1)`, drifting outwards over time.
    fn progress(e: &Element) -> f64 {
        (e.progress() + e.time * 0.1).fract()
    }

    pub fn position(e: &Element) -> Point {
        let progress = progress(e);
        let angle = progress * 2.0 * TAU + e.time * 0.5;
        let radius = 0.2 + 0.8 * progress;
        e.polar(angle, radius * e.orbit_radius())
    }

    pub fn size(e: &Element) -> f64 {
        e.base_size() * (0.5 + progress(e))
    }
}

mod sine_wave {
    use super::*;

    pub fn position(e: &Element) -> Point {
        let x = e.width * (0.1 + 0.8 * e.progress());
        let y = e.center().y + (e.time * 2.0 + e.phase() * 2.0).sin() * e.orbit_radius() * 0.6;
        Point::new(x, y)
    }

    pub fn hue(e: &Element) -> f64 {
        e.progress() * 360.0 + e.time * 60.0
    }
}

mod radial_pulse {
    use super::*;

    fn wave(e: &Element) -> f64 {
        0.5 + 0.5 * (e.time * 2.0).sin()
    }

    pub fn position(e: &Element) -> Point {
        let angle = e.phase() + e.time * 0.2;
        e.polar(angle, e.orbit_radius() * (0.3 + 0.7 * wave(e)))
    }

    pub fn size(e: &Element) -> f64 {
        e.base_size() * (0.6 + 0.6 * wave(e))
    }
}

mod cyclone {
    use super::*;

    pub fn position(e: &Element) -> Point {
        let angle = e.phase() + e.time * 1.5;
        let radius = e.orbit_radius() * (0.5 + 0.5 * (e.time + e.phase() * 3.0).sin());
        e.polar(angle, radius)
    }

    pub fn hue(e: &Element) -> f64 {
        e.progress() * 720.0 + e.time * 180.0
    }
}

mod black_hole {
    use super::*;

    /// How far the star has fallen towards the centre, in `[0, 1)`.
    fn fall(e: &Element) -> f64 {
        (e.progress() + e.time * 0.2).fract()
    }

    pub fn position(e: &Element) -> Point {
        let fall = fall(e);
        // angular speed grows as the star nears the centre
        let angle = e.phase() + fall * 3.0 * TAU;
        e.polar(angle, e.orbit_radius() * (1.0 - fall))
    }

    pub fn size(e: &Element) -> f64 {
        e.base_size() * (0.3 + 1.2 * (1.0 - fall(e)))
    }

    pub fn hue(e: &Element) -> f64 {
        260.0 + fall(e) * 60.0
    }
}

mod quantum_rings {
    use super::*;

    const RINGS: usize = 3;

    fn ring(e: &Element) -> usize {
        e.index % RINGS
    }

    pub fn position(e: &Element) -> Point {
        let ring = ring(e);
        let direction = if ring % 2 == 0 { 1.0 } else { -1.0 };
        let angle = e.phase() + direction * e.time * (1.0 + ring as f64 * 0.5);
        e.polar(angle, e.orbit_radius() * (0.4 + ring as f64 * 0.3))
    }

    pub fn size(e: &Element) -> f64 {
        e.base_size() * (1.2 - ring(e) as f64 * 0.2)
    }

    pub fn hue(e: &Element) -> f64 {
        ring(e) as f64 * 120.0 + e.time * 90.0
    }
}

mod comets {
    use super::*;

    const TAIL: usize = 4;

    /// (comet, position in its tail)
    fn slot(e: &Element) -> (f64, f64) {
        ((e.index / TAIL) as f64, (e.index % TAIL) as f64)
    }

    pub fn position(e: &Element) -> Point {
        let (comet, tail) = slot(e);
        let angle = comet * PI / 2.0 + e.time * 1.2 - tail * 0.15;
        let radius = e.orbit_radius() * (0.8 + 0.2 * (e.time * 0.7 + comet).sin());
        e.polar(angle, radius)
    }

    pub fn size(e: &Element) -> f64 {
        let (_, tail) = slot(e);
        e.base_size() * (1.4 - tail * 0.3)
    }

    pub fn hue(e: &Element) -> f64 {
        let (comet, tail) = slot(e);
        comet * 90.0 + e.time * 45.0 + tail * 8.0
    }
}

mod neural {
    use super::*;

    /// (column, row, columns, rows) of the star in a square-ish grid.
    fn cell(e: &Element) -> (f64, f64, f64, f64) {
        let columns = (e.count.max(1) as f64).sqrt().ceil().max(1.0) as usize;
        let rows = e.count.max(1).div_ceil(columns);
        (
            (e.index % columns) as f64,
            (e.index / columns) as f64,
            columns as f64,
            rows as f64,
        )
    }

    /// Signal travelling diagonally across the grid.
    fn firing(e: &Element) -> f64 {
        let (column, row, _, _) = cell(e);
        (e.time * 3.0 - (column + row) * 0.8).sin().max(0.0)
    }

    pub fn position(e: &Element) -> Point {
        let (column, row, columns, rows) = cell(e);
        let center = e.center();
        let spacing = 2.0 * e.orbit_radius() / (columns.max(rows) - 1.0).max(1.0);
        let jitter = e.min_side() * 0.02;
        let i = e.index as f64;
        let wobble_x = (e.time * 1.3 + i).sin() * jitter;
        let wobble_y = (e.time * 1.7 + i * 1.3).cos() * jitter;
        Point::new(
            center.x + (column - (columns - 1.0) / 2.0) * spacing + wobble_x,
            center.y + (row - (rows - 1.0) / 2.0) * spacing + wobble_y,
        )
    }

    pub fn size(e: &Element) -> f64 {
        e.base_size() * (0.6 + 0.8 * firing(e))
    }

    pub fn hue(e: &Element) -> f64 {
        180.0 + 60.0 * firing(e) + e.time * 20.0
    }
}

mod helix {
    use super::*;

    /// (strand, rung, rungs)
    fn place(e: &Element) -> (f64, f64, f64) {
        let rungs = e.count.max(1).div_ceil(2);
        ((e.index % 2) as f64, (e.index / 2) as f64, rungs as f64)
    }

    fn twist(e: &Element) -> f64 {
        let (strand, rung, _) = place(e);
        e.time * 2.0 + rung * 0.6 + strand * PI
    }

    pub fn position(e: &Element) -> Point {
        let (_, rung, rungs) = place(e);
        let x = e.center().x + twist(e).sin() * e.orbit_radius() * 0.6;
        let y = e.height * (0.15 + 0.7 * rung / (rungs - 1.0).max(1.0));
        Point::new(x, y)
    }

    /// Stars on the near side of the helix are drawn larger.
    pub fn size(e: &Element) -> f64 {
        e.base_size() * (0.8 + 0.4 * twist(e).cos())
    }

    pub fn hue(e: &Element) -> f64 {
        let (strand, rung, _) = place(e);
        strand * 180.0 + rung * 10.0 + e.time * 40.0
    }
}

mod magnetic {
    use super::*;

    fn theta(e: &Element) -> f64 {
        e.phase() + e.time * 0.3
    }

    pub fn position(e: &Element) -> Point {
        let theta = theta(e);
        // dipole field line r = sin²θ, kept off the poles
        let reach = 0.15 + 0.85 * theta.sin().powi(2);
        let sway = 1.0 + 0.1 * (e.time * 1.5).sin();
        e.polar(theta, e.orbit_radius() * reach * sway)
    }

    pub fn size(e: &Element) -> f64 {
        e.base_size() * (0.6 + 0.6 * theta(e).sin().powi(2))
    }
}

mod storm {
    use super::*;

    /// Stable per-index noise in `[0, 1)`.
    pub(super) fn noise(seed: f64) -> f64 {
        ((seed.sin() * 43_758.545_3).fract()).abs()
    }

    fn seeds(e: &Element) -> (f64, f64) {
        let i = e.index as f64;
        (noise(i * 12.989_8 + 1.0), noise(i * 78.233 + 2.0))
    }

    pub fn position(e: &Element) -> Point {
        let (a, b) = seeds(e);
        let center = e.center();
        Point::new(
            center.x + (e.time * (0.7 + a) + b * TAU).sin() * e.width * 0.4,
            center.y + (e.time * (0.9 + b) + a * TAU).cos() * e.height * 0.4,
        )
    }

    pub fn size(e: &Element) -> f64 {
        let (a, _) = seeds(e);
        e.base_size() * (0.4 + 0.8 * a)
    }

    pub fn hue(e: &Element) -> f64 {
        let (a, _) = seeds(e);
        a * 360.0 + e.time * 120.0
    }
}

mod bloom {
    use super::*;

    const PETALS: f64 = 3.0;

    fn theta(e: &Element) -> f64 {
        e.phase() + e.time * 0.25
    }

    fn petal(e: &Element) -> f64 {
        (PETALS * theta(e) + e.time).cos().abs()
    }

    pub fn position(e: &Element) -> Point {
        e.polar(theta(e), e.orbit_radius() * (0.25 + 0.75 * petal(e)))
    }

    pub fn size(e: &Element) -> f64 {
        e.base_size() * (0.5 + 0.7 * petal(e))
    }

    pub fn hue(e: &Element) -> f64 {
        300.0 + petal(e) * 120.0 + e.time * 30.0
    }
}

mod galaxy {
    use super::*;

    /// (arm, depth along the arm in `(0, 1]`)
    fn place(e: &Element) -> (f64, f64) {
        let arm_length = e.count.max(1).div_ceil(2) as f64;
        let arm = (e.index % 2) as f64;
        let step = (e.index / 2) as f64;
        (arm, (step + 1.0) / arm_length)
    }

    pub fn position(e: &Element) -> Point {
        let (arm, depth) = place(e);
        // inner stars rotate faster
        let speed = 0.3 + 0.7 * (1.0 - depth);
        let angle = arm * PI + depth * 0.75 * TAU + e.time * speed;
        e.polar(angle, e.orbit_radius() * depth)
    }

    pub fn size(e: &Element) -> f64 {
        let (_, depth) = place(e);
        e.base_size() * (1.3 - 0.6 * depth)
    }

    pub fn hue(e: &Element) -> f64 {
        let (_, depth) = place(e);
        30.0 + depth * 200.0 + e.time * 20.0
    }
}

mod dilation {
    use super::*;

    /// Local time of the star; outer stars age faster.
    fn proper_time(e: &Element) -> f64 {
        e.time * (0.25 + 1.5 * e.progress())
    }

    pub fn position(e: &Element) -> Point {
        let tau = proper_time(e);
        e.polar(e.phase() + tau, e.orbit_radius() * (0.4 + 0.6 * e.progress()))
    }

    pub fn size(e: &Element) -> f64 {
        let tick = 0.5 + 0.5 * (proper_time(e) * PI).sin();
        e.base_size() * (0.7 + 0.6 * tick)
    }

    pub fn hue(e: &Element) -> f64 {
        e.progress() * 360.0 + proper_time(e) * 90.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::STAR_COUNT;

    #[test]
    fn names_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn spiral_anchor() {
        let element = Element::new(0, STAR_COUNT, 0.0, 1000.0, 800.0);
        let star = CATALOG[3].star(&element);
        let r = element.orbit_radius();
        assert!((star.position.x - (500.0 + 0.2 * r)).abs() < 1e-9);
        assert!((star.position.y - 400.0).abs() < 1e-9);
    }

    #[test]
    fn figure_eight_crosses_center() {
        let element = Element::new(0, STAR_COUNT, 0.0, 400.0, 400.0);
        assert_eq!(figure_eight(&element), Point::new(200.0, 200.0));
    }

    #[test]
    fn helix_strands_are_opposite() {
        let left = Element::new(0, STAR_COUNT, 0.3, 600.0, 600.0);
        let right = Element::new(1, STAR_COUNT, 0.3, 600.0, 600.0);
        let center = left.center().x;
        let a = helix::position(&left);
        let b = helix::position(&right);
        assert!(((a.x - center) + (b.x - center)).abs() < 1e-9);
        assert_eq!(a.y, b.y);
    }

    #[test]
    fn neural_grid_is_centred() {
        // 16 stars form a 4x4 grid; at t = 0 jitter only moves by sin/cos of the index
        let first = Element::new(0, 16, 0.0, 500.0, 500.0);
        let p = neural::position(&first);
        let spacing = 2.0 * first.orbit_radius() / 3.0;
        assert!((p.x - (250.0 - 1.5 * spacing)).abs() < 1e-9);
    }

    #[test]
    fn storm_noise_is_unit_range() {
        for i in 0..1000 {
            let n = storm::noise(i as f64 * 0.37);
            assert!((0.0..1.0).contains(&n), "{n}");
        }
    }
}
