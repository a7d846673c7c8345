use std::f64::consts::PI;

use crate::surface::{Canvas, Color, Point};

/// Number of tips on every star.
pub const STAR_POINTS: usize = 5;

/// Inner vertex radius relative to the outer radius.
pub const INNER_RATIO: f64 = 0.4;

/// Outline of a star centred on `center`, first tip straight up before rotation.
///
/// Vertices alternate between `outer` and `inner` radius, `2 * points` in total.
pub fn star_outline(
    center: Point,
    rotation: f64,
    outer: f64,
    inner: f64,
    points: usize,
) -> Vec<Point> {
    let step = PI / points as f64;
    // 3π/2 points up in screen coordinates (y grows downwards)
    let start = PI * 1.5 + rotation;

    (0..points * 2)
        .map(|k| {
            let radius = if k % 2 == 0 { outer } else { inner };
            let angle = start + step * k as f64;
            Point::new(center.x + angle.cos() * radius, center.y + angle.sin() * radius)
        })
        .collect()
}

/// Fill a five-pointed star of the given outer radius.
pub fn fill_star(canvas: &mut dyn Canvas, center: Point, rotation: f64, size: f64, color: Color) {
    let outline = star_outline(center, rotation, size, size * INNER_RATIO, STAR_POINTS);
    canvas.fill_polygon(&outline, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn first_tip_points_up() {
        let outline = star_outline(Point::new(10.0, 10.0), 0.0, 5.0, 2.0, 5);
        assert_eq!(outline.len(), 10);
        assert!((outline[0].x - 10.0).abs() < EPS);
        assert!((outline[0].y - 5.0).abs() < EPS);
    }

    #[test]
    fn radii_alternate() {
        let center = Point::new(0.0, 0.0);
        let outline = star_outline(center, 0.7, 10.0, 4.0, 5);
        for (k, vertex) in outline.iter().enumerate() {
            let expected = if k % 2 == 0 { 10.0 } else { 4.0 };
            assert!((vertex.distance(&center) - expected).abs() < EPS, "vertex {k}");
        }
    }

    #[test]
    fn rotation_turns_first_tip() {
        let outline = star_outline(Point::new(0.0, 0.0), PI / 2.0, 1.0, 0.4, 5);
        // a quarter turn clockwise on screen moves the top tip to the right
        assert!((outline[0].x - 1.0).abs() < EPS);
        assert!(outline[0].y.abs() < EPS);
    }
}
