//! The drawing surface seen by schemes and the driver.

use std::fmt;

/// A point in surface pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Fill colour, rendered as a CSS colour string.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Rgba { r: u8, g: u8, b: u8, a: f64 },
    /// Hue in degrees, saturation and lightness in percent.
    Hsl {
        hue: f64,
        saturation: f64,
        lightness: f64,
    },
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgba { r, g, b, a } => write!(f, "rgba({r}, {g}, {b}, {a})"),
            Color::Hsl {
                hue,
                saturation,
                lightness,
            } => {
                write!(f, "hsl({hue}, {saturation}%, {lightness}%)")
            }
        }
    }
}

/// Minimal 2D painting interface.
///
/// The browser implementation forwards to `CanvasRenderingContext2d`; tests use a
/// recording implementation. Width and height are always the pixel buffer size.
pub trait Canvas {
    fn width(&self) -> f64;

    fn height(&self) -> f64;

    /// Resize the pixel buffer. Prior contents are discarded.
    fn resize(&mut self, width: u32, height: u32);

    /// Whether the surface is still attached to something that can display it.
    fn is_attached(&self) -> bool {
        true
    }

    /// Reset every pixel to transparent.
    fn clear(&mut self);

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color);

    /// Fill a closed simple polygon.
    fn fill_polygon(&mut self, points: &[Point], color: Color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_strings() {
        let fade = Color::Rgba {
            r: 0,
            g: 0,
            b: 0,
            a: 0.1,
        };
        assert_eq!(fade.to_string(), "rgba(0, 0, 0, 0.1)");

        let star = Color::Hsl {
            hue: 120.0,
            saturation: 100.0,
            lightness: 62.5,
        };
        assert_eq!(star.to_string(), "hsl(120, 100%, 62.5%)");
    }

    #[test]
    fn point_distance() {
        assert_eq!(Point::new(0.0, 0.0).distance(&Point::new(3.0, 4.0)), 5.0);
    }
}
