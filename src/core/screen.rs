use crate::core::geo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// The viewport converter: maps between global map coordinates and screen
/// pixels, and reports the current view state (center, scale, angle).
///
/// The animation core only reads from it; the embedding application owns it
/// and commits new state after each frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    /// Global coordinates under the center of the pixel rectangle
    org: Point,
    /// Global units per pixel
    scale: f64,
    /// View rotation in radians
    angle: f64,
    /// Screen rectangle in pixels, origin at (0, 0)
    pixel_rect: Rect,
}

impl Screen {
    pub fn new(org: Point, scale: f64, angle: f64, pixel_size: Point) -> Self {
        debug_assert!(scale > 0.0, "screen scale must be positive");
        Self {
            org,
            scale,
            angle,
            pixel_rect: Rect::from_size(pixel_size),
        }
    }

    pub fn pixel_rect(&self) -> Rect {
        self.pixel_rect
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Global coordinates of the view center
    pub fn org(&self) -> Point {
        self.org
    }

    /// Converts global map coordinates to screen pixels
    pub fn to_pixel(&self, global: &Point) -> Point {
        global
            .subtract(&self.org)
            .rotate(-self.angle)
            .multiply(1.0 / self.scale)
            .add(&self.pixel_rect.center())
    }

    /// Converts screen pixels back to global map coordinates
    pub fn to_global(&self, pixel: &Point) -> Point {
        pixel
            .subtract(&self.pixel_rect.center())
            .multiply(self.scale)
            .rotate(self.angle)
            .add(&self.org)
    }

    pub fn set_org(&mut self, org: Point) {
        self.org = org;
    }

    pub fn set_scale(&mut self, scale: f64) {
        debug_assert!(scale > 0.0, "screen scale must be positive");
        self.scale = scale;
    }

    pub fn set_angle(&mut self, angle: f64) {
        self.angle = angle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn test_screen() -> Screen {
        Screen::new(Point::new(0.0, 0.0), 1.0, 0.0, Point::new(1000.0, 1000.0))
    }

    #[test]
    fn test_pixel_conversion_identity_scale() {
        let screen = test_screen();

        let center = screen.to_pixel(&Point::new(0.0, 0.0));
        assert_eq!(center, Point::new(500.0, 500.0));

        // Distances survive the conversion untouched at scale 1
        let a = screen.to_pixel(&Point::new(0.0, 0.0));
        let b = screen.to_pixel(&Point::new(500.0, 0.0));
        assert_eq!(a.distance_to(&b), 500.0);
    }

    #[test]
    fn test_round_trip() {
        let screen = Screen::new(
            Point::new(37.0, -122.0),
            0.5,
            FRAC_PI_2 / 3.0,
            Point::new(800.0, 600.0),
        );

        let global = Point::new(40.0, -120.0);
        let back = screen.to_global(&screen.to_pixel(&global));
        assert!((back.x - global.x).abs() < 1e-9);
        assert!((back.y - global.y).abs() < 1e-9);
    }

    #[test]
    fn test_scale_shrinks_pixel_distance() {
        let screen = Screen::new(Point::new(0.0, 0.0), 2.0, 0.0, Point::new(1000.0, 1000.0));

        let a = screen.to_pixel(&Point::new(0.0, 0.0));
        let b = screen.to_pixel(&Point::new(500.0, 0.0));
        assert_eq!(a.distance_to(&b), 250.0);
    }
}
