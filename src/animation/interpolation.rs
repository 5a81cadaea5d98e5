use crate::core::geo::Point;

/// Interpolation trait for values that can be smoothly transitioned
pub trait Interpolatable {
    fn lerp(&self, other: &Self, t: f64) -> Self;
}

impl Interpolatable for f64 {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        self + (other - self) * t
    }
}

impl Interpolatable for Point {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        Point::new(self.x.lerp(&other.x, t), self.y.lerp(&other.y, t))
    }
}

/// Linear interpolation between two scalars
pub fn lerp_double(start: f64, end: f64, t: f64) -> f64 {
    start.lerp(&end, t)
}

/// Linear interpolation between two points
pub fn lerp_point(start: &Point, end: &Point, t: f64) -> Point {
    start.lerp(end, t)
}
