use serde::{Deserialize, Serialize};

/// Represents a point in global map coordinates or pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(&self, other: &Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract(&self, other: &Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    pub fn multiply(&self, scalar: f64) -> Point {
        Point::new(self.x * scalar, self.y * scalar)
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Rotates the point around the origin by `angle` radians (counter-clockwise)
    pub fn rotate(&self, angle: f64) -> Point {
        let (sin, cos) = angle.sin_cos();
        Point::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Axis-aligned rectangle given by its min and max corners
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Creates a rectangle from the origin to `size`
    pub fn from_size(size: Point) -> Self {
        Self::new(Point::default(), size)
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    /// Translates both corners by `delta`
    pub fn offset(&mut self, delta: Point) {
        self.min = self.min.add(&delta);
        self.max = self.max.add(&delta);
    }

    /// Scales both corners relative to the origin
    pub fn scale(&mut self, factor: f64) {
        self.min = self.min.multiply(factor);
        self.max = self.max.multiply(factor);
    }

    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// An oriented rectangle: `local_rect` placed at `origin` and rotated by `angle`.
/// This is the shape the renderer receives as the animated viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnyRect {
    origin: Point,
    angle: f64,
    local_rect: Rect,
}

impl AnyRect {
    pub fn new(origin: Point, angle: f64, local_rect: Rect) -> Self {
        Self {
            origin,
            angle,
            local_rect,
        }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn local_rect(&self) -> &Rect {
        &self.local_rect
    }

    /// Converts a point from the rectangle's local coordinates to global coordinates
    pub fn to_global(&self, local: &Point) -> Point {
        local.rotate(self.angle).add(&self.origin)
    }

    /// The four corners in global coordinates, counter-clockwise from min
    pub fn global_points(&self) -> [Point; 4] {
        let r = &self.local_rect;
        [
            self.to_global(&Point::new(r.min.x, r.min.y)),
            self.to_global(&Point::new(r.max.x, r.min.y)),
            self.to_global(&Point::new(r.max.x, r.max.y)),
            self.to_global(&Point::new(r.min.x, r.max.y)),
        ]
    }

    pub fn global_center(&self) -> Point {
        self.to_global(&self.local_rect.center())
    }
}
