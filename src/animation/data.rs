use crate::core::geo::Point;
use serde::{Deserialize, Serialize};

/// Identifier of an animated entity.
///
/// Only the map plane is animated today; the identifier keeps the scheduler
/// polymorphic so markers or overlays can be added without touching it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Object {
    MapPlane,
}

/// Identifier of an animated attribute on an [`Object`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Property {
    /// 2D point in global map coordinates
    Position,
    /// Rotation in radians
    Angle,
    /// Dimensionless positive zoom factor
    Scale,
}

/// A property value: either a 2D point or a scalar, depending on the property
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    Point(Point),
    Scalar(f64),
}

impl PropertyValue {
    /// Unwraps the point variant. A scalar here is a programming error.
    pub fn as_point(&self) -> Point {
        match self {
            PropertyValue::Point(point) => *point,
            PropertyValue::Scalar(_) => {
                debug_assert!(false, "expected a point property value");
                Point::default()
            }
        }
    }

    /// Unwraps the scalar variant. A point here is a programming error.
    pub fn as_scalar(&self) -> f64 {
        match self {
            PropertyValue::Scalar(value) => *value,
            PropertyValue::Point(_) => {
                debug_assert!(false, "expected a scalar property value");
                0.0
            }
        }
    }
}
