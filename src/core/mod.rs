pub mod constants;
pub mod geo;
pub mod screen;

// Re-export commonly used types for convenience
pub use geo::{AnyRect, Point, Rect};
pub use screen::Screen;
