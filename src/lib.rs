//! # Mapmotion
//!
//! An animation system for 2D map views: schedules, composes and advances
//! time-based transitions of the map plane (position, rotation and zoom) so
//! that gestures like follow-me, fly-to and rotate appear as smooth
//! continuous motion instead of discrete jumps.
//!
//! ## How it fits together
//!
//! - Gestures build a [`FollowAnimation`] (or compose several animations
//!   with [`ParallelAnimation`] / [`SequenceAnimation`]) and hand it to the
//!   [`AnimationSystem`].
//! - The scheduler decides whether the newcomer can *mix* with what is
//!   already running, must *interrupt* it, or *queues* behind it.
//! - Each frame the renderer calls [`AnimationSystem::advance`] with the
//!   elapsed seconds, then reads the effective view state back through
//!   [`AnimationSystem::rect`] or individual property queries.
//!
//! ```rust
//! use mapmotion::{AnimationBuilder, AnimationSystem, Point, Screen};
//!
//! let screen = Screen::new(Point::new(0.0, 0.0), 1.0, 0.0, Point::new(1000.0, 1000.0));
//! let mut system = AnimationSystem::new();
//!
//! let pan = AnimationBuilder::pan(&screen, Point::new(500.0, 0.0)).unwrap();
//! system.add_animation(Box::new(pan), false);
//!
//! system.advance(0.016);
//! let viewport = system.rect(&screen);
//! # let _ = viewport;
//! ```
//!
//! The core holds no clocks and spawns no threads; everything runs on the
//! render thread, driven by caller-supplied elapsed time.

pub mod animation;
pub mod core;

// Re-export public API
pub use crate::animation::{
    Animation, AnimationBuilder, AnimationSystem, FollowAnimation, Interpolatable, Object,
    ParallelAnimation, Property, PropertyValue, SequenceAnimation,
};

pub use crate::core::{
    geo::{AnyRect, Point, Rect},
    screen::Screen,
};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, AnimationError>;

/// Errors raised by the gesture-level construction helpers. The animation
/// core itself never fails; contract violations inside it are debug
/// assertions.
#[derive(Debug, thiserror::Error)]
pub enum AnimationError {
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Invalid scale: {0}")]
    InvalidScale(f64),

    #[error("Invalid angle: {0}")]
    InvalidAngle(f64),
}

/// Error type alias for convenience
pub type Error = AnimationError;
