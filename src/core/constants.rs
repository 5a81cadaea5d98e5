//! Tuning constants for the map-plane animations.
//! Keeping them in a single place makes it easier to tweak engine-wide magic numbers.

use std::f64::consts::FRAC_PI_4;

/// Shortest allowed pan animation, in seconds. Pans below this floor look
/// like jitter rather than motion.
pub const MIN_MOVE_DURATION: f64 = 0.2;

/// Pans shorter than this fraction of the smaller viewport side get the
/// [`MIN_MOVE_DURATION`] floor instead of the speed formula.
pub const MIN_SPEED_SCALAR: f64 = 0.2;

/// Pan speed in units of the smaller viewport side per second.
pub const MAX_SPEED_SCALAR: f64 = 7.0;

/// Pixel distances below this are not worth animating at all.
pub const POSITION_EPSILON: f64 = 1e-5;

/// Rotation covers this arc in [`ROTATION_STEP_DURATION`] seconds.
pub const ROTATION_ANGLE_STEP: f64 = FRAC_PI_4;

/// Seconds per [`ROTATION_ANGLE_STEP`] of rotation.
pub const ROTATION_STEP_DURATION: f64 = 0.5;

/// Scale speed: a 2x resize takes 0.3 seconds.
pub const SCALE_SPEED: f64 = 2.0 / 0.3;

/// Scale ratios this close to 1 are not animated.
pub const SCALE_EPSILON: f64 = 1e-5;
