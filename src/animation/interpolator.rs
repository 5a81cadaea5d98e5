use crate::animation::interpolation::{lerp_double, lerp_point};
use crate::core::constants::{
    MAX_SPEED_SCALAR, MIN_MOVE_DURATION, MIN_SPEED_SCALAR, POSITION_EPSILON,
    ROTATION_ANGLE_STEP, ROTATION_STEP_DURATION, SCALE_EPSILON, SCALE_SPEED,
};
use crate::core::geo::Point;
use crate::core::screen::Screen;

/// Duration of a constant-speed animation covering `diff` at `speed` per second
fn speed_duration(diff: f64, speed: f64) -> f64 {
    diff.abs() / speed
}

/// Time accounting shared by all interpolators: elapsed time, an optional
/// start delay, and a total duration. Progress `t` runs from 0 to 1 over
/// `[delay, delay + duration]`.
#[derive(Debug, Clone)]
pub struct Interpolator {
    elapsed_time: f64,
    duration: f64,
    delay: f64,
}

impl Interpolator {
    pub fn new(duration: f64, delay: f64) -> Self {
        debug_assert!(duration >= 0.0, "interpolator duration must not be negative");
        debug_assert!(delay >= 0.0, "interpolator delay must not be negative");
        Self {
            elapsed_time: 0.0,
            duration,
            delay,
        }
    }

    pub fn advance(&mut self, elapsed_seconds: f64) {
        debug_assert!(elapsed_seconds >= 0.0, "time never runs backwards");
        self.elapsed_time += elapsed_seconds;
    }

    /// Clamps the duration down to `max_duration`. Never grows it.
    pub fn set_max_duration(&mut self, max_duration: f64) {
        self.duration = self.duration.min(max_duration);
    }

    /// Normalized progress in [0, 1]
    pub fn t(&self) -> f64 {
        if self.is_finished() || self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed_time - self.delay).max(0.0) / self.duration
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed_time > self.duration + self.delay
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }

    /// Jumps past the end so that `is_finished` holds and `t` reports 1
    pub fn finish(&mut self) {
        self.elapsed_time = self.duration + self.delay + 1.0;
    }
}

/// Moves a point across the map plane. The duration is derived from the
/// on-screen pixel distance so travel feels consistent across devices.
#[derive(Debug, Clone)]
pub struct PositionInterpolator {
    timing: Interpolator,
    start_position: Point,
    end_position: Point,
    position: Point,
}

impl PositionInterpolator {
    pub fn new(start_position: Point, end_position: Point, screen: &Screen) -> Self {
        Self::with_delay(0.0, start_position, end_position, screen)
    }

    pub fn with_delay(
        delay: f64,
        start_position: Point,
        end_position: Point,
        screen: &Screen,
    ) -> Self {
        Self {
            timing: Interpolator::new(
                Self::move_duration(&start_position, &end_position, screen),
                delay,
            ),
            start_position,
            end_position,
            position: start_position,
        }
    }

    /// Duration for a pan, derived from its length in screen pixels:
    /// negligible moves are instant, short moves get a fixed floor so they
    /// do not flicker, and longer moves run at a speed proportional to the
    /// smaller viewport side.
    pub fn move_duration(start_position: &Point, end_position: &Point, screen: &Screen) -> f64 {
        let pixel_length = screen
            .to_pixel(end_position)
            .distance_to(&screen.to_pixel(start_position));
        if pixel_length < POSITION_EPSILON {
            return 0.0;
        }

        let pixel_rect = screen.pixel_rect();
        let min_size = pixel_rect.width().min(pixel_rect.height());
        if pixel_length < MIN_SPEED_SCALAR * min_size {
            return MIN_MOVE_DURATION;
        }

        speed_duration(pixel_length, MAX_SPEED_SCALAR * min_size)
    }

    pub fn advance(&mut self, elapsed_seconds: f64) {
        self.timing.advance(elapsed_seconds);
        self.position = lerp_point(&self.start_position, &self.end_position, self.timing.t());
    }

    pub fn set_max_duration(&mut self, max_duration: f64) {
        self.timing.set_max_duration(max_duration);
    }

    pub fn is_finished(&self) -> bool {
        self.timing.is_finished()
    }

    pub fn duration(&self) -> f64 {
        self.timing.duration()
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn finish(&mut self) {
        self.timing.finish();
        self.position = self.end_position;
    }
}

/// Rotates the map plane. Half a second per 45 degrees of arc; endpoints are
/// interpolated as plain scalars, so callers pre-normalize the end angle to
/// the shortest arc from the start.
#[derive(Debug, Clone)]
pub struct AngleInterpolator {
    timing: Interpolator,
    start_angle: f64,
    end_angle: f64,
    angle: f64,
}

impl AngleInterpolator {
    pub fn new(start_angle: f64, end_angle: f64) -> Self {
        Self::with_delay(0.0, start_angle, end_angle)
    }

    pub fn with_delay(delay: f64, start_angle: f64, end_angle: f64) -> Self {
        Self {
            timing: Interpolator::new(Self::rotate_duration(start_angle, end_angle), delay),
            start_angle,
            end_angle,
            angle: start_angle,
        }
    }

    pub fn rotate_duration(start_angle: f64, end_angle: f64) -> f64 {
        ROTATION_STEP_DURATION * (end_angle - start_angle).abs() / ROTATION_ANGLE_STEP
    }

    pub fn advance(&mut self, elapsed_seconds: f64) {
        self.timing.advance(elapsed_seconds);
        self.angle = lerp_double(self.start_angle, self.end_angle, self.timing.t());
    }

    pub fn set_max_duration(&mut self, max_duration: f64) {
        self.timing.set_max_duration(max_duration);
    }

    pub fn is_finished(&self) -> bool {
        self.timing.is_finished()
    }

    pub fn duration(&self) -> f64 {
        self.timing.duration()
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn finish(&mut self) {
        self.timing.finish();
        self.angle = self.end_angle;
    }
}

/// Zooms the map plane. Duration grows with the resize ratio; the scalar is
/// interpolated linearly in the original direction.
#[derive(Debug, Clone)]
pub struct ScaleInterpolator {
    timing: Interpolator,
    start_scale: f64,
    end_scale: f64,
    scale: f64,
}

impl ScaleInterpolator {
    pub fn new(start_scale: f64, end_scale: f64) -> Self {
        Self::with_delay(0.0, start_scale, end_scale)
    }

    pub fn with_delay(delay: f64, start_scale: f64, end_scale: f64) -> Self {
        Self {
            timing: Interpolator::new(Self::scale_duration(start_scale, end_scale), delay),
            start_scale,
            end_scale,
            scale: start_scale,
        }
    }

    pub fn scale_duration(start_scale: f64, end_scale: f64) -> f64 {
        let ratio = start_scale.max(end_scale) / start_scale.min(end_scale);
        if (ratio - 1.0).abs() < SCALE_EPSILON {
            return 0.0;
        }
        speed_duration(ratio, SCALE_SPEED)
    }

    pub fn advance(&mut self, elapsed_seconds: f64) {
        self.timing.advance(elapsed_seconds);
        self.scale = lerp_double(self.start_scale, self.end_scale, self.timing.t());
    }

    pub fn set_max_duration(&mut self, max_duration: f64) {
        self.timing.set_max_duration(max_duration);
    }

    pub fn is_finished(&self) -> bool {
        self.timing.is_finished()
    }

    pub fn duration(&self) -> f64 {
        self.timing.duration()
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn finish(&mut self) {
        self.timing.finish();
        self.scale = self.end_scale;
    }
}
