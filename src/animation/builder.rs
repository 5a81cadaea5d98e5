use crate::animation::follow::FollowAnimation;
use crate::core::geo::Point;
use crate::core::screen::Screen;
use crate::{AnimationError, Result};

/// Helper functions for creating common map-plane animations from the
/// current screen state. These are the entry points the gesture layer uses;
/// each validates its inputs before touching the animation core.
pub struct AnimationBuilder;

impl AnimationBuilder {
    /// Creates a pan animation from the current center to `target`
    pub fn pan(screen: &Screen, target: Point) -> Result<FollowAnimation> {
        Self::check_point(&target)?;
        let mut animation = FollowAnimation::new();
        animation.set_move(screen.org(), target, screen);
        Ok(animation)
    }

    /// Creates a rotation animation from the current angle to `target_angle`.
    /// Callers pre-normalize `target_angle` to the shortest arc.
    pub fn rotate(screen: &Screen, target_angle: f64) -> Result<FollowAnimation> {
        if !target_angle.is_finite() {
            return Err(AnimationError::InvalidAngle(target_angle));
        }
        let mut animation = FollowAnimation::new();
        animation.set_rotate(screen.angle(), target_angle);
        Ok(animation)
    }

    /// Creates a zoom animation from the current scale to `target_scale`
    pub fn zoom(screen: &Screen, target_scale: f64) -> Result<FollowAnimation> {
        Self::check_scale(target_scale)?;
        let mut animation = FollowAnimation::new();
        animation.set_scale(screen.scale(), target_scale);
        Ok(animation)
    }

    /// Creates a combined pan/rotate/zoom animation to the given view
    pub fn set_view(
        screen: &Screen,
        target: Point,
        target_angle: f64,
        target_scale: f64,
    ) -> Result<FollowAnimation> {
        Self::check_point(&target)?;
        if !target_angle.is_finite() {
            return Err(AnimationError::InvalidAngle(target_angle));
        }
        Self::check_scale(target_scale)?;

        Ok(FollowAnimation::with_parts(
            screen.org(),
            target,
            screen.angle(),
            target_angle,
            screen.scale(),
            target_scale,
            screen,
        ))
    }

    fn check_point(point: &Point) -> Result<()> {
        if !point.x.is_finite() || !point.y.is_finite() {
            return Err(AnimationError::InvalidCoordinates(format!(
                "({}, {})",
                point.x, point.y
            )));
        }
        Ok(())
    }

    fn check_scale(scale: f64) -> Result<()> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(AnimationError::InvalidScale(scale));
        }
        Ok(())
    }
}
