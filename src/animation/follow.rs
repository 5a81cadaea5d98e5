use crate::animation::base::Animation;
use crate::animation::data::{Object, Property, PropertyValue};
use crate::animation::interpolator::{AngleInterpolator, PositionInterpolator, ScaleInterpolator};
use crate::core::geo::Point;
use crate::core::screen::Screen;
use std::collections::HashSet;

/// Moves, rotates and zooms the map plane in lock-step, as used by follow-me
/// and set-view gestures.
///
/// Each attribute gets its own interpolator with its own duration, so the
/// parts may finish at different times; the composite is finished only when
/// all of them are. Attributes whose endpoints coincide are skipped entirely
/// and never appear in the property set.
pub struct FollowAnimation {
    objects: HashSet<Object>,
    properties: HashSet<Property>,
    position_interpolator: Option<PositionInterpolator>,
    angle_interpolator: Option<AngleInterpolator>,
    scale_interpolator: Option<ScaleInterpolator>,
}

impl FollowAnimation {
    /// Creates an empty animation; fill it with `set_move` / `set_rotate` /
    /// `set_scale`.
    pub fn new() -> Self {
        Self {
            objects: HashSet::from([Object::MapPlane]),
            properties: HashSet::new(),
            position_interpolator: None,
            angle_interpolator: None,
            scale_interpolator: None,
        }
    }

    /// Creates an animation covering all three attributes at once
    pub fn with_parts(
        start_position: Point,
        end_position: Point,
        start_angle: f64,
        end_angle: f64,
        start_scale: f64,
        end_scale: f64,
        screen: &Screen,
    ) -> Self {
        let mut animation = Self::new();
        animation.set_move(start_position, end_position, screen);
        animation.set_rotate(start_angle, end_angle);
        animation.set_scale(start_scale, end_scale);
        animation
    }

    pub fn set_move(&mut self, start_position: Point, end_position: Point, screen: &Screen) {
        if start_position != end_position {
            self.position_interpolator =
                Some(PositionInterpolator::new(start_position, end_position, screen));
            self.properties.insert(Property::Position);
        }
    }

    pub fn set_rotate(&mut self, start_angle: f64, end_angle: f64) {
        if start_angle != end_angle {
            self.angle_interpolator = Some(AngleInterpolator::new(start_angle, end_angle));
            self.properties.insert(Property::Angle);
        }
    }

    pub fn set_scale(&mut self, start_scale: f64, end_scale: f64) {
        if start_scale != end_scale {
            self.scale_interpolator = Some(ScaleInterpolator::new(start_scale, end_scale));
            self.properties.insert(Property::Scale);
        }
    }
}

impl Default for FollowAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl Animation for FollowAnimation {
    fn objects(&self) -> &HashSet<Object> {
        &self.objects
    }

    fn properties(&self, object: Object) -> &HashSet<Property> {
        debug_assert!(object == Object::MapPlane);
        &self.properties
    }

    fn property(&self, object: Object, property: Property) -> PropertyValue {
        debug_assert!(object == Object::MapPlane);

        match property {
            Property::Position => {
                debug_assert!(self.position_interpolator.is_some());
                match &self.position_interpolator {
                    Some(interpolator) => PropertyValue::Point(interpolator.position()),
                    None => PropertyValue::Point(Point::default()),
                }
            }
            Property::Angle => {
                debug_assert!(self.angle_interpolator.is_some());
                match &self.angle_interpolator {
                    Some(interpolator) => PropertyValue::Scalar(interpolator.angle()),
                    None => PropertyValue::Scalar(0.0),
                }
            }
            Property::Scale => {
                debug_assert!(self.scale_interpolator.is_some());
                match &self.scale_interpolator {
                    Some(interpolator) => PropertyValue::Scalar(interpolator.scale()),
                    None => PropertyValue::Scalar(0.0),
                }
            }
        }
    }

    fn advance(&mut self, elapsed_seconds: f64) {
        if let Some(interpolator) = &mut self.angle_interpolator {
            interpolator.advance(elapsed_seconds);
        }
        if let Some(interpolator) = &mut self.scale_interpolator {
            interpolator.advance(elapsed_seconds);
        }
        if let Some(interpolator) = &mut self.position_interpolator {
            interpolator.advance(elapsed_seconds);
        }
    }

    fn set_max_duration(&mut self, max_duration: f64) {
        if let Some(interpolator) = &mut self.angle_interpolator {
            interpolator.set_max_duration(max_duration);
        }
        if let Some(interpolator) = &mut self.scale_interpolator {
            interpolator.set_max_duration(max_duration);
        }
        if let Some(interpolator) = &mut self.position_interpolator {
            interpolator.set_max_duration(max_duration);
        }
    }

    fn duration(&self) -> f64 {
        let mut duration: f64 = 0.0;
        if let Some(interpolator) = &self.angle_interpolator {
            duration = duration.max(interpolator.duration());
        }
        if let Some(interpolator) = &self.scale_interpolator {
            duration = duration.max(interpolator.duration());
        }
        if let Some(interpolator) = &self.position_interpolator {
            duration = duration.max(interpolator.duration());
        }
        duration
    }

    fn is_finished(&self) -> bool {
        self.angle_interpolator
            .as_ref()
            .map_or(true, |i| i.is_finished())
            && self
                .scale_interpolator
                .as_ref()
                .map_or(true, |i| i.is_finished())
            && self
                .position_interpolator
                .as_ref()
                .map_or(true, |i| i.is_finished())
    }

    fn could_be_interrupted(&self) -> bool {
        true
    }

    fn could_be_mixed(&self) -> bool {
        false
    }

    fn interrupt(&mut self) {
        if let Some(interpolator) = &mut self.angle_interpolator {
            interpolator.finish();
        }
        if let Some(interpolator) = &mut self.scale_interpolator {
            interpolator.finish();
        }
        if let Some(interpolator) = &mut self.position_interpolator {
            interpolator.finish();
        }
    }
}
