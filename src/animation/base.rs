use crate::animation::data::{Object, Property, PropertyValue};
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Shared empty set, returned by footprint queries for objects an
/// animation does not drive.
pub(crate) static EMPTY_PROPERTIES: Lazy<HashSet<Property>> = Lazy::new(HashSet::new);

/// Base trait that all animations must implement.
///
/// An animation is a time-bounded transformation of one or more
/// (object, property) pairs. The scheduler drives it through `advance`,
/// reads values through `property`, and uses the mixability/interruption
/// descriptors to decide whether it can run alongside others.
pub trait Animation: Send {
    /// Gets the set of objects this animation touches
    fn objects(&self) -> &HashSet<Object>;

    /// Checks whether this animation touches `object`
    fn has_object(&self, object: Object) -> bool {
        self.objects().contains(&object)
    }

    /// Gets the properties driven on `object`. Callers check `has_object` first.
    fn properties(&self, object: Object) -> &HashSet<Property>;

    /// Checks whether this animation drives `property` on `object`
    fn has_property(&self, object: Object, property: Property) -> bool {
        self.has_object(object) && self.properties(object).contains(&property)
    }

    /// Current value of a driven property, reflecting the most recent `advance`
    fn property(&self, object: Object, property: Property) -> PropertyValue;

    /// Advances the animation by `elapsed_seconds` (non-negative)
    fn advance(&mut self, elapsed_seconds: f64);

    /// Caps the duration; cascades to children
    fn set_max_duration(&mut self, max_duration: f64);

    /// Remaining logical duration, including any delay
    fn duration(&self) -> f64;

    fn is_finished(&self) -> bool;

    /// Called once, just before the first `advance`
    fn on_start(&mut self) {}

    /// Called once, after `is_finished` first holds, before removal
    fn on_finish(&mut self) {}

    /// Whether the scheduler may abort this animation to make room
    fn could_be_interrupted(&self) -> bool;

    /// Whether this animation tolerates concurrent peers in its group
    fn could_be_mixed(&self) -> bool;

    /// Forces the animation to its end state; final values stay readable
    fn interrupt(&mut self);

    /// Checks compatibility against an already-known property set on one object
    fn could_be_mixed_with_properties(
        &self,
        object: Object,
        properties: &HashSet<Property>,
    ) -> bool {
        if !self.could_be_mixed() {
            return false;
        }
        debug_assert!(self.has_object(object));
        self.properties(object).is_disjoint(properties)
    }

    /// Two animations may coexist in one group only if both tolerate mixing
    /// and they drive disjoint property sets on every shared object.
    fn could_be_mixed_with(&self, other: &dyn Animation) -> bool {
        if !self.could_be_mixed() || !other.could_be_mixed() {
            return false;
        }
        for &object in other.objects() {
            if !self.has_object(object) {
                continue;
            }
            if !self.could_be_mixed_with_properties(object, other.properties(object)) {
                return false;
            }
        }
        true
    }
}
