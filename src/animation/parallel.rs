use crate::animation::base::{Animation, EMPTY_PROPERTIES};
use crate::animation::data::{Object, Property, PropertyValue};
use std::collections::{HashMap, HashSet};

/// Runs several child animations together as one unit.
///
/// The footprint is the union of the children's footprints, maintained
/// incrementally as children are added. Children are assumed compatible by
/// construction; mixability against the rest of the world is checked by the
/// scheduler before the parallel as a whole enters a group.
pub struct ParallelAnimation {
    objects: HashSet<Object>,
    properties: HashMap<Object, HashSet<Property>>,
    animations: Vec<Box<dyn Animation>>,
    // End values of children that already finished; the composite keeps
    // advertising their properties, so reads must keep resolving
    finished_values: HashMap<(Object, Property), PropertyValue>,
    could_be_interrupted: bool,
    could_be_mixed: bool,
}

impl ParallelAnimation {
    pub fn new(could_be_interrupted: bool, could_be_mixed: bool) -> Self {
        Self {
            objects: HashSet::new(),
            properties: HashMap::new(),
            animations: Vec::new(),
            finished_values: HashMap::new(),
            could_be_interrupted,
            could_be_mixed,
        }
    }

    /// Adds a child and unions its footprint into the composite's
    pub fn add_animation(&mut self, animation: Box<dyn Animation>) {
        for &object in animation.objects() {
            self.objects.insert(object);
            self.properties
                .entry(object)
                .or_default()
                .extend(animation.properties(object).iter().copied());
        }
        self.animations.push(animation);
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }
}

impl Animation for ParallelAnimation {
    fn objects(&self) -> &HashSet<Object> {
        &self.objects
    }

    fn properties(&self, object: Object) -> &HashSet<Property> {
        debug_assert!(self.has_object(object));
        self.properties.get(&object).unwrap_or(&EMPTY_PROPERTIES)
    }

    fn property(&self, object: Object, property: Property) -> PropertyValue {
        for animation in &self.animations {
            if animation.has_property(object, property) {
                return animation.property(object, property);
            }
        }
        if let Some(value) = self.finished_values.get(&(object, property)) {
            return *value;
        }
        debug_assert!(false, "no child drives the requested property");
        PropertyValue::Scalar(0.0)
    }

    fn advance(&mut self, elapsed_seconds: f64) {
        let finished_values = &mut self.finished_values;
        self.animations.retain_mut(|animation| {
            animation.advance(elapsed_seconds);
            if animation.is_finished() {
                animation.on_finish();
                for &object in animation.objects() {
                    for &property in animation.properties(object) {
                        finished_values
                            .insert((object, property), animation.property(object, property));
                    }
                }
                false
            } else {
                true
            }
        });
    }

    fn set_max_duration(&mut self, max_duration: f64) {
        for animation in &mut self.animations {
            animation.set_max_duration(max_duration);
        }
    }

    fn duration(&self) -> f64 {
        self.animations
            .iter()
            .map(|animation| animation.duration())
            .fold(0.0, f64::max)
    }

    fn is_finished(&self) -> bool {
        self.animations.is_empty()
    }

    fn on_start(&mut self) {
        for animation in &mut self.animations {
            animation.on_start();
        }
    }

    fn could_be_interrupted(&self) -> bool {
        self.could_be_interrupted
    }

    fn could_be_mixed(&self) -> bool {
        self.could_be_mixed
    }

    fn interrupt(&mut self) {
        // Drain the children so the composite itself reports finished; their
        // end values stay readable through the leftover map
        let finished_values = &mut self.finished_values;
        for mut animation in self.animations.drain(..) {
            animation.interrupt();
            animation.on_finish();
            for &object in animation.objects() {
                for &property in animation.properties(object) {
                    finished_values
                        .insert((object, property), animation.property(object, property));
                }
            }
        }
    }
}
