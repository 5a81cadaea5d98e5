use crate::animation::base::{Animation, EMPTY_PROPERTIES};
use crate::animation::data::{Object, Property, PropertyValue};
use std::collections::{HashMap, HashSet, VecDeque};

/// Runs child animations one after another, each to completion.
///
/// Only the front child is active, and the sequence exposes the front's
/// objects and properties as its own. The externally visible footprint
/// therefore changes whenever a child finishes and the next one takes over:
/// the scheduler's mixability decision is made at insertion time, so a
/// conflict with a later stage only becomes visible when that stage reaches
/// the front.
///
/// When a stage finishes its footprint and end values are snapshotted into
/// the sequence before the pop. Once the queue is empty the snapshot keeps
/// answering queries, so the scheduler can still cache the final stage's
/// terminal values on the tick the sequence itself reports finished.
pub struct SequenceAnimation {
    animations: VecDeque<Box<dyn Animation>>,
    finished_objects: HashSet<Object>,
    finished_properties: HashMap<Object, HashSet<Property>>,
    finished_values: HashMap<(Object, Property), PropertyValue>,
    could_be_interrupted: bool,
    could_be_mixed: bool,
    front_started: bool,
}

impl SequenceAnimation {
    pub fn new(could_be_interrupted: bool, could_be_mixed: bool) -> Self {
        Self {
            animations: VecDeque::new(),
            finished_objects: HashSet::new(),
            finished_properties: HashMap::new(),
            finished_values: HashMap::new(),
            could_be_interrupted,
            could_be_mixed,
            front_started: false,
        }
    }

    /// Appends a child to the queue. The footprint is not unioned; it stays
    /// whatever the current front reports.
    pub fn add_animation(&mut self, animation: Box<dyn Animation>) {
        self.animations.push_back(animation);
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    /// Replaces the snapshot with the just-finished stage's footprint and
    /// end values
    fn save_stage_result(&mut self, animation: &dyn Animation) {
        self.finished_objects.clear();
        self.finished_properties.clear();
        self.finished_values.clear();
        for &object in animation.objects() {
            self.finished_objects.insert(object);
            let properties = animation.properties(object);
            self.finished_properties.insert(object, properties.clone());
            for &property in properties {
                self.finished_values
                    .insert((object, property), animation.property(object, property));
            }
        }
    }
}

impl Animation for SequenceAnimation {
    fn objects(&self) -> &HashSet<Object> {
        match self.animations.front() {
            Some(front) => front.objects(),
            None => &self.finished_objects,
        }
    }

    fn properties(&self, object: Object) -> &HashSet<Property> {
        match self.animations.front() {
            Some(front) => front.properties(object),
            None => {
                debug_assert!(self.has_object(object));
                self.finished_properties
                    .get(&object)
                    .unwrap_or(&EMPTY_PROPERTIES)
            }
        }
    }

    fn has_property(&self, object: Object, property: Property) -> bool {
        match self.animations.front() {
            Some(front) => front.has_property(object, property),
            None => self.finished_values.contains_key(&(object, property)),
        }
    }

    fn property(&self, object: Object, property: Property) -> PropertyValue {
        match self.animations.front() {
            Some(front) => front.property(object, property),
            None => {
                if let Some(value) = self.finished_values.get(&(object, property)) {
                    return *value;
                }
                debug_assert!(false, "property read on a sequence that never drove it");
                PropertyValue::Scalar(0.0)
            }
        }
    }

    fn advance(&mut self, elapsed_seconds: f64) {
        let Some(front) = self.animations.front_mut() else {
            return;
        };
        if !self.front_started {
            front.on_start();
            self.front_started = true;
        }
        front.advance(elapsed_seconds);
        if front.is_finished() {
            front.on_finish();
            if let Some(stage) = self.animations.pop_front() {
                self.save_stage_result(stage.as_ref());
            }
            // The next front starts lazily, on its first advance tick
            self.front_started = false;
        }
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
            .sum()
    }

    fn is_finished(&self) -> bool {
        self.animations.is_empty()
    }

    fn on_start(&mut self) {
        if self.front_started {
            return;
        }
        if let Some(front) = self.animations.front_mut() {
            front.on_start();
            self.front_started = true;
        }
    }

    fn could_be_interrupted(&self) -> bool {
        self.could_be_interrupted
    }

    fn could_be_mixed(&self) -> bool {
        self.could_be_mixed
    }

    fn interrupt(&mut self) {
        // Only the front has produced state worth handing over; queued
        // successors are discarded unstarted
        if let Some(mut front) = self.animations.pop_front() {
            front.interrupt();
            front.on_finish();
            self.save_stage_result(front.as_ref());
        }
        self.animations.clear();
        self.front_started = false;
    }
}
