use crate::animation::base::Animation;
use crate::animation::data::{Object, Property, PropertyValue};
use crate::core::geo::AnyRect;
use crate::core::screen::Screen;
use once_cell::sync::Lazy;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// A group of mutually mixable animations advancing together
type AnimationGroup = Vec<Box<dyn Animation>>;

static INSTANCE: Lazy<Mutex<AnimationSystem>> = Lazy::new(|| Mutex::new(AnimationSystem::new()));

/// The scheduler for map-plane animations.
///
/// Animations live in a chain of groups. Every member of a group is mixable
/// with every other member, so the whole group advances concurrently; only
/// the head group runs, successor groups wait their turn. When an animation
/// finishes (or is interrupted to make room), its terminal property values
/// land in a leftover cache that bridges the single frame between the
/// animation disappearing and the caller committing the new screen state.
///
/// All operations run on the render thread; `advance` is driven by the
/// render loop with the elapsed seconds since the previous frame.
pub struct AnimationSystem {
    chain: VecDeque<AnimationGroup>,
    property_cache: HashMap<(Object, Property), PropertyValue>,
    head_pending_start: bool,
}

impl AnimationSystem {
    pub fn new() -> Self {
        Self {
            chain: VecDeque::new(),
            property_cache: HashMap::new(),
            head_pending_start: false,
        }
    }

    /// Process-wide instance shared by the gesture and render layers.
    /// Tests construct independent instances with `new`.
    pub fn instance() -> &'static Mutex<AnimationSystem> {
        &INSTANCE
    }

    /// Places `animation` in the chain.
    ///
    /// Walks the existing groups in order and joins the first group whose
    /// members all tolerate the newcomer. With `force`, members that clash
    /// but are interruptible get forced to their end state and evicted
    /// (their terminal values go to the leftover cache so the next read
    /// does not snap back). If no group accepts it, the animation starts a
    /// new group at the tail and waits its turn.
    pub fn add_animation(&mut self, mut animation: Box<dyn Animation>, force: bool) {
        for index in 0..self.chain.len() {
            let mut could_be_mixed = true;
            let mut member = 0;
            while member < self.chain[index].len() {
                if self.chain[index][member].could_be_mixed_with(animation.as_ref()) {
                    member += 1;
                    continue;
                }
                if force && self.chain[index][member].could_be_interrupted() {
                    let mut evicted = self.chain[index].remove(member);
                    log::debug!("interrupting a running animation to make room");
                    evicted.interrupt();
                    evicted.on_finish();
                    Self::save_animation_result(&mut self.property_cache, evicted.as_ref());
                } else {
                    could_be_mixed = false;
                    break;
                }
            }
            if could_be_mixed {
                log::debug!("mixing animation into group {}", index);
                animation.on_start();
                self.chain[index].push(animation);
                return;
            }
        }

        self.push_animation(animation);
    }

    /// Opens a new group at the tail of the chain
    fn push_animation(&mut self, mut animation: Box<dyn Animation>) {
        log::debug!("queueing animation behind {} group(s)", self.chain.len());
        animation.on_start();
        self.chain.push_back(vec![animation]);
    }

    /// Advances the head group by `elapsed_seconds`.
    ///
    /// Finished members get `on_finish`, their terminal values are cached,
    /// and they are removed. An emptied head group is dropped; the successor
    /// group is started at the top of the next tick.
    pub fn advance(&mut self, elapsed_seconds: f64) {
        debug_assert!(elapsed_seconds >= 0.0, "time never runs backwards");
        let Some(front) = self.chain.front_mut() else {
            return;
        };

        if self.head_pending_start {
            for animation in front.iter_mut() {
                animation.on_start();
            }
            self.head_pending_start = false;
        }

        let cache = &mut self.property_cache;
        front.retain_mut(|animation| {
            animation.advance(elapsed_seconds);
            if animation.is_finished() {
                log::trace!("animation finished, caching leftover values");
                animation.on_finish();
                Self::save_animation_result(cache, animation.as_ref());
                false
            } else {
                true
            }
        });

        if front.is_empty() {
            self.chain.pop_front();
            self.head_pending_start = !self.chain.is_empty();
        }
    }

    /// Current value of `property` on `object`.
    ///
    /// Resolution order: the head group in insertion order, then the
    /// leftover cache (consumed on first read), then the caller's live
    /// `current` value.
    pub fn property(
        &mut self,
        object: Object,
        property: Property,
        current: PropertyValue,
    ) -> PropertyValue {
        if let Some(front) = self.chain.front() {
            for animation in front {
                if animation.has_property(object, property) {
                    return animation.property(object, property);
                }
            }
        }
        if let Some(value) = self.property_cache.remove(&(object, property)) {
            return value;
        }
        current
    }

    /// Assembles the animated viewport rectangle, falling back to
    /// `current_screen` for attributes nothing currently animates
    pub fn rect(&mut self, current_screen: &Screen) -> AnyRect {
        let object = Object::MapPlane;
        let scale = self
            .property(
                object,
                Property::Scale,
                PropertyValue::Scalar(current_screen.scale()),
            )
            .as_scalar();
        let angle = self
            .property(
                object,
                Property::Angle,
                PropertyValue::Scalar(current_screen.angle()),
            )
            .as_scalar();
        let position = self
            .property(
                object,
                Property::Position,
                PropertyValue::Point(current_screen.org()),
            )
            .as_point();

        let mut local_rect = current_screen.pixel_rect();
        let center = local_rect.center();
        local_rect.offset(center.multiply(-1.0));
        local_rect.scale(scale);
        AnyRect::new(position, angle, local_rect)
    }

    /// Whether `object` is animated right now or has unconsumed leftovers
    pub fn animation_exists(&self, object: Object) -> bool {
        if let Some(front) = self.chain.front() {
            if front.iter().any(|animation| animation.has_object(object)) {
                return true;
            }
        }
        self.property_cache
            .keys()
            .any(|(cached_object, _)| *cached_object == object)
    }

    fn save_animation_result(
        cache: &mut HashMap<(Object, Property), PropertyValue>,
        animation: &dyn Animation,
    ) {
        for &object in animation.objects() {
            for &property in animation.properties(object) {
                cache.insert((object, property), animation.property(object, property));
            }
        }
    }
}

impl Default for AnimationSystem {
    fn default() -> Self {
        Self::new()
    }
}
