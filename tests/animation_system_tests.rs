use mapmotion::animation::interpolator::Interpolator;
use mapmotion::{
    Animation, AnimationBuilder, AnimationSystem, FollowAnimation, Object, ParallelAnimation,
    Point, Property, PropertyValue, Screen, SequenceAnimation,
};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

/// 1000x1000 screen at scale 1 with no rotation, so global distances map
/// 1:1 onto pixel distances
fn test_screen() -> Screen {
    Screen::new(Point::new(0.0, 0.0), 1.0, 0.0, Point::new(1000.0, 1000.0))
}

fn pan_animation(screen: &Screen, from: Point, to: Point) -> Box<dyn Animation> {
    let mut animation = FollowAnimation::new();
    animation.set_move(from, to, screen);
    Box::new(animation)
}

fn read_position(system: &mut AnimationSystem, fallback: Point) -> Point {
    system
        .property(
            Object::MapPlane,
            Property::Position,
            PropertyValue::Point(fallback),
        )
        .as_point()
}

#[test]
fn test_pure_pan_duration_and_motion() {
    // A 500 px pan on a 1000 px screen: above the jitter floor, so the
    // speed formula applies: 500 / (7 * 1000) seconds
    let screen = test_screen();
    let mut system = AnimationSystem::new();
    system.add_animation(
        pan_animation(&screen, Point::new(0.0, 0.0), Point::new(500.0, 0.0)),
        false,
    );

    system.advance(0.0357);
    let position = read_position(&mut system, Point::default());
    assert!((position.x - 250.0).abs() < 5.0, "got {}", position.x);
    assert_eq!(position.y, 0.0);

    // Past 500/7000 ~= 0.0714 s: the pan finishes and its end position is
    // readable from the leftover cache
    system.advance(0.04);
    let end = read_position(&mut system, Point::default());
    assert_eq!(end, Point::new(500.0, 0.0));
}

#[test]
fn test_small_pan_gets_floor_duration() {
    // 100 px < 20% of the smaller viewport side, so the 0.2 s floor applies
    let screen = test_screen();
    let mut system = AnimationSystem::new();
    system.add_animation(
        pan_animation(&screen, Point::new(0.0, 0.0), Point::new(100.0, 0.0)),
        false,
    );

    system.advance(0.1);
    let position = read_position(&mut system, Point::default());
    assert_eq!(position, Point::new(50.0, 0.0));
}

#[test]
fn test_rotate_quarter_turn() {
    // 90 degrees at half a second per 45 degrees: 1.0 s total
    let screen = test_screen();
    let mut system = AnimationSystem::new();
    let rotation = AnimationBuilder::rotate(&screen, FRAC_PI_2).unwrap();
    system.add_animation(Box::new(rotation), false);

    system.advance(0.5);
    let angle = system
        .property(Object::MapPlane, Property::Angle, PropertyValue::Scalar(0.0))
        .as_scalar();
    assert!((angle - FRAC_PI_4).abs() < 1e-12);
}

#[test]
fn test_scale_one_to_four() {
    // Ratio 4 at a 2x-per-0.3s speed: 0.6 s; halfway lands on 2.5
    let screen = test_screen();
    let mut system = AnimationSystem::new();
    let zoom = AnimationBuilder::zoom(&screen, 4.0).unwrap();
    system.add_animation(Box::new(zoom), false);

    system.advance(0.3);
    let scale = system
        .property(Object::MapPlane, Property::Scale, PropertyValue::Scalar(1.0))
        .as_scalar();
    assert!((scale - 2.5).abs() < 1e-9);
}

#[test]
fn test_interruption_hands_over_without_snap_back() {
    let screen = test_screen();
    let mut system = AnimationSystem::new();
    system.add_animation(
        pan_animation(&screen, Point::new(0.0, 0.0), Point::new(500.0, 0.0)),
        false,
    );

    system.advance(0.036);
    let before = read_position(&mut system, Point::default());
    assert!((before.x - 250.0).abs() < 5.0);

    // Force a replacement pan: the running one is interrupted, its end
    // position goes to the leftover cache, and the newcomer takes over
    system.add_animation(
        pan_animation(&screen, Point::new(0.0, 0.0), Point::new(0.0, 500.0)),
        true,
    );

    // The replacement covers Position, so reads resolve through it (its
    // start), not through the interrupted animation's cached end value
    let after = read_position(&mut system, Point::new(-1.0, -1.0));
    assert_eq!(after, Point::new(0.0, 0.0));

    system.advance(0.02);
    let moving = read_position(&mut system, Point::default());
    assert_eq!(moving.x, 0.0);
    assert!(moving.y > 0.0);
}

#[test]
fn test_incompatible_animation_queues_and_takes_over() {
    let screen = test_screen();
    let mut system = AnimationSystem::new();
    // Both drive Position and neither mixes, so the second waits its turn
    system.add_animation(
        pan_animation(&screen, Point::new(0.0, 0.0), Point::new(100.0, 0.0)),
        false,
    );
    system.add_animation(
        pan_animation(&screen, Point::new(0.0, 0.0), Point::new(0.0, 100.0)),
        false,
    );

    system.advance(0.1);
    assert_eq!(
        read_position(&mut system, Point::default()),
        Point::new(50.0, 0.0)
    );

    // First pan (0.2 s floor) completes; its group is dropped
    system.advance(0.15);

    // Next tick starts the queued pan and advances it
    system.advance(0.1);
    assert_eq!(
        read_position(&mut system, Point::default()),
        Point::new(0.0, 50.0)
    );
}

#[test]
fn test_mixable_animations_share_a_group() {
    let screen = test_screen();
    let mut system = AnimationSystem::new();

    let mut rotation_part = FollowAnimation::new();
    rotation_part.set_rotate(0.0, FRAC_PI_2);
    let mut rotation = ParallelAnimation::new(true, true);
    rotation.add_animation(Box::new(rotation_part));

    let mut zoom_part = FollowAnimation::new();
    zoom_part.set_scale(1.0, 4.0);
    let mut zoom = ParallelAnimation::new(true, true);
    zoom.add_animation(Box::new(zoom_part));

    // Disjoint properties on the shared map plane: both run concurrently
    system.add_animation(Box::new(rotation), false);
    system.add_animation(Box::new(zoom), false);

    system.advance(0.3);
    let angle = system
        .property(Object::MapPlane, Property::Angle, PropertyValue::Scalar(0.0))
        .as_scalar();
    let scale = system
        .property(Object::MapPlane, Property::Scale, PropertyValue::Scalar(1.0))
        .as_scalar();
    assert!(angle > 0.0);
    assert!((scale - 2.5).abs() < 1e-9);
}

#[test]
fn test_overlapping_mixable_animations_refuse_to_mix() {
    let screen = test_screen();

    let mut first_part = FollowAnimation::new();
    first_part.set_move(Point::new(0.0, 0.0), Point::new(100.0, 0.0), &screen);
    let mut first = ParallelAnimation::new(true, true);
    first.add_animation(Box::new(first_part));

    let mut second_part = FollowAnimation::new();
    second_part.set_move(Point::new(0.0, 0.0), Point::new(0.0, 100.0), &screen);
    let mut second = ParallelAnimation::new(true, true);
    second.add_animation(Box::new(second_part));

    // Same property on the same object: the predicate must refuse, in
    // both directions
    assert!(!first.could_be_mixed_with(&second));
    assert!(!second.could_be_mixed_with(&first));

    // And the scheduler therefore queues the second one
    let mut system = AnimationSystem::new();
    system.add_animation(Box::new(first), false);
    system.add_animation(Box::new(second), false);
    system.advance(0.1);
    assert_eq!(
        read_position(&mut system, Point::default()),
        Point::new(50.0, 0.0)
    );
}

#[test]
fn test_degenerate_follow_finishes_immediately() {
    let screen = test_screen();
    let animation = FollowAnimation::with_parts(
        Point::new(10.0, 10.0),
        Point::new(10.0, 10.0),
        1.0,
        1.0,
        2.0,
        2.0,
        &screen,
    );
    assert!(animation.is_finished());
    assert!(animation.properties(Object::MapPlane).is_empty());
}

#[test]
fn test_sequence_runs_stages_through_the_system() {
    let screen = test_screen();
    let mut sequence = SequenceAnimation::new(true, false);
    let mut pan = FollowAnimation::new();
    pan.set_move(Point::new(0.0, 0.0), Point::new(100.0, 0.0), &screen);
    sequence.add_animation(Box::new(pan));
    let mut rotation = FollowAnimation::new();
    rotation.set_rotate(0.0, FRAC_PI_2);
    sequence.add_animation(Box::new(rotation));

    let mut system = AnimationSystem::new();
    system.add_animation(Box::new(sequence), false);

    system.advance(0.1);
    assert_eq!(
        read_position(&mut system, Point::default()),
        Point::new(50.0, 0.0)
    );

    // Pan stage completes; the rotation stage takes over on later ticks
    system.advance(0.15);
    system.advance(0.5);
    let angle = system
        .property(Object::MapPlane, Property::Angle, PropertyValue::Scalar(0.0))
        .as_scalar();
    assert!(angle > 0.0);
    assert!(system.animation_exists(Object::MapPlane));

    // The sequence finishes on this tick; the final stage's end angle waits
    // in the leftover cache instead of snapping back to the live state
    system.advance(1.0);
    assert!(system.animation_exists(Object::MapPlane));
    let end_angle = system
        .property(Object::MapPlane, Property::Angle, PropertyValue::Scalar(0.0))
        .as_scalar();
    assert_eq!(end_angle, FRAC_PI_2);
    assert!(!system.animation_exists(Object::MapPlane));
}

#[test]
fn test_rect_combines_animated_and_live_state() {
    let screen = test_screen();
    let mut system = AnimationSystem::new();
    let zoom = AnimationBuilder::zoom(&screen, 4.0).unwrap();
    system.add_animation(Box::new(zoom), false);

    system.advance(0.3);
    let viewport = system.rect(&screen);

    // Position and angle fall back to the live screen; scale is animated
    assert_eq!(viewport.origin(), screen.org());
    assert_eq!(viewport.angle(), screen.angle());
    assert!((viewport.local_rect().width() - 2500.0).abs() < 1e-6);
    assert_eq!(viewport.local_rect().center(), Point::new(0.0, 0.0));
}

#[test]
fn test_progress_is_monotone_and_finish_is_sticky() {
    let mut timing = Interpolator::new(0.5, 0.0);
    let mut last = timing.t();
    for _ in 0..200 {
        timing.advance(0.005);
        let t = timing.t();
        assert!(t >= last);
        last = t;
    }
    assert!(timing.is_finished());
    timing.advance(10.0);
    assert_eq!(timing.t(), 1.0);
    assert!(timing.is_finished());
}

#[test]
fn test_duration_cap_applies_to_composites() {
    let screen = test_screen();
    let mut animation = FollowAnimation::with_parts(
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
        0.0,
        FRAC_PI_2,
        1.0,
        4.0,
        &screen,
    );
    animation.set_max_duration(0.1);
    assert!(animation.duration() <= 0.1);
}

#[test]
fn test_cache_entry_is_consumed_exactly_once() {
    let screen = test_screen();
    let mut system = AnimationSystem::new();
    system.add_animation(
        pan_animation(&screen, Point::new(0.0, 0.0), Point::new(100.0, 0.0)),
        false,
    );
    system.advance(0.25); // finished and cached

    let fallback = Point::new(7.0, 7.0);
    assert_eq!(read_position(&mut system, fallback), Point::new(100.0, 0.0));
    assert_eq!(read_position(&mut system, fallback), fallback);
}
