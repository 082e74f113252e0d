//! Tests for the path generators through the public API.

use std::time::{Duration, Instant};

use windrive::model::{Point, Rect, Size};
use windrive::pathgen::{Direct, Linear, PathGenerator};

fn linear(speed: f64) -> Linear {
    Linear::new(speed, Duration::ZERO).expect("valid speed")
}

// === Session contract ===

#[test]
fn linear_first_frame_is_from_and_last_is_to() {
    let from = Point::new(-13, 40);
    let to = Point::new(250, -7);
    let frames: Vec<Point> = linear(7.0).frames(from, to).collect();
    assert_eq!(frames.first(), Some(&from));
    assert_eq!(frames.last(), Some(&to));
}

#[test]
fn linear_frame_count_matches_block() {
    let gen = linear(3.0);
    let from = Size::new(100, 100);
    let to = Size::new(110, 250);
    let frames: Vec<Size> = gen.frames(from, to).collect();
    // widest delta 150 / 3 = 50 steps
    assert_eq!(frames.len() as u64, gen.frame_count(&from, &to));
    assert_eq!(frames.len(), 51);
}

#[test]
fn linear_frames_stay_between_endpoints() {
    let from = Rect::new(0, 300, 50, 900);
    let to = Rect::new(300, 0, 900, 50);
    for r in linear(11.0).frames(from, to) {
        assert!((0..=300).contains(&r.x), "{}", r);
        assert!((0..=300).contains(&r.y), "{}", r);
        assert!((50..=900).contains(&r.width), "{}", r);
        assert!((50..=900).contains(&r.height), "{}", r);
    }
}

#[test]
fn linear_speed_larger_than_distance_gives_two_frames() {
    let frames: Vec<i32> = linear(1000.0).frames(3, 40).collect();
    assert_eq!(frames, vec![3, 40]);
}

#[test]
fn linear_equal_endpoints_still_yield_from_then_to() {
    let p = Point::new(9, 9);
    let frames: Vec<Point> = linear(0.5).frames(p, p).collect();
    // block = max(1, 0) / 0.5 = 2
    assert_eq!(frames, vec![p, p, p]);
}

#[test]
fn linear_builds_are_independent_and_repeatable() {
    let gen = linear(2.5);
    let a: Vec<i32> = gen.frames(0, 17).collect();
    let b: Vec<i32> = gen.frames(0, 17).collect();
    assert_eq!(a, b);

    let mut first = gen.build(0, 17);
    let second = gen.build(0, 17);
    first.advance();
    first.advance();
    assert_eq!(second.current(), 0);
    assert_ne!(first.current(), 0);
}

#[test]
fn linear_rejects_bad_speeds() {
    for speed in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(Linear::new(speed, Duration::ZERO).is_err(), "{}", speed);
    }
}

#[test]
fn direct_always_has_two_frames() {
    let direct = Direct::default();
    let frames: Vec<Rect> = direct
        .frames(Rect::new(0, 0, 10, 10), Rect::new(500, 400, 300, 200))
        .collect();
    assert_eq!(
        frames,
        vec![Rect::new(0, 0, 10, 10), Rect::new(500, 400, 300, 200)]
    );
    let same: Vec<i32> = direct.frames(4, 4).collect();
    assert_eq!(same, vec![4, 4]);
}

#[test]
fn session_reports_its_endpoints() {
    let session = linear(1.0).build(Point::new(1, 2), Point::new(3, 4));
    assert_eq!(session.starting(), Point::new(1, 2));
    assert_eq!(session.end(), Point::new(3, 4));
    assert!(session.remains());
}

#[test]
fn exhausted_session_stops_remaining() {
    let mut session = Direct::default().build(1, 2);
    session.advance();
    assert!(session.remains());
    session.advance();
    assert!(!session.remains());
}

// === Pacing ===

#[test]
fn advance_waits_between_frames() {
    let gen = Linear::new(5.0, Duration::from_millis(5)).expect("valid speed");
    let start = Instant::now();
    let frames: Vec<i32> = gen.frames(0, 20).collect();
    assert_eq!(frames, vec![0, 5, 10, 15, 20]);
    // one wait per advance, including the one that exhausts the session
    assert!(start.elapsed() >= Duration::from_millis(25));
}

#[test]
fn float_paths_end_exactly_on_target() {
    let frames: Vec<f64> = linear(0.3).frames(0.0, 1.0).collect();
    assert_eq!(frames.first(), Some(&0.0));
    assert_eq!(frames.last(), Some(&1.0));
    assert!(frames.iter().all(|v| (0.0..=1.0).contains(v)));
}
