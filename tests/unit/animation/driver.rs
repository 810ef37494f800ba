use super::*;
use crate::animation::{ease::Ease, ops::stagger};

fn cover_timeline() -> Timeline {
    Timeline {
        bands: stagger(5, 0.0, 0.05, 100.0, 0.0, 0.5, Ease::OutCubic),
        content: Tween::new(
            ContentPose::RESTING,
            ContentPose {
                scale: 0.95,
                opacity: 0.0,
                rotate_y_deg: 5.0,
                translate_y_px: 0.0,
            },
            0.0,
            0.5,
            Ease::InCubic,
        ),
    }
}

#[test]
fn duration_covers_stagger_tail() {
    assert!((cover_timeline().duration_s() - 0.7).abs() < 1e-12);
}

#[test]
fn validate_flags_bad_tracks() {
    let mut tl = cover_timeline();
    assert!(tl.validate().is_ok());
    tl.bands[2].duration_s = f64::NAN;
    assert!(tl.validate().is_err());
}

#[test]
fn idle_driver_yields_nothing() {
    let mut d = ClockDriver::new();
    assert!(!d.is_playing());
    assert!(d.sample(1.0).is_none());
}

#[test]
fn finished_is_reported_once_with_end_values() {
    let mut d = ClockDriver::new();
    d.play(cover_timeline(), 10.0);

    let mid = d.sample(10.3).unwrap();
    assert!(!mid.finished);
    assert!(mid.band_offsets[0] < mid.band_offsets[4]);

    let end = d.sample(10.75).unwrap();
    assert!(end.finished);
    assert!(end.band_offsets.iter().all(|&o| o == 0.0));
    assert_eq!(end.content.opacity, 0.0);

    assert!(d.sample(10.9).is_none());
    assert!(!d.is_playing());
}

#[test]
fn backwards_clock_makes_no_progress() {
    let mut d = ClockDriver::new();
    d.play(cover_timeline(), 1.0);
    let a = d.sample(1.2).unwrap();
    let b = d.sample(1.1).unwrap();
    assert_eq!(a, b);
    assert!((d.local_time_s().unwrap() - 0.2).abs() < 1e-12);
}

#[test]
fn non_finite_start_anchors_on_first_finite_tick() {
    let mut d = ClockDriver::new();
    d.play(cover_timeline(), f64::NAN);

    let first = d.sample(5.0).unwrap();
    assert!(!first.finished);
    assert_eq!(d.local_time_s(), Some(0.0));

    assert!(!d.sample(f64::INFINITY).unwrap().finished);
    assert!(!d.sample(5.3).unwrap().finished);
    assert!(d.sample(5.75).unwrap().finished);
    assert!(!d.is_playing());
}

#[test]
fn far_future_tick_finishes_in_one_step() {
    let mut d = ClockDriver::new();
    d.play(cover_timeline(), 0.0);
    let f = d.sample(3600.0).unwrap();
    assert!(f.finished);
}

#[test]
fn cancel_drops_active_timeline() {
    let mut d = ClockDriver::new();
    d.play(cover_timeline(), 0.0);
    d.cancel();
    assert!(d.sample(0.1).is_none());
}

#[test]
fn boxed_driver_forwards() {
    let mut d: Box<dyn AnimationDriver> = Box::new(ClockDriver::new());
    d.play(cover_timeline(), 0.0);
    assert!(d.is_playing());
    assert!(d.sample(1.0).unwrap().finished);
}
