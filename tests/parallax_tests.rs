// Host-side tests for the hero parallax animator.

use abresh_site::constants::{PARALLAX_DAMPING, PARALLAX_RANGE_PX};
use abresh_site::parallax::{damp, Offset, ParallaxAnimator, Phase};

#[test]
fn one_tick_moves_a_tenth_of_the_delta() {
    let mut animator = ParallaxAnimator::default();
    animator.mount();
    animator.on_pointer(1000.0, 500.0, 1000.0, 1000.0);

    let target = animator.target();
    let next = animator.tick().unwrap();
    assert_eq!(next.x, 0.0 + PARALLAX_DAMPING * (target.x - 0.0));
    assert_eq!(next.y, 0.0 + PARALLAX_DAMPING * (target.y - 0.0));
}

#[test]
fn damp_matches_current_plus_factor_times_delta() {
    let current = 4.0;
    let target = 14.0;
    assert_eq!(damp(current, target, 0.1), current + (target - current) * 0.1);
}

#[test]
fn zero_delta_leaves_position_unchanged() {
    let mut animator = ParallaxAnimator::default();
    animator.mount();
    // No pointer yet: target equals the starting position.
    assert_eq!(animator.tick(), Some(Offset::ZERO));
    assert_eq!(animator.tick(), Some(Offset::ZERO));
}

#[test]
fn position_converges_without_overshoot() {
    let mut animator = ParallaxAnimator::default();
    animator.mount();
    animator.on_pointer(800.0, 600.0, 800.0, 600.0);

    let mut previous = animator.position();
    for _ in 0..200 {
        let next = animator.tick().unwrap();
        assert!(next.x >= previous.x && next.x <= PARALLAX_RANGE_PX);
        assert!(next.y >= previous.y && next.y <= PARALLAX_RANGE_PX);
        previous = next;
    }
    assert!((PARALLAX_RANGE_PX - previous.x).abs() < 1e-6);
}

#[test]
fn unmount_stops_all_updates() {
    let mut animator = ParallaxAnimator::default();
    animator.mount();
    animator.on_pointer(400.0, 300.0, 800.0, 600.0);
    animator.tick();

    animator.unmount();
    assert_eq!(animator.phase(), Phase::Idle);
    let frozen = animator.clone();

    animator.on_pointer(10.0, 10.0, 800.0, 600.0);
    assert_eq!(animator.tick(), None);
    assert_eq!(animator, frozen);
}

#[test]
fn pointer_before_mount_is_ignored() {
    let mut animator = ParallaxAnimator::default();
    animator.on_pointer(400.0, 300.0, 800.0, 600.0);
    assert_eq!(animator.target(), Offset::ZERO);
    assert_eq!(animator.tick(), None);
}

#[test]
fn remount_starts_from_origin() {
    let mut animator = ParallaxAnimator::default();
    animator.mount();
    animator.on_pointer(800.0, 600.0, 800.0, 600.0);
    animator.tick();
    animator.unmount();

    animator.mount();
    assert!(animator.is_tracking());
    assert_eq!(animator.position(), Offset::ZERO);
}
