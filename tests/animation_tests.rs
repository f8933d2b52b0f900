//! Animation Tests
//!
//! Tests for:
//! - KeyframeTrack construction validation (empty, duplicate,
//!   mismatched, non-finite input)
//! - Boundary clamping and exact-keyframe sampling
//! - Linear and step interpolation, quaternion slerp
//! - KeyframeCursor fast path vs. stateless binary search
//! - TrsAnimation composition order and independent timelines
//! - AnimationPlayer loop modes

use std::f32::consts::{FRAC_PI_2, PI};

use glam::{Mat4, Quat, Vec3};

use armature::animation::player::{AnimationPlayer, LoopMode};
use armature::animation::tracks::{InterpolationMode, KeyframeCursor, KeyframeTrack};
use armature::animation::trs::{TrsAnimation, TrsCursor};
use armature::errors::ArmatureError;

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    approx(a.x, b.x) && approx(a.y, b.y) && approx(a.z, b.z)
}

// ============================================================================
// KeyframeTrack: Construction
// ============================================================================

#[test]
fn track_empty_rejected() {
    let result = KeyframeTrack::<f32>::from_pairs(Vec::new(), InterpolationMode::Linear);
    assert_eq!(result.unwrap_err(), ArmatureError::EmptyTrack);
}

#[test]
fn track_duplicate_timestamp_rejected() {
    let result = KeyframeTrack::from_pairs(
        vec![(0.0, 0.0_f32), (1.0, 10.0), (1.0, 20.0)],
        InterpolationMode::Linear,
    );
    assert_eq!(
        result.unwrap_err(),
        ArmatureError::DuplicateKeyTime { time: 1.0 }
    );
}

#[test]
fn track_length_mismatch_rejected() {
    let result = KeyframeTrack::new(
        vec![0.0, 1.0, 2.0],
        vec![0.0_f32, 10.0],
        InterpolationMode::Linear,
    );
    assert_eq!(
        result.unwrap_err(),
        ArmatureError::KeyValueCountMismatch { times: 3, values: 2 }
    );
}

#[test]
fn track_non_finite_timestamp_rejected() {
    let result = KeyframeTrack::from_pairs(
        vec![(0.0, 0.0_f32), (f32::NAN, 1.0)],
        InterpolationMode::Linear,
    );
    assert!(matches!(
        result,
        Err(ArmatureError::NonFiniteKeyTime { .. })
    ));
}

#[test]
fn track_sorts_unordered_pairs() {
    let track = KeyframeTrack::from_pairs(
        vec![(2.0, 20.0_f32), (0.0, 0.0), (1.0, 10.0)],
        InterpolationMode::Linear,
    )
    .unwrap();

    assert_eq!(track.times(), &[0.0, 1.0, 2.0]);
    assert!(approx(track.sample(0.5), 5.0));
}

// ============================================================================
// KeyframeTrack: Boundary Clamping & Exact Keyframes
// ============================================================================

#[test]
fn sample_clamps_outside_range() {
    // Track {(0, 0.0), (2, 10.0)}: value(1) == 5, value(-1) == 0,
    // value(5) == 10.
    let track = KeyframeTrack::from_pairs(
        vec![(0.0, 0.0_f32), (2.0, 10.0)],
        InterpolationMode::Linear,
    )
    .unwrap();

    assert!(approx(track.sample(1.0), 5.0));
    assert!(approx(track.sample(-1.0), 0.0));
    assert!(approx(track.sample(5.0), 10.0));
}

#[test]
fn sample_before_first_clamps() {
    let track = KeyframeTrack::from_pairs(
        vec![(1.0, 10.0_f32), (2.0, 20.0)],
        InterpolationMode::Linear,
    )
    .unwrap();
    assert!(approx(track.sample(0.5), 10.0));
}

#[test]
fn sample_reproduces_exact_keyframes() {
    let track = KeyframeTrack::from_pairs(
        vec![(0.0, 0.0_f32), (1.0, 10.0), (2.0, 20.0)],
        InterpolationMode::Linear,
    )
    .unwrap();

    assert_eq!(track.sample(0.0), 0.0);
    assert_eq!(track.sample(1.0), 10.0);
    assert_eq!(track.sample(2.0), 20.0);
}

#[test]
fn sample_single_keyframe_is_constant() {
    let track =
        KeyframeTrack::from_pairs(vec![(1.0, 42.0_f32)], InterpolationMode::Linear).unwrap();

    assert_eq!(track.sample(-10.0), 42.0);
    assert_eq!(track.sample(1.0), 42.0);
    assert_eq!(track.sample(10.0), 42.0);
}

// ============================================================================
// KeyframeTrack: Interpolation
// ============================================================================

#[test]
fn sample_linear_f32_midpoint() {
    let track = KeyframeTrack::from_pairs(
        vec![(0.0, 0.0_f32), (1.0, 10.0)],
        InterpolationMode::Linear,
    )
    .unwrap();
    assert!(approx(track.sample(0.5), 5.0));
}

#[test]
fn sample_linear_vec3() {
    let track = KeyframeTrack::from_pairs(
        vec![(0.0, Vec3::ZERO), (1.0, Vec3::new(10.0, 20.0, 30.0))],
        InterpolationMode::Linear,
    )
    .unwrap();

    let val = track.sample(0.5);
    assert!(vec3_approx(val, Vec3::new(5.0, 10.0, 15.0)));
}

#[test]
fn sample_step_holds_value() {
    let track = KeyframeTrack::from_pairs(
        vec![(0.0, 0.0_f32), (1.0, 100.0), (2.0, 200.0)],
        InterpolationMode::Step,
    )
    .unwrap();

    assert!(approx(track.sample(0.0), 0.0));
    assert!(approx(track.sample(0.5), 0.0));
    assert!(approx(track.sample(0.99), 0.0));
    assert!(approx(track.sample(1.0), 100.0));
    assert!(approx(track.sample(1.5), 100.0));
    assert!(approx(track.sample(2.5), 200.0));
}

#[test]
fn sample_quat_slerp_midpoint() {
    let q0 = Quat::IDENTITY;
    let q1 = Quat::from_rotation_y(PI * 0.5);

    let track =
        KeyframeTrack::from_pairs(vec![(0.0, q0), (1.0, q1)], InterpolationMode::Linear).unwrap();

    let val = track.sample(0.5);
    let expected = q0.slerp(q1, 0.5);
    assert!(
        val.angle_between(expected) < 1e-4,
        "slerp mismatch: angle={}",
        val.angle_between(expected)
    );
}

#[test]
fn sample_quat_negated_endpoint_stays_put() {
    // q and -q encode the same rotation; interpolation must take the
    // shortest arc and never swing the long way around.
    let q = Quat::from_rotation_y(0.3);
    let track =
        KeyframeTrack::from_pairs(vec![(0.0, q), (1.0, -q)], InterpolationMode::Linear).unwrap();

    for t in [0.1, 0.25, 0.5, 0.75, 0.9] {
        let val = track.sample(t);
        assert!(
            val.angle_between(q) < 1e-4,
            "t={t}: drifted {} rad from q",
            val.angle_between(q)
        );
    }
}

#[test]
fn track_duration_is_last_key_time() {
    let track = KeyframeTrack::from_pairs(
        vec![(0.5, 1.0_f32), (3.0, 2.0), (1.5, 3.0)],
        InterpolationMode::Linear,
    )
    .unwrap();
    assert!(approx(track.duration(), 3.0));
}

// ============================================================================
// KeyframeCursor: O(1) Sequential Access
// ============================================================================

#[test]
fn cursor_sequential_forward() {
    let track = KeyframeTrack::new(
        vec![0.0, 1.0, 2.0, 3.0, 4.0],
        vec![0.0_f32, 10.0, 20.0, 30.0, 40.0],
        InterpolationMode::Linear,
    )
    .unwrap();

    let mut cursor = KeyframeCursor::default();
    for i in 0..=20 {
        let t = i as f32 * 0.2;
        let val = track.sample_with_cursor(t, &mut cursor);
        assert!(approx(val, t * 10.0), "t={t}: got {val}");
    }
}

#[test]
fn cursor_forward_then_jump_back() {
    let track = KeyframeTrack::new(
        vec![0.0, 1.0, 2.0, 3.0],
        vec![0.0_f32, 10.0, 20.0, 30.0],
        InterpolationMode::Linear,
    )
    .unwrap();

    let mut cursor = KeyframeCursor::default();

    // Move forward to t=2.5.
    assert!(approx(track.sample_with_cursor(2.5, &mut cursor), 25.0));

    // Jump back to t=0.5 (beyond the scan window, binary fallback).
    assert!(approx(track.sample_with_cursor(0.5, &mut cursor), 5.0));
}

#[test]
fn cursor_single_keyframe() {
    let track = KeyframeTrack::new(vec![0.0], vec![42.0_f32], InterpolationMode::Linear).unwrap();

    let mut cursor = KeyframeCursor::default();
    assert!(approx(track.sample_with_cursor(5.0, &mut cursor), 42.0));
    assert!(approx(track.sample_with_cursor(-5.0, &mut cursor), 42.0));
}

#[test]
fn cursor_matches_sample_across_sweep() {
    let track = KeyframeTrack::new(
        vec![0.0, 1.0, 2.0, 3.0, 4.0],
        vec![0.0_f32, 10.0, 5.0, 20.0, 15.0],
        InterpolationMode::Linear,
    )
    .unwrap();

    // Forward sweep, then a reverse sweep over the same cursor.
    let mut cursor = KeyframeCursor::default();
    for i in (0..=40).chain((0..=40).rev()) {
        let t = i as f32 * 0.1;
        let with_cursor = track.sample_with_cursor(t, &mut cursor);
        let stateless = track.sample(t);
        assert!(
            approx(with_cursor, stateless),
            "t={t}: cursor={with_cursor} stateless={stateless}"
        );
    }
}

// ============================================================================
// TrsAnimation
// ============================================================================

fn constant_rotation() -> Vec<(f32, Quat)> {
    vec![(0.0, Quat::IDENTITY)]
}

#[test]
fn trs_translation_is_not_scaled() {
    // Translation (1,0,0), identity rotation, scale (2,2,2): the
    // origin lands exactly at the translation, untouched by the scale.
    let anim = TrsAnimation::from_keys(
        vec![(0.0, Vec3::new(1.0, 0.0, 0.0))],
        constant_rotation(),
        vec![(0.0, Vec3::splat(2.0))],
    )
    .unwrap();

    let m = anim.matrix(0.7);
    let origin = m.transform_point3(Vec3::ZERO);
    assert!(vec3_approx(origin, Vec3::new(1.0, 0.0, 0.0)));

    // A non-origin point is scaled first, then translated.
    let one = m.transform_point3(Vec3::ONE);
    assert!(vec3_approx(one, Vec3::new(3.0, 2.0, 2.0)));
}

#[test]
fn trs_tracks_sample_independently() {
    let anim = TrsAnimation::from_keys(
        vec![(0.0, Vec3::ZERO), (2.0, Vec3::new(2.0, 0.0, 0.0))],
        constant_rotation(),
        vec![(0.0, Vec3::ONE), (4.0, Vec3::splat(3.0))],
    )
    .unwrap();

    let sample = anim.sample(1.0);
    assert!(vec3_approx(sample.translation, Vec3::new(1.0, 0.0, 0.0)));
    assert!(vec3_approx(sample.scale, Vec3::splat(1.5)));
    assert!(approx(anim.duration(), 4.0));
}

#[test]
fn trs_rotation_is_renormalized() {
    // A non-unit key must come out normalized from the sampler.
    let anim = TrsAnimation::from_keys(
        vec![(0.0, Vec3::ZERO)],
        vec![(0.0, Quat::from_xyzw(0.0, 0.0, 0.0, 2.0))],
        vec![(0.0, Vec3::ONE)],
    )
    .unwrap();

    let rotation = anim.sample(0.0).rotation;
    assert!(rotation.is_normalized());
    assert!(rotation.angle_between(Quat::IDENTITY) < 1e-5);
}

#[test]
fn trs_cursor_matches_stateless_sample() {
    let anim = TrsAnimation::from_keys(
        vec![(0.0, Vec3::ZERO), (1.0, Vec3::X), (2.0, Vec3::Y)],
        vec![(0.0, Quat::IDENTITY), (2.0, Quat::from_rotation_y(FRAC_PI_2))],
        vec![(0.0, Vec3::ONE), (2.0, Vec3::splat(2.0))],
    )
    .unwrap();

    let mut cursor = TrsCursor::default();
    for i in 0..=20 {
        let t = i as f32 * 0.1;
        let a = anim.sample_with_cursor(t, &mut cursor);
        let b = anim.sample(t);
        assert!(vec3_approx(a.translation, b.translation), "t={t}");
        assert!(vec3_approx(a.scale, b.scale), "t={t}");
        assert!(a.rotation.angle_between(b.rotation) < 1e-5, "t={t}");
    }
}

#[test]
fn trs_matrix_matches_manual_composition() {
    let translation = Vec3::new(1.0, 2.0, 3.0);
    let rotation = Quat::from_rotation_z(0.5);
    let scale = Vec3::new(2.0, 0.5, 1.0);

    let anim = TrsAnimation::from_keys(
        vec![(0.0, translation)],
        vec![(0.0, rotation)],
        vec![(0.0, scale)],
    )
    .unwrap();

    let expected = Mat4::from_translation(translation)
        * Mat4::from_quat(rotation)
        * Mat4::from_scale(scale);
    let got = anim.matrix(0.0);

    for (a, b) in got.to_cols_array().iter().zip(expected.to_cols_array()) {
        assert!(approx(*a, b));
    }
}

// ============================================================================
// AnimationPlayer Loop Modes
// ============================================================================

#[test]
fn player_once_clamps_and_pauses() {
    let mut player = AnimationPlayer::new(2.0);
    player.loop_mode = LoopMode::Once;

    let t = player.advance(3.0);
    assert!(approx(t, 2.0), "Once: should clamp to duration, got {t}");
    assert!(player.paused, "Once: should auto-pause at the end");
}

#[test]
fn player_loop_wraps() {
    let mut player = AnimationPlayer::new(2.0);
    player.loop_mode = LoopMode::Loop;

    let t = player.advance(2.5);
    assert!(approx(t, 0.5), "Loop: should wrap to 0.5, got {t}");
    assert!(!player.paused);
}

#[test]
fn player_loop_reverse_wraps_from_far_end() {
    let mut player = AnimationPlayer::new(2.0);
    player.loop_mode = LoopMode::Loop;
    player.time_scale = -1.0;
    player.time = 0.5;

    let t = player.advance(1.0);
    assert!(approx(t, 1.5), "reverse Loop: expected 1.5, got {t}");
}

#[test]
fn player_ping_pong_reflects() {
    let mut player = AnimationPlayer::new(2.0);
    player.loop_mode = LoopMode::PingPong;

    let t = player.advance(3.0);
    assert!(approx(t, 1.0), "PingPong: expected reflection to 1.0, got {t}");
}

#[test]
fn player_paused_does_not_advance() {
    let mut player = AnimationPlayer::new(2.0);
    player.paused = true;
    player.time = 0.5;

    assert!(approx(player.advance(1.0), 0.5));
}

#[test]
fn player_time_scale() {
    let mut player = AnimationPlayer::new(4.0);
    player.loop_mode = LoopMode::Once;
    player.time_scale = 2.0;

    assert!(approx(player.advance(1.0), 2.0));
}

#[test]
fn player_zero_duration_stays_at_zero() {
    let mut player = AnimationPlayer::new(0.0);
    assert!(approx(player.advance(1.0), 0.0));
}
