// Host-side tests for tuning constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn rings_and_orbit_limits_are_ordered() {
    assert!(INNER_RADIUS < OUTER_RADIUS);
    assert!(ORBIT_MIN_DISTANCE < ORBIT_MAX_DISTANCE);
    // The camera starts between the orbit limits.
    let start = CAMERA_START.length();
    assert!(start > ORBIT_MIN_DISTANCE && start < ORBIT_MAX_DISTANCE);
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_FAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn easing_factors_are_fractions() {
    for ease in [IDLE_SCALE_EASE, GROUP_TILT_EASE, CAMERA_DRIFT_EASE, ORBIT_DAMPING] {
        assert!(ease > 0.0 && ease < 1.0);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn highlight_states_stand_out_from_idle() {
    assert!(SELECTED_BASE_SCALE - SELECTED_PULSE_AMP > HOVER_BASE_SCALE - HOVER_PULSE_AMP);
    assert!(HOVER_BASE_SCALE - HOVER_PULSE_AMP > REST_SCALE);
    assert!(SELECTED_YAW_STEP > HOVER_YAW_STEP && HOVER_YAW_STEP > IDLE_YAW_STEP);
    assert!(SELECTED_OPACITY > HOVER_OPACITY && HOVER_OPACITY > IDLE_OPACITY);
    assert!(SELECTED_EMISSIVE_INTENSITY > HOVER_EMISSIVE_INTENSITY);
}

#[test]
fn palette_channels_are_normalized() {
    for c in [GOLD, TURQUOISE, WHITE, BLACK, MIDNIGHT, CLEAR_COLOR.map(|v| v as f32)] {
        assert!(c.iter().all(|v| (0.0..=1.0).contains(v)));
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn web_timings_are_sane() {
    assert_eq!(ENTRANCE_DELAY_MS, 1000);
    assert!(CLICK_SLOP_PX > 0.0);
    assert!(WHEEL_NOTCH_PX > 0.0);
    assert!(MAX_INSTANCES >= 12 + PARTICLE_COUNT + 3);
}
