// Host-side tests for the per-facet animator.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod layout {
        include!("../src/core/layout.rs");
    }
    pub mod facet {
        include!("../src/core/facet.rs");
    }
}

use crate::core::constants::*;
use crate::core::facet::*;

#[test]
fn selection_outranks_hover() {
    assert_eq!(FacetMode::resolve(true, true), FacetMode::Selected);
    assert_eq!(FacetMode::resolve(true, false), FacetMode::Selected);
    assert_eq!(FacetMode::resolve(false, true), FacetMode::Hovered);
    assert_eq!(FacetMode::resolve(false, false), FacetMode::Idle);
}

#[test]
fn new_facet_rests_idle_at_unit_scale() {
    let f = FacetState::new(3, 12);
    assert_eq!(f.mode, FacetMode::Idle);
    assert_eq!(f.scale, REST_SCALE);
    assert_eq!(f.spin, glam::Vec3::ZERO);
    assert_eq!(FacetState::arena(12).len(), 12);
}

#[test]
fn idle_scale_eases_down_monotonically() {
    let mut f = FacetState::new(0, 12);
    f.scale = 1.2;
    let mut prev = f.scale;
    for frame in 0..300 {
        f.animate(frame as f32 / 60.0, FacetMode::Idle);
        assert!(f.scale <= prev, "frame {frame}: {} > {}", f.scale, prev);
        assert!(f.scale >= REST_SCALE, "frame {frame}: overshot to {}", f.scale);
        prev = f.scale;
    }
    assert!((f.scale - REST_SCALE).abs() < 1e-4);
}

#[test]
fn idle_scale_eases_up_from_below() {
    let mut f = FacetState::new(0, 12);
    f.scale = 0.5;
    f.animate(0.0, FacetMode::Idle);
    assert!((f.scale - 0.525).abs() < 1e-6);
    for _ in 0..300 {
        f.animate(0.0, FacetMode::Idle);
        assert!(f.scale <= REST_SCALE);
    }
    assert!((f.scale - REST_SCALE).abs() < 1e-4);
}

#[test]
fn selected_scale_breathes_within_range() {
    let mut f = FacetState::new(1, 12);
    for frame in 0..600 {
        let t = frame as f32 / 60.0;
        f.animate(t, FacetMode::Selected);
        assert!(f.scale >= SELECTED_BASE_SCALE - SELECTED_PULSE_AMP - 1e-5);
        assert!(f.scale <= SELECTED_BASE_SCALE + SELECTED_PULSE_AMP + 1e-5);
        let expected = 1.2 + (t * 3.0).sin() * 0.08;
        assert!((f.scale - expected).abs() < 1e-5);
    }
}

#[test]
fn hovered_scale_breathes_within_range() {
    let mut f = FacetState::new(2, 12);
    for frame in 0..600 {
        let t = frame as f32 / 60.0;
        f.animate(t, FacetMode::Hovered);
        assert!(f.scale >= HOVER_BASE_SCALE - HOVER_PULSE_AMP - 1e-5);
        assert!(f.scale <= HOVER_BASE_SCALE + HOVER_PULSE_AMP + 1e-5);
    }
}

#[test]
fn spin_rate_depends_on_mode() {
    let mut selected = FacetState::new(0, 12);
    let mut hovered = FacetState::new(0, 12);
    let mut idle = FacetState::new(0, 12);
    selected.animate(0.0, FacetMode::Selected);
    hovered.animate(0.0, FacetMode::Hovered);
    idle.animate(0.0, FacetMode::Idle);

    assert!((selected.spin.y - 0.015).abs() < 1e-7);
    assert!((selected.spin.x - 0.005).abs() < 1e-7);
    assert!((hovered.spin.y - 0.008).abs() < 1e-7);
    assert_eq!(hovered.spin.x, 0.0);
    assert!((idle.spin.y - 0.002).abs() < 1e-7);
    assert_eq!(idle.spin.x, 0.0);
}

#[test]
fn animate_records_the_mode() {
    let mut f = FacetState::new(0, 12);
    f.animate(0.0, FacetMode::Hovered);
    assert_eq!(f.mode, FacetMode::Hovered);
    assert_eq!(f.material(), FacetMode::Hovered.material());
    f.animate(0.0, FacetMode::Idle);
    assert_eq!(f.mode, FacetMode::Idle);
}

#[test]
fn materials_follow_mode() {
    let sel = FacetMode::Selected.material();
    assert_eq!(sel.emissive, GOLD);
    assert_eq!(sel.emissive_intensity, 0.4);
    assert_eq!(sel.opacity, 0.95);

    let hov = FacetMode::Hovered.material();
    assert_eq!(hov.emissive, TURQUOISE);
    assert_eq!(hov.emissive_intensity, 0.2);
    assert_eq!(hov.opacity, 0.9);

    let idle = FacetMode::Idle.material();
    assert_eq!(idle.emissive, BLACK);
    assert_eq!(idle.emissive_intensity, 0.0);
    assert_eq!(idle.opacity, 0.85);

    for m in [sel, hov, idle] {
        assert_eq!(m.roughness, FACET_ROUGHNESS);
        assert_eq!(m.metalness, FACET_METALNESS);
    }
}

#[test]
fn only_selected_facets_show_an_aura() {
    assert!(FacetMode::Selected.shows_aura());
    assert!(!FacetMode::Hovered.shows_aura());
    assert!(!FacetMode::Idle.shows_aura());
}

#[test]
fn local_transform_places_plane_at_layout_position() {
    let mut f = FacetState::new(5, 12);
    f.animate(1.0, FacetMode::Selected);
    let centre = f.local_transform().transform_point3(glam::Vec3::ZERO);
    assert!((centre - f.placement.position).length() < 1e-5);
    let anchor = f.anchor_transform().transform_point3(glam::Vec3::ZERO);
    assert!((anchor - f.placement.position).length() < 1e-5);
}

#[test]
fn local_transform_applies_scale() {
    let mut f = FacetState::new(0, 12);
    f.scale = 1.5;
    let edge = f.local_transform().transform_vector3(glam::Vec3::X);
    assert!((edge.length() - 1.5).abs() < 1e-5);
}

#[test]
fn tints_are_stable_and_in_range() {
    for i in 0..12 {
        let a = facet_tint(i, 12);
        assert_eq!(a, facet_tint(i, 12));
        for c in a {
            assert!((0.0..=1.0).contains(&c));
        }
    }
    assert_ne!(facet_tint(0, 12), facet_tint(6, 12));
}
