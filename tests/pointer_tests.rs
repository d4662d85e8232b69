// Host-side tests for pointer normalization.

#![allow(dead_code)]
mod core {
    pub mod pointer {
        include!("../src/core/pointer.rs");
    }
}

use crate::core::pointer::PointerPosition;

#[test]
fn defaults_to_viewport_centre() {
    let p = PointerPosition::default();
    assert_eq!((p.x, p.y), (0.5, 0.5));
    assert_eq!(p.centered(), (0.0, 0.0));
}

#[test]
fn normalizes_client_coordinates() {
    let p = PointerPosition::from_client(200.0, 450.0, 800.0, 600.0);
    assert!((p.x - 0.25).abs() < 1e-6);
    assert!((p.y - 0.75).abs() < 1e-6);
    assert_eq!(PointerPosition::from_client(0.0, 0.0, 800.0, 600.0), PointerPosition::new(0.0, 0.0));
}

#[test]
fn clamps_outside_the_viewport() {
    let p = PointerPosition::from_client(-50.0, 900.0, 800.0, 600.0);
    assert_eq!((p.x, p.y), (0.0, 1.0));
}

#[test]
fn degenerate_viewport_falls_back_to_centre() {
    assert_eq!(PointerPosition::from_client(10.0, 10.0, 0.0, 600.0), PointerPosition::default());
    assert_eq!(PointerPosition::from_client(f32::NAN, 10.0, 800.0, 600.0), PointerPosition::default());
}

#[test]
fn css_percent_formats_two_decimals() {
    let (x, y) = PointerPosition::new(0.25, 0.5).css_percent();
    assert_eq!(x, "25.00%");
    assert_eq!(y, "50.00%");
}
