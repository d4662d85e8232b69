// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}
mod camera {
    include!("../src/camera.rs");
}

use camera::screen_to_world_ray;
use glam::{Mat4, Quat, Vec2, Vec3};
use input::*;

const HALF: f32 = 1.1;

#[test]
fn short_press_is_a_click() {
    let mut d = DragState::default();
    d.begin(1, Vec2::new(100.0, 100.0));
    let delta = d.advance(Vec2::new(102.0, 101.0), 4.0);
    assert_eq!(delta, Vec2::new(2.0, 1.0));
    assert!(!d.dragging);
    assert!(d.finish());
    assert!(!d.active);
}

#[test]
fn long_press_becomes_a_drag() {
    let mut d = DragState::default();
    d.begin(7, Vec2::ZERO);
    d.advance(Vec2::new(3.0, 0.0), 4.0);
    assert!(!d.dragging);
    let delta = d.advance(Vec2::new(10.0, 0.0), 4.0);
    assert_eq!(delta, Vec2::new(7.0, 0.0));
    assert!(d.dragging);
    // Coming back near the start does not turn it back into a click.
    d.advance(Vec2::new(1.0, 0.0), 4.0);
    assert!(!d.finish());
}

#[test]
fn finish_without_press_is_not_a_click() {
    let mut d = DragState::default();
    assert!(!d.finish());
}

#[test]
fn ray_hits_quad_facing_it() {
    let model = Mat4::IDENTITY;
    let t = ray_quad(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z, &model, HALF);
    assert!(matches!(t, Some(d) if (d - 10.0).abs() < 1e-5));
}

#[test]
fn ray_hits_quad_from_behind() {
    let model = Mat4::IDENTITY;
    assert!(ray_quad(Vec3::new(0.5, 0.5, -4.0), Vec3::Z, &model, HALF).is_some());
}

#[test]
fn ray_misses_outside_half_extent() {
    let model = Mat4::IDENTITY;
    assert!(ray_quad(Vec3::new(1.5, 0.0, 10.0), Vec3::NEG_Z, &model, HALF).is_none());
    assert!(ray_quad(Vec3::new(0.0, -1.2, 10.0), Vec3::NEG_Z, &model, HALF).is_none());
}

#[test]
fn ray_ignores_quads_behind_origin_and_parallel_rays() {
    let model = Mat4::IDENTITY;
    assert!(ray_quad(Vec3::new(0.0, 0.0, 10.0), Vec3::Z, &model, HALF).is_none());
    assert!(ray_quad(Vec3::new(-5.0, 0.0, 0.0), Vec3::X, &model, HALF).is_none());
}

#[test]
fn scaled_quad_grows_its_hit_area() {
    let model = Mat4::from_scale(Vec3::splat(2.0));
    let t = ray_quad(Vec3::new(2.0, 0.0, 10.0), Vec3::NEG_Z, &model, HALF);
    assert!(matches!(t, Some(d) if (d - 10.0).abs() < 1e-4));
}

#[test]
fn rotated_quad_is_hit_edge_on_misses() {
    let edge_on = Mat4::from_quat(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2));
    assert!(ray_quad(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z, &edge_on, HALF).is_none());
    let tilted = Mat4::from_quat(Quat::from_rotation_y(0.5));
    assert!(ray_quad(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z, &tilted, HALF).is_some());
}

#[test]
fn pick_prefers_the_nearest_quad() {
    let models = [
        Mat4::from_translation(Vec3::new(0.0, 0.0, 0.0)),
        Mat4::from_translation(Vec3::new(0.0, 0.0, 2.0)),
        Mat4::from_translation(Vec3::new(5.0, 0.0, 4.0)),
    ];
    let hit = pick_quad(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z, &models, HALF);
    assert_eq!(hit, Some(1));
    let miss = pick_quad(Vec3::new(0.0, 20.0, 10.0), Vec3::NEG_Z, &models, HALF);
    assert_eq!(miss, None);
    assert_eq!(pick_quad(Vec3::ZERO, Vec3::NEG_Z, &[], HALF), None);
}

#[test]
fn wheel_delta_normalizes_modes() {
    assert_eq!(wheel_delta_px(-100.0, 0), -100.0);
    assert_eq!(wheel_delta_px(3.0, 1), 48.0);
    assert_eq!(wheel_delta_px(1.0, 2), 800.0);
}

#[test]
fn screen_centre_ray_points_at_the_target() {
    let eye = Vec3::new(0.0, 2.0, 10.0);
    let view = Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y);
    let proj = Mat4::perspective_rh(65f32.to_radians(), 800.0 / 600.0, 0.1, 100.0);
    let (origin, dir) = screen_to_world_ray(800.0, 600.0, 400.0, 300.0, proj * view, eye);
    assert_eq!(origin, eye);
    let expected = (Vec3::ZERO - eye).normalize();
    assert!(dir.dot(expected) > 0.9999);
}

#[test]
fn screen_left_edge_ray_leans_left() {
    let eye = Vec3::new(0.0, 0.0, 10.0);
    let view = Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y);
    let proj = Mat4::perspective_rh(65f32.to_radians(), 1.0, 0.1, 100.0);
    let (_, dir) = screen_to_world_ray(600.0, 600.0, 0.0, 300.0, proj * view, eye);
    assert!(dir.x < 0.0);
    assert!(dir.y.abs() < 1e-4);
}

#[test]
fn picking_through_the_camera_finds_the_centred_facet() {
    let eye = Vec3::new(0.0, 0.0, 10.0);
    let view = Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y);
    let proj = Mat4::perspective_rh(65f32.to_radians(), 1.0, 0.1, 100.0);
    let (o, d) = screen_to_world_ray(600.0, 600.0, 300.0, 300.0, proj * view, eye);
    let models = [
        Mat4::from_translation(Vec3::new(-4.0, 0.0, 0.0)),
        Mat4::IDENTITY,
        Mat4::from_translation(Vec3::new(4.0, 0.0, 0.0)),
    ];
    assert_eq!(pick_quad(o, d, &models, HALF), Some(1));
}

fn pick_frame_facing(models: Vec<Mat4>) -> PickFrame {
    let eye = Vec3::new(0.0, 0.0, 10.0);
    let view = Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y);
    let proj = Mat4::perspective_rh(65f32.to_radians(), 1.0, 0.1, 100.0);
    PickFrame {
        view_proj: proj * view,
        eye,
        width: 600.0,
        height: 600.0,
        models,
    }
}

#[test]
fn tap_picks_the_facet_under_the_press_without_a_prior_move() {
    let frame = pick_frame_facing(vec![
        Mat4::from_translation(Vec3::new(-4.0, 0.0, 0.0)),
        Mat4::IDENTITY,
        Mat4::from_translation(Vec3::new(4.0, 0.0, 0.0)),
    ]);
    let mut mouse = MouseState::default();
    // Press lands on the centre facet; no move event came first.
    let press = Vec2::new(300.0, 300.0);
    mouse.place(press, true);
    assert_eq!(frame.pick(press, HALF), Some(1));
    assert_eq!(frame.hovered(&mouse, HALF), Some(1));
}

#[test]
fn pick_follows_the_press_position_not_the_last_hover() {
    let frame = pick_frame_facing(vec![
        Mat4::from_translation(Vec3::new(-4.0, 0.0, 0.0)),
        Mat4::IDENTITY,
    ]);
    let mut mouse = MouseState::default();
    mouse.place(Vec2::new(300.0, 300.0), true);
    assert_eq!(frame.hovered(&mouse, HALF), Some(1));
    // Screen x for world x = -4 at distance 10 with a 65 degree fov.
    let half_width = 10.0 * (65f32.to_radians() / 2.0).tan();
    let left = Vec2::new(300.0 * (1.0 - 4.0 / half_width), 300.0);
    assert_eq!(frame.pick(left, HALF), Some(0));
}

#[test]
fn hover_clears_once_the_pointer_leaves() {
    let frame = pick_frame_facing(vec![Mat4::IDENTITY]);
    let mut mouse = MouseState::default();
    mouse.place(Vec2::new(300.0, 300.0), true);
    assert_eq!(frame.hovered(&mouse, HALF), Some(0));
    mouse.leave();
    assert_eq!(frame.hovered(&mouse, HALF), None);
    // The last position is kept but no longer hovers anything.
    assert_eq!(mouse.position(), Vec2::new(300.0, 300.0));
}

#[test]
fn empty_pick_frame_hits_nothing() {
    let frame = PickFrame::default();
    assert_eq!(frame.pick(Vec2::new(10.0, 10.0), HALF), None);
    let mut mouse = MouseState::default();
    mouse.place(Vec2::new(10.0, 10.0), true);
    assert_eq!(frame.hovered(&mouse, HALF), None);
}
