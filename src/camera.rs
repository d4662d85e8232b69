use glam::{Mat4, Vec3, Vec4};

#[inline]
/// Compute a world-space ray from screen-space canvas coordinates.
///
/// - `width`, `height`: canvas backing-store size in pixels
/// - `sx`, `sy`: pixel coordinates in that same space
/// - `view_proj`: the camera's combined projection * view matrix
/// - `eye`: camera position, used as the ray origin
///
/// Returns `(ray_origin, ray_direction)` in world space.
pub fn screen_to_world_ray(
    width: f32,
    height: f32,
    sx: f32,
    sy: f32,
    view_proj: Mat4,
    eye: Vec3,
) -> (Vec3, Vec3) {
    let width = width.max(1.0);
    let height = height.max(1.0);
    let ndc_x = (2.0 * sx / width) - 1.0;
    let ndc_y = 1.0 - (2.0 * sy / height);
    let inv = view_proj.inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let p1: Vec3 = p_far.truncate() / p_far.w;
    let rd = (p1 - eye).normalize_or_zero();
    (eye, rd)
}
