use super::constants::*;
use glam::{Quat, Vec3};
use std::f32::consts::{FRAC_PI_2, TAU};

/// Resting placement of one facet inside the crystal group.
///
/// `orientation` holds Euler angles (pitch, yaw, roll) applied in XYZ order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FacetPlacement {
    pub position: Vec3,
    pub orientation: Vec3,
}

/// Place facet `index` of `total` on the distorted double ring.
///
/// Even facets sit on the inner radius and odd facets on the outer one; the
/// height is a fixed sum of two sinusoids of the index, so the scatter looks
/// random but is identical on every call. `total` must be non-zero.
pub fn facet_layout(index: usize, total: usize) -> FacetPlacement {
    debug_assert!(total > 0, "facet_layout requires a non-empty gallery");
    let i = index as f32;
    let angle = ring_angle(index, total);
    let radius = if index % 2 == 0 {
        INNER_RADIUS
    } else {
        OUTER_RADIUS
    };
    FacetPlacement {
        position: Vec3::new(angle.cos() * radius, facet_height(index), angle.sin() * radius),
        orientation: Vec3::new(
            (i * PITCH_JITTER_FREQ).sin() * PITCH_JITTER_AMP,
            -angle + FRAC_PI_2,
            (i * ROLL_JITTER_FREQ).cos() * ROLL_JITTER_AMP,
        ),
    }
}

#[inline]
pub fn ring_angle(index: usize, total: usize) -> f32 {
    index as f32 / total as f32 * TAU
}

#[inline]
pub fn facet_height(index: usize) -> f32 {
    let i = index as f32;
    (i * HEIGHT_PRIMARY_FREQ).sin() * HEIGHT_PRIMARY_AMP
        + (i * HEIGHT_SECONDARY_FREQ).cos() * HEIGHT_SECONDARY_AMP
}

/// One of the small glowing motes floating around the crystal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticlePlacement {
    pub position: Vec3,
    pub color: [f32; 3],
}

pub fn particle_layout(index: usize, count: usize) -> ParticlePlacement {
    debug_assert!(count > 0);
    let i = index as f32;
    let angle = ring_angle(index, count);
    let radius = PARTICLE_BASE_RADIUS + (i * PARTICLE_RADIUS_FREQ).sin() * PARTICLE_RADIUS_SWING;
    ParticlePlacement {
        position: Vec3::new(
            angle.cos() * radius,
            (i * PARTICLE_HEIGHT_FREQ).cos() * PARTICLE_HEIGHT_AMP,
            angle.sin() * radius,
        ),
        color: if index % 2 == 0 { GOLD } else { TURQUOISE },
    }
}

/// Intrinsic XYZ Euler rotation (x applied outermost), the order used by
/// every placement and spin angle in the crystal.
#[inline]
pub fn euler_xyz(angles: Vec3) -> Quat {
    Quat::from_rotation_x(angles.x) * Quat::from_rotation_y(angles.y) * Quat::from_rotation_z(angles.z)
}
