use super::constants::*;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// Keeps the polar angle off the poles so `look_at` never degenerates.
const POLE_EPSILON: f32 = 1e-4;
/// Per-notch wheel zoom factor before `zoom_speed` is applied.
const ZOOM_STEP_BASE: f32 = 0.95;
/// Remaining angular velocity below which damping snaps to rest.
const REST_EPSILON: f32 = 1e-6;

/// Orbit camera tuning.
#[derive(Clone, Debug)]
pub struct OrbitParams {
    pub min_distance: f32,
    pub max_distance: f32,
    pub damping: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub enable_zoom: bool,
    pub enable_pan: bool,
}

impl Default for OrbitParams {
    fn default() -> Self {
        Self {
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            damping: ORBIT_DAMPING,
            rotate_speed: ORBIT_ROTATE_SPEED,
            zoom_speed: ORBIT_ZOOM_SPEED,
            enable_zoom: true,
            enable_pan: false,
        }
    }
}

/// Damped orbit around a target, stored in spherical coordinates.
///
/// `theta` is the azimuth around +Y measured from +Z, `phi` the polar angle
/// from +Y. Input calls (`rotate`, `zoom`, `pan`) only queue deltas;
/// [`OrbitCamera::update`] applies them once per frame.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    target: Vec3,
    radius: f32,
    theta: f32,
    phi: f32,
    theta_delta: f32,
    phi_delta: f32,
    zoom_scale: f32,
    params: OrbitParams,
}

impl OrbitCamera {
    pub fn new(eye: Vec3, target: Vec3, params: OrbitParams) -> Self {
        let mut cam = Self {
            target,
            radius: 1.0,
            theta: 0.0,
            phi: PI / 2.0,
            theta_delta: 0.0,
            phi_delta: 0.0,
            zoom_scale: 1.0,
            params,
        };
        cam.set_eye(eye);
        cam
    }

    #[inline]
    pub fn params(&self) -> &OrbitParams {
        &self.params
    }

    #[inline]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    #[inline]
    pub fn distance(&self) -> f32 {
        self.radius
    }

    pub fn eye(&self) -> Vec3 {
        let s = self.phi.sin();
        self.target
            + self.radius * Vec3::new(s * self.theta.sin(), self.phi.cos(), s * self.theta.cos())
    }

    /// Move the eye directly (used by the camera drift). Re-derives the
    /// spherical coordinates and clamps the distance.
    pub fn set_eye(&mut self, eye: Vec3) {
        let offset = eye - self.target;
        let r = offset.length();
        if r <= f32::EPSILON {
            return;
        }
        self.radius = r.clamp(self.params.min_distance, self.params.max_distance);
        self.theta = offset.x.atan2(offset.z);
        self.phi = (offset.y / r)
            .clamp(-1.0, 1.0)
            .acos()
            .clamp(POLE_EPSILON, PI - POLE_EPSILON);
    }

    /// Queue a drag of `dx`, `dy` pixels on a viewport `viewport_height` tall.
    /// A drag across the full height turns the camera a full revolution at
    /// unit rotate speed.
    pub fn rotate(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        if viewport_height <= 0.0 {
            return;
        }
        let k = TAU * self.params.rotate_speed / viewport_height;
        self.theta_delta -= dx * k;
        self.phi_delta -= dy * k;
    }

    /// Queue a wheel step. Negative `delta_y` (scrolling up) zooms in.
    pub fn zoom(&mut self, delta_y: f32) {
        if !self.params.enable_zoom || delta_y == 0.0 {
            return;
        }
        let step = ZOOM_STEP_BASE.powf(self.params.zoom_speed);
        if delta_y < 0.0 {
            self.zoom_scale *= step;
        } else {
            self.zoom_scale /= step;
        }
    }

    /// Slide the target in the view plane. Ignored unless panning is enabled,
    /// which keeps the crystal centred by default.
    pub fn pan(&mut self, dx: f32, dy: f32, viewport_height: f32) -> bool {
        if !self.params.enable_pan || viewport_height <= 0.0 {
            return false;
        }
        let forward = (self.target - self.eye()).normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward);
        let per_px = 2.0 * self.radius / viewport_height;
        self.target += (-dx * right + dy * up) * per_px;
        true
    }

    /// Apply queued input with damping. Returns the new eye position.
    pub fn update(&mut self) -> Vec3 {
        let d = self.params.damping.clamp(0.0, 1.0);
        if d > 0.0 {
            self.theta += self.theta_delta * d;
            self.phi += self.phi_delta * d;
            self.theta_delta *= 1.0 - d;
            self.phi_delta *= 1.0 - d;
            if self.theta_delta.abs() < REST_EPSILON {
                self.theta_delta = 0.0;
            }
            if self.phi_delta.abs() < REST_EPSILON {
                self.phi_delta = 0.0;
            }
        } else {
            self.theta += self.theta_delta;
            self.phi += self.phi_delta;
            self.theta_delta = 0.0;
            self.phi_delta = 0.0;
        }
        self.phi = self.phi.clamp(POLE_EPSILON, PI - POLE_EPSILON);
        self.radius = (self.radius * self.zoom_scale)
            .clamp(self.params.min_distance, self.params.max_distance);
        self.zoom_scale = 1.0;
        self.eye()
    }
}
