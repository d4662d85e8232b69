use super::constants::*;
use super::facet::{facet_tint, FacetMaterial, FacetState};
use super::gallery::Gallery;
use super::layout::particle_layout;
use super::orbit::OrbitCamera;
use super::pointer::PointerPosition;
use glam::{Mat4, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LightKind {
    Ambient,
    Point {
        position: Vec3,
    },
    Spot {
        position: Vec3,
        target: Vec3,
        angle: f32,
        penumbra: f32,
    },
    /// Shines from `position` toward the origin.
    Directional {
        position: Vec3,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    pub color: [f32; 3],
    pub intensity: f32,
}

impl Light {
    const fn new(kind: LightKind, color: [f32; 3], intensity: f32) -> Self {
        Self {
            kind,
            color,
            intensity,
        }
    }
}

/// Where the cursor-following spotlight sits for a pointer position.
/// The pointer's top-left corner maps to the most negative offsets.
pub fn spotlight_position(pointer: PointerPosition) -> Vec3 {
    let (dx, dy) = pointer.centered();
    Vec3::new(
        dx * SPOT_TRAVEL,
        dy * SPOT_TRAVEL + SPOT_HEIGHT_OFFSET,
        SPOT_DEPTH,
    )
}

/// The fixed part of the rig: ambient fill, gold/turquoise accents, a neutral
/// key light and two coloured rim lights.
pub fn static_lights() -> [Light; 6] {
    [
        Light::new(LightKind::Ambient, MIDNIGHT, AMBIENT_INTENSITY),
        Light::new(
            LightKind::Point {
                position: GOLD_POINT_POSITION,
            },
            GOLD,
            ACCENT_POINT_INTENSITY,
        ),
        Light::new(
            LightKind::Point {
                position: TURQUOISE_POINT_POSITION,
            },
            TURQUOISE,
            ACCENT_POINT_INTENSITY,
        ),
        Light::new(
            LightKind::Point {
                position: KEY_POINT_POSITION,
            },
            WHITE,
            KEY_POINT_INTENSITY,
        ),
        Light::new(
            LightKind::Directional {
                position: GOLD_RIM_POSITION,
            },
            GOLD,
            RIM_INTENSITY,
        ),
        Light::new(
            LightKind::Directional {
                position: TURQUOISE_RIM_POSITION,
            },
            TURQUOISE,
            RIM_INTENSITY,
        ),
    ]
}

pub fn spotlight(pointer: PointerPosition) -> Light {
    Light::new(
        LightKind::Spot {
            position: spotlight_position(pointer),
            target: Vec3::ZERO,
            angle: SPOT_ANGLE,
            penumbra: SPOT_PENUMBRA,
        },
        WHITE,
        SPOT_INTENSITY,
    )
}

/// Perspective camera as seen by the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraView {
    pub eye: Vec3,
    pub target: Vec3,
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl CameraView {
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, aspect.max(1e-3), self.near, self.far)
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }
}

/// Everything the renderer needs to draw one image plane.
#[derive(Clone, Debug, PartialEq)]
pub struct FacetInstance {
    pub index: usize,
    pub model: Mat4,
    pub tint: [f32; 3],
    pub image_ref: String,
    pub material: FacetMaterial,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecorationShape {
    Sphere,
    Mote,
    WireSphere,
}

/// Unlit translucent geometry: glow core, energy field, particles, aura.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecorationInstance {
    pub shape: DecorationShape,
    pub model: Mat4,
    pub color: [f32; 3],
    pub opacity: f32,
}

/// A full frame's worth of scene state.
#[derive(Clone, Debug)]
pub struct SceneDescription {
    pub lights: Vec<Light>,
    pub camera: CameraView,
    pub facets: Vec<FacetInstance>,
    pub decorations: Vec<DecorationInstance>,
    pub selected: Option<usize>,
}

/// Assembles lights, camera and crystal into a [`SceneDescription`] and owns
/// the slow camera sway layered on top of the orbit controls.
#[derive(Clone, Debug)]
pub struct SceneComposer {
    fov_y: f32,
}

impl Default for SceneComposer {
    fn default() -> Self {
        Self {
            fov_y: CAMERA_FOV_DEG.to_radians(),
        }
    }
}

impl SceneComposer {
    /// Ease the eye's x/y toward a slow Lissajous sway.
    pub fn drift_camera(&self, orbit: &mut OrbitCamera, elapsed: f32) {
        let mut eye = orbit.eye();
        let tx = (elapsed * CAMERA_DRIFT_X_FREQ).sin() * CAMERA_DRIFT_X_AMP;
        let ty = (elapsed * CAMERA_DRIFT_Y_FREQ).cos() * CAMERA_DRIFT_Y_AMP;
        eye.x += (tx - eye.x) * CAMERA_DRIFT_EASE;
        eye.y += (ty - eye.y) * CAMERA_DRIFT_EASE;
        orbit.set_eye(eye);
    }

    pub fn camera(&self, orbit: &OrbitCamera) -> CameraView {
        CameraView {
            eye: orbit.eye(),
            target: orbit.target(),
            fov_y: self.fov_y,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
        }
    }

    pub fn lights(&self, pointer: PointerPosition) -> Vec<Light> {
        let mut lights = Vec::with_capacity(7);
        lights.extend_from_slice(&static_lights());
        lights.push(spotlight(pointer));
        lights
    }

    pub fn compose(
        &self,
        gallery: &Gallery,
        facets: &[FacetState],
        orbit: &OrbitCamera,
        pointer: PointerPosition,
    ) -> SceneDescription {
        let group = gallery.group_transform();
        let total = gallery.len().max(1);
        let mut decorations = Vec::with_capacity(PARTICLE_COUNT + 3);

        decorations.push(DecorationInstance {
            shape: DecorationShape::Sphere,
            model: group * Mat4::from_scale(Vec3::splat(CORE_GLOW_RADIUS)),
            color: GOLD,
            opacity: CORE_GLOW_OPACITY,
        });
        decorations.push(DecorationInstance {
            shape: DecorationShape::WireSphere,
            model: group * Mat4::from_scale(Vec3::splat(ENERGY_FIELD_RADIUS)),
            color: TURQUOISE,
            opacity: ENERGY_FIELD_OPACITY,
        });
        for i in 0..PARTICLE_COUNT {
            let p = particle_layout(i, PARTICLE_COUNT);
            decorations.push(DecorationInstance {
                shape: DecorationShape::Mote,
                model: group
                    * Mat4::from_scale_rotation_translation(
                        Vec3::splat(PARTICLE_SIZE),
                        glam::Quat::IDENTITY,
                        p.position,
                    ),
                color: p.color,
                opacity: PARTICLE_OPACITY,
            });
        }

        let facet_instances = facets
            .iter()
            .map(|f| {
                if f.mode.shows_aura() {
                    decorations.push(DecorationInstance {
                        shape: DecorationShape::WireSphere,
                        model: group
                            * f.anchor_transform()
                            * Mat4::from_scale(Vec3::splat(AURA_RADIUS)),
                        color: GOLD,
                        opacity: AURA_OPACITY,
                    });
                }
                FacetInstance {
                    index: f.index,
                    model: group * f.local_transform(),
                    tint: facet_tint(f.index, total),
                    image_ref: gallery
                        .items()
                        .get(f.index)
                        .map(|it| it.image_ref.clone())
                        .unwrap_or_default(),
                    material: f.material(),
                }
            })
            .collect();

        SceneDescription {
            lights: self.lights(pointer),
            camera: self.camera(orbit),
            facets: facet_instances,
            decorations,
            selected: gallery.selected(),
        }
    }
}
