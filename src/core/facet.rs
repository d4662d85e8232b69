use super::constants::*;
use super::layout::{euler_xyz, facet_layout, ring_angle, FacetPlacement};
use glam::{Mat4, Vec3};

/// Animation mode of a facet for the current frame.
///
/// Priority is `Selected` > `Hovered` > `Idle`; use [`FacetMode::resolve`]
/// rather than building one by hand from the two flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FacetMode {
    #[default]
    Idle,
    Hovered,
    Selected,
}

impl FacetMode {
    #[inline]
    pub fn resolve(is_selected: bool, is_hovered: bool) -> Self {
        if is_selected {
            FacetMode::Selected
        } else if is_hovered {
            FacetMode::Hovered
        } else {
            FacetMode::Idle
        }
    }

    pub fn material(self) -> FacetMaterial {
        let (emissive, emissive_intensity, opacity) = match self {
            FacetMode::Selected => (GOLD, SELECTED_EMISSIVE_INTENSITY, SELECTED_OPACITY),
            FacetMode::Hovered => (TURQUOISE, HOVER_EMISSIVE_INTENSITY, HOVER_OPACITY),
            FacetMode::Idle => (BLACK, 0.0, IDLE_OPACITY),
        };
        FacetMaterial {
            emissive,
            emissive_intensity,
            opacity,
            roughness: FACET_ROUGHNESS,
            metalness: FACET_METALNESS,
        }
    }

    /// Whether the wireframe aura shell is drawn around the facet.
    #[inline]
    pub fn shows_aura(self) -> bool {
        self == FacetMode::Selected
    }
}

/// Surface parameters handed to the lit facet shader.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FacetMaterial {
    pub emissive: [f32; 3],
    pub emissive_intensity: f32,
    pub opacity: f32,
    pub roughness: f32,
    pub metalness: f32,
}

/// Per-facet animation record, one per gallery item, stored in an arena
/// indexed by item index.
///
/// `placement` never changes after construction. `spin` accumulates the
/// incremental rotation on top of it and `scale` is eased frame over frame;
/// those two are the only state carried between frames.
#[derive(Clone, Debug)]
pub struct FacetState {
    pub index: usize,
    pub placement: FacetPlacement,
    pub spin: Vec3,
    pub scale: f32,
    pub mode: FacetMode,
}

impl FacetState {
    pub fn new(index: usize, total: usize) -> Self {
        Self {
            index,
            placement: facet_layout(index, total),
            spin: Vec3::ZERO,
            scale: REST_SCALE,
            mode: FacetMode::Idle,
        }
    }

    /// Build the arena for a gallery of `total` items.
    pub fn arena(total: usize) -> Vec<FacetState> {
        (0..total).map(|i| FacetState::new(i, total)).collect()
    }

    /// Advance one frame. `elapsed` is the seconds since mount and only
    /// drives the breathing oscillation.
    pub fn animate(&mut self, elapsed: f32, mode: FacetMode) {
        self.mode = mode;
        match mode {
            FacetMode::Selected => {
                self.spin.y += SELECTED_YAW_STEP;
                self.spin.x += SELECTED_PITCH_STEP;
                self.scale = SELECTED_BASE_SCALE
                    + (elapsed * SELECTED_PULSE_FREQ).sin() * SELECTED_PULSE_AMP;
            }
            FacetMode::Hovered => {
                self.spin.y += HOVER_YAW_STEP;
                self.scale =
                    HOVER_BASE_SCALE + (elapsed * HOVER_PULSE_FREQ).sin() * HOVER_PULSE_AMP;
            }
            FacetMode::Idle => {
                self.spin.y += IDLE_YAW_STEP;
                self.scale += (REST_SCALE - self.scale) * IDLE_SCALE_EASE;
            }
        }
    }

    /// Transform of the facet's resting frame (position + base orientation)
    /// relative to the crystal group. The aura shell hangs off this frame.
    pub fn anchor_transform(&self) -> Mat4 {
        Mat4::from_rotation_translation(
            euler_xyz(self.placement.orientation),
            self.placement.position,
        )
    }

    /// Full transform of the image plane relative to the crystal group.
    pub fn local_transform(&self) -> Mat4 {
        self.anchor_transform()
            * Mat4::from_scale_rotation_translation(
                Vec3::splat(self.scale),
                euler_xyz(self.spin),
                Vec3::ZERO,
            )
    }

    #[inline]
    pub fn material(&self) -> FacetMaterial {
        self.mode.material()
    }
}

/// Flat base colour for a facet. Image bytes are not decoded here, so each
/// plane gets a stable tint that sweeps from gold to turquoise around the ring.
pub fn facet_tint(index: usize, total: usize) -> [f32; 3] {
    let t = 0.5 + 0.5 * ring_angle(index, total).cos();
    let mix = |a: f32, b: f32| (a * t + b * (1.0 - t)) * 0.6 + 0.4;
    [
        mix(GOLD[0], TURQUOISE[0]),
        mix(GOLD[1], TURQUOISE[1]),
        mix(GOLD[2], TURQUOISE[2]),
    ]
}
