use glam::Vec3;

// Shared layout/animation tuning for the crystal. Everything here is per-frame
// unless noted; the render loop runs once per display refresh.

// Crystal layout
pub const INNER_RADIUS: f32 = 2.5; // even facets
pub const OUTER_RADIUS: f32 = 4.0; // odd facets
pub const HEIGHT_PRIMARY_FREQ: f32 = 0.8;
pub const HEIGHT_PRIMARY_AMP: f32 = 3.0;
pub const HEIGHT_SECONDARY_FREQ: f32 = 1.2;
pub const HEIGHT_SECONDARY_AMP: f32 = 1.5;
pub const PITCH_JITTER_FREQ: f32 = 0.3;
pub const PITCH_JITTER_AMP: f32 = 0.2;
pub const ROLL_JITTER_FREQ: f32 = 0.4;
pub const ROLL_JITTER_AMP: f32 = 0.1;
pub const FACET_SIZE: f32 = 2.2; // edge length of the square image plane

// Decorations
pub const PARTICLE_COUNT: usize = 20;
pub const PARTICLE_BASE_RADIUS: f32 = 6.0;
pub const PARTICLE_RADIUS_SWING: f32 = 2.0;
pub const PARTICLE_RADIUS_FREQ: f32 = 0.5;
pub const PARTICLE_HEIGHT_AMP: f32 = 4.0;
pub const PARTICLE_HEIGHT_FREQ: f32 = 0.3;
pub const PARTICLE_SIZE: f32 = 0.05;
pub const PARTICLE_OPACITY: f32 = 0.6;
pub const CORE_GLOW_RADIUS: f32 = 0.8;
pub const CORE_GLOW_OPACITY: f32 = 0.15;
pub const ENERGY_FIELD_RADIUS: f32 = 1.2;
pub const ENERGY_FIELD_OPACITY: f32 = 0.08;
pub const AURA_RADIUS: f32 = 2.5; // wireframe shell around the selected facet
pub const AURA_OPACITY: f32 = 0.1;

// Facet animation: selected
pub const SELECTED_YAW_STEP: f32 = 0.015;
pub const SELECTED_PITCH_STEP: f32 = 0.005;
pub const SELECTED_BASE_SCALE: f32 = 1.2;
pub const SELECTED_PULSE_AMP: f32 = 0.08;
pub const SELECTED_PULSE_FREQ: f32 = 3.0;

// Facet animation: hovered
pub const HOVER_YAW_STEP: f32 = 0.008;
pub const HOVER_BASE_SCALE: f32 = 1.1;
pub const HOVER_PULSE_AMP: f32 = 0.03;
pub const HOVER_PULSE_FREQ: f32 = 4.0;

// Facet animation: idle
pub const IDLE_YAW_STEP: f32 = 0.002;
pub const IDLE_SCALE_EASE: f32 = 0.05; // fraction of the remaining gap closed each frame
pub const REST_SCALE: f32 = 1.0;

// Facet materials
pub const SELECTED_EMISSIVE_INTENSITY: f32 = 0.4;
pub const HOVER_EMISSIVE_INTENSITY: f32 = 0.2;
pub const SELECTED_OPACITY: f32 = 0.95;
pub const HOVER_OPACITY: f32 = 0.9;
pub const IDLE_OPACITY: f32 = 0.85;
pub const FACET_ROUGHNESS: f32 = 0.1;
pub const FACET_METALNESS: f32 = 0.8;

// Palette (linear-ish RGB straight from the hex values)
pub const GOLD: [f32; 3] = [0.831, 0.686, 0.216]; // #D4AF37
pub const TURQUOISE: [f32; 3] = [0.251, 0.878, 0.816]; // #40E0D0
pub const WHITE: [f32; 3] = [1.0, 1.0, 1.0];
pub const BLACK: [f32; 3] = [0.0, 0.0, 0.0];
pub const MIDNIGHT: [f32; 3] = [0.102, 0.102, 0.180]; // #1a1a2e, ambient fill

// Group motion
pub const GROUP_YAW_STEP: f32 = 0.002;
pub const GROUP_TILT_FACTOR: f32 = 0.1; // radians of lean at the viewport edge * 2
pub const GROUP_TILT_EASE: f32 = 0.02;

// Lighting
pub const AMBIENT_INTENSITY: f32 = 0.15;
pub const SPOT_TRAVEL: f32 = 15.0; // world units across the full viewport
pub const SPOT_HEIGHT_OFFSET: f32 = 5.0;
pub const SPOT_DEPTH: f32 = 8.0;
pub const SPOT_INTENSITY: f32 = 2.5;
pub const SPOT_ANGLE: f32 = std::f32::consts::FRAC_PI_6;
pub const SPOT_PENUMBRA: f32 = 0.5;
pub const GOLD_POINT_POSITION: Vec3 = Vec3::new(8.0, 8.0, 8.0);
pub const TURQUOISE_POINT_POSITION: Vec3 = Vec3::new(-8.0, -8.0, 8.0);
pub const KEY_POINT_POSITION: Vec3 = Vec3::new(0.0, 10.0, -5.0);
pub const ACCENT_POINT_INTENSITY: f32 = 0.8;
pub const KEY_POINT_INTENSITY: f32 = 0.4;
pub const GOLD_RIM_POSITION: Vec3 = Vec3::new(10.0, 10.0, 5.0);
pub const TURQUOISE_RIM_POSITION: Vec3 = Vec3::new(-10.0, -10.0, 5.0);
pub const RIM_INTENSITY: f32 = 0.3;

// Camera
pub const CAMERA_START: Vec3 = Vec3::new(0.0, 2.0, 10.0);
pub const CAMERA_FOV_DEG: f32 = 65.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_DRIFT_X_FREQ: f32 = 0.1;
pub const CAMERA_DRIFT_X_AMP: f32 = 0.5;
pub const CAMERA_DRIFT_Y_FREQ: f32 = 0.15;
pub const CAMERA_DRIFT_Y_AMP: f32 = 0.3;
pub const CAMERA_DRIFT_EASE: f32 = 0.02;

// Orbit controls
pub const ORBIT_MIN_DISTANCE: f32 = 4.0;
pub const ORBIT_MAX_DISTANCE: f32 = 20.0;
pub const ORBIT_DAMPING: f32 = 0.05;
pub const ORBIT_ROTATE_SPEED: f32 = 0.5;
pub const ORBIT_ZOOM_SPEED: f32 = 0.8;
