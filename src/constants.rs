// Web-shell tuning constants: DOM contract, input thresholds and renderer
// defaults. Crystal layout/animation tuning lives in `core::constants`.

// DOM element ids
pub const CANVAS_ID: &str = "gallery-canvas";
pub const ROOT_ID: &str = "gallery-root";
pub const CAPTION_ID: &str = "facet-caption";
pub const COUNT_ID: &str = "gallery-count";
pub const LOADED_CLASS: &str = "loaded";

// Entrance: the canvas container fades in once this timer fires
pub const ENTRANCE_DELAY_MS: i32 = 1000;

// Pointer: a press that travels less than this (CSS px) is a click, not a drag
pub const CLICK_SLOP_PX: f32 = 4.0;
// Wheel deltas are normalized to "notches" of this many pixels
pub const WHEEL_NOTCH_PX: f32 = 100.0;

// Post-processing defaults
pub const BLOOM_STRENGTH: f32 = 0.75;
pub const BLOOM_THRESHOLD: f32 = 0.7;
pub const EXPOSURE: f32 = 1.1;

// Renderer capacity: facets + decorations drawn per frame
pub const MAX_INSTANCES: usize = 128;

// Background
pub const CLEAR_COLOR: [f64; 3] = [0.02, 0.02, 0.04];
