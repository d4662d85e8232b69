use super::constants::*;
use super::layout::euler_xyz;
use super::pointer::PointerPosition;
use glam::{Mat4, Vec3};

/// One piece in the gallery. The image reference is opaque to the core; it is
/// passed through to the scene description untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryItem {
    pub image_ref: String,
    pub title: String,
    pub description: String,
}

impl GalleryItem {
    pub fn new(
        image_ref: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            image_ref: image_ref.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

/// The twelve portraits shipped with the page.
pub fn default_catalogue() -> Vec<GalleryItem> {
    const PIECES: [(&str, &str); 12] = [
        ("Portrait Study I", "Digital art piece capturing ethereal beauty"),
        ("Cinematic Moment", "Inspired by iconic film scenes"),
        ("Golden Hour", "Warm lighting study with golden tones"),
        ("Portrait Study II", "Contemporary digital interpretation"),
        ("Ethereal Glow", "Soft lighting and turquoise accents"),
        ("Classic Beauty", "Timeless elegance captured"),
        ("Dramatic Luminance", "Professional cinematic lighting study"),
        ("Artistic Vision", "Moody atmospheric composition"),
        ("Ethereal Dreams", "Soft focus with golden bokeh"),
        ("High Fashion", "Studio lighting with dramatic contrast"),
        ("Dynamic Grace", "Hair in motion with turquoise accents"),
        ("Natural Elegance", "Contemporary beauty with gentle warmth"),
    ];
    PIECES
        .iter()
        .enumerate()
        .map(|(i, (title, description))| {
            GalleryItem::new(format!("assets/portrait-{}.jpg", i + 1), *title, *description)
        })
        .collect()
}

/// Group motion tuning.
///
/// - `yaw_step`: constant ambient yaw added every frame (radians)
/// - `tilt_factor`: lean at the viewport edge is `0.5 * tilt_factor`
/// - `tilt_ease`: fraction of the remaining tilt gap closed every frame
#[derive(Clone, Debug)]
pub struct GalleryParams {
    pub yaw_step: f32,
    pub tilt_factor: f32,
    pub tilt_ease: f32,
}

impl Default for GalleryParams {
    fn default() -> Self {
        Self {
            yaw_step: GROUP_YAW_STEP,
            tilt_factor: GROUP_TILT_FACTOR,
            tilt_ease: GROUP_TILT_EASE,
        }
    }
}

/// Which facets changed highlight as a result of a click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionChange {
    pub previous: Option<usize>,
    pub current: Option<usize>,
}

impl SelectionChange {
    /// Facets that need their highlight redrawn, previous first.
    pub fn touched(&self) -> impl Iterator<Item = usize> {
        let current = if self.current != self.previous {
            self.current
        } else {
            None
        };
        self.previous.into_iter().chain(current)
    }
}

/// The crystal as a whole: the fixed item list, the single optional
/// selection and the group rotation (pitch, yaw, roll).
#[derive(Clone, Debug)]
pub struct Gallery {
    items: Vec<GalleryItem>,
    selected: Option<usize>,
    rotation: Vec3,
    params: GalleryParams,
}

impl Gallery {
    pub fn new(items: Vec<GalleryItem>) -> Self {
        Self::with_params(items, GalleryParams::default())
    }

    pub fn with_params(items: Vec<GalleryItem>, params: GalleryParams) -> Self {
        Self {
            items,
            selected: None,
            rotation: Vec3::ZERO,
            params,
        }
    }

    #[inline]
    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&GalleryItem> {
        self.selected.and_then(|i| self.items.get(i))
    }

    #[inline]
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// Click on facet `index`: clicking the selected facet clears the
    /// selection, any other facet replaces it.
    pub fn select_facet(&mut self, index: usize) -> SelectionChange {
        let previous = self.selected;
        self.selected = match previous {
            Some(current) if current == index => None,
            _ => Some(index),
        };
        SelectionChange {
            previous,
            current: self.selected,
        }
    }

    /// Advance the ambient yaw and ease the lean toward the pointer.
    pub fn tick(&mut self, pointer: PointerPosition) {
        let (dx, dy) = pointer.centered();
        let target_pitch = dy * self.params.tilt_factor;
        let target_roll = dx * self.params.tilt_factor;
        self.rotation.y += self.params.yaw_step;
        self.rotation.x += (target_pitch - self.rotation.x) * self.params.tilt_ease;
        self.rotation.z += (target_roll - self.rotation.z) * self.params.tilt_ease;
    }

    #[inline]
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn group_transform(&self) -> Mat4 {
        Mat4::from_quat(euler_xyz(self.rotation))
    }
}
