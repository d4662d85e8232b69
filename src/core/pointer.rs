/// Pointer position normalized to the viewport, `(0, 0)` top-left and
/// `(1, 1)` bottom-right. Starts centred so nothing leans before the first
/// pointer event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerPosition {
    pub x: f32,
    pub y: f32,
}

impl Default for PointerPosition {
    fn default() -> Self {
        Self { x: 0.5, y: 0.5 }
    }
}

impl PointerPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: x.clamp(0.0, 1.0),
            y: y.clamp(0.0, 1.0),
        }
    }

    /// Normalize a client-space coordinate against the viewport size.
    /// A degenerate viewport yields the centre.
    pub fn from_client(client_x: f32, client_y: f32, width: f32, height: f32) -> Self {
        if width > 0.0 && height > 0.0 && client_x.is_finite() && client_y.is_finite() {
            Self::new(client_x / width, client_y / height)
        } else {
            Self::default()
        }
    }

    /// Offset from the viewport centre, each axis in `[-0.5, 0.5]`.
    #[inline]
    pub fn centered(&self) -> (f32, f32) {
        (self.x - 0.5, self.y - 0.5)
    }

    /// Percent strings for the `--mouse-x` / `--mouse-y` CSS variables.
    pub fn css_percent(&self) -> (String, String) {
        (
            format!("{:.2}%", self.x * 100.0),
            format!("{:.2}%", self.y * 100.0),
        )
    }
}
