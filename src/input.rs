use crate::camera::screen_to_world_ray;
use glam::{Mat4, Vec2, Vec3};
use web_sys as web;

/// Last known pointer position in canvas backing-store pixels.
#[derive(Default, Clone, Copy)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub over_canvas: bool,
}

impl MouseState {
    /// Record a pointer position reported by a move or press.
    pub fn place(&mut self, at: Vec2, over_canvas: bool) {
        self.x = at.x;
        self.y = at.y;
        self.over_canvas = over_canvas;
    }

    /// The pointer left the canvas; nothing can be hovered until it returns.
    pub fn leave(&mut self) {
        self.over_canvas = false;
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// What was on screen last frame: enough to turn a canvas pixel into a facet
/// index without waiting for the next frame.
#[derive(Clone, Debug, Default)]
pub struct PickFrame {
    pub view_proj: Mat4,
    pub eye: Vec3,
    pub width: f32,
    pub height: f32,
    pub models: Vec<Mat4>,
}

impl PickFrame {
    /// Facet under canvas pixel `at`, front-most wins.
    pub fn pick(&self, at: Vec2, half: f32) -> Option<usize> {
        if self.models.is_empty() || self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        let (ro, rd) = screen_to_world_ray(self.width, self.height, at.x, at.y, self.view_proj, self.eye);
        pick_quad(ro, rd, &self.models, half)
    }

    /// Facet under the mouse, or `None` once it has left the canvas.
    pub fn hovered(&self, mouse: &MouseState, half: f32) -> Option<usize> {
        if !mouse.over_canvas {
            return None;
        }
        self.pick(mouse.position(), half)
    }
}

/// An in-progress press on the canvas. Becomes a drag once it travels past
/// the click slop; a press that never does is a click.
#[derive(Default, Clone, Copy)]
pub struct DragState {
    pub active: bool,
    pub dragging: bool,
    pub pointer_id: i32,
    pub start: Vec2,
    pub last: Vec2,
}

impl DragState {
    pub fn begin(&mut self, pointer_id: i32, at: Vec2) {
        *self = DragState {
            active: true,
            dragging: false,
            pointer_id,
            start: at,
            last: at,
        };
    }

    /// Record a move and return the delta since the previous one. Flips to
    /// dragging once the press strays `slop` away from where it started.
    pub fn advance(&mut self, at: Vec2, slop: f32) -> Vec2 {
        let delta = at - self.last;
        self.last = at;
        if !self.dragging && (at - self.start).length() > slop {
            self.dragging = true;
        }
        delta
    }

    /// End the press. Returns `true` when it should count as a click.
    pub fn finish(&mut self) -> bool {
        let was_click = self.active && !self.dragging;
        self.active = false;
        self.dragging = false;
        was_click
    }
}

/// Distance along the ray to a square of half-extent `half` lying in the
/// local XY plane of `model`, if it is hit in front of the origin.
#[inline]
pub fn ray_quad(ray_origin: Vec3, ray_dir: Vec3, model: &Mat4, half: f32) -> Option<f32> {
    let inv = model.inverse();
    if !inv.is_finite() {
        return None;
    }
    let o = inv.transform_point3(ray_origin);
    let d = inv.transform_vector3(ray_dir);
    if d.z.abs() < 1e-6 {
        return None;
    }
    let s = -o.z / d.z;
    if s < 0.0 {
        return None;
    }
    let p = o + d * s;
    if p.x.abs() > half || p.y.abs() > half {
        return None;
    }
    // Convert back to world distance so hits on differently scaled quads compare.
    let hit_world = model.transform_point3(p);
    Some((hit_world - ray_origin).length())
}

/// Nearest quad under the ray, front-most wins.
pub fn pick_quad(ray_origin: Vec3, ray_dir: Vec3, models: &[Mat4], half: f32) -> Option<usize> {
    let mut best = None::<(usize, f32)>;
    for (i, m) in models.iter().enumerate() {
        if let Some(t) = ray_quad(ray_origin, ray_dir, m, half) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best.map(|(i, _)| i)
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let w = rect.width() as f32;
    let h = rect.height() as f32;
    if w > 0.0 && h > 0.0 {
        Vec2::new(
            (x_css / w) * canvas.width() as f32,
            (y_css / h) * canvas.height() as f32,
        )
    } else {
        Vec2::new(-1.0, -1.0)
    }
}

#[inline]
pub fn inside_canvas(canvas: &web::HtmlCanvasElement, px: Vec2) -> bool {
    px.x >= 0.0 && px.y >= 0.0 && px.x < canvas.width() as f32 && px.y < canvas.height() as f32
}

/// Viewport size in CSS pixels, used to normalize `clientX/Y`.
#[inline]
pub fn viewport_size(window: &web::Window) -> (f32, f32) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w as f32, h as f32)
}

/// Convert a wheel event's delta into pixel units regardless of delta mode.
#[inline]
pub fn wheel_delta_px(delta_y: f64, delta_mode: u32) -> f32 {
    let scale = match delta_mode {
        1 => 16.0,  // lines
        2 => 800.0, // pages
        _ => 1.0,
    };
    (delta_y * scale) as f32
}
