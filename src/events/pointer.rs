use crate::constants::{CLICK_SLOP_PX, WHEEL_NOTCH_PX};
use crate::core::{Gallery, OrbitCamera, PointerPosition, FACET_SIZE};
use crate::dom::{self, ListenerGuard};
use crate::input;
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub gallery: Rc<RefCell<Gallery>>,
    pub pointer: Rc<RefCell<PointerPosition>>,
    pub mouse_state: Rc<RefCell<input::MouseState>>,
    pub pick: Rc<RefCell<input::PickFrame>>,
    pub drag_state: Rc<RefCell<input::DragState>>,
    pub orbit: Rc<RefCell<OrbitCamera>>,
}

/// Register every pointer/wheel/resize listener. The returned guards own the
/// registrations; dropping them detaches the gallery from the page.
pub fn wire_input_handlers(w: InputWiring) -> anyhow::Result<Vec<ListenerGuard>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    Ok(vec![
        wire_pointermove(&w, &window)?,
        wire_pointerdown(&w)?,
        wire_pointerup(&w, &window)?,
        wire_pointercancel(&w, &window)?,
        wire_pointerleave(&w)?,
        wire_wheel(&w)?,
        wire_resize(&w, &window)?,
    ])
}

fn wire_pointermove(w: &InputWiring, window: &web::Window) -> anyhow::Result<ListenerGuard> {
    let w = w.clone();
    ListenerGuard::new(window, "pointermove", move |ev: web::PointerEvent| {
        let Some(wnd) = web::window() else {
            return;
        };
        let (vw, vh) = input::viewport_size(&wnd);
        let normalized =
            PointerPosition::from_client(ev.client_x() as f32, ev.client_y() as f32, vw, vh);
        *w.pointer.borrow_mut() = normalized;
        if let Some(doc) = wnd.document() {
            overlay::set_pointer_vars(&doc, normalized);
        }

        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        w.mouse_state
            .borrow_mut()
            .place(pos, input::inside_canvas(&w.canvas, pos));

        let mut ds = w.drag_state.borrow_mut();
        if ds.active && ds.pointer_id == ev.pointer_id() {
            let slop = CLICK_SLOP_PX * wnd.device_pixel_ratio() as f32;
            let delta = ds.advance(pos, slop);
            if ds.dragging {
                let height = w.canvas.height() as f32;
                let mut orbit = w.orbit.borrow_mut();
                // Right button or shift-drag pans; a disabled pan leaves the camera be.
                if ev.buttons() & 2 != 0 || ev.shift_key() {
                    orbit.pan(delta.x, delta.y, height);
                } else {
                    orbit.rotate(delta.x, delta.y, height);
                }
            }
        }
    })
}

fn wire_pointerdown(w: &InputWiring) -> anyhow::Result<ListenerGuard> {
    let w = w.clone();
    let canvas = w.canvas.clone();
    ListenerGuard::new(&canvas, "pointerdown", move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        // Taps arrive without a preceding move.
        w.mouse_state
            .borrow_mut()
            .place(pos, input::inside_canvas(&w.canvas, pos));
        w.drag_state.borrow_mut().begin(ev.pointer_id(), pos);
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    })
}

fn wire_pointerup(w: &InputWiring, window: &web::Window) -> anyhow::Result<ListenerGuard> {
    let w = w.clone();
    ListenerGuard::new(window, "pointerup", move |ev: web::PointerEvent| {
        let was_click = {
            let mut ds = w.drag_state.borrow_mut();
            if !ds.active || ds.pointer_id != ev.pointer_id() {
                return;
            }
            ds.finish()
        };
        _ = w.canvas.release_pointer_capture(ev.pointer_id());
        if !was_click {
            return;
        }
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        if !input::inside_canvas(&w.canvas, pos) {
            return;
        }
        let Some(i) = w.pick.borrow().pick(pos, FACET_SIZE * 0.5) else {
            return;
        };
        let mut gallery = w.gallery.borrow_mut();
        let change = gallery.select_facet(i);
        match (change.current, gallery.selected_item()) {
            (Some(sel), Some(item)) => log::info!("[select] facet {} \"{}\"", sel, item.title),
            _ => log::info!("[select] cleared (was {:?})", change.previous),
        }
        log::debug!("[select] highlight changed on {:?}", change.touched().collect::<Vec<_>>());
        if let Some(doc) = dom::window_document() {
            overlay::update_caption(&doc, gallery.selected_item());
        }
    })
}

fn wire_pointercancel(w: &InputWiring, window: &web::Window) -> anyhow::Result<ListenerGuard> {
    let w = w.clone();
    ListenerGuard::new(window, "pointercancel", move |ev: web::PointerEvent| {
        let mut ds = w.drag_state.borrow_mut();
        if ds.active && ds.pointer_id == ev.pointer_id() {
            ds.finish();
        }
    })
}

fn wire_pointerleave(w: &InputWiring) -> anyhow::Result<ListenerGuard> {
    let w = w.clone();
    let canvas = w.canvas.clone();
    ListenerGuard::new(&canvas, "pointerleave", move |_ev: web::PointerEvent| {
        w.mouse_state.borrow_mut().leave();
    })
}

fn wire_wheel(w: &InputWiring) -> anyhow::Result<ListenerGuard> {
    let w = w.clone();
    let canvas = w.canvas.clone();
    ListenerGuard::active(&canvas, "wheel", move |ev: web::WheelEvent| {
        let px = input::wheel_delta_px(ev.delta_y(), ev.delta_mode());
        let notches = (px / WHEEL_NOTCH_PX).clamp(-3.0, 3.0);
        let mut orbit = w.orbit.borrow_mut();
        // One zoom step per notch; fractional trackpad deltas still count once.
        let steps = notches.abs().ceil().max(1.0) as u32;
        for _ in 0..steps {
            orbit.zoom(notches);
        }
        log::debug!("[zoom] {:.2} notches, distance {:.2}", notches, orbit.distance());
        ev.prevent_default();
    })
}

fn wire_resize(w: &InputWiring, window: &web::Window) -> anyhow::Result<ListenerGuard> {
    let canvas = w.canvas.clone();
    dom::sync_canvas_backing_size(&canvas);
    ListenerGuard::new(window, "resize", move |_ev: web::Event| {
        dom::sync_canvas_backing_size(&canvas);
    })
}
