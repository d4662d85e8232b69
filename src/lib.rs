#![cfg(target_arch = "wasm32")]
use crate::core::{
    default_catalogue, FacetState, Gallery, OrbitCamera, OrbitParams, PointerPosition,
    SceneComposer, CAMERA_START,
};
use glam::Vec3;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

thread_local! {
    // Gallery mounted by `start()`; released by `unmount_auto()`.
    static AUTO_MOUNTED: RefCell<Option<GalleryHandle>> = const { RefCell::new(None) };
}

/// Registrations that must be released when the gallery unmounts.
struct Mounted {
    _listeners: Vec<dom::ListenerGuard>,
    _entrance: Option<dom::TimeoutGuard>,
    frame_loop: Rc<RefCell<Option<frame::FrameLoop>>>,
}

/// A mounted gallery. Dropping it (or calling `unmount`) removes every
/// listener, cancels the entrance timer and stops the render loop.
#[wasm_bindgen]
pub struct GalleryHandle {
    gallery: Rc<RefCell<Gallery>>,
    alive: Rc<Cell<bool>>,
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl GalleryHandle {
    pub fn unmount(&mut self) {
        self.alive.set(false);
        if let Some(m) = self.mounted.take() {
            m.frame_loop.borrow_mut().take();
            drop(m);
            log::info!("gallery unmounted");
        }
    }

    /// Programmatic click on facet `index`; same toggle rules as a click.
    pub fn select(&self, index: usize) -> Option<usize> {
        let mut gallery = self.gallery.borrow_mut();
        if index >= gallery.len() {
            log::warn!("[select] index {} out of range ({} items)", index, gallery.len());
            return gallery.selected();
        }
        let change = gallery.select_facet(index);
        if let Some(doc) = dom::window_document() {
            overlay::update_caption(&doc, gallery.selected_item());
        }
        change.current
    }

    pub fn selected(&self) -> Option<usize> {
        self.gallery.borrow().selected()
    }
}

impl Drop for GalleryHandle {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("crystal-gallery starting");

    let has_canvas = dom::window_document()
        .and_then(|d| d.get_element_by_id(constants::CANVAS_ID))
        .is_some();
    if has_canvas {
        match mount_gallery(constants::CANVAS_ID) {
            Ok(handle) => AUTO_MOUNTED.with(|slot| *slot.borrow_mut() = Some(handle)),
            Err(e) => log::error!("mount error: {:?}", e),
        }
    }
    Ok(())
}

/// Tear down the gallery that `start()` mounted on page load. Returns whether
/// there was one.
#[wasm_bindgen]
pub fn unmount_auto() -> bool {
    let handle = AUTO_MOUNTED.with(|slot| slot.borrow_mut().take());
    match handle {
        Some(mut h) => {
            h.unmount();
            true
        }
        None => false,
    }
}

/// Mount a gallery onto the canvas with id `canvas_id`.
#[wasm_bindgen]
pub fn mount(canvas_id: &str) -> Result<GalleryHandle, JsValue> {
    mount_gallery(canvas_id).map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}

fn mount_gallery(canvas_id: &str) -> anyhow::Result<GalleryHandle> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", canvas_id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let items = default_catalogue();
    anyhow::ensure!(!items.is_empty(), "gallery needs at least one item");
    let total = items.len();
    let gallery = Rc::new(RefCell::new(Gallery::new(items)));
    log::info!("[gallery] {} facets", total);
    overlay::show_count(&document, total);
    overlay::update_caption(&document, None);

    // ---------------- Interaction state ----------------
    let pointer = Rc::new(RefCell::new(PointerPosition::default()));
    let mouse_state = Rc::new(RefCell::new(input::MouseState::default()));
    let pick = Rc::new(RefCell::new(input::PickFrame::default()));
    let drag_state = Rc::new(RefCell::new(input::DragState::default()));
    let orbit = Rc::new(RefCell::new(OrbitCamera::new(
        CAMERA_START,
        Vec3::ZERO,
        OrbitParams::default(),
    )));

    let listeners = events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        gallery: gallery.clone(),
        pointer: pointer.clone(),
        mouse_state: mouse_state.clone(),
        pick: pick.clone(),
        drag_state,
        orbit: orbit.clone(),
    })?;

    let doc_for_entrance = document.clone();
    let entrance = match dom::TimeoutGuard::new(constants::ENTRANCE_DELAY_MS, move || {
        overlay::mark_loaded(&doc_for_entrance);
    }) {
        Ok(t) => Some(t),
        Err(e) => {
            log::warn!("entrance timer unavailable, showing immediately: {:?}", e);
            overlay::mark_loaded(&document);
            None
        }
    };

    let alive = Rc::new(Cell::new(true));
    let frame_loop: Rc<RefCell<Option<frame::FrameLoop>>> = Rc::new(RefCell::new(None));

    // WebGPU comes up asynchronously; the loop only starts if still mounted.
    {
        let alive = alive.clone();
        let frame_loop = frame_loop.clone();
        let gallery = gallery.clone();
        spawn_local(async move {
            if !alive.get() {
                return;
            }
            let gpu = frame::init_gpu(&canvas).await;
            if !alive.get() {
                return;
            }
            let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
                gallery,
                facets: FacetState::arena(total),
                composer: SceneComposer::default(),
                orbit,
                canvas,
                pointer,
                mouse: mouse_state,
                hover_index: None,
                gpu,
                started: Instant::now(),
                pick,
            }));
            // Start RAF loop
            *frame_loop.borrow_mut() = Some(frame::start_loop(frame_ctx));
        });
    }

    log::info!("gallery mounted on #{}", canvas_id);
    Ok(GalleryHandle {
        gallery,
        alive,
        mounted: Some(Mounted {
            _listeners: listeners,
            _entrance: entrance,
            frame_loop,
        }),
    })
}
