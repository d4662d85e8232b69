use crate::core::{FacetMode, FacetState, Gallery, OrbitCamera, PointerPosition, SceneComposer};
use crate::core::FACET_SIZE;
use crate::dom;
use crate::input;
use crate::overlay;
use crate::render;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub gallery: Rc<RefCell<Gallery>>,
    pub facets: Vec<FacetState>,
    pub composer: SceneComposer,
    pub orbit: Rc<RefCell<OrbitCamera>>,

    pub canvas: web::HtmlCanvasElement,
    pub pointer: Rc<RefCell<PointerPosition>>,
    pub mouse: Rc<RefCell<input::MouseState>>,
    pub hover_index: Option<usize>,

    pub gpu: Option<render::GpuState<'a>>,

    pub started: Instant,
    // Camera and facet transforms of the last drawn frame, shared with the
    // click handler so a tap picks what was on screen.
    pub pick: Rc<RefCell<input::PickFrame>>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let elapsed = self.started.elapsed().as_secs_f32();

        let pointer = *self.pointer.borrow();

        // Camera: apply queued orbit input, then the ambient sway on top.
        {
            let mut orbit = self.orbit.borrow_mut();
            orbit.update();
            self.composer.drift_camera(&mut orbit, elapsed);
        }

        self.update_hover();

        let scene = {
            let mut gallery = self.gallery.borrow_mut();
            gallery.tick(pointer);
            let hovered = self.hover_index;
            for f in self.facets.iter_mut() {
                let mode = FacetMode::resolve(gallery.is_selected(f.index), hovered == Some(f.index));
                f.animate(elapsed, mode);
            }
            self.composer
                .compose(&gallery, &self.facets, &self.orbit.borrow(), pointer)
        };
        let w = self.canvas.width();
        let h = self.canvas.height();
        {
            let mut pick = self.pick.borrow_mut();
            pick.width = w as f32;
            pick.height = h as f32;
            pick.view_proj = scene.camera.view_proj(w as f32 / h.max(1) as f32);
            pick.eye = scene.camera.eye;
            pick.models.clear();
            pick.models.extend(scene.facets.iter().map(|f| f.model));
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(w, h);
            match g.render(&scene) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }

    /// Hit-test the mouse against last frame's facets and publish the result.
    fn update_hover(&mut self) {
        let ms = *self.mouse.borrow();
        let hit = self.pick.borrow().hovered(&ms, FACET_SIZE * 0.5);
        let previous = std::mem::replace(&mut self.hover_index, hit);
        if previous != hit {
            log::debug!("[hover] {:?} -> {:?}", previous, hit);
            if let Some(doc) = dom::window_document() {
                overlay::set_hover_cursor(&doc, hit.is_some());
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    match render::GpuState::new(canvas.clone()).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// The running `requestAnimationFrame` loop. Dropping it cancels the pending
/// frame and releases the tick closure.
pub struct FrameLoop {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    handle: Rc<Cell<Option<i32>>>,
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(id), Some(w)) = (self.handle.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // Breaks the closure's reference to itself.
        self.tick.borrow_mut().take();
    }
}

fn request_frame(
    tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    handle: &Rc<Cell<Option<i32>>>,
) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        handle.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) -> FrameLoop {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick_clone = tick.clone();
    let handle_clone = handle.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        handle_clone.set(None);
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone, &handle_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick, &handle);
    FrameLoop { tick, handle }
}
