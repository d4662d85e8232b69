use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// An event listener that is removed again when the guard drops.
///
/// The handler receives the event already cast to `E`; events of any other
/// type are ignored.
pub struct ListenerGuard {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl ListenerGuard {
    pub fn new<E>(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(E) + 'static,
    ) -> anyhow::Result<Self>
    where
        E: JsCast + 'static,
    {
        Self::register(target, event, handler, None)
    }

    /// Register with `passive: false` so the handler may call
    /// `prevent_default` (wheel zoom must not scroll the page).
    pub fn active<E>(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(E) + 'static,
    ) -> anyhow::Result<Self>
    where
        E: JsCast + 'static,
    {
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(false);
        Self::register(target, event, handler, Some(opts))
    }

    fn register<E>(
        target: &web::EventTarget,
        event: &'static str,
        mut handler: impl FnMut(E) + 'static,
        opts: Option<web::AddEventListenerOptions>,
    ) -> anyhow::Result<Self>
    where
        E: JsCast + 'static,
    {
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            if let Ok(ev) = ev.dyn_into::<E>() {
                handler(ev);
            }
        }) as Box<dyn FnMut(web::Event)>);
        let cb = closure.as_ref().unchecked_ref();
        let added = match &opts {
            Some(o) => target
                .add_event_listener_with_callback_and_add_event_listener_options(event, cb, o),
            None => target.add_event_listener_with_callback(event, cb),
        };
        added.map_err(|e| anyhow!("addEventListener({event}) failed: {:?}", e))?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// A one-shot `setTimeout` that is cleared if the guard drops first.
pub struct TimeoutGuard {
    handle: i32,
    _closure: Closure<dyn FnMut()>,
}

impl TimeoutGuard {
    pub fn new(delay_ms: i32, handler: impl FnOnce() + 'static) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let mut handler = Some(handler);
        let closure = Closure::wrap(Box::new(move || {
            if let Some(f) = handler.take() {
                f();
            }
        }) as Box<dyn FnMut()>);
        let handle = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                delay_ms,
            )
            .map_err(|e| anyhow!("setTimeout failed: {:?}", e))?;
        Ok(Self {
            handle,
            _closure: closure,
        })
    }
}

impl Drop for TimeoutGuard {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_timeout_with_handle(self.handle);
        }
    }
}
