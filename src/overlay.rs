use crate::constants::{CAPTION_ID, COUNT_ID, LOADED_CLASS, ROOT_ID};
use crate::core::{GalleryItem, PointerPosition};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Reveal the gallery container (the CSS fades it in on `.loaded`).
#[inline]
pub fn mark_loaded(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(ROOT_ID) {
        _ = el.class_list().add_1(LOADED_CLASS);
    }
}

/// Feed the pointer into `--mouse-x` / `--mouse-y` for the CSS spotlight.
pub fn set_pointer_vars(document: &web::Document, pointer: PointerPosition) {
    let Some(el) = document
        .get_element_by_id(ROOT_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };
    let (x, y) = pointer.css_percent();
    let style = el.style();
    _ = style.set_property("--mouse-x", &x);
    _ = style.set_property("--mouse-y", &y);
}

/// Class name and text of each caption line for `item`, title first. The
/// text goes into the DOM verbatim as text content.
pub fn caption_lines(item: &GalleryItem) -> [(&'static str, &str); 2] {
    [
        ("caption-title", item.title.as_str()),
        ("caption-description", item.description.as_str()),
    ]
}

/// Show the selected piece's title and description, or hide the caption.
pub fn update_caption(document: &web::Document, item: Option<&GalleryItem>) {
    let Some(el) = document.get_element_by_id(CAPTION_ID) else {
        return;
    };
    el.set_text_content(None);
    let Some(item) = item else {
        _ = el.set_attribute("style", "display:none");
        return;
    };
    for (class, text) in caption_lines(item) {
        let Ok(line) = document.create_element("div") else {
            continue;
        };
        line.set_class_name(class);
        line.set_text_content(Some(text));
        _ = el.append_child(&line);
    }
    _ = el.set_attribute("style", "");
}

pub fn show_count(document: &web::Document, count: usize) {
    if let Some(el) = document.get_element_by_id(COUNT_ID) {
        el.set_text_content(Some(&format!("{} Curated Pieces", count)));
    }
}

/// Pointer cursor while a facet is under the mouse.
pub fn set_hover_cursor(document: &web::Document, hovering: bool) {
    if let Some(body) = document.body() {
        _ = body
            .style()
            .set_property("cursor", if hovering { "pointer" } else { "auto" });
    }
}
