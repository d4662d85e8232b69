// In-browser tests for the exported gallery API:
// `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use crystal_gallery::{mount, unmount_auto};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn add_element(tag: &str, id: &str) -> web_sys::Element {
    let doc = web_sys::window().unwrap().document().unwrap();
    let el = doc.create_element(tag).unwrap();
    el.set_id(id);
    doc.body().unwrap().append_child(&el).unwrap();
    el
}

#[wasm_bindgen_test]
fn unmount_auto_is_a_no_op_without_an_auto_mounted_gallery() {
    // No #gallery-canvas existed when the module started.
    assert!(!unmount_auto());
    assert!(!unmount_auto());
}

#[wasm_bindgen_test]
fn mount_fails_without_a_canvas() {
    assert!(mount("no-such-canvas").is_err());
}

#[wasm_bindgen_test]
fn mounted_gallery_toggles_selection_and_caption() {
    add_element("canvas", "web-test-canvas");
    let caption = add_element("div", "facet-caption");

    let mut handle = mount("web-test-canvas").unwrap();
    assert_eq!(handle.selected(), None);

    assert_eq!(handle.select(2), Some(2));
    assert_eq!(
        caption.text_content().unwrap_or_default(),
        "Golden HourWarm lighting study with golden tones"
    );
    assert_eq!(caption.child_element_count(), 2);

    assert_eq!(handle.select(2), None);
    assert_eq!(caption.text_content().unwrap_or_default(), "");

    // Out of range leaves the selection alone.
    handle.select(5);
    assert_eq!(handle.select(99), Some(5));

    handle.unmount();
    handle.unmount();
    caption.remove();
}
