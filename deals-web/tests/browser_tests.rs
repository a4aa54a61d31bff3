#![cfg(target_arch = "wasm32")]

use deals_core::Collator;
use deals_web::app::App;
use deals_web::collate::PageCollator;
use deals_web::dom;
use std::cmp::Ordering;
use wasm_bindgen_test::*;
use yew::Renderer;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    dom::window().document().expect("document")
}

fn ensure_app_root() -> web_sys::Element {
    let doc = document();
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

fn is_hidden(id: &str) -> bool {
    document()
        .get_element_by_id(id)
        .and_then(|el| el.get_attribute("style"))
        .is_some_and(|style| style.contains("display: none"))
}

#[wasm_bindgen_test]
fn intl_collator_orders_categories() {
    let collator = PageCollator::new();
    assert_eq!(collator.compare("defi", "mining"), Ordering::Less);
    assert_eq!(collator.compare("apple", "Banana"), Ordering::Less);
}

#[wasm_bindgen_test]
fn hash_selects_visible_section() {
    dom::window()
        .location()
        .set_hash("about-page")
        .expect("set hash");
    Renderer::<App>::with_root(ensure_app_root()).render();
    assert!(!is_hidden("about-page"));
    assert!(is_hidden("main-page"));
}

#[wasm_bindgen_test]
fn unknown_hash_falls_back_to_main_page() {
    dom::window()
        .location()
        .set_hash("nowhere")
        .expect("set hash");
    Renderer::<App>::with_root(ensure_app_root()).render();
    assert!(!is_hidden("main-page"));
    assert!(is_hidden("about-page"));
}
