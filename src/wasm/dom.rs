//! Thin DOM lookup helpers shared by the wasm layer.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| "no window".into())
}

pub fn document() -> Result<Document, JsValue> {
    window()?.document().ok_or_else(|| "no document".into())
}

pub fn body() -> Result<HtmlElement, JsValue> {
    document()?.body().ok_or_else(|| "no body".into())
}

pub fn get(id: &str) -> Result<Element, JsValue> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| format!("element #{id} not found").into())
}

pub fn get_html(id: &str) -> Result<HtmlElement, JsValue> {
    get(id)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| format!("element #{id} is not an HtmlElement").into())
}

/// All elements under `root` matching `selector`, as a plain Vec.
pub fn query_all(root: &Element, selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = root.query_selector_all(selector)?;
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(node) = list.item(i) {
            if let Ok(el) = node.dyn_into::<Element>() {
                out.push(el);
            }
        }
    }
    Ok(out)
}
