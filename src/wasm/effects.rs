//! Effect Gate: decides which decorative behaviors are live for a
//! viewport classification and owns their listeners.
//!
//! Desktop gets the full set: scroll-linked progress, the one-shot
//! visibility observer, audio click feedback, and the alternate-mode key.
//! Mobile suppresses all of that and keeps only an immediate reveal plus
//! a scroll-offset parallax.

use gloo::events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, KeyboardEvent};

use crate::state::{self, ViewportClass};
use crate::wasm::{audio, dom, observer::Reveal};

/// The single designated key toggling alternate rendering mode.
pub const ALT_MODE_KEY: &str = "m";
const ALT_MODE_CLASS: &str = "ascii";

const PROGRESS_PROPERTY: &str = "--progress";

/// Elements that click with audio feedback on desktop.
const CLICK_FEEDBACK_SELECTOR: &str = "a, button, input, textarea";

const PARALLAX_SELECTOR: &str = "[data-parallax]";

/// Everything attached for one viewport classification. Dropping the set
/// detaches every listener and disconnects the observer.
pub struct EffectSet {
    listeners: Vec<EventListener>,
    _reveal: Option<Reveal>,
}

pub fn attach(class: ViewportClass, root: &Element) -> Result<EffectSet, JsValue> {
    match class {
        ViewportClass::Desktop => attach_desktop(root),
        ViewportClass::Mobile => attach_mobile(root),
    }
}

fn attach_desktop(root: &Element) -> Result<EffectSet, JsValue> {
    let window = dom::window()?;
    let mut listeners = Vec::new();

    // Scroll progress, published eagerly so the bar is right before the
    // first scroll event.
    publish_progress()?;
    listeners.push(EventListener::new(&window, "scroll", |_| {
        let _ = publish_progress();
    }));

    // Alternate rendering mode. The flag lives on the root container and
    // nowhere else.
    {
        let root = root.clone();
        listeners.push(EventListener::new(&window, "keydown", move |event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if key.key().eq_ignore_ascii_case(ALT_MODE_KEY) {
                let _ = root.class_list().toggle(ALT_MODE_CLASS);
            }
        }));
    }

    // Audio feedback on interactive elements. Queried once; content
    // rendered later (modal bodies) stays silent, as before.
    for el in dom::query_all(root, CLICK_FEEDBACK_SELECTOR)? {
        listeners.push(EventListener::new(&el, "click", |_| audio::click_blip()));
    }

    let reveal = Reveal::observe(root)?;
    Ok(EffectSet {
        listeners,
        _reveal: Some(reveal),
    })
}

fn attach_mobile(root: &Element) -> Result<EffectSet, JsValue> {
    // No observation delay when the observer is gated off.
    Reveal::reveal_now(root)?;

    let window = dom::window()?;
    let layers = parallax_layers(root)?;
    apply_parallax(&layers, window.page_y_offset().unwrap_or(0.0));

    let listener = EventListener::new(&window, "scroll", move |_| {
        let Ok(win) = dom::window() else { return };
        apply_parallax(&layers, win.page_y_offset().unwrap_or(0.0));
    });

    Ok(EffectSet {
        listeners: vec![listener],
        _reveal: None,
    })
}

fn publish_progress() -> Result<(), JsValue> {
    let doc_el = dom::document()?
        .document_element()
        .ok_or("no document element")?;
    let progress = state::scroll_progress(
        doc_el.scroll_top() as f64,
        doc_el.scroll_height() as f64,
        doc_el.client_height() as f64,
    );
    let style = doc_el
        .dyn_ref::<HtmlElement>()
        .ok_or("document element is not an HtmlElement")?
        .style();
    style.set_property(PROGRESS_PROPERTY, &progress.to_string())
}

/// Elements carrying a `data-parallax` multiplier, resolved once per
/// attach.
fn parallax_layers(root: &Element) -> Result<Vec<(HtmlElement, f64)>, JsValue> {
    let mut layers = Vec::new();
    for el in dom::query_all(root, PARALLAX_SELECTOR)? {
        let Some(factor) = el
            .get_attribute("data-parallax")
            .and_then(|raw| raw.parse::<f64>().ok())
        else {
            continue;
        };
        if let Ok(el) = el.dyn_into::<HtmlElement>() {
            layers.push((el, factor));
        }
    }
    Ok(layers)
}

fn apply_parallax(layers: &[(HtmlElement, f64)], scroll_y: f64) {
    for (el, factor) in layers {
        let _ = el
            .style()
            .set_property("transform", &format!("translateY({}px)", scroll_y * factor));
    }
}
