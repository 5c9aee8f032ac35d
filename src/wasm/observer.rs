//! One-shot visibility observer backing the entrance reveals.

use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::wasm::dom;

/// Elements that get an entrance treatment.
pub const REVEAL_SELECTOR: &str = ".observed, .card, .scan";

const REVEAL_CLASSES: [&str; 2] = ["lit", "scanned"];

// Fire as soon as any part of the element is within ~95% of the viewport
// height from the top.
const ROOT_MARGIN: &str = "0px 0px -5% 0px";

/// Watches the marked elements under a root; each is revealed on its first
/// intersection and then unobserved, so a reveal can never re-fire or
/// revert. Dropping the wrapper disconnects everything still tracked.
pub struct Reveal {
    observer: IntersectionObserver,
    // Kept alive for as long as the observer may call it.
    _on_intersect: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Reveal {
    pub fn observe(root: &Element) -> Result<Self, JsValue> {
        let on_intersect = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    mark_revealed(&target);
                    observer.unobserve(&target);
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_root_margin(ROOT_MARGIN);
        options.set_threshold(&Array::of2(&0.0.into(), &0.1.into()));
        let observer =
            IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)?;

        for el in dom::query_all(root, REVEAL_SELECTOR)? {
            observer.observe(&el);
        }

        Ok(Self {
            observer,
            _on_intersect: on_intersect,
        })
    }

    /// The gated-off path: no observation, every marked element is
    /// revealed immediately.
    pub fn reveal_now(root: &Element) -> Result<(), JsValue> {
        for el in dom::query_all(root, REVEAL_SELECTOR)? {
            mark_revealed(&el);
        }
        Ok(())
    }
}

fn mark_revealed(el: &Element) {
    let classes = el.class_list();
    for class in REVEAL_CLASSES {
        let _ = classes.add_1(class);
    }
}

impl Drop for Reveal {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
