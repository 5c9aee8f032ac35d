//! Mounted application: renders the page once, classifies the viewport,
//! and keeps the live effect set in step with it until unmount.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::state::ViewportClass;
use crate::wasm::effects::{self, EffectSet};
use crate::wasm::modal::ModalController;
use crate::wasm::{dom, nav, page};

pub struct App {
    root: Element,
    viewport: Rc<Cell<ViewportClass>>,
    effects: Rc<RefCell<Option<EffectSet>>>,
    modal: Rc<RefCell<ModalController>>,
    _listeners: Vec<EventListener>,
}

impl App {
    pub fn mount() -> Result<Self, JsValue> {
        let root = dom::get("root")?;
        page::render(&root);

        let window = dom::window()?;
        let width = window
            .inner_width()?
            .as_f64()
            .ok_or("window width is not a number")?;
        let viewport = Rc::new(Cell::new(ViewportClass::classify(width)));

        let modal = Rc::new(RefCell::new(ModalController::new()?));
        let effects = Rc::new(RefCell::new(Some(effects::attach(viewport.get(), &root)?)));

        let mut listeners = Vec::new();

        // Reclassify on every resize. An unchanged class is a no-op; a
        // change swaps the whole effect set before the callback returns,
        // so no stale desktop effect outlives a switch to mobile.
        {
            let viewport = viewport.clone();
            let effects = effects.clone();
            let root = root.clone();
            listeners.push(EventListener::new(&window, "resize", move |_| {
                let Ok(win) = dom::window() else { return };
                let width = win.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0);
                let class = ViewportClass::classify(width);
                if class == viewport.get() {
                    return;
                }
                viewport.set(class);
                effects.borrow_mut().take();
                match effects::attach(class, &root) {
                    Ok(set) => *effects.borrow_mut() = Some(set),
                    Err(err) => web_sys::console::error_1(&err),
                }
            }));
        }

        nav::wire(&root, &modal, &mut listeners)?;

        Ok(Self {
            root,
            viewport,
            effects,
            modal,
            _listeners: listeners,
        })
    }

    pub fn viewport(&self) -> ViewportClass {
        self.viewport.get()
    }

    pub fn modal(&self) -> &Rc<RefCell<ModalController>> {
        &self.modal
    }

    /// Explicit unmount for symmetry with `mount`; dropping does the
    /// same work.
    pub fn unmount(self) {}
}

impl Drop for App {
    fn drop(&mut self) {
        // Listener and observer teardown is RAII through the vectors
        // below; the scroll lock needs an explicit synchronous release in
        // case the modal was open.
        self.effects.borrow_mut().take();
        self.modal.borrow_mut().shutdown();
        self.root.set_inner_html("");
    }
}
