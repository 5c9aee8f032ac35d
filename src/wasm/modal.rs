//! DOM side of the project modal: renders descriptor content and keeps
//! the scroll-lock / escape-listener pairing balanced with the state
//! machine's transitions.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, KeyboardEvent};

use crate::content;
use crate::state::{ModalMachine, ModalState, ModalTransition};
use crate::wasm::{dom, page};

pub struct ModalController {
    machine: ModalMachine,
    document: Document,
    backdrop: HtmlElement,
    content: Element,
    escape: Option<EventListener>,
}

impl ModalController {
    pub fn new() -> Result<Self, JsValue> {
        Ok(Self {
            machine: ModalMachine::new(),
            document: dom::document()?,
            backdrop: dom::get_html("modal")?,
            content: dom::get("modal-content")?,
            escape: None,
        })
    }

    pub fn state(&self) -> ModalState {
        self.machine.state()
    }

    /// Closes without ceremony; used when the whole view unmounts so the
    /// lock is released synchronously.
    pub fn shutdown(&mut self) {
        if self.machine.close() == ModalTransition::Closed {
            self.release();
        }
    }

    fn release(&mut self) {
        lock_scroll(false);
        self.backdrop.set_hidden(true);
        // The Escape handler may be the caller; dropping a listener from
        // inside its own callback would tear down a running closure, so
        // removal is deferred one tick. An open within that tick installs
        // a fresh listener untouched by the pending drop.
        if let Some(stale) = self.escape.take() {
            Timeout::new(0, move || drop(stale)).forget();
        }
    }
}

impl Drop for ModalController {
    fn drop(&mut self) {
        if self.machine.is_open() {
            lock_scroll(false);
        }
    }
}

/// Opens the dialog for `key`. Unknown keys are rejected before any state
/// transition, so an open modal always has registry content behind it.
pub fn open(modal: &Rc<RefCell<ModalController>>, key: &str) {
    let Some(project) = content::project(key) else {
        return;
    };
    let mut ctl = modal.borrow_mut();
    if ctl.machine.open(project.key) == ModalTransition::Opened {
        lock_scroll(true);
        ctl.backdrop.set_hidden(false);
        let escape = escape_listener(modal, &ctl.document);
        ctl.escape = Some(escape);
    }
    ctl.content.set_inner_html(&page::modal_content_html(project));
}

/// Closes the dialog from any trigger. Closing a closed dialog is a
/// no-op.
pub fn close(modal: &Rc<RefCell<ModalController>>) {
    let mut ctl = modal.borrow_mut();
    if ctl.machine.close() == ModalTransition::Closed {
        ctl.release();
    }
}

fn escape_listener(modal: &Rc<RefCell<ModalController>>, document: &Document) -> EventListener {
    let modal = modal.clone();
    EventListener::new(document, "keydown", move |event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if key.key() == "Escape" {
            close(&modal);
        }
    })
}

fn lock_scroll(on: bool) {
    let Ok(body) = dom::body() else { return };
    let style = body.style();
    if on {
        let _ = style.set_property("overflow", "hidden");
    } else {
        let _ = style.remove_property("overflow");
    }
}
