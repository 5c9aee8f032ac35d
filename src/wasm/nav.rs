//! Click wiring: section navigation, feature-card engage, project cells,
//! the mobile menu, and the contact form.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, HtmlInputElement, HtmlTextAreaElement, ScrollBehavior, ScrollToOptions};

use crate::contact;
use crate::content;
use crate::wasm::dom;
use crate::wasm::modal::{self, ModalController};

/// Fixed header height compensated for when jumping to an anchor.
pub const HEADER_OFFSET_PX: f64 = 80.0;

/// How long the smooth scroll gets to settle before a linked modal opens.
pub const ENGAGE_DELAY_MS: u32 = 800;

const MENU_OPEN_CLASS: &str = "menu-open";

/// Smoothly scrolls to a named section. A missing section is skipped
/// silently; the return value reports whether navigation happened.
pub fn scroll_to_section(id: &str) -> bool {
    let Ok(document) = dom::document() else {
        return false;
    };
    let Some(section) = document.get_element_by_id(id) else {
        return false;
    };
    let Ok(window) = dom::window() else {
        return false;
    };
    let y = section.get_bounding_client_rect().top() + window.page_y_offset().unwrap_or(0.0)
        - HEADER_OFFSET_PX;
    let options = ScrollToOptions::new();
    options.set_top(y);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

/// Feature-card call to action: navigate to the showcase, then open the
/// linked modal once the scroll has had time to settle. Cards without a
/// link only navigate; if the section is missing nothing happens at all.
pub fn engage(project: Option<&'static str>, modal: &Rc<RefCell<ModalController>>) {
    if !scroll_to_section("projects") {
        return;
    }
    if let Some(key) = project {
        let modal = modal.clone();
        Timeout::new(ENGAGE_DELAY_MS, move || modal::open(&modal, key)).forget();
    }
}

/// Attaches all mount-time wiring; the listeners land in `out` and live
/// exactly as long as the view.
pub fn wire(
    root: &Element,
    modal: &Rc<RefCell<ModalController>>,
    out: &mut Vec<EventListener>,
) -> Result<(), JsValue> {
    let document = dom::document()?;
    let header = dom::get("site-header")?;

    // Section links: header nav, mobile menu, hero CTAs.
    for el in dom::query_all(root, "[data-nav]")? {
        let Some(target) = el.get_attribute("data-nav") else {
            continue;
        };
        let header = header.clone();
        out.push(EventListener::new_with_options(
            &el,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                let _ = header.class_list().remove_1(MENU_OPEN_CLASS);
                scroll_to_section(&target);
            },
        ));
    }

    // Mobile menu toggle, and close-on-outside-click. The outside-click
    // listener checks containment, so the toggle click itself never
    // counts as outside.
    {
        let button = dom::get("menu-btn")?;
        let header_toggle = header.clone();
        out.push(EventListener::new(&button, "click", move |_| {
            let _ = header_toggle.class_list().toggle(MENU_OPEN_CLASS);
        }));

        let header_outside = header.clone();
        out.push(EventListener::new(&document, "click", move |event| {
            if !header_outside.class_list().contains(MENU_OPEN_CLASS) {
                return;
            }
            if target_closest(event, "header").is_none() {
                let _ = header_outside.class_list().remove_1(MENU_OPEN_CLASS);
            }
        }));
    }

    // Feature cards: navigate, then open the linked project.
    for el in dom::query_all(root, ".explore")? {
        let linked = el
            .get_attribute("data-project")
            .and_then(|key| content::project(&key))
            .map(|p| p.key);
        let modal = modal.clone();
        out.push(EventListener::new(&el, "click", move |_| {
            engage(linked, &modal);
        }));
    }

    // Showcase cells (and their mobile rows) open the modal directly.
    for el in dom::query_all(root, ".element[data-project], .project-row[data-project]")? {
        let Some(project) = el
            .get_attribute("data-project")
            .and_then(|key| content::project(&key))
        else {
            continue;
        };
        let modal = modal.clone();
        out.push(EventListener::new(&el, "click", move |_| {
            modal::open(&modal, project.key);
        }));
    }

    // Modal chrome: close button, backdrop, and the delegated section
    // link inside re-rendered content.
    {
        let close_btn = dom::get("modal-close")?;
        let m = modal.clone();
        out.push(EventListener::new(&close_btn, "click", move |_| {
            modal::close(&m);
        }));

        let backdrop = dom::get("modal")?;
        let m = modal.clone();
        out.push(EventListener::new(&backdrop, "click", move |event| {
            // Only a click on the backdrop itself closes; the dialog box
            // swallows its own clicks.
            let Some(el) = target_element(event) else {
                return;
            };
            if el.id() == "modal" {
                modal::close(&m);
            }
        }));

        let content_box = dom::get("modal-content")?;
        let m = modal.clone();
        out.push(EventListener::new_with_options(
            &content_box,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(link) = target_closest(event, "[data-nav]") else {
                    return;
                };
                event.prevent_default();
                modal::close(&m);
                if let Some(target) = link.get_attribute("data-nav") {
                    scroll_to_section(&target);
                }
            },
        ));
    }

    // Contact form: compose the mailto URI and hand it to the navigator.
    {
        let form = dom::get("contact-form")?;
        out.push(EventListener::new_with_options(
            &form,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                let _ = submit_contact();
            },
        ));
    }

    Ok(())
}

fn submit_contact() -> Result<(), JsValue> {
    let name = input_value("contact-name")?;
    let email = input_value("contact-email")?;
    let brief = textarea_value("contact-brief")?;
    let uri = contact::mailto_uri(&name, &email, &brief);
    dom::window()?.location().set_href(&uri)
}

fn input_value(id: &str) -> Result<String, JsValue> {
    Ok(dom::get(id)?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| JsValue::from_str("not an input"))?
        .value())
}

fn textarea_value(id: &str) -> Result<String, JsValue> {
    Ok(dom::get(id)?
        .dyn_into::<HtmlTextAreaElement>()
        .map_err(|_| JsValue::from_str("not a textarea"))?
        .value())
}

fn target_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

fn target_closest(event: &Event, selector: &str) -> Option<Element> {
    target_element(event)?.closest(selector).ok().flatten()
}
