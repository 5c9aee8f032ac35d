#![cfg(target_arch = "wasm32")]

//! Browser-side wiring tests: mounting renders the page, and the modal's
//! scroll lock is paired with its lifecycle.

use lab_wasm::state::ModalState;
use lab_wasm::wasm::modal;
use lab_wasm::wasm::view::App;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

/// The harness page has no #root; create one per test.
fn ensure_root() {
    let document = web_sys::window().unwrap().document().unwrap();
    if document.get_element_by_id("root").is_none() {
        let div = document.create_element("div").unwrap();
        div.set_id("root");
        document.body().unwrap().append_child(&div).unwrap();
    }
}

fn body_overflow() -> String {
    let document = web_sys::window().unwrap().document().unwrap();
    document
        .body()
        .unwrap()
        .style()
        .get_property_value("overflow")
        .unwrap_or_default()
}

#[wasm_bindgen_test]
fn mount_renders_every_section() {
    ensure_root();
    let app = App::mount().expect("mount");
    let document = web_sys::window().unwrap().document().unwrap();

    for id in ["about", "stack", "projects", "community", "contact"] {
        assert!(
            document.get_element_by_id(id).is_some(),
            "section #{id} missing"
        );
    }
    assert!(document.get_element_by_id("modal").is_some());

    app.unmount();
}

#[wasm_bindgen_test]
fn modal_locks_and_releases_background_scroll() {
    ensure_root();
    let app = App::mount().expect("mount");

    modal::open(app.modal(), "p1");
    assert_eq!(app.modal().borrow().state(), ModalState::Open("p1"));
    assert_eq!(body_overflow(), "hidden");

    // Switching projects keeps exactly one lock.
    modal::open(app.modal(), "p2");
    assert_eq!(app.modal().borrow().state(), ModalState::Open("p2"));
    assert_eq!(body_overflow(), "hidden");

    modal::close(app.modal());
    assert_eq!(app.modal().borrow().state(), ModalState::Closed);
    assert_eq!(body_overflow(), "");

    // Idempotent close.
    modal::close(app.modal());
    assert_eq!(body_overflow(), "");

    app.unmount();
}

#[wasm_bindgen_test]
fn unknown_keys_never_open_anything() {
    ensure_root();
    let app = App::mount().expect("mount");

    modal::open(app.modal(), "p9");
    assert_eq!(app.modal().borrow().state(), ModalState::Closed);
    assert_eq!(body_overflow(), "");

    app.unmount();
}

#[wasm_bindgen_test]
fn unmount_releases_an_open_modal() {
    ensure_root();
    let app = App::mount().expect("mount");

    modal::open(app.modal(), "p1");
    assert_eq!(body_overflow(), "hidden");

    drop(app);
    assert_eq!(body_overflow(), "", "unmount must release the scroll lock");
}
