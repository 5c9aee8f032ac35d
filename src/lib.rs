#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! heleolabs landing site.
//!
//! The pure view-state core (`content`, `state`, `contact`) compiles on
//! every target so it can be tested on the host; the `wasm` module wires
//! it to the DOM and only exists on wasm32.

pub mod contact;
pub mod content;
pub mod state;

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;

    pub mod audio;
    pub mod dom;
    pub mod effects;
    pub mod modal;
    pub mod nav;
    pub mod observer;
    pub mod page;
    pub mod view;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let app = view::App::mount()?;
        // The page owns the view for its whole lifetime; there is no
        // unmount path from here.
        std::mem::forget(app);
        Ok(())
    }
}

// When compiling for non-wasm targets (e.g., `cargo test` on host),
// provide an empty stub so the crate still builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
