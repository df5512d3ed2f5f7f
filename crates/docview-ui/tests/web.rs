//! Browser-only checks for host resources. Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use docview_core::{ScrollHost, ScrollLockSlot};
use docview_ui::browser::{self, BodyScrollHost};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn window_width_is_measurable() {
    let width = browser::window_width().expect("measure window");
    assert!(width > 0.0);
}

#[wasm_bindgen_test]
fn scroll_lock_restores_body_overflow() {
    let body = BodyScrollHost::current().expect("document body");
    body.set_overflow("scroll").expect("set overflow");

    let mut slot = ScrollLockSlot::new();
    slot.sync(true, BodyScrollHost::current).expect("lock");
    assert_eq!(body.overflow().unwrap(), "hidden");

    drop(slot);
    assert_eq!(body.overflow().unwrap(), "scroll");
    body.set_overflow("").expect("reset overflow");
}
