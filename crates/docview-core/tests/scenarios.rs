//! End-to-end interaction scenarios for the preview modal.

use std::{cell::RefCell, rc::Rc};

use docview_core::{
    CloseReason, DownloadRequest, Result, ScrollHost, ScrollLockSlot, Transition, ViewerConfig,
    ViewerEvent, ViewerState,
};

#[derive(Clone, Default)]
struct Body {
    overflow: Rc<RefCell<String>>,
}

impl ScrollHost for Body {
    fn overflow(&self) -> Result<String> {
        Ok(self.overflow.borrow().clone())
    }

    fn set_overflow(&self, value: &str) -> Result<()> {
        *self.overflow.borrow_mut() = value.to_string();
        Ok(())
    }
}

/// State machine plus the scroll lock it drives, wired the way the UI does.
struct Harness {
    config: ViewerConfig,
    state: ViewerState,
    body: Body,
    lock: ScrollLockSlot<Body>,
}

impl Harness {
    fn mount(width: f64) -> Self {
        let mut harness = Self {
            config: ViewerConfig::default(),
            state: ViewerState::new(),
            body: Body::default(),
            lock: ScrollLockSlot::new(),
        };
        harness.send(ViewerEvent::Measured { width });
        harness
    }

    fn send(&mut self, event: ViewerEvent) -> Transition {
        let transition = self.state.apply(event, &self.config);
        let body = self.body.clone();
        self.lock
            .sync(self.state.scroll_locked(), || Ok(body))
            .expect("sync scroll lock");
        transition
    }

    fn overflow(&self) -> String {
        self.body.overflow.borrow().clone()
    }
}

#[test]
fn test_wide_open_then_zoom_out_steps_down_one_level() {
    let mut ui = Harness::mount(1300.0);
    ui.send(ViewerEvent::CardActivated);

    let zoom = ui.state.zoom().expect("zoom seeded");
    assert_eq!(zoom.index(), 4);
    assert_eq!(zoom.to_string(), "50%");

    ui.send(ViewerEvent::ZoomOut);
    let zoom = ui.state.zoom().expect("zoom seeded");
    assert_eq!(zoom.index(), 3);
    assert_eq!(zoom.to_string(), "33%");
    assert!((zoom.scale() - 0.33).abs() < 1e-9);
}

#[test]
fn test_download_suggests_last_segment() {
    let request = DownloadRequest::for_document("https://x/sample.pdf");
    assert_eq!(request.filename.as_deref(), Some("sample.pdf"));
    assert_eq!(request.href, "https://x/sample.pdf");
}

#[test]
fn test_compact_swipe_dismiss_restores_scroll() {
    let mut ui = Harness::mount(390.0);
    ui.send(ViewerEvent::CardActivated);
    assert_eq!(ui.overflow(), "hidden");

    ui.send(ViewerEvent::DragStarted { pointer_y: 0.0 });
    ui.send(ViewerEvent::DragMoved { pointer_y: 80.0 });
    let transition = ui.send(ViewerEvent::DragReleased { pointer_y: 150.0 });

    assert_eq!(transition, Transition::Closed(CloseReason::Swipe));
    assert!(!ui.state.is_open());
    assert!(!ui.lock.is_locked());
    assert_eq!(ui.overflow(), "");
}

#[test]
fn test_short_swipe_keeps_modal_open() {
    let mut ui = Harness::mount(390.0);
    ui.send(ViewerEvent::CardActivated);

    ui.send(ViewerEvent::DragStarted { pointer_y: 10.0 });
    ui.send(ViewerEvent::DragReleased { pointer_y: 110.0 });

    assert!(ui.state.is_open());
    assert_eq!(ui.overflow(), "hidden");
}

#[test]
fn test_close_button_unlocks_scroll() {
    let mut ui = Harness::mount(1920.0);
    ui.send(ViewerEvent::CardActivated);
    assert_eq!(ui.state.zoom().map(|z| z.index()), Some(5));
    assert_eq!(ui.overflow(), "hidden");

    ui.send(ViewerEvent::CloseRequested);
    assert_eq!(ui.overflow(), "");
}

#[test]
fn test_unmount_while_open_unlocks_scroll() {
    let mut ui = Harness::mount(800.0);
    ui.body.set_overflow("auto").unwrap();
    ui.send(ViewerEvent::CardActivated);
    assert_eq!(ui.overflow(), "hidden");

    let body = ui.body.clone();
    drop(ui);
    assert_eq!(*body.overflow.borrow(), "auto");
}

#[test]
fn test_rotating_phone_to_tablet_disables_swipe() {
    let mut ui = Harness::mount(390.0);
    ui.send(ViewerEvent::CardActivated);
    assert_eq!(ui.state.zoom().map(|z| z.index()), Some(1));

    ui.send(ViewerEvent::Measured { width: 900.0 });
    assert_eq!(ui.state.zoom().map(|z| z.index()), Some(3));

    assert_eq!(
        ui.send(ViewerEvent::DragStarted { pointer_y: 0.0 }),
        Transition::Ignored
    );
    ui.send(ViewerEvent::DragReleased { pointer_y: 500.0 });
    assert!(ui.state.is_open());
}
