//! Preview modal state machine.
//!
//! [`ViewerState`] is updated only through [`ViewerState::apply`], one event
//! at a time, from the UI event loop.

use crate::{
    config::ViewerConfig,
    gesture::{DragGesture, DragOutcome},
    viewport::{Layout, Presentation},
    zoom::ZoomLevel,
};

/// Input to the state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewerEvent {
    /// Window measured, on mount and after every resize.
    Measured { width: f64 },
    /// The preview card was activated.
    CardActivated,
    /// The close button was activated.
    CloseRequested,
    ZoomIn,
    ZoomOut,
    /// Pointer went down on the drag handle.
    DragStarted { pointer_y: f64 },
    DragMoved { pointer_y: f64 },
    DragReleased { pointer_y: f64 },
}

/// Why the modal closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Button,
    Swipe,
}

/// Result of applying an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Opened,
    Closed(CloseReason),
    /// State changed without opening or closing.
    Updated,
    /// Event had no effect in the current state.
    Ignored,
}

/// Ephemeral state of one preview modal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewerState {
    open: bool,
    layout: Layout,
    width: Option<f64>,
    zoom: Option<ZoomLevel>,
    drag: Option<DragGesture>,
}

impl ViewerState {
    /// Closed and unmeasured.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Background scrolling is locked exactly while the modal is open.
    pub fn scroll_locked(&self) -> bool {
        self.open
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Last measured window width.
    pub fn width(&self) -> Option<f64> {
        self.width
    }

    /// Current zoom, `None` before the first measurement.
    pub fn zoom(&self) -> Option<ZoomLevel> {
        self.zoom
    }

    pub fn can_zoom_in(&self) -> bool {
        self.zoom.is_some_and(ZoomLevel::can_zoom_in)
    }

    pub fn can_zoom_out(&self) -> bool {
        self.zoom.is_some_and(ZoomLevel::can_zoom_out)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Vertical offset the modal is drawn at.
    pub fn drag_offset(&self, config: &ViewerConfig) -> f64 {
        self.drag
            .map_or(0.0, |drag| drag.visual_offset(config.gesture.max_drag_offset))
    }

    /// Enter/exit transition for the current layout.
    pub fn presentation(&self, config: &ViewerConfig) -> Presentation {
        self.layout.presentation(config.slide_duration())
    }

    /// Apply one event.
    pub fn apply(&mut self, event: ViewerEvent, config: &ViewerConfig) -> Transition {
        let transition = match event {
            ViewerEvent::Measured { width } => self.measure(width, config),
            ViewerEvent::CardActivated => self.open(config),
            ViewerEvent::CloseRequested => self.close(CloseReason::Button),
            ViewerEvent::ZoomIn => self.step_zoom(ZoomLevel::zoomed_in),
            ViewerEvent::ZoomOut => self.step_zoom(ZoomLevel::zoomed_out),
            ViewerEvent::DragStarted { pointer_y } => self.start_drag(pointer_y),
            ViewerEvent::DragMoved { pointer_y } => match self.drag.as_mut() {
                Some(drag) => {
                    drag.update(pointer_y);
                    Transition::Updated
                }
                None => Transition::Ignored,
            },
            ViewerEvent::DragReleased { pointer_y } => self.release_drag(pointer_y, config),
        };

        if transition != Transition::Ignored {
            log::debug!("viewer {event:?} -> {transition:?}");
        }
        transition
    }

    /// Reclassify the layout and reseed zoom. Any zoom the user chose is
    /// discarded.
    fn measure(&mut self, width: f64, config: &ViewerConfig) -> Transition {
        self.width = Some(width);
        self.layout = Layout::classify(width, config.layout.compact_breakpoint);
        self.zoom = Some(config.seed_zoom(width));
        if !self.layout.allows_drag() {
            self.drag = None;
        }
        Transition::Updated
    }

    fn open(&mut self, config: &ViewerConfig) -> Transition {
        if self.open {
            return Transition::Ignored;
        }
        self.open = true;
        if let Some(width) = self.width {
            self.zoom = Some(config.seed_zoom(width));
        }
        Transition::Opened
    }

    fn close(&mut self, reason: CloseReason) -> Transition {
        if !self.open {
            return Transition::Ignored;
        }
        self.open = false;
        self.drag = None;
        Transition::Closed(reason)
    }

    fn step_zoom(&mut self, step: fn(ZoomLevel) -> ZoomLevel) -> Transition {
        match self.zoom {
            Some(zoom) if step(zoom) != zoom => {
                self.zoom = Some(step(zoom));
                Transition::Updated
            }
            _ => Transition::Ignored,
        }
    }

    fn start_drag(&mut self, pointer_y: f64) -> Transition {
        if !self.open || !self.layout.allows_drag() {
            return Transition::Ignored;
        }
        self.drag = Some(DragGesture::begin(pointer_y));
        Transition::Updated
    }

    fn release_drag(&mut self, pointer_y: f64, config: &ViewerConfig) -> Transition {
        let Some(mut drag) = self.drag.take() else {
            return Transition::Ignored;
        };
        drag.update(pointer_y);

        match DragOutcome::for_release(drag.offset(), config.gesture.dismiss_threshold) {
            DragOutcome::Dismiss if self.layout.allows_drag() => self.close(CloseReason::Swipe),
            _ => Transition::Updated,
        }
    }
}
