//! Docview Core
//!
//! Framework-independent rules behind the document preview modal: viewport
//! classification, zoom stepping, drag-to-dismiss, page counters, download
//! naming and the open/close state machine.
//!
//! # Example
//!
//! ```
//! use docview_core::{ViewerConfig, ViewerEvent, ViewerState};
//!
//! let config = ViewerConfig::default();
//! let mut state = ViewerState::new();
//!
//! state.apply(ViewerEvent::Measured { width: 1300.0 }, &config);
//! state.apply(ViewerEvent::CardActivated, &config);
//! state.apply(ViewerEvent::ZoomOut, &config);
//!
//! assert!(state.scroll_locked());
//! assert_eq!(state.zoom().map(|z| z.to_string()).as_deref(), Some("33%"));
//! ```

pub mod config;
pub mod download;
pub mod error;
pub mod gesture;
pub mod page;
pub mod preview;
pub mod scroll;
pub mod viewer;
pub mod viewport;
pub mod zoom;

pub use config::ViewerConfig;
pub use download::{DownloadRequest, suggested_filename};
pub use error::{CoreError, Result};
pub use gesture::{DragGesture, DragOutcome};
pub use page::{PageCounter, PageLayout};
pub use preview::{PreviewInput, ReadingTime};
pub use scroll::{ScrollHost, ScrollLock, ScrollLockSlot};
pub use viewer::{CloseReason, Transition, ViewerEvent, ViewerState};
pub use viewport::{Layout, Presentation};
pub use zoom::{ZOOM_TABLE, ZoomLevel, ZoomSeed};
