//! Docview UI Components
//!
//! Leptos components for the document preview card and its modal viewer.
//!
//! # Components
//!
//! - [`DocumentPreviewModal`] - Preview card that expands into a full-screen viewer
//! - [`PreviewCard`] - The collapsed card on its own
//! - [`Icon`] - Stroke icons used by the viewer controls
//!
//! # Renderers
//!
//! The viewer delegates page drawing to a [`DocumentRenderer`]. [`EmbedRenderer`]
//! uses the browser's built-in document viewer.
//!
//! # Example
//!
//! ```ignore
//! use docview_core::PreviewInput;
//! use docview_ui::{DocumentPreviewModal, EmbedRenderer};
//! use leptos::prelude::*;
//!
//! #[component]
//! fn App() -> impl IntoView {
//!     let input = PreviewInput::new("/sample.pdf", "/preview.png", "Case study", 7u32);
//!
//!     view! { <DocumentPreviewModal input=input renderer=EmbedRenderer::new() /> }
//! }
//! ```

pub mod browser;
pub mod icons;
pub mod modal;
pub mod presence;
pub mod renderer;

pub use icons::{Icon, IconKind};
pub use modal::{DocumentPreviewModal, PreviewCard};
pub use presence::Presence;
pub use renderer::{DocumentRenderer, EmbedRenderer, RenderRequest, embed_src};
