//! Inline stroke icons for the control bar.

use leptos::prelude::*;

/// Icons used by the viewer controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Close,
    Download,
    ChevronLeft,
    ChevronRight,
    ZoomIn,
    ZoomOut,
}

/// A 24x24 stroke icon scaled to `size` pixels.
#[component]
pub fn Icon(
    /// Which icon to draw.
    kind: IconKind,
    /// Rendered width and height in pixels.
    #[prop(default = 20)]
    size: u32,
) -> impl IntoView {
    let shape = match kind {
        IconKind::Close => view! {
          <line x1="18" y1="6" x2="6" y2="18"></line>
          <line x1="6" y1="6" x2="18" y2="18"></line>
        }
        .into_any(),
        IconKind::Download => view! {
          <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"></path>
          <polyline points="7 10 12 15 17 10"></polyline>
          <line x1="12" y1="15" x2="12" y2="3"></line>
        }
        .into_any(),
        IconKind::ChevronLeft => view! { <polyline points="15 18 9 12 15 6"></polyline> }.into_any(),
        IconKind::ChevronRight => view! { <polyline points="9 18 15 12 9 6"></polyline> }.into_any(),
        IconKind::ZoomIn => view! {
          <circle cx="11" cy="11" r="8"></circle>
          <line x1="21" y1="21" x2="16.65" y2="16.65"></line>
          <line x1="11" y1="8" x2="11" y2="14"></line>
          <line x1="8" y1="11" x2="14" y2="11"></line>
        }
        .into_any(),
        IconKind::ZoomOut => view! {
          <circle cx="11" cy="11" r="8"></circle>
          <line x1="21" y1="21" x2="16.65" y2="16.65"></line>
          <line x1="8" y1="11" x2="14" y2="11"></line>
        }
        .into_any(),
    };

    let size = size.to_string();

    view! {
      <svg
        xmlns="http://www.w3.org/2000/svg"
        width=size.clone()
        height=size
        viewBox="0 0 24 24"
        fill="none"
        stroke="currentColor"
        stroke-width="2"
        stroke-linecap="round"
        stroke-linejoin="round"
        aria-hidden="true"
      >
        {shape}
      </svg>
    }
}
