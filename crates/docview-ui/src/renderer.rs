//! Document rendering collaborators.
//!
//! The modal never draws pages itself. It hands a [`RenderRequest`] to a
//! [`DocumentRenderer`] and binds the renderer's page signals to its
//! controls. Page bounds are the renderer's business.

use docview_core::PageLayout;
use leptos::prelude::*;

/// What to render and at which scale.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    /// Document URL.
    pub url: String,

    /// Scale factor, `1.0` is 100%.
    pub scale: f64,

    /// Per-page spacing.
    pub layout: PageLayout,
}

impl RenderRequest {
    /// Scale as a whole percentage.
    pub fn percent(&self) -> u32 {
        (self.scale * 100.0).round() as u32
    }
}

/// A document rendering backend.
///
/// `render` is called again every time the scale changes or the modal
/// reopens and must return a fresh view for the new request. Page signals
/// read `None` until that view has loaded.
pub trait DocumentRenderer: Clone + Send + Sync + 'static {
    fn render(&self, request: RenderRequest) -> AnyView;

    /// Zero-based visible page, `None` until loaded.
    fn current_page(&self) -> Signal<Option<usize>>;

    /// Page count, `None` until loaded.
    fn page_count(&self) -> Signal<Option<usize>>;

    fn jump_to_next_page(&self);

    fn jump_to_previous_page(&self);
}

/// Renders through the browser's built-in document viewer in an iframe,
/// driven by open parameters in the URL fragment.
///
/// The built-in viewer does not report its page count, so the host may
/// supply it with [`EmbedRenderer::with_page_count`]; without it, paging
/// forward is unbounded.
#[derive(Debug, Clone, Copy)]
pub struct EmbedRenderer {
    page: RwSignal<usize>,
    page_count: RwSignal<Option<usize>>,
    loaded: RwSignal<bool>,
}

impl EmbedRenderer {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(0),
            page_count: RwSignal::new(None),
            loaded: RwSignal::new(false),
        }
    }

    /// Set a known page count, enabling the upper bound.
    pub fn with_page_count(self, count: usize) -> Self {
        self.page_count.set(Some(count));
        self
    }
}

impl Default for EmbedRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentRenderer for EmbedRenderer {
    fn render(&self, request: RenderRequest) -> AnyView {
        // A fresh iframe reports nothing until its own load event.
        self.loaded.maybe_update(|loaded| std::mem::replace(loaded, false));

        let page = self.page;
        let loaded = self.loaded;
        let percent = request.percent();
        let url = request.url;
        let style = format!("margin-bottom: {}", request.layout.margin_bottom());

        view! {
          <iframe
            class="docview-embed"
            title="Document"
            style=style
            src=move || embed_src(&url, page.get(), percent)
            on:load=move |_| loaded.set(true)
          ></iframe>
        }
        .into_any()
    }

    fn current_page(&self) -> Signal<Option<usize>> {
        let page = self.page;
        let loaded = self.loaded;
        Signal::derive(move || loaded.get().then(|| page.get()))
    }

    fn page_count(&self) -> Signal<Option<usize>> {
        let count = self.page_count;
        let loaded = self.loaded;
        Signal::derive(move || if loaded.get() { count.get() } else { None })
    }

    fn jump_to_next_page(&self) {
        let count = self.page_count.get_untracked();
        self.page.update(|page| *page = next_page(*page, count));
    }

    fn jump_to_previous_page(&self) {
        self.page.update(|page| *page = page.saturating_sub(1));
    }
}

fn next_page(page: usize, count: Option<usize>) -> usize {
    match count {
        Some(count) if page + 1 >= count => page,
        _ => page + 1,
    }
}

/// Embed URL with page (one-based) and zoom open parameters. Any fragment
/// already on `url` is replaced.
pub fn embed_src(url: &str, page: usize, percent: u32) -> String {
    let base = url.split('#').next().unwrap_or_default();
    format!("{base}#page={}&zoom={percent}", page + 1)
}
