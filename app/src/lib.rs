use docview_core::{PreviewInput, ViewerConfig};
use docview_ui::{DocumentPreviewModal, EmbedRenderer};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

const VIEWER_CONFIG: &str = include_str!("../viewer.toml");

/// Pages in `public/sample.pdf`.
const SAMPLE_PAGES: usize = 2;

/// Viewer settings bundled with the app, or the defaults if they are invalid.
pub fn viewer_config() -> ViewerConfig {
    ViewerConfig::from_toml_str(VIEWER_CONFIG).unwrap_or_else(|e| {
        log::warn!("ignoring bundled viewer.toml: {e}");
        ViewerConfig::default()
    })
}

/// The document shown on the home page.
pub fn sample_input() -> PreviewInput {
    PreviewInput::new("/sample.pdf", "/imgpdf.png", "Title text", "7")
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
      <Title text="Docview" />

      <Router>
        <main class="page">
          <Routes fallback=|| "Page not found.".into_view()>
            <Route path=StaticSegment("") view=HomePage />
          </Routes>
        </main>
      </Router>
    }
}

/// Renders the sample document card.
#[component]
fn HomePage() -> impl IntoView {
    view! {
      <DocumentPreviewModal
        input=sample_input()
        renderer=EmbedRenderer::new().with_page_count(SAMPLE_PAGES)
        config=viewer_config()
      />
    }
}
