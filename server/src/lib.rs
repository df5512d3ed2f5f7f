//! Static development server for the built Docview site.
//!
//! Serves everything under the Leptos site root and answers unknown paths
//! with `index.html` so client-side routes resolve.

use std::path::Path;

use axum::Router;
use http::{HeaderValue, header};
use thiserror::Error;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    services::{ServeDir, ServeFile},
    set_header::SetResponseHeaderLayer,
};

/// Server startup errors.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Leptos site configuration could not be read.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Logger was already installed.
    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),

    /// Socket or file system error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Create the static site router.
pub fn create_router(site_root: &Path) -> Router {
    let static_files =
        ServeDir::new(site_root).fallback(ServeFile::new(site_root.join("index.html")));

    Router::new().fallback_service(static_files).layer(
        ServiceBuilder::new()
            .layer(CompressionLayer::new())
            .layer(SetResponseHeaderLayer::if_not_present(
                header::CACHE_CONTROL,
                HeaderValue::from_static("no-cache"),
            )),
    )
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;

    fn site() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(dir.path().join("index.html"), "<main>docview</main>").expect("write");
        std::fs::write(dir.path().join("sample.pdf"), b"%PDF-1.7\n").expect("write");
        dir
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
        let response = router
            .oneshot(Request::get(uri).body(Body::empty()).expect("request"))
            .await
            .expect("response");
        let status = response.status();
        let cache = response
            .headers()
            .get(header::CACHE_CONTROL)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body")
            .to_vec();
        (status, cache, body)
    }

    #[tokio::test]
    async fn test_serves_document() {
        let dir = site();
        let (status, cache, body) = get(create_router(dir.path()), "/sample.pdf").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(cache.as_deref(), Some("no-cache"));
        assert!(body.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_unknown_path_falls_back_to_index() {
        let dir = site();
        let (status, _, body) = get(create_router(dir.path()), "/some/client/route").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"<main>docview</main>");
    }
}
