//! Host environment access: window size, body scroll and downloads.
//!
//! Every call here can fail when the page is in an unusual state (no body
//! yet, DOM call rejected). Callers log and carry on.

use docview_core::{CoreError, DownloadRequest, Result, ScrollHost};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlAnchorElement, HtmlElement};

fn js_error(action: &'static str) -> impl FnOnce(JsValue) -> CoreError {
    move |value| CoreError::host(action, format!("{value:?}"))
}

fn document(action: &'static str) -> Result<web_sys::Document> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| CoreError::host(action, "no document"))
}

/// Current `window.innerWidth`.
pub fn window_width() -> Result<f64> {
    const ACTION: &str = "measuring the window";

    let window = web_sys::window().ok_or_else(|| CoreError::host(ACTION, "no window"))?;
    window
        .inner_width()
        .map_err(js_error(ACTION))?
        .as_f64()
        .ok_or_else(|| CoreError::host(ACTION, "innerWidth is not a number"))
}

/// The document body, whose inline `overflow` is locked while the modal is
/// open.
#[derive(Debug, Clone)]
pub struct BodyScrollHost {
    body: HtmlElement,
}

impl BodyScrollHost {
    pub fn current() -> Result<Self> {
        let body = document("locking scroll")?
            .body()
            .ok_or_else(|| CoreError::host("locking scroll", "document has no body"))?;
        Ok(Self { body })
    }
}

impl ScrollHost for BodyScrollHost {
    fn overflow(&self) -> Result<String> {
        self.body
            .style()
            .get_property_value("overflow")
            .map_err(js_error("reading body overflow"))
    }

    fn set_overflow(&self, value: &str) -> Result<()> {
        self.body
            .style()
            .set_property("overflow", value)
            .map_err(js_error("setting body overflow"))
    }
}

/// Ask the browser to save the document through a detached anchor.
///
/// Fire and forget: the fetch itself is never observed.
pub fn trigger_download(request: &DownloadRequest) -> Result<()> {
    const ACTION: &str = "starting a download";

    let anchor: HtmlAnchorElement = document(ACTION)?
        .create_element("a")
        .map_err(js_error(ACTION))?
        .dyn_into()
        .map_err(|_| CoreError::host(ACTION, "created element is not an anchor"))?;

    anchor.set_href(&request.href);
    anchor.set_download(request.filename.as_deref().unwrap_or_default());
    anchor.click();
    log::debug!("download requested for {}", request.href);
    Ok(())
}
