//! Browser fetch-backed `TreeSource`.

use trees_core::error::LoadError;
use trees_core::loader::{TreeSource, TREES_API_URL};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Issues a single GET to `url` through `window.fetch`. No timeout, no retry.
#[derive(Debug, Clone)]
pub struct HttpTreeSource {
    url: String,
}

impl HttpTreeSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for HttpTreeSource {
    fn default() -> Self {
        Self::new(TREES_API_URL)
    }
}

fn network_error(e: JsValue) -> LoadError {
    LoadError::Network(format!("{:?}", e))
}

impl TreeSource for HttpTreeSource {
    async fn fetch(&self) -> Result<String, LoadError> {
        let window = web_sys::window()
            .ok_or_else(|| LoadError::Network("window not available".to_string()))?;

        let response = JsFuture::from(window.fetch_with_str(&self.url))
            .await
            .map_err(network_error)?;
        let response: Response = response
            .dyn_into()
            .map_err(|_| LoadError::Malformed("fetch did not resolve to a Response".to_string()))?;

        if !response.ok() {
            return Err(LoadError::Status(response.status()));
        }

        let body = JsFuture::from(response.text().map_err(network_error)?)
            .await
            .map_err(network_error)?;
        body.as_string()
            .ok_or_else(|| LoadError::Malformed("response body is not text".to_string()))
    }
}
