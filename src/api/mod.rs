//! Arms License API Client
//!
//! HTTP bindings to the remote backend, organized by domain.

mod applications;
mod reports;

use serde::de::DeserializeOwned;

use crate::config::{ApiConfig, TOKEN_STORAGE_KEY};
use crate::error::{ApiError, ApiResult};
use crate::models::Envelope;

pub use reports::{is_image_mime, SignatureUpload};

/// Bearer-authenticated client for one API host.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            token,
        }
    }

    /// Client using the token saved at login
    pub fn from_session(config: &ApiConfig) -> ApiResult<Self> {
        let token = stored_token().ok_or(ApiError::MissingToken)?;
        Ok(Self::new(config, token))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.get(self.url(path)).bearer_auth(&self.token)
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.post(self.url(path)).bearer_auth(&self.token)
    }

    fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.put(self.url(path)).bearer_auth(&self.token)
    }

    fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.delete(self.url(path)).bearer_auth(&self.token)
    }

    // ---- private helpers ----

    /// Return the response unchanged on 2xx. Otherwise a `"status": false`
    /// envelope body is `ApiError::Rejected` and anything else `ApiError::Status`.
    async fn ensure_success(response: reqwest::Response) -> ApiResult<reqwest::Response> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ApiError::from_failed_response(status.as_u16(), body));
        }
        Ok(response)
    }

    /// Decode the `{ status, data }` envelope of a successful response.
    async fn parse_envelope<T: DeserializeOwned>(
        response: reqwest::Response,
        what: &str,
    ) -> ApiResult<Option<T>> {
        let response = Self::ensure_success(response).await?;
        let envelope = response.json::<Envelope<T>>().await?;
        envelope.accepted(what)
    }
}

/// Absolute URL for a server-relative upload path such as a signature image
pub fn asset_url(config: &ApiConfig, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    if path.starts_with('/') {
        format!("{}{}", config.base_url, path)
    } else {
        format!("{}/{}", config.base_url, path)
    }
}

/// Bearer token from localStorage
pub fn stored_token() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage
        .get_item(TOKEN_STORAGE_KEY)
        .ok()
        .flatten()
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_url() {
        let config = ApiConfig::new("https://lampserver.example.in/");
        assert_eq!(
            asset_url(&config, "/uploads/sig.png"),
            "https://lampserver.example.in/uploads/sig.png"
        );
        assert_eq!(
            asset_url(&config, "uploads/sig.png"),
            "https://lampserver.example.in/uploads/sig.png"
        );
        assert_eq!(asset_url(&config, "https://cdn.example.in/a.png"), "https://cdn.example.in/a.png");
    }

    #[test]
    fn test_url_join() {
        let client = ApiClient::new(&ApiConfig::new("https://h.example"), "t".into());
        assert_eq!(client.url("/arms/liu-applications"), "https://h.example/arms/liu-applications");
    }
}
