//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::{self, ApiClient};
use crate::config::ApiConfig;
use crate::error::ApiResult;
use crate::route::Route;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current hash route - read
    pub route: ReadSignal<Route>,
    /// API host configuration
    api: StoredValue<ApiConfig>,
}

impl AppContext {
    pub fn new(route: ReadSignal<Route>, api: ApiConfig) -> Self {
        Self {
            route,
            api: StoredValue::new(api),
        }
    }

    /// Client carrying the logged-in officer's token
    pub fn client(&self) -> ApiResult<ApiClient> {
        self.api.with_value(ApiClient::from_session)
    }

    /// Absolute URL of a server-relative upload
    pub fn asset_url(&self, path: &str) -> String {
        self.api.with_value(|config| api::asset_url(config, path))
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
