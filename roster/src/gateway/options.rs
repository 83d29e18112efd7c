use std::time::Duration;

use crate::consts::consts::API_BASE_URL;

#[derive(Debug, Clone)]
pub struct GatewayOptions {
    pub base_url: String,
    pub timeout: Option<Duration>,
}

// Implements: https://rust-unofficial.github.io/patterns/patterns/creational/builder.html
impl GatewayOptions {
    /// Collection endpoint, member endpoints are `{base_url}/{id}`. Defaults to
    /// the build time `API_BASE_URL`, only tests point this elsewhere
    pub fn set_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Defines how long a request may take before it fails. `None` waits
    /// forever, which is what the admin UI has always done
    pub fn set_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn collection_url(&self) -> String {
        self.base_url.trim_end_matches('/').to_string()
    }

    pub fn member_url(&self, id: impl std::fmt::Display) -> String {
        format!("{}/{}", self.collection_url(), id)
    }
}

impl Default for GatewayOptions {
    fn default() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
            timeout: None,
        }
    }
}
