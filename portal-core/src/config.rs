//! Client configuration.
//!
//! Every transport and session manager takes an explicit `ClientConfig`
//! instead of sharing a module-level client, so tests can run multiple
//! isolated instances against different fake backends.

use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend, without a trailing slash.
    pub base_url: String,
    /// Headers attached to every request (content type, API keys, ...).
    pub default_headers: HashMap<String, String>,
    /// Path of the tenant-resolution endpoint.
    pub tenant_path: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut default_headers = HashMap::new();
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            default_headers,
            tenant_path: "tenant".to_string(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    pub fn with_tenant_path(mut self, path: impl Into<String>) -> Self {
        self.tenant_path = path.into();
        self
    }

    /// Absolute URL for a resource path.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
