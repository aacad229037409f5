//! The transport seam.
//!
//! Lives in the core crate so both the session manager and the list
//! controllers depend on the trait, not on a concrete HTTP client.
//! The reqwest-backed implementation lives in `portal-client`; tests
//! substitute in-memory fakes.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{PortalError, PortalResult};

/// The subset of HTTP methods the backend contract uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A single backend request, fully described.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: HashMap<String, String>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: HashMap::new(),
            body: None,
        }
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn with_bearer(mut self, token: &str) -> Self {
        self.headers
            .insert("Authorization".to_string(), format!("Bearer {token}"));
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// A backend response: status plus parsed JSON body (Null when the
/// body was empty or not JSON).
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The backend's `{"error": ...}` message, verbatim, or the bare
    /// status when the body carries no message.
    pub fn error_message(&self) -> String {
        self.body
            .get("error")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP {}", self.status))
    }

    /// Map non-2xx responses to `Server` errors, passing the body through
    /// on success.
    pub fn into_success(self) -> PortalResult<Value> {
        if self.is_success() {
            Ok(self.body)
        } else {
            Err(PortalError::server(self.status, self.error_message()))
        }
    }
}

/// Sends one request and returns one response.
///
/// Implementations only fail with `PortalError::Network`; HTTP-level
/// rejections come back as an `ApiResponse` with a non-2xx status so
/// callers can surface the backend's error message.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> PortalResult<ApiResponse>;
}
