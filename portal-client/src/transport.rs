// Reqwest-backed transport.

use async_trait::async_trait;
use serde_json::Value;

use portal_core::{ApiRequest, ApiResponse, ApiTransport, ClientConfig, HttpMethod, PortalError,
    PortalResult};

/// Production transport. Owns its own `reqwest::Client`; construct one
/// per `ClientConfig` so isolated instances never share connection state.
pub struct HttpTransport {
    config: ClientConfig,
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    fn method_for(method: HttpMethod) -> reqwest::Method {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

#[async_trait]
impl ApiTransport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> PortalResult<ApiResponse> {
        let url = self.config.url_for(&request.path);
        let mut builder = self
            .http
            .request(Self::method_for(request.method), &url)
            .query(&request.query);

        for (name, value) in &self.config.default_headers {
            builder = builder.header(name, value);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        // Timeouts and connection failures both land here; the caller
        // treats them as one generic network failure.
        let response = builder
            .send()
            .await
            .map_err(|err| PortalError::network(err.to_string()))?;

        let status = response.status().as_u16();
        let body = response.json::<Value>().await.unwrap_or(Value::Null);

        Ok(ApiResponse { status, body })
    }
}
