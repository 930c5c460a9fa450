use dioxus_logger::tracing;
use reqwasm::http::{Request, RequestCredentials};
use serde_json::Value;

use crate::{
    api::{join_url, ApiRequest, ApiResponse, Method, Transport},
    error::Error,
};

/// Browser transport backed by `fetch`, sending the session cookie with every request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReqwasmTransport {
    base_url: String,
}

impl ReqwasmTransport {
    /// An empty base URL targets the origin that served the page.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Transport for ReqwasmTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, Error> {
        let url = join_url(&self.base_url, &request.path);

        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        let mut builder = builder.credentials(RequestCredentials::Include);

        if let Some(body) = &request.body {
            builder = builder
                .header("Content-Type", "application/json")
                .body(body.to_string());
        }

        tracing::debug!("{} {}", request.method.as_str(), request.path);

        let response = builder
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = response.status();
        let body = response.json::<Value>().await.map_err(|e| {
            Error::InvalidBody(format!("Request failed with status {}: {}", status, e))
        })?;

        Ok(ApiResponse { status, body })
    }
}
