use dioxus_logger::tracing;
use reqwest::Client;
use serde_json::Value;

use crate::{
    api::{join_url, ApiRequest, ApiResponse, Method, Transport},
    error::Error,
};

/// Native transport, used outside the browser and against mock servers in tests.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    base_url: String,
}

impl ReqwestTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, Error> {
        let url = join_url(&self.base_url, &request.path);

        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        tracing::debug!("{} {}", request.method.as_str(), request.path);

        let response = builder
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response.json::<Value>().await.map_err(|e| {
            Error::InvalidBody(format!("Request failed with status {}: {}", status, e))
        })?;

        Ok(ApiResponse { status, body })
    }
}
