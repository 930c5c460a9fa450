//! HTTP plumbing shared by every component.
//!
//! Components describe what they want as an [`ApiRequest`] and hand it to a [`Transport`].
//! In the browser the transport is [`ReqwasmTransport`]; natively it is [`ReqwestTransport`].
//! Every endpoint of the external API answers with JSON regardless of status, so a response
//! is always a status code plus a parsed JSON body.

pub mod endpoint;
#[cfg(feature = "web")]
mod browser;
#[cfg(not(target_arch = "wasm32"))]
mod native;

#[cfg(test)]
mod tests;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Error;

#[cfg(feature = "web")]
pub use browser::ReqwasmTransport;
#[cfg(not(target_arch = "wasm32"))]
pub use native::ReqwestTransport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the API base URL, always starting with `/`
    pub path: String,
    /// JSON body, sent with `Content-Type: application/json` when present
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            path: path.into(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body: Some(body),
        }
    }

    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Put,
            path: path.into(),
            body: Some(body),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// The `message` field of the body, present on successful mutations.
    pub fn message(&self) -> Option<&str> {
        self.body.get("message").and_then(Value::as_str)
    }

    /// The `error` field of the body, present on application errors.
    pub fn error(&self) -> Option<&str> {
        self.body.get("error").and_then(Value::as_str)
    }

    /// Converts a body carrying an `error` field into [`Error::Api`].
    ///
    /// The HTTP status alone is not used: some endpoints answer errors with 200 and some
    /// successes with 201.
    pub fn into_result(self) -> Result<Self, Error> {
        if self.body.get("error").is_some() {
            return Err(Error::from_response(&self));
        }

        Ok(self)
    }

    /// Deserializes the body into `T`.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, Error> {
        serde_json::from_value(self.body.clone())
            .map_err(|e| Error::InvalidBody(format!("Unexpected response shape: {}", e)))
    }
}

/// Sends requests to the external API.
///
/// Futures are not required to be `Send`: the browser runs everything on one thread.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, Error>;
}

impl<T: Transport + ?Sized> Transport for &T {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, Error> {
        (**self).send(request).await
    }
}

/// Joins a base URL and an API path, tolerating a trailing `/` on the base.
pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}
