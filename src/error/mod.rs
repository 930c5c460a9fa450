//! Error types for the Aisle client.
//!
//! Failures fall into three groups: transport failures (the API could not be reached or
//! answered with something that is not JSON), application errors (the API answered with a
//! body carrying an `error` field), and validation failures (an identifier was rejected before
//! any request was issued). None of them are fatal to the page; callers log them and leave the
//! affected part of the UI inert.

pub mod config;
pub mod scanner;

use thiserror::Error;

use crate::{
    api::ApiResponse,
    error::{config::ConfigError, scanner::ScannerError},
};

/// Main error type for the Aisle client.
#[derive(Error, Debug)]
pub enum Error {
    /// The request could not be sent or no response was received.
    #[error("Failed to send request: {0}")]
    Transport(String),
    /// The response body was not JSON or did not have the expected shape.
    #[error("Failed to parse response body: {0}")]
    InvalidBody(String),
    /// The API answered with an application-level error.
    #[error("Request failed with status {status}: {error}")]
    Api { status: u16, error: String },
    /// An identifier was not numeric and was rejected before dispatch.
    #[error("Invalid ID: {0:?}")]
    InvalidId(String),
    /// The operation requires an authenticated session.
    #[error("User not logged in")]
    NotLoggedIn,
    /// Barcode scanner session error.
    #[error(transparent)]
    Scanner(#[from] ScannerError),
    /// Invalid client configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    /// Builds an [`Error::Api`] from a response, falling back to a generic message when the
    /// body carries no `error` field.
    pub fn from_response(response: &ApiResponse) -> Self {
        Self::Api {
            status: response.status,
            error: response.error().unwrap_or("Unknown error").to_string(),
        }
    }
}
