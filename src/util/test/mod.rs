//! In-crate test helpers.
//!
//! [`RecordingTransport`] answers from a script and records every request, which lets tests
//! check request order and assert that no request was made at all. Tests that exercise real
//! HTTP use [`transport`] against an `aisle_test_utils::TestSetup` mock server instead.

use std::{cell::RefCell, collections::VecDeque};

use aisle_test_utils::TestSetup;
use serde_json::Value;

use crate::{
    api::{ApiRequest, ApiResponse, ReqwestTransport, Transport},
    error::Error,
};

/// Creates a native transport pointed at the mock server of `setup`
pub fn transport(setup: &TestSetup) -> ReqwestTransport {
    ReqwestTransport::new(setup.url())
}

/// Scripted transport recording every request it receives
#[derive(Default)]
pub struct RecordingTransport {
    responses: RefCell<VecDeque<Result<ApiResponse, Error>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a JSON response
    pub fn respond(self, status: u16, body: Value) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    /// Queues a transport failure
    pub fn fail(self, reason: &str) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Err(Error::Transport(reason.to_string())));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    /// `"METHOD /path"` for every recorded request, in order
    pub fn calls(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .map(|r| format!("{} {}", r.method.as_str(), r.path))
            .collect()
    }
}

impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, Error> {
        self.requests.borrow_mut().push(request.clone());

        self.responses.borrow_mut().pop_front().unwrap_or_else(|| {
            Err(Error::Transport(format!(
                "no scripted response for {} {}",
                request.method.as_str(),
                request.path
            )))
        })
    }
}
