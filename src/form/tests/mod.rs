mod build_request;
mod field;

use aisle_test_utils::prelude::*;
use serde_json::json;

use crate::{
    api::Method,
    error::Error,
    form::{catalog, submit, FormValues},
    model::id::UserId,
    session::SessionContext,
    util::test::{transport, RecordingTransport},
};
