mod response;

use aisle_test_utils::prelude::*;
use serde_json::json;

use crate::{
    api::{endpoint, ApiRequest, ApiResponse, Method, Transport},
    error::Error,
    model::id::{ItemId, UserId},
    util::test::transport,
};
