
use aisle_test_utils::prelude::*;

use crate::{
    error::Error,
    model::id::UserId,
    session::{fetch_profile, resolve_session, SessionContext},
    util::test::{transport, RecordingTransport},
};
