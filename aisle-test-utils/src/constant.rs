//! Identifiers shared by tests so fixtures and assertions agree on them.

/// User id reported by the mock `/api/current_user` endpoint.
pub static TEST_USER_ID: i64 = 42;

/// Store id used by store listing fixtures.
pub static TEST_STORE_ID: i64 = 7;

/// Success message the login endpoint answers with.
pub static LOGIN_SUCCESS_MESSAGE: &str = "Login successful";

/// Success message the account creation endpoint answers with.
pub static USER_CREATED_MESSAGE: &str = "User created successfully";
