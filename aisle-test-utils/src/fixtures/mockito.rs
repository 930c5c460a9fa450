//! Mock endpoint creation utilities.
//!
//! Each helper registers one route of the external API on the mock server. The returned
//! [`Mock`] verifies it was called exactly `expected_requests` times when asserted.

use mockito::{Matcher, Mock};
use serde_json::{json, Value};

use crate::setup::TestSetup;

impl TestSetup {
    /// Create a mock endpoint answering `method path` with `status` and a JSON `body`.
    pub fn create_json_endpoint(
        &mut self,
        method: &str,
        path: &str,
        status: usize,
        body: Value,
        expected_requests: usize,
    ) -> Mock {
        self.server
            .mock(method, path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint that only matches when the request carries exactly `request`
    /// as its JSON body.
    pub fn create_json_body_endpoint(
        &mut self,
        method: &str,
        path: &str,
        request: Value,
        status: usize,
        body: Value,
        expected_requests: usize,
    ) -> Mock {
        self.server
            .mock(method, path)
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(request))
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `/api/current_user` endpoint.
    ///
    /// With `Some(user_id)` the endpoint reports that user; with `None` it answers 401 with
    /// the API's "not logged in" error body.
    pub fn create_current_user_endpoint(
        &mut self,
        user_id: Option<i64>,
        expected_requests: usize,
    ) -> Mock {
        match user_id {
            Some(user_id) => self.create_json_endpoint(
                "GET",
                "/api/current_user",
                200,
                json!({ "user_id": user_id }),
                expected_requests,
            ),
            None => self.create_json_endpoint(
                "GET",
                "/api/current_user",
                401,
                json!({ "error": "User not logged in" }),
                expected_requests,
            ),
        }
    }

    /// Create a mock `/api/stores` endpoint listing `stores`.
    pub fn create_stores_endpoint(&mut self, stores: Vec<Value>, expected_requests: usize) -> Mock {
        self.create_json_endpoint(
            "GET",
            "/api/stores",
            200,
            Value::Array(stores),
            expected_requests,
        )
    }

    /// Create a mock `/api/store/{store_id}/items` endpoint listing `items`.
    pub fn create_store_items_endpoint(
        &mut self,
        store_id: i64,
        items: Vec<Value>,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/api/store/{}/items", store_id);

        self.create_json_endpoint("GET", &url, 200, Value::Array(items), expected_requests)
    }

    /// Create a mock `/api/shoppinglist/{user_id}` endpoint listing `entries`.
    pub fn create_shopping_list_endpoint(
        &mut self,
        user_id: i64,
        entries: Vec<Value>,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/api/shoppinglist/{}", user_id);

        self.create_json_endpoint("GET", &url, 200, Value::Array(entries), expected_requests)
    }

    /// Create a mock `/api/activitylogs/user/{user_id}` endpoint.
    ///
    /// An empty `activities` list is answered the way the API does: 404 with an error body.
    pub fn create_activity_log_endpoint(
        &mut self,
        user_id: i64,
        activities: Vec<Value>,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/api/activitylogs/user/{}", user_id);

        if activities.is_empty() {
            return self.create_json_endpoint(
                "GET",
                &url,
                404,
                json!({ "error": "No activity logs found for this user" }),
                expected_requests,
            );
        }

        self.create_json_endpoint(
            "GET",
            &url,
            200,
            json!({ "activities": activities }),
            expected_requests,
        )
    }
}
