use super::*;

/// Expect message and error accessors to read the body fields
#[test]
fn reads_message_and_error() {
    let ok = ApiResponse::new(200, json!({ "message": "Item added to shopping list" }));
    let err = ApiResponse::new(404, json!({ "error": "Item not found" }));

    assert_eq!(ok.message(), Some("Item added to shopping list"));
    assert_eq!(ok.error(), None);
    assert_eq!(err.error(), Some("Item not found"));
    assert_eq!(err.message(), None);
}

/// Expect an error body to become Error::Api regardless of status
#[test]
fn into_result_maps_error_body() {
    let result =
        ApiResponse::new(200, json!({ "error": "Missing user_id or item_id" })).into_result();

    match result {
        Err(Error::Api { status, error }) => {
            assert_eq!(status, 200);
            assert_eq!(error, "Missing user_id or item_id");
        }
        other => panic!("expected Error::Api, got {:?}", other),
    }
}

/// Expect a body without error field to pass through unchanged
#[test]
fn into_result_keeps_success_body() {
    let response = ApiResponse::new(201, json!({ "message": "Item created successfully" }));

    assert_eq!(response.clone().into_result().unwrap(), response);
}

/// Expect endpoint paths to match the API routes
#[test]
fn builds_endpoint_paths() {
    assert_eq!(endpoint::resource("users", None), "/users");
    assert_eq!(endpoint::resource("users", Some(" 12 ")), "/users/12");
    assert_eq!(endpoint::shopping_list(UserId(3)), "/api/shoppinglist/3");
    assert_eq!(
        endpoint::shopping_list_remove(UserId(3), ItemId(9)),
        "/api/shoppinglist/3/remove/9"
    );
    assert_eq!(endpoint::item(ItemId(9)), "/api/item/9");
}
