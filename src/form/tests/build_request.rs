use super::*;

/// Expect create user to POST /users with reputation coerced to a number
#[test]
fn create_user_coerces_reputation() {
    let values = FormValues::new()
        .with("username", "a")
        .with("email", "b@x.com")
        .with("password", "p")
        .with("reputation", "5")
        .with("role", "user");

    let request = catalog::USERS
        .create
        .build_request(&values, &SessionContext::Anonymous);

    assert_eq!(request.method, Method::Post);
    assert_eq!(request.path, "/users");
    assert_eq!(
        request.body,
        Some(json!({
            "username": "a",
            "email": "b@x.com",
            "password": "p",
            "reputation": 5,
            "role": "user",
        }))
    );
}

/// Expect a non-numeric reputation on create to be sent as null rather than rejected
#[test]
fn create_user_sends_null_for_non_numeric() {
    let values = FormValues::new().with("username", "a").with("reputation", "lots");

    let request = catalog::USERS
        .create
        .build_request(&values, &SessionContext::Anonymous);
    let body = request.body.unwrap();

    assert_eq!(body["reputation"], serde_json::Value::Null);
    assert_eq!(body["email"], json!(""));
}

/// Expect update user to PUT /users/{id} and omit a blank reputation
#[test]
fn update_user_omits_blank_reputation() {
    let values = FormValues::new()
        .with("updateUserId", "12")
        .with("updateUsername", "renamed")
        .with("updateReputation", "");

    let request = catalog::USERS
        .update
        .build_request(&values, &SessionContext::Anonymous);

    assert_eq!(request.method, Method::Put);
    assert_eq!(request.path, "/users/12");
    let body = request.body.unwrap();
    assert!(body.get("reputation").is_none());
    assert_eq!(body["username"], json!("renamed"));
    assert_eq!(body["role"], json!(""));
}

/// Expect update item to omit blank tags but split and trim given ones
#[test]
fn update_item_handles_tags() {
    let blank = FormValues::new().with("updateItemId", "3");
    let tagged = FormValues::new()
        .with("updateItemId", "3")
        .with("updateItemTags", " dairy , organic,");

    let blank_body = catalog::ITEMS
        .update
        .build_request(&blank, &SessionContext::Anonymous)
        .body
        .unwrap();
    let tagged_body = catalog::ITEMS
        .update
        .build_request(&tagged, &SessionContext::Anonymous)
        .body
        .unwrap();

    assert!(blank_body.get("tags").is_none());
    assert_eq!(tagged_body["tags"], json!(["dairy", "organic", ""]));
}

/// Expect store coordinates to be parsed as decimals on create
#[test]
fn create_store_parses_coordinates() {
    let values = FormValues::new()
        .with("name", "Corner Shop")
        .with("location", "Main St")
        .with("latitude", "52.52")
        .with("longitude", "13.405");

    let body = catalog::STORES
        .create
        .build_request(&values, &SessionContext::Anonymous)
        .body
        .unwrap();

    assert_eq!(body["latitude"], json!(52.52));
    assert_eq!(body["longitude"], json!(13.405));
}

/// Expect read and delete forms to send no body
#[test]
fn read_and_delete_send_no_body() {
    let values = FormValues::new()
        .with("readStoreId", "4")
        .with("deleteStoreId", "4");

    let read = catalog::STORES
        .read
        .build_request(&values, &SessionContext::Anonymous);
    let delete = catalog::STORES
        .delete
        .build_request(&values, &SessionContext::Anonymous);

    assert_eq!((read.method, read.path.as_str()), (Method::Get, "/stores/4"));
    assert_eq!((delete.method, delete.path.as_str()), (Method::Delete, "/stores/4"));
    assert!(read.body.is_none());
    assert!(delete.body.is_none());
}

/// Expect the scan form to inject the session user and parse its fields
#[test]
fn scan_injects_session_user() {
    let values = FormValues::new()
        .with(catalog::BARCODE_INPUT, "4006381333931")
        .with("price", "1.99")
        .with("sale_status", "true")
        .with("tags", "snacks, sale");

    let request = catalog::SCAN
        .build_request(&values, &SessionContext::Authenticated(UserId(TEST_USER_ID)));

    assert_eq!(request.path, "/api/scan");
    assert_eq!(
        request.body,
        Some(json!({
            "barcode": "4006381333931",
            "price": 1.99,
            "sale_status": true,
            "tags": ["snacks", "sale"],
            "user_id": TEST_USER_ID,
        }))
    );
}

/// Expect the scan form to leave user_id out without a session
#[test]
fn scan_without_session_omits_user() {
    let values = FormValues::new().with(catalog::BARCODE_INPUT, "123");

    let body = catalog::SCAN
        .build_request(&values, &SessionContext::Anonymous)
        .body
        .unwrap();

    assert!(body.get("user_id").is_none());
    assert_eq!(body["sale_status"], json!(false));
    assert_eq!(body["price"], serde_json::Value::Null);
}

/// Expect result element ids to follow the form names
#[test]
fn derives_result_element() {
    assert_eq!(catalog::USERS.create.result_element(), "createUserResult");
    assert_eq!(catalog::LOGIN.result_element(), "loginResult");
    assert_eq!(catalog::CHANGE_PASSWORD.result_element(), "changePasswordResult");
}
