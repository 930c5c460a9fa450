use super::*;

/// Expect NotLoggedIn without an authenticated session
#[test]
fn requires_authenticated_session() {
    let transport = RecordingTransport::new();

    let anonymous = ShoppingListActions::new(&transport, &SessionContext::Anonymous);
    let unresolved = ShoppingListActions::new(&transport, &SessionContext::Unresolved);

    assert!(matches!(anonymous, Err(Error::NotLoggedIn)));
    assert!(matches!(unresolved, Err(Error::NotLoggedIn)));
    assert!(transport.calls().is_empty());
}

/// Expect item ids to be parsed from their leading digits
#[test]
fn parses_item_ids() {
    assert_eq!(parse_item_id("12").unwrap(), ItemId(12));
    assert_eq!(parse_item_id("12abc").unwrap(), ItemId(12));
    assert!(matches!(parse_item_id("abc"), Err(Error::InvalidId(ref raw)) if raw == "abc"));
    assert!(matches!(parse_item_id(""), Err(Error::InvalidId(_))));
}
