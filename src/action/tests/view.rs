use super::*;

/// Expect item details to be fetched by id
#[tokio::test]
async fn fetches_item() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let endpoint = test.create_json_endpoint(
        "GET",
        "/api/item/10",
        200,
        json!({
            "id": 10,
            "name": "Milk",
            "brand": "Dairyland",
            "tags": ["dairy"],
            "barcode": "123",
        }),
        1,
    );
    let transport = transport(&test);
    let actions = ShoppingListActions::new(&transport, &session())?;

    let item = actions.view("10").await?;

    assert_eq!(item.id, Some(ItemId(10)));
    assert_eq!(item.name.as_deref(), Some("Milk"));
    assert_eq!(item.tags, vec!["dairy"]);
    endpoint.assert();

    Ok(())
}

/// Expect Error::Api when the item does not exist
#[tokio::test]
async fn missing_item() -> Result<(), Error> {
    let transport = RecordingTransport::new().respond(404, factory::error("Item not found"));
    let actions = ShoppingListActions::new(&transport, &session())?;

    let result = actions.view("11").await;

    assert!(matches!(result, Err(Error::Api { status: 404, .. })));

    Ok(())
}
