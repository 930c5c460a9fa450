use super::*;

/// Expect add then remove of the same item to restore the shopping list
#[tokio::test]
async fn add_then_remove_restores_list() -> Result<(), Error> {
    let api = FakeShoppingListApi::new(vec![factory::shopping_list_entry(
        7, "Eggs", "Farm", None,
    )]);
    let actions = ShoppingListActions::new(&api, &session())?;
    let mut container = ListContainer::new();

    actions.refresh(&mut container).await?;
    let before = container.clone();

    actions.add("5", &mut container).await?;
    assert_eq!(api.ids(), vec![7, 5]);
    assert_eq!(container.keys(), vec!["7", "5"]);

    actions.remove("5", &mut container).await?;
    assert_eq!(api.ids(), vec![7]);
    assert_eq!(container, before);

    Ok(())
}

/// Expect removing an item listed twice to drop a single copy
#[tokio::test]
async fn remove_drops_one_of_repeated_item() -> Result<(), Error> {
    let api = FakeShoppingListApi::new(vec![factory::shopping_list_entry(
        5,
        "Milk",
        "Dairyland",
        Some(1.29),
    )]);
    let actions = ShoppingListActions::new(&api, &session())?;
    let mut container = ListContainer::new();

    actions.refresh(&mut container).await?;
    let before = container.clone();

    actions.add("5", &mut container).await?;
    assert_eq!(api.ids(), vec![5, 5]);
    assert_eq!(container.keys(), vec!["5", "5-1"]);

    actions.remove("5", &mut container).await?;
    assert_eq!(api.ids(), vec![5]);
    assert_eq!(container, before);

    Ok(())
}
