use super::*;

/// Expect a store block to offer viewing its items
#[test]
fn store_block() {
    let store: crate::model::store::StoreDto =
        serde_json::from_value(factory::store(3, "Deli", "Old Town")).unwrap();

    let block = store.block(0);

    assert_eq!(block.key, "3");
    assert_eq!(block.class, "store-item");
    assert_eq!(block.heading, "Deli");
    assert_eq!(block.lines, vec![("Location", "Old Town".to_string())]);
    assert_eq!(
        block.actions,
        vec![ActionTarget {
            action: Action::ViewItems,
            target: "3".to_string()
        }]
    );
}

/// Expect N/A for shopping list entries without a known price
#[test]
fn shopping_list_entry_falls_back_to_na() {
    let entry: crate::model::shopping_list::ShoppingListEntryDto =
        serde_json::from_value(factory::shopping_list_entry(8, "Eggs", "Farm", None)).unwrap();

    let block = entry.block(0);

    assert_eq!(block.class, "shopping-list-item");
    assert_eq!(
        block.lines,
        vec![
            ("Brand", "Farm".to_string()),
            ("Price", "N/A".to_string()),
            ("Sale Status", "N/A".to_string()),
        ]
    );
    let actions: Vec<Action> = block.actions.iter().map(|a| a.action).collect();
    assert_eq!(actions, vec![Action::ViewItem, Action::RemoveItem]);
    assert!(block.actions.iter().all(|a| a.target == "8"));
}

/// Expect an item without id to render with an empty action target
#[test]
fn item_without_id() {
    let item: crate::model::item::ItemDto =
        serde_json::from_value(json!({ "name": "Unlabelled", "price": 3 })).unwrap();

    let block = item.block(4);

    assert_eq!(block.key, "position-4");
    assert_eq!(block.lines[0], ("Brand", "N/A".to_string()));
    assert_eq!(block.lines[1], ("Price", "3".to_string()));
    assert_eq!(block.actions[0].target, "");
}
