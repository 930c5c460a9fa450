//! Every form of the application, declared once.
//!
//! Create forms send blank numeric and list inputs as they parse (`null`, `[""]`); update
//! forms omit blank numeric and list inputs so the stored value is kept. Blank text inputs are
//! always sent.

use crate::{
    api::endpoint,
    form::{
        field::{FieldKind, FieldSpec},
        DisplayMode, FormSpec, Intent, Redirect,
    },
};

/// The four CRUD forms of one resource collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceForms {
    pub title: &'static str,
    pub create: FormSpec,
    pub read: FormSpec,
    pub update: FormSpec,
    pub delete: FormSpec,
}

impl ResourceForms {
    pub fn all(&self) -> [&FormSpec; 4] {
        [&self.create, &self.read, &self.update, &self.delete]
    }
}

const fn crud(
    name: &'static str,
    title: &'static str,
    endpoint: &'static str,
    intent: Intent,
    id_input: Option<&'static str>,
    fields: &'static [FieldSpec],
) -> FormSpec {
    FormSpec {
        name,
        title,
        endpoint,
        intent,
        id_input,
        fields,
        display: DisplayMode::Json,
        with_session_user: false,
        redirect: None,
    }
}

const USER_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("username", "username", "Username", FieldKind::Text),
    FieldSpec::new("email", "email", "Email", FieldKind::Text),
    FieldSpec::new("password", "password", "Password", FieldKind::Secret),
    FieldSpec::new("reputation", "reputation", "Reputation", FieldKind::Integer),
    FieldSpec::new("role", "role", "Role", FieldKind::Text),
];

const USER_UPDATE_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("username", "updateUsername", "Username", FieldKind::Text),
    FieldSpec::new("email", "updateEmail", "Email", FieldKind::Text),
    FieldSpec::new("password", "updatePassword", "Password", FieldKind::Secret),
    FieldSpec::new("reputation", "updateReputation", "Reputation", FieldKind::Integer).optional(),
    FieldSpec::new("role", "updateRole", "Role", FieldKind::Text),
];

pub static USERS: ResourceForms = ResourceForms {
    title: "Users",
    create: crud("createUserForm", "Create User", "/users", Intent::Create, None, USER_FIELDS),
    read: crud("readUserForm", "Read User", "/users", Intent::Read, Some("readUserId"), &[]),
    update: crud(
        "updateUserForm",
        "Update User",
        "/users",
        Intent::Update,
        Some("updateUserId"),
        USER_UPDATE_FIELDS,
    ),
    delete: crud(
        "deleteUserForm",
        "Delete User",
        "/users",
        Intent::Delete,
        Some("deleteUserId"),
        &[],
    ),
};

const ITEM_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", "name", "Name", FieldKind::Text),
    FieldSpec::new("tags", "tags", "Tags (comma separated)", FieldKind::List),
    FieldSpec::new("brand", "brand", "Brand", FieldKind::Text),
];

const ITEM_UPDATE_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", "updateItemName", "Name", FieldKind::Text),
    FieldSpec::new("tags", "updateItemTags", "Tags (comma separated)", FieldKind::List).optional(),
    FieldSpec::new("brand", "updateItemBrand", "Brand", FieldKind::Text),
];

pub static ITEMS: ResourceForms = ResourceForms {
    title: "Items",
    create: crud("createItemForm", "Create Item", "/items", Intent::Create, None, ITEM_FIELDS),
    read: crud("readItemForm", "Read Item", "/items", Intent::Read, Some("readItemId"), &[]),
    update: crud(
        "updateItemForm",
        "Update Item",
        "/items",
        Intent::Update,
        Some("updateItemId"),
        ITEM_UPDATE_FIELDS,
    ),
    delete: crud(
        "deleteItemForm",
        "Delete Item",
        "/items",
        Intent::Delete,
        Some("deleteItemId"),
        &[],
    ),
};

const STORE_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", "name", "Name", FieldKind::Text),
    FieldSpec::new("location", "location", "Location", FieldKind::Text),
    FieldSpec::new("latitude", "latitude", "Latitude", FieldKind::Decimal),
    FieldSpec::new("longitude", "longitude", "Longitude", FieldKind::Decimal),
];

const STORE_UPDATE_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", "updateStoreName", "Name", FieldKind::Text),
    FieldSpec::new("location", "updateStoreLocation", "Location", FieldKind::Text),
    FieldSpec::new("latitude", "updateStoreLatitude", "Latitude", FieldKind::Decimal).optional(),
    FieldSpec::new("longitude", "updateStoreLongitude", "Longitude", FieldKind::Decimal).optional(),
];

pub static STORES: ResourceForms = ResourceForms {
    title: "Stores",
    create: crud("createStoreForm", "Create Store", "/stores", Intent::Create, None, STORE_FIELDS),
    read: crud("readStoreForm", "Read Store", "/stores", Intent::Read, Some("readStoreId"), &[]),
    update: crud(
        "updateStoreForm",
        "Update Store",
        "/stores",
        Intent::Update,
        Some("updateStoreId"),
        STORE_UPDATE_FIELDS,
    ),
    delete: crud(
        "deleteStoreForm",
        "Delete Store",
        "/stores",
        Intent::Delete,
        Some("deleteStoreId"),
        &[],
    ),
};

const SHOPPING_LIST_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("user_id", "user_id", "User ID", FieldKind::Text),
    FieldSpec::new("items", "items", "Item IDs (comma separated)", FieldKind::List),
];

const SHOPPING_LIST_UPDATE_FIELDS: &[FieldSpec] = &[FieldSpec::new(
    "items",
    "updateShoppingListItems",
    "Item IDs (comma separated)",
    FieldKind::List,
)];

pub static SHOPPING_LISTS: ResourceForms = ResourceForms {
    title: "Shopping Lists",
    create: crud(
        "createShoppingListForm",
        "Create Shopping List",
        "/shoppinglist",
        Intent::Create,
        None,
        SHOPPING_LIST_FIELDS,
    ),
    read: crud(
        "readShoppingListForm",
        "Read Shopping List",
        "/shoppinglist",
        Intent::Read,
        Some("readShoppingListId"),
        &[],
    ),
    update: crud(
        "updateShoppingListForm",
        "Update Shopping List",
        "/shoppinglist",
        Intent::Update,
        Some("updateShoppingListId"),
        SHOPPING_LIST_UPDATE_FIELDS,
    ),
    delete: crud(
        "deleteShoppingListForm",
        "Delete Shopping List",
        "/shoppinglist",
        Intent::Delete,
        Some("deleteShoppingListId"),
        &[],
    ),
};

pub static LOGIN: FormSpec = FormSpec {
    name: "loginForm",
    title: "Login",
    endpoint: endpoint::LOGIN,
    intent: Intent::Create,
    id_input: None,
    fields: &[
        FieldSpec::new("email", "email", "Email", FieldKind::Text),
        FieldSpec::new("password", "password", "Password", FieldKind::Secret),
    ],
    display: DisplayMode::Message,
    with_session_user: false,
    redirect: Some(Redirect {
        message: "Login successful",
        location: "/",
    }),
};

pub static CREATE_ACCOUNT: FormSpec = FormSpec {
    name: "createAccountForm",
    title: "Create Account",
    endpoint: endpoint::CREATE_USER,
    intent: Intent::Create,
    id_input: None,
    fields: &[
        FieldSpec::new("username", "username", "Username", FieldKind::Text),
        FieldSpec::new("email", "email", "Email", FieldKind::Text),
        FieldSpec::new("password", "password", "Password", FieldKind::Secret),
    ],
    display: DisplayMode::Message,
    with_session_user: false,
    redirect: Some(Redirect {
        message: "User created successfully",
        location: "/login",
    }),
};

pub static CHANGE_PASSWORD: FormSpec = FormSpec {
    name: "changePasswordForm",
    title: "Change Password",
    endpoint: endpoint::CHANGE_PASSWORD,
    intent: Intent::Create,
    id_input: None,
    fields: &[
        FieldSpec::new("old_password", "oldPassword", "Current Password", FieldKind::Secret),
        FieldSpec::new("new_password", "newPassword", "New Password", FieldKind::Secret),
    ],
    display: DisplayMode::Message,
    with_session_user: false,
    redirect: None,
};

/// Input the scanner writes decoded barcodes into
pub const BARCODE_INPUT: &str = "barcode";

pub static SCAN: FormSpec = FormSpec {
    name: "scanForm",
    title: "Submit Scanned Item",
    endpoint: endpoint::SCAN,
    intent: Intent::Create,
    id_input: None,
    fields: &[
        FieldSpec::new("barcode", BARCODE_INPUT, "Barcode", FieldKind::Text),
        FieldSpec::new("price", "price", "Price", FieldKind::Decimal),
        FieldSpec::new("sale_status", "sale_status", "On Sale", FieldKind::Flag),
        FieldSpec::new("tags", "tags", "Tags (comma separated)", FieldKind::List),
    ],
    display: DisplayMode::Message,
    with_session_user: true,
    redirect: None,
};
