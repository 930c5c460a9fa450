pub mod home;
pub mod login;
pub mod manage;
pub mod not_found;
pub mod profile;
pub mod scan;
pub mod shopping_list;
pub mod stores;

pub use home::Home;
pub use login::{CreateAccount, Login};
pub use manage::{ManageItems, ManageShoppingLists, ManageStores};
pub use not_found::NotFound;
pub use profile::Profile;
pub use scan::Scan;
pub use shopping_list::ShoppingList;
pub use stores::Stores;
