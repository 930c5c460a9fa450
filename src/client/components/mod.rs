pub mod list_view;
pub mod navbar;
pub mod page;
pub mod resource_form;
pub mod scanner_panel;

pub use list_view::ListView;
pub use navbar::Navbar;
pub use page::Page;
pub use resource_form::{ResourceForm, ResourceSection};
pub use scanner_panel::ScannerPanel;
