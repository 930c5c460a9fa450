pub mod action;
pub mod navigate;
pub mod signal;

pub use action::dispatch_item_action;
pub use navigate::navigate;
