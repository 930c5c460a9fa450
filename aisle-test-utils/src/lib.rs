//! Shared test fixtures for the Aisle client.
//!
//! Provides a [`TestSetup`] wrapping a mockito server that stands in for the external
//! inventory API, JSON factories for the entities it serves, and helpers that register mock
//! endpoints for each route the client consumes.

pub mod constant;
pub mod fixtures;
pub mod setup;

pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{constant::*, fixtures::factory, TestSetup};
}
