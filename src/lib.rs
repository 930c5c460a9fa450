#![allow(non_snake_case)]

pub mod action;
pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod list;
pub mod model;
pub mod scanner;
pub mod session;
pub mod util;

#[cfg(feature = "web")]
pub mod client;
