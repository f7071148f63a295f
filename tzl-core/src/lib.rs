//! Core types and state machine for the town zoning lookup.
//!
//! This crate provides:
//! - `query` / `lookup`: the search query and the `/api/zoning` contract
//! - `controller`: the explicit lookup state machine
//! - `view` / `html`: pure rendering of controller state
//! - `verification`: the confirm/reject collaborator
//! - `sticky_header`: scroll threshold tracking for the page header
//! - `client` (feature `api`): native HTTP client for the CLI

pub mod config;
pub mod controller;
pub mod error;
pub mod escape;
pub mod html;
pub mod lookup;
pub mod query;
pub mod sticky_header;
pub mod verification;
pub mod view;

#[cfg(feature = "api")]
pub mod client;

pub use controller::{LookupController, LookupTicket, ViewState};
pub use error::LookupError;
pub use lookup::LookupResult;
pub use query::SearchQuery;
