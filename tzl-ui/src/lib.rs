//! Shared Dioxus components and browser bridge for the town zoning lookup.
//!
//! This crate provides:
//! - `js_bridge`: fetch, window and DOM helpers via `web_sys`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: RSX components for the header, search form and result region

pub mod components;
pub mod js_bridge;
pub mod state;

/// DOM id of the city text input.
pub const CITY_INPUT_ID: &str = "city";

/// DOM id of the page header watched by the sticky header.
pub const SITE_HEADER_ID: &str = "siteHeader";

/// DOM id of the result region.
pub const RESULT_REGION_ID: &str = "result";
