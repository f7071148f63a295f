//! Page header; `js_bridge::install_sticky_header` toggles its `scrolled` class.

use crate::SITE_HEADER_ID;
use dioxus::prelude::*;

#[component]
pub fn SiteHeader() -> Element {
    rsx! {
        header {
            id: SITE_HEADER_ID,
            class: "site-header",
            h1 { "Town Zoning Lookup" }
            p {
                class: "tagline",
                "Find the official zoning ordinance for any city or town."
            }
        }
    }
}
