//! Loading card shown while a lookup is in flight.

use dioxus::prelude::*;
use tzl_core::view::{LOADING_DETAIL, LOADING_STATUS};

#[component]
pub fn LoadingCard() -> Element {
    rsx! {
        div {
            class: "result-card loading",
            div {
                class: "status-indicator loading",
                span { class: "spinner" }
                "{LOADING_STATUS}"
            }
            p { class: "mt-4", "{LOADING_DETAIL}" }
        }
    }
}
