//! Error card component.

use dioxus::prelude::*;
use tzl_core::view::{ErrorCard, ERROR_TITLE};

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub card: ErrorCard,
}

/// Displays the error message with the fixed suggestions.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            class: "result-card error",
            div { class: "status-indicator error", "✗ Error" }
            h3 { class: "result-title", "{ERROR_TITLE}" }
            p {
                strong { "Error: " }
                "{props.card.message}"
            }
            div {
                class: "mt-4",
                p { strong { "Suggestions:" } }
                ul {
                    style: "margin-left: 1.5rem; margin-top: 0.5rem;",
                    for suggestion in props.card.suggestions.iter() {
                        li { "{suggestion}" }
                    }
                }
            }
        }
    }
}
