//! Card describing the document a lookup found.

use dioxus::prelude::*;
use tzl_core::view::DocumentCard;

#[derive(Props, Clone, PartialEq)]
pub struct DocumentSummaryProps {
    pub card: DocumentCard,
}

/// City, link, file type and optional notes. The link opens in a new tab.
#[component]
pub fn DocumentSummary(props: DocumentSummaryProps) -> Element {
    let card = props.card;

    rsx! {
        div {
            class: "result-card success",
            div { class: "status-indicator success", "✓ Zoning Ordinance Found" }
            h3 { class: "result-title", "Document Found for {card.city}" }
            div {
                class: "result-item",
                div { class: "result-label", "Document Link" }
                div {
                    class: "result-value",
                    a {
                        href: "{card.link}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        class: "result-link",
                        "{card.link}"
                    }
                }
            }
            div {
                class: "result-item",
                div { class: "result-label", "File Type" }
                div { class: "result-value", "{card.file_type}" }
            }
            if let Some(notes) = card.notes.as_ref() {
                div {
                    class: "result-item",
                    div { class: "result-label", "Notes" }
                    div { class: "result-value", "{notes}" }
                }
            }
        }
    }
}
