//! Verification panel: open the document, then confirm or reject it.
//!
//! Handlers are bound to the result this panel was rendered for.

use crate::js_bridge;
use crate::state::AppState;
use crate::CITY_INPUT_ID;
use dioxus::prelude::*;
use log::debug;
use tzl_core::verification::Verdict;
use tzl_core::view::VerificationPanel;
use tzl_core::LookupResult;

#[derive(Props, Clone, PartialEq)]
pub struct VerifyPanelProps {
    pub panel: VerificationPanel,
    pub result: LookupResult,
}

fn record_verdict(mut state: AppState, result: &LookupResult, verdict: Verdict) {
    if state.lookup.write().verify(verdict).is_none() {
        return;
    }
    let verifier = state.verifier.read().clone();
    let ack = verifier.submit_verification(result, verdict);
    debug!("Verdict {:?} for {} acknowledged: {:?}", verdict, result.city, ack);
}

#[component]
pub fn VerifyPanel(props: VerifyPanelProps) -> Element {
    let mut state = use_context::<AppState>();
    let prompt = props.panel.prompt();
    let notice = props.panel.notice;
    let notice_class = match notice {
        Some(n) if n.offers_search_again() => "status-indicator error",
        _ => "status-indicator success",
    };

    let link = props.result.link.clone();
    let on_open = move |_: MouseEvent| js_bridge::open_in_new_tab(&link);

    let confirmed = props.result.clone();
    let on_confirm = move |_: MouseEvent| record_verdict(state, &confirmed, Verdict::Confirmed);

    let rejected = props.result.clone();
    let on_reject = move |_: MouseEvent| record_verdict(state, &rejected, Verdict::Rejected);

    let on_search_again = move |_: MouseEvent| {
        state.lookup.write().search_again();
        js_bridge::focus_element(CITY_INPUT_ID);
    };

    rsx! {
        div {
            class: "pdf-preview",
            h3 { "Verify This Document" }
            p { "{prompt}" }
            div {
                class: "pdf-actions",
                button { r#type: "button", class: "btn btn-secondary", onclick: on_open, "📄 Open Document" }
                button { r#type: "button", class: "btn btn-success", onclick: on_confirm, "✓ This is Correct" }
                button { r#type: "button", class: "btn btn-error", onclick: on_reject, "✗ This is Wrong" }
            }
            if let Some(notice) = notice {
                div {
                    class: "mt-4",
                    div { class: notice_class, {notice.status()} }
                    p { class: "mt-4", {notice.message()} }
                    if notice.offers_search_again() {
                        button {
                            r#type: "button",
                            class: "btn btn-secondary mt-4",
                            onclick: on_search_again,
                            "Try Another Search"
                        }
                    }
                }
            }
        }
    }
}
