//! The result region: empty, loading, found or failed.

use crate::components::{DocumentSummary, ErrorDisplay, LoadingCard, VerifyPanel};
use crate::state::AppState;
use crate::RESULT_REGION_ID;
use dioxus::prelude::*;
use tzl_core::view::{render, ResultView};

#[component]
pub fn ResultRegion() -> Element {
    let state = use_context::<AppState>();
    let (view, current) = {
        let controller = state.lookup.read();
        (render(&controller), controller.current_result().cloned())
    };

    let content = match view.result {
        ResultView::Empty => rsx! {},
        ResultView::Loading => rsx! { LoadingCard {} },
        ResultView::Found(card, panel) => rsx! {
            DocumentSummary { card: card }
            if let Some(result) = current {
                VerifyPanel { panel: panel, result: result }
            }
        },
        ResultView::Failed(card) => rsx! { ErrorDisplay { card: card } },
    };

    rsx! {
        div { id: RESULT_REGION_ID, {content} }
    }
}
