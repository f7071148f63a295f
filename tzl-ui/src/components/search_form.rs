//! City search form.
//!
//! The submit button follows the controller: disabled for blank input and while a
//! lookup is loading. Each submission runs on its own task; the controller drops
//! outcomes that arrive after a newer submission.

use crate::js_bridge;
use crate::state::AppState;
use crate::CITY_INPUT_ID;
use dioxus::prelude::*;
use log::debug;
use tzl_core::view::render;

#[component]
pub fn SearchForm() -> Element {
    let mut state = use_context::<AppState>();
    let (input, submit) = {
        let controller = state.lookup.read();
        (controller.input().to_string(), render(&controller).submit)
    };

    let on_input = move |evt: Event<FormData>| {
        state.lookup.write().set_input(&evt.value());
    };

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        let Some(ticket) = state.lookup.write().begin_submit() else {
            return;
        };
        let config = state.config.read().clone();
        spawn(async move {
            let outcome = js_bridge::submit_lookup(&config, ticket.query()).await;
            if !state.lookup.write().complete(&ticket, outcome) {
                debug!("Ignored outdated response for {}", ticket.query());
            }
        });
    };

    rsx! {
        form {
            id: "zoningForm",
            class: "search-form",
            onsubmit: on_submit,
            label { r#for: CITY_INPUT_ID, "City or town" }
            input {
                id: CITY_INPUT_ID,
                name: "city",
                r#type: "text",
                placeholder: "e.g., Boston, MA",
                autocomplete: "off",
                value: "{input}",
                oninput: on_input,
            }
            button {
                id: "submitBtn",
                r#type: "submit",
                class: "btn btn-primary",
                disabled: !submit.enabled,
                if submit.busy {
                    span { class: "spinner" }
                }
                "{submit.label}"
            }
        }
    }
}
