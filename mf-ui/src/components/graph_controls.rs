//! "Create Graph" and "Cancel" buttons.

use crate::fetch::{cancel_flux_request, submit_flux_request};
use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn GraphControls() -> Element {
    let state = use_context::<AppState>();
    let pending = state.is_pending();

    rsx! {
        div {
            style: "margin: 12px 0; display: flex; gap: 8px;",
            button {
                class: "btn btn-graph",
                onclick: move |_| submit_flux_request(state),
                "Create Graph"
            }
            if pending {
                button {
                    class: "btn",
                    onclick: move |_| cancel_flux_request(state),
                    "Cancel"
                }
            }
        }
    }
}
