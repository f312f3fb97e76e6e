//! Result area: spinner while crunching, then the rendered response.

use crate::components::LoadingSpinner;
use crate::state::{AppState, ResultArea};
use dioxus::prelude::*;

/// DOM id of the result area.
pub const FLUX_RESULT_ID: &str = "fluxresult";

#[component]
pub fn FluxResult() -> Element {
    let state = use_context::<AppState>();
    let result = (state.result)();

    let content = match result {
        ResultArea::Empty => rsx! {},
        ResultArea::Crunching => rsx! { LoadingSpinner {} },
        // Fragment produced by mf_core::render, service values escaped.
        ResultArea::Ready(html) => rsx! {
            div { dangerous_inner_html: "{html}" }
        },
    };

    rsx! {
        div {
            id: FLUX_RESULT_ID,
            style: "min-height: 200px; width: 100%; margin-top: 12px;",
            {content}
        }
    }
}
