//! Loading spinner component.

use dioxus::prelude::*;

/// Placeholder shown while the service crunches data.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            class: "please-wait",
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "Crunching data"
        }
    }
}
