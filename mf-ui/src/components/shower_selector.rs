//! Dropdown selector for choosing a meteor shower.

use crate::state::AppState;
use dioxus::prelude::*;
use mf_core::shower::ShowerTable;

/// Shower dropdown selector.
/// Picking a shower prefills the date window, times and population index.
#[component]
pub fn ShowerSelector() -> Element {
    let mut state = use_context::<AppState>();
    let choices = ShowerTable::embedded().choices();
    let selected = state.form.read().shower.clone();

    let on_change = move |evt: Event<FormData>| {
        let code = evt.value();
        let today = (state.today)();
        state.update_form(|form| form.with_shower(&code, &today));
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "shower-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Shower: "
            }
            select {
                id: "shower-select",
                onchange: on_change,
                for choice in choices.iter() {
                    option {
                        value: "{choice.code}",
                        selected: choice.code == selected,
                        "{choice.label}"
                    }
                }
            }
        }
    }
}
