//! Year checkboxes. The earliest selected year anchors the date window.

use crate::state::AppState;
use dioxus::prelude::*;
use mf_utils::dates::year_choices;

#[component]
pub fn YearSelector() -> Element {
    let state = use_context::<AppState>();
    let years = year_choices(&(state.today)());
    let selected = state.form.read().years.clone();

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; flex-wrap: wrap; gap: 8px; align-items: center;",
            span { style: "font-weight: bold;", "Year: " }
            for year in years {
                label {
                    key: "{year}",
                    style: "white-space: nowrap;",
                    input {
                        r#type: "checkbox",
                        checked: selected.contains(&year),
                        onchange: move |evt: Event<FormData>| {
                            let mut state = state;
                            let checked = evt.checked();
                            state.update_form(|form| form.with_year_toggled(year, checked));
                        },
                    }
                    " {year}"
                }
            }
        }
    }
}
