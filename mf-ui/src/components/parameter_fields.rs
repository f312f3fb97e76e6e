//! Averaging toggle and the free-text model parameters.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn ParameterFields() -> Element {
    let mut state = use_context::<AppState>();
    let form = state.form.read().clone();

    let on_avg = move |evt: Event<FormData>| {
        state.update_form(|form| form.with_avg(evt.checked()));
    };
    let on_min_alt = move |evt: Event<FormData>| {
        state.update_form(|form| form.with_min_alt(evt.value()));
    };
    let on_gamma = move |evt: Event<FormData>| {
        state.update_form(|form| form.with_gamma(evt.value()));
    };
    let on_popindex = move |evt: Event<FormData>| {
        state.update_form(|form| form.with_popindex(evt.value()));
    };
    let on_ymax = move |evt: Event<FormData>| {
        state.update_form(|form| form.with_ymax(evt.value()));
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; flex-wrap: wrap; gap: 12px; align-items: center;",
            label {
                style: "font-weight: bold;",
                input {
                    r#type: "checkbox",
                    checked: form.avg,
                    onchange: on_avg,
                }
                " Average years"
            }
            label {
                style: "font-weight: bold;",
                "Min. radiant altitude: "
                input {
                    r#type: "text",
                    value: "{form.min_alt}",
                    style: "width: 50px;",
                    oninput: on_min_alt,
                }
            }
            label {
                style: "font-weight: bold;",
                "\u{3b3}: "
                input {
                    r#type: "text",
                    value: "{form.gamma}",
                    style: "width: 50px;",
                    oninput: on_gamma,
                }
            }
            label {
                style: "font-weight: bold;",
                "Population index: "
                input {
                    r#type: "text",
                    value: "{form.popindex}",
                    style: "width: 50px;",
                    oninput: on_popindex,
                }
            }
            label {
                style: "font-weight: bold;",
                "Y-axis max: "
                input {
                    r#type: "text",
                    placeholder: "auto",
                    value: "{form.ymax}",
                    style: "width: 60px;",
                    oninput: on_ymax,
                }
            }
        }
    }
}
