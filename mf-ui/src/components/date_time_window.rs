//! Start and stop of the observation window as MM/DD dates and HH:MM times.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn DateTimeWindow() -> Element {
    let mut state = use_context::<AppState>();
    let form = state.form.read().clone();

    let on_start_date = move |evt: Event<FormData>| {
        state.update_form(|form| form.with_start_date(evt.value()));
    };
    let on_start_time = move |evt: Event<FormData>| {
        state.update_form(|form| form.with_start_time(evt.value()));
    };
    let on_stop_date = move |evt: Event<FormData>| {
        state.update_form(|form| form.with_stop_date(evt.value()));
    };
    let on_stop_time = move |evt: Event<FormData>| {
        state.update_form(|form| form.with_stop_time(evt.value()));
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                style: "font-weight: bold;",
                "From: "
                input {
                    r#type: "text",
                    placeholder: "MM/DD",
                    value: "{form.start_date}",
                    style: "width: 60px;",
                    oninput: on_start_date,
                }
                input {
                    r#type: "text",
                    placeholder: "HH:MM",
                    value: "{form.start_time}",
                    style: "width: 60px;",
                    oninput: on_start_time,
                }
            }
            label {
                style: "font-weight: bold;",
                "To: "
                input {
                    r#type: "text",
                    placeholder: "MM/DD",
                    value: "{form.stop_date}",
                    style: "width: 60px;",
                    oninput: on_stop_date,
                }
                input {
                    r#type: "text",
                    placeholder: "HH:MM",
                    value: "{form.stop_time}",
                    style: "width: 60px;",
                    oninput: on_stop_time,
                }
            }
        }
    }
}
