//! Two-handle duration slider for the observation interval bounds.

use crate::state::AppState;
use dioxus::prelude::*;
use mf_core::slider::DURATION_SLIDER;

#[component]
pub fn DurationSlider() -> Element {
    let mut state = use_context::<AppState>();
    let form = state.form.read().clone();
    let label = form.intervals().label();
    let slider = DURATION_SLIDER;

    let on_lower = move |evt: Event<FormData>| {
        if let Ok(lower) = evt.value().parse::<f64>() {
            state.update_form(|form| {
                let upper = form.duration_upper;
                form.with_duration_positions(lower.min(upper), upper)
            });
        }
    };
    let on_upper = move |evt: Event<FormData>| {
        if let Ok(upper) = evt.value().parse::<f64>() {
            state.update_form(|form| {
                let lower = form.duration_lower;
                form.with_duration_positions(lower, upper.max(lower))
            });
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                style: "font-weight: bold; min-width: 140px;",
                "Interval duration: "
            }
            div {
                style: "display: flex; flex-direction: column;",
                input {
                    r#type: "range",
                    min: "{slider.min}",
                    max: "{slider.max}",
                    step: "{slider.step}",
                    value: "{form.duration_lower}",
                    oninput: on_lower,
                }
                input {
                    r#type: "range",
                    min: "{slider.min}",
                    max: "{slider.max}",
                    step: "{slider.step}",
                    value: "{form.duration_upper}",
                    oninput: on_upper,
                }
            }
            span { style: "min-width: 160px;", "{label}" }
        }
    }
}
