//! Logarithmic range sliders for the meteor count and ECA thresholds.

use crate::state::AppState;
use dioxus::prelude::*;
use mf_core::slider::{LogSlider, ECA_SLIDER, METEORS_SLIDER};

#[derive(Props, Clone, PartialEq)]
pub struct LogSliderInputProps {
    pub label: String,
    pub slider: LogSlider,
    /// Current position, log10 of the value
    pub position: f64,
    /// Display text for the current value
    pub value_label: String,
    pub onchange: EventHandler<f64>,
}

/// A range input over log10 positions with its value shown beside it.
#[component]
pub fn LogSliderInput(props: LogSliderInputProps) -> Element {
    let slider = props.slider;
    let onchange = props.onchange;

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                style: "font-weight: bold; min-width: 140px;",
                "{props.label}: "
            }
            input {
                r#type: "range",
                min: "{slider.min}",
                max: "{slider.max}",
                step: "{slider.step}",
                value: "{props.position}",
                oninput: move |evt: Event<FormData>| {
                    if let Ok(position) = evt.value().parse::<f64>() {
                        onchange.call(position);
                    }
                },
            }
            span { style: "min-width: 120px;", "{props.value_label}" }
        }
    }
}

/// Minimum meteors per bin.
#[component]
pub fn MeteorsSlider() -> Element {
    let mut state = use_context::<AppState>();
    let form = state.form.read().clone();

    rsx! {
        LogSliderInput {
            label: "Min. meteors".to_string(),
            slider: METEORS_SLIDER,
            position: form.meteors,
            value_label: form.min_meteors().to_string(),
            onchange: move |position: f64| {
                state.update_form(|form| form.with_meteors_position(position));
            },
        }
    }
}

/// Minimum effective collecting area per bin.
#[component]
pub fn EcaSlider() -> Element {
    let mut state = use_context::<AppState>();
    let form = state.form.read().clone();

    rsx! {
        LogSliderInput {
            label: "Min. ECA".to_string(),
            slider: ECA_SLIDER,
            position: form.eca,
            value_label: form.min_eca().label(),
            onchange: move |position: f64| {
                state.update_form(|form| form.with_eca_position(position));
            },
        }
    }
}
