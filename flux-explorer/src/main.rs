//! Meteor Shower Flux Explorer
//!
//! Browser front end for the meteor flux web service: pick a shower and an
//! observation window, tune the binning thresholds, and plot the flux
//! profile the service computes.
//!
//! Data flow:
//! 1. `mf_core` embeds the shower table; picking a shower prefills the
//!    window, times and population index.
//! 2. Every input derives a new immutable `FluxForm` into `AppState`.
//! 3. "Create Graph" encodes the form as a `GET /api/flux` query and runs
//!    it as the single request in flight.
//! 4. The response is rendered to HTML (graph, then table or alert) and
//!    written into the result area. Transport errors go to the error box.

use dioxus::prelude::*;
use mf_ui::components::{
    ChartHeader, DateTimeWindow, DurationSlider, EcaSlider, ErrorDisplay, FluxResult,
    GraphControls, MeteorsSlider, ParameterFields, ShowerSelector, YearSelector,
};
use mf_ui::state::AppState;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("flux-explorer-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);

    use_effect(move || {
        let form = state.form.read();
        log::debug!("Form: shower={} years={}", form.shower, form.year_param());
    });

    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            ChartHeader {
                title: "Meteor Shower Flux".to_string(),
                unit_description: "meteoroids per 1000 km\u{b2} per hour".to_string(),
            }

            FormSection {}

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            FluxResult {}
        }
    }
}

/// The request form, top to bottom in the order the service reads it.
#[component]
fn FormSection() -> Element {
    rsx! {
        div {
            style: "padding-bottom: 8px; border-bottom: 1px solid #e0e0e0;",
            ShowerSelector {}
            YearSelector {}
            DateTimeWindow {}
            DurationSlider {}
            MeteorsSlider {}
            EcaSlider {}
            ParameterFields {}
            GraphControls {}
        }
    }
}
