//! Browser `fetch()` bridge for the flux service.
//!
//! Requests go through `web_sys` and are awaited with `JsFuture`. Exactly one
//! request is in flight: submitting again cancels the running task, and the
//! ticket check drops any response that still arrives for an older
//! submission.

use dioxus::prelude::*;
use log::{error, info};
use mf_core::query::{FluxQuery, FLUX_ENDPOINT};
use mf_core::render::render_response;
use mf_core::response::FluxResponse;
use mf_core::FluxError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::state::{AppState, ResultArea};

fn js_error(value: JsValue) -> FluxError {
    FluxError::Transport(
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    )
}

/// GET `target` and decode the flux response.
pub async fn fetch_flux(target: &str) -> Result<FluxResponse, FluxError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(target, &opts).map_err(js_error)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| FluxError::Transport("no window".to_string()))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;
    if !response.ok() {
        return Err(FluxError::HttpStatus(response.status()));
    }

    let body = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?
        .as_string()
        .unwrap_or_default();
    FluxResponse::from_json(&body)
}

/// Submit the current form, replacing any request still in flight.
pub fn submit_flux_request(mut state: AppState) {
    cancel_flux_request(state);

    let query = FluxQuery::from_form(&state.form.peek());
    let averaged = query.avg;
    let target = query.request_target(FLUX_ENDPOINT);
    let ticket = state.tracker.write().begin();
    info!("Request #{}: {}", ticket.id(), target);

    state.error_msg.set(None);
    state.result.set(ResultArea::Crunching);

    let task = spawn(async move {
        let outcome = fetch_flux(&target).await;
        if !state.tracker.write().accept(ticket) {
            info!("Dropping stale result of request #{}", ticket.id());
            return;
        }
        state.in_flight.set(None);
        match outcome {
            Ok(response) => {
                state
                    .result
                    .set(ResultArea::Ready(render_response(&response, averaged)));
            }
            Err(e) => {
                error!("Request #{} failed: {}", ticket.id(), e);
                state.error_msg.set(Some(e.to_string()));
                state.result.set(ResultArea::Empty);
            }
        }
    });
    state.in_flight.set(Some(task));
}

/// Cancel the request in flight, if any. The result area falls back to
/// empty so the spinner does not linger.
pub fn cancel_flux_request(mut state: AppState) {
    let cancelled = state.tracker.write().cancel();
    if let Some(task) = state.in_flight.write().take() {
        task.cancel();
    }
    if let Some(ticket) = cancelled {
        info!("Request #{} cancelled", ticket.id());
        if *state.result.peek() == ResultArea::Crunching {
            state.result.set(ResultArea::Empty);
        }
    }
}
