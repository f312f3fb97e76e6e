//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! The form itself is an immutable `FluxForm`; handlers replace it wholesale.

use chrono::NaiveDate;
use dioxus::core::Task;
use dioxus::prelude::*;
use mf_core::form::FluxForm;
use mf_core::tracker::RequestTracker;

/// What the result area currently shows.
#[derive(Clone, Debug, PartialEq)]
pub enum ResultArea {
    /// Nothing requested yet
    Empty,
    /// A request is in flight
    Crunching,
    /// Rendered HTML fragment of the last response
    Ready(String),
}

/// Shared application state for the flux explorer.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Current form values
    pub form: Signal<FluxForm>,
    /// Result area contents
    pub result: Signal<ResultArea>,
    /// Transport error of the last request, if any
    pub error_msg: Signal<Option<String>>,
    /// Ticket bookkeeping for the single in-flight request
    pub tracker: Signal<RequestTracker>,
    /// Task running the in-flight request
    pub in_flight: Signal<Option<Task>>,
    /// Date the page was opened, used for default windows
    pub today: Signal<NaiveDate>,
}

impl AppState {
    /// Create a new AppState with the default form for today.
    pub fn new() -> Self {
        let today = today();
        Self {
            form: Signal::new(FluxForm::new(&today)),
            result: Signal::new(ResultArea::Empty),
            error_msg: Signal::new(None),
            tracker: Signal::new(RequestTracker::new()),
            in_flight: Signal::new(None),
            today: Signal::new(today),
        }
    }

    /// Replace the form with a value derived from the current one.
    pub fn update_form(&mut self, update: impl FnOnce(FluxForm) -> FluxForm) {
        let current = self.form.peek().clone();
        self.form.set(update(current));
    }

    pub fn is_pending(&self) -> bool {
        self.tracker.read().pending().is_some()
    }
}

/// Today's date according to the browser clock.
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}
