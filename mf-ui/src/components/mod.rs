//! Reusable Dioxus RSX components for the flux explorer.

mod chart_header;
mod date_time_window;
mod duration_slider;
mod error_display;
mod flux_result;
mod graph_controls;
mod loading_spinner;
mod log_slider;
mod parameter_fields;
mod shower_selector;
mod year_selector;

pub use chart_header::ChartHeader;
pub use date_time_window::DateTimeWindow;
pub use duration_slider::DurationSlider;
pub use error_display::ErrorDisplay;
pub use flux_result::FluxResult;
pub use graph_controls::GraphControls;
pub use loading_spinner::LoadingSpinner;
pub use log_slider::{EcaSlider, LogSliderInput, MeteorsSlider};
pub use parameter_fields::ParameterFields;
pub use shower_selector::ShowerSelector;
pub use year_selector::YearSelector;
