//! The flux request form as an immutable value.
//!
//! UI event handlers do not mutate shared state; they derive a new
//! `FluxForm` through one of the `with_*` methods and hand it back to the
//! view. Encoding and rendering only ever read a `FluxForm`.

use chrono::{Datelike, NaiveDate};

use crate::duration::IntervalRange;
use crate::shower::ShowerTable;
use crate::slider::{
    binarg_meteors, EcaThreshold, DURATION_SLIDER, DURATION_UPPER_DEFAULT, ECA_SLIDER,
    METEORS_SLIDER,
};

/// Shower selected when the page opens.
pub const DEFAULT_SHOWER: &str = "PER";
/// The service's own defaults for the free-text fields.
pub const DEFAULT_MIN_ALT: &str = "10";
pub const DEFAULT_GAMMA: &str = "1.5";
pub const DEFAULT_POPINDEX: &str = "2.0";

#[derive(Debug, Clone, PartialEq)]
pub struct FluxForm {
    pub shower: String,
    /// Selected years, ascending. The first one anchors the timestamps.
    pub years: Vec<i32>,
    pub start_date: String,
    pub start_time: String,
    pub stop_date: String,
    pub stop_time: String,
    pub avg: bool,
    /// Duration slider handle positions, log10(hours)
    pub duration_lower: f64,
    pub duration_upper: f64,
    /// Meteor count slider position, log10(count)
    pub meteors: f64,
    /// ECA slider position, log10(10^3 km^2 h)
    pub eca: f64,
    pub min_alt: String,
    pub gamma: String,
    pub popindex: String,
    /// Optional y-axis maximum; empty means "let the service decide".
    pub ymax: String,
}

impl FluxForm {
    /// The form as first shown: the default shower prefilled for this year.
    pub fn new(today: &NaiveDate) -> Self {
        let blank = FluxForm {
            shower: String::new(),
            years: vec![today.year()],
            start_date: String::new(),
            start_time: String::new(),
            stop_date: String::new(),
            stop_time: String::new(),
            avg: false,
            duration_lower: DURATION_SLIDER.default,
            duration_upper: DURATION_UPPER_DEFAULT,
            meteors: METEORS_SLIDER.default,
            eca: ECA_SLIDER.default,
            min_alt: DEFAULT_MIN_ALT.to_string(),
            gamma: DEFAULT_GAMMA.to_string(),
            popindex: DEFAULT_POPINDEX.to_string(),
            ymax: String::new(),
        };
        blank.with_shower(DEFAULT_SHOWER, today)
    }

    /// Select a shower and prefill its window and population index.
    /// Codes missing from the table only change the selection.
    pub fn with_shower(self, code: &str, today: &NaiveDate) -> Self {
        let fill = ShowerTable::embedded().autofill(code, today);
        let mut next = FluxForm {
            shower: code.to_string(),
            ..self
        };
        if let Some(fill) = fill {
            next.start_date = fill.start_date;
            next.stop_date = fill.stop_date;
            next.start_time = fill.start_time;
            next.stop_time = fill.stop_time;
            next.popindex = fill.popindex;
        }
        next
    }

    pub fn with_years(self, mut years: Vec<i32>) -> Self {
        years.sort_unstable();
        years.dedup();
        FluxForm { years, ..self }
    }

    /// Add or remove one year from the selection.
    pub fn with_year_toggled(self, year: i32, selected: bool) -> Self {
        let mut years = self.years.clone();
        years.retain(|y| *y != year);
        if selected {
            years.push(year);
        }
        self.with_years(years)
    }

    pub fn with_start_date(self, start_date: String) -> Self {
        FluxForm { start_date, ..self }
    }

    pub fn with_start_time(self, start_time: String) -> Self {
        FluxForm { start_time, ..self }
    }

    pub fn with_stop_date(self, stop_date: String) -> Self {
        FluxForm { stop_date, ..self }
    }

    pub fn with_stop_time(self, stop_time: String) -> Self {
        FluxForm { stop_time, ..self }
    }

    pub fn with_avg(self, avg: bool) -> Self {
        FluxForm { avg, ..self }
    }

    pub fn with_min_alt(self, min_alt: String) -> Self {
        FluxForm { min_alt, ..self }
    }

    pub fn with_gamma(self, gamma: String) -> Self {
        FluxForm { gamma, ..self }
    }

    pub fn with_popindex(self, popindex: String) -> Self {
        FluxForm { popindex, ..self }
    }

    pub fn with_ymax(self, ymax: String) -> Self {
        FluxForm { ymax, ..self }
    }

    pub fn with_meteors_position(self, position: f64) -> Self {
        FluxForm {
            meteors: METEORS_SLIDER.snap(position),
            ..self
        }
    }

    pub fn with_eca_position(self, position: f64) -> Self {
        FluxForm {
            eca: ECA_SLIDER.snap(position),
            ..self
        }
    }

    /// Move the duration handles. The handles cannot cross.
    pub fn with_duration_positions(self, lower: f64, upper: f64) -> Self {
        let lower = DURATION_SLIDER.snap(lower);
        let upper = DURATION_SLIDER.snap(upper);
        FluxForm {
            duration_lower: lower.min(upper),
            duration_upper: upper.max(lower),
            ..self
        }
    }

    /// Minimum meteor count shown on the label and sent to the service.
    pub fn min_meteors(&self) -> u64 {
        binarg_meteors(self.meteors)
    }

    pub fn min_eca(&self) -> EcaThreshold {
        EcaThreshold::from_position(self.eca)
    }

    pub fn intervals(&self) -> IntervalRange {
        IntervalRange::from_positions(self.duration_lower, self.duration_upper)
    }

    /// The year the timestamps are anchored to.
    pub fn first_year(&self) -> Option<i32> {
        self.years.first().copied()
    }

    /// The `year` request parameter, every selected year comma-joined.
    pub fn year_param(&self) -> String {
        self.years
            .iter()
            .map(|y| y.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2012, 10, 2).unwrap()
    }

    #[test]
    fn test_new_form_defaults() {
        let form = FluxForm::new(&today());
        assert_eq!(form.shower, "PER");
        assert_eq!(form.years, vec![2012]);
        assert_eq!(form.start_date, "07/17");
        assert_eq!(form.stop_date, "08/24");
        assert_eq!(form.start_time, "12:00");
        assert_eq!(form.popindex, "2.2");
        assert_eq!(form.min_alt, "10");
        assert_eq!(form.gamma, "1.5");
        assert_eq!(form.min_meteors(), 50);
        assert_eq!(form.min_eca().km2_hours(), 20_000);
        assert_eq!(form.intervals().label(), "2.0 hours - 24 hours");
        assert!(!form.avg);
        assert!(form.ymax.is_empty());
    }

    #[test]
    fn test_with_shower_autofills() {
        let form = FluxForm::new(&today()).with_shower("GEM", &today());
        assert_eq!(form.shower, "GEM");
        assert_eq!(form.start_date, "12/07");
        assert_eq!(form.stop_date, "12/17");
        assert_eq!(form.popindex, "2.6");
    }

    #[test]
    fn test_with_shower_background() {
        let form = FluxForm::new(&today()).with_shower("SPO", &today());
        assert_eq!(form.start_date, "10/01");
        assert_eq!(form.stop_date, "11/01");
        assert_eq!(form.popindex, "3.0");
    }

    #[test]
    fn test_unknown_shower_leaves_fields() {
        let before = FluxForm::new(&today()).with_start_time("03:30".to_string());
        let after = before.clone().with_shower("XYZ", &today());
        assert_eq!(after.shower, "XYZ");
        assert_eq!(after.start_date, before.start_date);
        assert_eq!(after.start_time, "03:30");
        assert_eq!(after.popindex, before.popindex);
    }

    #[test]
    fn test_year_selection() {
        let form = FluxForm::new(&today())
            .with_year_toggled(2010, true)
            .with_year_toggled(2011, true)
            .with_year_toggled(2010, true);
        assert_eq!(form.years, vec![2010, 2011, 2012]);
        assert_eq!(form.first_year(), Some(2010));
        assert_eq!(form.year_param(), "2010,2011,2012");

        let form = form.with_year_toggled(2010, false);
        assert_eq!(form.year_param(), "2011,2012");
    }

    #[test]
    fn test_duration_handles_do_not_cross() {
        let form = FluxForm::new(&today()).with_duration_positions(2.0, 1.0);
        assert!(form.duration_lower <= form.duration_upper);
    }

    #[test]
    fn test_slider_positions_are_snapped() {
        let form = FluxForm::new(&today()).with_meteors_position(9.0);
        assert!((form.meteors - 3.0).abs() < 1e-9);
        assert_eq!(form.min_meteors(), 1000);
    }
}
