//! Query flags in natural units and their mapping onto a `FluxForm`.
//!
//! Thresholds go through the same slider positions as the web form, so a
//! value given here is rounded exactly as the page would round it.

use chrono::NaiveDate;
use clap::Args;
use mf_core::form::{FluxForm, DEFAULT_GAMMA, DEFAULT_MIN_ALT, DEFAULT_SHOWER};
use mf_core::slider::{DURATION_SLIDER, ECA_SLIDER, METEORS_SLIDER};

#[derive(Args, Debug, Clone)]
pub struct FluxArgs {
    /// Shower code, or SPO/ANT for the background sources
    #[arg(short, long, default_value = DEFAULT_SHOWER)]
    pub shower: String,

    /// Years to include, comma separated (defaults to this year)
    #[arg(short, long, value_delimiter = ',')]
    pub years: Vec<i32>,

    /// Window start as MM/DD (defaults to the shower's activity window)
    #[arg(long)]
    pub start_date: Option<String>,

    /// Window start time as HH:MM
    #[arg(long)]
    pub start_time: Option<String>,

    /// Window stop as MM/DD
    #[arg(long)]
    pub stop_date: Option<String>,

    /// Window stop time as HH:MM
    #[arg(long)]
    pub stop_time: Option<String>,

    /// Average the selected years into one profile
    #[arg(long)]
    pub avg: bool,

    /// Shortest observation interval per bin, in hours
    #[arg(long, default_value_t = 2.0)]
    pub min_interval: f64,

    /// Longest observation interval per bin, in hours
    #[arg(long, default_value_t = 24.0)]
    pub max_interval: f64,

    /// Minimum number of meteors per bin
    #[arg(long, default_value_t = 50)]
    pub min_meteors: u64,

    /// Minimum effective collecting area per bin, in km^2 h
    #[arg(long, default_value_t = 20_000)]
    pub min_eca: u64,

    /// Minimum radiant altitude in degrees
    #[arg(long, default_value = DEFAULT_MIN_ALT)]
    pub min_alt: String,

    /// Zenith correction exponent
    #[arg(long, default_value = DEFAULT_GAMMA)]
    pub gamma: String,

    /// Population index (defaults to the shower's)
    #[arg(long)]
    pub popindex: Option<String>,

    /// Y-axis maximum of the graph
    #[arg(long)]
    pub ymax: Option<String>,
}

impl FluxArgs {
    pub fn to_form(&self, today: &NaiveDate) -> FluxForm {
        let mut form = FluxForm::new(today).with_shower(&self.shower, today);
        if !self.years.is_empty() {
            form = form.with_years(self.years.clone());
        }
        if let Some(date) = &self.start_date {
            form = form.with_start_date(date.clone());
        }
        if let Some(time) = &self.start_time {
            form = form.with_start_time(time.clone());
        }
        if let Some(date) = &self.stop_date {
            form = form.with_stop_date(date.clone());
        }
        if let Some(time) = &self.stop_time {
            form = form.with_stop_time(time.clone());
        }
        if let Some(popindex) = &self.popindex {
            form = form.with_popindex(popindex.clone());
        }
        if let Some(ymax) = &self.ymax {
            form = form.with_ymax(ymax.clone());
        }
        form.with_avg(self.avg)
            .with_min_alt(self.min_alt.clone())
            .with_gamma(self.gamma.clone())
            .with_duration_positions(
                DURATION_SLIDER.position_for(self.min_interval),
                DURATION_SLIDER.position_for(self.max_interval),
            )
            .with_meteors_position(METEORS_SLIDER.position_for(self.min_meteors as f64))
            .with_eca_position(ECA_SLIDER.position_for(self.min_eca as f64 / 1000.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use mf_core::query::FluxQuery;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: FluxArgs,
    }

    fn parse(argv: &[&str]) -> FluxArgs {
        let mut full = vec!["mf-cli"];
        full.extend_from_slice(argv);
        TestCli::parse_from(full).args
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2012, 10, 2).unwrap()
    }

    #[test]
    fn test_defaults_match_web_form() {
        let from_args = FluxQuery::from_form(&parse(&[]).to_form(&today()));
        let from_page = FluxQuery::from_form(&FluxForm::new(&today()));
        assert_eq!(from_args, from_page);
    }

    #[test]
    fn test_natural_units_are_rounded_like_sliders() {
        let args = parse(&[
            "--min-interval",
            "0.5",
            "--max-interval",
            "50",
            "--min-meteors",
            "10",
            "--min-eca",
            "1000",
        ]);
        let query = FluxQuery::from_form(&args.to_form(&today()));
        assert_eq!(query.min_interval, "0.5");
        assert_eq!(query.max_interval, "48");
        assert_eq!(query.min_meteors, 10);
        assert_eq!(query.min_eca, 1000);
    }

    #[test]
    fn test_shower_years_and_overrides() {
        let args = parse(&[
            "--shower",
            "GEM",
            "--years",
            "2012,2010",
            "--avg",
            "--start-time",
            "06:00",
            "--popindex",
            "2.4",
            "--ymax",
            "150",
        ]);
        let query = FluxQuery::from_form(&args.to_form(&today()));
        assert_eq!(query.shower, "GEM");
        assert_eq!(query.year, "2010,2012");
        assert_eq!(query.start, "2010-12-07T06:00:00");
        assert_eq!(query.stop, "2010-12-17T12:00:00");
        assert!(query.avg);
        assert_eq!(query.popindex, "2.4");
        assert_eq!(query.ymax.as_deref(), Some("150"));
    }
}
