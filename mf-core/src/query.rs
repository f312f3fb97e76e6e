//! Parameter encoder for `GET /api/flux`.

use url::form_urlencoded;

use crate::form::FluxForm;
use crate::timestamp::assemble_timestamp;

/// Endpoint of the flux service when served from the same origin as the page.
pub const FLUX_ENDPOINT: &str = "/api/flux";

/// Endpoint of a flux service running locally, used by native clients.
pub const LOCAL_SERVICE_ENDPOINT: &str = "http://localhost:8042/api/flux";

/// Query parameters of one flux request, already converted to the values
/// the service expects.
#[derive(Debug, Clone, PartialEq)]
pub struct FluxQuery {
    pub shower: String,
    pub start: String,
    pub stop: String,
    /// Comma-joined selected years
    pub year: String,
    pub avg: bool,
    /// Hours, rounded per duration tier
    pub min_interval: String,
    pub max_interval: String,
    pub min_meteors: u64,
    /// km^2 h
    pub min_eca: u64,
    pub min_alt: String,
    pub gamma: String,
    pub popindex: String,
    pub ymax: Option<String>,
}

impl FluxQuery {
    pub fn from_form(form: &FluxForm) -> Self {
        let year = form
            .first_year()
            .map(|y| y.to_string())
            .unwrap_or_default();
        let intervals = form.intervals();
        let ymax = Some(form.ymax.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        FluxQuery {
            shower: form.shower.clone(),
            start: assemble_timestamp(&year, &form.start_date, &form.start_time),
            stop: assemble_timestamp(&year, &form.stop_date, &form.stop_time),
            year: form.year_param(),
            avg: form.avg,
            min_interval: intervals.lower.request_value(),
            max_interval: intervals.upper.request_value(),
            min_meteors: form.min_meteors(),
            min_eca: form.min_eca().km2_hours(),
            min_alt: form.min_alt.clone(),
            gamma: form.gamma.clone(),
            popindex: form.popindex.clone(),
            ymax,
        }
    }

    /// Key/value pairs in request order.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("shower", self.shower.clone()),
            ("start", self.start.clone()),
            ("stop", self.stop.clone()),
            ("year", self.year.clone()),
            ("avg", self.avg.to_string()),
            ("min_interval", self.min_interval.clone()),
            ("max_interval", self.max_interval.clone()),
            ("min_meteors", self.min_meteors.to_string()),
            ("min_eca", self.min_eca.to_string()),
            ("min_alt", self.min_alt.clone()),
            ("gamma", self.gamma.clone()),
            ("popindex", self.popindex.clone()),
        ];
        if let Some(ymax) = &self.ymax {
            pairs.push(("ymax", ymax.clone()));
        }
        pairs
    }

    /// URL-encoded query string, without the leading `?`.
    pub fn query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs())
            .finish()
    }

    /// Full request target. `endpoint` may be relative.
    pub fn request_target(&self, endpoint: &str) -> String {
        format!("{}?{}", endpoint, self.query_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn form() -> FluxForm {
        FluxForm::new(&NaiveDate::from_ymd_opt(2012, 10, 2).unwrap())
    }

    #[test]
    fn test_from_default_form() {
        let query = FluxQuery::from_form(&form());
        assert_eq!(query.shower, "PER");
        assert_eq!(query.start, "2012-07-17T12:00:00");
        assert_eq!(query.stop, "2012-08-24T12:00:00");
        assert_eq!(query.year, "2012");
        assert!(!query.avg);
        assert_eq!(query.min_interval, "2.0");
        assert_eq!(query.max_interval, "24");
        assert_eq!(query.min_meteors, 50);
        assert_eq!(query.min_eca, 20_000);
        assert_eq!(query.min_alt, "10");
        assert_eq!(query.gamma, "1.5");
        assert_eq!(query.popindex, "2.2");
        assert_eq!(query.ymax, None);
    }

    #[test]
    fn test_pair_order() {
        let keys: Vec<&str> = FluxQuery::from_form(&form())
            .pairs()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(
            keys,
            vec![
                "shower",
                "start",
                "stop",
                "year",
                "avg",
                "min_interval",
                "max_interval",
                "min_meteors",
                "min_eca",
                "min_alt",
                "gamma",
                "popindex",
            ]
        );
    }

    #[test]
    fn test_ymax_only_when_present() {
        let blank = FluxQuery::from_form(&form().with_ymax("   ".to_string()));
        assert!(!blank.query_string().contains("ymax"));

        let set = FluxQuery::from_form(&form().with_ymax("120".to_string()));
        assert!(set.query_string().ends_with("&ymax=120"));
    }

    #[test]
    fn test_request_target() {
        let query = FluxQuery::from_form(&form());
        let target = query.request_target(FLUX_ENDPOINT);
        assert!(target.starts_with(
            "/api/flux?shower=PER&start=2012-07-17T12%3A00%3A00&stop=2012-08-24T12%3A00%3A00&year=2012&avg=false&min_interval=2.0&max_interval=24&min_meteors=50&min_eca=20000"
        ));
        assert!(target.ends_with("&min_alt=10&gamma=1.5&popindex=2.2"));
    }

    #[test]
    fn test_multiple_years() {
        let query = FluxQuery::from_form(&form().with_years(vec![2012, 2011]).with_avg(true));
        assert_eq!(query.start, "2011-07-17T12:00:00");
        assert_eq!(query.year, "2011,2012");
        assert!(query.query_string().contains("year=2011%2C2012&avg=true"));
    }

    #[test]
    fn test_labels_match_request() {
        let form = form()
            .with_duration_positions(0.5f64.log10(), 50f64.log10())
            .with_meteors_position(1.0)
            .with_eca_position(0.0);
        let query = FluxQuery::from_form(&form);
        assert_eq!(query.min_interval, "0.5");
        assert_eq!(query.max_interval, "48");
        assert_eq!(form.intervals().label(), "30 mins - 2 days");
        assert_eq!(query.min_meteors, form.min_meteors());
        assert_eq!(query.min_meteors, 10);
        assert_eq!(query.min_eca, 1000);
        assert_eq!(form.min_eca().label(), "1000 km\u{b2} \u{b7} h");
    }

    #[test]
    fn test_malformed_text_passes_through() {
        let query = FluxQuery::from_form(&form().with_gamma("abc".to_string()));
        assert_eq!(query.gamma, "abc");
        assert!(query.query_string().contains("gamma=abc"));
    }
}
