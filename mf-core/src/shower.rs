use std::sync::OnceLock;

use chrono::NaiveDate;
use csv::ReaderBuilder;
use mf_utils::dates;
use serde::{Deserialize, Serialize};

use crate::error::{FluxError, Result};

/// Embedded CSV data for the IMO working list of visual meteor showers.
pub static CSV_OBJECT: &str = include_str!("../../fixtures/showers.csv");

/// Pseudo-shower code for the sporadic background.
pub const SPORADIC_CODE: &str = "SPO";

/// Pseudo-shower code for the antihelion source.
pub const ANTIHELION_CODE: &str = "ANT";

/// Time of day prefilled into both time fields on shower selection.
pub const DEFAULT_TIME: &str = "12:00";

/// Population index assumed for the background sources.
pub const BACKGROUND_POPINDEX: &str = "3.0";

/// A meteor shower with its activity period.
///
/// Dates are kept as the "MM/DD" strings shown in the form and `r` keeps its
/// printed precision ("2.0", not "2"), since both are copied into text fields.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Shower {
    /// IMO three letter code (e.g., "PER" for the Perseids)
    pub code: String,
    /// Population index
    pub r: String,
    /// First day of activity
    pub begin: String,
    /// Last day of activity
    pub end: String,
    /// Day of maximum activity
    pub peak: String,
    /// Human-readable name
    pub name: String,
}

/// Form values copied in when a shower is selected.
#[derive(Debug, PartialEq, Clone)]
pub struct Autofill {
    pub start_date: String,
    pub stop_date: String,
    pub start_time: String,
    pub stop_time: String,
    pub popindex: String,
}

/// An entry of the shower picker.
#[derive(Debug, PartialEq, Clone)]
pub struct ShowerChoice {
    pub code: String,
    pub label: String,
}

/// Immutable lookup of showers keyed by code.
#[derive(Debug, Clone)]
pub struct ShowerTable {
    showers: Vec<Shower>,
}

impl ShowerTable {
    /// The table compiled into the binary.
    pub fn embedded() -> &'static ShowerTable {
        static TABLE: OnceLock<ShowerTable> = OnceLock::new();
        TABLE.get_or_init(|| match ShowerTable::parse_shower_csv(CSV_OBJECT) {
            Ok(table) => table,
            Err(e) => panic!("failed to parse embedded shower table: {}", e),
        })
    }

    /// Parse a CSV string of shower data.
    ///
    /// Expected CSV columns: code, r, begin, end, max, name
    pub fn parse_shower_csv(csv_object: &str) -> Result<ShowerTable> {
        let mut showers: Vec<Shower> = Vec::new();
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .from_reader(csv_object.as_bytes());
        for row in rdr.records() {
            let record = row?;
            let field = |idx: usize, what: &str| -> Result<String> {
                record
                    .get(idx)
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .ok_or_else(|| {
                        FluxError::InvalidShower(format!("missing {} in {:?}", what, record))
                    })
            };
            let shower = Shower {
                code: field(0, "code")?,
                r: field(1, "r")?,
                begin: field(2, "begin")?,
                end: field(3, "end")?,
                peak: field(4, "max")?,
                name: field(5, "name")?,
            };
            for date in [&shower.begin, &shower.end, &shower.peak] {
                dates::parse_month_day(date).map_err(|e| {
                    FluxError::InvalidShower(format!("{}: {}", shower.code, e))
                })?;
            }
            if shower.r.parse::<f64>().is_err() {
                return Err(FluxError::InvalidShower(format!(
                    "{}: population index {:?} is not a number",
                    shower.code, shower.r
                )));
            }
            showers.push(shower);
        }
        Ok(ShowerTable { showers })
    }

    pub fn showers(&self) -> &[Shower] {
        &self.showers
    }

    /// Look up a shower by its code.
    pub fn find(&self, code: &str) -> Option<&Shower> {
        self.showers.iter().find(|s| s.code == code)
    }

    /// Picker entries: the background sources first, then every shower.
    pub fn choices(&self) -> Vec<ShowerChoice> {
        let mut choices = vec![
            ShowerChoice {
                code: SPORADIC_CODE.to_string(),
                label: format!("{} - Sporadic background", SPORADIC_CODE),
            },
            ShowerChoice {
                code: ANTIHELION_CODE.to_string(),
                label: format!("{} - Antihelion source", ANTIHELION_CODE),
            },
        ];
        choices.extend(self.showers.iter().map(|s| ShowerChoice {
            code: s.code.clone(),
            label: format!("{} - {} (max {})", s.code, s.name, s.peak),
        }));
        choices
    }

    /// Form values for a newly selected shower code.
    ///
    /// The background sources get a one month window starting this month;
    /// showers get their activity period. Unknown codes yield `None` and the
    /// form is left as it was.
    pub fn autofill(&self, code: &str, today: &NaiveDate) -> Option<Autofill> {
        if code == SPORADIC_CODE || code == ANTIHELION_CODE {
            let (start_date, stop_date) = dates::month_window(today);
            return Some(Autofill {
                start_date,
                stop_date,
                start_time: DEFAULT_TIME.to_string(),
                stop_time: DEFAULT_TIME.to_string(),
                popindex: BACKGROUND_POPINDEX.to_string(),
            });
        }
        self.find(code).map(|shower| Autofill {
            start_date: shower.begin.clone(),
            stop_date: shower.end.clone(),
            start_time: DEFAULT_TIME.to_string(),
            stop_time: DEFAULT_TIME.to_string(),
            popindex: shower.r.clone(),
        })
    }
}
