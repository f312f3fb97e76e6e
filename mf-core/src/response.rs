use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// One row of the flux table.
///
/// The service writes rows as objects (`{"time":..,"sollon":..,..}`);
/// bare arrays are accepted too. Either way the cells are displayed in the
/// order they appear in the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FluxRow {
    Cells(Vec<Value>),
    Fields(Map<String, Value>),
}

impl FluxRow {
    /// Cell values in payload order.
    pub fn cells(&self) -> Vec<&Value> {
        match self {
            FluxRow::Cells(cells) => cells.iter().collect(),
            FluxRow::Fields(fields) => fields.values().collect(),
        }
    }
}

/// The JSON payload returned by `GET /api/flux`, tagged by `status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum FluxResponse {
    #[serde(rename = "OK")]
    Ok {
        /// URL or path of the rendered graph
        #[serde(default)]
        graph: Option<String>,
        #[serde(default)]
        flux: Option<Vec<FluxRow>>,
    },
    #[serde(rename = "WARNING")]
    Warning {
        #[serde(default)]
        msg: String,
        #[serde(default)]
        debug: Option<String>,
    },
    #[serde(rename = "ERROR")]
    Error {
        #[serde(default)]
        msg: String,
        #[serde(default)]
        debug: Option<String>,
    },
}

impl FluxResponse {
    pub fn from_json(body: &str) -> Result<FluxResponse> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn status(&self) -> &'static str {
        match self {
            FluxResponse::Ok { .. } => "OK",
            FluxResponse::Warning { .. } => "WARNING",
            FluxResponse::Error { .. } => "ERROR",
        }
    }

    /// The server's message for WARNING/ERROR payloads.
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            FluxResponse::Ok { .. } => None,
            FluxResponse::Warning { msg, .. } | FluxResponse::Error { msg, .. } => {
                Some(msg.as_str())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_ok() {
        let body = r#"{"status":"OK","graph":"/tmp/flux-1.png","flux":[["2012-08-12 22:00",140.123,3.5,21.2,44,2.1,0.4,98]]}"#;
        let response = FluxResponse::from_json(body).unwrap();
        match response {
            FluxResponse::Ok { graph, flux } => {
                assert_eq!(graph.as_deref(), Some("/tmp/flux-1.png"));
                let rows = flux.unwrap();
                assert_eq!(rows.len(), 1);
                let cells = rows[0].cells();
                assert_eq!(cells[0], &json!("2012-08-12 22:00"));
                assert_eq!(cells[4], &json!(44));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_parse_object_rows_keep_field_order() {
        let body = r#"{"status":"OK","graph":"g.png","flux":[{"time":"2012-08-12 22:00","sollon":140.123,"teff":3.5,"eca":21.2,"met":44,"flux":2.1,"e_flux":0.4,"zhr":98}]}"#;
        let response = FluxResponse::from_json(body).unwrap();
        let FluxResponse::Ok { flux: Some(rows), .. } = response else {
            panic!("expected OK with rows");
        };
        assert!(matches!(rows[0], FluxRow::Fields(_)));
        let cells = rows[0].cells();
        assert_eq!(cells.len(), 8);
        assert_eq!(cells[0], &json!("2012-08-12 22:00"));
        assert_eq!(cells[1], &json!(140.123));
        assert_eq!(cells[6], &json!(0.4));
        assert_eq!(cells[7], &json!(98));
    }

    #[test]
    fn test_parse_ok_without_optional_fields() {
        let response = FluxResponse::from_json(r#"{"status":"OK"}"#).unwrap();
        assert_eq!(
            response,
            FluxResponse::Ok {
                graph: None,
                flux: None
            }
        );
        assert_eq!(response.failure_message(), None);
    }

    #[test]
    fn test_parse_error_with_debug() {
        let body = r#"{"status":"ERROR","msg":"Invalid parameters.","debug":"bad date"}"#;
        let response = FluxResponse::from_json(body).unwrap();
        assert_eq!(response.status(), "ERROR");
        assert_eq!(response.failure_message(), Some("Invalid parameters."));
    }

    #[test]
    fn test_parse_error_without_message() {
        let response = FluxResponse::from_json(r#"{"status":"ERROR"}"#).unwrap();
        assert_eq!(response.failure_message(), Some(""));
    }

    #[test]
    fn test_parse_warning() {
        let response =
            FluxResponse::from_json(r#"{"status":"WARNING","msg":"Too few meteors"}"#).unwrap();
        assert_eq!(response.status(), "WARNING");
        assert_eq!(response.failure_message(), Some("Too few meteors"));
    }

    #[test]
    fn test_parse_rejects_unknown_status() {
        assert!(FluxResponse::from_json(r#"{"status":"MAYBE"}"#).is_err());
        assert!(FluxResponse::from_json("<html>").is_err());
    }
}
