//! HTML rendering of flux responses.
//!
//! The fragments are written into the page's result area as-is. Every value
//! that comes from the service is HTML-escaped on the way in.

use log::warn;
use serde_json::Value;

use crate::response::{FluxResponse, FluxRow};

/// Header of the leading time column; dropped for averaged profiles, whose
/// rows are keyed by solar longitude only.
const TIME_HEADER: &str = "<th>Time<br/>[UT]</th>";

const FLUX_HEADERS: [&str; 6] = [
    "<th>Solarlon<br/>[deg]</th>",
    "<th>Teff<br/>[h]</th>",
    "<th>ECA<br/>[10<sup>3</sup> km<sup>2</sup> h]</th>",
    "<th>nMet</th>",
    "<th>Flux<br/>[10<sup>-3</sup> km<sup>-2</sup> h<sup>-1</sup>]</th>",
    "<th>ZHR</th>",
];

/// Render a service response.
///
/// `averaged` is the `avg` flag of the request that produced the response.
/// Failure payloads are logged in full.
pub fn render_response(response: &FluxResponse, averaged: bool) -> String {
    match response {
        FluxResponse::Ok { graph, flux } => {
            let mut items: Vec<String> = Vec::new();
            if let Some(graph) = graph {
                items.push(format!(
                    "<img src=\"{}\" class=\"img-flux\"/>",
                    escape_html(graph)
                ));
            }
            if let Some(rows) = flux.as_ref().filter(|rows| !rows.is_empty()) {
                items.push(render_table(rows, averaged));
            }
            items.join("")
        }
        FluxResponse::Warning { msg, .. } | FluxResponse::Error { msg, .. } => {
            warn!("Flux service returned {}: {:?}", response.status(), response);
            render_alert(msg)
        }
    }
}

/// The alert block shown when no graph could be generated.
pub fn render_alert(message: &str) -> String {
    format!(
        "<div class=\"alert\"><strong>Oops!</strong><br/>A graph could not be generated.<br/>{}</div>",
        escape_html(message)
    )
}

fn render_table(rows: &[FluxRow], averaged: bool) -> String {
    let mut html =
        String::from("<table class=\"table table-striped table-hover table-flux\"><thead><tr>");
    if !averaged {
        html.push_str(TIME_HEADER);
    }
    for header in FLUX_HEADERS {
        html.push_str(header);
    }
    html.push_str("</tr></thead><tbody>");
    for row in rows {
        html.push_str("<tr>");
        for cell in row.cells() {
            html.push_str("<td>");
            html.push_str(&escape_html(&cell_text(cell)));
            html.push_str("</td>");
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    html
}

fn cell_text(cell: &Value) -> String {
    match cell {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
