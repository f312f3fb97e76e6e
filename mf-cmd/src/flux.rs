//! Query the flux service from the command line.

use std::time::Duration;

use anyhow::{bail, Context};
use chrono::{Local, NaiveDate};
use log::{info, warn};
use mf_core::client::{FluxClient, FluxSession};
use mf_core::form::FluxForm;
use mf_core::query::FluxQuery;
use mf_core::render::render_response;
use mf_utils::dates::parse_month_day;

use crate::args::FluxArgs;

/// Request timeout of the native client.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Build the form from the flags, warning about date fields the service
/// is likely to reject.
fn build_form(args: &FluxArgs) -> FluxForm {
    let form = args.to_form(&today());
    for (name, value) in [("start", &form.start_date), ("stop", &form.stop_date)] {
        if let Err(e) = parse_month_day(value) {
            warn!("{} date {:?} looks malformed: {}", name, value, e);
        }
    }
    form
}

/// Print the request target for the given flags.
pub fn print_url(args: &FluxArgs, endpoint: &str) -> anyhow::Result<()> {
    let query = FluxQuery::from_form(&build_form(args));
    println!("{}", query.request_target(endpoint));
    Ok(())
}

/// Submit one query and write the rendered fragment.
///
/// Ctrl-C cancels the request in flight. WARNING and ERROR payloads are
/// still written (as the alert block) before the command fails.
pub async fn run_flux(
    args: &FluxArgs,
    endpoint: &str,
    output: Option<&str>,
) -> anyhow::Result<()> {
    let query = FluxQuery::from_form(&build_form(args));
    let averaged = query.avg;

    let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
    let client = FluxClient::new(http, endpoint)
        .with_context(|| format!("invalid endpoint {:?}", endpoint))?;
    let mut session = FluxSession::new(client);

    let submitted = session.submit(query);
    info!("Submitted request #{}", submitted.id());

    let outcome = tokio::select! {
        outcome = session.next_result() => outcome,
        _ = tokio::signal::ctrl_c() => {
            if let Some(ticket) = session.cancel() {
                warn!("Request #{} cancelled", ticket.id());
            }
            bail!("cancelled");
        }
    };
    let Some((_, result)) = outcome else {
        bail!("request #{} produced no result", submitted.id());
    };
    let response = result.context("flux request failed")?;

    let html = render_response(&response, averaged);
    match output {
        Some(path) => {
            std::fs::write(path, &html).with_context(|| format!("writing {}", path))?;
            info!("Wrote {} bytes to {}", html.len(), path);
        }
        None => println!("{}", html),
    }

    if let Some(msg) = response.failure_message() {
        bail!("flux service returned {}: {}", response.status(), msg);
    }
    Ok(())
}
