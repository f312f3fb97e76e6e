//! Native client for the flux web service.
//!
//! `FluxClient` performs one request. `FluxSession` layers the single-flight
//! contract on top: one request in flight, a new submission aborts the
//! previous one, and results arrive over a channel tagged with the ticket
//! of the submission that produced them.

use log::{info, warn};
use reqwest::Client;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use url::Url;

use crate::error::{FluxError, Result};
use crate::query::FluxQuery;
use crate::response::FluxResponse;
use crate::tracker::{RequestTracker, Ticket};

/// A finished request.
pub type Outcome = (Ticket, Result<FluxResponse>);

#[derive(Debug, Clone)]
pub struct FluxClient {
    client: Client,
    endpoint: Url,
}

impl FluxClient {
    /// `endpoint` must be an absolute URL such as
    /// `http://localhost:8042/api/flux`.
    pub fn new(client: Client, endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint)?;
        Ok(FluxClient { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn request_url(&self, query: &FluxQuery) -> Url {
        let mut url = self.endpoint.clone();
        url.set_query(Some(&query.query_string()));
        url
    }

    pub async fn fetch(&self, query: &FluxQuery) -> Result<FluxResponse> {
        let url = self.request_url(query);
        info!("Requesting {}", url);
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            warn!("Flux service answered {}", response.status());
            return Err(FluxError::HttpStatus(response.status().as_u16()));
        }
        let body = response.text().await?;
        FluxResponse::from_json(&body)
    }
}

pub struct FluxSession {
    client: FluxClient,
    tracker: RequestTracker,
    in_flight: Option<JoinHandle<()>>,
    tx: mpsc::UnboundedSender<Outcome>,
    rx: mpsc::UnboundedReceiver<Outcome>,
}

impl FluxSession {
    pub fn new(client: FluxClient) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        FluxSession {
            client,
            tracker: RequestTracker::new(),
            in_flight: None,
            tx,
            rx,
        }
    }

    pub fn client(&self) -> &FluxClient {
        &self.client
    }

    /// Send a request. A request still in flight is aborted first.
    pub fn submit(&mut self, query: FluxQuery) -> Ticket {
        if let Some(previous) = self.cancel() {
            info!("Request #{} superseded", previous.id());
        }
        let ticket = self.tracker.begin();
        let client = self.client.clone();
        let tx = self.tx.clone();
        self.in_flight = Some(tokio::spawn(async move {
            let outcome = client.fetch(&query).await;
            // The receiver lives as long as the session.
            let _ = tx.send((ticket, outcome));
        }));
        ticket
    }

    /// Abort the request in flight, if any, and return its ticket.
    pub fn cancel(&mut self) -> Option<Ticket> {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
        self.tracker.cancel()
    }

    pub fn is_pending(&self) -> bool {
        self.tracker.pending().is_some()
    }

    /// Wait for the result of the latest submission. Returns `None` right
    /// away when nothing is pending.
    pub async fn next_result(&mut self) -> Option<Outcome> {
        while self.tracker.pending().is_some() {
            let (ticket, outcome) = self.rx.recv().await?;
            if self.tracker.accept(ticket) {
                self.in_flight = None;
                return Some((ticket, outcome));
            }
            info!("Dropping stale result of request #{}", ticket.id());
        }
        None
    }
}

impl Drop for FluxSession {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FluxForm;
    use chrono::NaiveDate;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const OK_BODY: &str = r#"{"status":"OK","graph":"/tmp/flux.png","flux":[{"time":"2012-08-12 22:00","sollon":140.1,"teff":3.5,"eca":21.2,"met":44,"flux":2.1,"e_flux":0.4,"zhr":98}]}"#;

    /// Serve canned responses; requests for shower SLOW are held back.
    async fn serve(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, mpsc::UnboundedReceiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (seen_tx, seen_rx) = mpsc::unbounded_channel();
        tokio::spawn(async move {
            loop {
                let (mut socket, _) = match listener.accept().await {
                    Ok(conn) => conn,
                    Err(_) => return,
                };
                let seen_tx = seen_tx.clone();
                tokio::spawn(async move {
                    let mut buf = vec![0u8; 8192];
                    let n = socket.read(&mut buf).await.unwrap_or(0);
                    let request = String::from_utf8_lossy(&buf[..n]).to_string();
                    let request_line = request.lines().next().unwrap_or_default().to_string();
                    let _ = seen_tx.send(request_line.clone());
                    if request_line.contains("shower=SLOW") {
                        tokio::time::sleep(Duration::from_secs(30)).await;
                    }
                    let response = format!(
                        "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        status_line,
                        body.len(),
                        body
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });
        (format!("http://{}/api/flux", addr), seen_rx)
    }

    fn client(endpoint: &str) -> FluxClient {
        let http = Client::builder().no_proxy().build().unwrap();
        FluxClient::new(http, endpoint).unwrap()
    }

    fn query(shower: &str) -> FluxQuery {
        let today = NaiveDate::from_ymd_opt(2012, 10, 2).unwrap();
        FluxQuery::from_form(&FluxForm::new(&today).with_shower(shower, &today))
    }

    #[test]
    fn test_rejects_relative_endpoint() {
        let err = FluxClient::new(Client::new(), "/api/flux").unwrap_err();
        assert!(matches!(err, FluxError::InvalidEndpoint(_)));
    }

    #[test]
    fn test_request_url() {
        let client = client("http://localhost:8042/api/flux");
        let url = client.request_url(&query("PER"));
        assert_eq!(url.path(), "/api/flux");
        assert!(url
            .query()
            .unwrap()
            .starts_with("shower=PER&start=2012-07-17T12%3A00%3A00"));
    }

    #[tokio::test]
    async fn test_fetch_ok() {
        let (endpoint, mut seen) = serve("HTTP/1.1 200 OK", OK_BODY).await;
        let response = client(&endpoint).fetch(&query("PER")).await.unwrap();
        assert_eq!(response.status(), "OK");
        let request_line = seen.recv().await.unwrap();
        assert!(request_line.starts_with("GET /api/flux?shower=PER&start="));
    }

    #[tokio::test]
    async fn test_fetch_service_error_is_a_response() {
        let (endpoint, _seen) =
            serve("HTTP/1.1 200 OK", r#"{"status":"ERROR","msg":"Invalid parameters."}"#).await;
        let response = client(&endpoint).fetch(&query("PER")).await.unwrap();
        assert_eq!(response.failure_message(), Some("Invalid parameters."));
    }

    #[tokio::test]
    async fn test_fetch_http_status() {
        let (endpoint, _seen) = serve("HTTP/1.1 500 Internal Server Error", "oops").await;
        let err = client(&endpoint).fetch(&query("PER")).await.unwrap_err();
        assert!(matches!(err, FluxError::HttpStatus(500)));
    }

    #[tokio::test]
    async fn test_fetch_malformed_body() {
        let (endpoint, _seen) = serve("HTTP/1.1 200 OK", "not json").await;
        let err = client(&endpoint).fetch(&query("PER")).await.unwrap_err();
        assert!(matches!(err, FluxError::Decode(_)));
    }

    #[tokio::test]
    async fn test_session_last_submission_wins() {
        let (endpoint, mut seen) = serve("HTTP/1.1 200 OK", OK_BODY).await;
        let mut session = FluxSession::new(client(&endpoint));

        let slow = session.submit(query("SLOW"));
        // Make sure the slow request reached the server before superseding it.
        let first_line = seen.recv().await.unwrap();
        assert!(first_line.contains("shower=SLOW"));

        let fast = session.submit(query("PER"));
        assert_ne!(slow, fast);

        let (ticket, outcome) = tokio::time::timeout(Duration::from_secs(10), session.next_result())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(ticket, fast);
        assert_eq!(outcome.unwrap().status(), "OK");
        assert!(!session.is_pending());
        assert!(session.next_result().await.is_none());
    }

    #[tokio::test]
    async fn test_session_cancel() {
        let (endpoint, mut seen) = serve("HTTP/1.1 200 OK", OK_BODY).await;
        let mut session = FluxSession::new(client(&endpoint));

        let ticket = session.submit(query("SLOW"));
        seen.recv().await.unwrap();
        assert!(session.is_pending());
        assert_eq!(session.cancel(), Some(ticket));
        assert!(!session.is_pending());

        let result = tokio::time::timeout(Duration::from_secs(1), session.next_result())
            .await
            .unwrap();
        assert!(result.is_none());
    }
}
