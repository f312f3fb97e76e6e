/// Error types for the meteor flux crates
use thiserror::Error;

/// Main error type for flux operations
#[derive(Error, Debug)]
pub enum FluxError {
    /// HTTP request failed
    #[cfg(feature = "api")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success HTTP status
    #[error("Flux service returned HTTP {0}")]
    HttpStatus(u16),

    /// The request could not be sent or its body could not be read
    #[error("Could not reach the flux service: {0}")]
    Transport(String),

    /// The body was not a flux response
    #[error("Failed to decode flux response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured endpoint is not a valid absolute URL
    #[error("Invalid flux endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// Failed to parse the embedded shower table
    #[error("Failed to parse shower table: {0}")]
    ShowerTable(#[from] csv::Error),

    /// A shower table row is malformed
    #[error("Invalid shower record: {0}")]
    InvalidShower(String),
}

/// Type alias for Results using FluxError
pub type Result<T> = std::result::Result<T, FluxError>;
