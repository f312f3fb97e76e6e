//! Core of the meteor flux explorer.
//!
//! - `shower`: the embedded shower table and selection autofill
//! - `slider`, `duration`, `timestamp`: conversions from widget state to request values
//! - `form`, `query`: the immutable form state and the `/api/flux` parameter encoder
//! - `response`, `render`: the service's JSON payload and its HTML rendering
//! - `tracker`: single-flight request bookkeeping
//! - `client`: native HTTP client (behind the `api` feature)

pub mod duration;
pub mod error;
pub mod form;
pub mod query;
pub mod render;
pub mod response;
pub mod shower;
pub mod slider;
pub mod timestamp;
pub mod tracker;

#[cfg(feature = "api")]
pub mod client;

pub use error::{FluxError, Result};
