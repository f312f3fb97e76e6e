//! Dioxus components and browser bridge for the meteor flux explorer.
//!
//! This crate provides:
//! - `state`: Reactive AppState holding the immutable form and the result area
//! - `fetch`: `fetch()` bridge to `/api/flux` and single-flight submission
//! - `components`: Form widgets, result area and status displays

pub mod components;
pub mod fetch;
pub mod state;
