//! Response body production.
//!
//! - [`sink`] - Channel-backed [`ByteSink`](stuffer_core::ByteSink) that feeds
//!   an axum response body.
//! - [`coordinator`] - Per-request producer task wrapping the streamer with
//!   logging and metrics.

pub mod coordinator;
pub mod sink;
