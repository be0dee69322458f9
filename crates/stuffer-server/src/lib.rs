//! # `stuffer-server`: Random Blob Streaming over HTTP
//!
//! `stuffer-server` answers every request carrying `?bytes=N` with exactly `N`
//! pseudo-random bytes, built on [`stuffer_core`] for generation and [`axum`]
//! for HTTP/1.1 transport. It exists to saturate a network path with
//! incompressible data for throughput testing.
//!
//! ## Highlights
//!
//! - **Single catch-all route**: any method, any path.
//! - **Exact framing**: `Content-Length` equals the requested count and
//!   `Connection: close` is always set.
//! - **Bounded memory**: bodies are generated chunk by chunk and queued
//!   through a small bounded channel, so a multi-gigabyte response costs a
//!   few chunks of memory.
//! - **Backpressure aware**: a slow client only slows its own producer.
//! - **Graceful shutdown** on Ctrl+C or SIGTERM.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin stuffer-server --release
//! curl -o /dev/null 'http://127.0.0.1:9395/?bytes=1073741824'
//! ```
//!
//! ## Module Overview
//!
//! - [`server::config`] - CLI/environment configuration.
//! - [`server::service`] - Router and request handler.
//! - [`server::streaming`] - Response body producer and channel sink.
//! - [`server::telemetry`] - Logging and optional metrics.

pub mod server;
