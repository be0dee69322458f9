//! HTTP service implementation for random blob streaming.
//!
//! This module defines [`BlobService`], the shared state behind the server's
//! single catch-all route, and [`stream_blob`], the axum handler that answers
//! `?bytes=N` with exactly `N` random bytes.
//!
//! ## Responsibilities
//!
//! - Validate the `bytes` query parameter and enforce the optional ceiling.
//! - Spawn one producer task per request via [`feed_body`].
//! - Hand the response head and streaming body back to the transport.

use crate::server::{
    config::ServerConfig,
    streaming::{coordinator::feed_body, sink::ChannelSink},
    telemetry::{increment_requests, increment_stream_errors, record_bytes_per_request},
};
use axum::{
    Router,
    extract::{Query, State, rejection::QueryRejection},
    response::Response,
};
use std::sync::Arc;
use stuffer_core::{BlobStreamer, Error, StreamRequest};
use tower_http::trace::TraceLayer;
use tracing::Instrument;

/// Shared state for the streaming endpoint.
///
/// Holds only immutable configuration; every request gets its own RNG,
/// buffers and channel, so clones are cheap and requests never contend.
#[derive(Clone)]
pub struct BlobService {
    config: Arc<ServerConfig>,
    streamer: BlobStreamer,
}

impl BlobService {
    pub fn new(config: ServerConfig) -> Self {
        let streamer = BlobStreamer::new(config.stream);
        Self {
            config: Arc::new(config),
            streamer,
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Builds the router: every path and method lands on [`stream_blob`].
    pub fn router(self) -> Router {
        Router::new()
            .fallback(stream_blob)
            .with_state(self)
            .layer(TraceLayer::new_for_http())
    }
}

/// Handles a request for `?bytes=N` random bytes.
///
/// Rejects a missing or malformed `bytes` parameter with
/// [`Error::BadRequest`] before any body is produced. Otherwise spawns a
/// producer task and returns as soon as it has published the response head;
/// the body follows as the client reads it.
pub async fn stream_blob(
    State(service): State<BlobService>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Response, Error> {
    let pairs = query.map(|Query(pairs)| pairs).unwrap_or_default();
    let request = StreamRequest::from_query_pairs(&pairs)
        .and_then(|request| request.ensure_within(service.config.max_bytes))
        .inspect_err(|e| {
            increment_stream_errors();
            tracing::debug!("rejected request: {e}");
        })?;

    increment_requests();
    record_bytes_per_request(request.requested_bytes() as f64);

    let (sink, pending) = ChannelSink::channel(service.config.stream_buffer_size);
    let span = tracing::info_span!("streaming", bytes = request.requested_bytes());
    tokio::spawn(feed_body(service.streamer, request, sink).instrument(span));

    pending.into_response().await
}
