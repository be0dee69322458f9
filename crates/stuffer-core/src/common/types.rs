//! # Shared Stream Types and Constants
//!
//! This module defines the configuration and metadata types passed between the
//! streamer and whatever transport carries its output. They fix the contract
//! for how a stream is sized and announced before any body bytes move.
//!
//! ## Types
//!
//! - [`StreamConfig`] - Chunk sizing for a [`BlobStreamer`]
//! - [`StreamHead`] - Response metadata emitted before the body
//! - [`StreamSummary`] - What a completed stream actually wrote
//!
//! ## Constants
//!
//! - [`DEFAULT_CHUNK_SIZE`] - Bytes generated and written per step (1 MiB)
//! - [`BYTES_PARAM`] - Name of the query parameter carrying the byte count
//!
//! [`BlobStreamer`]: crate::BlobStreamer

use axum::http::{HeaderMap, HeaderValue, header};
use core::num::NonZeroUsize;

/// Number of bytes generated and written per chunk unless configured
/// otherwise.
///
/// Peak memory for one stream is proportional to this value, never to the
/// requested total.
pub const DEFAULT_CHUNK_SIZE: NonZeroUsize = NonZeroUsize::new(1024 * 1024).unwrap();

/// Query parameter that carries the requested byte count.
pub const BYTES_PARAM: &str = "bytes";

/// Content type announced for generated bodies.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Tunables for a [`BlobStreamer`](crate::BlobStreamer).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StreamConfig {
    chunk_size: NonZeroUsize,
}

impl StreamConfig {
    pub const fn new(chunk_size: NonZeroUsize) -> Self {
        Self { chunk_size }
    }

    /// Size in bytes of every full chunk handed to the sink.
    pub const fn chunk_size(&self) -> usize {
        self.chunk_size.get()
    }
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_SIZE)
    }
}

/// Response-level metadata a streamer emits before the first body byte.
///
/// The content length is fixed up front; once the head is out it cannot be
/// amended, even if the body is later cut short.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StreamHead {
    pub content_length: u64,
    pub connection_close: bool,
}

impl StreamHead {
    pub const fn new(content_length: u64) -> Self {
        Self {
            content_length,
            connection_close: true,
        }
    }

    /// Writes this head into an HTTP header map.
    pub fn apply(&self, headers: &mut HeaderMap) {
        if self.connection_close {
            headers.insert(header::CONNECTION, HeaderValue::from_static("close"));
        }
        headers.insert(
            header::CONTENT_LENGTH,
            HeaderValue::from(self.content_length),
        );
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(OCTET_STREAM));
    }
}

/// Totals for a stream that ran to completion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StreamSummary {
    pub bytes_written: u64,
    pub chunks_written: u64,
}

impl StreamSummary {
    pub(crate) const fn record(&mut self, len: usize) {
        self.bytes_written += len as u64;
        self.chunks_written += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_chunk_size_is_one_mebibyte() {
        assert_eq!(StreamConfig::default().chunk_size(), 1_048_576);
    }

    #[test]
    fn head_sets_exact_content_length_and_close() {
        let mut headers = HeaderMap::new();
        StreamHead::new(123_456_789_012).apply(&mut headers);

        assert_eq!(headers[header::CONTENT_LENGTH], "123456789012");
        assert_eq!(headers[header::CONNECTION], "close");
        assert_eq!(headers[header::CONTENT_TYPE], OCTET_STREAM);
    }

    #[test]
    fn zero_length_head() {
        let mut headers = HeaderMap::new();
        StreamHead::new(0).apply(&mut headers);
        assert_eq!(headers[header::CONTENT_LENGTH], "0");
    }
}
