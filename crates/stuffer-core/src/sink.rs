//! Output abstraction for generated streams.
//!
//! A [`ByteSink`] is an ordered destination for one response: it first
//! receives a [`StreamHead`] and then a sequence of body chunks. Any failure
//! it reports is final for the stream. Callers never retry a rejected write.

use crate::common::{Result, StreamHead};
use bytes::Bytes;
use core::future::Future;

/// An ordered, single-response destination for streamed bytes.
///
/// This abstraction lets the streamer drive a real HTTP body or a recording
/// sink in tests without knowing which one it has.
pub trait ByteSink: Send {
    /// Publishes the response head. Called exactly once, before any chunk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WriteFailure`](crate::Error::WriteFailure) if the
    /// receiving side is already gone.
    fn write_head(&mut self, head: StreamHead) -> Result<()>;

    /// Writes one chunk in full, waiting for capacity if the sink is
    /// backpressured.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WriteFailure`](crate::Error::WriteFailure) if the chunk
    /// cannot be delivered. The sink must be considered closed afterwards.
    fn write_chunk(&mut self, chunk: Bytes) -> impl Future<Output = Result<()>> + Send;
}
