use super::sink::ChannelSink;
use crate::server::telemetry::{
    decrement_streams_inflight, increment_bytes_streamed, increment_stream_errors,
    increment_streams_inflight, record_stream_duration,
};
use std::time::Instant;
use stuffer_core::{BlobStreamer, Result, StreamRequest, StreamSummary};

/// Drives one request's body from start to finish.
///
/// Runs the [`BlobStreamer`] against the response channel and records the
/// outcome. The stream is sequential: a chunk is generated only after the
/// previous one has been accepted by the channel, so a slow client throttles
/// only its own producer.
///
/// # Behavior
///
/// - Publishes the response head, then every chunk, through `sink`.
/// - On a write failure (client disconnect), stops immediately and returns
///   the error. Nothing is retried and the announced length is left as is.
/// - Dropping `sink` on return closes the body, ending the response.
pub async fn feed_body(
    streamer: BlobStreamer,
    request: StreamRequest,
    mut sink: ChannelSink,
) -> Result<StreamSummary> {
    let start = Instant::now();
    increment_streams_inflight();

    let result = streamer.stream(request, &mut sink).await;

    decrement_streams_inflight();
    match &result {
        Ok(summary) => {
            increment_bytes_streamed(summary.bytes_written);
            record_stream_duration(start.elapsed().as_millis() as f64);
            tracing::debug!(
                bytes = summary.bytes_written,
                chunks = summary.chunks_written,
                "stream finished"
            );
        }
        Err(e) => {
            increment_stream_errors();
            tracing::debug!("stream aborted: {e}");
        }
    }

    result
}
