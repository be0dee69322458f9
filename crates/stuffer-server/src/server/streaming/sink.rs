use axum::{body::Body, response::Response};
use bytes::Bytes;
use core::{convert::Infallible, future::Future};
use stuffer_core::{ByteSink, Error, Result, StreamHead};
use tokio::sync::{mpsc, oneshot};
use tokio_stream::wrappers::ReceiverStream;

/// A [`ByteSink`] that feeds an HTTP response through bounded channels.
///
/// The head travels over a oneshot so the handler can build response headers
/// before the first chunk exists. Chunks travel over a bounded MPSC channel
/// that backs the response body; once it is full, writes wait for the client
/// to drain it. When the client goes away hyper drops the body, the receiver
/// closes and the next write fails.
pub struct ChannelSink {
    head_tx: Option<oneshot::Sender<StreamHead>>,
    body_tx: mpsc::Sender<core::result::Result<Bytes, Infallible>>,
}

/// The receiving half of a [`ChannelSink`], turned into a response once the
/// producer has published its head.
pub struct PendingResponse {
    head_rx: oneshot::Receiver<StreamHead>,
    body_rx: mpsc::Receiver<core::result::Result<Bytes, Infallible>>,
}

impl ChannelSink {
    /// Creates a sink that buffers at most `buffer` chunks ahead of the client.
    ///
    /// # Panics
    ///
    /// Panics if `buffer` is zero.
    pub fn channel(buffer: usize) -> (Self, PendingResponse) {
        let (head_tx, head_rx) = oneshot::channel();
        let (body_tx, body_rx) = mpsc::channel(buffer);
        (
            Self {
                head_tx: Some(head_tx),
                body_tx,
            },
            PendingResponse { head_rx, body_rx },
        )
    }
}

impl ByteSink for ChannelSink {
    fn write_head(&mut self, head: StreamHead) -> Result<()> {
        let head_tx = self.head_tx.take().ok_or_else(|| Error::WriteFailure {
            context: "response head already sent".to_string(),
        })?;
        head_tx.send(head).map_err(|_| Error::WriteFailure {
            context: "response dropped before head was sent".to_string(),
        })
    }

    fn write_chunk(&mut self, chunk: Bytes) -> impl Future<Output = Result<()>> + Send {
        async move {
            self.body_tx
                .send(Ok(chunk))
                .await
                .map_err(|e| Error::WriteFailure {
                    context: format!("client went away: {e}"),
                })
        }
    }
}

impl PendingResponse {
    /// Waits for the producer's head and builds a streaming response from it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StreamAborted`] if the producer ended without sending a
    /// head.
    pub async fn into_response(self) -> Result<Response> {
        let head = self.head_rx.await.map_err(|_| Error::StreamAborted)?;
        let body = Body::from_stream(ReceiverStream::new(self.body_rx));

        let mut response = Response::new(body);
        head.apply(response.headers_mut());
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{StatusCode, header};

    #[tokio::test]
    async fn head_and_chunks_reach_the_response() {
        let (mut sink, pending) = ChannelSink::channel(4);

        sink.write_head(StreamHead::new(6)).expect("head");
        sink.write_chunk(Bytes::from_static(b"abc")).await.expect("chunk");
        sink.write_chunk(Bytes::from_static(b"def")).await.expect("chunk");
        drop(sink);

        let response = pending.into_response().await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_LENGTH], "6");
        assert_eq!(response.headers()[header::CONNECTION], "close");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        assert_eq!(&body[..], b"abcdef");
    }

    #[tokio::test]
    async fn write_fails_once_receiver_is_gone() {
        let (mut sink, pending) = ChannelSink::channel(1);
        drop(pending);

        assert!(matches!(
            sink.write_head(StreamHead::new(1)),
            Err(Error::WriteFailure { .. })
        ));
        assert!(matches!(
            sink.write_chunk(Bytes::from_static(b"x")).await,
            Err(Error::WriteFailure { .. })
        ));
    }

    #[tokio::test]
    async fn head_can_only_be_sent_once() {
        let (mut sink, _pending) = ChannelSink::channel(1);
        sink.write_head(StreamHead::new(0)).expect("first head");
        assert!(matches!(
            sink.write_head(StreamHead::new(0)),
            Err(Error::WriteFailure { .. })
        ));
    }

    #[tokio::test]
    async fn missing_head_aborts_the_response() {
        let (sink, pending) = ChannelSink::channel(1);
        drop(sink);
        assert_eq!(pending.into_response().await.err(), Some(Error::StreamAborted));
    }
}
