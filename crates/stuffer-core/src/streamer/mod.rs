use crate::{
    common::{Result, StreamConfig, StreamHead, StreamRequest, StreamSummary},
    sink::ByteSink,
};
use bytes::{Bytes, BytesMut};
use rand::{RngCore, SeedableRng, rngs::SmallRng};


/// Streams a requested number of random bytes into a [`ByteSink`].
///
/// The body is produced in chunks of [`StreamConfig::chunk_size`] bytes plus a
/// final shorter remainder, so memory use is bounded by the chunk size and
/// not by the request. Every chunk, the remainder included, is filled with
/// freshly generated bytes.
///
/// Streamers hold no per-request state and are cheap to clone, so one instance
/// can serve any number of concurrent requests.
#[derive(Clone, Copy, Debug, Default)]
pub struct BlobStreamer {
    config: StreamConfig,
}

impl BlobStreamer {
    pub const fn new(config: StreamConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &StreamConfig {
        &self.config
    }

    /// Streams `request` into `sink` using a fresh non-cryptographic RNG.
    ///
    /// The RNG is seeded from the thread-local generator per call; no
    /// generator is shared between requests.
    ///
    /// # Errors
    ///
    /// Returns the sink's [`Error::WriteFailure`](crate::Error::WriteFailure)
    /// as soon as any write fails. No further chunks are attempted.
    pub async fn stream<S>(&self, request: StreamRequest, sink: &mut S) -> Result<StreamSummary>
    where
        S: ByteSink,
    {
        let mut rng = SmallRng::from_rng(&mut rand::rng());
        self.stream_with_rng(request, sink, &mut rng).await
    }

    /// Like [`stream`](Self::stream), but draws bytes from `rng`.
    #[tracing::instrument(level = "trace", skip_all, fields(bytes = request.requested_bytes()))]
    pub async fn stream_with_rng<S, R>(
        &self,
        request: StreamRequest,
        sink: &mut S,
        rng: &mut R,
    ) -> Result<StreamSummary>
    where
        S: ByteSink,
        R: RngCore + Send,
    {
        let total = request.requested_bytes();
        let chunk_size = self.config.chunk_size();
        let whole_chunks = total / chunk_size as u64;
        // Strictly less than `chunk_size`, so it fits a usize.
        let remainder = (total % chunk_size as u64) as usize;

        sink.write_head(StreamHead::new(total))?;

        let mut summary = StreamSummary::default();
        for _ in 0..whole_chunks {
            sink.write_chunk(random_chunk(rng, chunk_size)).await?;
            summary.record(chunk_size);
        }

        if remainder > 0 {
            sink.write_chunk(random_chunk(rng, remainder)).await?;
            summary.record(remainder);
        }

        debug_assert_eq!(summary.bytes_written, total);
        tracing::trace!(chunks = summary.chunks_written, "stream complete");
        Ok(summary)
    }
}

/// Allocates a `len`-byte chunk and fills it with random bytes.
fn random_chunk<R: RngCore + ?Sized>(rng: &mut R, len: usize) -> Bytes {
    let mut buf = BytesMut::zeroed(len);
    rng.fill_bytes(&mut buf);
    buf.freeze()
}
