//! Error types for the random blob streaming service.
//!
//! This module defines the central `Error` enum, which captures every way a
//! stream request can be rejected or cut short. It implements
//! [`IntoResponse`] for `Error` so handlers can return it directly and clients
//! receive a plain-text reason with an appropriate status code.
//!
//! ## Error Cases
//! - `BadRequest`: The `bytes` query parameter is missing or is not a
//!   non-negative integer.
//! - `TooLarge`: The request exceeds the server's configured ceiling.
//! - `WriteFailure`: The output sink rejected a write (usually a client
//!   disconnect). Terminal for the stream it happened on.
//! - `StreamAborted`: The producer ended before emitting a response head.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for the blob streaming service.
#[derive(Clone, thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// The `bytes` parameter was absent or unparsable.
    #[error("?bytes= parameter is required")]
    BadRequest,

    /// The requested size is above the configured ceiling.
    #[error("Requested {requested} bytes exceeds maximum allowed ({max})")]
    TooLarge { requested: u64, max: u64 },

    /// The sink refused a write. Nothing more is written for this request.
    #[error("Write failed: {context}")]
    WriteFailure { context: String },

    /// The producer finished without handing over a response head.
    #[error("Stream aborted before the response head was produced")]
    StreamAborted,
}

impl Error {
    /// HTTP status reported to the client for this error.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::WriteFailure { .. } | Self::StreamAborted => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
