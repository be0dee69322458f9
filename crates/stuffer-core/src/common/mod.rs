pub mod error;
pub mod request;
pub mod types;

pub use error::{Error, Result};
pub use request::StreamRequest;
pub use types::{
    BYTES_PARAM, DEFAULT_CHUNK_SIZE, OCTET_STREAM, StreamConfig, StreamHead, StreamSummary,
};
