#![doc = include_str!("../README.md")]

mod common;
mod sink;
mod streamer;

pub use common::*;
pub use sink::ByteSink;
pub use streamer::BlobStreamer;
