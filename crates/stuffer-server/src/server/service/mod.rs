//! HTTP service implementation.
//!
//! This module contains the client-facing request handling: query validation,
//! spawning of the per-request producer, and the router that sends every path
//! to it.
//!
//! ## Structure
//!
//! - [`handler`] - HTTP service entry point (`BlobService`).

pub mod handler;
