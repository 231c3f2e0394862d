//! HTTP API gateway for the Quill encode/decode engine.
//!
//! Exposes the `quill-core` registry over JSON endpoints and keeps
//! in-memory usage counters for them.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod routes;
pub mod usage;
