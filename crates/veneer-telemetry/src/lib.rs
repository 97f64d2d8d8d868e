#![forbid(unsafe_code)]
#![deny(
    unused_imports,
    unused_must_use,
    unreachable_pub,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]

//! Telemetry primitives shared across the Veneer workspace.
//!
//! Centralises logging setup so the browser bundle and native test harnesses
//! install the same `tracing` subscriber shape.

pub mod error;
pub mod init;

#[cfg(target_arch = "wasm32")]
mod console;

pub use error::{Result, TelemetryError};
pub use init::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, init_logging};
