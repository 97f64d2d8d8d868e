//! Core, DOM-free primitives for slider synchronization.
pub mod bind;
pub mod config;
pub mod error;
pub mod marker;
pub mod numeric;
pub mod progress;
pub mod source;
pub mod state;
pub mod sync;
