//! Browser adapter: reads slider state out of the document and writes results back.
//!
//! Everything here is a thin shell around [`crate::core`]; anomalies in the page
//! skip only the affected update and are logged at `debug`.

pub mod error;
pub mod init;
pub mod markers;
pub mod slider;

pub use error::DomError;
pub use init::{init_sliders, initialize_all, load_config, run_app, sync_slider};
pub use slider::sync_control;
