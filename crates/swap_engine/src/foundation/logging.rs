//! Logging utilities
//!
//! The engine surfaces per-entry swap outcomes through the `log` facade;
//! hosts that want them on stderr can call [`init`] once at startup.

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
pub fn init() {
    env_logger::init();
}
