//! Foundation utilities
//!
//! Shared building blocks used by the rest of the crate: handle-based
//! collections and logging setup.

pub mod collections;
pub mod logging;
