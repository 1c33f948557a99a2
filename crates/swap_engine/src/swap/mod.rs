//! Material swap engine
//!
//! The one meaningful behavior of this crate: given a static mapping from
//! render-material names to export-material names, find the scene objects
//! currently carrying one side of a pair and reassign their primary slot to
//! the other side, collecting a per-entry report instead of failing fast.

mod engine;
mod error;
mod mapping;
mod report;

#[cfg(test)]
mod tests;

pub use engine::{MatchMode, SwapConfig, SwapEngine};
pub use error::{MappingError, SwapError};
pub use mapping::{MappingEntry, SwapMapping};
pub use report::{EntryOutcome, ReportEntry, Severity, SwapReport};
