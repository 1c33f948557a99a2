//! Per-entry swap outcome reporting
//!
//! A swap never fails fast: every mapping entry produces exactly one
//! outcome, and hosts surface the collected report through their own
//! notification mechanism.

use std::fmt;

use super::SwapError;

/// Severity of a single report entry, for the host's feedback channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Objects were reassigned
    Info,
    /// Nothing matched the entry's source material
    Warning,
    /// The entry failed and its objects were left untouched
    Error,
}

/// Outcome of applying one mapping entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    /// The target material was assigned to `count` objects
    Assigned {
        /// Number of objects whose primary slot was overwritten
        count: usize,
    },
    /// No object currently carries the source material; valid, not a failure
    NoMatches,
    /// The entry failed; remaining entries were still processed
    Failed(SwapError),
}

impl EntryOutcome {
    /// Severity this outcome is reported with
    pub fn severity(&self) -> Severity {
        match self {
            Self::Assigned { .. } => Severity::Info,
            Self::NoMatches => Severity::Warning,
            Self::Failed(_) => Severity::Error,
        }
    }
}

/// One mapping entry's result within a swap report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    /// Material name objects were matched against
    pub source: String,
    /// Material name assigned to the matched objects
    pub target: String,
    /// What happened for this entry
    pub outcome: EntryOutcome,
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            EntryOutcome::Assigned { count } => {
                write!(f, "Assigning {} to {} objects", self.target, count)
            }
            EntryOutcome::NoMatches => write!(f, "No objects to assign {}", self.target),
            EntryOutcome::Failed(err) => write!(f, "Failed to assign {}: {}", self.target, err),
        }
    }
}

/// Ordered collection of per-entry outcomes for one swap invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwapReport {
    entries: Vec<ReportEntry>,
}

impl SwapReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an outcome for one mapping entry
    pub(super) fn push(&mut self, source: String, target: String, outcome: EntryOutcome) {
        self.entries.push(ReportEntry {
            source,
            target,
            outcome,
        });
    }

    /// The per-entry outcomes, in mapping order
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// Total number of objects reassigned across all entries
    pub fn assigned_total(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| match entry.outcome {
                EntryOutcome::Assigned { count } => count,
                _ => 0,
            })
            .sum()
    }

    /// Number of entries reported at the given severity
    pub fn count_at(&self, severity: Severity) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.outcome.severity() == severity)
            .count()
    }

    /// Whether any entry failed
    pub fn has_failures(&self) -> bool {
        self.count_at(Severity::Error) > 0
    }

    /// Number of entries in the report
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the report has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_messages_and_severities() {
        let mut report = SwapReport::new();
        report.push(
            "blue_mat".to_string(),
            "red_mat".to_string(),
            EntryOutcome::Assigned { count: 3 },
        );
        report.push(
            "yellow_mat".to_string(),
            "green_mat".to_string(),
            EntryOutcome::NoMatches,
        );

        let entries = report.entries();
        assert_eq!(entries[0].to_string(), "Assigning red_mat to 3 objects");
        assert_eq!(entries[0].outcome.severity(), Severity::Info);
        assert_eq!(entries[1].to_string(), "No objects to assign green_mat");
        assert_eq!(entries[1].outcome.severity(), Severity::Warning);
    }

    #[test]
    fn test_report_totals() {
        let mut report = SwapReport::new();
        report.push(
            "a".to_string(),
            "b".to_string(),
            EntryOutcome::Assigned { count: 2 },
        );
        report.push(
            "c".to_string(),
            "d".to_string(),
            EntryOutcome::Failed(SwapError::UnresolvedMaterial("d".to_string())),
        );

        assert_eq!(report.assigned_total(), 2);
        assert_eq!(report.count_at(Severity::Info), 1);
        assert_eq!(report.count_at(Severity::Error), 1);
        assert!(report.has_failures());
        assert_eq!(report.len(), 2);
    }
}
