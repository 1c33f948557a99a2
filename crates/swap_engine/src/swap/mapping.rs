//! Swap mapping configuration

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::MappingError;

/// One render-name / export-name pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    /// Material used for rendering/baking
    pub render: String,
    /// Material used for external export
    pub export: String,
}

impl MappingEntry {
    /// Create a new mapping entry
    pub fn new(render: impl Into<String>, export: impl Into<String>) -> Self {
        Self {
            render: render.into(),
            export: export.into(),
        }
    }
}

/// Ordered, validated collection of swap pairs
///
/// Defined once at configuration time and read-only afterwards. Validation
/// guarantees no material name appears twice anywhere across the entries,
/// so a swap can never cascade through chained pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwapMapping {
    entries: Vec<MappingEntry>,
}

impl SwapMapping {
    /// Create a validated mapping from an ordered entry list
    ///
    /// # Errors
    /// Returns [`MappingError::RepeatedName`] if any material name occurs
    /// more than once, counting both sides of every entry.
    pub fn new(entries: Vec<MappingEntry>) -> Result<Self, MappingError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            for name in [&entry.render, &entry.export] {
                if !seen.insert(name.as_str()) {
                    return Err(MappingError::RepeatedName(name.clone()));
                }
            }
        }

        Ok(Self { entries })
    }

    /// The entries, in configuration order
    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the mapping has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_mapping() {
        let mapping = SwapMapping::new(vec![
            MappingEntry::new("red_mat", "blue_mat"),
            MappingEntry::new("green_mat", "yellow_mat"),
        ])
        .unwrap();

        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.entries()[0].render, "red_mat");
    }

    #[test]
    fn test_empty_mapping_is_valid() {
        let mapping = SwapMapping::new(Vec::new()).unwrap();
        assert!(mapping.is_empty());
    }

    #[test]
    fn test_repeated_render_name_rejected() {
        let err = SwapMapping::new(vec![
            MappingEntry::new("red_mat", "blue_mat"),
            MappingEntry::new("red_mat", "yellow_mat"),
        ])
        .unwrap_err();

        assert_eq!(err, MappingError::RepeatedName("red_mat".to_string()));
    }

    #[test]
    fn test_name_on_both_sides_rejected() {
        // "blue_mat" as one entry's export and another's render would make
        // repeated application cascade through the chain.
        let err = SwapMapping::new(vec![
            MappingEntry::new("red_mat", "blue_mat"),
            MappingEntry::new("blue_mat", "yellow_mat"),
        ])
        .unwrap_err();

        assert_eq!(err, MappingError::RepeatedName("blue_mat".to_string()));
    }

    #[test]
    fn test_self_pair_rejected() {
        let err = SwapMapping::new(vec![MappingEntry::new("red_mat", "red_mat")]).unwrap_err();
        assert_eq!(err, MappingError::RepeatedName("red_mat".to_string()));
    }
}
