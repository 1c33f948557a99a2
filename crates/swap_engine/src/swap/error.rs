//! Swap engine errors

/// Errors raised while validating a swap mapping
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// The same material name appears in more than one position across the
    /// mapping's entries (render and export names considered together).
    #[error("material name '{0}' appears more than once in the swap mapping")]
    RepeatedName(String),
}

/// Errors raised while applying a swap
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SwapError {
    /// The target material name could not be resolved in the registry.
    ///
    /// Recovered per mapping entry: the entry's objects are left untouched
    /// and the remaining entries are still processed.
    #[error("material '{0}' is not registered")]
    UnresolvedMaterial(String),
}
