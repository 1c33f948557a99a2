//! Material system
//!
//! Material definitions and the host-owned registry that resolves material
//! names to stable, assignable handles.

pub mod material;
pub mod registry;

// Re-export commonly used types
pub use material::Material;
pub use registry::{MaterialError, MaterialHandle, MaterialRegistry};
