//! # Swap Engine
//!
//! A material-swap engine for content-authoring pipelines: toggles which
//! material is assigned to a set of scene objects, switching between a
//! "render/bake" material and an "export" material.
//!
//! ## Features
//!
//! - **Material Registry**: Handle-based, host-owned material storage
//! - **Scene Model**: Ordered object collection with per-object material slots
//! - **Swap Engine**: Bidirectional primary-slot reassignment with per-entry reporting
//! - **Command Capability**: Host-agnostic `{name, execute}` commands and a command table
//! - **Configuration**: TOML/RON mapping files instead of hard-coded lookups
//!
//! ## Quick Start
//!
//! ```rust
//! use swap_engine::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut registry = MaterialRegistry::new();
//! let bake = registry.register(Material::new("bake_mat"))?;
//! registry.register(Material::new("export_mat"))?;
//!
//! let mut scene = Scene::new();
//! scene.add_object_with_slots("hull", vec![bake]);
//!
//! let mapping = SwapMapping::new(vec![MappingEntry::new("bake_mat", "export_mat")])?;
//! let engine = SwapEngine::new();
//!
//! let report = engine.swap_to_export_materials(&mut scene, &registry, &mapping);
//! assert_eq!(report.assigned_total(), 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod commands;
pub mod config;
pub mod foundation;
pub mod materials;
pub mod scene;
pub mod swap;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        commands::{
            CommandContext, CommandError, CommandTable, SwapCommand, SwapToExportCommand,
            SwapToRenderCommand,
        },
        config::{Config, ConfigError, MappingConfig},
        materials::{Material, MaterialError, MaterialHandle, MaterialRegistry},
        scene::{ObjectId, Scene, SceneObject},
        swap::{
            EntryOutcome, MappingEntry, MappingError, MatchMode, ReportEntry, Severity,
            SwapConfig, SwapEngine, SwapError, SwapMapping, SwapReport,
        },
    };
}
