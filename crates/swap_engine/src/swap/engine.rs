//! Swap engine implementation

use serde::{Deserialize, Serialize};

use crate::materials::MaterialRegistry;
use crate::scene::{ObjectId, Scene};

use super::{EntryOutcome, SwapError, SwapMapping, SwapReport};

/// How an object's slot list is matched against a material name
///
/// Reassignment always targets slot 0 regardless of mode, so matching
/// beyond the primary slot can move a material "up" from a secondary slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// Match only when slot 0 carries the material
    PrimarySlot,
    /// Match when any slot carries the material
    AnySlot,
}

impl Default for MatchMode {
    fn default() -> Self {
        // The mode that keeps matching consistent with what reassignment
        // mutates; AnySlot is an explicit opt-in.
        Self::PrimarySlot
    }
}

/// Swap engine configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwapConfig {
    /// Slot-matching mode used by every scan
    pub match_mode: MatchMode,
}

/// Which side of the mapping is being assigned
#[derive(Debug, Clone, Copy)]
enum SwapDirection {
    ToRender,
    ToExport,
}

impl SwapDirection {
    /// Split an entry into (source, target) names for this direction
    fn pair<'a>(self, render: &'a str, export: &'a str) -> (&'a str, &'a str) {
        match self {
            Self::ToRender => (export, render),
            Self::ToExport => (render, export),
        }
    }
}

/// The material swap engine
///
/// Holds only configuration; scene and registry are borrowed per
/// invocation, so one engine can serve any number of swaps. Each swap is a
/// single synchronous pass over the scene in scan order.
#[derive(Debug, Clone, Default)]
pub struct SwapEngine {
    config: SwapConfig,
}

impl SwapEngine {
    /// Create an engine with default configuration
    pub fn new() -> Self {
        Self::with_config(SwapConfig::default())
    }

    /// Create an engine with custom configuration
    pub fn with_config(config: SwapConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration
    pub fn config(&self) -> &SwapConfig {
        &self.config
    }

    /// Find all objects whose slots match the given material name
    ///
    /// Objects without a slot list, and objects with an empty one, are
    /// skipped. Results are in scan order. Zero matches is a valid outcome,
    /// as is a name unknown to the registry (nothing can carry it).
    pub fn find_objects_by_material(
        &self,
        scene: &Scene,
        registry: &MaterialRegistry,
        material_name: &str,
    ) -> Vec<ObjectId> {
        let Some(wanted) = registry.resolve(material_name) else {
            return Vec::new();
        };

        scene
            .objects()
            .filter(|object| {
                object.slots().is_some_and(|slots| match self.config.match_mode {
                    MatchMode::PrimarySlot => slots.first() == Some(&wanted),
                    MatchMode::AnySlot => slots.contains(&wanted),
                })
            })
            .map(crate::scene::SceneObject::id)
            .collect()
    }

    /// Overwrite slot 0 on each object with the named material
    ///
    /// The name is resolved before anything is mutated, so an unresolved
    /// target leaves every object untouched. Other slots are never written.
    /// The replaced material is NOT pinned with a keep-alive flag; if the
    /// swap leaves it without users, the host's unused-asset sweep may
    /// discard it (known limitation).
    ///
    /// # Errors
    /// Returns [`SwapError::UnresolvedMaterial`] if the name is not
    /// registered.
    pub fn reassign_primary_slot(
        &self,
        scene: &mut Scene,
        registry: &MaterialRegistry,
        objects: &[ObjectId],
        material_name: &str,
    ) -> Result<(), SwapError> {
        let material = registry
            .resolve(material_name)
            .ok_or_else(|| SwapError::UnresolvedMaterial(material_name.to_string()))?;

        for &id in objects {
            match scene.object_mut(id) {
                Some(object) => {
                    if !object.set_primary_material(material) {
                        log::debug!("Object '{}' has no slot 0 to overwrite", object.name);
                    }
                }
                None => log::debug!("Object {:?} no longer in scene, skipping", id),
            }
        }

        Ok(())
    }

    /// Switch every mapped object to its render/bake material
    ///
    /// For each mapping entry in order: objects currently on the export
    /// material get their primary slot reassigned to the render material.
    /// One outcome is recorded per entry; a failed entry never blocks the
    /// remaining ones.
    pub fn swap_to_render_materials(
        &self,
        scene: &mut Scene,
        registry: &MaterialRegistry,
        mapping: &SwapMapping,
    ) -> SwapReport {
        self.apply(scene, registry, mapping, SwapDirection::ToRender)
    }

    /// Switch every mapped object to its export material
    ///
    /// Symmetric to [`swap_to_render_materials`](Self::swap_to_render_materials).
    pub fn swap_to_export_materials(
        &self,
        scene: &mut Scene,
        registry: &MaterialRegistry,
        mapping: &SwapMapping,
    ) -> SwapReport {
        self.apply(scene, registry, mapping, SwapDirection::ToExport)
    }

    fn apply(
        &self,
        scene: &mut Scene,
        registry: &MaterialRegistry,
        mapping: &SwapMapping,
        direction: SwapDirection,
    ) -> SwapReport {
        let mut report = SwapReport::new();

        for entry in mapping.entries() {
            let (source, target) = direction.pair(&entry.render, &entry.export);

            let objects = self.find_objects_by_material(scene, registry, source);
            if objects.is_empty() {
                log::warn!("No objects to assign {}", target);
                report.push(source.to_string(), target.to_string(), EntryOutcome::NoMatches);
                continue;
            }

            match self.reassign_primary_slot(scene, registry, &objects, target) {
                Ok(()) => {
                    log::info!("Assigning {} to {} objects", target, objects.len());
                    report.push(
                        source.to_string(),
                        target.to_string(),
                        EntryOutcome::Assigned {
                            count: objects.len(),
                        },
                    );
                }
                Err(err) => {
                    log::error!("Failed to assign {}: {}", target, err);
                    report.push(source.to_string(), target.to_string(), EntryOutcome::Failed(err));
                }
            }
        }

        report
    }
}
