//! Material registry
//!
//! Centralized, host-owned storage mapping material names to assignable
//! handles. The swap engine resolves names through the registry but never
//! registers or removes materials itself.

use std::collections::HashMap;

use crate::foundation::collections::{HandleMap, TypedHandle};
use crate::scene::Scene;

use super::Material;

/// Stable, copyable reference to a registered material
pub type MaterialHandle = TypedHandle<Material>;

/// Errors raised by the material registry
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MaterialError {
    /// A material with the same name is already registered
    #[error("material '{0}' is already registered")]
    DuplicateName(String),
}

/// Central registry for material resources
///
/// Names are unique; resolving a name yields a handle that stays valid
/// until the material is removed by [`sweep_unused`](Self::sweep_unused).
pub struct MaterialRegistry {
    /// All registered materials
    materials: HandleMap<Material>,
    /// Name lookup index
    names: HashMap<String, MaterialHandle>,
}

impl MaterialRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            materials: HandleMap::new(),
            names: HashMap::new(),
        }
    }

    /// Register a new material
    ///
    /// # Errors
    /// Returns [`MaterialError::DuplicateName`] if a material with the same
    /// name is already registered.
    pub fn register(&mut self, material: Material) -> Result<MaterialHandle, MaterialError> {
        if self.names.contains_key(&material.name) {
            return Err(MaterialError::DuplicateName(material.name));
        }

        let name = material.name.clone();
        let handle = MaterialHandle::new(self.materials.insert(material));
        self.names.insert(name.clone(), handle);

        log::debug!("Registered material '{}'", name);

        Ok(handle)
    }

    /// Resolve a material name to an assignable handle
    pub fn resolve(&self, name: &str) -> Option<MaterialHandle> {
        self.names.get(name).copied()
    }

    /// Get a material by handle
    pub fn get(&self, handle: MaterialHandle) -> Option<&Material> {
        self.materials.get(handle.key())
    }

    /// Get the name of a material by handle
    pub fn name_of(&self, handle: MaterialHandle) -> Option<&str> {
        self.get(handle).map(|material| material.name.as_str())
    }

    /// Check whether a name is registered
    pub fn contains_name(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Pin or unpin a material (see [`Material::keep_alive`])
    ///
    /// Returns `false` if the handle is stale.
    pub fn set_keep_alive(&mut self, handle: MaterialHandle, keep_alive: bool) -> bool {
        match self.materials.get_mut(handle.key()) {
            Some(material) => {
                material.keep_alive = keep_alive;
                true
            }
            None => false,
        }
    }

    /// Get all registered handles, in no particular order
    pub fn handles(&self) -> impl Iterator<Item = MaterialHandle> + '_ {
        self.materials.keys().map(MaterialHandle::new)
    }

    /// Number of registered materials
    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    /// Check whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Discard materials that no object in the scene references and that are
    /// not pinned via [`Material::keep_alive`].
    ///
    /// This models the host's unused-asset collection on save/reload. The
    /// swap engine itself never calls this; it exists so hosts and tests can
    /// observe what happens to a material the swap left without users.
    ///
    /// Returns the names of the removed materials.
    pub fn sweep_unused(&mut self, scene: &Scene) -> Vec<String> {
        let referenced: std::collections::HashSet<MaterialHandle> = scene
            .objects()
            .filter_map(crate::scene::SceneObject::slots)
            .flat_map(|slots| slots.iter().copied())
            .collect();

        let doomed: Vec<MaterialHandle> = self
            .materials
            .iter()
            .filter(|(key, material)| {
                !material.keep_alive && !referenced.contains(&MaterialHandle::new(*key))
            })
            .map(|(key, _)| MaterialHandle::new(key))
            .collect();

        let mut removed = Vec::with_capacity(doomed.len());
        for handle in doomed {
            if let Some(material) = self.materials.remove(handle.key()) {
                self.names.remove(&material.name);
                log::debug!("Discarded unused material '{}'", material.name);
                removed.push(material.name);
            }
        }

        removed
    }
}

impl Default for MaterialRegistry {
    fn default() -> Self {
        Self::new()
    }
}
