//! Scene object implementation

use crate::materials::MaterialHandle;

/// Scene object identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId {
    id: u32,
}

impl ObjectId {
    /// Create a new object ID
    pub(super) fn new(id: u32) -> Self {
        Self { id }
    }

    /// Get the numeric ID
    pub fn id(&self) -> u32 {
        self.id
    }
}

/// An entity in the scene graph
///
/// Objects may or may not own a material-slot list; objects without one
/// (cameras, lights, empties) are skipped by every material scan. Slot 0,
/// when present, is the primary material.
#[derive(Debug, Clone)]
pub struct SceneObject {
    id: ObjectId,
    /// Object name, for diagnostics only; not required to be unique
    pub name: String,
    slots: Option<Vec<MaterialHandle>>,
}

impl SceneObject {
    pub(super) fn new(id: ObjectId, name: impl Into<String>, slots: Option<Vec<MaterialHandle>>) -> Self {
        Self {
            id,
            name: name.into(),
            slots,
        }
    }

    /// Get the object's ID
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Get the material-slot list, if the object owns one
    pub fn slots(&self) -> Option<&[MaterialHandle]> {
        self.slots.as_deref()
    }

    /// Whether this object owns a material-slot list at all
    pub fn has_slots(&self) -> bool {
        self.slots.is_some()
    }

    /// Get the primary (slot 0) material, if any
    pub fn primary_material(&self) -> Option<MaterialHandle> {
        self.slots.as_ref().and_then(|slots| slots.first().copied())
    }

    /// Overwrite slot 0 with a new material, leaving other slots untouched
    ///
    /// Returns `false` if the object has no slot 0 to overwrite.
    pub fn set_primary_material(&mut self, material: MaterialHandle) -> bool {
        match self.slots.as_mut().and_then(|slots| slots.first_mut()) {
            Some(slot) => {
                *slot = material;
                true
            }
            None => false,
        }
    }

    /// Append a material slot, creating the slot list if absent
    pub fn push_slot(&mut self, material: MaterialHandle) {
        self.slots.get_or_insert_with(Vec::new).push(material);
    }
}
