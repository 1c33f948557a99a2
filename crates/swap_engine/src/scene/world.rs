//! Scene collection implementation

use crate::materials::MaterialHandle;

use super::{ObjectId, SceneObject};

/// The active scene: an ordered collection of scene objects
///
/// Iteration order is insertion order, which is also the scan order every
/// material query reports matches in.
pub struct Scene {
    next_object_id: u32,
    objects: Vec<SceneObject>,
}

impl Scene {
    /// Create a new empty scene
    pub fn new() -> Self {
        Self {
            next_object_id: 0,
            objects: Vec::new(),
        }
    }

    /// Add an object with no material-slot list (camera, light, empty)
    pub fn add_object(&mut self, name: impl Into<String>) -> ObjectId {
        self.insert(name, None)
    }

    /// Add an object carrying the given material slots
    pub fn add_object_with_slots(
        &mut self,
        name: impl Into<String>,
        slots: Vec<MaterialHandle>,
    ) -> ObjectId {
        self.insert(name, Some(slots))
    }

    fn insert(&mut self, name: impl Into<String>, slots: Option<Vec<MaterialHandle>>) -> ObjectId {
        let id = ObjectId::new(self.next_object_id);
        self.next_object_id += 1;
        self.objects.push(SceneObject::new(id, name, slots));
        id
    }

    /// Get an object by ID
    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.iter().find(|object| object.id() == id)
    }

    /// Get a mutable object by ID
    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|object| object.id() == id)
    }

    /// Remove an object by ID, returning it if present
    pub fn remove_object(&mut self, id: ObjectId) -> Option<SceneObject> {
        let index = self.objects.iter().position(|object| object.id() == id)?;
        Some(self.objects.remove(index))
    }

    /// Iterate over all objects in scan order
    pub fn objects(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter()
    }

    /// Number of objects in the scene
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Check whether the scene is empty
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
