//! Material resource definition

/// A material resource owned by the host's global registry.
///
/// The swap engine only ever reads materials; it never creates or deletes
/// them. The name is the opaque identifier the swap mapping refers to and
/// must be unique within a [`registry`](super::MaterialRegistry).
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Registry-unique name
    pub name: String,
    /// Base color, for hosts that preview materials
    pub base_color: [f32; 3],
    /// Pin this material so the host keeps it across save/reload even when
    /// no object references it.
    ///
    /// The swap engine never sets this flag on materials it unassigns; a
    /// material left without users can be discarded by the host's unused
    /// asset sweep. See [`MaterialRegistry::sweep_unused`](super::MaterialRegistry::sweep_unused).
    pub keep_alive: bool,
}

impl Material {
    /// Create a new material with the given registry-unique name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_color: [1.0, 1.0, 1.0],
            keep_alive: false,
        }
    }

    /// Set the base color
    #[must_use]
    pub fn with_base_color(mut self, r: f32, g: f32, b: f32) -> Self {
        self.base_color = [r, g, b];
        self
    }

    /// Pin the material so it survives the host's unused asset sweep
    #[must_use]
    pub fn with_keep_alive(mut self) -> Self {
        self.keep_alive = true;
        self
    }
}
