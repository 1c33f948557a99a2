//! Scene model
//!
//! The host-owned scene graph the swap engine operates on: an ordered
//! collection of objects, each optionally carrying an ordered list of
//! material slots. The engine holds only transient references to the scene
//! for the duration of one operation.

mod object;
mod world;

pub use object::{ObjectId, SceneObject};
pub use world::Scene;
