//! Scene graph module
//!
//! Manages the hierarchy the animation core plugs into:
//! - Node: scene node (parent/child links and a transform)
//! - Transform: TRS component with cached local/world matrices
//! - Scene: node container
//! - Skeleton: bone list + inverse bind matrices for skinning
//! - `transform_system`: decoupled world-matrix propagation

pub mod node;
pub mod scene;
pub mod skeleton;
pub mod transform;
pub mod transform_system;

pub use node::Node;
pub use scene::Scene;
pub use skeleton::Skeleton;
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    /// Generational handle to a [`Node`] in a scene's node arena.
    ///
    /// Handles are weak: removing the node invalidates the handle, and
    /// resolving it afterwards yields `None` rather than a stale
    /// reference. Bone lists and animators hold these.
    pub struct NodeHandle;
}
