use glam::Affine3A;

use crate::scene::NodeHandle;
use crate::scene::transform::Transform;

/// A scene node: hierarchy links plus a local/world transform.
///
/// Nodes form a tree through parent/child handles. Only the data
/// traversed every frame lives here; skinning data is stored in
/// [`Skeleton`](crate::scene::Skeleton), which references bones as
/// plain nodes by handle.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) parent: Option<NodeHandle>,
    pub(crate) children: Vec<NodeHandle>,

    /// Optional name, used by [`Scene::find_by_name`](crate::scene::Scene::find_by_name).
    pub name: Option<String>,

    /// Transform component (hot data accessed every frame).
    pub transform: Transform,
}

impl Node {
    #[must_use]
    pub fn new() -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            name: None,
            transform: Transform::new(),
        }
    }

    #[must_use]
    pub fn with_name(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::new()
        }
    }

    /// Returns the parent node handle, if any.
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeHandle> {
        self.parent
    }

    /// Returns a read-only slice of child node handles.
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeHandle] {
        &self.children
    }

    /// World transformation matrix, valid after the last hierarchy
    /// update.
    #[inline]
    #[must_use]
    pub fn world_matrix(&self) -> &Affine3A {
        &self.transform.world_matrix
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}
