use glam::{Affine3A, Mat4};
use slotmap::SlotMap;

use crate::errors::{ArmatureError, Result};
use crate::scene::NodeHandle;
use crate::scene::node::Node;

/// Skinning binding: an ordered bone list plus the matching inverse
/// bind matrices.
///
/// `bones[i]` pairs with `inverse_bind_matrices[i]` and with joint
/// index `i` in the mesh's per-vertex bone-index/weight attributes.
/// The skeleton does not own bone lifetime — bones are plain nodes in
/// the scene arena and may be removed behind its back; a stale handle
/// degrades that one bone instead of failing the frame.
#[derive(Debug, Clone)]
pub struct Skeleton {
    pub name: String,

    // Ordered bone list; bones[i] corresponds to joint i in the mesh.
    bones: Vec<NodeHandle>,

    // Static after construction: maps a bind-pose vertex into the
    // corresponding bone's local space.
    inverse_bind_matrices: Vec<Affine3A>,
}

impl Skeleton {
    /// Both lists must pair up exactly; a length mismatch is rejected
    /// here, before the skeleton can ever be sampled.
    pub fn new(
        name: &str,
        bones: Vec<NodeHandle>,
        inverse_bind_matrices: Vec<Mat4>,
    ) -> Result<Self> {
        if bones.len() != inverse_bind_matrices.len() {
            return Err(ArmatureError::BoneOffsetCountMismatch {
                bones: bones.len(),
                offsets: inverse_bind_matrices.len(),
            });
        }

        Ok(Self {
            name: name.to_string(),
            bones,
            inverse_bind_matrices: inverse_bind_matrices
                .into_iter()
                .map(Affine3A::from_mat4)
                .collect(),
        })
    }

    #[inline]
    #[must_use]
    pub fn bone_count(&self) -> usize {
        self.bones.len()
    }

    #[inline]
    #[must_use]
    pub fn bones(&self) -> &[NodeHandle] {
        &self.bones
    }

    /// Computes the skinning matrix palette for the current pose:
    /// `palette[i] = world(bones[i]) * inverse_bind_matrices[i]`.
    ///
    /// Bone world matrices change every frame the hierarchy moves, so
    /// the palette is recomputed per call and never cached. A bone
    /// whose node has been removed contributes the identity matrix at
    /// its index and is reported through `log::warn!` — one stale bone
    /// degrades its own vertices, not the whole draw. The output is a
    /// plain matrix sequence in bone order, ready for an array-valued
    /// shader uniform.
    #[must_use]
    pub fn compute_palette(&self, nodes: &SlotMap<NodeHandle, Node>) -> Vec<Mat4> {
        let mut palette = Vec::with_capacity(self.bones.len());
        self.compute_palette_into(nodes, &mut palette);
        palette
    }

    /// [`compute_palette`](Self::compute_palette) into a caller-owned
    /// buffer (cleared first), so per-frame callers can reuse the
    /// allocation.
    pub fn compute_palette_into(&self, nodes: &SlotMap<NodeHandle, Node>, out: &mut Vec<Mat4>) {
        out.clear();
        out.reserve(self.bones.len());

        for (i, &bone) in self.bones.iter().enumerate() {
            if let Some(node) = nodes.get(bone) {
                out.push(Mat4::from(
                    node.transform.world_matrix * self.inverse_bind_matrices[i],
                ));
            } else {
                log::warn!(
                    "skeleton '{}': bone {i} no longer resolves, substituting identity",
                    self.name
                );
                out.push(Mat4::IDENTITY);
            }
        }
    }
}
