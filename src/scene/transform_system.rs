//! World-matrix propagation over the node hierarchy.
//!
//! Decoupled from [`Scene`](crate::scene::Scene): it borrows only the
//! node arena and the root list, so animators and skinning can hold
//! disjoint borrows in the same frame. Parents are always processed
//! before their children; subtrees whose transforms are all clean are
//! skipped via the dirty check.

use glam::Affine3A;
use slotmap::SlotMap;

use crate::scene::NodeHandle;
use crate::scene::node::Node;

/// Updates world matrices for every node reachable from `roots`.
///
/// Iterative with an explicit work stack; deep hierarchies cannot
/// overflow the call stack.
pub fn update_hierarchy(nodes: &mut SlotMap<NodeHandle, Node>, roots: &[NodeHandle]) {
    // Work stack: (node, parent world matrix, parent changed).
    let mut stack: Vec<(NodeHandle, Affine3A, bool)> = Vec::with_capacity(64);

    for &root in roots.iter().rev() {
        stack.push((root, Affine3A::IDENTITY, false));
    }

    while let Some((handle, parent_world, parent_changed)) = stack.pop() {
        let Some(node) = nodes.get_mut(handle) else {
            continue;
        };

        let local_changed = node.transform.update_local_matrix();
        let world_changed = local_changed || parent_changed;

        if world_changed {
            let world = parent_world * *node.transform.local_matrix();
            node.transform.set_world_matrix(world);
        }

        // Children in reverse so the stack pops them in order.
        let current_world = node.transform.world_matrix;
        for &child in node.children.iter().rev() {
            stack.push((child, current_world, world_changed));
        }
    }
}
