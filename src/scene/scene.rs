use slotmap::SlotMap;

use crate::scene::NodeHandle;
use crate::scene::node::Node;
use crate::scene::transform_system;

/// Scene graph container: the node arena plus the root list.
///
/// Pure data layer. Per-frame systems (animators, skinning) borrow
/// `nodes` directly rather than going through the container, which
/// keeps their borrows disjoint from the hierarchy bookkeeping.
#[derive(Debug, Default)]
pub struct Scene {
    pub nodes: SlotMap<NodeHandle, Node>,
    pub root_nodes: Vec<NodeHandle>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root_nodes: Vec::new(),
        }
    }

    /// Inserts a detached default node (no parent, not a root).
    pub fn create_node(&mut self) -> NodeHandle {
        self.nodes.insert(Node::new())
    }

    /// Inserts a detached named node.
    pub fn create_node_with_name(&mut self, name: &str) -> NodeHandle {
        self.nodes.insert(Node::with_name(name))
    }

    /// Adds `node` as a scene root.
    pub fn add_node(&mut self, node: Node) -> NodeHandle {
        let handle = self.nodes.insert(node);
        self.root_nodes.push(handle);
        handle
    }

    /// Re-parents `child` under `parent`, keeping both sides of the
    /// relationship in sync. No-op if either handle is stale or the
    /// two are the same node.
    pub fn attach(&mut self, child: NodeHandle, parent: NodeHandle) {
        if child == parent || !self.nodes.contains_key(child) || !self.nodes.contains_key(parent) {
            return;
        }

        self.detach_links(child);
        self.root_nodes.retain(|&h| h != child);

        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(child);
        }
        if let Some(c) = self.nodes.get_mut(child) {
            c.parent = Some(parent);
        }
    }

    /// Removes a node and its whole subtree. Handles held elsewhere
    /// (bone lists, animator targets) become stale and resolve to
    /// `None` from now on.
    pub fn remove_node(&mut self, handle: NodeHandle) {
        self.detach_links(handle);
        self.root_nodes.retain(|&h| h != handle);

        let mut stack = vec![handle];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.remove(current) {
                stack.extend(node.children);
            }
        }
    }

    fn detach_links(&mut self, child: NodeHandle) {
        let parent = self.nodes.get(child).and_then(Node::parent);
        if let Some(parent) = parent
            && let Some(p) = self.nodes.get_mut(parent)
        {
            p.children.retain(|&h| h != child);
        }
        if let Some(c) = self.nodes.get_mut(child) {
            c.parent = None;
        }
    }

    #[inline]
    #[must_use]
    pub fn get_node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    #[inline]
    pub fn get_node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.nodes.get_mut(handle)
    }

    /// Depth-first name lookup from the scene roots.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<NodeHandle> {
        let mut stack: Vec<NodeHandle> = self.root_nodes.clone();
        while let Some(handle) = stack.pop() {
            if let Some(node) = self.nodes.get(handle) {
                if node.name.as_deref() == Some(name) {
                    return Some(handle);
                }
                stack.extend_from_slice(&node.children);
            }
        }
        None
    }

    /// Propagates world matrices through the hierarchy. Call after
    /// animators have written local transforms and before skinning
    /// palettes are computed for the frame.
    pub fn update_world_transforms(&mut self) {
        transform_system::update_hierarchy(&mut self.nodes, &self.root_nodes);
    }
}
