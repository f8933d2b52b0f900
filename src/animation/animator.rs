use slotmap::SlotMap;

use crate::animation::trs::{TrsAnimation, TrsCursor};
use crate::scene::NodeHandle;
use crate::scene::node::Node;

/// Drives one scene node's local transform from a [`TrsAnimation`].
///
/// The animator owns no clock; callers pass the current animation time
/// into [`update`](Self::update), which must run before world matrices
/// are propagated for that frame. The target's transform is
/// overwritten on every update and never cached across frames.
#[derive(Debug, Clone)]
pub struct TransformAnimator {
    target: NodeHandle,
    animation: Option<TrsAnimation>,
    cursor: TrsCursor,
}

impl TransformAnimator {
    #[must_use]
    pub fn new(target: NodeHandle, animation: TrsAnimation) -> Self {
        Self {
            target,
            animation: Some(animation),
            cursor: TrsCursor::default(),
        }
    }

    /// An animator with no animation bound; [`update`](Self::update)
    /// leaves the target untouched until one is set.
    #[must_use]
    pub fn unbound(target: NodeHandle) -> Self {
        Self {
            target,
            animation: None,
            cursor: TrsCursor::default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> NodeHandle {
        self.target
    }

    #[inline]
    #[must_use]
    pub fn animation(&self) -> Option<&TrsAnimation> {
        self.animation.as_ref()
    }

    pub fn set_animation(&mut self, animation: Option<TrsAnimation>) {
        self.animation = animation;
        self.cursor = TrsCursor::default();
    }

    /// Samples the animation at `time` and overwrites the target
    /// node's local TRS components. A missing animation, or a target
    /// node that has been removed, leaves everything untouched.
    pub fn update(&mut self, nodes: &mut SlotMap<NodeHandle, Node>, time: f32) {
        let Some(animation) = &self.animation else {
            return;
        };
        let Some(node) = nodes.get_mut(self.target) else {
            return;
        };

        let sample = animation.sample_with_cursor(time, &mut self.cursor);
        node.transform.position = sample.translation;
        node.transform.rotation = sample.rotation;
        node.transform.scale = sample.scale;
        node.transform.mark_dirty();
    }
}
