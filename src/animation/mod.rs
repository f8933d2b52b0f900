pub mod animator;
pub mod player;
pub mod tracks;
pub mod trs;
pub mod values;

pub use animator::TransformAnimator;
pub use player::{AnimationPlayer, LoopMode};
pub use tracks::{InterpolationMode, KeyframeCursor, KeyframeTrack};
pub use trs::{TrsAnimation, TrsCursor, TrsSample};
pub use values::Interpolatable;
