#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod animation;
pub mod errors;
pub mod scene;

pub use animation::{
    AnimationPlayer, InterpolationMode, KeyframeCursor, KeyframeTrack, LoopMode,
    TransformAnimator, TrsAnimation, TrsCursor, TrsSample,
};
pub use errors::{ArmatureError, Result};
pub use scene::{Node, NodeHandle, Scene, Skeleton, Transform};
