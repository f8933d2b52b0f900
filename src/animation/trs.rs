use glam::{Affine3A, Mat4, Quat, Vec3};

use crate::animation::tracks::{InterpolationMode, KeyframeCursor, KeyframeTrack};
use crate::errors::Result;

/// One sampled pose: the three TRS components at a single query time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrsSample {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl TrsSample {
    /// Composes the transform in fixed T·R·S order: scale innermost,
    /// then rotation, translation outermost. Translation is never
    /// scaled.
    #[must_use]
    pub fn affine(&self) -> Affine3A {
        Affine3A::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }

    /// [`affine`](Self::affine) as a plain 4×4 matrix.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

/// Per-track interval hints for sequential [`TrsAnimation`] sampling.
#[derive(Debug, Clone, Default)]
pub struct TrsCursor {
    pub translation: KeyframeCursor,
    pub rotation: KeyframeCursor,
    pub scale: KeyframeCursor,
}

/// Translation, rotation and scale keyframes over a shared timeline.
///
/// The three tracks are independent — they need not share timestamps
/// or keyframe counts. Each is sampled at the same query time and the
/// results compose into one transform.
#[derive(Debug, Clone)]
pub struct TrsAnimation {
    pub translation: KeyframeTrack<Vec3>,
    pub rotation: KeyframeTrack<Quat>,
    pub scale: KeyframeTrack<Vec3>,
}

impl TrsAnimation {
    #[must_use]
    pub fn new(
        translation: KeyframeTrack<Vec3>,
        rotation: KeyframeTrack<Quat>,
        scale: KeyframeTrack<Vec3>,
    ) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    /// Builds the three tracks from `(time, value)` pairs in any
    /// order. Translation and scale interpolate linearly, rotation
    /// slerps.
    pub fn from_keys(
        translate_keys: impl IntoIterator<Item = (f32, Vec3)>,
        rotate_keys: impl IntoIterator<Item = (f32, Quat)>,
        scale_keys: impl IntoIterator<Item = (f32, Vec3)>,
    ) -> Result<Self> {
        Ok(Self {
            translation: KeyframeTrack::from_pairs(translate_keys, InterpolationMode::Linear)?,
            rotation: KeyframeTrack::from_pairs(rotate_keys, InterpolationMode::Linear)?,
            scale: KeyframeTrack::from_pairs(scale_keys, InterpolationMode::Linear)?,
        })
    }

    /// Samples all three tracks at `time`. The rotation is
    /// renormalized after interpolation.
    #[must_use]
    pub fn sample(&self, time: f32) -> TrsSample {
        TrsSample {
            translation: self.translation.sample(time),
            rotation: self.rotation.sample(time).normalize(),
            scale: self.scale.sample(time),
        }
    }

    /// [`sample`](Self::sample) with per-track interval hints for the
    /// per-frame playback path.
    pub fn sample_with_cursor(&self, time: f32, cursor: &mut TrsCursor) -> TrsSample {
        TrsSample {
            translation: self
                .translation
                .sample_with_cursor(time, &mut cursor.translation),
            rotation: self
                .rotation
                .sample_with_cursor(time, &mut cursor.rotation)
                .normalize(),
            scale: self.scale.sample_with_cursor(time, &mut cursor.scale),
        }
    }

    /// The composed transform at `time`. Returns a fresh matrix; no
    /// internal state is aliased or mutated.
    #[must_use]
    pub fn matrix(&self, time: f32) -> Mat4 {
        self.sample(time).matrix()
    }

    /// Timeline length: the latest keyframe across the three tracks.
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.translation
            .duration()
            .max(self.rotation.duration())
            .max(self.scale.duration())
    }
}
