use glam::{Quat, Vec3};

/// A value type that [`KeyframeTrack`](crate::animation::KeyframeTrack)
/// can interpolate between two keyframes.
pub trait Interpolatable: Copy + Clone + Sized {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self;
}

impl Interpolatable for f32 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start + (end - start) * t
    }
}

impl Interpolatable for Vec3 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.lerp(end, t)
    }
}

impl Interpolatable for Quat {
    /// Spherical interpolation along the shortest arc: `slerp` negates
    /// one endpoint when the quaternion dot product is negative and
    /// degrades to normalized lerp when the rotations are nearly
    /// identical. The result is renormalized before it reaches any
    /// matrix composition.
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.slerp(end, t).normalize()
    }
}
