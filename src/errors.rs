//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`ArmatureError`] covers construction-time
//! failures: malformed keyframe tracks and mismatched skinning data.
//! These abort construction of the offending object and are returned
//! to the caller.
//!
//! Per-frame conditions (a bone handle that no longer resolves, a
//! degenerate keyframe interval) are deliberately *not* errors: they
//! are recovered locally with a safe fallback value so a single stale
//! bone or a pathological float never aborts a frame. See
//! [`Skeleton::compute_palette`](crate::scene::Skeleton::compute_palette).
//!
//! # Usage
//!
//! Fallible public APIs return [`Result<T>`], an alias for
//! `std::result::Result<T, ArmatureError>`.

use thiserror::Error;

/// The main error type for the armature crate.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ArmatureError {
    // ========================================================================
    // Keyframe Track Construction
    // ========================================================================
    /// A track was constructed with zero keyframes.
    #[error("Keyframe track has no keyframes")]
    EmptyTrack,

    /// Two keyframes share the same timestamp. Tracks require strictly
    /// ascending times; duplicates are rejected, never deduplicated.
    #[error("Duplicate keyframe timestamp: {time}")]
    DuplicateKeyTime {
        /// The timestamp that appeared more than once.
        time: f32,
    },

    /// The time and value sequences differ in length.
    #[error("Keyframe count mismatch: {times} times, {values} values")]
    KeyValueCountMismatch {
        /// Number of timestamps supplied.
        times: usize,
        /// Number of values supplied.
        values: usize,
    },

    /// A keyframe timestamp is NaN or infinite.
    #[error("Non-finite keyframe timestamp: {time}")]
    NonFiniteKeyTime {
        /// The offending timestamp.
        time: f32,
    },

    // ========================================================================
    // Skinning Construction
    // ========================================================================
    /// The bone list and the inverse bind matrix list differ in length.
    #[error("Skinning data mismatch: {bones} bones, {offsets} inverse bind matrices")]
    BoneOffsetCountMismatch {
        /// Number of bone handles supplied.
        bones: usize,
        /// Number of inverse bind matrices supplied.
        offsets: usize,
    },
}

/// Alias for `Result<T, ArmatureError>`.
pub type Result<T> = std::result::Result<T, ArmatureError>;
