use crate::animation::values::Interpolatable;
use crate::errors::{ArmatureError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpolationMode {
    Linear,
    /// Holds each keyframe's value until the next keyframe time.
    Step,
}

/// How many intervals `sample_with_cursor` scans around its hint
/// before falling back to a binary search.
const MAX_SCAN_OFFSET: usize = 3;

/// Intervals shorter than this evaluate to their left endpoint instead
/// of dividing by a near-zero span.
const MIN_INTERVAL: f32 = 1e-6;

/// Interval hint for sequential sampling. `last_index` is the left
/// keyframe of the most recently sampled interval.
#[derive(Debug, Clone, Default)]
pub struct KeyframeCursor {
    pub last_index: usize,
}

/// A sorted time→value keyframe store.
///
/// `times` is strictly ascending and non-empty; `values[i]` is the
/// value at `times[i]`. Both invariants are established at
/// construction and the track is immutable afterwards, so sampling is
/// a pure read and instances can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct KeyframeTrack<T: Interpolatable> {
    times: Vec<f32>,
    values: Vec<T>,
    interpolation: InterpolationMode,
}

impl<T: Interpolatable> KeyframeTrack<T> {
    /// Builds a track from parallel time and value sequences.
    ///
    /// Keyframes may be supplied in any order; they are sorted once
    /// here. Fails on empty input, mismatched lengths, non-finite
    /// timestamps, or duplicate timestamps.
    pub fn new(times: Vec<f32>, values: Vec<T>, interpolation: InterpolationMode) -> Result<Self> {
        if times.len() != values.len() {
            return Err(ArmatureError::KeyValueCountMismatch {
                times: times.len(),
                values: values.len(),
            });
        }
        Self::from_pairs(times.into_iter().zip(values), interpolation)
    }

    /// Builds a track from `(time, value)` pairs in any order.
    pub fn from_pairs(
        pairs: impl IntoIterator<Item = (f32, T)>,
        interpolation: InterpolationMode,
    ) -> Result<Self> {
        let mut keyframes: Vec<(f32, T)> = pairs.into_iter().collect();
        if keyframes.is_empty() {
            return Err(ArmatureError::EmptyTrack);
        }
        for &(time, _) in &keyframes {
            if !time.is_finite() {
                return Err(ArmatureError::NonFiniteKeyTime { time });
            }
        }

        keyframes.sort_by(|a, b| a.0.total_cmp(&b.0));
        for pair in keyframes.windows(2) {
            if pair[0].0 == pair[1].0 {
                return Err(ArmatureError::DuplicateKeyTime { time: pair[0].0 });
            }
        }

        let (times, values) = keyframes.into_iter().unzip();
        Ok(Self {
            times,
            values,
            interpolation,
        })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Always false; empty tracks are rejected at construction.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn times(&self) -> &[f32] {
        &self.times
    }

    #[inline]
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    #[inline]
    #[must_use]
    pub fn interpolation(&self) -> InterpolationMode {
        self.interpolation
    }

    /// Time of the last keyframe.
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.times.last().copied().unwrap_or(0.0)
    }

    /// Computes the interpolated value at `time`.
    ///
    /// Times outside the keyframe range clamp to the boundary
    /// keyframes; a time equal to a stored keyframe returns that
    /// keyframe's value exactly. Interior lookups are a binary search,
    /// O(log n) per query. A single-keyframe track is a constant for
    /// all times.
    #[must_use]
    pub fn sample(&self, time: f32) -> T {
        let last = self.times.len() - 1;
        // NaN clamps to the first keyframe instead of poisoning the
        // interval search.
        if time.is_nan() || time <= self.times[0] {
            return self.values[0];
        }
        if time >= self.times[last] {
            return self.values[last];
        }

        // First index whose time exceeds `time`, minus one: the left
        // edge of the interval containing `time`.
        let left = self.times.partition_point(|&t| t <= time) - 1;
        self.eval_interval(left, time)
    }

    /// [`sample`](Self::sample) with an interval hint.
    ///
    /// Sequential playback revisits the same interval or its neighbor
    /// nearly every frame; the cursor makes those lookups O(1) with a
    /// short scan around the previous interval and falls back to the
    /// binary search on large jumps (scrubbing, loop wrap). Results
    /// are identical to [`sample`](Self::sample) for every input.
    pub fn sample_with_cursor(&self, time: f32, cursor: &mut KeyframeCursor) -> T {
        let last = self.times.len() - 1;
        if time.is_nan() || time <= self.times[0] {
            cursor.last_index = 0;
            return self.values[0];
        }
        if time >= self.times[last] {
            cursor.last_index = last.saturating_sub(1);
            return self.values[last];
        }

        let left = self.find_interval(time, cursor.last_index);
        cursor.last_index = left;
        self.eval_interval(left, time)
    }

    /// Locates the interval `[times[i], times[i + 1])` containing
    /// `time`, which must already be strictly inside the track range.
    fn find_interval(&self, time: f32, hint: usize) -> usize {
        let max_left = self.times.len() - 2;
        let hint = hint.min(max_left);

        if self.times[hint] <= time {
            // Time moved forward (or stayed): the interval is usually
            // at or just past the hint.
            for idx in hint..=(hint + MAX_SCAN_OFFSET).min(max_left) {
                if time < self.times[idx + 1] {
                    return idx;
                }
            }
        } else {
            // Time moved backward (reverse playback, small scrub).
            for idx in (hint.saturating_sub(MAX_SCAN_OFFSET)..hint).rev() {
                if self.times[idx] <= time {
                    return idx;
                }
            }
        }

        self.times.partition_point(|&t| t <= time) - 1
    }

    fn eval_interval(&self, left: usize, time: f32) -> T {
        let t0 = self.times[left];
        if time == t0 {
            return self.values[left];
        }

        match self.interpolation {
            InterpolationMode::Step => self.values[left],
            InterpolationMode::Linear => {
                let span = self.times[left + 1] - t0;
                // Construction keeps times strictly ascending; this
                // guard only shields the division against sub-epsilon
                // spans.
                if span <= MIN_INTERVAL {
                    return self.values[left];
                }
                let t = ((time - t0) / span).clamp(0.0, 1.0);
                T::interpolate_linear(self.values[left], self.values[left + 1], t)
            }
        }
    }
}
