#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopMode {
    /// Play through once, then pause at the boundary.
    Once,
    /// Wrap around at the ends.
    Loop,
    /// Reflect direction at the ends.
    PingPong,
}

/// Playback clock for a fixed-duration timeline.
///
/// The player owns no wall clock: callers feed frame deltas into
/// [`advance`](Self::advance) and pass the returned time to the
/// sampling side. `time_scale` may be negative for reverse playback.
#[derive(Debug, Clone)]
pub struct AnimationPlayer {
    duration: f32,
    pub time: f32,
    pub time_scale: f32,
    pub loop_mode: LoopMode,
    pub paused: bool,
}

impl AnimationPlayer {
    #[must_use]
    pub fn new(duration: f32) -> Self {
        Self {
            duration: duration.max(0.0),
            time: 0.0,
            time_scale: 1.0,
            loop_mode: LoopMode::Loop,
            paused: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Advances the clock by `dt` seconds and returns the resulting
    /// timeline position, folded into `[0, duration]` per the loop
    /// mode. A paused player or a zero-duration timeline does not
    /// move.
    pub fn advance(&mut self, dt: f32) -> f32 {
        if self.paused || self.duration <= 0.0 {
            return self.time;
        }

        self.time += dt * self.time_scale;

        match self.loop_mode {
            LoopMode::Once => {
                if self.time >= self.duration {
                    self.time = self.duration;
                    self.paused = true;
                } else if self.time < 0.0 {
                    self.time = 0.0;
                    self.paused = true;
                }
            }
            LoopMode::Loop => {
                if self.time >= self.duration {
                    self.time %= self.duration;
                } else if self.time < 0.0 {
                    // Negative remainder: wrap from the far end.
                    self.time = self.duration + (self.time % self.duration);
                }
            }
            LoopMode::PingPong => {
                let cycle = self.duration * 2.0;
                let mut t = self.time % cycle;
                if t < 0.0 {
                    t += cycle;
                }
                if t > self.duration {
                    t = cycle - t;
                }
                self.time = t;
            }
        }

        self.time
    }
}
