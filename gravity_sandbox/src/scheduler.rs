//! Fixed-step scheduling of the physics loop
//!
//! Frame durations reported by the host vary from frame to frame. The
//! scheduler banks them in an accumulator and pays them out as a whole
//! number of fixed-size steps; the leftover fraction becomes the render
//! interpolation factor.

use crate::math::Scalar;

/// Outcome of one frame report
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Advance {
    /// Fixed steps executed for this report
    pub steps: u32,
    /// Leftover fraction of a step, in `[0, 1)`
    pub alpha: Scalar,
    /// Simulated time discarded by the catch-up cap
    pub dropped: Scalar,
}

#[derive(Debug, Clone)]
pub struct FixedStepScheduler {
    fixed_dt: Scalar,
    accumulator: Scalar,
    max_steps_per_advance: Option<u32>,
}

impl FixedStepScheduler {
    /// `fixed_dt` must be positive; configuration validation guarantees it
    pub fn new(fixed_dt: Scalar, max_steps_per_advance: Option<u32>) -> Self {
        debug_assert!(fixed_dt > 0.0);
        Self {
            fixed_dt,
            accumulator: 0.0,
            max_steps_per_advance,
        }
    }

    pub fn fixed_dt(&self) -> Scalar {
        self.fixed_dt
    }

    /// Unconsumed time carried to the next report
    pub fn accumulator(&self) -> Scalar {
        self.accumulator
    }

    pub fn max_steps_per_advance(&self) -> Option<u32> {
        self.max_steps_per_advance
    }

    /// Bank `frame_dt` and run `step(fixed_dt)` once per whole step owed
    ///
    /// A zero duration (host paused or minimised) runs nothing and yields an
    /// alpha of zero. Negative or non-finite durations are ignored the same
    /// way. When the catch-up cap is reached, the whole steps still owed are
    /// dropped and reported; only the fractional remainder is carried over.
    pub fn advance<F>(&mut self, frame_dt: Scalar, mut step: F) -> Advance
    where
        F: FnMut(Scalar),
    {
        if !frame_dt.is_finite() || frame_dt < 0.0 {
            log::warn!("Ignoring invalid frame duration {}", frame_dt);
            return Advance {
                steps: 0,
                alpha: 0.0,
                dropped: 0.0,
            };
        }
        if frame_dt == 0.0 {
            return Advance {
                steps: 0,
                alpha: 0.0,
                dropped: 0.0,
            };
        }

        self.accumulator += frame_dt;

        let mut steps = 0u32;
        let mut dropped = 0.0;
        while self.accumulator >= self.fixed_dt {
            if self.max_steps_per_advance.is_some_and(|cap| steps >= cap) {
                let owed = (self.accumulator / self.fixed_dt).floor();
                dropped = owed * self.fixed_dt;
                self.accumulator -= dropped;
                // Rounding can leave a hair over one step or under zero
                if self.accumulator >= self.fixed_dt {
                    dropped += self.fixed_dt;
                    self.accumulator -= self.fixed_dt;
                } else if self.accumulator < 0.0 {
                    dropped += self.accumulator;
                    self.accumulator = 0.0;
                }
                log::warn!(
                    "Step cap of {} reached; dropping {:.4}s of simulated time",
                    steps,
                    dropped
                );
                break;
            }
            step(self.fixed_dt);
            self.accumulator -= self.fixed_dt;
            steps += 1;
        }

        Advance {
            steps,
            alpha: self.accumulator / self.fixed_dt,
            dropped,
        }
    }
}
