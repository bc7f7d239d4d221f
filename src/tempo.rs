//! Tempo tracking from clock pulses.
//!
//! Keeps a running average of the intervals between incoming clock pulses
//! and exposes it as an integer tempo (milliseconds per pulse) plus integer
//! subdivisions of it.
//!
//! The average is the unweighted mean of every interval observed since
//! construction. There is no decay and no window reset, so the estimate is
//! stable against jitter but gets increasingly sluggish if the incoming
//! tempo drifts over a long session.

#[allow(unused_imports)]
use num_traits::float::Float;

use crate::clock::elapsed;

/// Running-average tempo estimator.
#[derive(Debug, Default)]
pub struct TempoTracker {
    last_check: u32,
    running_avg: f32,
    samples: u32,
    tempo: u32,
}

impl TempoTracker {
    /// Create a tracker at `now`.
    ///
    /// Creation counts as the zeroth pulse: the first observed interval is
    /// measured from this instant.
    pub fn new(now: u32) -> Self {
        Self {
            last_check: now,
            running_avg: 0.0,
            samples: 0,
            tempo: 0,
        }
    }

    /// Fold a pulse observation into the average. Call once per loop with
    /// the drained clock edge flag.
    ///
    /// Returns the current tempo, updated when `pulse_detected` is true and
    /// unchanged otherwise.
    #[inline]
    pub fn update(&mut self, now: u32, pulse_detected: bool) -> u32 {
        if pulse_detected {
            let slice = elapsed(now, self.last_check);
            self.last_check = now;
            self.tempo = self.fold(slice);
        }
        self.tempo
    }

    /// Last computed tempo: whole milliseconds between pulses.
    pub fn tempo(&self) -> u32 {
        self.tempo
    }

    /// Tempo divided down, computed on the float average before truncation.
    ///
    /// `division` must be non-zero; passing zero is a precondition
    /// violation.
    pub fn division(&self, division: u32) -> u32 {
        debug_assert!(division != 0);
        (self.running_avg / division as f32).floor() as u32
    }

    // avg(n+1) = (slice + n * avg(n)) / (n + 1)
    fn fold(&mut self, slice_ms: u32) -> u32 {
        self.running_avg =
            (slice_ms as f32 + self.samples as f32 * self.running_avg) / (self.samples as f32 + 1.0);
        self.samples += 1;
        self.running_avg.floor() as u32
    }
}
