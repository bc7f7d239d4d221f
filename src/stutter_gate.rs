//! Stutter gate output.
//!
//! Subdivides one trigger into a train of short pulses. The gap between
//! pulses is carved out of each pulse's on-time, so the start-to-start
//! period always equals the armed duration regardless of the gap width.

use embedded_hal::digital::OutputPin;

use crate::clock::time_reached;

const DEFAULT_GAP_MS: u32 = 10;

/// Named arming parameters for a [`StutterGate`].
#[derive(Debug, Clone, Copy)]
pub struct StutterConfig {
    /// Length of one pulse in milliseconds, start to start.
    pub duration_ms: u32,
    /// Number of pulses in the train. Clamped to at least 1.
    pub pulse_count: u32,
    /// Milliseconds of silence carved out of the end of each pulse.
    pub gap_ms: u32,
}

impl Default for StutterConfig {
    fn default() -> Self {
        Self {
            duration_ms: 0,
            pulse_count: 1,
            gap_ms: DEFAULT_GAP_MS,
        }
    }
}

/// Repeated on/off pulse train fired from a single trigger.
///
/// While active the gate alternates between a pulsing phase and a gap
/// phase; it is considered busy (active) until the last pulse has finished,
/// even while momentarily off between pulses. The gap must be shorter than
/// the pulse duration for the train to keep its shape.
#[derive(Debug)]
pub struct StutterGate {
    duration: u32,
    count: u32,
    index: u32,
    start: u32,
    gap: u32,
    on: bool,
}

impl Default for StutterGate {
    fn default() -> Self {
        Self {
            duration: 0,
            count: 0,
            index: 0,
            start: 0,
            gap: DEFAULT_GAP_MS,
            on: false,
        }
    }
}

impl StutterGate {
    /// Create an idle stutter gate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a gate armed at `now` from named parameters.
    pub fn armed(config: StutterConfig, now: u32) -> Self {
        let mut gate = Self::new();
        gate.gap = config.gap_ms;
        gate.arm_train(now, config.duration_ms, config.pulse_count);
        gate
    }

    /// Whether the gate is busy, including the gaps between pulses.
    pub fn is_active(&self) -> bool {
        self.on || self.index < self.count
    }

    /// Raw current output level.
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Re-arm as a single pulse.
    pub fn arm(&mut self, now: u32, duration_ms: u32) {
        self.arm_train(now, duration_ms, 1);
    }

    /// Re-arm as a train of `pulse_count` pulses.
    pub fn arm_train(&mut self, now: u32, duration_ms: u32, pulse_count: u32) {
        self.duration = duration_ms;
        self.count = pulse_count.max(1);
        self.index = 1;
        self.start = now;
        self.on = true;
    }

    /// Advance the gate state. Call once per patch loop iteration.
    ///
    /// A pulse ends once `duration - gap` milliseconds have passed since its
    /// start. If pulses remain, the next start is scheduled one full
    /// duration after the current one, keeping the pulse period constant.
    #[inline]
    pub fn tick(&mut self, now: u32) {
        let mut next_on = false;
        if self.on {
            let pulse_end = self.start.wrapping_add(self.duration).wrapping_sub(self.gap);
            if !time_reached(now, pulse_end) {
                next_on = true;
            } else if self.index < self.count {
                self.start = self.start.wrapping_add(self.duration);
            }
        } else if self.index < self.count && time_reached(now, self.start) {
            next_on = true;
            self.index += 1;
        }
        self.on = next_on;
    }

    /// Set the inter-pulse gap in milliseconds for subsequent cycles.
    pub fn set_gap(&mut self, gap_ms: u32) {
        self.gap = gap_ms;
    }

    /// Reset to idle and off. The gap setting is kept.
    pub fn clear(&mut self) {
        self.duration = 0;
        self.count = 0;
        self.index = 0;
        self.start = 0;
        self.on = false;
    }

    /// Write the current level to an output pin.
    #[inline]
    pub fn render<P: OutputPin>(&self, pin: &mut P) {
        if self.on {
            pin.set_high().ok();
        } else {
            pin.set_low().ok();
        }
    }
}
