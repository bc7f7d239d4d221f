//! Timed gate output.
//!
//! A gate is armed with a duration and goes high immediately, or after an
//! optional one-shot delay. The patch loop calls [`Gate::tick`] once per
//! iteration and renders the level to an output pin.

use embedded_hal::digital::OutputPin;

use crate::clock::time_reached;

/// Named arming parameters for a [`Gate`].
#[derive(Debug, Default, Clone, Copy)]
pub struct GateConfig {
    /// Pulse length in milliseconds.
    pub duration_ms: u32,
    /// Milliseconds before the pulse starts. Zero starts it immediately.
    pub delay_ms: u32,
}

/// Single timed on/off pulse with optional start delay.
#[derive(Debug, Default)]
pub struct Gate {
    duration: u32,
    delay: u32,
    start: u32,
    on: bool,
}

impl Gate {
    /// Create an idle gate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a gate armed at `now` from named parameters.
    pub fn armed(config: GateConfig, now: u32) -> Self {
        let mut gate = Self::new();
        gate.arm_delayed(now, config.duration_ms, config.delay_ms);
        gate
    }

    /// Whether the gate is committed, even if not yet audible.
    ///
    /// A delayed gate is active before its pulse starts; the delay field is
    /// consumed to zero once it elapses.
    pub fn is_active(&self) -> bool {
        self.on || self.delay > 0
    }

    /// Raw current output level.
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Re-arm with a new duration; the pulse starts immediately.
    pub fn arm(&mut self, now: u32, duration_ms: u32) {
        self.duration = duration_ms;
        self.delay = 0;
        self.start = now;
        self.on = true;
    }

    /// Re-arm with a new duration and start delay.
    ///
    /// A zero delay behaves exactly like [`Gate::arm`].
    pub fn arm_delayed(&mut self, now: u32, duration_ms: u32, delay_ms: u32) {
        if delay_ms == 0 {
            self.arm(now, duration_ms);
            return;
        }
        self.duration = duration_ms;
        self.delay = delay_ms;
        self.start = now.wrapping_add(delay_ms);
        self.on = false;
    }

    /// Advance the gate state. Call once per patch loop iteration.
    #[inline]
    pub fn tick(&mut self, now: u32) {
        if self.on {
            if time_reached(now, self.start.wrapping_add(self.duration)) {
                self.on = false;
            }
        } else if self.delay > 0 && time_reached(now, self.start) {
            self.on = true;
            self.delay = 0;
        }
    }

    /// Reset to idle and off.
    pub fn clear(&mut self) {
        self.duration = 0;
        self.delay = 0;
        self.start = 0;
        self.on = false;
    }

    /// Manual level override, bypassing the timing logic.
    ///
    /// For gates that are not duration based (clock passthrough, manual
    /// latches).
    pub fn set_level(&mut self, on: bool) {
        self.on = on;
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
