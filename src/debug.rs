//! Rate-limited diagnostic reporting.
//!
//! A patch loop runs thousands of iterations per second; printing state on
//! every pass floods the serial console. [`Reporter`] throttles output to a
//! cadence (a millisecond window or every Nth loop tick) and forwards the
//! actual reporting to the [`log`] facade, so the host decides where the
//! text ends up.

use core::fmt::Display;

use log::debug;

use crate::clock::time_reached;

/// How often a [`Reporter`] opens its output window.
#[derive(Debug, Clone, Copy)]
pub enum Cadence {
    /// Open once per this many milliseconds.
    Millis(u32),
    /// Open once per this many loop ticks.
    Ticks(u32),
}

/// Throttled sink for patch diagnostics.
///
/// Call [`Reporter::tick`] once per loop iteration; the reporter is ready
/// for exactly one iteration each time the cadence elapses, and silent in
/// between. Reporting methods are no-ops while the reporter is disabled or
/// not ready.
#[derive(Debug)]
pub struct Reporter {
    enabled: bool,
    cadence: Cadence,
    last_out: u32,
    ticks_seen: u32,
    ready: bool,
}

impl Reporter {
    /// Create a disabled reporter with the given cadence.
    pub fn new(cadence: Cadence, now: u32) -> Self {
        Self {
            enabled: false,
            cadence,
            last_out: now,
            ticks_seen: 0,
            ready: false,
        }
    }

    /// Whether reporting is globally enabled.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Turn reporting on or off. Returns the new state.
    pub fn set_enabled(&mut self, on: bool) -> bool {
        self.enabled = on;
        self.enabled
    }

    /// Replace the cadence and restart its window at `now`.
    pub fn set_cadence(&mut self, cadence: Cadence, now: u32) {
        self.cadence = cadence;
        self.reset(now);
    }

    /// Restart the current cadence window at `now`.
    pub fn reset(&mut self, now: u32) {
        self.last_out = now;
        self.ticks_seen = 0;
        self.ready = false;
    }

    /// Advance the throttle. Call once per loop iteration.
    ///
    /// The ready state holds for a single iteration: the call after the one
    /// that opened the window closes it again.
    pub fn tick(&mut self, now: u32) {
        if self.ready {
            self.ready = false;
            return;
        }
        match self.cadence {
            Cadence::Millis(window) => {
                if time_reached(now, self.last_out.wrapping_add(window)) {
                    self.last_out = now;
                    self.ready = true;
                }
            }
            Cadence::Ticks(count) => {
                self.ticks_seen += 1;
                if self.ticks_seen >= count {
                    self.ticks_seen = 0;
                    self.ready = true;
                }
            }
        }
    }

    /// Whether the output window is open on this iteration.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Report a bare value.
    pub fn value<T: Display>(&self, value: T) {
        if self.enabled && self.ready {
            debug!("raw value: {value}");
        }
    }

    /// Report a labelled value.
    pub fn labeled<T: Display>(&self, label: &str, value: T) {
        if self.enabled && self.ready {
            debug!("{label}{value}");
        }
    }

    /// Report a control reading.
    pub fn control(&self, name: &str, raw: u16) {
        if self.enabled && self.ready {
            debug!("control {name} value: {raw}");
        }
    }

    /// Report the full output state: both gates and the DAC value.
    pub fn outputs(&self, dac: u16, d0: bool, d1: bool) {
        if self.enabled && self.ready {
            debug!("outputs: d0={d0} d1={d1} dac={dac}");
        }
    }
}
