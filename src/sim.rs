//! Software doubles for the hardware capabilities.
//!
//! These stand in for the real clock input, gate pins and DAC port when
//! running patch logic off the module: in the integration tests and in
//! host-side simulations. The clock is advanced manually and pulses are
//! latched exactly like the hardware edge flag.

use alloc::vec::Vec;
use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin};

use crate::clock::ClockSource;
use crate::dac::DacPort;

/// Manually advanced clock with a latched pulse flag.
#[derive(Debug, Default)]
pub struct SimClock {
    now: u32,
    pulse: bool,
}

impl SimClock {
    /// Create a clock at time zero with no pending pulse.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by `ms` milliseconds.
    pub fn advance(&mut self, ms: u32) {
        self.now = self.now.wrapping_add(ms);
    }

    /// Latch a clock edge, as the hardware interrupt would.
    pub fn trigger(&mut self) {
        self.pulse = true;
    }
}

impl ClockSource for SimClock {
    fn now_ms(&self) -> u32 {
        self.now
    }

    fn take_pulse(&mut self) -> bool {
        let pending = self.pulse;
        self.pulse = false;
        pending
    }

    fn peek_pulse(&self) -> bool {
        self.pulse
    }
}

/// Digital output pin that records its level transitions.
#[derive(Debug, Default)]
pub struct SimPin {
    level: bool,
    transitions: Vec<bool>,
}

impl SimPin {
    /// Create a pin driven low.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current level.
    pub fn is_high(&self) -> bool {
        self.level
    }

    /// Every level change seen so far, in order.
    pub fn transitions(&self) -> &[bool] {
        &self.transitions
    }

    fn set(&mut self, level: bool) {
        if level != self.level {
            self.transitions.push(level);
        }
        self.level = level;
    }
}

impl ErrorType for SimPin {
    type Error = Infallible;
}

impl OutputPin for SimPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set(true);
        Ok(())
    }
}

/// DAC port that records every latched word.
#[derive(Debug, Default)]
pub struct SimDac {
    words: Vec<u8>,
}

impl SimDac {
    /// Create a port with nothing latched.
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently latched word, if any.
    pub fn last(&self) -> Option<u8> {
        self.words.last().copied()
    }

    /// Every latched word, in order.
    pub fn words(&self) -> &[u8] {
        &self.words
    }
}

impl DacPort for SimDac {
    fn write(&mut self, word: u8) {
        self.words.push(word);
    }
}
