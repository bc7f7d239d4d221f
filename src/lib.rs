#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod clock;
pub mod control;
pub mod dac;
pub mod debug;
pub mod framing;
pub mod gate;
pub mod scales;
pub mod sim;
pub mod stutter_gate;
pub mod tempo;

/// Full-scale raw reading of an analog control (10-bit ADC).
pub const CTL_MAX: u16 = 1023;

/// Number of bits available on the bit-banged DAC output.
pub const DAC_BITS: u16 = 8;

/// Number of dedicated digital gate outputs.
pub const GATE_COUNT: usize = 2;

/// Digital pins wired to the two gate outputs.
pub const GATE_PINS: [u8; GATE_COUNT] = [3, 4];

/// Digital pin wired to the clock/trigger input.
pub const CLOCK_PIN: u8 = 2;

/// Number of analog control inputs (A0..A5).
pub const CTL_COUNT: usize = 6;

/// Offset of the first expander pin in the digital pin numbering.
pub const EXPANDER_PIN_OFFSET: u8 = 5;
