//! Mapping of raw analog control readings.
//!
//! The six control inputs read as 10-bit values (0..=1023) whether they come
//! from a panel pot or a patched control voltage. These helpers are pure
//! functions over the raw reading, so the host owns the actual ADC access.

use crate::CTL_MAX;

/// Treat a control as a switch: high at or above half scale.
#[inline]
pub fn high_low(raw: u16) -> bool {
    raw >= CTL_MAX / 2
}

/// Map a control onto the inclusive index range `0..=max_index`.
///
/// The mapping is linear over the inclusive range; a full-scale reading is
/// clamped onto `max_index` itself.
#[inline]
pub fn index(raw: u16, max_index: u16) -> u16 {
    index_between(raw, 0, max_index)
}

/// Map a control onto the inclusive index range `min_index..=max_index`.
#[inline]
pub fn index_between(raw: u16, min_index: u16, max_index: u16) -> u16 {
    let mapped = map_range(
        i32::from(raw),
        0,
        i32::from(CTL_MAX),
        i32::from(min_index),
        i32::from(max_index) + 1,
    );
    (mapped as u16).min(max_index)
}

/// Integer linear map of `x` from `in_min..in_max` onto `out_min..out_max`.
#[inline]
pub fn map_range(x: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i32 {
    (x - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}
