//! Quantized note tables for the 0-5V pitch range.
//!
//! [`QNOTES`] maps note indices to raw DAC input values covering five
//! octaves at 1V/octave. Index it with the note and octave constants, for
//! example `QNOTES[E_NOTE + OCT_5]`, or walk a scale:
//!
//! ```
//! use ardcore_kit::scales::{C_NOTE, MAJOR_SCALE, QNOTES};
//!
//! let triad = [0, 2, 4].map(|degree| QNOTES[C_NOTE + MAJOR_SCALE[degree]]);
//! assert_eq!(triad, [0, 60, 111]);
//! ```

/// Number of quantized notes: five octaves plus the top C.
pub const NOTE_COUNT: usize = 61;

/// Raw 10-bit output values for each semitone, C through B per octave.
pub const QNOTES: [u16; NOTE_COUNT] = [
    0, 9, 26, 43, 60, 77, 94, 111, 128, 145, 162, 180, // octave 3
    197, 214, 231, 248, 265, 282, 299, 316, 333, 350, 367, 384, // octave 4
    401, 418, 435, 452, 469, 486, 503, 521, 538, 555, 572, 589, // octave 5
    606, 623, 640, 657, 674, 691, 708, 725, 742, 759, 776, 793, // octave 6
    810, 827, 844, 862, 879, 896, 913, 930, 947, 964, 981, 998, // octave 7
    1015,
];

pub const C_NOTE: usize = 0;
pub const C_SHARP_NOTE: usize = 1;
pub const D_NOTE: usize = 2;
pub const D_SHARP_NOTE: usize = 3;
pub const E_NOTE: usize = 4;
pub const F_NOTE: usize = 5;
pub const F_SHARP_NOTE: usize = 6;
pub const G_NOTE: usize = 7;
pub const G_SHARP_NOTE: usize = 8;
pub const A_NOTE: usize = 9;
pub const A_SHARP_NOTE: usize = 10;
pub const B_NOTE: usize = 11;

/// Octave offsets into [`QNOTES`]. Octave 3 is the bottom of the 5V range.
pub const OCT_3: usize = 0;
pub const OCT_4: usize = 12;
pub const OCT_5: usize = 12 * 2;
pub const OCT_6: usize = 12 * 3;
pub const OCT_7: usize = 12 * 4;

/// Semitone intervals of the major scale, as offsets from the root note.
pub const MAJOR_SCALE: [usize; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Semitone intervals of the natural minor scale.
pub const MINOR_SCALE: [usize; 7] = [0, 2, 3, 5, 7, 8, 10];

/// Semitone intervals of the major pentatonic scale.
pub const PENTA_MAJOR_SCALE: [usize; 5] = [0, 2, 4, 7, 9];

/// Semitone intervals of the minor pentatonic scale.
pub const PENTA_MINOR_SCALE: [usize; 5] = [0, 3, 5, 7, 10];
