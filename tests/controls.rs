//! Tests for control mapping, DAC value composition and the note tables

use ardcore_kit::dac::{gates_value, step_value, write_value};
use ardcore_kit::scales::{A_NOTE, C_NOTE, MAJOR_SCALE, NOTE_COUNT, OCT_3, OCT_4, QNOTES};
use ardcore_kit::sim::SimDac;
use ardcore_kit::{control, CTL_MAX};

#[test]
fn high_low_splits_at_half_scale() {
    assert!(!control::high_low(0));
    assert!(!control::high_low(510));
    assert!(control::high_low(CTL_MAX / 2));
    assert!(control::high_low(CTL_MAX));
}

#[test]
fn index_covers_the_whole_range_inclusive() {
    assert_eq!(control::index(0, 9), 0);
    assert_eq!(control::index(CTL_MAX, 9), 9);

    // a full-scale reading maps one past the top and is clamped back
    assert_eq!(control::index(CTL_MAX, 1), 1);
    assert_eq!(control::index(511, 1), 0);
    assert_eq!(control::index(512, 1), 1);
}

#[test]
fn index_is_monotonic() {
    let mut last = 0;
    for raw in 0..=CTL_MAX {
        let idx = control::index(raw, 7);
        assert!(idx >= last);
        assert!(idx <= 7);
        last = idx;
    }
}

#[test]
fn index_between_respects_both_ends() {
    assert_eq!(control::index_between(0, 2, 5), 2);
    assert_eq!(control::index_between(CTL_MAX, 2, 5), 5);
}

#[test]
fn map_range_matches_integer_arithmetic() {
    assert_eq!(control::map_range(512, 0, 1023, 0, 100), 50);
    assert_eq!(control::map_range(5, 0, 10, 100, 200), 150);
    assert_eq!(control::map_range(0, 0, 10, -50, 50), -50);
}

#[test]
fn gate_bits_compose_the_dac_value() {
    assert_eq!(gates_value(&[false; 8]), 0);

    let mut lowest = [false; 8];
    lowest[0] = true;
    assert_eq!(gates_value(&lowest), 4);

    let mut highest = [false; 8];
    highest[7] = true;
    assert_eq!(gates_value(&highest), 512);

    assert_eq!(gates_value(&[true; 8]), 1020);
}

#[test]
fn step_values_form_a_staircase() {
    assert_eq!(step_value(0), 4);
    assert_eq!(step_value(7), 32);
    // out-of-range steps fall silent
    assert_eq!(step_value(8), 0);
}

#[test]
fn dac_words_are_downshifted_to_eight_bits() {
    let mut dac = SimDac::new();
    write_value(&mut dac, 1023);
    write_value(&mut dac, gates_value(&[true; 8]));
    write_value(&mut dac, 0);
    assert_eq!(dac.words(), &[255, 255, 0]);
    assert_eq!(dac.last(), Some(0));
}

#[test]
fn note_table_spans_five_octaves() {
    assert_eq!(QNOTES.len(), NOTE_COUNT);
    assert_eq!(QNOTES[C_NOTE + OCT_3], 0);
    assert_eq!(QNOTES[A_NOTE + OCT_4], 350);
    assert_eq!(QNOTES[NOTE_COUNT - 1], 1015);

    // strictly rising through the whole range
    for pair in QNOTES.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn major_scale_walk_stays_in_the_table() {
    for degree in MAJOR_SCALE {
        let _ = QNOTES[C_NOTE + OCT_4 + degree];
    }
}
