//! Tests for the tempo tracker

use ardcore_kit::tempo::TempoTracker;

#[test]
fn steady_pulses_give_their_interval() {
    let mut tempo = TempoTracker::new(0);
    tempo.update(500, true);
    tempo.update(1000, true);
    let reported = tempo.update(1500, true);

    assert_eq!(reported, 500);
    assert_eq!(tempo.tempo(), 500);
}

#[test]
fn update_without_a_pulse_changes_nothing() {
    let mut tempo = TempoTracker::new(0);
    tempo.update(250, true);
    assert_eq!(tempo.update(900, false), 250);
    assert_eq!(tempo.tempo(), 250);
}

#[test]
fn average_converges_on_a_constant_interval() {
    let mut tempo = TempoTracker::new(0);
    let mut now = 0;
    for _ in 0..60 {
        now += 250;
        tempo.update(now, true);
    }
    assert_eq!(tempo.tempo(), 250);
}

#[test]
fn average_smooths_jitter() {
    // alternate 90ms and 110ms slices; the mean settles on 100
    let mut tempo = TempoTracker::new(0);
    let mut now = 0;
    for i in 0..100 {
        now += if i % 2 == 0 { 90 } else { 110 };
        tempo.update(now, true);
    }
    // floor of the float mean may land one below the exact value
    assert!((99..=100).contains(&tempo.tempo()));
}

#[test]
fn divisions_follow_integer_truncation() {
    let mut tempo = TempoTracker::new(0);
    let mut now = 0;
    for _ in 0..8 {
        now += 480;
        tempo.update(now, true);
    }

    assert_eq!(tempo.division(1), 480);
    assert_eq!(tempo.division(2), 240);
    assert_eq!(tempo.division(3), 160);
    assert_eq!(tempo.division(2), tempo.division(1) / 2);
}

#[test]
fn division_truncates_the_float_average() {
    // slices 3 and 4 give a 3.5ms average
    let mut tempo = TempoTracker::new(0);
    tempo.update(3, true);
    tempo.update(7, true);

    assert_eq!(tempo.tempo(), 3);
    assert_eq!(tempo.division(1), 3);
    assert_eq!(tempo.division(2), 1);
}

#[test]
fn tracks_across_a_clock_wrap() {
    let start = u32::MAX - 100;
    let mut tempo = TempoTracker::new(start);
    tempo.update(start.wrapping_add(250), true);
    assert_eq!(tempo.tempo(), 250);
}
