//! Simulated patch loop: tempo-tracked gate plus stutter gate.

use simple_logger::SimpleLogger;

use ardcore_kit::clock::ClockSource;
use ardcore_kit::control;
use ardcore_kit::debug::{Cadence, Reporter};
use ardcore_kit::gate::Gate;
use ardcore_kit::sim::{SimClock, SimPin};
use ardcore_kit::stutter_gate::StutterGate;
use ardcore_kit::tempo::TempoTracker;

const CLOCK_INTERVAL_MS: u32 = 125; // 120 BPM, 16th notes
const RUN_MS: u32 = 2000;

fn main() {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Debug)
        .init()
        .unwrap();

    let mut clock = SimClock::new();
    let mut tempo = TempoTracker::new(clock.now_ms());
    let mut gate = Gate::new();
    let mut stutter = StutterGate::new();
    let mut d0 = SimPin::new();
    let mut d1 = SimPin::new();
    let mut reporter = Reporter::new(Cadence::Millis(500), clock.now_ms());
    reporter.set_enabled(true);

    // Pretend the stutter-count pot sits at three o'clock.
    let stutter_count = u32::from(control::index(800, 4)) + 1;

    for ms in 0..RUN_MS {
        if ms % CLOCK_INTERVAL_MS == 0 {
            clock.trigger();
        }

        let now = clock.now_ms();
        let pulse = clock.take_pulse();
        tempo.update(now, pulse);

        if pulse {
            // Gate for half the pulse interval, stutters across the rest.
            gate.arm(now, tempo.division(2));
            stutter.arm_train(now, tempo.division(2 * stutter_count), stutter_count);
        }

        gate.tick(now);
        stutter.tick(now);
        gate.render(&mut d0);
        stutter.render(&mut d1);

        reporter.tick(now);
        reporter.labeled("tempo ms: ", tempo.tempo());
        reporter.outputs(0, d0.is_high(), d1.is_high());

        clock.advance(1);
    }

    log::info!(
        "d0 transitions: {}, d1 transitions: {}",
        d0.transitions().len(),
        d1.transitions().len()
    );
}
