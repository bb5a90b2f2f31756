//! Integration tests for the LampDriver → IndicatorPort pipeline.

use crate::mock_hw::{MockIndicator, RecordingSink, ScriptedSensors, Write};

use focuslamp::app::events::{LampEvent, TelemetryData};
use focuslamp::app::ports::Channel;
use focuslamp::{LampDriver, LampState, Reading};

fn make_driver() -> LampDriver<MockIndicator> {
    LampDriver::new(MockIndicator::new())
}

// ── Construction ──────────────────────────────────────────────

#[test]
fn construction_switches_all_channels_off_without_setting_state() {
    let driver = make_driver();

    assert_eq!(driver.current_state(), None);
    assert_eq!(driver.port().writes.len(), 3);
    assert!(driver.port().writes.iter().all(|w| !w.active));
    assert!(driver.port().active_channels().is_empty());
}

// ── Update semantics ──────────────────────────────────────────

#[test]
fn red_conditions_light_red() {
    let mut driver = make_driver();
    for (n, l, h) in [(75, 400, 70), (40, 100, 70), (40, 400, 110)] {
        driver.update(n, l, h);
        assert_eq!(driver.current_state(), Some(LampState::Stressed));
        assert_eq!(driver.port().active_channels(), vec![Channel::Red]);
    }
}

#[test]
fn yellow_conditions_light_yellow() {
    let mut driver = make_driver();
    for (n, l, h) in [(60, 400, 70), (40, 200, 70), (40, 400, 95)] {
        driver.update(n, l, h);
        assert_eq!(driver.current_state(), Some(LampState::Moderate));
        assert_eq!(driver.port().active_channels(), vec![Channel::Yellow]);
    }
}

#[test]
fn green_conditions_light_green() {
    let mut driver = make_driver();
    for (n, l, h) in [(30, 400, 70), (50, 300, 90)] {
        driver.update(n, l, h);
        assert_eq!(driver.current_state(), Some(LampState::Calm));
        assert_eq!(driver.port().active_channels(), vec![Channel::Green]);
    }
}

#[test]
fn red_takes_priority_over_yellow() {
    let mut driver = make_driver();
    driver.update(75, 250, 95);
    assert_eq!(driver.current_state(), Some(LampState::Stressed));
}

#[test]
fn state_sequence_follows_latest_update() {
    let mut driver = make_driver();
    let mut seen = Vec::new();
    for noise in [30, 60, 80] {
        driver.update(noise, 400, 70);
        seen.push(driver.current_state());
    }
    assert_eq!(
        seen,
        vec![
            Some(LampState::Calm),
            Some(LampState::Moderate),
            Some(LampState::Stressed)
        ]
    );
}

#[test]
fn update_deactivates_before_activating() {
    let mut driver = make_driver();
    driver.update(30, 400, 70); // green
    driver.update(80, 400, 70); // red

    let writes = driver.port().writes_since(6);
    assert_eq!(
        writes,
        &[
            Write { channel: Channel::Yellow, active: false },
            Write { channel: Channel::Green, active: false },
            Write { channel: Channel::Red, active: true },
        ]
    );
    assert_eq!(driver.port().peak_active, 1, "two LEDs must never be lit together");
}

#[test]
fn repeated_state_still_rewrites_all_channels() {
    let mut driver = make_driver();
    driver.update(60, 400, 70);
    driver.update(61, 400, 70);
    assert_eq!(driver.port().writes.len(), 3 + 3 + 3);
    assert_eq!(driver.port().active_channels(), vec![Channel::Yellow]);
}

#[test]
fn driver_can_borrow_its_indicator() {
    let mut lamp = MockIndicator::new();
    {
        let mut driver = LampDriver::new(&mut lamp);
        driver.update(80, 400, 70);
    }
    assert!(lamp.is_active(Channel::Red));
}

// ── Tick orchestration ────────────────────────────────────────

#[test]
fn tick_emits_telemetry_and_state_changes() {
    let mut driver = make_driver();
    let mut sensors = ScriptedSensors::new([
        Reading::new(30, 400, 70),
        Reading::new(35, 400, 70),
        Reading::new(80, 400, 70),
    ]);
    let mut sink = RecordingSink::new();

    for _ in 0..3 {
        driver.tick(&mut sensors, &mut sink);
    }

    assert_eq!(
        sink.events,
        vec![
            LampEvent::Telemetry(TelemetryData {
                cycle: 1,
                reading: Reading::new(30, 400, 70),
                state: LampState::Calm,
            }),
            LampEvent::StateChanged { from: None, to: LampState::Calm },
            LampEvent::Telemetry(TelemetryData {
                cycle: 2,
                reading: Reading::new(35, 400, 70),
                state: LampState::Calm,
            }),
            LampEvent::Telemetry(TelemetryData {
                cycle: 3,
                reading: Reading::new(80, 400, 70),
                state: LampState::Stressed,
            }),
            LampEvent::StateChanged {
                from: Some(LampState::Calm),
                to: LampState::Stressed,
            },
        ]
    );
    assert_eq!(driver.update_count(), 3);
}

#[test]
fn tick_returns_the_new_state() {
    let mut driver = make_driver();
    let mut sensors = ScriptedSensors::new([Reading::new(40, 200, 70)]);
    let mut sink = RecordingSink::new();
    assert_eq!(driver.tick(&mut sensors, &mut sink), LampState::Moderate);
    assert_eq!(driver.current_state(), Some(LampState::Moderate));
}
