//! Fuzz target: `LampDriver::update`
//!
//! Decodes arbitrary bytes into a sequence of (noise, light, heartbeat)
//! triples, feeds them through the driver and asserts that after every
//! update exactly one channel is lit and it matches the classified state.
//!
//! cargo fuzz run fuzz_lamp_update

#![no_main]

use focuslamp::app::ports::{Channel, IndicatorPort};
use focuslamp::{LampDriver, classify};
use libfuzzer_sys::fuzz_target;

#[derive(Default)]
struct Levels([bool; Channel::COUNT]);

impl IndicatorPort for Levels {
    fn set_active(&mut self, channel: Channel, active: bool) {
        self.0[channel.index()] = active;
    }
}

fn word(bytes: &[u8]) -> i32 {
    i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

fuzz_target!(|data: &[u8]| {
    let mut driver = LampDriver::new(Levels::default());
    assert!(driver.current_state().is_none());

    for chunk in data.chunks_exact(12) {
        let (noise, light, heartbeat) = (word(&chunk[0..4]), word(&chunk[4..8]), word(&chunk[8..12]));
        driver.update(noise, light, heartbeat);

        let state = classify(noise, light, heartbeat);
        assert_eq!(driver.current_state(), Some(state));

        let levels = driver.port().0;
        assert_eq!(levels.iter().filter(|l| **l).count(), 1, "exactly one LED lit");
        assert!(levels[state.channel().index()]);
    }
});
