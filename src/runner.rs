//! Polling loop.
//!
//! Drives a [`LampDriver`] at the configured interval until the cycle
//! budget runs out or the stop flag is raised (Ctrl+C in the binary).
//! Emits `Started` before the first cycle and `Stopped` after the last.
//!
//! The inter-cycle sleep is cut into short slices so a raised flag is
//! noticed within [`STOP_POLL`] rather than a full interval.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use log::info;

use crate::app::driver::LampDriver;
use crate::app::events::{LampEvent, PinMap};
use crate::app::ports::{EventSink, IndicatorPort, ReadingSource};
use crate::config::LampConfig;

/// Longest slice slept before re-checking the stop flag.
pub const STOP_POLL: Duration = Duration::from_millis(50);

/// Run the polling loop. Returns the number of cycles completed.
pub fn run<P: IndicatorPort>(
    driver: &mut LampDriver<P>,
    source: &mut impl ReadingSource,
    sink: &mut impl EventSink,
    config: &LampConfig,
    stop: &AtomicBool,
) -> u64 {
    sink.emit(&LampEvent::Started(PinMap {
        red: config.red_pin,
        yellow: config.yellow_pin,
        green: config.green_pin,
    }));

    let interval = Duration::from_millis(config.poll_interval_ms);
    let start = driver.update_count();
    while !stop.load(Ordering::Relaxed) {
        driver.tick(&mut *source, &mut *sink);
        let done = driver.update_count() - start;
        if config.max_cycles.is_some_and(|max| done >= max)
            || !sleep_unless_stopped(interval, stop)
        {
            break;
        }
    }

    let cycles = driver.update_count() - start;
    if stop.load(Ordering::Relaxed) {
        info!("Stopped by user");
    }
    sink.emit(&LampEvent::Stopped { cycles });
    cycles
}

/// Sleep for `interval`; `false` if `stop` was raised meanwhile.
fn sleep_unless_stopped(interval: Duration, stop: &AtomicBool) -> bool {
    let deadline = Instant::now() + interval;
    loop {
        if stop.load(Ordering::Relaxed) {
            return false;
        }
        let now = Instant::now();
        if now >= deadline {
            return true;
        }
        thread::sleep((deadline - now).min(STOP_POLL));
    }
}
