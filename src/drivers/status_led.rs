//! Three-colour status lamp driver.
//!
//! Three digital outputs drive discrete red / yellow / green LEDs.  The
//! pins are any `embedded-hal` [`OutputPin`]: [`SimPin`](super::sim_pin::SimPin)
//! on host builds, a HAL GPIO on a board.
//!
//! Pin write failures are logged and otherwise ignored; the lamp is a
//! best-effort indicator.  The mirrored level is updated regardless, so it
//! always reports the last *requested* level.

use embedded_hal::digital::{OutputPin, PinState};
use log::warn;

use crate::app::ports::{Channel, IndicatorPort};

pub struct IndicatorLamp<R, Y, G> {
    red: R,
    yellow: Y,
    green: G,
    active: [bool; Channel::COUNT],
}

impl<R: OutputPin, Y: OutputPin, G: OutputPin> IndicatorLamp<R, Y, G> {
    pub fn new(red: R, yellow: Y, green: G) -> Self {
        Self {
            red,
            yellow,
            green,
            active: [false; Channel::COUNT],
        }
    }

    /// Last requested level of `channel`.
    pub fn is_active(&self, channel: Channel) -> bool {
        self.active[channel.index()]
    }

    /// Channels currently lit, in index order.
    pub fn active_channels(&self) -> impl Iterator<Item = Channel> + '_ {
        Channel::ALL.into_iter().filter(|c| self.is_active(*c))
    }

    /// Borrow the three pins (red, yellow, green).
    pub fn pins(&self) -> (&R, &Y, &G) {
        (&self.red, &self.yellow, &self.green)
    }

    /// Release the three pins (red, yellow, green).
    pub fn release(self) -> (R, Y, G) {
        (self.red, self.yellow, self.green)
    }
}

impl<R: OutputPin, Y: OutputPin, G: OutputPin> IndicatorPort for IndicatorLamp<R, Y, G> {
    fn set_active(&mut self, channel: Channel, active: bool) {
        let level = PinState::from(active);
        match channel {
            Channel::Red => {
                if let Err(e) = self.red.set_state(level) {
                    warn!("{} LED write failed: {:?}", channel, e);
                }
            }
            Channel::Yellow => {
                if let Err(e) = self.yellow.set_state(level) {
                    warn!("{} LED write failed: {:?}", channel, e);
                }
            }
            Channel::Green => {
                if let Err(e) = self.green.set_state(level) {
                    warn!("{} LED write failed: {:?}", channel, e);
                }
            }
        }
        self.active[channel.index()] = active;
    }
}
