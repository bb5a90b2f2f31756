//! Simulated GPIO output pin.
//!
//! Stands in for a real push-pull output on host builds.  Implements the
//! `embedded-hal` digital traits so the indicator driver is written against
//! the same interface a board support crate would provide, and reports
//! every level change through the logger instead of toggling a register.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin, StatefulOutputPin};
use log::debug;

/// An output pin that only remembers its level.
#[derive(Debug)]
pub struct SimPin {
    gpio: i32,
    high: bool,
}

impl SimPin {
    /// Configure `gpio` as an output, driven low.
    pub fn new(gpio: i32) -> Self {
        debug!("GPIO {} initialized", gpio);
        debug!("GPIO {} set to OUTPUT", gpio);
        Self { gpio, high: false }
    }

    /// The GPIO number this pin was constructed with.
    pub fn gpio(&self) -> i32 {
        self.gpio
    }

    /// Level of the last write.
    pub fn is_high(&self) -> bool {
        self.high
    }

    fn write(&mut self, high: bool) {
        self.high = high;
        if high {
            debug!("GPIO {} -> HIGH (LED ON)", self.gpio);
        } else {
            debug!("GPIO {} -> LOW (LED OFF)", self.gpio);
        }
    }
}

impl ErrorType for SimPin {
    type Error = Infallible;
}

impl OutputPin for SimPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(true);
        Ok(())
    }
}

impl StatefulOutputPin for SimPin {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high)
    }
}
