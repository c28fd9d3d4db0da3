//! Board reset pad
//!
//! Boards that route the PHY reset to a GPIO get the modelled `rst_n` level
//! through [`ResetPad`]. The pad is active-low and only written when the
//! level changes.
//!
//! # Usage
//!
//! ```ignore
//! let mut pad = ResetPad::new(rst_pin)?;
//! loop {
//!     let out = phy.tick(tx_beat, rx_lines);
//!     if let Some(rst_n) = out.rst_n {
//!         pad.update(rst_n)?;
//!     }
//! }
//! ```

use embedded_hal::digital::OutputPin;

use crate::driver::error::{ConfigError, ConfigResult};

/// Active-low reset output bound to an `embedded_hal` pin
#[derive(Debug)]
pub struct ResetPad<P: OutputPin> {
    pin: P,
    level: bool,
}

impl<P: OutputPin> ResetPad<P> {
    /// Take the pin and drive it low (reset asserted)
    ///
    /// The PHY starts in reset, so the pad does too.
    pub fn new(mut pin: P) -> ConfigResult<Self> {
        pin.set_low().map_err(|_| ConfigError::GpioError)?;
        Ok(Self { pin, level: false })
    }

    /// Drive `rst_n` if it differs from the current level
    pub fn update(&mut self, rst_n: bool) -> ConfigResult<()> {
        if rst_n == self.level {
            return Ok(());
        }

        let result = if rst_n {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        result.map_err(|_| ConfigError::GpioError)?;
        self.level = rst_n;
        Ok(())
    }

    /// Level currently driven
    pub fn level(&self) -> bool {
        self.level
    }

    /// True while the pad holds the PHY in reset
    pub fn is_asserted(&self) -> bool {
        !self.level
    }

    /// Give the pin back
    pub fn into_pin(self) -> P {
        self.pin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockPin;

    #[test]
    fn starts_asserted() {
        let observer = MockPin::new();
        let pad = ResetPad::new(observer.clone()).unwrap();
        assert!(pad.is_asserted());
        assert_eq!(observer.writes(), [false]);
    }

    #[test]
    fn writes_only_on_change() {
        let observer = MockPin::new();
        let mut pad = ResetPad::new(observer.clone()).unwrap();
        for level in [false, true, true, true, false] {
            pad.update(level).unwrap();
        }
        assert_eq!(observer.writes(), [false, true, false]);
        assert!(!pad.level());
    }

    #[test]
    fn pin_failure_is_gpio_error() {
        assert_eq!(
            ResetPad::new(MockPin::failing()).err(),
            Some(ConfigError::GpioError)
        );

        let observer = MockPin::new();
        let mut pad = ResetPad::new(observer.clone()).unwrap();
        observer.set_failing(true);
        assert_eq!(pad.update(true), Err(ConfigError::GpioError));
        // Level is unchanged after a failed write
        assert!(pad.is_asserted());
    }
}
