//! GPIO control for the reset line.
//!
//! Panels address their reset line by number so one board support type can
//! serve every pin. [`ResetPin`] covers the common case of a single
//! embedded-hal pin.

use embedded_hal::digital::OutputPin;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GpioError {
    /// The pin number is not handled by this GPIO controller
    InvalidPin,
    /// Driving the pin failed
    Level,
}

/// Pin control as seen by a panel driver.
pub trait Gpio {
    /// Configure `pin` as a push-pull output.
    fn configure_output(&mut self, pin: u8) -> Result<(), GpioError>;

    fn set_level(&mut self, pin: u8, high: bool) -> Result<(), GpioError>;

    /// Return `pin` to its reset state, giving up the claim on it.
    fn reset_pin(&mut self, pin: u8);
}

/// A single embedded-hal output pin, known under a pin number.
pub struct ResetPin<P> {
    number: u8,
    pin: P,
    configured: bool,
}

impl<P: OutputPin> ResetPin<P> {
    pub fn new(number: u8, pin: P) -> Self {
        ResetPin {
            number,
            pin,
            configured: false,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// Consume and return the underlying pin
    pub fn release(self) -> P {
        self.pin
    }

    fn check(&self, pin: u8) -> Result<(), GpioError> {
        if pin == self.number {
            Ok(())
        } else {
            Err(GpioError::InvalidPin)
        }
    }
}

impl<P: OutputPin> Gpio for ResetPin<P> {
    fn configure_output(&mut self, pin: u8) -> Result<(), GpioError> {
        self.check(pin)?;
        self.configured = true;
        Ok(())
    }

    fn set_level(&mut self, pin: u8, high: bool) -> Result<(), GpioError> {
        self.check(pin)?;
        if !self.configured {
            return Err(GpioError::InvalidPin);
        }
        if high {
            self.pin.set_high().map_err(|_| GpioError::Level)
        } else {
            self.pin.set_low().map_err(|_| GpioError::Level)
        }
    }

    fn reset_pin(&mut self, pin: u8) {
        if pin == self.number {
            self.configured = false;
        }
    }
}

/// For boards without a reset line. Every pin is rejected.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoGpio;

impl Gpio for NoGpio {
    fn configure_output(&mut self, _pin: u8) -> Result<(), GpioError> {
        Err(GpioError::InvalidPin)
    }

    fn set_level(&mut self, _pin: u8, _high: bool) -> Result<(), GpioError> {
        Err(GpioError::InvalidPin)
    }

    fn reset_pin(&mut self, _pin: u8) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    struct MockPin {
        high: bool,
    }

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            Ok(())
        }
    }

    #[test]
    fn drives_its_own_number() {
        let mut gpio = ResetPin::new(5, MockPin { high: false });
        gpio.configure_output(5).unwrap();
        gpio.set_level(5, true).unwrap();
        assert!(gpio.pin.high);
        gpio.set_level(5, false).unwrap();
        assert!(!gpio.pin.high);
    }

    #[test]
    fn rejects_other_numbers() {
        let mut gpio = ResetPin::new(5, MockPin { high: false });
        assert_eq!(gpio.configure_output(6), Err(GpioError::InvalidPin));
        assert_eq!(gpio.set_level(6, true), Err(GpioError::InvalidPin));
        assert!(!gpio.is_configured());
    }

    #[test]
    fn reset_pin_drops_the_claim() {
        let mut gpio = ResetPin::new(9, MockPin { high: false });
        gpio.configure_output(9).unwrap();
        gpio.reset_pin(9);
        assert!(!gpio.is_configured());
        assert_eq!(gpio.set_level(9, true), Err(GpioError::InvalidPin));
        assert!(!gpio.release().high);
    }
}
