//! # Placeholder pins
//!
//! Some boards tie RESET of the SDA5708 to the supply (or to their own reset circuit), but the
//! backends still want a pin for it. Hand them a DummyOutputPin and it will behave as a working
//! pin that does nothing. Also handy to run the driver on a host without any hardware.

use embedded_hal::digital::v2::OutputPin;

/// provides a dummy OutputPin.
#[derive(Debug, Clone, Copy)]
pub struct DummyOutputPin;

impl OutputPin for DummyOutputPin {
    type Error = core::convert::Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
