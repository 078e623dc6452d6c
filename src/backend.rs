//! # Transports for the SDA5708 serial protocol
//!
//! The SDA5708 is write only. A byte is transferred in a frame:
//!
//! ```text
//! LOAD  ---+                                         +---
//!          +-----------------------------------------+
//! DATA  ----+ D0 + D1 + D2 + D3 + D4 + D5 + D6 + D7 +-----
//! SDCLK ---+  +--+ +--+ +--+ +--+ +--+ +--+ +--+ +--+
//!          +--+  +-+  +-+  +-+  +-+  +-+  +-+  +-+  +-----
//! ```
//!
//! LOAD going low starts the frame, DATA is sampled on every rising edge of SDCLK (LSB first)
//! and the byte is latched when LOAD goes high again. There is no other delimiter: a frame that
//! is cut short leaves the internal bit counter of the display out of step until the next reset.

use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::blocking::spi::Write as SpiWrite;
use embedded_hal::digital::v2::OutputPin;

/// Something that can shift bytes into an SDA5708 and pulse its RESET line.
pub trait SDA5708Backend {
    type Error;

    /// Transfers one byte in a single LOAD framed transmission.
    fn write_byte(&mut self, value: u8) -> Result<(), Self::Error>;

    /// Resets the display controller. LOAD is left idle (high).
    fn reset(&mut self) -> Result<(), Self::Error>;
}

/// Used to run without delay on a slow enough clock speed
pub struct NoDelay {}

impl DelayUs<u8> for NoDelay {
    #[inline]
    fn delay_us(&mut self, _us: u8) {}
}

/// Bit bang backend driving all four lines of the display with GPIO pins.
pub struct SDA5708GpioBackend<LOAD, DATA, SDCLK, RST, DELAY = NoDelay>
where
    LOAD: OutputPin,
    DATA: OutputPin,
    SDCLK: OutputPin,
    RST: OutputPin,
{
    load: LOAD,
    data: DATA,
    sdclk: SDCLK,
    rst: RST,
    delay: DELAY,
}

impl<LOAD, DATA, SDCLK, RST, ERR> SDA5708GpioBackend<LOAD, DATA, SDCLK, RST, NoDelay>
where
    LOAD: OutputPin<Error = ERR>,
    DATA: OutputPin<Error = ERR>,
    SDCLK: OutputPin<Error = ERR>,
    RST: OutputPin<Error = ERR>,
{
    /// Constructs the backend from the four display lines, which have to be configured as
    /// outputs already. SDCLK is pulled low and LOAD high, so the bus starts idle.
    ///
    /// If your clock frequency is too high for the display to follow, consider `new_with_delay`.
    pub fn new(load: LOAD, data: DATA, sdclk: SDCLK, rst: RST) -> Result<Self, ERR> {
        Self::new_with_delay(load, data, sdclk, rst, NoDelay {})
    }
}

impl<LOAD, DATA, SDCLK, RST, DELAY, ERR> SDA5708GpioBackend<LOAD, DATA, SDCLK, RST, DELAY>
where
    LOAD: OutputPin<Error = ERR>,
    DATA: OutputPin<Error = ERR>,
    SDCLK: OutputPin<Error = ERR>,
    RST: OutputPin<Error = ERR>,
    DELAY: DelayUs<u8>,
{
    /// Same as `new`, but waits 1us after every SDCLK edge and while RESET is held low.
    ///
    /// ```rust,ignore
    /// let delay = cortex_m::delay::Delay::new(core.SYST, clocks.system_clock.freq().integer());
    ///
    /// let backend = SDA5708GpioBackend::new_with_delay(load, data, sdclk, rst, delay).unwrap();
    /// ```
    pub fn new_with_delay(
        mut load: LOAD,
        data: DATA,
        mut sdclk: SDCLK,
        rst: RST,
        delay: DELAY,
    ) -> Result<Self, ERR> {
        sdclk.set_low()?;
        load.set_high()?;
        Ok(SDA5708GpioBackend {
            load,
            data,
            sdclk,
            rst,
            delay,
        })
    }

    /// Gives back the pins and the delay.
    pub fn release(self) -> (LOAD, DATA, SDCLK, RST, DELAY) {
        (self.load, self.data, self.sdclk, self.rst, self.delay)
    }

    #[inline]
    fn write_bit(&mut self, high: bool) -> Result<(), ERR> {
        if high {
            self.data.set_high()?;
        } else {
            self.data.set_low()?;
        }
        self.sdclk.set_high()?;
        self.delay.delay_us(1);
        self.sdclk.set_low()?;
        self.delay.delay_us(1);
        Ok(())
    }
}

impl<LOAD, DATA, SDCLK, RST, DELAY, ERR> SDA5708Backend
    for SDA5708GpioBackend<LOAD, DATA, SDCLK, RST, DELAY>
where
    LOAD: OutputPin<Error = ERR>,
    DATA: OutputPin<Error = ERR>,
    SDCLK: OutputPin<Error = ERR>,
    RST: OutputPin<Error = ERR>,
    DELAY: DelayUs<u8>,
{
    type Error = ERR;

    fn write_byte(&mut self, mut value: u8) -> Result<(), ERR> {
        self.load.set_low()?;
        for _ in 0..8 {
            self.write_bit((value & 0x01) == 0x01)?;
            value >>= 1;
        }
        self.load.set_high()
    }

    fn reset(&mut self) -> Result<(), ERR> {
        self.load.set_high()?;
        self.rst.set_low()?;
        self.delay.delay_us(1);
        self.rst.set_high()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SPIBackendError<PinErr, SpiErr> {
    Pin(PinErr),
    Spi(SpiErr),
}

/// Backend using a hardware SPI for DATA and SDCLK.
///
/// The SPI has to run in MODE_0 (clock idles low, data sampled on the rising edge). SPI sends
/// the most significant bit first, the SDA5708 expects the least significant one, so every byte
/// is mirrored before it is handed to the SPI.
pub struct SDA5708SpiBackend<SPI, LOAD, RST>
where
    SPI: SpiWrite<u8>,
    LOAD: OutputPin,
    RST: OutputPin,
{
    spi: SPI,
    load: LOAD,
    rst: RST,
}

impl<SPI, LOAD, RST, PinErr, SpiErr> SDA5708SpiBackend<SPI, LOAD, RST>
where
    SPI: SpiWrite<u8, Error = SpiErr>,
    LOAD: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
{
    pub fn new(spi: SPI, mut load: LOAD, rst: RST) -> Result<Self, PinErr> {
        load.set_high()?;
        Ok(SDA5708SpiBackend { spi, load, rst })
    }

    /// Gives back the SPI and the pins.
    pub fn release(self) -> (SPI, LOAD, RST) {
        (self.spi, self.load, self.rst)
    }
}

impl<SPI, LOAD, RST, PinErr, SpiErr> SDA5708Backend for SDA5708SpiBackend<SPI, LOAD, RST>
where
    SPI: SpiWrite<u8, Error = SpiErr>,
    LOAD: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
{
    type Error = SPIBackendError<PinErr, SpiErr>;

    fn write_byte(&mut self, value: u8) -> Result<(), SPIBackendError<PinErr, SpiErr>> {
        self.load.set_low().map_err(SPIBackendError::Pin)?;
        self.spi
            .write(&[value.reverse_bits()])
            .map_err(SPIBackendError::Spi)?;
        self.load.set_high().map_err(SPIBackendError::Pin)
    }

    fn reset(&mut self) -> Result<(), SPIBackendError<PinErr, SpiErr>> {
        self.load.set_high().map_err(SPIBackendError::Pin)?;
        self.rst.set_low().map_err(SPIBackendError::Pin)?;
        self.rst.set_high().map_err(SPIBackendError::Pin)
    }
}
