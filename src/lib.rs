//! # Driver for the Siemens SDA5708 dot matrix display
//!
//! The SDA5708 is a small LED display with 8 cells of 5x7 dots, found in a lot of old set top
//! boxes (the DBox 1 for one). It is connected with four lines: LOAD, DATA, SDCLK and RESET, and
//! only ever listens, there is no way to read anything back.
//!
//! ```text
//! Pin  Function           (pin 1 is on the right of the back side)
//!  1   Vcc
//!  2   LOAD
//!  3   DATA
//!  4   SDCLK
//!  5   RESET
//!  6   GND
//! ```
//!
//! Typically you want to look into the following functions:
//!  - `SDA5708GpioBackend::new()` with the four pins, then `SDA5708::new()` with that backend
//!  - `SDA5708::render_text()` to show a string
//!  - `SDA5708::set_brightness()` to dim the display
//!  - `SDA5708::clear()` to blank all cells
//!
//! With the `textmode` feature the display implements `core::fmt::Write`, with the `graphics`
//! feature it is an `embedded_graphics_core::DrawTarget` of 40x7 dots.
//!
//! Nothing the display is sent can be wrong from its point of view: characters without a glyph
//! are shown as a space, digit positions past the last cell land on the first one and brightness
//! levels wrap around. The only errors are the ones of the pins (or SPI) used.

#![cfg_attr(not(test), no_std)]

pub mod backend;
pub mod dummypins;
pub mod font;
pub mod instructions;

#[cfg(feature = "textmode")]
pub mod textmode;

#[cfg(feature = "graphics")]
pub mod drawtarget;

pub use crate::backend::{SDA5708Backend, SDA5708GpioBackend, SDA5708SpiBackend};

use crate::font::Glyph;
use crate::instructions::prelude::*;

/// Number of character cells
pub const DIGITS: usize = 8;

/// Dot rows per cell
pub const ROWS: usize = 7;

/// Dot columns per cell
pub const COLUMNS: usize = 5;

/// Main struct of the driver, owning the backend and with it all lines of one display.
pub struct SDA5708<Backend> {
    backend: Backend,
    brightness: Brightness,
    peak_current: PeakCurrent,
    // a frame was interrupted, the display needs a reset before it understands us again
    resync: bool,
    #[cfg(feature = "textmode")]
    text_col: u8,
    #[cfg(feature = "graphics")]
    framebuffer: [Glyph; DIGITS],
}

impl<Backend> SDA5708<Backend>
where
    Backend: SDA5708Backend,
{
    /// Create a new instance of the driver and reset the display.
    ///
    /// After the reset the dot RAM content is undefined and the brightness is at its maximum.
    pub fn new(backend: Backend) -> Result<SDA5708<Backend>, Backend::Error> {
        let mut display = SDA5708 {
            backend,
            brightness: Brightness::default(),
            peak_current: PeakCurrent::default(),
            resync: true,
            #[cfg(feature = "textmode")]
            text_col: 0,
            #[cfg(feature = "graphics")]
            framebuffer: [[0; ROWS]; DIGITS],
        };
        display.reset()?;
        Ok(display)
    }

    /// Pulses the RESET line, bringing the display back to its power on state.
    ///
    /// Only needed after the display was disturbed from outside; the driver resets on its own
    /// when a transfer failed half way.
    pub fn reset(&mut self) -> Result<(), Backend::Error> {
        #[cfg(feature = "defmt")]
        defmt::debug!("sda5708: reset");

        self.backend.reset()?;
        self.brightness = Brightness::default();
        self.peak_current = PeakCurrent::default();
        self.resync = false;
        Ok(())
    }

    /// Gives back the backend.
    pub fn release(self) -> Backend {
        self.backend
    }

    /// Send a single instruction to the display.
    pub fn write_instruction(&mut self, instruction: Instruction) -> Result<(), Backend::Error> {
        self.resync_if_needed()?;
        let resync = &mut self.resync;
        self.backend
            .write_byte(instruction.byte())
            .map_err(|err| {
                *resync = true;
                err
            })
    }

    // Resets a display left out of step by a failed transfer. Must run before the shadow
    // registers are changed, the reset restores their defaults.
    fn resync_if_needed(&mut self) -> Result<(), Backend::Error> {
        if self.resync {
            #[cfg(feature = "defmt")]
            defmt::warn!("sda5708: previous transfer failed, resetting");

            self.reset()?;
        }
        Ok(())
    }

    /// Shows `c` in the cell at `position` (0 is the leftmost).
    ///
    /// Characters outside of ' ' ..= '{' are shown as a space. Positions past the last cell are
    /// written to cell 0.
    pub fn render_char(&mut self, c: char, position: u8) -> Result<(), Backend::Error> {
        self.write_glyph(font::glyph(c), position)
    }

    /// Shows a custom 5x7 bitmap in the cell at `position`.
    ///
    /// The glyph uses the font format: one byte per row from the top, dots in the upper 5 bits.
    pub fn write_glyph(&mut self, glyph: &Glyph, position: u8) -> Result<(), Backend::Error> {
        let digit = if (position as usize) < DIGITS { position } else { 0 };
        self.write_instruction(Address(digit))?;
        for row in glyph.iter() {
            self.write_instruction(Row(*row))?;
        }
        Ok(())
    }

    /// Shows `text` starting at cell `start`, one cell per character.
    ///
    /// There is no wrapping: every character past the last cell is written to cell 0, so a text
    /// that doesn't fit overwrites the first cell again and again.
    pub fn render_text(&mut self, text: &str, start: u8) -> Result<(), Backend::Error> {
        #[cfg(feature = "defmt")]
        defmt::trace!("sda5708: text {=str} at {=u8}", text, start);

        let mut position = start;
        for c in text.chars() {
            self.render_char(c, position)?;
            position = position.wrapping_add(1);
        }
        Ok(())
    }

    /// Blanks all cells by writing a space to each of them, left to right.
    pub fn clear(&mut self) -> Result<(), Backend::Error> {
        for position in 0..DIGITS as u8 {
            self.render_char(' ', position)?;
        }
        Ok(())
    }

    /// Erases the dot RAM with the clear bit of the control register.
    ///
    /// Two bytes instead of the 64 of `clear()`. Brightness and peak current are kept.
    pub fn hw_clear(&mut self) -> Result<(), Backend::Error> {
        self.resync_if_needed()?;
        self.write_control(true)?;
        self.write_control(false)
    }

    /// Sets the brightness, 0 is the brightest and 7 the darkest level.
    ///
    /// Only the lowest three bits of `level` are used, so 8 is as bright as 0 and 15 as dark as 7.
    pub fn set_brightness(&mut self, level: u8) -> Result<(), Backend::Error> {
        self.resync_if_needed()?;
        self.brightness = Brightness::from_level(level);

        #[cfg(feature = "defmt")]
        defmt::debug!("sda5708: brightness {}", self.brightness);

        self.write_control(false)
    }

    /// Full or reduced (12.5%) peak current for the LEDs.
    ///
    /// Reduced current makes every brightness level considerably darker.
    pub fn set_peak_current(&mut self, peak_current: PeakCurrent) -> Result<(), Backend::Error> {
        self.resync_if_needed()?;
        self.peak_current = peak_current;
        self.write_control(false)
    }

    /// The brightness last written to the display.
    pub fn brightness(&self) -> Brightness {
        self.brightness
    }

    /// The peak current last written to the display.
    pub fn peak_current(&self) -> PeakCurrent {
        self.peak_current
    }

    fn write_control(&mut self, clear: bool) -> Result<(), Backend::Error> {
        self.write_instruction(Control {
            clear,
            peak_current: self.peak_current,
            brightness: self.brightness,
        })
    }
}
