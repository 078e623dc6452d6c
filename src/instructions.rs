//! # Module defining the instruction set of the SDA5708
//!
//! The SDA5708 only knows two registers and the dot RAM. Which one a byte ends up in is
//! decided by its upper bits:
//!
//! ```text
//! 1010 0DDD   address register, select digit DDD (0 is the leftmost cell)
//! 11C0 PVVV   control register
//! 000R RRRR   dot row, written to the selected digit (7 rows follow every address byte)
//! ```
//!
//! ## Control register
//! `C` is the clear bit: 0 erases the complete dot RAM, 1 is normal operation. Leaving it at 0
//! keeps the display blank, so every clear has to be followed by a normal control byte.
//!
//! `P` selects the peak current of the LED multiplexing. 0 is full current, 1 reduces it to
//! 12.5%, which makes every brightness level a lot darker.
//!
//! `VVV` is the brightness. It is inverted: 0 is the brightest setting, 7 switches the dots off
//! while the controller keeps running.
//!
//! Bytes are shifted in LSB first, see the backend module.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
/// Brightness of the dots, as a duty cycle of the multiplexing.
pub enum Brightness {
    /// 100%, the power on default
    Percent100 = 0b000,
    /// 53%
    Percent53 = 0b001,
    /// 40%
    Percent40 = 0b010,
    /// 27%
    Percent27 = 0b011,
    /// 20%
    Percent20 = 0b100,
    /// 13%
    Percent13 = 0b101,
    /// 6.6%
    Percent7 = 0b110,
    /// 0%, dark but not powered down
    Dark = 0b111,
}

impl Brightness {
    /// Converts a level into a brightness. Only the lowest three bits are used, so the level
    /// wraps around: 8 is `Percent100` again and 15 is `Dark`.
    pub fn from_level(level: u8) -> Brightness {
        match level & 0b111 {
            0b000 => Brightness::Percent100,
            0b001 => Brightness::Percent53,
            0b010 => Brightness::Percent40,
            0b011 => Brightness::Percent27,
            0b100 => Brightness::Percent20,
            0b101 => Brightness::Percent13,
            0b110 => Brightness::Percent7,
            _ => Brightness::Dark,
        }
    }

    /// The 3 bit level, 0 (brightest) to 7 (dark).
    pub fn level(self) -> u8 {
        self as u8
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Brightness::Percent100
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
/// Peak current of the multiplexed LED drivers.
pub enum PeakCurrent {
    /// maximum peak current, the power on default
    Full = 0,
    /// 12.5% of the maximum peak current
    Reduced = 1,
}

impl Default for PeakCurrent {
    fn default() -> Self {
        PeakCurrent::Full
    }
}

/// SDA5708 instruction set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Instruction {
    /// select the digit the following seven rows are written to; only the low three bits are used
    // translates to: 0xA0 OR with the digit
    Address(u8),

    /// write the control register
    // translates to: 0xC0 OR with clear, peak current and brightness bits
    Control {
        /// erase the dot RAM instead of normal operation
        clear: bool,

        /// peak current of the LED drivers
        peak_current: PeakCurrent,

        /// brightness of the dots
        brightness: Brightness,
    },

    /// one row of a glyph, in font storage format (dots in the upper 5 bits)
    // translates to: the row shifted right by 3
    Row(u8),
}

use Instruction::*;

// Use full binary presentation instead of hex, to look the same as the register description
impl Instruction {
    /// Returns the specific instruction as a byte (u8) which can be send over a wire
    pub fn byte(self) -> u8 {
        match self {
            Address(digit) => 0b1010_0000 | (digit & 0b0000_0111),
            Control {
                clear,
                peak_current,
                brightness,
            } => {
                0b1100_0000
                    | ((!clear as u8) << 5)
                    | ((peak_current as u8) << 3)
                    | brightness as u8
            }
            Row(row) => row >> 3,
        }
    }
}

/// A prelude for convenience, it pulls all enums into scope.
pub mod prelude {
    pub use super::{
        Brightness, Brightness::*,
        Instruction, Instruction::*,
        PeakCurrent,
    };
}
