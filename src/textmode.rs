//! # Textmode extension for the SDA5708 driver
//!
//! Keeps a text cursor over the 8 cells and implements the Write trait, so `write!()` and
//! `writeln!()` work directly on the display, like a (very short) teletype.
//!
//! - `'\r'` moves the cursor back to the first cell
//! - `'\n'` blanks the rest of the line and moves the cursor back to the first cell
//! - every other character is shown at the cursor, which then moves one cell to the right and
//!   wraps around after the last one
//!
//! The wrap happens with the next character, not right after the last cell was written, so a
//! `writeln!()` of exactly 8 characters keeps them on the display.
//!
//! ```rust,ignore
//! display.cls().unwrap();
//! write!(display, "{:>8}", 1234).unwrap();
//! ```
use core::fmt::Error as FmtError;
use core::fmt::Result as FmtResult;
use core::fmt::Write;

use crate::{backend::SDA5708Backend, DIGITS, SDA5708};

impl<Backend> SDA5708<Backend>
where
    Backend: SDA5708Backend,
{
    /// cell the next character is written to
    pub fn cursor(&self) -> u8 {
        self.text_col % DIGITS as u8
    }

    /// move the text cursor, positions past the last cell are silently ignored
    pub fn set_cursor(&mut self, text_col: u8) {
        if (text_col as usize) < DIGITS {
            self.text_col = text_col;
        }
    }

    /// clear the display and set the cursor to the first cell
    pub fn cls(&mut self) -> Result<(), Backend::Error> {
        self.text_col = 0;
        self.clear()
    }

    // text_col == DIGITS after the last cell was written: the line is full but not wrapped yet
    fn write_char_at_cursor(&mut self, c: char) -> Result<(), Backend::Error> {
        if self.text_col as usize >= DIGITS {
            self.text_col = 0;
        }
        self.render_char(c, self.text_col)?;
        self.text_col += 1;
        Ok(())
    }
}

impl<Backend> Write for SDA5708<Backend>
where
    Backend: SDA5708Backend,
{
    fn write_str(&mut self, s: &str) -> FmtResult {
        for c in s.chars() {
            match c {
                '\r' => self.text_col = 0,
                '\n' => {
                    for position in self.text_col..DIGITS as u8 {
                        self.render_char(' ', position).map_err(|_| FmtError)?;
                    }
                    self.text_col = 0;
                }
                _ => self.write_char_at_cursor(c).map_err(|_| FmtError)?,
            }
        }
        Ok(())
    }
}
