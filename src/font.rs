//! # 5x7 font of the SDA5708
//!
//! Every glyph is 7 bytes, one per dot row from top to bottom. A row keeps its 5 dots
//! left-justified in the upper bits of the byte, so `0b1000_0000` is the leftmost dot and
//! `0b0000_1000` the rightmost. The lower 3 bits are always zero. The display itself wants
//! the dots right-justified; see `Instruction::Row` for the conversion.
//!
//! The table covers the printable ASCII range 0x20 (space) up to and including 0x7E ('~'),
//! indexed by `code - 0x20`.

use core::convert::TryFrom;

use crate::ROWS;

/// One character cell: 7 rows of 5 dots, left-justified.
pub type Glyph = [u8; ROWS];

/// First character code in the font (space).
pub const FIRST_CHAR: u8 = 0x20;

/// Last character code `glyph()` will look up. Everything above renders as a space.
///
/// '|', '}' and '~' are in the table but are not reachable through `glyph()`, which keeps the
/// output identical to the firmware that has been driving these displays for years.
pub const LAST_CHAR: u8 = 0x7B;

/// Number of glyphs in `FONT`.
pub const GLYPHS: usize = 95;

/// The font, 0x20 ..= 0x7E.
pub static FONT: [Glyph; GLYPHS] = [
    [0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000], // ' '
    [0b00100000, 0b00100000, 0b00100000, 0b00100000, 0b00100000, 0b00000000, 0b00100000], // '!'
    [0b01010000, 0b01010000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000], // '"'
    [0b01010000, 0b01010000, 0b11111000, 0b01010000, 0b11111000, 0b01010000, 0b01010000], // '#'
    [0b00100000, 0b01111000, 0b10100000, 0b01110000, 0b00101000, 0b00110000, 0b00100000], // '$'
    [0b11000000, 0b11001000, 0b00010000, 0b00100000, 0b01000000, 0b10011000, 0b00011000], // '%'
    [0b01000000, 0b10100000, 0b01000000, 0b10100000, 0b10010000, 0b10001000, 0b01110000], // '&'
    [0b00010000, 0b00010000, 0b00100000, 0b00000000, 0b00000000, 0b00000000, 0b00000000], // '\''
    [0b00100000, 0b01000000, 0b01000000, 0b01000000, 0b01000000, 0b01000000, 0b00100000], // '('
    [0b00010000, 0b00001000, 0b00001000, 0b00001000, 0b00001000, 0b00001000, 0b00010000], // ')'
    [0b00000000, 0b10001000, 0b01010000, 0b11111000, 0b01010000, 0b10001000, 0b00000000], // '*'
    [0b00000000, 0b00100000, 0b00100000, 0b11111000, 0b00100000, 0b00100000, 0b00000000], // '+'
    [0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b01000000, 0b01000000, 0b10000000], // ','
    [0b00000000, 0b00000000, 0b00000000, 0b11111000, 0b00000000, 0b00000000, 0b00000000], // '-'
    [0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b11000000, 0b11000000], // '.'
    [0b00000000, 0b00001000, 0b00010000, 0b00100000, 0b01000000, 0b10000000, 0b00000000], // '/'
    [0b01110000, 0b10001000, 0b10011000, 0b10101000, 0b11001000, 0b10001000, 0b01110000], // '0'
    [0b00100000, 0b01100000, 0b00100000, 0b00100000, 0b00100000, 0b00100000, 0b01110000], // '1'
    [0b01110000, 0b00001000, 0b00001000, 0b01110000, 0b10000000, 0b10000000, 0b11111000], // '2'
    [0b11110000, 0b00001000, 0b00001000, 0b01110000, 0b00001000, 0b00001000, 0b11110000], // '3'
    [0b00001000, 0b00011000, 0b00101000, 0b01001000, 0b11111000, 0b00001000, 0b00001000], // '4'
    [0b11111000, 0b10000000, 0b10000000, 0b11110000, 0b00001000, 0b10001000, 0b01110000], // '5'
    [0b01110000, 0b10000000, 0b10000000, 0b11110000, 0b10001000, 0b10001000, 0b01110000], // '6'
    [0b11111000, 0b00001000, 0b00001000, 0b00010000, 0b00100000, 0b01000000, 0b10000000], // '7'
    [0b01110000, 0b10001000, 0b10001000, 0b01110000, 0b10001000, 0b10001000, 0b01110000], // '8'
    [0b01110000, 0b10001000, 0b10001000, 0b01111000, 0b00010000, 0b00100000, 0b01000000], // '9'
    [0b00000000, 0b00000000, 0b01100000, 0b01100000, 0b00000000, 0b01100000, 0b01100000], // ':'
    [0b00000000, 0b00000000, 0b01100000, 0b01100000, 0b00000000, 0b00100000, 0b01000000], // ';'
    [0b00010000, 0b00100000, 0b01000000, 0b10000000, 0b01000000, 0b00100000, 0b00010000], // '<'
    [0b00000000, 0b00000000, 0b11111000, 0b00000000, 0b11111000, 0b00000000, 0b00000000], // '='
    [0b01000000, 0b00100000, 0b00010000, 0b00001000, 0b00010000, 0b00100000, 0b01000000], // '>'
    [0b01110000, 0b10001000, 0b00001000, 0b00110000, 0b01000000, 0b00000000, 0b01000000], // '?'
    [0b01110000, 0b10001000, 0b10111000, 0b10101000, 0b10111000, 0b10000000, 0b01111000], // '@'
    [0b00100000, 0b01010000, 0b10001000, 0b11111000, 0b10001000, 0b10001000, 0b10001000], // 'A'
    [0b11110000, 0b10001000, 0b10001000, 0b11110000, 0b10001000, 0b10001000, 0b11110000], // 'B'
    [0b01110000, 0b10001000, 0b10000000, 0b10000000, 0b10000000, 0b10001000, 0b01110000], // 'C'
    [0b11110000, 0b10001000, 0b10001000, 0b10001000, 0b10001000, 0b10001000, 0b11110000], // 'D'
    [0b11111000, 0b10000000, 0b10000000, 0b11110000, 0b10000000, 0b10000000, 0b11111000], // 'E'
    [0b11111000, 0b10000000, 0b10000000, 0b11110000, 0b10000000, 0b10000000, 0b10000000], // 'F'
    [0b01110000, 0b10001000, 0b10000000, 0b10000000, 0b10011000, 0b10001000, 0b01111000], // 'G'
    [0b10001000, 0b10001000, 0b10001000, 0b11111000, 0b10001000, 0b10001000, 0b10001000], // 'H'
    [0b01110000, 0b00100000, 0b00100000, 0b00100000, 0b00100000, 0b00100000, 0b01110000], // 'I'
    [0b11111000, 0b00010000, 0b00010000, 0b00010000, 0b10010000, 0b10010000, 0b01100000], // 'J'
    [0b10001000, 0b10010000, 0b10100000, 0b11000000, 0b10100000, 0b10010000, 0b10001000], // 'K'
    [0b10000000, 0b10000000, 0b10000000, 0b10000000, 0b10000000, 0b10000000, 0b11111000], // 'L'
    [0b10001000, 0b11011000, 0b10101000, 0b10001000, 0b10001000, 0b10001000, 0b10001000], // 'M'
    [0b10001000, 0b11001000, 0b10101000, 0b10011000, 0b10001000, 0b10001000, 0b10001000], // 'N'
    [0b01110000, 0b10001000, 0b10001000, 0b10001000, 0b10001000, 0b10001000, 0b01110000], // 'O'
    [0b11110000, 0b10001000, 0b10001000, 0b11110000, 0b10000000, 0b10000000, 0b10000000], // 'P'
    [0b01110000, 0b10001000, 0b10001000, 0b10001000, 0b10101000, 0b10011000, 0b01111000], // 'Q'
    [0b11110000, 0b10001000, 0b10001000, 0b11110000, 0b10100000, 0b10010000, 0b10001000], // 'R'
    [0b01111000, 0b10000000, 0b10000000, 0b01110000, 0b00001000, 0b00001000, 0b11110000], // 'S'
    [0b11111000, 0b00100000, 0b00100000, 0b00100000, 0b00100000, 0b00100000, 0b00100000], // 'T'
    [0b10001000, 0b10001000, 0b10001000, 0b10001000, 0b10001000, 0b10001000, 0b01110000], // 'U'
    [0b10001000, 0b10001000, 0b10001000, 0b10001000, 0b10001000, 0b01010000, 0b00100000], // 'V'
    [0b10001000, 0b10001000, 0b10001000, 0b10001000, 0b10101000, 0b11011000, 0b10001000], // 'W'
    [0b10001000, 0b10001000, 0b01010000, 0b00100000, 0b01010000, 0b10001000, 0b10001000], // 'X'
    [0b10001000, 0b10001000, 0b10001000, 0b01010000, 0b00100000, 0b00100000, 0b00100000], // 'Y'
    [0b11111000, 0b00001000, 0b00010000, 0b00100000, 0b01000000, 0b10000000, 0b11111000], // 'Z'
    [0b11100000, 0b10000000, 0b10000000, 0b10000000, 0b10000000, 0b10000000, 0b11100000], // '['
    [0b00000000, 0b10000000, 0b01000000, 0b00100000, 0b00010000, 0b00001000, 0b00000000], // '\\'
    [0b00111000, 0b00001000, 0b00001000, 0b00001000, 0b00001000, 0b00001000, 0b00111000], // ']'
    [0b00100000, 0b01010000, 0b10001000, 0b00000000, 0b00000000, 0b00000000, 0b00000000], // '^'
    [0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b11111000], // '_'
    [0b00010000, 0b00010000, 0b00001000, 0b00000000, 0b00000000, 0b00000000, 0b00000000], // '`'
    [0b00000000, 0b00000000, 0b01110000, 0b10001000, 0b10001000, 0b10011000, 0b01101000], // 'a'
    [0b10000000, 0b10000000, 0b11110000, 0b10001000, 0b10001000, 0b10001000, 0b11110000], // 'b'
    [0b00000000, 0b00000000, 0b01111000, 0b10000000, 0b10000000, 0b10000000, 0b01111000], // 'c'
    [0b00001000, 0b00001000, 0b01111000, 0b10001000, 0b10001000, 0b10001000, 0b01111000], // 'd'
    [0b00000000, 0b00000000, 0b01110000, 0b10001000, 0b11111000, 0b10000000, 0b01111000], // 'e'
    [0b00010000, 0b00101000, 0b01110000, 0b00100000, 0b00100000, 0b00100000, 0b00100000], // 'f'
    [0b00000000, 0b00000000, 0b01110000, 0b10001000, 0b01111000, 0b00001000, 0b01110000], // 'g'
    [0b10000000, 0b10000000, 0b11110000, 0b10001000, 0b10001000, 0b10001000, 0b10001000], // 'h'
    [0b00100000, 0b00000000, 0b00100000, 0b00100000, 0b00100000, 0b00100000, 0b00100000], // 'i'
    [0b00100000, 0b00000000, 0b00100000, 0b00100000, 0b00100000, 0b10100000, 0b01000000], // 'j'
    [0b10000000, 0b10000000, 0b10001000, 0b10010000, 0b10100000, 0b11010000, 0b10001000], // 'k'
    [0b00100000, 0b00100000, 0b00100000, 0b00100000, 0b00100000, 0b00100000, 0b00100000], // 'l'
    [0b00000000, 0b00000000, 0b11010000, 0b10101000, 0b10101000, 0b10101000, 0b10101000], // 'm'
    [0b00000000, 0b00000000, 0b10110000, 0b11001000, 0b10001000, 0b10001000, 0b10001000], // 'n'
    [0b00000000, 0b00000000, 0b01110000, 0b10001000, 0b10001000, 0b10001000, 0b01110000], // 'o'
    [0b00000000, 0b00000000, 0b11110000, 0b10001000, 0b11110000, 0b10000000, 0b10000000], // 'p'
    [0b00000000, 0b00000000, 0b01111000, 0b10001000, 0b01111000, 0b00001000, 0b00001000], // 'q'
    [0b00000000, 0b00000000, 0b10110000, 0b11001000, 0b10000000, 0b10000000, 0b10000000], // 'r'
    [0b00000000, 0b00000000, 0b01111000, 0b10000000, 0b01110000, 0b00001000, 0b11110000], // 's'
    [0b00100000, 0b00100000, 0b01110000, 0b00100000, 0b00100000, 0b00100000, 0b00110000], // 't'
    [0b00000000, 0b00000000, 0b10001000, 0b10001000, 0b10001000, 0b10011000, 0b01101000], // 'u'
    [0b00000000, 0b00000000, 0b10001000, 0b10001000, 0b10001000, 0b01010000, 0b00100000], // 'v'
    [0b00000000, 0b00000000, 0b10001000, 0b10001000, 0b10101000, 0b10101000, 0b01010000], // 'w'
    [0b00000000, 0b00000000, 0b10001000, 0b01010000, 0b00100000, 0b01010000, 0b10001000], // 'x'
    [0b00000000, 0b00000000, 0b10001000, 0b10001000, 0b11111000, 0b00001000, 0b01110000], // 'y'
    [0b00000000, 0b00000000, 0b11111000, 0b00010000, 0b00100000, 0b01000000, 0b11111000], // 'z'
    [0b00100000, 0b01000000, 0b01000000, 0b10000000, 0b01000000, 0b01000000, 0b00100000], // '{'
    [0b00100000, 0b00100000, 0b00100000, 0b00000000, 0b00100000, 0b00100000, 0b00100000], // '|'
    [0b00100000, 0b00010000, 0b00010000, 0b00001000, 0b00010000, 0b00010000, 0b00100000], // '}'
    [0b01010000, 0b10100000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000], // '~'
];

/// Returns the character code that will actually be displayed for `c`.
///
/// Anything outside `FIRST_CHAR..=LAST_CHAR`, including all non ASCII characters, becomes a
/// space. The display has no way to report an unknown character, so this is not an error.
pub fn code(c: char) -> u8 {
    match u8::try_from(c as u32) {
        Ok(code @ FIRST_CHAR..=LAST_CHAR) => code,
        _ => FIRST_CHAR,
    }
}

/// Looks up the glyph for `c`, falling back to a space (see `code()`).
pub fn glyph(c: char) -> &'static Glyph {
    &FONT[(code(c) - FIRST_CHAR) as usize]
}
