use core::convert::TryInto;

use embedded_graphics_core::{pixelcolor::BinaryColor, prelude::*};

use crate::{backend::SDA5708Backend, COLUMNS, DIGITS, ROWS, SDA5708};

const WIDTH: u32 = (DIGITS * COLUMNS) as u32;
const HEIGHT: u32 = ROWS as u32;
const MAX_X: u32 = WIDTH - 1;
const MAX_Y: u32 = HEIGHT - 1;

impl<Backend> SDA5708<Backend>
where
    Backend: SDA5708Backend,
{
    /// Transfers the internal framebuffer to the display, all 8 cells.
    ///
    /// This will overwrite things written using the text interface
    pub fn flush(&mut self) -> Result<(), Backend::Error> {
        let framebuffer = self.framebuffer;
        for (position, glyph) in framebuffer.iter().enumerate() {
            self.write_glyph(glyph, position as u8)?;
        }
        Ok(())
    }
}

impl<Backend> DrawTarget for SDA5708<Backend>
where
    Backend: SDA5708Backend,
{
    type Error = Backend::Error;
    type Color = BinaryColor;

    fn clear(&mut self, color: BinaryColor) -> Result<(), Backend::Error> {
        let byte: u8 = match color {
            BinaryColor::On => 0b1111_1000,
            BinaryColor::Off => 0x00,
        };
        self.framebuffer = [[byte; ROWS]; DIGITS];
        Ok(())
    }

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for pixel in pixels {
            let Pixel(coord, color) = pixel;
            if let Ok((x @ 0..=MAX_X, y @ 0..=MAX_Y)) = coord.try_into() {
                let byte: &mut u8 =
                    &mut self.framebuffer[x as usize / COLUMNS][y as usize];
                let mask: u8 = 0x80 >> (x as usize % COLUMNS);
                match color {
                    BinaryColor::On => *byte |= mask,
                    BinaryColor::Off => *byte &= !mask,
                };
            }
        }
        Ok(())
    }
}

impl<Backend> OriginDimensions for SDA5708<Backend>
where
    Backend: SDA5708Backend,
{
    fn size(&self) -> Size {
        Size::new(WIDTH, HEIGHT)
    }
}
