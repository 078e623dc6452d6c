mod common;

use common::{display, glyph_bytes};
use proptest::prelude::*;
use sda5708::font;

proptest! {
    #[test]
    fn unsupported_chars_render_as_space(c in any::<char>(), position in 0u8..8) {
        prop_assume!(!(' '..='{').contains(&c));

        let (mut display, probe) = display();
        probe.forget();
        display.render_char(c, position).unwrap();
        let rendered = probe.bytes();

        probe.forget();
        display.render_char(' ', position).unwrap();
        prop_assert_eq!(rendered, probe.bytes());
    }

    #[test]
    fn positions_past_last_cell_alias_to_zero(c in 0x20u8..=0x7B, position in 8u8..=255) {
        let (mut display, probe) = display();
        probe.forget();
        display.render_char(c as char, position).unwrap();
        prop_assert_eq!(probe.bytes(), glyph_bytes(c as char, 0));
    }

    #[test]
    fn brightness_uses_low_three_bits(level in any::<u8>()) {
        let (mut display, probe) = display();
        probe.forget();
        display.set_brightness(level).unwrap();
        prop_assert_eq!(probe.bytes(), vec![0xE0 | (level & 0b111)]);
    }

    #[test]
    fn lookup_is_stable(c in any::<char>()) {
        prop_assert_eq!(font::glyph(c), font::glyph(c));
        prop_assert!(font::code(c) >= font::FIRST_CHAR && font::code(c) <= font::LAST_CHAR);
    }

    #[test]
    fn text_renders_one_glyph_per_char(text in "[ -{]{0,8}") {
        let (mut display, probe) = display();
        probe.forget();
        display.render_text(&text, 0).unwrap();

        let expected: Vec<u8> = text
            .chars()
            .enumerate()
            .flat_map(|(position, c)| glyph_bytes(c, position as u8))
            .collect();
        prop_assert_eq!(probe.bytes(), expected);
    }
}
