//! 5x7 digit glyphs in 6-pixel cells, like the calculator's system font

use glam::IVec2;

use super::framebuffer::{Framebuffer, Ink};

pub const GLYPH_WIDTH: i32 = 5;
pub const GLYPH_HEIGHT: i32 = 7;
/// Horizontal distance between consecutive characters
pub const ADVANCE: i32 = GLYPH_WIDTH + 1;

/// Rows top to bottom; bit 4 is the leftmost column
const DIGITS: [[u8; GLYPH_HEIGHT as usize]; 10] = [
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
    [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
    [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
];

/// Paint `text` with its top-left corner at `origin`. Only digits have
/// glyphs; any other character leaves its cell untouched.
pub fn draw_text(fb: &mut impl Framebuffer, origin: IVec2, text: &str, ink: Ink) {
    for (i, ch) in text.chars().enumerate() {
        let Some(digit) = ch.to_digit(10) else {
            continue;
        };
        let cell = origin + IVec2::new(i as i32 * ADVANCE, 0);
        for (row, bits) in DIGITS[digit as usize].iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                    fb.set_pixel(cell + IVec2::new(col, row as i32), ink);
                }
            }
        }
    }
}

/// Width in pixels of `len` characters
pub fn text_width(len: usize) -> i32 {
    len as i32 * ADVANCE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::framebuffer::Vram;

    #[test]
    fn test_one_is_a_stem_with_serif() {
        let mut vram = Vram::new();
        draw_text(&mut vram, IVec2::new(0, 0), "1", Ink::On);
        for y in 0..7 {
            assert!(vram.pixel(2, y));
        }
        assert!(vram.pixel(1, 1));
        assert!(vram.pixel(1, 6) && vram.pixel(3, 6));
        assert_eq!(vram.lit(), 10);
    }

    #[test]
    fn test_cells_advance_six_pixels() {
        let mut vram = Vram::new();
        draw_text(&mut vram, IVec2::new(10, 2), "11", Ink::On);
        assert!(vram.pixel(12, 2));
        assert!(vram.pixel(18, 2));
        assert_eq!(text_width(3), 18);
    }

    #[test]
    fn test_non_digits_skip_their_cell() {
        let mut vram = Vram::new();
        draw_text(&mut vram, IVec2::new(0, 0), "-8", Ink::On);
        assert!(!vram.pixel(0, 1));
        assert!(vram.pixel(ADVANCE, 1));
    }
}
