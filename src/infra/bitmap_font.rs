use crate::domain::interface::*;
use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};

const GLYPH_SIZE: u32 = 8;

/// Fixed-width 8x8 bitmap font covering Basic Latin and Latin-1, enough for
/// Portuguese text. Characters outside those blocks render blank.
#[derive(Clone, Default)]
pub struct BitmapFont;

impl BitmapFont {
    pub fn new() -> BitmapFont {
        BitmapFont
    }

    fn glyph(c: char) -> [u8; 8] {
        BASIC_FONTS
            .get(c)
            .or_else(|| LATIN_FONTS.get(c))
            .unwrap_or([0; 8])
    }
}

impl IGlyphFont for BitmapFont {
    fn measure(&self, word: &str, scale: u32) -> (u32, u32) {
        let chars = word.chars().count() as u32;
        (chars * GLYPH_SIZE * scale, GLYPH_SIZE * scale)
    }

    fn rasterize(&self, word: &str, scale: u32) -> WordBitmap {
        let (width, height) = self.measure(word, scale);
        let mut pixels = vec![false; (width * height) as usize];

        for (i, c) in word.chars().enumerate() {
            let origin = i as u32 * GLYPH_SIZE * scale;
            for (row, bits) in Self::glyph(c).into_iter().enumerate() {
                for bit in 0..GLYPH_SIZE {
                    // least significant bit is the leftmost pixel
                    if bits & (1 << bit) == 0 {
                        continue;
                    }
                    let x0 = origin + bit * scale;
                    let y0 = row as u32 * scale;
                    for dy in 0..scale {
                        let start = ((y0 + dy) * width + x0) as usize;
                        pixels[start..start + scale as usize].fill(true);
                    }
                }
            }
        }

        WordBitmap {
            width,
            height,
            pixels,
        }
    }

    fn em_size(&self) -> u32 {
        GLYPH_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_should_measure_by_character_count() {
        let font = BitmapFont::new();
        assert_eq!(font.measure("ação", 1), (32, 8));
        assert_eq!(font.measure("ação", 3), (96, 24));
    }

    #[test]
    fn it_should_scale_glyphs() {
        let font = BitmapFont::new();
        let small = font.rasterize("a", 1);
        let large = font.rasterize("a", 2);
        let ink = |b: &WordBitmap| b.pixels.iter().filter(|p| **p).count();
        assert!(ink(&small) > 0);
        assert_eq!(ink(&large), ink(&small) * 4);
    }

    #[test]
    fn it_should_draw_accented_letters() {
        let font = BitmapFont::new();
        let bitmap = font.rasterize("ç", 1);
        assert!(bitmap.pixels.iter().any(|p| *p));
    }

    #[test]
    fn it_should_leave_unknown_characters_blank() {
        let font = BitmapFont::new();
        let bitmap = font.rasterize("😷", 1);
        assert_eq!((bitmap.width, bitmap.height), (8, 8));
        assert!(bitmap.pixels.iter().all(|p| !*p));
    }

    #[test]
    fn it_should_rotate_counter_clockwise() {
        let font = BitmapFont::new();
        let bitmap = font.rasterize("ab", 1);
        let rotated = bitmap.rotated();
        assert_eq!((rotated.width, rotated.height), (8, 16));
        for y in 0..bitmap.height {
            for x in 0..bitmap.width {
                assert_eq!(bitmap.is_set(x, y), rotated.is_set(y, bitmap.width - 1 - x));
            }
        }
    }
}
