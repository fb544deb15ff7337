use crate::domain::model::*;
use crate::error::Result;
use std::path::Path;

pub trait ITweetRepository {
    /// Raw rows of a CSV file, or of every CSV in a folder.
    fn load_table(&self, source: &Path) -> Result<TweetTable>;
    /// Typed tweets of a CSV file or folder.
    fn load_tweets(&self, source: &Path) -> Result<Vec<Tweet>>;
}

pub trait ICsvReader {
    fn read_file(&self, path: &Path) -> Result<TweetTable>;
    fn read_folder(&self, path: &Path) -> Result<TweetTable>;
}

/// A monochrome rendering of a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBitmap {
    pub width: u32,
    pub height: u32,
    /// Row-major ink mask, `width * height` long.
    pub pixels: Vec<bool>,
}

impl WordBitmap {
    pub fn is_set(&self, x: u32, y: u32) -> bool {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Rotate a quarter turn counter-clockwise.
    pub fn rotated(&self) -> WordBitmap {
        let (width, height) = (self.height, self.width);
        let mut pixels = vec![false; self.pixels.len()];
        for y in 0..self.height {
            for x in 0..self.width {
                // (x, y) lands on (y, width - 1 - x)
                let (nx, ny) = (y, self.width - 1 - x);
                pixels[(ny * width + nx) as usize] = self.is_set(x, y);
            }
        }
        WordBitmap {
            width,
            height,
            pixels,
        }
    }
}

pub trait IGlyphFont {
    /// Size in pixels of a word drawn at an integer `scale`.
    fn measure(&self, word: &str, scale: u32) -> (u32, u32);
    fn rasterize(&self, word: &str, scale: u32) -> WordBitmap;
    /// Nominal glyph height at scale 1.
    fn em_size(&self) -> u32;
}
