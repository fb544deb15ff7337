//! Word cloud layout and rasterization.

mod layout;
mod words;

pub use layout::*;
pub use words::*;

use crate::domain::interface::IGlyphFont;
use image::{GrayImage, Luma};

const BACKGROUND: Luma<u8> = Luma([255]);

/// A rendered cloud together with where each word went.
#[derive(Debug, Clone)]
pub struct WordCloud {
    pub image: GrayImage,
    pub placements: Vec<Placement>,
}

/// Draw placed words on a white canvas, each in its own gray level.
pub fn render(placements: &[Placement], font: &dyn IGlyphFont, width: u32, height: u32) -> GrayImage {
    let mut image = GrayImage::from_pixel(width, height, BACKGROUND);
    for placement in placements {
        let scale = (placement.font_size / font.em_size().max(1)).max(1);
        let bitmap = match placement.orientation {
            Orientation::Horizontal => font.rasterize(&placement.word, scale),
            Orientation::Vertical => font.rasterize(&placement.word, scale).rotated(),
        };
        for y in 0..bitmap.height {
            for x in 0..bitmap.width {
                let (px, py) = (placement.x + x, placement.y + y);
                if bitmap.is_set(x, y) && px < width && py < height {
                    image.put_pixel(px, py, Luma([placement.gray]));
                }
            }
        }
    }
    image
}
