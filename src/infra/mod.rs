mod bitmap_font;
mod csv_reader;

pub use bitmap_font::*;
pub use csv_reader::*;
