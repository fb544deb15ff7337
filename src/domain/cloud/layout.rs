use crate::domain::interface::IGlyphFont;
use rand::Rng;
use serde::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    /// Turned a quarter counter-clockwise.
    Vertical,
}

impl Orientation {
    fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placement {
    pub word: String,
    pub count: usize,
    pub font_size: u32,
    pub orientation: Orientation,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Ink level, 0 is black and 255 is white.
    pub gray: u8,
}

#[derive(Debug, Clone)]
pub struct LayoutOptions {
    pub width: u32,
    pub height: u32,
    pub max_words: usize,
    /// Weight of the frequency ratio between consecutive words when sizing
    /// them; 0 keeps sizes only rank based.
    pub relative_scaling: f64,
    pub prefer_horizontal: f64,
    pub min_font_size: u32,
    /// Size of the most frequent word. When unset it is derived from a trial
    /// layout of the two most frequent words.
    pub max_font_size: Option<u32>,
    /// Side in pixels of an occupancy cell.
    pub cell: u32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        LayoutOptions {
            width: 1600,
            height: 800,
            max_words: 200,
            relative_scaling: 0.5,
            prefer_horizontal: 0.9,
            min_font_size: 8,
            max_font_size: None,
            cell: 4,
        }
    }
}

/// Which cells of the canvas are taken, with a summed-area table to test a
/// rectangle in constant time.
struct OccupancyGrid {
    cols: usize,
    rows: usize,
    taken: Vec<bool>,
    // (cols + 1) x (rows + 1), first row and column are zero
    sums: Vec<u32>,
}

impl OccupancyGrid {
    fn new(cols: usize, rows: usize) -> Self {
        OccupancyGrid {
            cols,
            rows,
            taken: vec![false; cols * rows],
            sums: vec![0; (cols + 1) * (rows + 1)],
        }
    }

    fn sum(&self, col: usize, row: usize) -> u32 {
        self.sums[row * (self.cols + 1) + col]
    }

    fn is_free(&self, col: usize, row: usize, w: usize, h: usize) -> bool {
        self.sum(col + w, row + h) + self.sum(col, row) == self.sum(col + w, row) + self.sum(col, row + h)
    }

    /// A uniformly drawn free position for a `w` x `h` box.
    fn sample_position(&self, w: usize, h: usize, rng: &mut impl Rng) -> Option<(usize, usize)> {
        if w == 0 || h == 0 || w > self.cols || h > self.rows {
            return None;
        }
        let free = |col: usize, row: usize| self.is_free(col, row, w, h);
        let positions = (0..=self.rows - h).flat_map(|row| (0..=self.cols - w).map(move |col| (col, row)));

        let hits = positions.clone().filter(|&(col, row)| free(col, row)).count();
        if hits == 0 {
            return None;
        }
        let pick = rng.gen_range(0..hits);
        positions.filter(|&(col, row)| free(col, row)).nth(pick)
    }

    fn occupy(&mut self, col: usize, row: usize, w: usize, h: usize) {
        for r in row..row + h {
            for c in col..col + w {
                self.taken[r * self.cols + c] = true;
            }
        }
        self.rebuild();
    }

    fn rebuild(&mut self) {
        let stride = self.cols + 1;
        for r in 0..self.rows {
            let mut row_sum = 0;
            for c in 0..self.cols {
                row_sum += self.taken[r * self.cols + c] as u32;
                self.sums[(r + 1) * stride + c + 1] = self.sums[r * stride + c + 1] + row_sum;
            }
        }
    }
}

/// Place words largest first, each at a random free spot, shrinking a word
/// until it fits. Layout stops at the first word that does not fit at the
/// minimum font size.
pub fn layout(
    frequencies: &[(String, usize)],
    font: &dyn IGlyphFont,
    options: &LayoutOptions,
    rng: &mut impl Rng,
) -> Vec<Placement> {
    let words = &frequencies[..frequencies.len().min(options.max_words)];
    let max_font_size = match options.max_font_size {
        Some(size) => size,
        None if words.len() <= 1 => options.height,
        None => {
            let trial = place(&words[..2], font, options, options.height, rng);
            match trial.as_slice() {
                [a, b, ..] => 2 * a.font_size * b.font_size / (a.font_size + b.font_size),
                [a] => a.font_size,
                [] => options.height,
            }
        }
    };
    place(words, font, options, max_font_size, rng)
}

fn place(
    words: &[(String, usize)],
    font: &dyn IGlyphFont,
    options: &LayoutOptions,
    max_font_size: u32,
    rng: &mut impl Rng,
) -> Vec<Placement> {
    let max_count = match words.first() {
        Some((_, count)) if *count > 0 => *count as f64,
        _ => return Vec::new(),
    };

    let cell = options.cell.max(1);
    let mut grid = OccupancyGrid::new(
        (options.width / cell) as usize,
        (options.height / cell) as usize,
    );
    let em = font.em_size().max(1);
    let rs = options.relative_scaling;
    let mut placements = Vec::new();
    let mut font_size = max_font_size;
    let mut last_freq = 1.0;

    for (word, count) in words {
        let freq = *count as f64 / max_count;
        if rs != 0.0 {
            font_size = ((rs * (freq / last_freq) + (1.0 - rs)) * font_size as f64).round() as u32;
        }

        let mut orientation = if rng.gen::<f64>() < options.prefer_horizontal {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let mut tried_other_orientation = false;

        let spot = loop {
            if font_size < options.min_font_size {
                break None;
            }
            let scale = (font_size / em).max(1);
            let (w, h) = match (orientation, font.measure(word, scale)) {
                (Orientation::Horizontal, (w, h)) => (w, h),
                (Orientation::Vertical, (w, h)) => (h, w),
            };
            let (cols, rows) = (ceil_div(w, cell), ceil_div(h, cell));
            if let Some((col, row)) = grid.sample_position(cols, rows, rng) {
                grid.occupy(col, row, cols, rows);
                break Some((col as u32 * cell, row as u32 * cell, w, h, scale));
            }
            if !tried_other_orientation && options.prefer_horizontal < 1.0 {
                orientation = orientation.flipped();
                tried_other_orientation = true;
            } else {
                // next smaller glyph scale
                font_size = (scale - 1) * em;
                orientation = Orientation::Horizontal;
            }
        };

        let (x, y, width, height, scale) = match spot {
            Some(spot) => spot,
            None => break,
        };
        placements.push(Placement {
            word: word.clone(),
            count: *count,
            font_size: scale * em,
            orientation,
            x,
            y,
            width,
            height,
            gray: binary_colormap(rng.gen::<f64>()),
        });
        last_freq = freq;
    }
    placements
}

fn ceil_div(value: u32, by: u32) -> usize {
    ((value + by - 1) / by) as usize
}

/// Matplotlib's "binary" colormap: 0 is white and 1 is black.
fn binary_colormap(value: f64) -> u8 {
    (255.0 * (1.0 - value.clamp(0.0, 1.0))).round() as u8
}
