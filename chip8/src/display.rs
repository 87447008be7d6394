use std::fmt;

use crate::env::Screen;
use crate::Result;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Rows shaved off each scaled pixel so the bottom of the frame isn't clipped.
const ROW_MARGIN: u32 = 3;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
pub const WHITE: Color = Color {
    r: 255,
    g: 255,
    b: 255,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

/// Monochrome 64x32 display memory.
#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    rows: [[bool; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
}

impl FrameBuffer {
    pub fn new() -> FrameBuffer {
        FrameBuffer {
            rows: [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
        }
    }

    pub fn clear(&mut self) {
        for row in self.rows.iter_mut() {
            for cell in row.iter_mut() {
                *cell = false;
            }
        }
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.rows[y][x]
    }

    /// XORs one 8-pixel sprite row onto display row `y`, starting at column
    /// `x`. Pixels past the right edge are dropped. Returns `true` if a lit
    /// pixel was turned off.
    pub fn xor_row(&mut self, x: usize, y: usize, sprite_row: u8) -> bool {
        let mut collision_bit = false;
        let row = &mut self.rows[y];

        for sx in 0..8 {
            let col = x + sx;
            if col >= DISPLAY_WIDTH {
                break;
            }

            let bit_mask = 0b1000_0000 >> sx;
            if (sprite_row & bit_mask) != 0 {
                if row[col] {
                    collision_bit = true;
                }
                row[col] ^= true;
            }
        }

        collision_bit
    }

    pub fn lit_pixels<'a>(&'a self) -> impl Iterator<Item = (usize, usize)> + 'a {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, lit)| *lit)
                .map(move |(x, _)| (x, y))
        })
    }

    /// One filled rect per lit pixel, scaled to a `width` x `height` surface.
    pub fn rects(&self, width: u32, height: u32) -> Vec<Rect> {
        let x_scale = width / DISPLAY_WIDTH as u32;
        let y_scale = (height / DISPLAY_HEIGHT as u32).saturating_sub(ROW_MARGIN);

        self.lit_pixels()
            .map(|(x, y)| Rect {
                x: (x as u32 * x_scale) as i32,
                y: (y as u32 * y_scale) as i32,
                w: x_scale,
                h: y_scale,
            })
            .collect()
    }

    pub fn present(&self, screen: &mut dyn Screen) -> Result<()> {
        let (width, height) = screen.size();
        let rects = self.rects(width, height);

        screen.clear(BLACK)?;
        screen.fill_rects(&rects, WHITE)?;
        screen.present()
    }
}

impl fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows.iter() {
            let line: String = row.iter().map(|&lit| if lit { '#' } else { '.' }).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
