use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// # FrameBuffer
/// The contents of the next frame to be drawn, `W` pixels wide and `H` pixels tall.
///
/// Pixels are stored as `[y][x]`. Every coordinate wraps around the edges, so a sprite
/// drawn past the right edge continues on the left and one drawn past the bottom
/// continues at the top.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameBuffer<const W: usize = DISPLAY_WIDTH, const H: usize = DISPLAY_HEIGHT> {
    pixels: [[bool; W]; H],
}

impl<const W: usize, const H: usize> FrameBuffer<W, H> {
    pub fn new() -> Self {
        FrameBuffer {
            pixels: [[false; W]; H],
        }
    }

    pub fn width(&self) -> usize {
        W
    }

    pub fn height(&self) -> usize {
        H
    }

    /// Turns every pixel off
    pub fn clear(&mut self) {
        self.pixels = [[false; W]; H];
    }

    pub fn is_set(&self, x: usize, y: usize) -> bool {
        self.pixels[y % H][x % W]
    }

    /// XORs a sprite onto the frame with its top left corner at `(x, y)`.
    ///
    /// Each byte of `rows` is one 8 pixel row of the sprite, most significant bit
    /// leftmost. Wrapping is applied to each pixel rather than to the origin, so a
    /// sprite straddling an edge is split across both sides.
    ///
    /// Returns whether any pixel that was on got turned off.
    pub fn draw_sprite(&mut self, x: usize, y: usize, rows: &[u8]) -> bool {
        let (x, y) = (x % W, y % H);
        let mut collision = false;
        for (row, byte) in rows.iter().enumerate() {
            let py = (y + row) % H;
            for bit in 0..8 {
                if byte & (0x80u8 >> bit) == 0 {
                    continue;
                }
                let px = (x + bit) % W;
                let pixel = &mut self.pixels[py][px];
                collision |= *pixel;
                *pixel = !*pixel;
            }
        }
        collision
    }

    /// Rows of the frame from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[bool; W]> {
        self.pixels.iter()
    }
}

impl<const W: usize, const H: usize> Default for FrameBuffer<W, H> {
    fn default() -> Self {
        Self::new()
    }
}
