use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// # FrameBuffer
/// The 64x32 monochrome display.
///
/// Pixels are stored a byte apiece and are always either 0 (clear) or 1 (set).
/// The buffer is indexed as [y][x].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FrameBuffer {
    pixels: [[u8; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
}

impl FrameBuffer {
    pub fn new() -> Self {
        FrameBuffer {
            pixels: [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
        }
    }

    pub fn clear(&mut self) {
        self.pixels = [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
    }

    /// XORs `sprite` onto the display with its top left corner at (x, y).
    ///
    /// Each byte of the sprite is a row of 8 pixels, most significant bit first.
    /// The starting position wraps around the display, but the sprite itself is
    /// clipped at the right and bottom edges.
    ///
    /// Returns whether any set pixel was erased.
    pub fn draw_sprite(&mut self, x: u8, y: u8, sprite: &[u8]) -> bool {
        let x = usize::from(x) % DISPLAY_WIDTH;
        let y = usize::from(y) % DISPLAY_HEIGHT;
        let mut collision = false;

        for (row, &byte) in self.pixels[y..].iter_mut().zip(sprite) {
            for (bit, pixel) in row[x..].iter_mut().take(8).enumerate() {
                let value = (byte >> (7 - bit)) & 0x1;
                collision |= value & *pixel == 1;
                *pixel ^= value;
            }
        }

        collision
    }

    /// Whether the pixel at (x, y) is set; anything off screen is clear
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.pixels
            .get(y)
            .and_then(|row| row.get(x))
            .map_or(false, |p| *p == 1)
    }

    pub fn rows(&self) -> &[[u8; DISPLAY_WIDTH]; DISPLAY_HEIGHT] {
        &self.pixels
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}
