use std::fmt;

use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use crate::peripherals::Display;

/// The pixels are indexed as [y][x]; 1 is on and 0 is off
pub type Pixels = [[u8; DISPLAY_WIDTH]; DISPLAY_HEIGHT];

/// # FrameBuffer
/// The Chip-8 display is composed of 64x32 black/white pixels.
///
/// Sprites are XORed onto the buffer and wrap around the edges of the screen.
/// The buffer remembers whether it changed since the host last took a frame.
#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pixels: Pixels,
    dirty: bool,
}

impl FrameBuffer {
    pub fn new() -> Self {
        FrameBuffer {
            pixels: [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
            dirty: false,
        }
    }

    pub fn pixels(&self) -> &Pixels {
        &self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.pixels[y % DISPLAY_HEIGHT][x % DISPLAY_WIDTH] == 1
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns whether the buffer changed since the last call and marks it clean
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for FrameBuffer {
    fn clear_screen(&mut self) {
        self.pixels = [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
        self.dirty = true;
    }

    fn draw_sprite(&mut self, x: u8, y: u8, rows: &[u8]) -> bool {
        let mut collision = false;
        for (row, byte) in rows.iter().enumerate() {
            let py = (y as usize + row) % DISPLAY_HEIGHT;
            for bit in 0..8 {
                let px = (x as usize + bit) % DISPLAY_WIDTH;
                let pixel = (byte >> (7 - bit)) & 1;
                collision |= pixel & self.pixels[py][px] == 1;
                self.pixels[py][px] ^= pixel;
            }
        }
        self.dirty = true;
        collision
    }
}

impl fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameBuffer")
            .field("lit", &self.pixels.iter().flatten().filter(|p| **p == 1).count())
            .field("dirty", &self.dirty)
            .finish()
    }
}

/// Renders the frame as text, `#` for lit pixels
impl fmt::Display for FrameBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.pixels.iter() {
            let line: String = row.iter().map(|p| if *p == 1 { '#' } else { '.' }).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
