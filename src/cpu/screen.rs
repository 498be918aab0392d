// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! The [Screen] is the 64x32 monochrome framebuffer
//!
//! Cells are logically one bit, but stored as `u32` pixels (all-ones when
//! lit) so a frontend can copy the buffer straight to a texture. Only the
//! clear-screen and sprite-draw instructions ever mutate it.

use std::fmt::{Debug, Formatter};

/// Width of the emulated screen, in pixels
pub const WIDTH: usize = 64;

/// Height of the emulated screen, in pixels
pub const HEIGHT: usize = 32;

/// Pixel value of a lit cell
const ON: u32 = 0xFFFF_FFFF;

/// The emulated display's pixel-state buffer
#[derive(Clone, PartialEq, Eq)]
pub struct Screen {
    pixels: [u32; WIDTH * HEIGHT],
}

impl Screen {
    /// Turns every cell off
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// XORs the cell at (x, y), returning true if a lit pixel was erased
    #[inline(always)]
    pub fn flip(&mut self, x: usize, y: usize) -> bool {
        let cell = &mut self.pixels[y * WIDTH + x];
        *cell ^= ON;
        *cell == 0
    }

    /// Reports whether the cell at (x, y) is lit
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.pixels[y * WIDTH + x] != 0
    }

    /// A read-only view of the whole buffer, row-major
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }
}

impl Default for Screen {
    fn default() -> Self {
        Screen {
            pixels: [0; WIDTH * HEIGHT],
        }
    }
}

impl Debug for Screen {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Screen")
            .field("lit", &self.pixels.iter().filter(|&&px| px != 0).count())
            .finish_non_exhaustive()
    }
}
