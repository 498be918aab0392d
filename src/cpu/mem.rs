// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! The [Mem] represents the CPU's 4 KiB address space
//!
//! The charset is resident at [FONT_BASE] from construction; program data
//! lands at [LOAD_BASE]. Every access is reduced modulo [RAM_SIZE], so no
//! instruction can read or write outside the address space.

use crate::error::{Error, Result};
use std::fmt::{Debug, Formatter};

/// Size of the addressable space, in bytes
pub const RAM_SIZE: usize = 4096;

/// First address of the program region
pub const LOAD_BASE: u16 = 0x200;

/// First address of the charset
pub const FONT_BASE: u16 = 0x050;

/// Height of one charset glyph, in bytes
pub const FONT_HEIGHT: u16 = 5;

/// The standard charset: glyphs `0..=F`, 5 bytes per glyph
const CHARSET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];

/// A flat, fixed-size memory with 12-bit effective addressing
#[derive(Clone, PartialEq, Eq)]
pub struct Mem {
    bytes: [u8; RAM_SIZE],
}

impl Mem {
    /// Reads one byte. The address is masked to 12 bits.
    #[inline(always)]
    pub fn read(&self, addr: u16) -> u8 {
        self.bytes[addr as usize % RAM_SIZE]
    }

    /// Writes one byte. The address is masked to 12 bits.
    #[inline(always)]
    pub fn write(&mut self, addr: u16, value: u8) {
        self.bytes[addr as usize % RAM_SIZE] = value;
    }

    /// Copies a program image into memory starting at [LOAD_BASE].
    ///
    /// Returns [Error::RomTooBig] if the image does not fit; nothing is
    /// copied in that case.
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<()> {
        let max = RAM_SIZE - LOAD_BASE as usize;
        if rom.len() > max {
            return Err(Error::RomTooBig {
                size: rom.len(),
                max,
            });
        }
        self.bytes[LOAD_BASE as usize..][..rom.len()].copy_from_slice(rom);
        Ok(())
    }
}

impl Default for Mem {
    /// Constructs a zeroed memory with the charset at [FONT_BASE]
    fn default() -> Self {
        let mut bytes = [0; RAM_SIZE];
        bytes[FONT_BASE as usize..][..CHARSET.len()].copy_from_slice(&CHARSET);
        Mem { bytes }
    }
}

impl Debug for Mem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mem")
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
    }
}
