// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)
#![allow(clippy::bad_bit_mask)]
//! Contains the definition of a Chip-8 [Insn]
//!
//! Decoding is a closed, exhaustive mapping from opcode patterns to enum
//! variants; words that match no pattern fail to decode, and policy for
//! those lives in [super::CPU], not here.

use imperative_rs::InstructionSet;

/// One decoded Chip-8 instruction.
///
/// Operand fields follow the conventional opcode nomenclature:
/// `x`/`y` select registers, `k` is an immediate byte, `n` is an
/// immediate nibble or a 12-bit address depending on the instruction.
#[derive(Clone, Copy, Debug, InstructionSet, PartialEq, Eq)]
pub enum Insn {
    /// | 00e0 | Clear screen memory to 0s
    #[opcode = "0x00e0"]
    Cls,
    /// | 00ee | Return from subroutine
    #[opcode = "0x00ee"]
    Ret,
    /// | 1nnn | Jump to absolute address
    #[opcode = "0x1nnn"]
    Jump { n: u16 },
    /// | 2nnn | Push pc onto the stack, then jump to `n`
    #[opcode = "0x2nnn"]
    Call { n: u16 },
    /// | 3xkk | Skip next instruction if vX == k
    #[opcode = "0x3xkk"]
    SkipEqImm { x: usize, k: u8 },
    /// | 4xkk | Skip next instruction if vX != k
    #[opcode = "0x4xkk"]
    SkipNeImm { x: usize, k: u8 },
    /// | 5xy0 | Skip next instruction if vX == vY
    #[opcode = "0x5xy0"]
    SkipEq { x: usize, y: usize },
    /// | 6xkk | Load immediate byte k into vX
    #[opcode = "0x6xkk"]
    LoadImm { x: usize, k: u8 },
    /// | 7xkk | Add immediate byte k to vX, without touching vF
    #[opcode = "0x7xkk"]
    AddImm { x: usize, k: u8 },
    /// | 8xy0 | Copy vY into vX
    #[opcode = "0x8xy0"]
    Move { x: usize, y: usize },
    /// | 8xy1 | vX |= vY
    #[opcode = "0x8xy1"]
    Or { x: usize, y: usize },
    /// | 8xy2 | vX &= vY
    #[opcode = "0x8xy2"]
    And { x: usize, y: usize },
    /// | 8xy3 | vX ^= vY
    #[opcode = "0x8xy3"]
    Xor { x: usize, y: usize },
    /// | 8xy4 | vX += vY; vF = carry
    #[opcode = "0x8xy4"]
    Add { x: usize, y: usize },
    /// | 8xy5 | vX -= vY; vF = no borrow
    #[opcode = "0x8xy5"]
    Sub { x: usize, y: usize },
    /// | 8xy6 | Shift vX (or vY, per quirk) right; vF = shifted-out bit
    #[opcode = "0x8xy6"]
    ShiftRight { x: usize, y: usize },
    /// | 8xy7 | vX = vY - vX; vF = no borrow
    #[opcode = "0x8xy7"]
    SubFrom { x: usize, y: usize },
    /// | 8xyE | Shift vX (or vY, per quirk) left; vF = shifted-out bit
    #[opcode = "0x8xye"]
    ShiftLeft { x: usize, y: usize },
    /// | 9xy0 | Skip next instruction if vX != vY
    #[opcode = "0x9xy0"]
    SkipNe { x: usize, y: usize },
    /// | annn | Load address n into I
    #[opcode = "0xannn"]
    LoadIndex { n: u16 },
    /// | bnnn | Jump to n + v0 (or n + vX, per quirk)
    #[opcode = "0xbnnn"]
    JumpOffset { n: u16 },
    /// | cxkk | vX = random byte & k
    #[opcode = "0xcxkk"]
    Random { x: usize, k: u8 },
    /// | dxyn | XOR-blit an n-row sprite at (vX, vY); vF = collision
    #[opcode = "0xdxyn"]
    Draw { x: usize, y: usize, n: u8 },
    /// | ex9e | Skip next instruction if key vX is pressed
    #[opcode = "0xex9e"]
    SkipKey { x: usize },
    /// | exa1 | Skip next instruction if key vX is not pressed
    #[opcode = "0xexa1"]
    SkipNoKey { x: usize },
    /// | fx07 | vX = delay timer
    #[opcode = "0xfx07"]
    GetDelay { x: usize },
    /// | fx0a | Halt until a key is pressed, then store it in vX
    #[opcode = "0xfx0a"]
    WaitKey { x: usize },
    /// | fx15 | delay timer = vX
    #[opcode = "0xfx15"]
    SetDelay { x: usize },
    /// | fx18 | sound timer = vX
    #[opcode = "0xfx18"]
    SetSound { x: usize },
    /// | fx1e | I += vX; vF = overflow past 0xfff
    #[opcode = "0xfx1e"]
    AddIndex { x: usize },
    /// | fx29 | Point I at the charset glyph for vX
    #[opcode = "0xfx29"]
    FontChar { x: usize },
    /// | fx33 | Store the decimal digits of vX at I, I+1, I+2
    #[opcode = "0xfx33"]
    Bcd { x: usize },
    /// | fx55 | Store v0..=vX to memory starting at I
    #[opcode = "0xfx55"]
    Store { x: usize },
    /// | fx65 | Load v0..=vX from memory starting at I
    #[opcode = "0xfx65"]
    Load { x: usize },
}
