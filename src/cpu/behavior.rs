// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Contains implementations for each Chip-8 [Insn]
//!
//! Every handler runs after the program counter has already advanced past
//! the instruction, so skip and jump handlers compose on top of that value.
//! Arithmetic is performed wide enough to observe the carry/borrow before
//! truncating to 8 bits, and any instruction documented to set a flag
//! overwrites vF unconditionally.

use super::*;
use crate::error::{Error, Result};
use rand::Rng;

impl CPU {
    /// Executes a single [Insn]
    #[rustfmt::skip]
    #[inline(always)]
    pub(super) fn execute(&mut self, insn: Insn) -> Result<()> {
        match insn {
            Insn::Cls                    => self.clear_screen(),
            Insn::Ret                    => self.ret()?,
            Insn::Jump       { n }       => self.jump(n),
            Insn::Call       { n }       => self.call(n)?,
            Insn::SkipEqImm  { x, k }    => self.skip_eq_imm(x, k),
            Insn::SkipNeImm  { x, k }    => self.skip_ne_imm(x, k),
            Insn::SkipEq     { x, y }    => self.skip_eq(x, y),
            Insn::LoadImm    { x, k }    => self.load_imm(x, k),
            Insn::AddImm     { x, k }    => self.add_imm(x, k),
            Insn::Move       { x, y }    => self.alu_move(x, y),
            Insn::Or         { x, y }    => self.alu_or(x, y),
            Insn::And        { x, y }    => self.alu_and(x, y),
            Insn::Xor        { x, y }    => self.alu_xor(x, y),
            Insn::Add        { x, y }    => self.alu_add(x, y),
            Insn::Sub        { x, y }    => self.alu_sub(x, y),
            Insn::ShiftRight { x, y }    => self.shift_right(x, y),
            Insn::SubFrom    { x, y }    => self.alu_sub_from(x, y),
            Insn::ShiftLeft  { x, y }    => self.shift_left(x, y),
            Insn::SkipNe     { x, y }    => self.skip_ne(x, y),
            Insn::LoadIndex  { n }       => self.load_index(n),
            Insn::JumpOffset { n }       => self.jump_offset(n),
            Insn::Random     { x, k }    => self.random(x, k),
            Insn::Draw       { x, y, n } => self.draw(x, y, n),
            Insn::SkipKey    { x }       => self.skip_key(x),
            Insn::SkipNoKey  { x }       => self.skip_no_key(x),
            Insn::GetDelay   { x }       => self.get_delay(x),
            Insn::WaitKey    { x }       => self.wait_key(x),
            Insn::SetDelay   { x }       => self.set_delay(x),
            Insn::SetSound   { x }       => self.set_sound(x),
            Insn::AddIndex   { x }       => self.add_index(x),
            Insn::FontChar   { x }       => self.font_char(x),
            Insn::Bcd        { x }       => self.bcd(x),
            Insn::Store      { x }       => self.store_regs(x),
            Insn::Load       { x }       => self.load_regs(x),
        }
        Ok(())
    }
}

/// |`0nnn`| System routines
///
/// |opcode| effect                             |
/// |------|------------------------------------|
/// |`00e0`| Clear screen memory to all 0       |
/// |`00ee`| Return from subroutine             |
impl CPU {
    /// |`00e0`| Clears the screen memory to 0
    #[inline(always)]
    pub(super) fn clear_screen(&mut self) {
        self.screen.clear();
    }
    /// |`00ee`| Returns from subroutine
    ///
    /// A return with no live frame is a fatal fault.
    #[inline(always)]
    pub(super) fn ret(&mut self) -> Result<()> {
        if self.sp == 0 {
            return Err(Error::StackUnderflow {
                addr: self.pc.wrapping_sub(2),
            });
        }
        self.sp -= 1;
        self.pc = self.stack[self.sp];
        Ok(())
    }
}

/// |`1nnn`| Sets pc to an absolute address
impl CPU {
    /// |`1nnn`| Sets the program counter to an absolute address
    #[inline(always)]
    pub(super) fn jump(&mut self, n: Adr) {
        self.pc = n;
    }
}

/// |`2nnn`| Pushes pc onto the stack, then jumps to n
impl CPU {
    /// |`2nnn`| Pushes pc onto the stack, then jumps to n
    ///
    /// A call past [STACK_DEPTH] frames is a fatal fault.
    #[inline(always)]
    pub(super) fn call(&mut self, n: Adr) -> Result<()> {
        if self.sp >= STACK_DEPTH {
            return Err(Error::StackOverflow {
                addr: self.pc.wrapping_sub(2),
                depth: STACK_DEPTH,
            });
        }
        self.stack[self.sp] = self.pc;
        self.sp += 1;
        self.pc = n;
        Ok(())
    }
}

/// |`3xkk`..`5xy0`, `9xy0`| Conditional skips
///
/// |opcode| effect                             |
/// |------|------------------------------------|
/// |`3xkk`| Skip next instruction if vX == k   |
/// |`4xkk`| Skip next instruction if vX != k   |
/// |`5xy0`| Skip next instruction if vX == vY  |
/// |`9xy0`| Skip next instruction if vX != vY  |
impl CPU {
    /// |`3xkk`| Skips the next instruction if vX == k
    #[inline(always)]
    pub(super) fn skip_eq_imm(&mut self, x: Reg, k: u8) {
        if self.v[x] == k {
            self.pc = self.pc.wrapping_add(2);
        }
    }
    /// |`4xkk`| Skips the next instruction if vX != k
    #[inline(always)]
    pub(super) fn skip_ne_imm(&mut self, x: Reg, k: u8) {
        if self.v[x] != k {
            self.pc = self.pc.wrapping_add(2);
        }
    }
    /// |`5xy0`| Skips the next instruction if vX == vY
    #[inline(always)]
    pub(super) fn skip_eq(&mut self, x: Reg, y: Reg) {
        if self.v[x] == self.v[y] {
            self.pc = self.pc.wrapping_add(2);
        }
    }
    /// |`9xy0`| Skips the next instruction if vX != vY
    #[inline(always)]
    pub(super) fn skip_ne(&mut self, x: Reg, y: Reg) {
        if self.v[x] != self.v[y] {
            self.pc = self.pc.wrapping_add(2);
        }
    }
}

/// |`6xkk`, `7xkk`| Immediate loads
impl CPU {
    /// |`6xkk`| Loads immediate byte k into vX
    #[inline(always)]
    pub(super) fn load_imm(&mut self, x: Reg, k: u8) {
        self.v[x] = k;
    }
    /// |`7xkk`| Adds immediate byte k to vX, wrapping mod 256. vF untouched.
    #[inline(always)]
    pub(super) fn add_imm(&mut self, x: Reg, k: u8) {
        self.v[x] = self.v[x].wrapping_add(k);
    }
}

/// |`8xyn`| ALU operations
///
/// |opcode| effect                             |
/// |------|------------------------------------|
/// |`8xy0`| X = Y                              |
/// |`8xy1`| X = X \| Y                         |
/// |`8xy2`| X = X & Y                          |
/// |`8xy3`| X = X ^ Y                          |
/// |`8xy4`| X = X + Y; vF = carry              |
/// |`8xy5`| X = X - Y; vF = !borrow            |
/// |`8xy6`| X = X >> 1; vF = bit 0             |
/// |`8xy7`| X = Y - X; vF = !borrow            |
/// |`8xyE`| X = X << 1; vF = bit 7             |
impl CPU {
    /// |`8xy0`| Copies vY into vX
    #[inline(always)]
    pub(super) fn alu_move(&mut self, x: Reg, y: Reg) {
        self.v[x] = self.v[y];
    }
    /// |`8xy1`| Bitwise or of vX and vY, stored in vX
    #[inline(always)]
    pub(super) fn alu_or(&mut self, x: Reg, y: Reg) {
        self.v[x] |= self.v[y];
    }
    /// |`8xy2`| Bitwise and of vX and vY, stored in vX
    #[inline(always)]
    pub(super) fn alu_and(&mut self, x: Reg, y: Reg) {
        self.v[x] &= self.v[y];
    }
    /// |`8xy3`| Bitwise xor of vX and vY, stored in vX
    #[inline(always)]
    pub(super) fn alu_xor(&mut self, x: Reg, y: Reg) {
        self.v[x] ^= self.v[y];
    }
    /// |`8xy4`| Adds vY to vX; vF = 1 on carry out of bit 7
    #[inline(always)]
    pub(super) fn alu_add(&mut self, x: Reg, y: Reg) {
        let sum = self.v[x] as u16 + self.v[y] as u16;
        self.v[0xf] = (sum > 0xff) as u8;
        self.v[x] = sum as u8;
    }
    /// |`8xy5`| Subtracts vY from vX; vF = 1 when no borrow
    #[inline(always)]
    pub(super) fn alu_sub(&mut self, x: Reg, y: Reg) {
        let (vx, vy) = (self.v[x], self.v[y]);
        self.v[0xf] = (vx > vy) as u8;
        self.v[x] = vx.wrapping_sub(vy);
    }
    /// |`8xy6`| Shifts right by one; vF = the bit shifted out
    ///
    /// # Quirk
    /// The Cosmac VIP copies vY into vX before the shift.
    #[inline(always)]
    pub(super) fn shift_right(&mut self, x: Reg, y: Reg) {
        if self.flags.quirks.shift_src_vy {
            self.v[x] = self.v[y];
        }
        self.v[0xf] = self.v[x] & 1;
        self.v[x] >>= 1;
    }
    /// |`8xy7`| Subtracts vX from vY, stored in vX; vF = 1 when no borrow
    #[inline(always)]
    pub(super) fn alu_sub_from(&mut self, x: Reg, y: Reg) {
        let (vx, vy) = (self.v[x], self.v[y]);
        self.v[0xf] = (vy > vx) as u8;
        self.v[x] = vy.wrapping_sub(vx);
    }
    /// |`8xyE`| Shifts left by one; vF = the bit shifted out
    ///
    /// # Quirk
    /// The Cosmac VIP copies vY into vX before the shift.
    #[inline(always)]
    pub(super) fn shift_left(&mut self, x: Reg, y: Reg) {
        if self.flags.quirks.shift_src_vy {
            self.v[x] = self.v[y];
        }
        self.v[0xf] = (self.v[x] & 0x80) >> 7;
        self.v[x] <<= 1;
    }
}

/// |`annn`, `bnnn`, `cxkk`| Index, indexed jump, randomness
impl CPU {
    /// |`annn`| Loads address n into I
    #[inline(always)]
    pub(super) fn load_index(&mut self, n: Adr) {
        self.i = n;
    }
    /// |`bnnn`| Jumps to n + v0
    ///
    /// # Quirk
    /// Chip-48 reads the offset from vX instead, where X is the high
    /// nibble of n.
    #[inline(always)]
    pub(super) fn jump_offset(&mut self, n: Adr) {
        let reg = if self.flags.quirks.jump_offset_vx {
            (n >> 8) as Reg
        } else {
            0
        };
        self.pc = n.wrapping_add(self.v[reg] as Adr);
    }
    /// |`cxkk`| Stores a fresh random byte, masked with k, into vX
    #[inline(always)]
    pub(super) fn random(&mut self, x: Reg, k: u8) {
        self.v[x] = self.rng.gen::<u8>() & k;
    }
}

/// |`dxyn`| Draws n-byte sprite to the screen at coordinates (vX, vY)
impl CPU {
    /// |`dxyn`| XOR-blits an n-row sprite read from `[I..I+n]` at (vX, vY).
    ///
    /// The starting corner wraps modulo the screen size; everything past
    /// the right or bottom edge is clipped, never wrapped. vF reports
    /// whether any lit pixel was erased.
    pub(super) fn draw(&mut self, x: Reg, y: Reg, n: Nib) {
        let left = self.v[x] as usize % screen::WIDTH;
        let top = self.v[y] as usize % screen::HEIGHT;
        self.v[0xf] = 0;
        for row in 0..n as usize {
            let y = top + row;
            if y >= screen::HEIGHT {
                break;
            }
            let bits = self.mem.read(self.i.wrapping_add(row as Adr));
            for col in 0..8 {
                let x = left + col;
                if x >= screen::WIDTH {
                    break;
                }
                if bits & (0x80 >> col) != 0 && self.screen.flip(x, y) {
                    self.v[0xf] = 1;
                }
            }
        }
    }
}

/// |`exkk`| Skips on key state
///
/// |opcode| effect                             |
/// |------|------------------------------------|
/// |`ex9e`| Skip next instruction if key vX down |
/// |`exa1`| Skip next instruction if key vX up |
impl CPU {
    /// |`ex9e`| Skips the next instruction if key vX is pressed
    #[inline(always)]
    pub(super) fn skip_key(&mut self, x: Reg) {
        if self.keys[self.v[x] as usize & 0xf] {
            self.pc = self.pc.wrapping_add(2);
        }
    }
    /// |`exa1`| Skips the next instruction if key vX is not pressed
    #[inline(always)]
    pub(super) fn skip_no_key(&mut self, x: Reg) {
        if !self.keys[self.v[x] as usize & 0xf] {
            self.pc = self.pc.wrapping_add(2);
        }
    }
}

/// |`fxkk`| Timers, keyboard wait, index math, memory blocks
///
/// |opcode| effect                             |
/// |------|------------------------------------|
/// |`fx07`| vX = delay timer                   |
/// |`fx0a`| Wait for keypress, store key in vX |
/// |`fx15`| delay timer = vX                   |
/// |`fx18`| sound timer = vX                   |
/// |`fx1e`| I += vX; vF = overflow past 0xfff  |
/// |`fx29`| I = charset glyph for vX           |
/// |`fx33`| Decimal digits of vX at I..I+2     |
/// |`fx55`| Store v0..=vX at I                 |
/// |`fx65`| Load v0..=vX from I                |
impl CPU {
    /// |`fx07`| Reads the delay timer into vX
    #[inline(always)]
    pub(super) fn get_delay(&mut self, x: Reg) {
        self.v[x] = self.delay;
    }
    /// |`fx0a`| Stores the lowest pressed key into vX, or rewinds pc so the
    /// instruction re-executes on the next step. Repeating the rewound
    /// instruction changes nothing until a key arrives.
    #[inline(always)]
    pub(super) fn wait_key(&mut self, x: Reg) {
        if let Some(key) = self.keys.iter().position(|&held| held) {
            self.v[x] = key as u8;
        } else {
            self.pc = self.pc.wrapping_sub(2);
        }
    }
    /// |`fx15`| Loads vX into the delay timer
    #[inline(always)]
    pub(super) fn set_delay(&mut self, x: Reg) {
        self.delay = self.v[x];
    }
    /// |`fx18`| Loads vX into the sound timer
    #[inline(always)]
    pub(super) fn set_sound(&mut self, x: Reg) {
        self.sound = self.v[x];
    }
    /// |`fx1e`| Adds vX to I, reduced modulo 4096; vF = 1 if the sum
    /// overflowed the address space
    #[inline(always)]
    pub(super) fn add_index(&mut self, x: Reg) {
        let sum = self.i as u32 + self.v[x] as u32;
        self.v[0xf] = (sum > 0xfff) as u8;
        self.i = (sum & 0xfff) as Adr;
    }
    /// |`fx29`| Points I at the 5-byte charset glyph for the low nibble of vX
    #[inline(always)]
    pub(super) fn font_char(&mut self, x: Reg) {
        self.i = mem::FONT_BASE + mem::FONT_HEIGHT * (self.v[x] as Adr & 0xf);
    }
    /// |`fx33`| Stores the hundreds, tens, and ones digits of vX at I, I+1, I+2
    #[inline(always)]
    pub(super) fn bcd(&mut self, x: Reg) {
        let vx = self.v[x];
        self.mem.write(self.i, vx / 100);
        self.mem.write(self.i.wrapping_add(1), vx / 10 % 10);
        self.mem.write(self.i.wrapping_add(2), vx % 10);
    }
    /// |`fx55`| Stores v0..=vX to memory starting at I. I is unchanged.
    #[inline(always)]
    pub(super) fn store_regs(&mut self, x: Reg) {
        for reg in 0..=x {
            self.mem.write(self.i.wrapping_add(reg as Adr), self.v[reg]);
        }
    }
    /// |`fx65`| Loads v0..=vX from memory starting at I. I is unchanged.
    #[inline(always)]
    pub(super) fn load_regs(&mut self, x: Reg) {
        for reg in 0..=x {
            self.v[reg] = self.mem.read(self.i.wrapping_add(reg as Adr));
        }
    }
}
