// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Decodes and runs instructions


pub mod flags;
pub mod instruction;
pub mod mem;
pub mod quirks;
pub mod screen;

mod behavior;

pub use self::{flags::Flags, quirks::Quirks};

use self::{instruction::Insn, mem::Mem, screen::Screen};
use crate::error::{Error, Result};
use imperative_rs::InstructionSet;
use rand::{rngs::StdRng, SeedableRng};
use std::fmt::Debug;

type Reg = usize;
type Adr = u16;
type Nib = u8;

/// Number of 16-bit slots in the call stack
pub const STACK_DEPTH: usize = 16;

/// Represents the internal state of the CPU interpreter
#[derive(Clone)]
pub struct CPU {
    /// Configuration the CPU was constructed with: [Quirks] and decode strictness
    flags: Flags,
    // memory map
    mem: Mem,
    screen: Screen,
    // registers
    v: [u8; 16],
    i: Adr,
    pc: Adr,
    stack: [Adr; STACK_DEPTH],
    sp: usize,
    delay: u8,
    sound: u8,
    // I/O
    keys: [bool; 16],
    // Execution data
    rng: StdRng,
    cycle: usize,
}

// public interface
impl CPU {
    /// Constructs a new CPU with the charset resident, the program counter
    /// at the load address, and a randomness source seeded from entropy.
    /// # Examples
    /// ```rust
    /// # use cheep::*;
    /// let cpu = CPU::new(Flags::default());
    /// assert_eq!(0x200, cpu.pc());
    /// ```
    pub fn new(flags: Flags) -> Self {
        Self::with_rng(flags, StdRng::from_entropy())
    }

    /// Constructs a new CPU whose randomness source is pinned to `seed`,
    /// so `cxkk` produces the same stream on every run. Meant for tests.
    pub fn with_seed(flags: Flags, seed: u64) -> Self {
        Self::with_rng(flags, StdRng::seed_from_u64(seed))
    }

    fn with_rng(flags: Flags, rng: StdRng) -> Self {
        CPU {
            flags,
            mem: Mem::default(),
            screen: Screen::default(),
            v: [0; 16],
            i: 0,
            pc: mem::LOAD_BASE,
            stack: [0; STACK_DEPTH],
            sp: 0,
            delay: 0,
            sound: 0,
            keys: [false; 16],
            rng,
            cycle: 0,
        }
    }

    /// Loads a program into the CPU's program space from a file
    pub fn load_program(&mut self, rom: impl AsRef<std::path::Path>) -> Result<&mut Self> {
        self.load_program_bytes(&std::fs::read(rom)?)
    }

    /// Loads bytes into the CPU's program space
    /// # Examples
    /// ```rust
    /// # use cheep::*;
    /// let mut cpu = CPU::new(Flags::default());
    /// cpu.load_program_bytes(&[0x60, 0x05]).unwrap();
    /// cpu.step().unwrap();
    /// assert_eq!(5, cpu.v()[0]);
    /// ```
    pub fn load_program_bytes(&mut self, rom: &[u8]) -> Result<&mut Self> {
        self.mem.load_rom(rom)?;
        Ok(self)
    }

    /// Executes one fetch-decode-execute cycle.
    ///
    /// The word at pc is combined big-endian, pc advances by 2 *before*
    /// dispatch, and exactly one instruction handler runs. Words that map
    /// to no instruction are a no-op, unless [Flags::strict] was set, in
    /// which case they surface as [Error::UnrecognizedOpcode].
    /// # Examples
    /// ```rust
    /// # use cheep::*;
    /// let mut cpu = CPU::new(Flags::default());
    /// cpu.load_program_bytes(&[0x12, 0x34]).unwrap();
    /// cpu.step().unwrap();
    /// assert_eq!(0x234, cpu.pc());
    /// assert_eq!(1, cpu.cycle());
    /// ```
    pub fn step(&mut self) -> Result<&mut Self> {
        let addr = self.pc;
        let word = [self.mem.read(addr), self.mem.read(addr.wrapping_add(1))];
        self.pc = self.pc.wrapping_add(2);
        self.cycle += 1;
        match Insn::decode(&word) {
            Ok((_, insn)) => self.execute(insn)?,
            Err(_) if self.flags.strict => {
                return Err(Error::UnrecognizedOpcode {
                    word: u16::from_be_bytes(word),
                    addr,
                });
            }
            // permissive decoding: unmapped opcodes fall through untouched
            Err(_) => {}
        }
        Ok(self)
    }

    /// Decrements both timers by one, saturating at 0.
    ///
    /// The CPU holds no notion of wall-clock time; the host calls this at
    /// its own fixed cadence, conventionally 60 Hz, independent of [CPU::step].
    /// # Examples
    /// ```rust
    /// # use cheep::*;
    /// let mut cpu = CPU::new(Flags::default());
    /// cpu.tick_timers();
    /// assert_eq!(0, cpu.delay());
    /// ```
    pub fn tick_timers(&mut self) {
        self.delay = self.delay.saturating_sub(1);
        self.sound = self.sound.saturating_sub(1);
    }

    /// Presses a key, and reports whether the key's state changed.
    /// If key is outside range `0..=0xF`, returns [Error::InvalidKey].
    /// # Examples
    /// ```rust
    /// # use cheep::*;
    /// let mut cpu = CPU::new(Flags::default());
    /// assert!(cpu.press(0x7).unwrap());
    /// // pressing a held key changes nothing
    /// assert!(!cpu.press(0x7).unwrap());
    /// ```
    pub fn press(&mut self, key: usize) -> Result<bool> {
        if let Some(keyref) = self.keys.get_mut(key) {
            if !*keyref {
                *keyref = true;
                return Ok(true);
            }
            Ok(false)
        } else {
            Err(Error::InvalidKey { key })
        }
    }

    /// Releases a key, and reports whether the key's state changed.
    /// If key is outside range `0..=0xF`, returns [Error::InvalidKey].
    pub fn release(&mut self, key: usize) -> Result<bool> {
        if let Some(keyref) = self.keys.get_mut(key) {
            if *keyref {
                *keyref = false;
                return Ok(true);
            }
            Ok(false)
        } else {
            Err(Error::InvalidKey { key })
        }
    }

    /// Replaces the whole key-state array, one entry per logical key `0..=0xF`
    pub fn set_keys(&mut self, keys: [bool; 16]) {
        self.keys = keys;
    }

    /// Sets a general purpose register in the CPU.
    /// If the register doesn't exist, returns [Error::InvalidRegister].
    pub fn set_v(&mut self, reg: Reg, value: u8) -> Result<()> {
        if let Some(gpr) = self.v.get_mut(reg) {
            *gpr = value;
            Ok(())
        } else {
            Err(Error::InvalidRegister { reg })
        }
    }

    /// Gets a slice of the entire general purpose registers
    pub fn v(&self) -> &[u8] {
        self.v.as_slice()
    }

    /// Gets the program counter
    pub fn pc(&self) -> Adr {
        self.pc
    }

    /// Gets the I register
    pub fn i(&self) -> Adr {
        self.i
    }

    /// Gets the value in the delay timer register
    pub fn delay(&self) -> u8 {
        self.delay
    }

    /// Gets the value in the sound timer register.
    ///
    /// The host starts a tone when this is nonzero and stops it at zero.
    pub fn sound(&self) -> u8 {
        self.sound
    }

    /// Gets the number of cycles the CPU has executed
    pub fn cycle(&self) -> usize {
        self.cycle
    }

    /// Gets the [Flags] the CPU was constructed with
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// A read-only view of the 64x32 framebuffer, row-major, one `u32` per
    /// cell: 0 for off, all-ones for on.
    pub fn framebuffer(&self) -> &[u32] {
        self.screen.pixels()
    }
}

impl Debug for CPU {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CPU")
            .field("flags", &self.flags)
            .field("screen", &self.screen)
            .field("v", &self.v)
            .field("i", &self.i)
            .field("pc", &self.pc)
            .field("sp", &self.sp)
            .field("delay", &self.delay)
            .field("sound", &self.sound)
            .field("keys", &self.keys)
            .field("cycle", &self.cycle)
            .finish_non_exhaustive()
    }
}

impl Default for CPU {
    /// Constructs a new CPU with default [Flags]: permissive decoding,
    /// modern quirk behavior.
    fn default() -> Self {
        Self::new(Flags::default())
    }
}
