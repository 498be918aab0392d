// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE.txt for details)

//! This crate implements the interpreter core of a Chip-8 virtual machine:
//! the fetch-decode-execute cycle, the full 2-byte instruction set with its
//! flag-register side effects and configurable legacy-vs-modern quirks, the
//! timer model, and the 64x32 monochrome framebuffer.
//!
//! The core knows nothing about wall-clock time, graphics APIs, or input
//! devices. A host drives [CPU::step] and [CPU::tick_timers] at two
//! independent cadences, copies [CPU::framebuffer] to a display surface,
//! feeds key state in through [CPU::press]/[CPU::release] or
//! [CPU::set_keys], and turns [CPU::sound] into an audible tone.

pub mod cpu;
pub mod error;

pub use cpu::{flags::Flags, quirks::Quirks, CPU};
pub use error::{Error, Result};

/// Common imports for cheep
pub mod prelude {
    pub use crate::cpu::{
        flags::Flags,
        mem::{FONT_BASE, LOAD_BASE, RAM_SIZE},
        quirks::Quirks,
        screen::{HEIGHT, WIDTH},
        CPU,
    };
    pub use crate::error::{Error, Result};
}
