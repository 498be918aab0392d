// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Error type for Cheep

use thiserror::Error;

/// Result type, equivalent to [std::result::Result]<T, [enum@Error]>
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for Cheep.
#[derive(Debug, Error)]
pub enum Error {
    /// Program image does not fit between the load offset and the end of memory
    #[error("program image is {size} bytes, but only {max} fit after the load offset")]
    RomTooBig {
        /// Size of the offending image
        size: usize,
        /// Number of bytes available for program data
        max: usize,
    },
    /// Fetched a word that maps to no instruction (strict decoding only)
    #[error("opcode {word:04x} at {addr:03x} not recognized")]
    UnrecognizedOpcode {
        /// The offending word
        word: u16,
        /// Address the word was fetched from
        addr: u16,
    },
    /// A call was issued with all stack slots in use
    #[error("call at {addr:03x} exceeded {depth} stack frames")]
    StackOverflow {
        /// Address of the offending call
        addr: u16,
        /// Depth of the call stack
        depth: usize,
    },
    /// A return was issued with no matching call
    #[error("return at {addr:03x} with no frame on the stack")]
    StackUnderflow {
        /// Address of the offending return
        addr: u16,
    },
    /// Tried to press a key that doesn't exist
    #[error("tried to press key {key:X} which does not exist")]
    InvalidKey {
        /// The offending key
        key: usize,
    },
    /// Tried to get/set an out-of-bounds register
    #[error("tried to access register v{reg:X} which does not exist")]
    InvalidRegister {
        /// The offending register
        reg: usize,
    },
    /// Error originated in [std::io]
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}
