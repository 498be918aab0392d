//! Represents configuration that shapes execution but isn't part of the Chip-8 machine state

use super::Quirks;

/// Configuration the CPU carries from construction onward. Never mutated
/// during execution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Flags {
    /// Fail with [crate::error::Error::UnrecognizedOpcode] on unmapped opcodes,
    /// instead of treating them as no-ops
    pub strict: bool,
    /// The set of [Quirks] to enable
    pub quirks: Quirks,
}
