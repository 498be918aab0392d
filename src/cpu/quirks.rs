//! Controls the [Quirks] behavior of the CPU on a granular level.

/// The legacy-vs-modern toggles for the two instructions whose meaning
/// drifted between interpreter generations.
///
/// `false` everywhere matches the original interpreter's defaults:
/// shifts source vX, and `Bnnn` offsets with v0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quirks {
    /// Cosmac VIP: shift ops `8xy6`/`8xyE` copy vY into vX before shifting
    pub shift_src_vy: bool,
    /// Cosmac VIP reads `Bnnn` as `nnn` + v0; this makes it `nnn` + vX,
    /// where X is the high nibble of `nnn`
    pub jump_offset_vx: bool,
}

impl From<bool> for Quirks {
    fn from(value: bool) -> Self {
        Quirks {
            shift_src_vy: value,
            jump_offset_vx: value,
        }
    }
}
