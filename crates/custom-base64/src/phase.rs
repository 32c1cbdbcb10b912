//! Bit accounting for the 8-bit to 6-bit conversion.
//!
//! Three bytes hold exactly four sextets, so both directions
//! cycle through four states:
//!
//! ```text
//! bytes   |aaaaaaaa|bbbbbbbb|cccccccc|
//! sextets |aaaaaa|aabbbb|bbbbcc|cccccc|
//! ```
//!
//! When encoding, the phase is the number of bits carried over
//! from the previous byte into the next sextet. When decoding,
//! it is the number of bits of the current sextet already spent
//! on the previous byte.

/// A state in the four-step packing cycle.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub(crate) enum Phase {
    /// Byte aligned, nothing carried.
    #[default]
    Carry0,
    /// Two bits carried.
    Carry2,
    /// Four bits carried.
    Carry4,
    /// A whole sextet carried.
    Carry6,
}

impl Phase {
    /// Returns the following phase.
    pub(crate) const fn next(self) -> Self {
        match self {
            Self::Carry0 => Self::Carry2,
            Self::Carry2 => Self::Carry4,
            Self::Carry4 => Self::Carry6,
            Self::Carry6 => Self::Carry0,
        }
    }
}
