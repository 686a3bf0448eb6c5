//! Unsigned word abstraction for the checksum engine.
//!
//! The engine is generic over the word width so callers can pick a type wide
//! enough for their payload plus the divisor's check field. This module
//! defines the `Word` trait and implements it for every native unsigned
//! integer type.
//!
//! # Bit Length
//!
//! The central primitive is `bit_len`: the number of significant bits in a
//! value (0 for zero, otherwise the index of the highest set bit plus one).
//! It is computed with an exact integer bit-scan via `leading_zeros`, never a
//! floating-point logarithm — `log2` rounds unreliably near exact powers of
//! two, which would corrupt the division's alignment logic.
//!
//! # Example
//! ```
//! use crc_sim_core::word::Word;
//!
//! assert_eq!(0u64.bit_len(), 0);
//! assert_eq!(1u64.bit_len(), 1);
//! assert_eq!(7u64.bit_len(), 3);
//! assert_eq!(8u64.bit_len(), 4);
//! ```

use std::fmt::{Binary, Debug, Display};
use std::ops::{BitAnd, BitXor, BitXorAssign, Shl, Shr};

/// A fixed-width unsigned integer word usable by the checksum engine.
///
/// Implemented for `u8`, `u16`, `u32`, `u64`, and `u128`. The supertraits
/// cover exactly what the engine and the link simulator need: copy/compare
/// semantics, XOR, shifts by a `u32` amount, and conversion from small
/// constants.
pub trait Word:
    Copy
    + Eq
    + Ord
    + Debug
    + Display
    + Binary
    + From<u8>
    + BitXor<Output = Self>
    + BitXorAssign
    + BitAnd<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    /// Native width of the word in bits.
    const BITS: u32;

    /// The zero value.
    const ZERO: Self;

    /// The one value.
    const ONE: Self;

    /// The all-ones value.
    const MAX: Self;

    /// Number of significant bits: 0 if the value is zero, otherwise the
    /// position of the highest set bit plus one.
    fn bit_len(self) -> u32;

    /// Truncating conversion from `u64`. High bits beyond the word width are
    /// discarded. Used to materialize error patterns generated in `u64`.
    fn from_u64_lossy(v: u64) -> Self;
}

macro_rules! impl_word {
    ($($t:ty),* $(,)?) => {$(
        impl Word for $t {
            const BITS: u32 = <$t>::BITS;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MAX: Self = <$t>::MAX;

            #[inline]
            fn bit_len(self) -> u32 {
                Self::BITS - self.leading_zeros()
            }

            #[inline]
            fn from_u64_lossy(v: u64) -> Self {
                v as $t
            }
        }
    )*};
}

impl_word!(u8, u16, u32, u64, u128);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_len_known_values() {
        assert_eq!(0u64.bit_len(), 0);
        assert_eq!(1u64.bit_len(), 1);
        assert_eq!(2u64.bit_len(), 2);
        assert_eq!(7u64.bit_len(), 3);
        assert_eq!(8u64.bit_len(), 4);
        assert_eq!(0b1011_1011u64.bit_len(), 8);
    }

    #[test]
    fn test_bit_len_exact_at_powers_of_two() {
        // The hazard a float log2 would hit: off-by-one at exact powers.
        for shift in 0..64u32 {
            let v = 1u64 << shift;
            assert_eq!(v.bit_len(), shift + 1, "power of two 2^{}", shift);
            if shift > 0 {
                assert_eq!((v - 1).bit_len(), shift, "just below 2^{}", shift);
            }
        }
    }

    #[test]
    fn test_bit_len_max_values() {
        assert_eq!(u8::MAX.bit_len(), 8);
        assert_eq!(u16::MAX.bit_len(), 16);
        assert_eq!(u32::MAX.bit_len(), 32);
        assert_eq!(u64::MAX.bit_len(), 64);
        assert_eq!(u128::MAX.bit_len(), 128);
    }

    #[test]
    fn test_bit_len_across_widths() {
        assert_eq!(0b101u8.bit_len(), 3);
        assert_eq!(0b101u16.bit_len(), 3);
        assert_eq!(0b101u32.bit_len(), 3);
        assert_eq!(0b101u128.bit_len(), 3);
    }

    #[test]
    fn test_from_u64_lossy_truncates() {
        assert_eq!(u8::from_u64_lossy(0x1FF), 0xFF);
        assert_eq!(u16::from_u64_lossy(0x12345), 0x2345);
        assert_eq!(u64::from_u64_lossy(u64::MAX), u64::MAX);
        assert_eq!(u128::from_u64_lossy(42), 42u128);
    }
}
