//! Polynomial-division checksum engine.
//!
//! Values and the divisor are treated as binary polynomials over GF(2):
//! each set bit is a coefficient, and long division replaces subtraction
//! with XOR. The remainder of that division is the check value.
//!
//! # Transmit / Receive
//!
//! - `encode` appends `divisor_bits - 1` zero bits to a value (left shift),
//!   computes the remainder of the widened value, and fills the appended
//!   field with it. This is the sender-side transform.
//! - `verify` reduces a received value directly and reports whether the
//!   remainder is zero. Any corruption that is not itself a GF(2) multiple
//!   of the divisor leaves a nonzero remainder.
//!
//! # Example
//! ```
//! use crc_sim_core::crc::Crc;
//!
//! let crc = Crc::<u64>::new(); // default divisor 0b1011_1011
//! let sent = crc.encode(42);
//! assert!(crc.verify(sent));
//! assert!(!crc.verify(sent ^ 1)); // single-bit tamper is caught
//! ```
//!
//! # Width and Overflow
//!
//! `encode` left-shifts the value by the check-field width. If the value's
//! significant bits plus the check field exceed the word width, the high bits
//! are silently truncated — the classic fixed-width CRC trade-off. Callers
//! choose a word type wide enough for payload plus check field;
//! `max_encodable` reports the largest losslessly encodable value.
//!
//! # Thread Safety
//!
//! No internal locking. `encode`/`verify` take `&self` and are freely
//! shareable; `set_divisor` takes `&mut self`, so concurrent mutation
//! requires external synchronization (or one engine per thread).

use crate::error::{Error, Result};
use crate::word::Word;

/// Default generator polynomial, the bit pattern `1011_1011` (8 bits).
pub const DEFAULT_DIVISOR: u8 = 0b1011_1011;

/// Minimum usable divisor bit length.
///
/// A zero divisor cannot align at all, and a divisor of 1 (bit length 1)
/// produces a degenerate reduction with a zero-width check field. Both are
/// rejected at every mutation point, so the reduction loop below never sees
/// them.
pub const MIN_DIVISOR_BITS: u32 = 2;

/// Checksum engine holding a single mutable divisor.
///
/// All per-call inputs are transient; the divisor is the only state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crc<T: Word> {
    divisor: T,
}

impl<T: Word> Crc<T> {
    /// Create an engine with the default divisor `0b1011_1011`.
    pub fn new() -> Self {
        Self {
            divisor: T::from(DEFAULT_DIVISOR),
        }
    }

    /// Create an engine with an explicit divisor.
    ///
    /// # Errors
    /// Returns `Error::DegenerateDivisor` if `divisor` has bit length < 2.
    pub fn with_divisor(divisor: T) -> Result<Self> {
        let mut crc = Self::new();
        crc.try_set_divisor(divisor)?;
        Ok(crc)
    }

    /// The current generator polynomial.
    pub fn divisor(&self) -> T {
        self.divisor
    }

    /// Width of the appended check field in bits (`divisor bit length - 1`).
    pub fn check_bits(&self) -> u32 {
        self.divisor.bit_len() - 1
    }

    /// Largest value that `encode` can widen without truncating high bits.
    pub fn max_encodable(&self) -> T {
        T::MAX >> self.check_bits()
    }

    /// Replace the divisor if the new one is usable; otherwise keep the
    /// current divisor.
    ///
    /// Rejected values (zero, or the degenerate divisor 1) are silently
    /// ignored, matching the lenient setter contract. Use `try_set_divisor`
    /// to observe the rejection.
    pub fn set_divisor(&mut self, new_divisor: T) {
        if new_divisor.bit_len() >= MIN_DIVISOR_BITS {
            self.divisor = new_divisor;
        }
    }

    /// Replace the divisor, surfacing rejection as an error.
    ///
    /// On error the previous divisor remains in effect.
    ///
    /// # Errors
    /// Returns `Error::DegenerateDivisor` if `new_divisor` has bit length < 2.
    pub fn try_set_divisor(&mut self, new_divisor: T) -> Result<()> {
        let bit_len = new_divisor.bit_len();
        if bit_len < MIN_DIVISOR_BITS {
            return Err(Error::DegenerateDivisor { bit_len });
        }
        self.divisor = new_divisor;
        Ok(())
    }

    /// Append a check field to `value` for transmission.
    ///
    /// The value is left-shifted by `check_bits()` (appending zero bits), the
    /// widened value is reduced modulo the divisor, and the remainder is
    /// XORed into the appended field. The result always satisfies
    /// `verify(encode(v)) == true`.
    ///
    /// High bits of `value` beyond `max_encodable()` are silently shifted
    /// out; see the module docs on width and overflow.
    pub fn encode(&self, value: T) -> T {
        let widened = value << self.check_bits();
        widened ^ self.remainder(widened)
    }

    /// Check a received value: true iff its remainder is zero.
    ///
    /// A checksum mismatch is data, not an error, so this returns a plain
    /// boolean rather than a `Result`.
    pub fn verify(&self, value: T) -> bool {
        self.remainder(value) == T::ZERO
    }

    /// GF(2) long division: reduce `value` modulo the divisor.
    ///
    /// Each iteration aligns the divisor's top bit with the value's top bit
    /// and XORs, which strictly decreases the value's bit length. The shift
    /// amount is non-negative by the loop guard, so the loop terminates in at
    /// most `T::BITS` iterations for every divisor the setters accept.
    fn remainder(&self, mut value: T) -> T {
        let divisor_bits = self.divisor.bit_len();
        debug_assert!(divisor_bits >= MIN_DIVISOR_BITS);

        let mut value_bits = value.bit_len();
        while value_bits >= divisor_bits {
            value ^= self.divisor << (value_bits - divisor_bits);
            value_bits = value.bit_len();
        }
        value
    }
}

impl<T: Word> Default for Crc<T> {
    fn default() -> Self {
        Self::new()
    }
}
