//! Error types for the checksum engine and its harness.
//!
//! The taxonomy is deliberately small: a checksum mismatch is data (a
//! boolean from `verify`), not an error. Errors cover only configuration
//! problems — values that would put the engine into an unusable state.

use thiserror::Error;

/// Top-level error type for all operations in the system.
#[derive(Debug, Error)]
pub enum Error {
    /// Divisor with bit length below 2 (zero, or the degenerate divisor 1).
    ///
    /// A zero divisor can never align with the dividend and a one-bit
    /// divisor yields a zero-width check field, so both are rejected before
    /// they can reach the reduction loop.
    #[error("degenerate divisor: bit length {bit_len} is below the minimum of 2")]
    DegenerateDivisor { bit_len: u32 },

    /// Configuration error from the driver layer.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
