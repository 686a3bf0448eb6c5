//! crc-sim-core: Polynomial-division checksum engine with a noisy-link simulator
//!
//! This library provides the core components for a learning-focused system
//! that:
//! - Computes CRC-style check values by GF(2) polynomial division
//! - Appends a check field on the sending side and validates it on receive
//! - Simulates a lossy link that randomly tampers with words in flight
//! - Scores detection quality against the link's ground truth
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries:
//! - `word`: unsigned word abstraction and exact bit-length scanning
//! - `crc`: the checksum engine (encode, verify, divisor management)
//! - `channel`: deterministic link simulator with error injection
//! - `metrics`: observable drive behavior
//!
//! # Design Principles
//!
//! - **No panics**: all errors are structured and recoverable
//! - **Exact integer arithmetic**: bit lengths come from a hardware bit
//!   scan, never a floating-point logarithm
//! - **Deterministic**: seeded randomness makes runs reproducible
//! - **Observable**: metrics for understanding detection behavior

pub mod channel;
pub mod crc;
pub mod error;
pub mod metrics;
pub mod word;

// Re-export commonly used types
pub use channel::{ChannelConfig, Delivery, NoisyChannel};
pub use crc::Crc;
pub use error::{Error, Result};
pub use metrics::LinkMetrics;
pub use word::Word;
