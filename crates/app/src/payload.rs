//! Payload word generation for test drives.
//!
//! The driver needs a stream of values to push through the encode → link →
//! verify loop. All modes keep every word within the encodable range for the
//! chosen divisor, so widening never truncates and a clean link implies a
//! clean verdict.
//!
//! # Modes
//!
//! - `Sequential`: 0, 1, 2, ... (wrapping at the encodable maximum) — the
//!   classic exhaustive sweep
//! - `Random`: uniformly random words
//! - `Mixed`: random fill with edge values (0, 1, powers of two, the
//!   maximum) interleaved, to keep the alignment-sensitive cases hot

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Shape of the generated word stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadMode {
    /// Counting upward from zero.
    Sequential,
    /// Uniformly random words.
    Random,
    /// Random words with edge values interleaved.
    Mixed,
}

impl PayloadMode {
    /// Parse a mode name from the command line.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s {
            "sequential" => Ok(Self::Sequential),
            "random" => Ok(Self::Random),
            "mixed" => Ok(Self::Mixed),
            _ => Err(format!(
                "unknown payload mode: {} (expected sequential, random, or mixed)",
                s
            )),
        }
    }
}

impl std::fmt::Display for PayloadMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sequential => write!(f, "sequential"),
            Self::Random => write!(f, "random"),
            Self::Mixed => write!(f, "mixed"),
        }
    }
}

/// Generate `count` payload words in `0..=max_value`.
///
/// # Arguments
/// - `mode`: stream shape
/// - `seed`: random seed for determinism
/// - `count`: number of words
/// - `max_value`: largest encodable value for the driver's engine
pub fn generate_payload(mode: PayloadMode, seed: u64, count: u64, max_value: u64) -> Vec<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut words = Vec::with_capacity(count as usize);

    match mode {
        PayloadMode::Sequential => {
            // max_value < u64::MAX whenever the check field is nonempty, so
            // the modulus below cannot overflow.
            let modulus = max_value.saturating_add(1);
            for i in 0..count {
                words.push(i % modulus);
            }
        }
        PayloadMode::Random => {
            for _ in 0..count {
                words.push(rng.gen_range(0..=max_value));
            }
        }
        PayloadMode::Mixed => {
            let edges = edge_values(max_value);
            for i in 0..count {
                // Every 8th word comes from the edge list.
                if i % 8 == 0 {
                    words.push(edges[(i / 8) as usize % edges.len()]);
                } else {
                    words.push(rng.gen_range(0..=max_value));
                }
            }
        }
    }

    words
}

/// Alignment-sensitive values: zero, one, every in-range power of two, and
/// the maximum itself.
fn edge_values(max_value: u64) -> Vec<u64> {
    let mut edges = vec![0, 1];
    let mut power = 2u64;
    while power <= max_value {
        edges.push(power);
        match power.checked_mul(2) {
            Some(next) => power = next,
            None => break,
        }
    }
    edges.push(max_value);
    edges
}
