//! Noisy-link simulator with random error injection.
//!
//! This module simulates a transmission link that occasionally tampers with
//! words in flight, so the driver can score how well the checksum engine
//! detects corruption.
//!
//! # Injected Errors
//!
//! With probability `tamper_rate`, a transmitted word is XORed with a
//! uniformly random nonzero pattern confined to the low check-field bits.
//! Corrupting only the check field keeps every injected error below the
//! divisor's magnitude, which is the interesting regime: errors at or above
//! it can alias to GF(2) multiples of the divisor in more ways.
//!
//! # Determinism
//!
//! All randomness comes from a seeded ChaCha8 RNG. Given the same seed and
//! the same sequence of calls, outputs are bit-identical.
//!
//! # Thread Safety
//!
//! Not thread-safe; use one instance per thread or synchronize externally.

use crate::word::Word;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Configuration for the noisy link.
#[derive(Debug, Clone, Copy)]
pub struct ChannelConfig {
    /// Probability that a transmitted word is tampered with, in [0.0, 1.0].
    pub tamper_rate: f64,

    /// Random seed for determinism.
    pub seed: u64,
}

impl ChannelConfig {
    /// A link that never corrupts (tamper rate 0).
    pub fn clean(seed: u64) -> Self {
        Self {
            tamper_rate: 0.0,
            seed,
        }
    }

    /// A link with moderate corruption (tamper rate 0.5).
    pub fn default_with_seed(seed: u64) -> Self {
        Self {
            tamper_rate: 0.5,
            seed,
        }
    }
}

/// Outcome of one transmission: the word as it arrived, plus the ground
/// truth of whether the link tampered with it.
///
/// The `tampered` flag lets the driver score detection without guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delivery<T> {
    /// The word as received (possibly corrupted).
    pub word: T,

    /// True if the link flipped any bits.
    pub tampered: bool,
}

/// Link simulator injecting random check-field errors.
pub struct NoisyChannel {
    config: ChannelConfig,
    rng: ChaCha8Rng,

    // Statistics
    words_sent: u64,
    words_tampered: u64,
}

impl NoisyChannel {
    /// Create a new link with the given configuration.
    pub fn new(config: ChannelConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);

        Self {
            config,
            rng,
            words_sent: 0,
            words_tampered: 0,
        }
    }

    /// Transmit one word through the link.
    ///
    /// # Arguments
    /// - `word`: the encoded word to send
    /// - `check_bits`: width of the check field; injected errors stay within
    ///   the low `check_bits` bits
    ///
    /// # Returns
    /// The delivered word and whether it was tampered with. An injected
    /// error is always nonzero, so `tampered == true` implies the delivered
    /// word differs from the sent word.
    pub fn transmit<T: Word>(&mut self, word: T, check_bits: u32) -> Delivery<T> {
        self.words_sent += 1;

        if check_bits == 0 || self.config.tamper_rate <= 0.0 {
            return Delivery {
                word,
                tampered: false,
            };
        }

        let roll: f64 = self.rng.gen();
        if roll >= self.config.tamper_rate {
            return Delivery {
                word,
                tampered: false,
            };
        }

        let error = self.error_pattern(check_bits.min(T::BITS));
        self.words_tampered += 1;

        Delivery {
            word: word ^ T::from_u64_lossy(error),
            tampered: true,
        }
    }

    /// Get statistics about link behavior.
    pub fn stats(&self) -> ChannelStats {
        ChannelStats {
            words_sent: self.words_sent,
            words_tampered: self.words_tampered,
        }
    }

    /// Draw a uniformly random nonzero pattern within the low `check_bits`
    /// bits (clamped to the 64-bit pattern width).
    fn error_pattern(&mut self, check_bits: u32) -> u64 {
        let mask = if check_bits >= 64 {
            u64::MAX
        } else {
            (1u64 << check_bits) - 1
        };

        loop {
            let error = self.rng.gen::<u64>() & mask;
            if error != 0 {
                return error;
            }
        }
    }
}

/// Statistics about link behavior.
#[derive(Debug, Clone, Copy)]
pub struct ChannelStats {
    /// Total words transmitted.
    pub words_sent: u64,

    /// Words the link tampered with.
    pub words_tampered: u64,
}

impl ChannelStats {
    /// Fraction of transmitted words that were tampered with.
    pub fn observed_tamper_rate(&self) -> f64 {
        if self.words_sent == 0 {
            0.0
        } else {
            self.words_tampered as f64 / self.words_sent as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_channel_passes_through() {
        let mut channel = NoisyChannel::new(ChannelConfig::clean(42));

        for word in [0u64, 1, 748, 5431, u64::MAX] {
            let delivery = channel.transmit(word, 7);
            assert_eq!(delivery.word, word);
            assert!(!delivery.tampered);
        }

        let stats = channel.stats();
        assert_eq!(stats.words_sent, 5);
        assert_eq!(stats.words_tampered, 0);
    }

    #[test]
    fn test_always_tamper() {
        let config = ChannelConfig {
            tamper_rate: 1.0,
            seed: 42,
        };
        let mut channel = NoisyChannel::new(config);

        for word in 0..100u64 {
            let delivery = channel.transmit(word, 7);
            assert!(delivery.tampered);
            assert_ne!(delivery.word, word, "tampered delivery must differ");
            // Error confined to the low 7 bits.
            assert_eq!(delivery.word >> 7, word >> 7);
        }

        assert_eq!(channel.stats().words_tampered, 100);
    }

    #[test]
    fn test_tamper_rate_approximate() {
        let config = ChannelConfig {
            tamper_rate: 0.25,
            seed: 42,
        };
        let mut channel = NoisyChannel::new(config);

        for word in 0..1000u64 {
            channel.transmit(word, 7);
        }

        let rate = channel.stats().observed_tamper_rate();
        // Allow slack for randomness around 0.25.
        assert!(rate > 0.15 && rate < 0.35, "rate {} out of range", rate);
    }

    #[test]
    fn test_determinism() {
        let config = ChannelConfig::default_with_seed(12345);

        let mut channel1 = NoisyChannel::new(config);
        let mut channel2 = NoisyChannel::new(config);

        for word in 0..200u64 {
            let d1 = channel1.transmit(word, 7);
            let d2 = channel2.transmit(word, 7);
            assert_eq!(d1, d2);
        }
    }

    #[test]
    fn test_zero_check_bits_passes_through() {
        let config = ChannelConfig {
            tamper_rate: 1.0,
            seed: 7,
        };
        let mut channel = NoisyChannel::new(config);

        let delivery = channel.transmit(99u64, 0);
        assert!(!delivery.tampered);
        assert_eq!(delivery.word, 99);
    }

    #[test]
    fn test_wide_check_field_clamped() {
        let config = ChannelConfig {
            tamper_rate: 1.0,
            seed: 7,
        };
        let mut channel = NoisyChannel::new(config);

        // check_bits beyond the pattern width must not panic and must still
        // inject a nonzero error.
        let delivery = channel.transmit(0u128, 100);
        assert!(delivery.tampered);
        assert_ne!(delivery.word, 0);
    }

    #[test]
    fn test_narrow_word_error_fits() {
        let config = ChannelConfig {
            tamper_rate: 1.0,
            seed: 11,
        };
        let mut channel = NoisyChannel::new(config);

        for _ in 0..50 {
            let delivery = channel.transmit(0u8, 7);
            assert!(delivery.tampered);
            assert_ne!(delivery.word, 0);
            assert!(delivery.word < 1 << 7);
        }
    }
}
