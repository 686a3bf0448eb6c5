//! Configuration for the crc-sim driver.
//!
//! Handles parsing command-line arguments and generating sensible defaults
//! (including randomized defaults that are reproducible with a seed).
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments, using intelligent defaults.
//! All defaults are printed so runs are reproducible.

use crate::payload::PayloadMode;
use crc_sim_core::channel::ChannelConfig;
use crc_sim_core::crc;
use crc_sim_core::word::Word;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Complete configuration for a drive run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Seed for all randomness (payload, link, defaults)
    pub seed: u64,

    /// Number of words to drive through the link
    pub iterations: u64,

    /// Generator polynomial bit pattern
    pub divisor: u64,

    /// Link noise configuration
    pub channel: ChannelConfig,

    /// Payload word stream shape
    pub payload: PayloadMode,

    // === Behavior ===
    /// Whether to print detailed config
    pub print_config: bool,

    /// Whether to print the detailed metrics summary
    pub print_summary: bool,

    /// Whether to print every word's verdict
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    ///
    /// If no arguments provided, generates randomized defaults using a
    /// time-based seed. If --seed is provided, uses that seed for all
    /// randomness (fully deterministic).
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut seed: Option<u64> = None;
        let mut iterations: Option<u64> = None;
        let mut divisor: Option<u64> = None;
        let mut tamper_rate: Option<f64> = None;
        let mut payload: Option<PayloadMode> = None;
        let mut print_config = false;
        let mut print_summary = true;
        let mut verbose = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--iterations" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--iterations requires a number".to_string());
                    }
                    iterations = Some(args[i].parse().map_err(|_| "invalid iterations")?);
                }
                "--divisor" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--divisor requires a bit pattern".to_string());
                    }
                    let d = parse_word(&args[i])?;
                    if d.bit_len() < crc::MIN_DIVISOR_BITS {
                        return Err(format!(
                            "divisor {:#b} is degenerate (bit length must be at least 2)",
                            d
                        ));
                    }
                    divisor = Some(d);
                }
                "--tamper-rate" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--tamper-rate requires a number".to_string());
                    }
                    let rate: f64 = args[i].parse().map_err(|_| "invalid tamper-rate")?;
                    if !(0.0..=1.0).contains(&rate) {
                        return Err("tamper-rate must be in 0.0..=1.0".to_string());
                    }
                    tamper_rate = Some(rate);
                }
                "--no-noise" => {
                    tamper_rate = Some(0.0);
                }
                "--payload" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--payload requires a mode".to_string());
                    }
                    payload = Some(PayloadMode::parse(&args[i])?);
                }
                "--print-config" => {
                    print_config = true;
                }
                "--no-summary" => {
                    print_summary = false;
                }
                "--verbose" | "-v" => {
                    verbose = true;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        // Determine seed (explicit or time-based)
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

        // Generate defaults using seed
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let config = Config {
            seed,
            iterations: iterations.unwrap_or(10_000),
            divisor: divisor.unwrap_or(u64::from(crc::DEFAULT_DIVISOR)),
            channel: ChannelConfig {
                tamper_rate: tamper_rate.unwrap_or_else(|| rng.gen_range(0.2..=0.8)),
                seed,
            },
            payload: payload.unwrap_or(PayloadMode::Sequential),
            print_config,
            print_summary,
            verbose,
        };

        Ok(config)
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        println!("Seed: {}", self.seed);
        println!("Iterations: {}", self.iterations);
        println!(
            "Divisor: {:#b} ({} bits, {} check bits)",
            self.divisor,
            self.divisor.bit_len(),
            self.divisor.bit_len() - 1
        );
        println!("Payload: {}", self.payload);
        println!();
        println!("=== Link ===");
        println!("Tamper rate: {:.2}%", self.channel.tamper_rate * 100.0);
        println!();
    }
}

/// Parse an unsigned word from decimal, `0x` hex, or `0b` binary notation.
fn parse_word(s: &str) -> Result<u64, String> {
    let parsed = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16)
    } else if let Some(bin) = s.strip_prefix("0b").or_else(|| s.strip_prefix("0B")) {
        u64::from_str_radix(bin, 2)
    } else {
        s.parse()
    };

    parsed.map_err(|_| format!("invalid bit pattern: {}", s))
}

fn print_help() {
    println!("crc-sim: Polynomial checksum test drive with random error injection");
    println!();
    println!("USAGE:");
    println!("    crc-sim [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --seed <N>           Random seed for determinism");
    println!("    --iterations <N>     Words to drive (default: 10000)");
    println!("    --divisor <BITS>     Generator polynomial, decimal/0x/0b (default: 0b10111011)");
    println!();
    println!("    --tamper-rate <R>    Corruption probability 0.0-1.0 (default: random 0.2-0.8)");
    println!("    --no-noise           Disable corruption (same as --tamper-rate 0)");
    println!("    --payload <MODE>     sequential | random | mixed (default: sequential)");
    println!();
    println!("    --print-config       Print resolved configuration");
    println!("    --no-summary         Print only the final result line");
    println!("    --verbose, -v        Print every word's verdict");
    println!("    --help, -h           Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    crc-sim                               # Run with random defaults");
    println!("    crc-sim --seed 42                     # Deterministic run");
    println!("    crc-sim --divisor 0x8005 --no-noise   # Custom polynomial, clean link");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults_with_seed() {
        let config = Config::from_args(&args(&["--seed", "42"])).unwrap();
        assert_eq!(config.seed, 42);
        assert_eq!(config.iterations, 10_000);
        assert_eq!(config.divisor, 0b1011_1011);
        assert!(config.channel.tamper_rate >= 0.2 && config.channel.tamper_rate <= 0.8);

        // Same seed, same resolved defaults.
        let again = Config::from_args(&args(&["--seed", "42"])).unwrap();
        assert_eq!(config.channel.tamper_rate, again.channel.tamper_rate);
    }

    #[test]
    fn test_divisor_notations() {
        for (text, expected) in [("187", 187u64), ("0xBB", 0xBB), ("0b10111011", 0b1011_1011)] {
            let config = Config::from_args(&args(&["--divisor", text])).unwrap();
            assert_eq!(config.divisor, expected, "notation {}", text);
        }
    }

    #[test]
    fn test_degenerate_divisor_rejected() {
        assert!(Config::from_args(&args(&["--divisor", "0"])).is_err());
        assert!(Config::from_args(&args(&["--divisor", "1"])).is_err());
        assert!(Config::from_args(&args(&["--divisor", "2"])).is_ok());
    }

    #[test]
    fn test_tamper_rate_bounds() {
        assert!(Config::from_args(&args(&["--tamper-rate", "0.5"])).is_ok());
        assert!(Config::from_args(&args(&["--tamper-rate", "1.5"])).is_err());
        assert!(Config::from_args(&args(&["--tamper-rate", "-0.1"])).is_err());

        let config = Config::from_args(&args(&["--no-noise"])).unwrap();
        assert_eq!(config.channel.tamper_rate, 0.0);
    }

    #[test]
    fn test_unknown_argument() {
        assert!(Config::from_args(&args(&["--bogus"])).is_err());
    }

    #[test]
    fn test_payload_modes() {
        let config = Config::from_args(&args(&["--payload", "mixed"])).unwrap();
        assert_eq!(config.payload, PayloadMode::Mixed);
        assert!(Config::from_args(&args(&["--payload", "nope"])).is_err());
    }
}
