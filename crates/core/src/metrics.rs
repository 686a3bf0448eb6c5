//! Metrics collection and reporting for checksum drives.
//!
//! Tracks, for each word pushed through the encode → link → verify loop,
//! how the verifier's verdict compares to the link's ground truth:
//!
//! - clean word, verified: the expected happy path
//! - clean word, rejected: must never happen; indicates an engine bug
//! - tampered word, rejected: corruption detected
//! - tampered word, verified: a miss — the injected error reduced to zero,
//!   i.e. it was a GF(2) multiple of the divisor (the inherent CRC
//!   false-negative)
//!
//! # Thread Safety
//!
//! The `LinkMetrics` struct is NOT thread-safe. For multi-threaded use,
//! wrap in `Arc<Mutex<LinkMetrics>>` or merge per-thread instances.

use std::time::{Duration, Instant};

/// Counters for one drive through the link.
#[derive(Debug, Clone)]
pub struct LinkMetrics {
    // === Timing ===
    /// When the drive started
    pub start_time: Instant,

    /// When the drive ended (set on completion)
    pub end_time: Option<Instant>,

    // === Words ===
    /// Total words pushed through the loop
    pub words_sent: u64,

    /// Words the link tampered with
    pub words_tampered: u64,

    // === Verdicts ===
    /// Tampered words the verifier rejected
    pub tamper_detected: u64,

    /// Tampered words the verifier accepted (divisor-multiple errors)
    pub tamper_missed: u64,

    /// Clean words the verifier accepted
    pub clean_passed: u64,

    /// Clean words the verifier rejected (must stay zero)
    pub clean_rejected: u64,
}

impl LinkMetrics {
    /// Create new metrics with start time set to now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            words_sent: 0,
            words_tampered: 0,
            tamper_detected: 0,
            tamper_missed: 0,
            clean_passed: 0,
            clean_rejected: 0,
        }
    }

    /// Record one word's outcome.
    ///
    /// # Arguments
    /// - `tampered`: the link's ground truth for this word
    /// - `verified`: the verifier's verdict
    pub fn record(&mut self, tampered: bool, verified: bool) {
        self.words_sent += 1;

        match (tampered, verified) {
            (false, true) => self.clean_passed += 1,
            (false, false) => self.clean_rejected += 1,
            (true, true) => {
                self.words_tampered += 1;
                self.tamper_missed += 1;
            }
            (true, false) => {
                self.words_tampered += 1;
                self.tamper_detected += 1;
            }
        }
    }

    /// Mark the drive as complete.
    pub fn complete(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Get total duration (or current elapsed if not complete).
    pub fn duration(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => self.start_time.elapsed(),
        }
    }

    /// Fraction of tampered words that were detected.
    ///
    /// Returns 1.0 if nothing was tampered with.
    pub fn detection_rate(&self) -> f64 {
        if self.words_tampered == 0 {
            1.0
        } else {
            self.tamper_detected as f64 / self.words_tampered as f64
        }
    }

    /// Fraction of tampered words that slipped through.
    pub fn miss_rate(&self) -> f64 {
        if self.words_tampered == 0 {
            0.0
        } else {
            self.tamper_missed as f64 / self.words_tampered as f64
        }
    }

    /// Fraction of all words the link tampered with.
    pub fn observed_tamper_rate(&self) -> f64 {
        if self.words_sent == 0 {
            0.0
        } else {
            self.words_tampered as f64 / self.words_sent as f64
        }
    }

    /// True when every verdict matched the ground truth that a checksum can
    /// express: all clean words passed and no miss occurred.
    pub fn is_perfect(&self) -> bool {
        self.clean_rejected == 0 && self.tamper_missed == 0
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        let duration_ms = self.duration().as_millis();

        println!("\n=== Drive Summary ===");
        println!("Duration: {} ms", duration_ms);
        println!();

        println!("Words sent: {}", self.words_sent);
        println!(
            "Words tampered: {} ({:.2}%)",
            self.words_tampered,
            self.observed_tamper_rate() * 100.0
        );
        println!();

        println!("=== Verification ===");
        println!("Clean passed: {}", self.clean_passed);
        println!("Clean rejected: {}", self.clean_rejected);
        println!(
            "Tamper detected: {} ({:.2}%)",
            self.tamper_detected,
            self.detection_rate() * 100.0
        );
        println!(
            "Tamper missed: {} ({:.2}%)",
            self.tamper_missed,
            self.miss_rate() * 100.0
        );
        println!();

        if self.clean_rejected > 0 {
            println!("Engine check: FAILED ✗ (clean words rejected)");
        } else {
            println!("Engine check: PASSED ✓");
        }
        println!();
    }

    /// Print just the final result (pass/fail).
    pub fn print_result(&self) {
        if self.clean_rejected == 0 {
            println!(
                "✓ Drive completed: {}/{} tampered words detected in {} ms",
                self.tamper_detected,
                self.words_tampered,
                self.duration().as_millis()
            );
        } else {
            println!(
                "✗ Drive failed: {} clean words rejected",
                self.clean_rejected
            );
        }
    }

    /// Export metrics as a simple text format (for parsing/testing).
    pub fn export_text(&self) -> String {
        format!(
            "duration_ms={}\n\
             words_sent={}\n\
             words_tampered={}\n\
             tamper_detected={}\n\
             tamper_missed={}\n\
             clean_passed={}\n\
             clean_rejected={}\n\
             detection_rate={:.4}\n\
             miss_rate={:.4}\n",
            self.duration().as_millis(),
            self.words_sent,
            self.words_tampered,
            self.tamper_detected,
            self.tamper_missed,
            self.clean_passed,
            self.clean_rejected,
            self.detection_rate(),
            self.miss_rate(),
        )
    }
}

impl Default for LinkMetrics {
    fn default() -> Self {
        Self::new()
    }
}
