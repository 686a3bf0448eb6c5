//! crc-sim: drive the checksum engine across a noisy link and score it.
//!
//! The loop mirrors a transmitter/receiver pair sharing a generator
//! polynomial: encode each payload word, push it through the simulated
//! link, verify on the far side, and compare the verdict with the link's
//! ground truth.
//!
//! Exit codes: 0 on success, 1 if any clean word failed verification
//! (an engine bug), 2 on configuration errors.

mod config;
mod payload;

use config::Config;
use crc_sim_core::{
    channel::NoisyChannel,
    crc::Crc,
    metrics::LinkMetrics,
};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            eprintln!("try --help for usage");
            std::process::exit(2);
        }
    };

    if config.print_config {
        config.print();
    }

    let crc = match Crc::<u64>::with_divisor(config.divisor) {
        Ok(crc) => crc,
        Err(e) => {
            // Config validation already rejects degenerate divisors, so this
            // is unreachable in practice, but keep the message honest.
            eprintln!("error: {}", e);
            std::process::exit(2);
        }
    };

    let words = payload::generate_payload(
        config.payload,
        config.seed,
        config.iterations,
        crc.max_encodable(),
    );

    let mut channel = NoisyChannel::new(config.channel);
    let mut metrics = LinkMetrics::new();

    for (i, &value) in words.iter().enumerate() {
        let encoded = crc.encode(value);
        let delivery = channel.transmit(encoded, crc.check_bits());
        let verified = crc.verify(delivery.word);
        metrics.record(delivery.tampered, verified);

        if config.verbose {
            println!(
                "word {:>7}: value={} sent={:#x} received={:#x} tampered={} verified={}",
                i, value, encoded, delivery.word, delivery.tampered, verified
            );
        }
    }
    metrics.complete();

    if config.print_summary {
        metrics.print_summary();
    }
    metrics.print_result();

    if metrics.clean_rejected > 0 {
        std::process::exit(1);
    }
}
