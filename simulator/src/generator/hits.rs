use chanstatus::prelude::{ChannelId, INVALID_CHANNEL_ID};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Configuration for generating synthetic channel hits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Extra ids drawn past the allocated range, to exercise absent channels.
    pub overflow_channels: u32,
    /// Fraction of hits carrying the invalid channel id.
    pub invalid_fraction: f64,
    pub pedestal: f32,
    pub noise: f32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            overflow_channels: 64,
            invalid_fraction: 0.001,
            pedestal: 400.0,
            noise: 2.5,
        }
    }
}

/// One synthetic hit on a readout channel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ChannelHit {
    pub channel: ChannelId,
    pub adc: f32,
}

/// Seeded source of hits spread uniformly over the channel range.
pub struct HitGenerator {
    rng: StdRng,
    channel_span: u32,
    config: GeneratorConfig,
}

impl HitGenerator {
    pub fn new(channel_count: u32, seed: u64, config: GeneratorConfig) -> Self {
        let channel_span = channel_count
            .saturating_add(config.overflow_channels)
            .clamp(1, INVALID_CHANNEL_ID);
        Self {
            rng: StdRng::seed_from_u64(seed),
            channel_span,
            config,
        }
    }

    pub fn next_pass(&mut self, hit_count: usize) -> Vec<ChannelHit> {
        let invalid_fraction = self.config.invalid_fraction.clamp(0.0, 1.0);
        let noise = self.config.noise.abs();

        (0..hit_count)
            .map(|_| {
                let channel = if self.rng.gen_bool(invalid_fraction) {
                    INVALID_CHANNEL_ID
                } else {
                    self.rng.gen_range(0..self.channel_span)
                };
                let jitter = if noise > 0.0 {
                    self.rng.gen_range(-noise..noise)
                } else {
                    0.0
                };
                ChannelHit {
                    channel,
                    adc: self.config.pedestal + jitter,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_builds_expected_hit_count() {
        let mut generator = HitGenerator::new(128, 7, GeneratorConfig::default());
        let hits = generator.next_pass(500);
        assert_eq!(hits.len(), 500);
        assert!(hits
            .iter()
            .all(|hit| hit.channel < 128 + 64 || hit.channel == INVALID_CHANNEL_ID));
    }

    #[test]
    fn same_seed_repeats_hits() {
        let config = GeneratorConfig {
            overflow_channels: 0,
            invalid_fraction: 0.0,
            pedestal: 0.0,
            noise: 1.0,
        };
        let first = HitGenerator::new(32, 13, config.clone()).next_pass(64);
        let second = HitGenerator::new(32, 13, config).next_pass(64);
        assert_eq!(first, second);
        assert!(first.iter().all(|hit| hit.channel < 32));
    }

    #[test]
    fn zero_channels_still_draws_from_one_id() {
        let config = GeneratorConfig {
            overflow_channels: 0,
            invalid_fraction: 0.0,
            ..Default::default()
        };
        let hits = HitGenerator::new(0, 1, config).next_pass(4);
        assert!(hits.iter().all(|hit| hit.channel == 0));
    }
}
