//! Simulated social engagement counters attached to every report.

use rand::Rng;

/// Upper bound (inclusive) for each simulated counter.
pub const SIGNAL_CEILING: u32 = 1000;

/// Fabricated social-share counters carried in the response.
///
/// These numbers are illustrative placeholders, not measurements: each value
/// is drawn uniformly from `0..=SIGNAL_CEILING` and regenerated per request.
/// They feed no decision logic anywhere in the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialSignals {
    pub twitter_shares: u32,
    pub facebook_shares: u32,
    pub reddit_mentions: u32,
}

impl SocialSignals {
    /// Samples a fresh set of counters, each independent and uniform.
    pub fn sample() -> Self {
        let mut rng = rand::rng();

        Self {
            twitter_shares: rng.random_range(0..=SIGNAL_CEILING),
            facebook_shares: rng.random_range(0..=SIGNAL_CEILING),
            reddit_mentions: rng.random_range(0..=SIGNAL_CEILING),
        }
    }
}
