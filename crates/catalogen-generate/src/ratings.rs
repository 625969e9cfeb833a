use rand::Rng;
use rand::seq::SliceRandom;

use crate::assets::{NUM_RATINGS, RATING_MAX, RATING_MIN};

/// Reusable buffer of department rating values.
///
/// Seeded exactly once per run; every record afterwards sees the same four
/// values, reshuffled in place per record. The constant multiset across a
/// run is intentional and must not be replaced by fresh draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingPool {
    values: [u8; NUM_RATINGS],
}

impl RatingPool {
    /// Draw the pool values, each uniform in [RATING_MIN, RATING_MAX].
    pub fn seed(rng: &mut impl Rng) -> Self {
        let mut values = [0u8; NUM_RATINGS];
        for slot in &mut values {
            *slot = rng.random_range(RATING_MIN..=RATING_MAX);
        }
        Self { values }
    }

    /// Reorder the pool in place and return the new order.
    pub fn shuffle(&mut self, rng: &mut impl Rng) -> [u8; NUM_RATINGS] {
        self.values.shuffle(rng);
        self.values
    }

    /// Current pool contents, in their current order.
    pub fn values(&self) -> [u8; NUM_RATINGS] {
        self.values
    }
}
