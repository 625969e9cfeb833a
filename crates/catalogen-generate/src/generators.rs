//! Field generators. Every helper takes the run's RNG explicitly so a test
//! can pin the seed and replay a run.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::assets::{DOLLARS_MAX, DOLLARS_MIN, NAME_ALPHABET, NAME_LENGTH, VENDORS};
use crate::ratings::RatingPool;
use crate::record::{Price, Record};

/// Fixed-length product name, each character uniform over [A-Za-z].
/// No uniqueness guarantee; collisions across records are acceptable.
pub fn product_name(rng: &mut impl Rng) -> String {
    (0..NAME_LENGTH)
        .map(|_| {
            let index = rng.random_range(0..NAME_ALPHABET.len());
            NAME_ALPHABET[index] as char
        })
        .collect()
}

/// Uniform pick from the closed vendor list.
pub fn vendor(rng: &mut impl Rng) -> &'static str {
    VENDORS.choose(rng).copied().unwrap_or(VENDORS[0])
}

/// Dollars uniform in [100, 1000] inclusive plus cents uniform in [0, 99].
/// The inclusive dollar top combined with cents can reach 1000.99, which is
/// the documented behavior to preserve.
pub fn price(rng: &mut impl Rng) -> Price {
    Price {
        dollars: rng.random_range(DOLLARS_MIN..=DOLLARS_MAX),
        cents: rng.random_range(0..100),
    }
}

/// Assemble one record: fresh name, vendor and price, plus the run-wide
/// rating pool reshuffled for this record.
pub fn record(pool: &mut RatingPool, rng: &mut impl Rng) -> Record {
    Record {
        name: product_name(rng),
        vendor: vendor(rng),
        price: price(rng),
        ratings: pool.shuffle(rng),
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::assets::{RATING_MAX, RATING_MIN};

    #[test]
    fn product_names_are_six_letters() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..200 {
            let name = product_name(&mut rng);
            assert_eq!(name.len(), NAME_LENGTH);
            assert!(name.chars().all(|c| c.is_ascii_alphabetic()));
        }
    }

    #[test]
    fn vendors_come_from_the_closed_list() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for _ in 0..200 {
            assert!(VENDORS.contains(&vendor(&mut rng)));
        }
    }

    #[test]
    fn prices_stay_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..500 {
            let price = price(&mut rng);
            assert!((DOLLARS_MIN..=DOLLARS_MAX).contains(&price.dollars));
            assert!(price.cents < 100);
            assert!(price.amount() >= 100.0);
            assert!(price.amount() <= 1000.99);
        }
    }

    #[test]
    fn records_reuse_the_pool_multiset() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut pool = RatingPool::seed(&mut rng);
        let mut expected = pool.values();
        expected.sort_unstable();

        for _ in 0..50 {
            let record = record(&mut pool, &mut rng);
            let mut ratings = record.ratings;
            ratings.sort_unstable();
            assert_eq!(ratings, expected);
            for value in record.ratings {
                assert!((RATING_MIN..=RATING_MAX).contains(&value));
            }
        }
    }
}
