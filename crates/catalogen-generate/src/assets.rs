//! Compiled-in vocabularies for record fields.

/// Closed set of candidate vendor names. Picks are uniform with repeats
/// allowed across records.
pub const VENDORS: [&str; 31] = [
    "apple",
    "apricot",
    "avocado",
    "banana",
    "berry",
    "cantaloupe",
    "cherry",
    "citron",
    "citrus",
    "coconut",
    "date",
    "fig",
    "grape",
    "guava",
    "kiwi",
    "lemon",
    "lime",
    "mango",
    "melon",
    "mulberry",
    "nectarine",
    "orange",
    "papaya",
    "peach",
    "pear",
    "pineapple",
    "plum",
    "prune",
    "raisin",
    "raspberry",
    "tangerine",
];

/// Alphabet product names are drawn from, one uniform pick per character.
pub const NAME_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Fixed length of a generated product name.
pub const NAME_LENGTH: usize = 6;

/// Number of department ratings per record.
pub const NUM_RATINGS: usize = 4;

/// Inclusive bounds for a single department rating.
pub const RATING_MIN: u8 = 1;
pub const RATING_MAX: u8 = 9;

/// Inclusive bounds for the dollar part of a price.
pub const DOLLARS_MIN: u32 = 100;
pub const DOLLARS_MAX: u32 = 1000;
