use std::fmt;

use crate::assets::NUM_RATINGS;

/// Price as drawn: an integer dollar amount plus a cents fraction.
///
/// Kept as two integers so the serialized form is exact. Dollars may reach
/// 1000 and cents 99, so the combined maximum is 1000.99; the original tool
/// behaves the same way and downstream consumers expect it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Price {
    pub dollars: u32,
    pub cents: u32,
}

impl Price {
    pub fn amount(&self) -> f64 {
        f64::from(self.dollars) + f64::from(self.cents) / 100.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.dollars, self.cents)
    }
}

/// One generated product entry, held structured until serialization so
/// tests can assert on fields instead of parsing lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub vendor: &'static str,
    pub price: Price,
    pub ratings: [u8; NUM_RATINGS],
}

impl fmt::Display for Record {
    /// Fixed line layout: `<name>; <vendor>; $<price>; [<r1>, <r2>, <r3>, <r4>]`.
    /// Separators, brackets and the dollar sign are part of the output
    /// contract and must not change.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}; {}; ${}; [", self.name, self.vendor, self.price)?;
        for (index, rating) in self.ratings.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{rating}")?;
        }
        write!(f, "]")
    }
}
