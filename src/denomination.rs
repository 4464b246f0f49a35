//! The closed set of banknote face values.
//!
//! Persisted state and dispensation plans may only ever contain these eight
//! denominations; anything else read from disk is treated as corruption.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A banknote face value.
///
/// The set is closed: `{10, 50, 100, 200, 500, 1000, 2000, 5000}` currency
/// units. Serialized as the bare integer face value, so an unrecognized
/// value in the store fails deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Denomination {
    Ten,
    Fifty,
    Hundred,
    TwoHundred,
    FiveHundred,
    Thousand,
    TwoThousand,
    FiveThousand,
}

impl Denomination {
    /// Number of supported denominations.
    pub const COUNT: usize = 8;

    /// All denominations in ascending face-value order.
    pub const ALL: [Denomination; Self::COUNT] = [
        Denomination::Ten,
        Denomination::Fifty,
        Denomination::Hundred,
        Denomination::TwoHundred,
        Denomination::FiveHundred,
        Denomination::Thousand,
        Denomination::TwoThousand,
        Denomination::FiveThousand,
    ];

    /// All denominations from largest to smallest.
    ///
    /// The dispenser's greedy descent iterates this array; the ordering
    /// contract lives here rather than in the algorithm.
    pub const DESCENDING: [Denomination; Self::COUNT] = [
        Denomination::FiveThousand,
        Denomination::TwoThousand,
        Denomination::Thousand,
        Denomination::FiveHundred,
        Denomination::TwoHundred,
        Denomination::Hundred,
        Denomination::Fifty,
        Denomination::Ten,
    ];

    /// The face value in currency units.
    pub fn value(self) -> u32 {
        match self {
            Denomination::Ten => 10,
            Denomination::Fifty => 50,
            Denomination::Hundred => 100,
            Denomination::TwoHundred => 200,
            Denomination::FiveHundred => 500,
            Denomination::Thousand => 1000,
            Denomination::TwoThousand => 2000,
            Denomination::FiveThousand => 5000,
        }
    }

    /// Position in [`Self::ALL`], used to key dense per-denomination arrays.
    pub fn ordinal(self) -> usize {
        self as usize
    }
}

impl TryFrom<u32> for Denomination {
    type Error = UnknownDenomination;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Denomination::ALL
            .into_iter()
            .find(|d| d.value() == value)
            .ok_or(UnknownDenomination(value))
    }
}

impl From<Denomination> for u32 {
    fn from(d: Denomination) -> u32 {
        d.value()
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A face value outside the supported set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown denomination {0}")]
pub struct UnknownDenomination(pub u32);
