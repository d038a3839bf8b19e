//! The closed set of numerology numbers and the shared reduction primitive.

use serde::{Serialize, Serializer};
use std::fmt;

/// Numbers exempt from digit reduction.
pub const MASTER_NUMBERS: [u64; 3] = [11, 22, 33];

/// A reduced numerology number: a single digit 1-9 or a Master Number.
///
/// Values of this type only come out of [`reduce`], so every lookup keyed by
/// it is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NumerologyNumber {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Eleven,
    TwentyTwo,
    ThirtyThree,
}

impl NumerologyNumber {
    /// Every number in table order.
    pub const ALL: [NumerologyNumber; 12] = [
        NumerologyNumber::One,
        NumerologyNumber::Two,
        NumerologyNumber::Three,
        NumerologyNumber::Four,
        NumerologyNumber::Five,
        NumerologyNumber::Six,
        NumerologyNumber::Seven,
        NumerologyNumber::Eight,
        NumerologyNumber::Nine,
        NumerologyNumber::Eleven,
        NumerologyNumber::TwentyTwo,
        NumerologyNumber::ThirtyThree,
    ];

    pub fn value(self) -> u32 {
        match self {
            NumerologyNumber::One => 1,
            NumerologyNumber::Two => 2,
            NumerologyNumber::Three => 3,
            NumerologyNumber::Four => 4,
            NumerologyNumber::Five => 5,
            NumerologyNumber::Six => 6,
            NumerologyNumber::Seven => 7,
            NumerologyNumber::Eight => 8,
            NumerologyNumber::Nine => 9,
            NumerologyNumber::Eleven => 11,
            NumerologyNumber::TwentyTwo => 22,
            NumerologyNumber::ThirtyThree => 33,
        }
    }

    pub fn is_master(self) -> bool {
        matches!(
            self,
            NumerologyNumber::Eleven | NumerologyNumber::TwentyTwo | NumerologyNumber::ThirtyThree
        )
    }

    /// Position of this number in [`NumerologyNumber::ALL`], used to index the
    /// interpretation tables.
    pub(crate) fn ordinal(self) -> usize {
        match self {
            NumerologyNumber::One => 0,
            NumerologyNumber::Two => 1,
            NumerologyNumber::Three => 2,
            NumerologyNumber::Four => 3,
            NumerologyNumber::Five => 4,
            NumerologyNumber::Six => 5,
            NumerologyNumber::Seven => 6,
            NumerologyNumber::Eight => 7,
            NumerologyNumber::Nine => 8,
            NumerologyNumber::Eleven => 9,
            NumerologyNumber::TwentyTwo => 10,
            NumerologyNumber::ThirtyThree => 11,
        }
    }

    fn from_fixed_point(n: u64) -> Option<Self> {
        Some(match n {
            1 => NumerologyNumber::One,
            2 => NumerologyNumber::Two,
            3 => NumerologyNumber::Three,
            4 => NumerologyNumber::Four,
            5 => NumerologyNumber::Five,
            6 => NumerologyNumber::Six,
            7 => NumerologyNumber::Seven,
            8 => NumerologyNumber::Eight,
            9 => NumerologyNumber::Nine,
            11 => NumerologyNumber::Eleven,
            22 => NumerologyNumber::TwentyTwo,
            33 => NumerologyNumber::ThirtyThree,
            _ => return None,
        })
    }
}

impl fmt::Display for NumerologyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl From<NumerologyNumber> for u32 {
    fn from(n: NumerologyNumber) -> Self {
        n.value()
    }
}

impl Serialize for NumerologyNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.value())
    }
}

/// Sum of the decimal digits of `n`.
pub fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Reduces `n` by repeated digit summing until it is a single digit or a
/// Master Number.
///
/// `reduce(0)` is defined as [`NumerologyNumber::Nine`]: zero has no digit
/// root of its own and nine is the digit root of every positive multiple of
/// nine, so the result stays inside the closed set and `reduce` remains
/// idempotent.
pub fn reduce(n: u64) -> NumerologyNumber {
    let mut current = n;
    while current > 9 && !MASTER_NUMBERS.contains(&current) {
        current = digit_sum(current);
    }
    match NumerologyNumber::from_fixed_point(current) {
        Some(number) => number,
        None => {
            debug_assert_eq!(current, 0, "digit reduction stopped at {current}");
            NumerologyNumber::Nine
        }
    }
}
