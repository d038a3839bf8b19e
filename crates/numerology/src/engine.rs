//! Number calculations derived from a birth date or a name.

use crate::date::BirthDate;
use crate::letters;
use crate::number::{NumerologyNumber, reduce};
use serde::Serialize;

/// Intermediate values of the Life Path calculation.
///
/// Each component is reduced on its own first so that a Master Number
/// produced by the day, month or year survives into the final sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LifePathBreakdown {
    pub day: NumerologyNumber,
    pub month: NumerologyNumber,
    pub year: NumerologyNumber,
    pub total: NumerologyNumber,
}

pub fn life_path_breakdown(day: u32, month: u32, year: u32) -> LifePathBreakdown {
    let day = reduce(u64::from(day));
    let month = reduce(u64::from(month));
    let year = reduce(u64::from(year));
    let sum = u64::from(day.value()) + u64::from(month.value()) + u64::from(year.value());
    LifePathBreakdown {
        day,
        month,
        year,
        total: reduce(sum),
    }
}

pub fn life_path(day: u32, month: u32, year: u32) -> NumerologyNumber {
    life_path_breakdown(day, month, year).total
}

pub fn life_path_for(date: &BirthDate) -> NumerologyNumber {
    life_path(date.day(), date.month(), date.year())
}

/// Destiny (Expression) number: all Latin letters of the name.
///
/// A name without any Latin letter sums to 0 and therefore yields
/// [`NumerologyNumber::Nine`].
pub fn destiny_number(name: &str) -> NumerologyNumber {
    reduce(letters::name_total(name))
}

/// Soul Urge (Heart's Desire) number: vowels only.
pub fn soul_urge_number(name: &str) -> NumerologyNumber {
    reduce(letters::vowel_total(name))
}

/// Personality (outer) number: consonants only.
pub fn personality_number(name: &str) -> NumerologyNumber {
    reduce(letters::consonant_total(name))
}

pub fn birthday_number(day: u32) -> NumerologyNumber {
    reduce(u64::from(day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_life_path_literal_case() {
        // 5 -> 5, 8 -> 8, 1990 -> 19 -> 10 -> 1; 5 + 8 + 1 = 14 -> 5
        let breakdown = life_path_breakdown(5, 8, 1990);
        assert_eq!(breakdown.day, NumerologyNumber::Five);
        assert_eq!(breakdown.month, NumerologyNumber::Eight);
        assert_eq!(breakdown.year, NumerologyNumber::One);
        assert_eq!(breakdown.total, NumerologyNumber::Five);
        assert_eq!(life_path(5, 8, 1990), NumerologyNumber::Five);
    }

    #[test]
    fn test_master_eleven_survives_intermediate_step() {
        // Day 29 reduces to 11 and is kept: 11 + 9 + 2 = 22.
        // Collapsing 29 to 2 first would give 2 + 9 + 2 = 13 -> 4.
        let breakdown = life_path_breakdown(29, 9, 2000);
        assert_eq!(breakdown.day, NumerologyNumber::Eleven);
        assert_eq!(breakdown.total, NumerologyNumber::TwentyTwo);
        assert_ne!(breakdown.total, NumerologyNumber::Four);
    }

    #[test]
    fn test_master_twenty_two_survives_intermediate_step() {
        // 1993 -> 22 is kept: 9 + 2 + 22 = 33.
        // Collapsing 22 to 4 would give 9 + 2 + 4 = 15 -> 6.
        let breakdown = life_path_breakdown(9, 2, 1993);
        assert_eq!(breakdown.year, NumerologyNumber::TwentyTwo);
        assert_eq!(breakdown.total, NumerologyNumber::ThirtyThree);
    }

    #[test]
    fn test_master_thirty_three_survives_intermediate_step() {
        // 6999 -> 33 is kept: 1 + 11 + 33 = 45 -> 9.
        let breakdown = life_path_breakdown(1, 11, 6999);
        assert_eq!(breakdown.month, NumerologyNumber::Eleven);
        assert_eq!(breakdown.year, NumerologyNumber::ThirtyThree);
        assert_eq!(breakdown.total, NumerologyNumber::Nine);
    }

    #[test]
    fn test_master_months() {
        assert_eq!(life_path_breakdown(1, 11, 2000).month, NumerologyNumber::Eleven);
        // 29 -> 11, 11 -> 11, 2009 -> 11; 11 + 11 + 11 = 33
        assert_eq!(life_path(29, 11, 2009), NumerologyNumber::ThirtyThree);
    }

    #[test]
    fn test_destiny_john() {
        // J=1, o=6, h=8, n=5 -> 20 -> 2
        assert_eq!(destiny_number("John"), NumerologyNumber::Two);
        assert_eq!(destiny_number("JOHN"), NumerologyNumber::Two);
        assert_eq!(destiny_number("  john  "), NumerologyNumber::Two);
    }

    #[test]
    fn test_destiny_without_latin_letters() {
        assert_eq!(destiny_number("राम"), NumerologyNumber::Nine);
        assert_eq!(destiny_number("... --- !!!"), NumerologyNumber::Nine);
        assert_eq!(destiny_number(""), NumerologyNumber::Nine);
    }

    #[test]
    fn test_destiny_mixed_script_counts_latin_only() {
        assert_eq!(destiny_number("John राम"), destiny_number("John"));
    }

    #[test]
    fn test_soul_urge_and_personality() {
        // vowels: o = 6; consonants: j + h + n = 14 -> 5
        assert_eq!(soul_urge_number("John"), NumerologyNumber::Six);
        assert_eq!(personality_number("John"), NumerologyNumber::Five);
    }

    #[test]
    fn test_birthday_number() {
        assert_eq!(birthday_number(29), NumerologyNumber::Eleven);
        assert_eq!(birthday_number(31), NumerologyNumber::Four);
        assert_eq!(birthday_number(7), NumerologyNumber::Seven);
    }
}
