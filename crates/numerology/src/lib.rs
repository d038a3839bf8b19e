//! Deterministic numerology calculations.
//!
//! Everything in this crate is pure: numbers are derived from a birth date and
//! a name through digit reduction, and interpretations are looked up from
//! fixed tables keyed by the closed [`NumerologyNumber`] enumeration.
//!
//! - [`reduce`]: the shared reduction primitive (Master Numbers 11, 22, 33 are kept)
//! - [`life_path`] / [`destiny_number`]: the two core numbers
//! - [`generate_report`]: the report handed back to callers
//! - [`generate_profile`]: the extended profile (soul urge, personality, birthday)

mod date;
mod engine;
mod error;
pub mod interpretations;
mod letters;
mod number;
mod report;

pub use date::BirthDate;
pub use engine::{
    LifePathBreakdown, birthday_number, destiny_number, life_path, life_path_breakdown,
    life_path_for, personality_number, soul_urge_number,
};
pub use error::NumerologyError;
pub use interpretations::Archetype;
pub use letters::letter_value;
pub use number::{MASTER_NUMBERS, NumerologyNumber, digit_sum, reduce};
pub use report::{
    NumerologyProfile, NumerologyReport, generate_profile, generate_report, profile_for,
    report_for,
};
