use crate::date::BirthDate;
use crate::engine::{self, LifePathBreakdown};
use crate::error::NumerologyError;
use crate::interpretations::{self, Archetype};
use crate::number::NumerologyNumber;
use serde::Serialize;

/// The interpretive profile returned to callers for a single request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumerologyReport {
    pub life_path_number: NumerologyNumber,
    pub destiny_number: NumerologyNumber,
    pub personality: String,
    pub career: String,
    pub relationships: String,
    pub future_guidance: String,
}

/// Every number the engine knows about for one person, with its texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumerologyProfile {
    pub name: String,
    pub birth_date: BirthDate,
    pub life_path: LifePathBreakdown,
    pub destiny_number: NumerologyNumber,
    pub soul_urge_number: NumerologyNumber,
    pub personality_number: NumerologyNumber,
    pub birthday_number: NumerologyNumber,
    pub archetype: &'static Archetype,
    pub destiny_purpose: &'static str,
    pub soul_urge: &'static str,
    pub outer_personality: &'static str,
}

fn validated_name(name: &str) -> Result<&str, NumerologyError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(NumerologyError::EmptyName);
    }
    Ok(trimmed)
}

/// Builds the report for `name` born on `dob` (`DD-MM-YYYY`).
///
/// `gender` and `language` do not influence any number; they are only
/// recorded for the presentation layer.
pub fn generate_report(
    name: &str,
    gender: &str,
    dob: &str,
    language: &str,
) -> Result<NumerologyReport, NumerologyError> {
    let date = BirthDate::parse(dob)?;
    let report = report_for(name, &date)?;
    log::debug!(
        "Generated numerology report (life path {}, destiny {}, gender '{}', language '{}')",
        report.life_path_number,
        report.destiny_number,
        gender,
        language
    );
    Ok(report)
}

/// Same as [`generate_report`] for an already parsed date.
pub fn report_for(name: &str, date: &BirthDate) -> Result<NumerologyReport, NumerologyError> {
    let name = validated_name(name)?;
    let life_path = engine::life_path_for(date);
    let destiny = engine::destiny_number(name);

    let personality = format!(
        "{name}, {} Your numerological profile reveals a unique combination of strengths that, \
         when properly channeled, can lead to remarkable personal and professional fulfillment.",
        interpretations::personality_trait(life_path)
    );

    Ok(NumerologyReport {
        life_path_number: life_path,
        destiny_number: destiny,
        personality,
        career: interpretations::career_insight(destiny).to_string(),
        relationships: interpretations::relationship_insight(life_path).to_string(),
        future_guidance: interpretations::future_guidance(life_path, destiny),
    })
}

pub fn generate_profile(name: &str, dob: &str) -> Result<NumerologyProfile, NumerologyError> {
    let date = BirthDate::parse(dob)?;
    profile_for(name, &date)
}

pub fn profile_for(name: &str, date: &BirthDate) -> Result<NumerologyProfile, NumerologyError> {
    let name = validated_name(name)?;
    let life_path = engine::life_path_breakdown(date.day(), date.month(), date.year());
    let destiny = engine::destiny_number(name);
    let soul_urge = engine::soul_urge_number(name);
    let personality = engine::personality_number(name);

    Ok(NumerologyProfile {
        name: name.to_string(),
        birth_date: *date,
        life_path,
        destiny_number: destiny,
        soul_urge_number: soul_urge,
        personality_number: personality,
        birthday_number: engine::birthday_number(date.day()),
        archetype: interpretations::archetype(life_path.total),
        destiny_purpose: interpretations::destiny_purpose(destiny),
        soul_urge: interpretations::soul_urge_insight(soul_urge),
        outer_personality: interpretations::outer_personality_insight(personality),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_report_john() {
        let report = generate_report("John", "Male", "05-08-1990", "English").unwrap();
        assert_eq!(report.life_path_number, NumerologyNumber::Five);
        assert_eq!(report.destiny_number, NumerologyNumber::Two);
        assert!(report.personality.starts_with("John, Freedom and adventure drive your spirit."));
        assert!(report.personality.ends_with("professional fulfillment."));
        assert_eq!(
            report.career,
            interpretations::career_insight(NumerologyNumber::Two)
        );
        assert_eq!(
            report.relationships,
            interpretations::relationship_insight(NumerologyNumber::Five)
        );
        assert!(report.future_guidance.contains("Life Path 5 and Destiny 2"));
    }

    #[test]
    fn test_report_ignores_gender_and_language() {
        let a = generate_report("Asha Rao", "Female", "12-12-1988", "Hindi").unwrap();
        let b = generate_report("Asha Rao", "Other", "12-12-1988", "English").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_report_rejects_bad_date() {
        let err = generate_report("John", "Male", "1990-08-05x", "English").unwrap_err();
        assert!(matches!(err, NumerologyError::InvalidDateFormat { .. }));
    }

    #[test]
    fn test_report_rejects_blank_name() {
        let err = generate_report("   ", "Male", "05-08-1990", "English").unwrap_err();
        assert_eq!(err, NumerologyError::EmptyName);
    }

    #[test]
    fn test_report_for_devanagari_name() {
        let report = generate_report("राम", "Male", "05-08-1990", "Hindi").unwrap();
        assert_eq!(report.destiny_number, NumerologyNumber::Nine);
        assert!(report.personality.starts_with("राम, "));
    }

    #[test]
    fn test_report_serializes_camel_case_numbers() {
        let report = generate_report("John", "Male", "05-08-1990", "English").unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["lifePathNumber"], 5);
        assert_eq!(json["destinyNumber"], 2);
        assert!(json["futureGuidance"].is_string());
    }

    #[test]
    fn test_profile_collects_every_number() {
        let profile = generate_profile("John", "29-09-2000").unwrap();
        assert_eq!(profile.life_path.day, NumerologyNumber::Eleven);
        assert_eq!(profile.life_path.total, NumerologyNumber::TwentyTwo);
        assert_eq!(profile.birthday_number, NumerologyNumber::Eleven);
        assert_eq!(profile.destiny_number, NumerologyNumber::Two);
        assert_eq!(profile.soul_urge_number, NumerologyNumber::Six);
        assert_eq!(profile.personality_number, NumerologyNumber::Five);
        assert_eq!(profile.archetype.title, "The Master Builder");

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["lifePath"]["total"], 22);
        assert_eq!(json["archetype"]["luckyDay"], "Saturday");
        assert_eq!(json["birthDate"]["day"], 29);
    }
}
