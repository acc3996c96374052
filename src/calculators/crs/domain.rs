use serde::{Deserialize, Serialize};

use crate::calculators::language::{LanguageScores, OfficialLanguage, TestType};

/// Education tiers recognised by Express Entry, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    LessThanSecondary,
    Secondary,
    OneYearPostSecondary,
    TwoYearPostSecondary,
    BachelorsDegree,
    TwoOrMoreCredentials,
    MastersDegree,
    DoctoralDegree,
}

/// Canadian study credential tiers for the additional-points bonus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanadianEducation {
    #[default]
    None,
    OneOrTwoYears,
    ThreePlusYears,
}

/// Canadian skilled work experience in whole years.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanadianExperience {
    #[default]
    None,
    OneYear,
    TwoYears,
    ThreeYears,
    FourYears,
    FivePlusYears,
}

/// Foreign skilled work experience bands used by transferable skills.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverseasExperience {
    #[default]
    None,
    OneYear,
    TwoYears,
    ThreePlusYears,
}

/// Marital situation driving scheme selection.
///
/// Only `MarriedWithSpouse` (spouse accompanying) activates spouse-factor
/// scoring; a non-accompanying spouse scores identically to a single
/// applicant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FamilyStatus {
    Single,
    MarriedSpouseNotAccompanying,
    MarriedWithSpouse,
}

/// One language test sitting: which official language, which test, and the
/// raw sub-scores in the test's native scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LanguageTest {
    pub language: OfficialLanguage,
    pub test: TestType,
    pub scores: LanguageScores,
}

/// Accompanying-spouse attributes; every field degrades to zero contribution
/// when absent rather than erroring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SpouseProfile {
    pub age: Option<u8>,
    pub education: Option<EducationLevel>,
    pub language: Option<LanguageTest>,
    pub canadian_experience: Option<CanadianExperience>,
}

/// Full CRS input record. Immutable; every calculation re-derives from
/// scratch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub age: u8,
    pub education: EducationLevel,
    #[serde(default)]
    pub canadian_education: CanadianEducation,
    pub primary_language: LanguageTest,
    #[serde(default)]
    pub secondary_language: Option<LanguageTest>,
    #[serde(default)]
    pub canadian_experience: CanadianExperience,
    #[serde(default)]
    pub overseas_experience: OverseasExperience,
    #[serde(default)]
    pub has_sibling_in_canada: bool,
    #[serde(default)]
    pub has_provincial_nomination: bool,
    pub family_status: FamilyStatus,
    #[serde(default)]
    pub spouse: Option<SpouseProfile>,
}

/// Which of the two published point grids applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringScheme {
    Single,
    WithSpouse,
}

impl FamilyStatus {
    pub fn scheme(self) -> ScoringScheme {
        match self {
            FamilyStatus::Single | FamilyStatus::MarriedSpouseNotAccompanying => {
                ScoringScheme::Single
            }
            FamilyStatus::MarriedWithSpouse => ScoringScheme::WithSpouse,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_accompanying_spouse_selects_single_scheme() {
        assert_eq!(FamilyStatus::Single.scheme(), ScoringScheme::Single);
        assert_eq!(
            FamilyStatus::MarriedSpouseNotAccompanying.scheme(),
            ScoringScheme::Single
        );
        assert_eq!(
            FamilyStatus::MarriedWithSpouse.scheme(),
            ScoringScheme::WithSpouse
        );
    }
}
