use serde::{Deserialize, Serialize};

use crate::calculators::language::ClbProfile;

/// Directly related work experience bands for the skilled-worker stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BcWorkExperience {
    #[default]
    None,
    LessThanOneYear,
    OneToTwoYears,
    TwoToThreeYears,
    ThreeToFourYears,
    FourToFiveYears,
    FivePlusYears,
}

/// Credential tiers recognised by the BC PNP points grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BcEducationLevel {
    #[default]
    Secondary,
    Certificate,
    Diploma,
    BachelorsDegree,
    PostGraduateDiploma,
    MastersDegree,
    DoctoralDegree,
}

/// Area of employment tiers; tier 1 is Metro Vancouver, tier 3 the most
/// remote regions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BcRegion {
    #[default]
    Tier1,
    Tier2,
    Tier3,
}

/// Input record for the BC PNP skilled-worker calculator.
///
/// Language arrives as CLB levels (converted upstream via the CLB endpoint);
/// the French credit is a caller-supplied boolean rather than a second
/// conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BcPnpInput {
    #[serde(default)]
    pub work_experience: BcWorkExperience,
    #[serde(default)]
    pub has_canadian_experience: bool,
    #[serde(default)]
    pub is_currently_working_for_employer: bool,
    #[serde(default)]
    pub education: BcEducationLevel,
    #[serde(default)]
    pub educated_in_bc: bool,
    #[serde(default)]
    pub educated_in_canada_outside_bc: bool,
    #[serde(default)]
    pub has_designated_occupation: bool,
    #[serde(default)]
    pub language: ClbProfile,
    #[serde(default)]
    pub french_clb4_or_higher: bool,
    #[serde(default)]
    pub hourly_wage: f64,
    #[serde(default)]
    pub region: BcRegion,
    #[serde(default)]
    pub has_regional_work_experience: bool,
    #[serde(default)]
    pub has_regional_education: bool,
}
