use serde::{Deserialize, Serialize};

use crate::calculators::crs::EducationLevel;
use crate::calculators::language::ClbProfile;

/// Skilled work experience bands for the 67-point grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FswWorkExperience {
    #[default]
    None,
    OneYear,
    TwoToThreeYears,
    FourToFiveYears,
    SixPlusYears,
}

/// Arranged-employment evidence; any single true flag earns the flat credit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrangedEmployment {
    #[serde(default)]
    pub working_in_canada_on_lmia_permit: bool,
    #[serde(default)]
    pub working_on_lmia_exempt_permit_with_offer: bool,
    #[serde(default)]
    pub lmia_approved_job_offer: bool,
    #[serde(default)]
    pub job_offer_from_current_employer: bool,
}

impl ArrangedEmployment {
    pub fn any(&self) -> bool {
        self.working_in_canada_on_lmia_permit
            || self.working_on_lmia_exempt_permit_with_offer
            || self.lmia_approved_job_offer
            || self.job_offer_from_current_employer
    }
}

/// Adaptability conditions; applicant Canadian work alone is worth the full
/// ten and supersedes the rest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adaptability {
    #[serde(default)]
    pub spouse_language_clb4_or_higher: bool,
    #[serde(default)]
    pub applicant_studied_in_canada: bool,
    #[serde(default)]
    pub spouse_studied_in_canada: bool,
    #[serde(default)]
    pub applicant_worked_in_canada: bool,
    #[serde(default)]
    pub arranged_employment_with_lmia: bool,
    #[serde(default)]
    pub relative_in_canada: bool,
}

/// Input record for the Federal Skilled Worker eligibility calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FswInput {
    pub age: u8,
    pub education: EducationLevel,
    #[serde(default)]
    pub work_experience: FswWorkExperience,
    #[serde(default)]
    pub primary_language: ClbProfile,
    #[serde(default)]
    pub secondary_language: Option<ClbProfile>,
    #[serde(default)]
    pub arranged_employment: ArrangedEmployment,
    #[serde(default)]
    pub adaptability: Adaptability,
}
