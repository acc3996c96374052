//! Federal Skilled Worker factor tables.

use super::domain::{Adaptability, FswWorkExperience};
use crate::calculators::crs::EducationLevel;

pub(super) const ARRANGED_EMPLOYMENT_POINTS: i32 = 10;
const ADAPTABILITY_CAP: i32 = 10;
const CANADIAN_WORK_ADAPTABILITY: i32 = 10;
const ADAPTABILITY_CONDITION: i32 = 5;

/// Primary language is bucketed on the minimum CLB, four skills together.
pub(super) fn primary_language_points(minimum_clb: u8) -> i32 {
    match minimum_clb {
        9.. => 24,
        8 => 20,
        7 => 16,
        _ => 0,
    }
}

pub(super) fn secondary_language_points(minimum_clb: u8) -> i32 {
    if minimum_clb >= 5 {
        4
    } else {
        0
    }
}

pub(super) fn education_points(level: EducationLevel) -> i32 {
    match level {
        EducationLevel::LessThanSecondary => 0,
        EducationLevel::Secondary => 5,
        EducationLevel::OneYearPostSecondary => 15,
        EducationLevel::TwoYearPostSecondary => 19,
        EducationLevel::BachelorsDegree => 21,
        EducationLevel::TwoOrMoreCredentials => 22,
        EducationLevel::MastersDegree => 23,
        EducationLevel::DoctoralDegree => 25,
    }
}

pub(super) fn work_experience_points(experience: FswWorkExperience) -> i32 {
    match experience {
        FswWorkExperience::None => 0,
        FswWorkExperience::OneYear => 9,
        FswWorkExperience::TwoToThreeYears => 11,
        FswWorkExperience::FourToFiveYears => 13,
        FswWorkExperience::SixPlusYears => 15,
    }
}

/// Flat 12 through age 35, then one point per year until 0 at 47. Minors
/// score nothing.
pub(super) fn age_points(age: u8) -> i32 {
    match age {
        18..=35 => 12,
        36..=46 => 12 - (i32::from(age) - 35),
        _ => 0,
    }
}

/// Canadian work alone is worth the full cap and supersedes the other
/// conditions; otherwise qualifying conditions add five each, capped at ten.
pub(super) fn adaptability_points(adaptability: &Adaptability) -> i32 {
    if adaptability.applicant_worked_in_canada {
        return CANADIAN_WORK_ADAPTABILITY;
    }

    let conditions = [
        adaptability.spouse_language_clb4_or_higher,
        adaptability.applicant_studied_in_canada,
        adaptability.spouse_studied_in_canada,
        adaptability.arranged_employment_with_lmia,
        adaptability.relative_in_canada,
    ];
    let sum = conditions.iter().filter(|met| **met).count() as i32 * ADAPTABILITY_CONDITION;
    sum.min(ADAPTABILITY_CAP)
}
