//! BC PNP skilled-worker point tables and the wage formula.

use super::domain::{BcEducationLevel, BcRegion, BcWorkExperience};

pub(super) fn work_experience_points(experience: BcWorkExperience) -> i32 {
    match experience {
        BcWorkExperience::None => 0,
        BcWorkExperience::LessThanOneYear => 1,
        BcWorkExperience::OneToTwoYears => 4,
        BcWorkExperience::TwoToThreeYears => 8,
        BcWorkExperience::ThreeToFourYears => 12,
        BcWorkExperience::FourToFiveYears => 16,
        BcWorkExperience::FivePlusYears => 20,
    }
}

pub(super) fn education_points(level: BcEducationLevel) -> i32 {
    match level {
        BcEducationLevel::Secondary => 0,
        BcEducationLevel::Certificate => 5,
        BcEducationLevel::Diploma => 11,
        BcEducationLevel::BachelorsDegree => 15,
        BcEducationLevel::PostGraduateDiploma => 17,
        BcEducationLevel::MastersDegree => 22,
        BcEducationLevel::DoctoralDegree => 27,
    }
}

/// Language is banded on the minimum CLB across the four skills — a single
/// lookup, not the CRS per-skill sum.
pub(super) fn language_points(minimum_clb: u8) -> i32 {
    match minimum_clb {
        10.. => 30,
        9 => 26,
        8 => 22,
        7 => 18,
        6 => 14,
        5 => 10,
        4 => 5,
        _ => 0,
    }
}

/// Hourly wage: flat 55 from $70/h, linear `wage - 15` between $16 and $70,
/// nothing below $16.
pub(super) fn wage_points(hourly_wage: f64) -> i32 {
    if hourly_wage >= 70.0 {
        55
    } else if hourly_wage >= 16.0 {
        (hourly_wage - 15.0).floor() as i32
    } else {
        0
    }
}

pub(super) fn region_points(region: BcRegion) -> i32 {
    match region {
        BcRegion::Tier1 => 0,
        BcRegion::Tier2 => 5,
        BcRegion::Tier3 => 15,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wage_formula_boundaries() {
        assert_eq!(wage_points(0.0), 0);
        assert_eq!(wage_points(15.0), 0);
        assert_eq!(wage_points(15.99), 0);
        assert_eq!(wage_points(16.0), 1);
        assert_eq!(wage_points(50.0), 35);
        assert_eq!(wage_points(69.0), 54);
        assert_eq!(wage_points(69.9), 54);
        assert_eq!(wage_points(70.0), 55);
        assert_eq!(wage_points(100.0), 55);
    }

    #[test]
    fn work_experience_tiers_are_monotone() {
        let tiers = [
            BcWorkExperience::None,
            BcWorkExperience::LessThanOneYear,
            BcWorkExperience::OneToTwoYears,
            BcWorkExperience::TwoToThreeYears,
            BcWorkExperience::ThreeToFourYears,
            BcWorkExperience::FourToFiveYears,
            BcWorkExperience::FivePlusYears,
        ];
        for window in tiers.windows(2) {
            assert!(work_experience_points(window[0]) < work_experience_points(window[1]));
        }
        assert_eq!(work_experience_points(BcWorkExperience::FivePlusYears), 20);
    }

    #[test]
    fn language_bands_use_the_minimum_clb() {
        assert_eq!(language_points(0), 0);
        assert_eq!(language_points(3), 0);
        assert_eq!(language_points(4), 5);
        assert_eq!(language_points(6), 14);
        assert_eq!(language_points(9), 26);
        assert_eq!(language_points(10), 30);
    }
}
