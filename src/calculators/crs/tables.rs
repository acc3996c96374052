//! CRS point grids, kept as data so they can be audited line by line against
//! the published IRCC tables and updated when a ministerial instruction
//! changes them.
//!
//! Every lookup is total: ages outside 17..=45 and CLB levels at or below 4
//! fall to the zero row instead of erroring.

use super::domain::{CanadianExperience, EducationLevel, ScoringScheme};

/// `(age, single, with_spouse)` rows; ages 20 through 29 share the plateau.
const AGE_POINTS: &[(u8, i32, i32)] = &[
    (18, 99, 90),
    (19, 105, 95),
    (20, 110, 100),
    (21, 110, 100),
    (22, 110, 100),
    (23, 110, 100),
    (24, 110, 100),
    (25, 110, 100),
    (26, 110, 100),
    (27, 110, 100),
    (28, 110, 100),
    (29, 110, 100),
    (30, 105, 95),
    (31, 99, 90),
    (32, 94, 85),
    (33, 88, 80),
    (34, 83, 75),
    (35, 77, 70),
    (36, 72, 65),
    (37, 66, 60),
    (38, 61, 55),
    (39, 55, 50),
    (40, 50, 45),
    (41, 39, 35),
    (42, 28, 25),
    (43, 17, 15),
    (44, 6, 5),
];

pub(super) fn age_points(age: u8, scheme: ScoringScheme) -> i32 {
    AGE_POINTS
        .iter()
        .find(|(row_age, _, _)| *row_age == age)
        .map(|(_, single, with_spouse)| match scheme {
            ScoringScheme::Single => *single,
            ScoringScheme::WithSpouse => *with_spouse,
        })
        .unwrap_or(0)
}

pub(super) fn education_points(level: EducationLevel, scheme: ScoringScheme) -> i32 {
    let (single, with_spouse) = match level {
        EducationLevel::LessThanSecondary => (0, 0),
        EducationLevel::Secondary => (30, 28),
        EducationLevel::OneYearPostSecondary => (90, 84),
        EducationLevel::TwoYearPostSecondary => (98, 91),
        EducationLevel::BachelorsDegree => (120, 112),
        EducationLevel::TwoOrMoreCredentials => (128, 119),
        EducationLevel::MastersDegree => (135, 126),
        EducationLevel::DoctoralDegree => (150, 140),
    };
    match scheme {
        ScoringScheme::Single => single,
        ScoringScheme::WithSpouse => with_spouse,
    }
}

/// First-language points per skill; the four skills are summed, not averaged.
pub(super) fn first_language_points(clb: u8, scheme: ScoringScheme) -> i32 {
    let (single, with_spouse) = match clb {
        10.. => (34, 32),
        9 => (31, 29),
        8 => (23, 22),
        7 => (17, 16),
        6 => (9, 8),
        5 => (6, 6),
        // CLB 4 and below carry no first-language credit.
        _ => (0, 0),
    };
    match scheme {
        ScoringScheme::Single => single,
        ScoringScheme::WithSpouse => with_spouse,
    }
}

/// Second-language points per skill; same grid for both schemes.
pub(super) fn second_language_points(clb: u8) -> i32 {
    match clb {
        9.. => 6,
        7..=8 => 3,
        5..=6 => 1,
        _ => 0,
    }
}

pub(super) fn canadian_experience_points(
    experience: CanadianExperience,
    scheme: ScoringScheme,
) -> i32 {
    let (single, with_spouse) = match experience {
        CanadianExperience::None => (0, 0),
        CanadianExperience::OneYear => (40, 35),
        CanadianExperience::TwoYears => (53, 46),
        CanadianExperience::ThreeYears => (64, 56),
        CanadianExperience::FourYears => (72, 63),
        CanadianExperience::FivePlusYears => (80, 70),
    };
    match scheme {
        ScoringScheme::Single => single,
        ScoringScheme::WithSpouse => with_spouse,
    }
}

pub(super) fn spouse_education_points(level: EducationLevel) -> i32 {
    match level {
        EducationLevel::LessThanSecondary => 0,
        EducationLevel::Secondary => 2,
        EducationLevel::OneYearPostSecondary => 6,
        EducationLevel::TwoYearPostSecondary => 7,
        EducationLevel::BachelorsDegree => 8,
        EducationLevel::TwoOrMoreCredentials => 9,
        EducationLevel::MastersDegree | EducationLevel::DoctoralDegree => 10,
    }
}

pub(super) fn spouse_language_points(clb: u8) -> i32 {
    match clb {
        9.. => 5,
        7..=8 => 3,
        5..=6 => 1,
        _ => 0,
    }
}

pub(super) fn spouse_experience_points(experience: CanadianExperience) -> i32 {
    match experience {
        CanadianExperience::None => 0,
        CanadianExperience::OneYear => 5,
        CanadianExperience::TwoYears => 7,
        CanadianExperience::ThreeYears => 8,
        CanadianExperience::FourYears => 9,
        CanadianExperience::FivePlusYears => 10,
    }
}
