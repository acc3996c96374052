//! Core human capital: age, education, both languages, Canadian experience.

use super::domain::{ApplicantProfile, ScoringScheme};
use super::tables;
use crate::calculators::breakdown::{labels, BreakdownEntry, CategoryBreakdown};
use crate::calculators::language::ClbProfile;

pub(super) fn score(
    profile: &ApplicantProfile,
    scheme: ScoringScheme,
    primary_clb: &ClbProfile,
    secondary_clb: Option<&ClbProfile>,
) -> CategoryBreakdown {
    let age = tables::age_points(profile.age, scheme);
    let education = tables::education_points(profile.education, scheme);
    let first_language = sum_skills(primary_clb, |clb| {
        tables::first_language_points(clb, scheme)
    });
    let second_language = secondary_clb
        .map(|clb| sum_skills(clb, tables::second_language_points))
        .unwrap_or(0);
    let canadian_experience =
        tables::canadian_experience_points(profile.canadian_experience, scheme);

    let entries = vec![
        BreakdownEntry::new(labels::AGE, age),
        BreakdownEntry::new(labels::EDUCATION, education),
        BreakdownEntry::new(labels::FIRST_LANGUAGE, first_language),
        BreakdownEntry::new(labels::SECOND_LANGUAGE, second_language),
        BreakdownEntry::new(labels::CANADIAN_EXPERIENCE, canadian_experience),
    ];
    let subtotal = age + education + first_language + second_language + canadian_experience;

    CategoryBreakdown::new(labels::CORE_HUMAN_CAPITAL, entries, subtotal)
}

/// Apply a per-skill lookup to all four skills and sum the results.
pub(super) fn sum_skills(clb: &ClbProfile, per_skill: impl Fn(u8) -> i32) -> i32 {
    per_skill(clb.listening) + per_skill(clb.reading) + per_skill(clb.writing) + per_skill(clb.speaking)
}
