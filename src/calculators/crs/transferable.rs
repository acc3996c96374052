//! Transferable skills: two independently capped pairing groups.
//!
//! Within each group only the strongest pairing counts (max, not sum); each
//! group caps at 50 and the category contribution is the sum of the two group
//! maxima, so 100 is the hard ceiling no matter how many conditions hold.

use super::domain::{ApplicantProfile, CanadianExperience, EducationLevel, OverseasExperience};
use crate::calculators::breakdown::{labels, BreakdownEntry, CategoryBreakdown};

const GROUP_CAP: i32 = 50;

pub(super) fn score(profile: &ApplicantProfile, minimum_clb: u8) -> CategoryBreakdown {
    let strong_language = minimum_clb >= 9;
    let working_language = (7..=8).contains(&minimum_clb);
    let post_secondary = profile.education >= EducationLevel::BachelorsDegree;
    let canadian_two_years = profile.canadian_experience >= CanadianExperience::TwoYears;
    let canadian_one_year = profile.canadian_experience >= CanadianExperience::OneYear;

    let education_with_language = if post_secondary && strong_language {
        GROUP_CAP
    } else {
        0
    };
    let education_with_experience = if post_secondary && canadian_two_years {
        GROUP_CAP
    } else {
        0
    };
    let education_group = education_with_language.max(education_with_experience);

    let overseas_with_language = match profile.overseas_experience {
        OverseasExperience::None => 0,
        OverseasExperience::OneYear | OverseasExperience::TwoYears => {
            if strong_language {
                25
            } else if working_language {
                13
            } else {
                0
            }
        }
        OverseasExperience::ThreePlusYears => {
            if strong_language {
                50
            } else if working_language {
                25
            } else {
                0
            }
        }
    };
    let overseas_with_experience = match profile.overseas_experience {
        OverseasExperience::None => 0,
        OverseasExperience::OneYear | OverseasExperience::TwoYears => {
            if canadian_two_years {
                25
            } else if canadian_one_year {
                13
            } else {
                0
            }
        }
        OverseasExperience::ThreePlusYears => {
            if canadian_two_years {
                50
            } else if canadian_one_year {
                25
            } else {
                0
            }
        }
    };
    let overseas_group = overseas_with_language.max(overseas_with_experience);

    let entries = vec![
        BreakdownEntry::new(labels::EDUCATION_WITH_LANGUAGE, education_with_language),
        BreakdownEntry::new(
            labels::EDUCATION_WITH_CANADIAN_EXPERIENCE,
            education_with_experience,
        ),
        BreakdownEntry::new(labels::OVERSEAS_WITH_LANGUAGE, overseas_with_language),
        BreakdownEntry::new(
            labels::OVERSEAS_WITH_CANADIAN_EXPERIENCE,
            overseas_with_experience,
        ),
    ];
    let subtotal = education_group.min(GROUP_CAP) + overseas_group.min(GROUP_CAP);

    CategoryBreakdown::new(labels::TRANSFERABLE_SKILLS, entries, subtotal)
}

#[cfg(test)]
mod tests {
    use super::super::test_support::single_profile;
    use super::*;

    #[test]
    fn education_pairings_take_the_max_not_the_sum() {
        let mut profile = single_profile();
        profile.education = EducationLevel::MastersDegree;
        profile.canadian_experience = CanadianExperience::ThreeYears;

        // Both education pairings qualify (CLB 9 and 2+ Canadian years), yet
        // the group contributes a single 50.
        let breakdown = score(&profile, 9);

        assert_eq!(breakdown.points(labels::EDUCATION_WITH_LANGUAGE), Some(50));
        assert_eq!(
            breakdown.points(labels::EDUCATION_WITH_CANADIAN_EXPERIENCE),
            Some(50)
        );
        assert_eq!(breakdown.subtotal, 50);
    }

    #[test]
    fn overseas_matrix_follows_the_published_bands() {
        let mut profile = single_profile();
        profile.education = EducationLevel::Secondary;
        profile.overseas_experience = OverseasExperience::OneYear;
        assert_eq!(score(&profile, 9).subtotal, 25);
        assert_eq!(score(&profile, 8).subtotal, 13);
        assert_eq!(score(&profile, 6).subtotal, 0);

        profile.overseas_experience = OverseasExperience::ThreePlusYears;
        assert_eq!(score(&profile, 9).subtotal, 50);
        assert_eq!(score(&profile, 7).subtotal, 25);
    }

    #[test]
    fn overseas_group_pairs_with_canadian_experience_too() {
        let mut profile = single_profile();
        profile.education = EducationLevel::Secondary;
        profile.overseas_experience = OverseasExperience::TwoYears;
        profile.canadian_experience = CanadianExperience::OneYear;
        assert_eq!(score(&profile, 0).subtotal, 13);

        profile.canadian_experience = CanadianExperience::TwoYears;
        assert_eq!(score(&profile, 0).subtotal, 25);

        profile.overseas_experience = OverseasExperience::ThreePlusYears;
        assert_eq!(score(&profile, 0).subtotal, 50);
    }

    #[test]
    fn category_never_exceeds_one_hundred() {
        let mut profile = single_profile();
        profile.education = EducationLevel::DoctoralDegree;
        profile.canadian_experience = CanadianExperience::FivePlusYears;
        profile.overseas_experience = OverseasExperience::ThreePlusYears;

        let breakdown = score(&profile, 10);

        assert_eq!(breakdown.subtotal, 100);
    }
}
