//! Additional points: Canadian study, sibling, nomination, French bonuses.

use super::domain::{ApplicantProfile, CanadianEducation};
use crate::calculators::breakdown::{labels, BreakdownEntry, CategoryBreakdown};
use crate::calculators::language::{ClbProfile, OfficialLanguage};

const SIBLING_BONUS: i32 = 15;
const PROVINCIAL_NOMINATION_BONUS: i32 = 600;
const FRENCH_SKILL_BONUS: i32 = 50;

pub(super) fn score(
    profile: &ApplicantProfile,
    primary_clb: &ClbProfile,
    secondary_clb: Option<&ClbProfile>,
) -> CategoryBreakdown {
    let canadian_study = match profile.canadian_education {
        CanadianEducation::None => 0,
        CanadianEducation::OneOrTwoYears => 15,
        CanadianEducation::ThreePlusYears => 30,
    };
    let sibling = if profile.has_sibling_in_canada {
        SIBLING_BONUS
    } else {
        0
    };
    let nomination = if profile.has_provincial_nomination {
        PROVINCIAL_NOMINATION_BONUS
    } else {
        0
    };
    let bilingual = bilingual_bonus(profile, primary_clb, secondary_clb);
    let french_skill = if profile.primary_language.language == OfficialLanguage::French
        && primary_clb.minimum() >= 7
    {
        FRENCH_SKILL_BONUS
    } else {
        0
    };

    let entries = vec![
        BreakdownEntry::new(labels::CANADIAN_STUDY, canadian_study),
        BreakdownEntry::new(labels::SIBLING_IN_CANADA, sibling),
        BreakdownEntry::new(labels::PROVINCIAL_NOMINATION, nomination),
        BreakdownEntry::new(labels::BILINGUAL, bilingual),
        BreakdownEntry::new(labels::FRENCH_SKILL, french_skill),
    ];
    let subtotal = canadian_study + sibling + nomination + bilingual + french_skill;

    CategoryBreakdown::new(labels::ADDITIONAL_POINTS, entries, subtotal)
}

/// Bilingual bonus requires one English and one French test on file. The
/// non-primary language must reach CLB 7 in every skill; the primary's
/// minimum level then selects the 50- or 25-point row.
fn bilingual_bonus(
    profile: &ApplicantProfile,
    primary_clb: &ClbProfile,
    secondary_clb: Option<&ClbProfile>,
) -> i32 {
    let Some(secondary) = profile.secondary_language else {
        return 0;
    };
    if secondary.language == profile.primary_language.language {
        return 0;
    }
    let Some(secondary_clb) = secondary_clb else {
        return 0;
    };
    if secondary_clb.minimum() < 7 {
        return 0;
    }
    if primary_clb.minimum() >= 5 {
        50
    } else {
        25
    }
}

#[cfg(test)]
mod tests {
    use super::super::domain::LanguageTest;
    use super::super::test_support::single_profile;
    use super::*;
    use crate::calculators::language::{LanguageScores, TestType};

    fn french_test(scores: f64) -> LanguageTest {
        LanguageTest {
            language: OfficialLanguage::French,
            test: TestType::Tef,
            scores: LanguageScores {
                listening: scores,
                reading: scores,
                writing: scores,
                speaking: scores,
            },
        }
    }

    #[test]
    fn nomination_contributes_exactly_six_hundred() {
        let mut profile = single_profile();
        profile.has_provincial_nomination = true;

        let breakdown = score(&profile, &ClbProfile::uniform(7), None);

        assert_eq!(breakdown.points(labels::PROVINCIAL_NOMINATION), Some(600));
    }

    #[test]
    fn bilingual_bonus_needs_both_official_languages() {
        let mut profile = single_profile();
        // Secondary test in the same language as the primary earns nothing.
        profile.secondary_language = Some(LanguageTest {
            language: OfficialLanguage::English,
            test: TestType::Celpip,
            scores: LanguageScores {
                listening: 10.0,
                reading: 10.0,
                writing: 10.0,
                speaking: 10.0,
            },
        });

        let breakdown = score(
            &profile,
            &ClbProfile::uniform(9),
            Some(&ClbProfile::uniform(10)),
        );

        assert_eq!(breakdown.points(labels::BILINGUAL), Some(0));
    }

    #[test]
    fn bilingual_bonus_scales_with_primary_minimum() {
        let mut profile = single_profile();
        profile.secondary_language = Some(french_test(500.0));

        let strong = score(
            &profile,
            &ClbProfile::uniform(6),
            Some(&ClbProfile::uniform(8)),
        );
        assert_eq!(strong.points(labels::BILINGUAL), Some(50));

        let weak = score(
            &profile,
            &ClbProfile::new(4, 4, 4, 4),
            Some(&ClbProfile::uniform(8)),
        );
        assert_eq!(weak.points(labels::BILINGUAL), Some(25));
    }

    #[test]
    fn french_primary_with_clb7_earns_skill_bonus() {
        let mut profile = single_profile();
        profile.primary_language = french_test(500.0);

        let breakdown = score(&profile, &ClbProfile::uniform(8), None);
        assert_eq!(breakdown.points(labels::FRENCH_SKILL), Some(50));

        let below = score(&profile, &ClbProfile::new(8, 8, 8, 6), None);
        assert_eq!(below.points(labels::FRENCH_SKILL), Some(0));
    }

    #[test]
    fn french_and_bilingual_bonuses_fire_independently() {
        let mut profile = single_profile();
        profile.primary_language = french_test(520.0);
        profile.secondary_language = Some(LanguageTest {
            language: OfficialLanguage::English,
            test: TestType::Ielts,
            scores: LanguageScores {
                listening: 8.0,
                reading: 7.5,
                writing: 7.0,
                speaking: 7.0,
            },
        });

        let breakdown = score(
            &profile,
            &ClbProfile::uniform(9),
            Some(&ClbProfile::uniform(8)),
        );

        assert_eq!(breakdown.points(labels::BILINGUAL), Some(50));
        assert_eq!(breakdown.points(labels::FRENCH_SKILL), Some(50));
    }
}
