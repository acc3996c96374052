//! Comprehensive Ranking System calculator for Express Entry.

mod additional;
pub mod domain;
mod human_capital;
mod spouse;
mod tables;
mod transferable;

pub use domain::{
    ApplicantProfile, CanadianEducation, CanadianExperience, EducationLevel, FamilyStatus,
    LanguageTest, OverseasExperience, ScoringScheme, SpouseProfile,
};

use serde::{Deserialize, Serialize};

use crate::calculators::breakdown::ScoreBreakdown;
use crate::calculators::language::convert_to_clb;
use crate::config::ScoringPolicy;

/// Stateless CRS scorer holding only the policy thresholds.
pub struct CrsEngine {
    policy: ScoringPolicy,
}

/// Composite CRS score with the full published grid and a qualitative
/// assessment keyed off the configured invitation threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrsResult {
    pub total_score: i32,
    pub scheme: ScoringScheme,
    pub breakdown: ScoreBreakdown,
    pub message: String,
}

impl CrsEngine {
    pub fn new(policy: ScoringPolicy) -> Self {
        Self { policy }
    }

    /// Score a profile under the scheme selected by its family status.
    ///
    /// Pure and total: repeated calls on the same profile yield identical
    /// results, and no input produces an error or panic.
    pub fn score(&self, profile: &ApplicantProfile) -> CrsResult {
        let scheme = profile.family_status.scheme();

        let primary_clb = convert_to_clb(
            &profile.primary_language.scores,
            profile.primary_language.test,
        );
        let secondary_clb = profile
            .secondary_language
            .map(|test| convert_to_clb(&test.scores, test.test));

        let mut categories = vec![human_capital::score(
            profile,
            scheme,
            &primary_clb,
            secondary_clb.as_ref(),
        )];

        if scheme == ScoringScheme::WithSpouse {
            categories.push(spouse::score(profile.spouse.as_ref()));
        }

        categories.push(transferable::score(profile, primary_clb.minimum()));
        categories.push(additional::score(
            profile,
            &primary_clb,
            secondary_clb.as_ref(),
        ));

        let breakdown = ScoreBreakdown { categories };
        let total_score = breakdown.total();
        let message = self.assessment(total_score);

        CrsResult {
            total_score,
            scheme,
            breakdown,
            message,
        }
    }

    fn assessment(&self, total_score: i32) -> String {
        if total_score >= self.policy.crs_invitation_threshold {
            format!(
                "您的CRS分数{total_score}已达到近期邀请分数线，获邀几率较大。"
            )
        } else {
            format!(
                "您的CRS分数{total_score}距离近期邀请分数线（{}）尚有差距，建议提升语言成绩或积累加拿大工作经验。",
                self.policy.crs_invitation_threshold
            )
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::single_profile;
    use super::*;
    use crate::calculators::breakdown::labels;

    fn engine() -> CrsEngine {
        CrsEngine::new(ScoringPolicy::default())
    }

    #[test]
    fn single_scheme_omits_the_spouse_category() {
        let result = engine().score(&single_profile());

        assert_eq!(result.scheme, ScoringScheme::Single);
        assert!(result.breakdown.category(labels::SPOUSE_FACTOR).is_none());
        assert!(result
            .breakdown
            .category(labels::CORE_HUMAN_CAPITAL)
            .is_some());
    }

    #[test]
    fn married_without_accompanying_spouse_matches_single() {
        let single = engine().score(&single_profile());

        let mut not_accompanying = single_profile();
        not_accompanying.family_status = FamilyStatus::MarriedSpouseNotAccompanying;
        // Spouse data on file must be ignored under scheme A.
        not_accompanying.spouse = Some(SpouseProfile {
            age: Some(29),
            education: Some(EducationLevel::DoctoralDegree),
            language: None,
            canadian_experience: Some(CanadianExperience::FivePlusYears),
        });
        let scored = engine().score(&not_accompanying);

        assert_eq!(scored.total_score, single.total_score);
        assert_eq!(scored.breakdown, single.breakdown);
    }

    #[test]
    fn accompanying_spouse_switches_grids_and_adds_the_category() {
        let mut profile = single_profile();
        profile.family_status = FamilyStatus::MarriedWithSpouse;
        profile.spouse = Some(SpouseProfile {
            age: Some(29),
            education: Some(EducationLevel::BachelorsDegree),
            language: None,
            canadian_experience: None,
        });

        let result = engine().score(&profile);

        assert_eq!(result.scheme, ScoringScheme::WithSpouse);
        let core = result
            .breakdown
            .category(labels::CORE_HUMAN_CAPITAL)
            .expect("core category");
        // Age 30 drops from 105 to 95 on the with-spouse grid.
        assert_eq!(core.points(labels::AGE), Some(95));
        let spouse = result
            .breakdown
            .category(labels::SPOUSE_FACTOR)
            .expect("spouse category");
        assert_eq!(spouse.points(labels::SPOUSE_EDUCATION), Some(8));
    }

    #[test]
    fn scoring_is_deterministic() {
        let mut profile = single_profile();
        profile.has_sibling_in_canada = true;
        profile.canadian_experience = CanadianExperience::TwoYears;

        let first = engine().score(&profile);
        let second = engine().score(&profile);

        assert_eq!(first, second);
    }

    #[test]
    fn total_is_never_negative_even_for_hollow_profiles() {
        let mut profile = single_profile();
        profile.age = 0;
        profile.education = EducationLevel::LessThanSecondary;
        profile.primary_language.scores = crate::calculators::language::LanguageScores {
            listening: -3.0,
            reading: 0.0,
            writing: 0.0,
            speaking: 0.0,
        };

        let result = engine().score(&profile);

        assert_eq!(result.total_score, 0);
    }

    #[test]
    fn message_flips_at_the_invitation_threshold() {
        let mut profile = single_profile();
        profile.has_provincial_nomination = true;
        let invited = engine().score(&profile);
        assert!(invited.total_score >= 470);
        assert!(invited.message.contains("获邀几率较大"));

        let shy = engine().score(&single_profile());
        assert!(shy.total_score < 470);
        assert!(shy.message.contains("尚有差距"));
    }
}
