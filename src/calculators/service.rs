//! Facade composing the four calculators behind one policy-aware surface.

use super::bcpnp::{BcPnpEngine, BcPnpInput, BcPnpResult};
use super::crs::{ApplicantProfile, CrsEngine, CrsResult};
use super::fsw::{FswEngine, FswInput, FswResult};
use super::language::{convert_to_clb, ClbProfile, LanguageScores, TestType};
use crate::config::ScoringPolicy;

/// Caller-side validation errors. The engines themselves are total; only the
/// boundary distinguishes an untouched form from a legitimately low score.
#[derive(Debug, thiserror::Error)]
pub enum CalculatorError {
    #[error("language scores are empty; fill in the four sub-scores before scoring")]
    EmptyLanguageProfile,
}

/// One engine per program plus the shared CLB converter, all built from the
/// same scoring policy. Stateless and safe to share across request handlers.
pub struct CalculatorService {
    crs: CrsEngine,
    bcpnp: BcPnpEngine,
    fsw: FswEngine,
}

impl CalculatorService {
    pub fn new(policy: ScoringPolicy) -> Self {
        Self {
            crs: CrsEngine::new(policy),
            bcpnp: BcPnpEngine::new(policy),
            fsw: FswEngine::new(policy),
        }
    }

    /// Convert one test sitting to CLB levels. No validation: an empty
    /// sitting simply reports level 0 everywhere.
    pub fn convert(&self, scores: &LanguageScores, test: TestType) -> ClbProfile {
        convert_to_clb(scores, test)
    }

    /// Score a CRS profile, rejecting untouched forms up front so the UI can
    /// prompt instead of displaying a misleading zero.
    pub fn score_crs(&self, profile: &ApplicantProfile) -> Result<CrsResult, CalculatorError> {
        if profile.primary_language.scores.is_empty() {
            return Err(CalculatorError::EmptyLanguageProfile);
        }
        Ok(self.crs.score(profile))
    }

    pub fn score_bcpnp(&self, input: &BcPnpInput) -> BcPnpResult {
        self.bcpnp.score(input)
    }

    pub fn score_fsw(&self, input: &FswInput) -> FswResult {
        self.fsw.score(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::crs::{
        CanadianEducation, CanadianExperience, EducationLevel, FamilyStatus, LanguageTest,
        OverseasExperience,
    };
    use crate::calculators::language::OfficialLanguage;

    fn service() -> CalculatorService {
        CalculatorService::new(ScoringPolicy::default())
    }

    #[test]
    fn empty_crs_form_is_rejected_before_scoring() {
        let profile = ApplicantProfile {
            age: 30,
            education: EducationLevel::BachelorsDegree,
            canadian_education: CanadianEducation::None,
            primary_language: LanguageTest {
                language: OfficialLanguage::English,
                test: TestType::Ielts,
                scores: LanguageScores {
                    listening: 0.0,
                    reading: 0.0,
                    writing: 0.0,
                    speaking: 0.0,
                },
            },
            secondary_language: None,
            canadian_experience: CanadianExperience::None,
            overseas_experience: OverseasExperience::None,
            has_sibling_in_canada: false,
            has_provincial_nomination: false,
            family_status: FamilyStatus::Single,
            spouse: None,
        };

        let error = service().score_crs(&profile).expect_err("must reject");
        assert!(matches!(error, CalculatorError::EmptyLanguageProfile));
    }

    #[test]
    fn conversion_passes_straight_through() {
        let clb = service().convert(
            &LanguageScores {
                listening: 8.0,
                reading: 7.0,
                writing: 7.0,
                speaking: 7.0,
            },
            TestType::Ielts,
        );

        assert_eq!(clb, ClbProfile::new(9, 9, 9, 9));
    }
}
