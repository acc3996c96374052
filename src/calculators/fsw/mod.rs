//! Federal Skilled Worker 67-point eligibility calculator.

pub mod domain;
mod tables;

pub use domain::{Adaptability, ArrangedEmployment, FswInput, FswWorkExperience};

use serde::{Deserialize, Serialize};

use crate::calculators::breakdown::{labels, FlatBreakdown};
use crate::config::ScoringPolicy;

/// Stateless FSW scorer.
pub struct FswEngine {
    policy: ScoringPolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FswResult {
    pub total_score: i32,
    /// Threshold check against the configured pass mark; the number itself is
    /// the contract, this flag is a convenience for callers.
    pub passes: bool,
    pub breakdown: FlatBreakdown,
    pub message: String,
}

impl FswEngine {
    pub fn new(policy: ScoringPolicy) -> Self {
        Self { policy }
    }

    pub fn score(&self, input: &FswInput) -> FswResult {
        let mut breakdown = FlatBreakdown::default();

        breakdown.push(
            labels::FSW_FIRST_LANGUAGE,
            tables::primary_language_points(input.primary_language.minimum()),
        );
        breakdown.push(
            labels::FSW_SECOND_LANGUAGE,
            input
                .secondary_language
                .map(|clb| tables::secondary_language_points(clb.minimum()))
                .unwrap_or(0),
        );
        breakdown.push(labels::FSW_EDUCATION, tables::education_points(input.education));
        breakdown.push(
            labels::FSW_WORK_EXPERIENCE,
            tables::work_experience_points(input.work_experience),
        );
        breakdown.push(labels::FSW_AGE, tables::age_points(input.age));
        breakdown.push(
            labels::FSW_ARRANGED_EMPLOYMENT,
            if input.arranged_employment.any() {
                tables::ARRANGED_EMPLOYMENT_POINTS
            } else {
                0
            },
        );
        breakdown.push(
            labels::FSW_ADAPTABILITY,
            tables::adaptability_points(&input.adaptability),
        );

        let total_score = breakdown.total();
        let passes = total_score >= self.policy.fsw_pass_mark;
        let message = self.assessment(total_score, passes);

        FswResult {
            total_score,
            passes,
            breakdown,
            message,
        }
    }

    fn assessment(&self, total_score: i32, passes: bool) -> String {
        if passes {
            format!(
                "您的联邦技术移民评分{total_score}已达到{}分合格线。",
                self.policy.fsw_pass_mark
            )
        } else {
            format!(
                "您的联邦技术移民评分{total_score}未达到{}分合格线，建议改善语言、学历或工作经验。",
                self.policy.fsw_pass_mark
            )
        }
    }
}
