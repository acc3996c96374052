//! BC Provincial Nominee Program skilled-worker calculator.

pub mod domain;
mod tables;

pub use domain::{BcEducationLevel, BcPnpInput, BcRegion, BcWorkExperience};

use serde::{Deserialize, Serialize};

use crate::calculators::breakdown::{labels, FlatBreakdown};
use crate::config::ScoringPolicy;

const CANADIAN_EXPERIENCE_BONUS: i32 = 10;
const CURRENTLY_WORKING_BONUS: i32 = 10;
const BC_EDUCATION_BONUS: i32 = 8;
const CANADA_EDUCATION_BONUS: i32 = 6;
const DESIGNATED_OCCUPATION_BONUS: i32 = 5;
const FRENCH_BONUS: i32 = 10;
const REGION_STUDY_WORK_BONUS: i32 = 10;

/// Stateless BC PNP scorer.
pub struct BcPnpEngine {
    policy: ScoringPolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BcPnpResult {
    pub total_score: i32,
    pub breakdown: FlatBreakdown,
    pub message: String,
}

impl BcPnpEngine {
    pub fn new(policy: ScoringPolicy) -> Self {
        Self { policy }
    }

    /// Single-pass additive score over the published skilled-worker grid.
    pub fn score(&self, input: &BcPnpInput) -> BcPnpResult {
        let mut breakdown = FlatBreakdown::default();

        breakdown.push(
            labels::BCPNP_WORK_EXPERIENCE,
            tables::work_experience_points(input.work_experience),
        );
        breakdown.push(
            labels::BCPNP_CANADIAN_EXPERIENCE,
            flag(input.has_canadian_experience, CANADIAN_EXPERIENCE_BONUS),
        );
        breakdown.push(
            labels::BCPNP_CURRENTLY_WORKING,
            flag(input.is_currently_working_for_employer, CURRENTLY_WORKING_BONUS),
        );
        breakdown.push(
            labels::BCPNP_EDUCATION,
            tables::education_points(input.education),
        );
        // The BC and Canada-outside-BC study bonuses describe different
        // facts and stack when both are true.
        breakdown.push(
            labels::BCPNP_BC_EDUCATION,
            flag(input.educated_in_bc, BC_EDUCATION_BONUS),
        );
        breakdown.push(
            labels::BCPNP_CANADA_EDUCATION,
            flag(input.educated_in_canada_outside_bc, CANADA_EDUCATION_BONUS),
        );
        breakdown.push(
            labels::BCPNP_DESIGNATED_OCCUPATION,
            flag(input.has_designated_occupation, DESIGNATED_OCCUPATION_BONUS),
        );
        breakdown.push(
            labels::BCPNP_LANGUAGE,
            tables::language_points(input.language.minimum()),
        );
        breakdown.push(
            labels::BCPNP_FRENCH,
            flag(input.french_clb4_or_higher, FRENCH_BONUS),
        );
        breakdown.push(labels::BCPNP_WAGE, tables::wage_points(input.hourly_wage));
        breakdown.push(labels::BCPNP_REGION, tables::region_points(input.region));
        // At most one regional bonus no matter how many conditions qualify.
        breakdown.push(
            labels::BCPNP_REGION_STUDY_WORK,
            flag(
                input.has_regional_work_experience || input.has_regional_education,
                REGION_STUDY_WORK_BONUS,
            ),
        );

        let total_score = breakdown.total();
        let message = self.assessment(total_score);

        BcPnpResult {
            total_score,
            breakdown,
            message,
        }
    }

    fn assessment(&self, total_score: i32) -> String {
        if total_score >= self.policy.bcpnp_competitive_threshold {
            format!("您的BC PNP分数{total_score}在近期抽选中具有竞争力。")
        } else {
            format!(
                "您的BC PNP分数{total_score}低于近期抽选分数线（{}），建议提升语言成绩或薪资水平。",
                self.policy.bcpnp_competitive_threshold
            )
        }
    }
}

fn flag(condition: bool, bonus: i32) -> i32 {
    if condition {
        bonus
    } else {
        0
    }
}
