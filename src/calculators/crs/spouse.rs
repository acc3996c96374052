//! Spouse factor, active only under the with-spouse scheme.

use super::human_capital::sum_skills;
use super::domain::SpouseProfile;
use super::tables;
use crate::calculators::breakdown::{labels, BreakdownEntry, CategoryBreakdown};
use crate::calculators::language::convert_to_clb;

/// Score the accompanying spouse. Absent sub-fields contribute zero; the
/// category never errors even when the whole spouse record is missing.
pub(super) fn score(spouse: Option<&SpouseProfile>) -> CategoryBreakdown {
    let education = spouse
        .and_then(|spouse| spouse.education)
        .map(tables::spouse_education_points)
        .unwrap_or(0);

    let language = spouse
        .and_then(|spouse| spouse.language)
        .map(|test| {
            let clb = convert_to_clb(&test.scores, test.test);
            sum_skills(&clb, tables::spouse_language_points)
        })
        .unwrap_or(0);

    let experience = spouse
        .and_then(|spouse| spouse.canadian_experience)
        .map(tables::spouse_experience_points)
        .unwrap_or(0);

    let entries = vec![
        BreakdownEntry::new(labels::SPOUSE_EDUCATION, education),
        BreakdownEntry::new(labels::SPOUSE_LANGUAGE, language),
        BreakdownEntry::new(labels::SPOUSE_CANADIAN_EXPERIENCE, experience),
    ];
    let subtotal = education + language + experience;

    CategoryBreakdown::new(labels::SPOUSE_FACTOR, entries, subtotal)
}
