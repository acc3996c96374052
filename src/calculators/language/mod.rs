//! Canadian Language Benchmark conversion shared by every scoring engine.

mod tables;

use serde::{Deserialize, Serialize};

/// Language tests accepted by the calculators.
///
/// The test type selects which equivalency grid applies; all four sub-scores
/// of one profile must be converted through the same grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestType {
    Ielts,
    Celpip,
    Pte,
    Tef,
    Tcf,
}

/// Official languages recognised by the federal programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfficialLanguage {
    English,
    French,
}

/// Raw sub-scores in the native scale of one test sitting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LanguageScores {
    pub listening: f64,
    pub reading: f64,
    pub writing: f64,
    pub speaking: f64,
}

impl LanguageScores {
    /// True when the form was left untouched; the caller uses this to show a
    /// "please fill the form" message instead of a misleading zero score.
    pub fn is_empty(&self) -> bool {
        self.listening == 0.0 && self.reading == 0.0 && self.writing == 0.0 && self.speaking == 0.0
    }
}

/// Four independent CLB levels, each 0 or within 4..=10.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClbProfile {
    pub listening: u8,
    pub reading: u8,
    pub writing: u8,
    pub speaking: u8,
}

impl ClbProfile {
    pub fn new(listening: u8, reading: u8, writing: u8, speaking: u8) -> Self {
        Self {
            listening,
            reading,
            writing,
            speaking,
        }
    }

    /// Uniform profile, convenient for tests and threshold checks.
    pub fn uniform(level: u8) -> Self {
        Self::new(level, level, level, level)
    }

    /// Weakest of the four skills; the level most program thresholds use.
    pub fn minimum(&self) -> u8 {
        self.listening
            .min(self.reading)
            .min(self.writing)
            .min(self.speaking)
    }
}

/// Convert one test sitting to CLB levels, skill by skill.
///
/// Total over any numeric input: scores below the CLB 4 threshold (including
/// zero and negatives) report level 0 rather than erroring.
pub fn convert_to_clb(scores: &LanguageScores, test: TestType) -> ClbProfile {
    let (listening, reading, writing, speaking) = match test {
        TestType::Ielts => (
            tables::IELTS_LISTENING,
            tables::IELTS_READING,
            tables::IELTS_WRITING,
            tables::IELTS_SPEAKING,
        ),
        TestType::Celpip => (
            tables::CELPIP_ALL_SKILLS,
            tables::CELPIP_ALL_SKILLS,
            tables::CELPIP_ALL_SKILLS,
            tables::CELPIP_ALL_SKILLS,
        ),
        TestType::Pte => (
            tables::PTE_LISTENING,
            tables::PTE_READING,
            tables::PTE_WRITING,
            tables::PTE_SPEAKING,
        ),
        TestType::Tef => (
            tables::TEF_LISTENING,
            tables::TEF_READING,
            tables::TEF_WRITING,
            tables::TEF_SPEAKING,
        ),
        TestType::Tcf => (
            tables::TCF_LISTENING,
            tables::TCF_READING,
            tables::TCF_WRITING,
            tables::TCF_SPEAKING,
        ),
    };

    ClbProfile::new(
        tables::clb_for(listening, scores.listening),
        tables::clb_for(reading, scores.reading),
        tables::clb_for(writing, scores.writing),
        tables::clb_for(speaking, scores.speaking),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ielts_seven_across_the_board() {
        let scores = LanguageScores {
            listening: 7.0,
            reading: 7.0,
            writing: 7.0,
            speaking: 7.0,
        };

        let clb = convert_to_clb(&scores, TestType::Ielts);

        assert_eq!(clb, ClbProfile::new(7, 9, 9, 9));
        assert_eq!(clb.minimum(), 7);
    }

    #[test]
    fn celpip_levels_map_directly() {
        let scores = LanguageScores {
            listening: 9.0,
            reading: 8.0,
            writing: 7.0,
            speaking: 12.0,
        };

        let clb = convert_to_clb(&scores, TestType::Celpip);

        assert_eq!(clb, ClbProfile::new(9, 8, 7, 10));
    }

    #[test]
    fn empty_profile_reports_zero_everywhere() {
        let scores = LanguageScores {
            listening: 0.0,
            reading: 0.0,
            writing: 0.0,
            speaking: 0.0,
        };

        assert!(scores.is_empty());
        for test in [
            TestType::Ielts,
            TestType::Celpip,
            TestType::Pte,
            TestType::Tef,
            TestType::Tcf,
        ] {
            assert_eq!(convert_to_clb(&scores, test), ClbProfile::default());
        }
    }

    #[test]
    fn conversion_is_monotone_in_each_skill() {
        for test in [
            TestType::Ielts,
            TestType::Celpip,
            TestType::Pte,
            TestType::Tef,
            TestType::Tcf,
        ] {
            let mut previous = 0;
            let mut raw = 0.0;
            while raw <= 700.0 {
                let clb = convert_to_clb(
                    &LanguageScores {
                        listening: raw,
                        reading: 0.0,
                        writing: 0.0,
                        speaking: 0.0,
                    },
                    test,
                )
                .listening;
                assert!(clb >= previous, "CLB dropped at raw {raw} for {test:?}");
                previous = clb;
                raw += 0.5;
            }
        }
    }
}
