//! Official CLB equivalency thresholds per test and per skill.
//!
//! Each table row is `(minimum raw score, CLB level)` in descending order;
//! conversion picks the first row the raw score reaches. Anything below the
//! CLB 4 threshold collapses to 0 ("below CLB 4"). The four skills of one
//! test use independently calibrated thresholds; none of them share a grid.

pub(super) type ClbRow = (f64, u8);

pub(super) const IELTS_LISTENING: &[ClbRow] = &[
    (8.5, 10),
    (8.0, 9),
    (7.5, 8),
    (6.0, 7),
    (5.5, 6),
    (5.0, 5),
    (4.5, 4),
];

pub(super) const IELTS_READING: &[ClbRow] = &[
    (8.0, 10),
    (7.0, 9),
    (6.5, 8),
    (6.0, 7),
    (5.0, 6),
    (4.0, 5),
    (3.5, 4),
];

pub(super) const IELTS_WRITING: &[ClbRow] = &[
    (7.5, 10),
    (7.0, 9),
    (6.5, 8),
    (6.0, 7),
    (5.5, 6),
    (5.0, 5),
    (4.0, 4),
];

pub(super) const IELTS_SPEAKING: &[ClbRow] = &[
    (7.5, 10),
    (7.0, 9),
    (6.5, 8),
    (6.0, 7),
    (5.5, 6),
    (5.0, 5),
    (4.0, 4),
];

// CELPIP-General levels line up with CLB one-for-one; levels 11 and 12 still
// report as CLB 10.
pub(super) const CELPIP_ALL_SKILLS: &[ClbRow] = &[
    (10.0, 10),
    (9.0, 9),
    (8.0, 8),
    (7.0, 7),
    (6.0, 6),
    (5.0, 5),
    (4.0, 4),
];

pub(super) const PTE_LISTENING: &[ClbRow] = &[
    (89.0, 10),
    (82.0, 9),
    (71.0, 8),
    (60.0, 7),
    (50.0, 6),
    (39.0, 5),
    (28.0, 4),
];

pub(super) const PTE_READING: &[ClbRow] = &[
    (88.0, 10),
    (78.0, 9),
    (69.0, 8),
    (60.0, 7),
    (51.0, 6),
    (42.0, 5),
    (33.0, 4),
];

pub(super) const PTE_WRITING: &[ClbRow] = &[
    (90.0, 10),
    (88.0, 9),
    (79.0, 8),
    (69.0, 7),
    (60.0, 6),
    (51.0, 5),
    (41.0, 4),
];

pub(super) const PTE_SPEAKING: &[ClbRow] = &[
    (89.0, 10),
    (84.0, 9),
    (76.0, 8),
    (68.0, 7),
    (59.0, 6),
    (51.0, 5),
    (42.0, 4),
];

pub(super) const TEF_LISTENING: &[ClbRow] = &[
    (546.0, 10),
    (503.0, 9),
    (462.0, 8),
    (434.0, 7),
    (393.0, 6),
    (352.0, 5),
    (306.0, 4),
];

pub(super) const TEF_READING: &[ClbRow] = &[
    (546.0, 10),
    (503.0, 9),
    (462.0, 8),
    (434.0, 7),
    (393.0, 6),
    (352.0, 5),
    (306.0, 4),
];

pub(super) const TEF_WRITING: &[ClbRow] = &[
    (558.0, 10),
    (512.0, 9),
    (472.0, 8),
    (428.0, 7),
    (379.0, 6),
    (330.0, 5),
    (268.0, 4),
];

pub(super) const TEF_SPEAKING: &[ClbRow] = &[
    (556.0, 10),
    (518.0, 9),
    (494.0, 8),
    (456.0, 7),
    (422.0, 6),
    (387.0, 5),
    (328.0, 4),
];

pub(super) const TCF_LISTENING: &[ClbRow] = &[
    (549.0, 10),
    (523.0, 9),
    (503.0, 8),
    (458.0, 7),
    (398.0, 6),
    (369.0, 5),
    (331.0, 4),
];

pub(super) const TCF_READING: &[ClbRow] = &[
    (549.0, 10),
    (524.0, 9),
    (499.0, 8),
    (453.0, 7),
    (406.0, 6),
    (375.0, 5),
    (342.0, 4),
];

pub(super) const TCF_WRITING: &[ClbRow] = &[
    (16.0, 10),
    (14.0, 9),
    (12.0, 8),
    (10.0, 7),
    (7.0, 6),
    (6.0, 5),
    (4.0, 4),
];

pub(super) const TCF_SPEAKING: &[ClbRow] = &[
    (16.0, 10),
    (14.0, 9),
    (12.0, 8),
    (10.0, 7),
    (7.0, 6),
    (6.0, 5),
    (4.0, 4),
];

/// First row the raw score reaches, or 0 below the CLB 4 floor.
pub(super) fn clb_for(rows: &[ClbRow], raw: f64) -> u8 {
    rows.iter()
        .find(|(minimum, _)| raw >= *minimum)
        .map(|(_, clb)| *clb)
        .unwrap_or(0)
}
