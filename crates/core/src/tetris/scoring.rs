//! Scoring module - line clear points, levels and gravity speed

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_STEP_MS, LINE_SCORES, POINTS_PER_LEVEL,
};

/// Points for clearing `lines` rows at once.
///
/// `level` is 1-based and taken before the clear is applied.
pub fn calculate_line_score(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines >= LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[lines].saturating_mul(level)
}

/// `floor(score / 1000) + 1`
pub fn level_for_score(score: u32) -> u32 {
    score / POINTS_PER_LEVEL + 1
}

/// Gravity interval: 1000 ms at level 1, 50 ms faster per level, floored at 50 ms.
pub fn drop_interval_ms(level: u32) -> u32 {
    BASE_DROP_MS
        .saturating_sub(level.saturating_sub(1).saturating_mul(DROP_STEP_MS))
        .max(DROP_INTERVAL_MIN_MS)
}
