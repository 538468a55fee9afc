//! Scoring module - drop points, row-clear points, level and gravity speed
//!
//! Level is fractional: every cleared row adds a tenth. Only the whole part
//! matters for the score multiplier and the fall interval, so the engine keeps
//! an integer line counter and derives both from it.

use crate::types::{HARD_DROP_POINTS, LINES_PER_LEVEL, SOFT_DROP_POINTS};

/// Points for clearing `rows` rows at whole level `level`.
///
/// `table` is indexed by the row count; clears larger than the table (only
/// possible on a hand-built board) score like the last entry.
pub fn line_clear_points(table: &[u32; 5], rows: usize, level: u32) -> u32 {
    if rows == 0 {
        return 0;
    }
    let base = table[rows.min(table.len() - 1)];
    base.saturating_mul(level + 1)
}

/// Calculate drop score
/// soft drop: +1 per row
/// hard drop: +2 per row
pub fn drop_points(rows: u32, is_hard_drop: bool) -> u32 {
    if is_hard_drop {
        rows.saturating_mul(HARD_DROP_POINTS)
    } else {
        rows.saturating_mul(SOFT_DROP_POINTS)
    }
}

/// Whole level reached after `total_lines` cleared rows.
pub fn whole_level(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL
}

/// Fractional level after `total_lines` cleared rows.
pub fn fractional_level(total_lines: u32) -> f64 {
    total_lines as f64 / LINES_PER_LEVEL as f64
}

/// Steps between gravity rows: `max(1, base - level)`.
pub fn fall_interval(base: u32, level: u32) -> u32 {
    base.saturating_sub(level).max(1)
}
