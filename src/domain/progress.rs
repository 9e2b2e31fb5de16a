#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use crate::domain::habit::{LEVELS, Level};

/// The progress bar never renders more than this many segments.
pub const SEGMENT_BUDGET: u32 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressStatus {
    pub level: Level,
    pub filled: u32,
    pub total: u32,
    pub seg_filled: u32,
    pub seg_total: u32,
}

/// First level whose threshold exceeds the streak, or the top level once
/// every threshold is met.
#[must_use]
pub fn resolve_level(streak: u32) -> Level {
    LEVELS
        .iter()
        .copied()
        .find(|level| level.days > streak)
        .unwrap_or(LEVELS[LEVELS.len() - 1])
}

#[must_use]
pub fn at_top_level(streak: u32) -> bool {
    streak >= LEVELS[LEVELS.len() - 1].days
}

#[must_use]
pub fn progress_status(streak: u32) -> ProgressStatus {
    let level = resolve_level(streak);
    let total = level.days;
    let filled = streak.min(total);

    let (seg_filled, seg_total) = if total <= SEGMENT_BUDGET {
        (filled, total)
    } else {
        let scaled = (f64::from(filled) / f64::from(total) * f64::from(SEGMENT_BUDGET)).round();
        ((scaled as u32).min(SEGMENT_BUDGET), SEGMENT_BUDGET)
    };

    ProgressStatus {
        level,
        filled,
        total,
        seg_filled,
        seg_total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_streak_targets_the_first_level() {
        let status = progress_status(0);
        assert_eq!(status.level.days, 7);
        assert_eq!((status.filled, status.total), (0, 7));
        // Short milestone: one segment per day.
        assert_eq!((status.seg_filled, status.seg_total), (0, 7));
    }

    #[test]
    fn long_milestones_quantize_to_fourteen_segments() {
        let status = progress_status(7);
        assert_eq!(status.level.days, 30);
        assert_eq!(status.seg_total, SEGMENT_BUDGET);
        // round(7 / 30 * 14) = 3
        assert_eq!(status.seg_filled, 3);
    }

    #[test]
    fn streak_past_every_threshold_pins_the_top_level() {
        for streak in [90, 91, 365] {
            let status = progress_status(streak);
            assert_eq!(status.level.name, "Мастер");
            assert_eq!((status.filled, status.total), (90, 90));
            assert_eq!((status.seg_filled, status.seg_total), (14, 14));
        }
    }

    #[test]
    fn boundaries_land_on_the_next_level() {
        assert_eq!(resolve_level(6).days, 7);
        assert_eq!(resolve_level(7).days, 30);
        assert_eq!(resolve_level(29).days, 30);
        assert_eq!(resolve_level(30).days, 60);
        assert_eq!(resolve_level(89).days, 90);
        assert!(at_top_level(90));
        assert!(!at_top_level(89));
    }
}
