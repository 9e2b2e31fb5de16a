use chrono::{DateTime, Utc};

use crate::domain::time::{Clock, bucket_event};

/// Backend-owned user summary, read-only for one render cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSummary {
    pub name: String,
    /// Consecutive clean days ending today.
    pub current_streak: u32,
    /// Historical best. Expected >= current_streak but not enforced here.
    pub max_streak: u32,
}

/// One recorded relapse instant, timestamp kept raw. Bucketing decides
/// per use whether the string parses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelapseEvent {
    pub datetime: String,
}

impl RelapseEvent {
    #[must_use]
    pub fn new(datetime: impl Into<String>) -> Self {
        Self {
            datetime: datetime.into(),
        }
    }
}

/// Everything one render pass needs, fetched once per refresh.
#[derive(Debug, Clone)]
pub struct HabitBundle {
    pub profile: ProfileSummary,
    pub events: Vec<RelapseEvent>,
    pub chart: Vec<f64>,
    pub fetched_at: DateTime<Utc>,
}

/// A named streak milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Level {
    pub days: u32,
    pub name: &'static str,
}

/// Milestone table, strictly ascending. The last entry is the cap.
pub const LEVELS: [Level; 4] = [
    Level {
        days: 7,
        name: "Новичок",
    },
    Level {
        days: 30,
        name: "Боец",
    },
    Level {
        days: 60,
        name: "Стоик",
    },
    Level {
        days: 90,
        name: "Мастер",
    },
];

/// True when at least one event lands on the local "today".
#[must_use]
pub fn event_recorded_today(events: &[RelapseEvent], clock: &Clock) -> bool {
    let today = clock.today();
    events
        .iter()
        .filter_map(|event| bucket_event(&event.datetime, clock.offset()))
        .any(|stamp| stamp.date == today)
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;

    use super::*;

    #[test]
    fn level_table_is_strictly_ascending() {
        for pair in LEVELS.windows(2) {
            assert!(pair[0].days < pair[1].days);
        }
    }

    #[test]
    fn event_today_respects_the_local_zone() {
        let now = DateTime::parse_from_rfc3339("2024-02-11T01:00:00+03:00")
            .unwrap()
            .with_timezone(&Utc);
        let clock = Clock::fixed(now, FixedOffset::east_opt(3 * 3600).unwrap());

        // 23:30 UTC the "day before" is already Feb 11 at UTC+3.
        let events = vec![RelapseEvent::new("2024-02-10T23:30:00Z")];
        assert!(event_recorded_today(&events, &clock));

        let events = vec![RelapseEvent::new("2024-02-10T12:00:00Z")];
        assert!(!event_recorded_today(&events, &clock));

        assert!(!event_recorded_today(&[], &clock));
    }
}
