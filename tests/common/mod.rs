#![allow(dead_code)]

use chrono::{DateTime, FixedOffset, Utc};
use terminal_streak::domain::{
    habit::{ProfileSummary, RelapseEvent},
    time::Clock,
};

/// Clock pinned to an RFC 3339 instant with a fixed viewer offset in
/// minutes east of UTC.
pub fn fixed_clock(raw: &str, offset_minutes: i32) -> Clock {
    let now = DateTime::parse_from_rfc3339(raw)
        .expect("valid clock fixture")
        .with_timezone(&Utc);
    let offset = FixedOffset::east_opt(offset_minutes * 60).expect("valid offset fixture");
    Clock::fixed(now, offset)
}

pub fn events(raws: &[&str]) -> Vec<RelapseEvent> {
    raws.iter().map(|raw| RelapseEvent::new(*raw)).collect()
}

pub fn profile(name: &str, current_streak: u32, max_streak: u32) -> ProfileSummary {
    ProfileSummary {
        name: name.to_string(),
        current_streak,
        max_streak,
    }
}
