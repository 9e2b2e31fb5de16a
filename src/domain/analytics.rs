#![allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::domain::{
    habit::RelapseEvent,
    lang::{PLACEHOLDER, WEEKDAYS_ACCUSATIVE, WEEKDAYS_DATIVE, slot_label},
    time::{Clock, EventStamp, SLOT_COUNT, bucket_event},
};

/// Display-ready weekly metrics. Every field degrades to the placeholder
/// instead of showing a zero that looks like data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyStats {
    /// Accusative weekday name, "чаще всего в ...".
    pub top_weekday: String,
    /// The same weekday in dative plural, "по ...".
    pub top_weekday_dative: String,
    /// 2-hour range label, "HH:00-HH:00".
    pub top_slot: String,
    /// Ceiling of events this week over elapsed days.
    pub weekly_average: String,
    /// Lifetime share of event-free days, "NN%".
    pub clean_percent: String,
}

impl WeeklyStats {
    fn placeholder() -> Self {
        Self {
            top_weekday: PLACEHOLDER.to_string(),
            top_weekday_dative: PLACEHOLDER.to_string(),
            top_slot: PLACEHOLDER.to_string(),
            weekly_average: PLACEHOLDER.to_string(),
            clean_percent: PLACEHOLDER.to_string(),
        }
    }
}

/// Frequency metrics look at the current Monday-anchored week only;
/// the clean percentage spans the full observed history. Malformed
/// timestamps are skipped up front.
#[must_use]
pub fn weekly_stats(events: &[RelapseEvent], clock: &Clock) -> WeeklyStats {
    let stamps: Vec<EventStamp> = events
        .iter()
        .filter_map(|event| bucket_event(&event.datetime, clock.offset()))
        .collect();
    if stamps.is_empty() {
        return WeeklyStats::placeholder();
    }

    let week_start = clock.week_start();
    let mut weekday_hist = [0u32; 7];
    let mut slot_hist = [0u32; SLOT_COUNT];
    let mut this_week = 0u32;
    for stamp in &stamps {
        if stamp.date >= week_start {
            weekday_hist[stamp.weekday] += 1;
            slot_hist[stamp.slot] += 1;
            this_week += 1;
        }
    }

    let top_weekday_index = arg_max(&weekday_hist);
    let weekly_average = if this_week == 0 {
        PLACEHOLDER.to_string()
    } else {
        this_week.div_ceil(clock.elapsed_week_days()).to_string()
    };

    WeeklyStats {
        top_weekday: top_weekday_index
            .map_or_else(placeholder, |idx| WEEKDAYS_ACCUSATIVE[idx].to_string()),
        top_weekday_dative: top_weekday_index
            .map_or_else(placeholder, |idx| WEEKDAYS_DATIVE[idx].to_string()),
        top_slot: arg_max(&slot_hist).map_or_else(placeholder, slot_label),
        weekly_average,
        clean_percent: format!("{}%", clean_percent(&stamps, clock.today())),
    }
}

fn placeholder() -> String {
    PLACEHOLDER.to_string()
}

/// Lowest index among the maxima; `None` when every bucket is empty.
fn arg_max(hist: &[u32]) -> Option<usize> {
    let mut best = 0usize;
    for (idx, &count) in hist.iter().enumerate() {
        if count > hist[best] {
            best = idx;
        }
    }
    (hist[best] > 0).then_some(best)
}

/// `round((total_days - distinct_event_days) / total_days * 100)` over the
/// span from the earliest event to today. Clamped at zero so an event
/// recorded today can never push the share negative.
fn clean_percent(stamps: &[EventStamp], today: NaiveDate) -> u32 {
    let Some(earliest) = stamps.iter().map(|stamp| stamp.date).min() else {
        return 100;
    };
    let total_days = (today - earliest).num_days().max(1);
    let distinct: HashSet<NaiveDate> = stamps.iter().map(|stamp| stamp.date).collect();
    let clean_days = (total_days - distinct.len() as i64).max(0);
    ((clean_days as f64 / total_days as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, FixedOffset, Utc};

    use super::*;

    fn clock_at(raw: &str) -> Clock {
        let now = DateTime::parse_from_rfc3339(raw)
            .expect("valid clock fixture")
            .with_timezone(&Utc);
        Clock::fixed(now, FixedOffset::east_opt(0).expect("utc offset"))
    }

    fn events(raws: &[&str]) -> Vec<RelapseEvent> {
        raws.iter().map(|raw| RelapseEvent::new(*raw)).collect()
    }

    #[test]
    fn empty_history_is_all_placeholders() {
        let clock = clock_at("2024-02-15T12:00:00Z");
        let stats = weekly_stats(&[], &clock);
        assert_eq!(stats, WeeklyStats::placeholder());
    }

    #[test]
    fn malformed_events_are_skipped_not_fatal() {
        let clock = clock_at("2024-02-15T12:00:00Z");
        let stats = weekly_stats(&events(&["garbage", ""]), &clock);
        assert_eq!(stats, WeeklyStats::placeholder());
    }

    #[test]
    fn prior_week_events_blank_week_fields_but_keep_lifetime() {
        // Now: Thursday Feb 15. Event: Monday Feb 5, one week earlier.
        let clock = clock_at("2024-02-15T12:00:00Z");
        let stats = weekly_stats(&events(&["2024-02-05T10:00:00Z"]), &clock);
        assert_eq!(stats.top_weekday, PLACEHOLDER);
        assert_eq!(stats.top_weekday_dative, PLACEHOLDER);
        assert_eq!(stats.top_slot, PLACEHOLDER);
        assert_eq!(stats.weekly_average, PLACEHOLDER);
        // 10 days observed, 1 bears an event: round(9/10*100).
        assert_eq!(stats.clean_percent, "90%");
    }

    #[test]
    fn current_week_histograms_pick_first_seen_maximum() {
        // Week of Mon Feb 12. Tuesday has two events, Wednesday one; the
        // morning slot repeats across days and beats the evening one.
        let clock = clock_at("2024-02-15T12:00:00Z");
        let stats = weekly_stats(
            &events(&[
                "2024-02-13T09:30:00Z",
                "2024-02-13T21:10:00Z",
                "2024-02-14T09:45:00Z",
            ]),
            &clock,
        );
        assert_eq!(stats.top_weekday, "вторник");
        assert_eq!(stats.top_weekday_dative, "вторникам");
        assert_eq!(stats.top_slot, "08:00-10:00");
        // 3 events over ceil(3.5) = 4 elapsed days -> ceil(3/4) = 1.
        assert_eq!(stats.weekly_average, "1");
    }

    #[test]
    fn ties_resolve_to_the_lowest_bucket_index() {
        // One event Tuesday, one Thursday: Tuesday wins the tie.
        let clock = clock_at("2024-02-16T12:00:00Z");
        let stats = weekly_stats(
            &events(&["2024-02-13T10:00:00Z", "2024-02-15T18:00:00Z"]),
            &clock,
        );
        assert_eq!(stats.top_weekday, "вторник");
    }

    #[test]
    fn every_day_with_an_event_means_zero_clean() {
        let clock = clock_at("2024-02-15T12:00:00Z");
        let history: Vec<RelapseEvent> = (12..=15)
            .map(|day| RelapseEvent::new(format!("2024-02-{day}T10:00:00Z")))
            .collect();
        let stats = weekly_stats(&history, &clock);
        assert_eq!(stats.clean_percent, "0%");
    }

    #[test]
    fn single_event_today_does_not_go_negative() {
        let clock = clock_at("2024-02-15T12:00:00Z");
        let stats = weekly_stats(&events(&["2024-02-15T10:00:00Z"]), &clock);
        assert_eq!(stats.clean_percent, "0%");
    }
}
