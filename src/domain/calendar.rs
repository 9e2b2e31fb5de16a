use std::collections::HashSet;

use chrono::{Datelike, Duration, NaiveDate};

use crate::domain::{
    habit::RelapseEvent,
    time::{Clock, bucket_event},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    /// Today, the future, or a spillover cell.
    None,
    /// A past day with no recorded event.
    Clean,
    /// A past day whose local date carries at least one event.
    Relapse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub day: u32,
    pub in_month: bool,
    pub is_today: bool,
    pub is_past: bool,
    pub status: DayStatus,
}

/// Which month the calendar screen shows. Owned by the caller and passed in
/// per render; the grid builder itself holds no state between invocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub year: i32,
    /// Zero-based month index, January = 0.
    pub month0: u32,
}

impl MonthCursor {
    #[must_use]
    pub fn at(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month0: date.month0(),
        }
    }

    pub fn prev(&mut self) {
        if self.month0 == 0 {
            self.month0 = 11;
            self.year -= 1;
        } else {
            self.month0 -= 1;
        }
    }

    pub fn next(&mut self) {
        if self.month0 == 11 {
            self.month0 = 0;
            self.year += 1;
        } else {
            self.month0 += 1;
        }
    }

    #[must_use]
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub cursor: MonthCursor,
    pub cells: Vec<DayCell>,
}

/// Builds the 7-column month grid: spillover cells back to the Monday on or
/// before the 1st, then every in-month day. Day statuses come from the FULL
/// event collection, so month navigation never needs a refetch.
#[must_use]
pub fn month_grid(cursor: MonthCursor, events: &[RelapseEvent], clock: &Clock) -> MonthGrid {
    let Some(first) = cursor.first_day() else {
        return MonthGrid {
            cursor,
            cells: Vec::new(),
        };
    };

    let today = clock.today();
    let relapse_days: HashSet<NaiveDate> = events
        .iter()
        .filter_map(|event| bucket_event(&event.datetime, clock.offset()))
        .map(|stamp| stamp.date)
        .collect();

    let lead = i64::from(first.weekday().num_days_from_monday());
    let mut cells = Vec::new();
    for back in (1..=lead).rev() {
        let date = first - Duration::days(back);
        cells.push(DayCell {
            day: date.day(),
            in_month: false,
            is_today: false,
            is_past: date < today,
            status: DayStatus::None,
        });
    }

    let mut date = first;
    while date.year() == cursor.year && date.month0() == cursor.month0 {
        let is_today = date == today;
        let is_past = date < today;
        let status = if !is_past || is_today {
            DayStatus::None
        } else if relapse_days.contains(&date) {
            DayStatus::Relapse
        } else {
            DayStatus::Clean
        };
        cells.push(DayCell {
            day: date.day(),
            in_month: true,
            is_today,
            is_past,
            status,
        });
        let Some(next) = date.succ_opt() else { break };
        date = next;
    }

    MonthGrid { cursor, cells }
}
