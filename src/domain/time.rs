use chrono::{
    DateTime, Datelike, Duration, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime,
    Timelike, Utc,
};

/// Number of 2-hour slots in a day.
pub const SLOT_COUNT: usize = 12;

/// An explicit "now + zone" capability. The engine never reads the host
/// clock directly; tests pin both the instant and the offset.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    now_utc: DateTime<Utc>,
    offset: FixedOffset,
}

impl Clock {
    #[must_use]
    pub fn system(offset_override: Option<FixedOffset>) -> Self {
        Self {
            now_utc: Utc::now(),
            offset: offset_override.unwrap_or_else(|| *Local::now().offset()),
        }
    }

    #[must_use]
    pub fn fixed(now_utc: DateTime<Utc>, offset: FixedOffset) -> Self {
        Self { now_utc, offset }
    }

    /// Same zone, fresh instant.
    #[must_use]
    pub fn refreshed(self) -> Self {
        Self {
            now_utc: Utc::now(),
            offset: self.offset,
        }
    }

    #[must_use]
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    #[must_use]
    pub fn now_local(&self) -> DateTime<FixedOffset> {
        self.now_utc.with_timezone(&self.offset)
    }

    /// Local calendar date of "now".
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.now_local().date_naive()
    }

    /// The most recent Monday at local midnight, as a date.
    #[must_use]
    pub fn week_start(&self) -> NaiveDate {
        let today = self.today();
        today - Duration::days(i64::from(today.weekday().num_days_from_monday()))
    }

    /// Whole local days elapsed since the week started, rounded up and
    /// floored at 1 so the first moment of a week never divides by zero.
    #[must_use]
    pub fn elapsed_week_days(&self) -> u32 {
        let start = self.week_start().and_time(NaiveTime::MIN);
        let secs = (self.now_local().naive_local() - start).num_seconds().max(0);
        u32::try_from(((secs + 86_399) / 86_400).max(1)).unwrap_or(1)
    }
}

/// An event timestamp resolved into the viewer's local calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventStamp {
    pub date: NaiveDate,
    /// Monday = 0 ... Sunday = 6.
    pub weekday: usize,
    /// `floor(local_hour / 2)`, in `0..SLOT_COUNT`.
    pub slot: usize,
}

/// Resolves a raw UTC timestamp into local-calendar buckets. Returns `None`
/// for unparsable input so callers can filter instead of aborting a batch.
#[must_use]
pub fn bucket_event(raw: &str, offset: FixedOffset) -> Option<EventStamp> {
    let local = parse_event_utc(raw)?.with_timezone(&offset);
    Some(EventStamp {
        date: local.date_naive(),
        weekday: local.weekday().num_days_from_monday() as usize,
        slot: (local.hour() / 2) as usize,
    })
}

/// Accepts RFC 3339 (`...Z`, explicit offsets) and the backend's naive
/// `isoformat()` strings with optional fractional seconds, taken as UTC.
#[must_use]
pub fn parse_event_utc(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(stamped) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamped.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

#[must_use]
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
