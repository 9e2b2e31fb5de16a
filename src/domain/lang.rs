//! Static grammar tables for the Russian display strings. Aggregation code
//! only ever indexes into these, so a locale swap never touches the math.

/// Shown wherever a metric has no data to stand on.
pub const PLACEHOLDER: &str = "—";

/// Greeting fallback when the backend sends no name.
pub const FALLBACK_NAME: &str = "друг";

/// Accusative case, "чаще всего грызёшь в ...".
pub const WEEKDAYS_ACCUSATIVE: [&str; 7] = [
    "понедельник",
    "вторник",
    "среду",
    "четверг",
    "пятницу",
    "субботу",
    "воскресенье",
];

/// Dative plural, "по ... будь внимательнее".
pub const WEEKDAYS_DATIVE: [&str; 7] = [
    "понедельникам",
    "вторникам",
    "средам",
    "четвергам",
    "пятницам",
    "субботам",
    "воскресеньям",
];

pub const WEEKDAYS_SHORT: [&str; 7] = ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Вс"];

pub const MONTHS: [&str; 12] = [
    "Январь",
    "Февраль",
    "Март",
    "Апрель",
    "Май",
    "Июнь",
    "Июль",
    "Август",
    "Сентябрь",
    "Октябрь",
    "Ноябрь",
    "Декабрь",
];

/// Standard Slavic three-way pluralization of «день».
#[must_use]
pub fn plural_days(count: u32) -> &'static str {
    if (11..=14).contains(&(count % 100)) {
        return "дней";
    }
    match count % 10 {
        1 => "день",
        2..=4 => "дня",
        _ => "дней",
    }
}

/// Label for a 2-hour slot, e.g. slot 5 -> "10:00-12:00".
#[must_use]
pub fn slot_label(slot: usize) -> String {
    let start = slot * 2;
    format!("{start:02}:00-{:02}:00", start + 2)
}
