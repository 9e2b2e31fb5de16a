#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

//! Date-seeded text generators. Both selectors are pure functions of the
//! inputs and the clock's calendar date: stable across re-renders within a
//! day, rotating at local midnight without any persisted state.

use chrono::Datelike;

use crate::domain::{
    habit::ProfileSummary,
    lang::plural_days,
    progress::{at_top_level, resolve_level},
    time::Clock,
};

/// Streak length from which the "momentum" phrase pool takes over.
const MOMENTUM_STREAK: u32 = 7;

const FULL_POOL: [&str; 8] = [
    "Сегодня хороший день, чтобы не грызть",
    "Руки заняты — голова спокойна",
    "Маленькие шаги складываются в большую серию",
    "Ты сильнее своей привычки",
    "Каждый чистый день — это кирпич в фундаменте",
    "Заметил желание — сделай вдох и подожди минуту",
    "Срыв не отменяет пройденного пути",
    "Твоя серия растёт, пока ты просто живёшь свой день",
];

const RESET_POOL: [&str; 3] = [
    "Серия обнулилась, но опыт остался с тобой",
    "Начать заново — это тоже продолжение",
    "Один день — и отсчёт снова пойдёт вверх",
];

const SLIP_POOL: [&str; 3] = [
    "Сегодня был момент — разбери его вечером",
    "Зафиксировал срыв — уже наполовину разобрался",
    "Один момент не перечёркивает серию усилий",
];

const MOMENTUM_POOL: [&str; 4] = [
    "Неделя позади — привычка слабеет",
    "Ты держишь темп, не сбавляй",
    "Серия работает на тебя",
    "Чем длиннее серия, тем тише желание",
];

/// One forecast sentence for the home screen, chosen from the candidate
/// lines by day-of-month. The last two candidates are unconditional, so the
/// list is never empty; the guard stays anyway.
#[must_use]
pub fn forecast(profile: &ProfileSummary, clock: &Clock) -> String {
    let streak = profile.current_streak;
    let mut lines: Vec<String> = Vec::new();

    if streak < profile.max_streak && profile.max_streak > 0 {
        let left = profile.max_streak - streak;
        lines.push(format!(
            "До твоего рекорда осталось {left} {}",
            plural_days(left)
        ));
    }

    let level = resolve_level(streak);
    let to_next = level.days.saturating_sub(streak);
    if to_next > 0 {
        lines.push(format!(
            "Ещё {to_next} {} до уровня «{}»",
            plural_days(to_next),
            level.name
        ));
    }

    if !at_top_level(streak) && streak > 0 {
        let percent = (f64::from(streak) / f64::from(level.days) * 100.0).round() as u32;
        lines.push(format!("Уровень «{}» пройден на {percent}%", level.name));
    }

    lines.push(format!("{streak} {} силы воли", plural_days(streak)));
    lines.push(if at_top_level(streak) {
        "Ты на вершине — теперь главное удержаться".to_string()
    } else {
        "Каждый чистый день делает тебя сильнее".to_string()
    });

    if lines.is_empty() {
        return String::new();
    }
    let index = clock.today().day() as usize % lines.len();
    lines.swap_remove(index)
}

/// The affirmation of the day. Pool priority: relapse today with a reset
/// streak, then relapse today, then a week-plus streak, then the full pool.
#[must_use]
pub fn daily_phrase(streak: u32, event_today: bool, clock: &Clock) -> &'static str {
    let pool: &[&str] = if event_today && streak == 0 {
        &RESET_POOL
    } else if event_today {
        &SLIP_POOL
    } else if streak >= MOMENTUM_STREAK {
        &MOMENTUM_POOL
    } else {
        &FULL_POOL
    };
    pool[clock.today().ordinal0() as usize % pool.len()]
}
