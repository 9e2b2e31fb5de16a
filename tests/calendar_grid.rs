mod common;

use common::{events, fixed_clock};
use terminal_streak::domain::calendar::{DayStatus, MonthCursor, month_grid};

#[test]
fn leap_february_grid_opens_on_the_prior_monday() {
    let clock = fixed_clock("2024-02-15T12:00:00Z", 0);
    let grid = month_grid(MonthCursor { year: 2024, month0: 1 }, &[], &clock);

    // Feb 1 2024 is a Thursday, so the grid reaches back to Monday Jan 29.
    let spillover: Vec<_> = grid.cells.iter().take_while(|cell| !cell.in_month).collect();
    assert_eq!(spillover.len(), 3);
    assert_eq!(spillover[0].day, 29);
    assert!(spillover.iter().all(|cell| cell.status == DayStatus::None));

    let in_month: Vec<_> = grid.cells.iter().filter(|cell| cell.in_month).collect();
    assert_eq!(in_month.len(), 29);
    assert_eq!(in_month.last().map(|cell| cell.day), Some(29));
}

#[test]
fn statuses_split_past_present_and_future() {
    let clock = fixed_clock("2024-02-15T12:00:00Z", 0);
    let grid = month_grid(
        MonthCursor { year: 2024, month0: 1 },
        &events(&["2024-02-10T10:00:00Z"]),
        &clock,
    );

    let cell = |day: u32| {
        grid.cells
            .iter()
            .find(|cell| cell.in_month && cell.day == day)
            .expect("day present")
    };

    assert_eq!(cell(10).status, DayStatus::Relapse);
    assert_eq!(cell(11).status, DayStatus::Clean);

    let today = cell(15);
    assert_eq!(today.status, DayStatus::None);
    assert!(today.is_today);

    let future = cell(20);
    assert_eq!(future.status, DayStatus::None);
    assert!(!future.is_past);
}

#[test]
fn relapse_days_come_from_the_full_history_not_the_shown_month() {
    // Event in January still marks the January grid rendered in February.
    let clock = fixed_clock("2024-02-15T12:00:00Z", 0);
    let grid = month_grid(
        MonthCursor { year: 2024, month0: 0 },
        &events(&["2024-01-20T10:00:00Z"]),
        &clock,
    );
    let marked = grid
        .cells
        .iter()
        .find(|cell| cell.in_month && cell.day == 20)
        .expect("day present");
    assert_eq!(marked.status, DayStatus::Relapse);
}

#[test]
fn today_flag_tracks_the_real_now_across_months() {
    // Rendering March while "now" is February: no cell is today.
    let clock = fixed_clock("2024-02-15T12:00:00Z", 0);
    let grid = month_grid(MonthCursor { year: 2024, month0: 2 }, &[], &clock);
    assert!(grid.cells.iter().all(|cell| !cell.is_today));
}

#[test]
fn event_zone_shift_can_move_the_marked_day() {
    // 23:30 UTC Feb 10 is Feb 11 for a viewer at UTC+3.
    let clock = fixed_clock("2024-02-15T12:00:00Z", 180);
    let grid = month_grid(
        MonthCursor { year: 2024, month0: 1 },
        &events(&["2024-02-10T23:30:00Z"]),
        &clock,
    );
    let cell = |day: u32| {
        grid.cells
            .iter()
            .find(|cell| cell.in_month && cell.day == day)
            .expect("day present")
    };
    assert_eq!(cell(10).status, DayStatus::Clean);
    assert_eq!(cell(11).status, DayStatus::Relapse);
}
