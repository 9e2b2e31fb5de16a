pub mod calendar;
pub mod home;
pub mod stats;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::{AppMode, AppState, Screen};

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    if area.width < 40 || area.height < 12 {
        let warning = Paragraph::new("Terminal too small. Resize to at least 40x12.")
            .block(Block::default().borders(Borders::ALL).title("terminal-streak"));
        frame.render_widget(warning, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    match state.mode {
        AppMode::Loading => render_loading(frame, chunks[0], state),
        AppMode::Error => render_error(frame, chunks[0], state),
        AppMode::Ready | AppMode::Quit => match state.screen {
            Screen::Home => home::render(frame, chunks[0], state),
            Screen::Stats => stats::render(frame, chunks[0], state),
            Screen::Calendar => calendar::render(frame, chunks[0], state),
        },
    }

    render_key_hints(frame, chunks[1], state);
}

fn render_loading(frame: &mut Frame, area: Rect, state: &AppState) {
    let body = Paragraph::new(state.loading_message.as_str())
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL).title("terminal-streak"));
    frame.render_widget(body, area);
}

fn render_error(frame: &mut Frame, area: Rect, state: &AppState) {
    let message = state
        .last_error
        .as_deref()
        .unwrap_or("Ошибка загрузки данных. Попробуйте позже.");
    let body = Paragraph::new(vec![
        Line::from("Не получилось загрузить данные"),
        Line::from(message),
        Line::from(""),
        Line::from("Повтор по расписанию, r — повторить сейчас"),
    ])
    .style(Style::default().fg(Color::LightRed))
    .block(Block::default().borders(Borders::ALL).title("Ошибка"));
    frame.render_widget(body, area);
}

fn render_key_hints(frame: &mut Frame, area: Rect, state: &AppState) {
    let hints = if state.screen == Screen::Calendar {
        "1 дом · 2 статистика · 3 календарь · ←/→ месяц · r обновить · q выход"
    } else {
        "1 дом · 2 статистика · 3 календарь · r обновить · q выход"
    };
    let bar = Paragraph::new(hints).style(
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM),
    );
    frame.render_widget(bar, area);
}
