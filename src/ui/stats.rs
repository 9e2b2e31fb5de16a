#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Sparkline},
};

use crate::{app::state::AppState, domain::analytics::weekly_stats};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(bundle) = state.bundle.as_ref() else {
        return;
    };

    let stats = weekly_stats(&bundle.events, &state.clock);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(6)])
        .split(area);

    let lines = vec![
        Line::from(format!("Событий записано: {}", bundle.events.len())),
        Line::from(""),
        Line::from(format!("Чаще всего на этой неделе: в {}", stats.top_weekday)),
        Line::from(format!("Время риска: {}", stats.top_slot)),
        Line::from(format!("По {} будь внимательнее", stats.top_weekday_dative)),
        Line::from(format!("В среднем за неделю: {}", stats.weekly_average)),
        Line::from(""),
        Line::from(format!("Чистых дней за всё время: {}", stats.clean_percent)),
    ];
    let body =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Статистика"));
    frame.render_widget(body, chunks[0]);

    render_chart(frame, chunks[1], &bundle.chart);
}

fn render_chart(frame: &mut Frame, area: Rect, chart: &[f64]) {
    let block = Block::default().borders(Borders::ALL).title("Динамика");
    if chart.is_empty() {
        let empty = Paragraph::new("Данных пока нет")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let values: Vec<u64> = chart.iter().map(|value| value.max(0.0) as u64).collect();
    let sparkline = Sparkline::default()
        .data(&values)
        .style(Style::default().fg(Color::Cyan))
        .block(block);
    frame.render_widget(sparkline, area);
}
