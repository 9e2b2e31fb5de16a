use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    app::state::AppState,
    domain::{
        calendar::{DayCell, DayStatus, month_grid},
        lang::{MONTHS, WEEKDAYS_SHORT},
    },
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(bundle) = state.bundle.as_ref() else {
        return;
    };

    let grid = month_grid(state.cursor, &bundle.events, &state.clock);
    let title = format!(
        "{} {}",
        MONTHS.get(state.cursor.month0 as usize).unwrap_or(&"?"),
        state.cursor.year
    );

    let mut lines = vec![
        Line::from(
            WEEKDAYS_SHORT
                .iter()
                .map(|day| Span::styled(format!("{day:>3} "), Style::default().fg(Color::DarkGray)))
                .collect::<Vec<_>>(),
        ),
    ];
    for week in grid.cells.chunks(7) {
        lines.push(Line::from(
            week.iter().map(render_cell).collect::<Vec<_>>(),
        ));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  ■ чистый день  ", Style::default().fg(Color::Green)),
        Span::styled("■ был срыв", Style::default().fg(Color::Red)),
    ]));

    let body = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(body, area);
}

fn render_cell(cell: &DayCell) -> Span<'static> {
    let text = format!("{:>3} ", cell.day);
    let style = if !cell.in_month {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    } else if cell.is_today {
        Style::default()
            .add_modifier(Modifier::BOLD)
            .add_modifier(Modifier::UNDERLINED)
    } else {
        match cell.status {
            DayStatus::Relapse => Style::default().fg(Color::Red),
            DayStatus::Clean => Style::default().fg(Color::Green),
            DayStatus::None => Style::default().fg(Color::Gray),
        }
    };
    Span::styled(text, style)
}
