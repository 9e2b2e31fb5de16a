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
        habit::event_recorded_today,
        lang::plural_days,
        phrases::{daily_phrase, forecast},
        progress::progress_status,
    },
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(bundle) = state.bundle.as_ref() else {
        return;
    };

    let streak = bundle.profile.current_streak;
    let status = progress_status(streak);
    let event_today = event_recorded_today(&bundle.events, &state.clock);

    let bar = progress_bar(status.seg_filled, status.seg_total);
    let lines = vec![
        Line::from(Span::styled(
            format!("Привет, {}!", bundle.profile.name),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{streak} {} без срыва", plural_days(streak)),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "Рекорд: {} {}",
            bundle.profile.max_streak,
            plural_days(bundle.profile.max_streak)
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw(format!("Уровень «{}»  ", status.level.name)),
            Span::styled(bar, Style::default().fg(Color::Green)),
            Span::raw(format!("  {}/{}", status.filled, status.total)),
        ]),
        Line::from(""),
        Line::from(forecast(&bundle.profile, &state.clock)),
        Line::from(""),
        Line::from(Span::styled(
            daily_phrase(streak, event_today, &state.clock),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    ];

    let body = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Мой прогресс"));
    frame.render_widget(body, area);
}

fn progress_bar(filled: u32, total: u32) -> String {
    let mut bar = String::new();
    for segment in 0..total {
        bar.push(if segment < filled { '█' } else { '░' });
    }
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_matches_segment_counts() {
        assert_eq!(progress_bar(0, 7), "░░░░░░░");
        assert_eq!(progress_bar(3, 7), "███░░░░");
        assert_eq!(progress_bar(14, 14), "██████████████");
    }
}
