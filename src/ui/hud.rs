//! Status line rendered below the playing field.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::Theme;
use crate::game::GameSession;
use crate::score::ScoreRecord;

/// Values the HUD shows that do not live on the session itself.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo {
    pub record: ScoreRecord,
    pub theme: &'static Theme,
}

/// Draws the status line and returns the area left over for the arena.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    session: &GameSession,
    info: &HudInfo,
) -> Rect {
    let [play_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    frame.render_widget(
        Paragraph::new(status_line(session, info))
            .alignment(Alignment::Right)
            .style(Style::default().fg(Color::DarkGray)),
        status_area,
    );

    play_area
}

fn status_line(session: &GameSession, info: &HudInfo) -> Line<'static> {
    let value = Style::default().fg(info.theme.hud_score);
    let high_score = info.record.high_score.max(session.score);
    let separator = Span::raw("  ");

    Line::from(vec![
        Span::raw("Length: "),
        Span::styled(session.snake_length().to_string(), value),
        separator.clone(),
        Span::raw("Level: "),
        Span::styled(session.speed_level.to_string(), value),
        separator.clone(),
        Span::raw("Score: "),
        Span::styled(session.score.to_string(), value),
        separator,
        Span::raw("Hi: "),
        Span::styled(high_score.to_string(), value),
    ])
}
