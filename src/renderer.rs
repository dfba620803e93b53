use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::symbols::border;
use ratatui::widgets::Block;

use crate::config::{
    ArenaBounds, Theme, GLYPH_FOOD, GLYPH_SNAKE_BEND_DOWN_LEFT, GLYPH_SNAKE_BEND_DOWN_RIGHT,
    GLYPH_SNAKE_BEND_UP_LEFT, GLYPH_SNAKE_BEND_UP_RIGHT, GLYPH_SNAKE_BODY_H, GLYPH_SNAKE_BODY_V,
    GLYPH_SNAKE_HEAD_DOWN, GLYPH_SNAKE_HEAD_LEFT, GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP,
    GLYPH_SNAKE_TAIL_DOWN, GLYPH_SNAKE_TAIL_LEFT, GLYPH_SNAKE_TAIL_RIGHT, GLYPH_SNAKE_TAIL_UP,
};
use crate::game::{GameSession, GameStatus};
use crate::input::Direction;
use crate::snake::Position;
use crate::tiles::{body_tiles, TileKind};
use crate::ui::hud::{render_hud, HudInfo};
use crate::ui::menu::{
    render_game_over_menu, render_pause_menu, render_start_menu, render_victory_menu,
};

/// Renders the full game frame from an immutable session.
pub fn render(frame: &mut Frame<'_>, session: &GameSession, info: &HudInfo) {
    let area = frame.area();
    let play_area = render_hud(frame, area, session, info);

    let theme = info.theme;
    let block = Block::bordered()
        .border_set(border::ROUNDED)
        .border_style(Style::new().fg(theme.border));

    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, session, theme);
    render_snake(frame, inner, session, theme);

    if session.is_start_screen() {
        render_start_menu(frame, play_area, info.record, theme);
        return;
    }

    match session.status {
        GameStatus::Paused => render_pause_menu(frame, play_area, theme),
        GameStatus::GameOver => render_game_over_menu(
            frame,
            play_area,
            session.score,
            info.record,
            session.death_reason(),
            theme,
        ),
        GameStatus::Victory => render_victory_menu(frame, play_area, session.score, theme),
        GameStatus::Playing => {}
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, session: &GameSession, theme: &Theme) {
    let Some((x, y)) = logical_to_terminal(inner, session.bounds(), session.food.position) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, session: &GameSession, theme: &Theme) {
    let controller = session.controller();
    let bounds = session.bounds();
    let head = controller.head();
    let buffer = frame.buffer_mut();

    for (cell, kind) in body_tiles(controller.snake(), head) {
        let Some((x, y)) = logical_to_terminal(inner, bounds, cell) else {
            continue;
        };

        let (glyph, color) = match kind {
            TileKind::Straight(direction) => (straight_glyph(direction), theme.snake_body),
            TileKind::Bend { from, to } => (bend_glyph(from, to), theme.snake_body),
            TileKind::Tail(direction) => (tail_glyph(direction), theme.snake_tail),
        };
        buffer.set_string(x, y, glyph, Style::new().fg(color));
    }

    let Some((x, y)) = logical_to_terminal(inner, bounds, head) else {
        return;
    };
    buffer.set_string(
        x,
        y,
        head_glyph(controller.current_facing()),
        Style::new()
            .fg(theme.snake_head)
            .add_modifier(Modifier::BOLD),
    );
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_SNAKE_HEAD_UP,
        Direction::Down => GLYPH_SNAKE_HEAD_DOWN,
        Direction::Left => GLYPH_SNAKE_HEAD_LEFT,
        Direction::Right => GLYPH_SNAKE_HEAD_RIGHT,
    }
}

fn straight_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Left | Direction::Right => GLYPH_SNAKE_BODY_H,
        Direction::Up | Direction::Down => GLYPH_SNAKE_BODY_V,
    }
}

fn tail_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_SNAKE_TAIL_UP,
        Direction::Down => GLYPH_SNAKE_TAIL_DOWN,
        Direction::Left => GLYPH_SNAKE_TAIL_LEFT,
        Direction::Right => GLYPH_SNAKE_TAIL_RIGHT,
    }
}

/// Picks the corner glyph whose arms open toward the tail side
/// (opposite of `from`) and the head side (`to`).
fn bend_glyph(from: Direction, to: Direction) -> &'static str {
    match (from, to) {
        (Direction::Right, Direction::Up) | (Direction::Down, Direction::Left) => {
            GLYPH_SNAKE_BEND_UP_LEFT
        }
        (Direction::Left, Direction::Up) | (Direction::Down, Direction::Right) => {
            GLYPH_SNAKE_BEND_UP_RIGHT
        }
        (Direction::Right, Direction::Down) | (Direction::Up, Direction::Left) => {
            GLYPH_SNAKE_BEND_DOWN_LEFT
        }
        (Direction::Left, Direction::Down) | (Direction::Up, Direction::Right) => {
            GLYPH_SNAKE_BEND_DOWN_RIGHT
        }
        _ => unreachable!("bend tiles never join collinear or reversed directions"),
    }
}

fn logical_to_terminal(inner: Rect, bounds: ArenaBounds, position: Position) -> Option<(u16, u16)> {
    if !bounds.contains(position) {
        return None;
    }

    let x_offset = u16::try_from(position.x - bounds.min_x()).ok()?;
    let y_offset = u16::try_from(position.y - bounds.min_y()).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
