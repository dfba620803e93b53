use ratatui::style::Color;
use thiserror::Error;

use crate::snake::Position;

/// Inclusive arena rectangle the snake may occupy.
///
/// Replaces loose width/height pairs with validated extents, making the
/// min/max on each axis unambiguous at every call site. Injected once at
/// startup and never mutated afterward.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ArenaBounds {
    min_x: i32,
    max_x: i32,
    min_y: i32,
    max_y: i32,
}

/// Rejected arena configuration.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum BoundsError {
    #[error("invalid x extent: min {min} exceeds max {max}")]
    InvalidX { min: i32, max: i32 },
    #[error("invalid y extent: min {min} exceeds max {max}")]
    InvalidY { min: i32, max: i32 },
}

impl ArenaBounds {
    /// Creates bounds from inclusive extents on both axes.
    pub fn new(min_x: i32, max_x: i32, min_y: i32, max_y: i32) -> Result<Self, BoundsError> {
        if min_x > max_x {
            return Err(BoundsError::InvalidX {
                min: min_x,
                max: max_x,
            });
        }
        if min_y > max_y {
            return Err(BoundsError::InvalidY {
                min: min_y,
                max: max_y,
            });
        }

        Ok(Self {
            min_x,
            max_x,
            min_y,
            max_y,
        })
    }

    /// Creates the `[0, width-1] x [0, height-1]` arena used by the app.
    pub fn from_size(width: u16, height: u16) -> Result<Self, BoundsError> {
        Self::new(0, i32::from(width) - 1, 0, i32::from(height) - 1)
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn contains(self, position: Position) -> bool {
        position.x >= self.min_x
            && position.x <= self.max_x
            && position.y >= self.min_y
            && position.y <= self.max_y
    }

    /// Returns the cell at the middle of the arena, rounding toward the
    /// minimum corner on even extents.
    #[must_use]
    pub fn center(self) -> Position {
        Position {
            x: self.min_x + (self.max_x - self.min_x) / 2,
            y: self.min_y + (self.max_y - self.min_y) / 2,
        }
    }

    #[must_use]
    pub fn min_x(self) -> i32 {
        self.min_x
    }

    #[must_use]
    pub fn max_x(self) -> i32 {
        self.max_x
    }

    #[must_use]
    pub fn min_y(self) -> i32 {
        self.min_y
    }

    #[must_use]
    pub fn max_y(self) -> i32 {
        self.max_y
    }

    /// Returns the arena width in cells.
    #[must_use]
    pub fn width(self) -> u32 {
        (self.max_x - self.min_x + 1).unsigned_abs()
    }

    /// Returns the arena height in cells.
    #[must_use]
    pub fn height(self) -> u32 {
        (self.max_y - self.min_y + 1).unsigned_abs()
    }

    /// Returns the total number of cells in the arena.
    #[must_use]
    pub fn total_cells(self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }
}

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    /// Color for straight and bend body glyphs.
    pub snake_body: Color,
    pub snake_tail: Color,
    pub food: Color,
    pub border: Color,
    pub hud_score: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Classic green snake on dark theme.
pub const THEME_CLASSIC: Theme = Theme {
    name: "classic",
    snake_head: Color::White,
    snake_body: Color::Green,
    snake_tail: Color::DarkGray,
    food: Color::Red,
    border: Color::White,
    hud_score: Color::White,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Ocean cyan theme.
pub const THEME_OCEAN: Theme = Theme {
    name: "ocean",
    snake_head: Color::White,
    snake_body: Color::Cyan,
    snake_tail: Color::DarkGray,
    food: Color::Yellow,
    border: Color::Cyan,
    hud_score: Color::Cyan,
    menu_title: Color::Cyan,
    menu_footer: Color::DarkGray,
};

/// Neon magenta/yellow theme.
pub const THEME_NEON: Theme = Theme {
    name: "neon",
    snake_head: Color::White,
    snake_body: Color::Magenta,
    snake_tail: Color::DarkGray,
    food: Color::Yellow,
    border: Color::Magenta,
    hud_score: Color::Magenta,
    menu_title: Color::Magenta,
    menu_footer: Color::DarkGray,
};

/// All available themes.
pub const THEMES: &[Theme] = &[THEME_CLASSIC, THEME_OCEAN, THEME_NEON];

/// Looks up a theme by its case-insensitive name.
#[must_use]
pub fn theme_named(name: &str) -> Option<&'static Theme> {
    THEMES
        .iter()
        .find(|theme| theme.name.eq_ignore_ascii_case(name))
}

pub const GLYPH_FOOD: &str = "●";

pub const GLYPH_SNAKE_HEAD_UP: &str = "▲";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◀";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "▶";

pub const GLYPH_SNAKE_BODY_H: &str = "─";
pub const GLYPH_SNAKE_BODY_V: &str = "│";

/// Bend glyphs, named for the two sides their arms open toward.
pub const GLYPH_SNAKE_BEND_UP_LEFT: &str = "╯";
pub const GLYPH_SNAKE_BEND_UP_RIGHT: &str = "╰";
pub const GLYPH_SNAKE_BEND_DOWN_LEFT: &str = "╮";
pub const GLYPH_SNAKE_BEND_DOWN_RIGHT: &str = "╭";

/// Tail glyphs, named for the side the stub opens toward.
pub const GLYPH_SNAKE_TAIL_UP: &str = "╵";
pub const GLYPH_SNAKE_TAIL_DOWN: &str = "╷";
pub const GLYPH_SNAKE_TAIL_LEFT: &str = "╴";
pub const GLYPH_SNAKE_TAIL_RIGHT: &str = "╶";

/// Default snake speed in moves per second.
pub const DEFAULT_MOVES_PER_SECOND: f32 = 2.0;

/// Minimum tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 60;

/// Tick-interval reduction per speed level in milliseconds.
pub const SPEED_LEVEL_STEP_MS: u64 = 10;

/// Score needed per speed level increase.
pub const POINTS_PER_SPEED_LEVEL: u32 = 5;

/// Default arena width in cells.
pub const DEFAULT_ARENA_WIDTH: u16 = 12;

/// Default arena height in cells.
pub const DEFAULT_ARENA_HEIGHT: u16 = 12;

#[cfg(test)]
mod tests {
    use crate::snake::Position;

    use super::{theme_named, ArenaBounds, BoundsError};

    #[test]
    fn from_size_spans_zero_to_extent_minus_one() {
        let bounds = ArenaBounds::from_size(12, 8).expect("12x8 arena should be valid");

        assert_eq!(bounds.min_x(), 0);
        assert_eq!(bounds.max_x(), 11);
        assert_eq!(bounds.min_y(), 0);
        assert_eq!(bounds.max_y(), 7);
        assert_eq!(bounds.width(), 12);
        assert_eq!(bounds.height(), 8);
        assert_eq!(bounds.total_cells(), 96);
    }

    #[test]
    fn degenerate_extents_are_rejected() {
        assert_eq!(
            ArenaBounds::new(3, 2, 0, 5),
            Err(BoundsError::InvalidX { min: 3, max: 2 })
        );
        assert_eq!(
            ArenaBounds::new(0, 5, 4, 1),
            Err(BoundsError::InvalidY { min: 4, max: 1 })
        );
        assert!(ArenaBounds::from_size(0, 5).is_err());
        assert!(ArenaBounds::from_size(5, 0).is_err());
    }

    #[test]
    fn contains_is_inclusive_on_every_edge() {
        let bounds = ArenaBounds::new(-2, 2, 0, 3).expect("extents should be valid");

        assert!(bounds.contains(Position { x: -2, y: 0 }));
        assert!(bounds.contains(Position { x: 2, y: 3 }));
        assert!(bounds.contains(Position { x: 0, y: 1 }));

        assert!(!bounds.contains(Position { x: -3, y: 0 }));
        assert!(!bounds.contains(Position { x: 3, y: 0 }));
        assert!(!bounds.contains(Position { x: 0, y: -1 }));
        assert!(!bounds.contains(Position { x: 0, y: 4 }));
    }

    #[test]
    fn center_rounds_toward_the_minimum_corner() {
        let even = ArenaBounds::from_size(12, 12).expect("12x12 arena should be valid");
        let odd = ArenaBounds::from_size(5, 7).expect("5x7 arena should be valid");

        assert_eq!(even.center(), Position { x: 5, y: 5 });
        assert_eq!(odd.center(), Position { x: 2, y: 3 });
    }

    #[test]
    fn theme_lookup_is_case_insensitive() {
        assert_eq!(theme_named("classic").map(|theme| theme.name), Some("classic"));
        assert_eq!(theme_named("OCEAN").map(|theme| theme.name), Some("ocean"));
        assert_eq!(theme_named("Neon").map(|theme| theme.name), Some("neon"));
        assert!(theme_named("lava").is_none());
    }
}
