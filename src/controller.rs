use log::{debug, info};

use crate::config::ArenaBounds;
use crate::input::Direction;
use crate::snake::{Position, Snake};

/// Why a run ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Result of one simulation step.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StepOutcome {
    /// The move committed and the body layout changed.
    Moved,
    /// The move was rejected; the controller processes no further steps.
    GameOver(DeathReason),
}

/// Drives one snake through discrete simulation steps.
///
/// Owns the body model, its head anchor cell, the eat latch, and the
/// desired-direction register. The register is a single slot with
/// last-write-wins semantics: writes may arrive at any time between steps,
/// and each step reads whatever was written most recently, falling back to
/// the current facing when nothing new arrived.
#[derive(Debug, Clone)]
pub struct TickController {
    bounds: ArenaBounds,
    snake: Snake,
    head: Position,
    desired: Direction,
    eat_pending: bool,
    game_over: Option<DeathReason>,
}

impl TickController {
    /// Creates a controller with a single-cell snake at `start`.
    #[must_use]
    pub fn new(bounds: ArenaBounds, start: Position, facing: Direction) -> Self {
        debug_assert!(
            bounds.contains(start),
            "start cell must be inside the arena"
        );

        Self {
            bounds,
            snake: Snake::new(facing),
            head: start,
            desired: facing,
            eat_pending: false,
            game_over: None,
        }
    }

    /// Records the desired direction for the next step, replacing any
    /// earlier write since the last step.
    pub fn set_direction(&mut self, direction: Direction) {
        self.desired = direction;
    }

    /// Latches one pending growth, applied by the next step.
    pub fn notify_eat(&mut self) {
        debug!("eat latched at head ({}, {})", self.head.x, self.head.y);
        self.eat_pending = true;
    }

    /// Advances the simulation by one step.
    ///
    /// Reads the direction register, consumes the eat latch, then checks the
    /// destination against the walls and the pre-move body before committing
    /// the move. Once a step returns [`StepOutcome::GameOver`] the
    /// controller is terminal and every later call returns the same reason
    /// without touching the body.
    pub fn step(&mut self) -> StepOutcome {
        if let Some(reason) = self.game_over {
            return StepOutcome::GameOver(reason);
        }

        let direction = self.desired;
        let eating = self.eat_pending;
        self.eat_pending = false;

        let destination = self.head.step(direction);

        if !self.bounds.contains(destination) {
            info!("snake hit wall at ({}, {})", destination.x, destination.y);
            return self.finish(DeathReason::WallCollision);
        }

        if self.hits_body(direction, destination, eating) {
            info!(
                "snake hit its own body at ({}, {})",
                destination.x, destination.y
            );
            return self.finish(DeathReason::SelfCollision);
        }

        if self.snake.total_length() == 1 && !eating {
            self.snake.slide(direction);
        } else {
            self.snake.grow(direction);
            if !eating {
                self.snake.shrink();
            }
        }
        self.head = destination;

        StepOutcome::Moved
    }

    /// Returns true when moving toward `destination` collides with the
    /// pre-move body.
    ///
    /// The tail cell does not count when it vacates this very step. A 180
    /// degree reversal of a grown body is always a hit: the head sweeps back
    /// through its own neck before the tail could move anywhere.
    fn hits_body(&self, direction: Direction, destination: Position, eating: bool) -> bool {
        if self.snake.total_length() >= 2 && direction == self.snake.current_facing().opposite() {
            return true;
        }

        let tail_vacates = !eating;
        let mut cells = self.snake.cells(self.head).peekable();
        while let Some(cell) = cells.next() {
            if cell == destination {
                let is_tail = cells.peek().is_none();
                return !(is_tail && tail_vacates);
            }
        }

        false
    }

    fn finish(&mut self, reason: DeathReason) -> StepOutcome {
        self.game_over = Some(reason);
        StepOutcome::GameOver(reason)
    }

    /// Returns the head cell.
    #[must_use]
    pub fn head(&self) -> Position {
        self.head
    }

    /// Returns read-only access to the body model.
    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Returns the direction of the most recent committed move.
    #[must_use]
    pub fn current_facing(&self) -> Direction {
        self.snake.current_facing()
    }

    /// Returns the body length in cells.
    #[must_use]
    pub fn total_length(&self) -> u32 {
        self.snake.total_length()
    }

    /// Returns true when any body cell covers `cell`, the head included.
    #[must_use]
    pub fn occupies(&self, cell: Position) -> bool {
        self.snake.occupies(self.head, cell)
    }

    /// Returns the arena bounds the controller was configured with.
    #[must_use]
    pub fn bounds(&self) -> ArenaBounds {
        self.bounds
    }

    /// Returns how the run ended, or `None` while still running.
    #[must_use]
    pub fn death_reason(&self) -> Option<DeathReason> {
        self.game_over
    }

    /// Returns true once a step has been rejected.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over.is_some()
    }
}
