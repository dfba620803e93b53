use std::time::Duration;

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{
    ArenaBounds, MIN_TICK_INTERVAL_MS, POINTS_PER_SPEED_LEVEL, SPEED_LEVEL_STEP_MS,
};
use crate::controller::{DeathReason, StepOutcome, TickController};
use crate::food::Food;
use crate::input::{Direction, GameInput};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    Paused,
    GameOver,
    Victory,
}

/// Complete mutable game state for one session.
///
/// Wraps the tick controller with everything the controller deliberately
/// does not know about: food, score, speed level, and the pause and
/// end-of-run bookkeeping.
#[derive(Debug, Clone)]
pub struct GameSession {
    controller: TickController,
    pub food: Food,
    pub score: u32,
    pub speed_level: u32,
    pub tick_count: u64,
    pub status: GameStatus,
    rng: StdRng,
}

impl GameSession {
    /// Creates a session with food placed from OS entropy.
    #[must_use]
    pub fn new(bounds: ArenaBounds) -> Self {
        Self::new_with_seed(bounds, rand::random())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(bounds: ArenaBounds, seed: u64) -> Self {
        debug!("session seeded with {seed}");

        let mut rng = StdRng::seed_from_u64(seed);
        let controller = TickController::new(bounds, bounds.center(), Direction::Right);
        let food = Food::spawn(&mut rng, &controller);

        Self {
            controller,
            food,
            score: 0,
            speed_level: 1,
            tick_count: 0,
            status: GameStatus::Playing,
            rng,
        }
    }

    /// Advances the simulation by one gameplay tick.
    pub fn tick(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }

        self.tick_count += 1;

        match self.controller.step() {
            StepOutcome::GameOver(reason) => {
                info!(
                    "run ended ({reason:?}) after {} ticks with score {}",
                    self.tick_count, self.score
                );
                self.status = GameStatus::GameOver;
            }
            StepOutcome::Moved => {
                if self.controller.head() == self.food.position {
                    self.eat();
                }
            }
        }
    }

    fn eat(&mut self) {
        self.score += self.food.points();
        self.controller.notify_eat();
        self.update_speed_level();

        // A body covering every cell means this food was the last one and
        // there is no free cell left to respawn into.
        if u64::from(self.controller.total_length()) == self.bounds().total_cells() {
            info!("arena filled after {} ticks, victory", self.tick_count);
            self.status = GameStatus::Victory;
            return;
        }

        self.food = Food::spawn(&mut self.rng, &self.controller);
    }

    /// Applies one external input event.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => {
                if self.status == GameStatus::Playing {
                    self.controller.set_direction(direction);
                }
            }
            GameInput::Pause => {
                self.status = match self.status {
                    GameStatus::Playing => GameStatus::Paused,
                    GameStatus::Paused => GameStatus::Playing,
                    other => other,
                };
            }
            GameInput::Quit | GameInput::Confirm => {}
        }
    }

    /// Returns true on the untouched pre-game pause screen.
    #[must_use]
    pub fn is_start_screen(&self) -> bool {
        self.status == GameStatus::Paused && self.tick_count == 0 && self.score == 0
    }

    /// Returns read-only access to the tick controller.
    #[must_use]
    pub fn controller(&self) -> &TickController {
        &self.controller
    }

    /// Returns the arena bounds the session runs in.
    #[must_use]
    pub fn bounds(&self) -> ArenaBounds {
        self.controller.bounds()
    }

    /// Returns the body length in cells.
    #[must_use]
    pub fn snake_length(&self) -> u32 {
        self.controller.total_length()
    }

    /// Returns how the run ended, or `None` while the snake lives.
    #[must_use]
    pub fn death_reason(&self) -> Option<DeathReason> {
        self.controller.death_reason()
    }

    fn update_speed_level(&mut self) {
        self.speed_level = 1 + (self.score / POINTS_PER_SPEED_LEVEL);
    }
}

/// Returns the scheduler period for a base rate and speed level, or `None`
/// when the rate is zero, negative, or NaN, the defined halt signal.
///
/// Each speed level past the first shortens the period, clamped to the
/// minimum playable interval.
#[must_use]
pub fn tick_interval(moves_per_second: f32, speed_level: u32) -> Option<Duration> {
    if moves_per_second.is_nan() || moves_per_second <= 0.0 {
        return None;
    }

    let base_ms = (1000.0 / f64::from(moves_per_second)).round() as u64;
    let speed_penalty_ms = u64::from(speed_level.saturating_sub(1)) * SPEED_LEVEL_STEP_MS;
    let clamped_ms = base_ms
        .saturating_sub(speed_penalty_ms)
        .max(MIN_TICK_INTERVAL_MS);

    Some(Duration::from_millis(clamped_ms))
}
