use rand::Rng;

use crate::controller::TickController;
use crate::snake::Position;

/// Food entity currently active on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Creates food at `position`.
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Returns the score value granted when eaten.
    #[must_use]
    pub fn points(self) -> u32 {
        1
    }

    /// Spawns food in an unoccupied cell.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, controller: &TickController) -> Self {
        Self::new(spawn_position(rng, controller))
    }
}

/// Picks a uniformly random cell the snake does not currently occupy.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(rng: &mut R, controller: &TickController) -> Position {
    let bounds = controller.bounds();
    let mut candidates = Vec::new();

    for y in bounds.min_y()..=bounds.max_y() {
        for x in bounds.min_x()..=bounds.max_x() {
            let position = Position { x, y };
            if !controller.occupies(position) {
                candidates.push(position);
            }
        }
    }

    assert!(
        !candidates.is_empty(),
        "spawn_position: no free cells in the {}x{} arena",
        bounds.width(),
        bounds.height(),
    );

    let index = rng.gen_range(0..candidates.len());
    candidates[index]
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::config::ArenaBounds;
    use crate::controller::{StepOutcome, TickController};
    use crate::input::Direction;
    use crate::snake::Position;

    use super::{spawn_position, Food};

    #[test]
    fn food_spawn_never_overlaps_the_snake() {
        let bounds = ArenaBounds::from_size(8, 6).expect("test arena should be valid");
        let mut controller = TickController::new(bounds, Position { x: 1, y: 1 }, Direction::Right);

        controller.notify_eat();
        assert_eq!(controller.step(), StepOutcome::Moved);
        controller.notify_eat();
        assert_eq!(controller.step(), StepOutcome::Moved);
        assert_eq!(controller.total_length(), 3);

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let food_position = spawn_position(&mut rng, &controller);
            assert!(!controller.occupies(food_position));
            assert!(bounds.contains(food_position));
        }
    }

    #[test]
    fn food_spawn_finds_the_single_free_cell() {
        let bounds = ArenaBounds::from_size(2, 2).expect("test arena should be valid");
        let mut controller = TickController::new(bounds, Position { x: 0, y: 0 }, Direction::Right);

        controller.notify_eat();
        assert_eq!(controller.step(), StepOutcome::Moved);
        controller.notify_eat();
        controller.set_direction(Direction::Down);
        assert_eq!(controller.step(), StepOutcome::Moved);
        assert_eq!(controller.total_length(), 3);

        let mut rng = StdRng::seed_from_u64(42);
        let food = Food::spawn(&mut rng, &controller);

        assert_eq!(food.position, Position { x: 0, y: 1 });
        assert_eq!(food.points(), 1);
    }
}
