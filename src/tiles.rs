use crate::input::Direction;
use crate::snake::{Position, Snake};

/// Visual classification of one body cell.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TileKind {
    /// Interior cell of a run, entered and left along the same direction.
    Straight(Direction),
    /// Corner cell entered along `from` and left along `to`.
    Bend { from: Direction, to: Direction },
    /// Rearmost cell, opening toward its head-ward neighbor.
    Tail(Direction),
}

/// Classifies one body cell from its entry and exit directions.
///
/// The entry direction is ignored for tail cells, which render the same
/// regardless of how the snake once moved through them.
///
/// # Panics
///
/// Panics on a non-tail cell whose exit reverses its entry; no bend glyph
/// joins a direction to its opposite, and the movement rules never commit
/// such a cell.
#[must_use]
pub fn classify(from: Direction, to: Direction, is_tail: bool) -> TileKind {
    if is_tail {
        return TileKind::Tail(to);
    }
    if from == to {
        return TileKind::Straight(to);
    }

    assert!(
        to != from.opposite(),
        "no bend tile joins {from:?} into {to:?}"
    );
    TileKind::Bend { from, to }
}

/// Derives the renderable tile for every cell behind the head.
///
/// Walks the body from the head cell at `head` and pairs each cell with its
/// classification. A cell's entry direction is the direction of the run
/// that laid it; its exit direction is the run direction of its head-ward
/// neighbor. The head cell itself is skipped, it renders by facing alone.
#[must_use]
pub fn body_tiles(snake: &Snake, head: Position) -> Vec<(Position, TileKind)> {
    let total = snake.total_length();
    let mut tiles = Vec::with_capacity(total.saturating_sub(1) as usize);

    let mut cells = snake.cells(head);
    let mut emitted: u32 = 0;
    let mut exit_direction: Option<Direction> = None;

    for run in snake.runs() {
        for _ in 0..run.length {
            let cell = cells
                .next()
                .expect("cell walk must cover every run cell");
            emitted += 1;

            if let Some(to) = exit_direction {
                let is_tail = emitted == total;
                tiles.push((cell, classify(run.direction, to, is_tail)));
            }

            exit_direction = Some(run.direction);
        }
    }

    tiles
}

#[cfg(test)]
mod tests {
    use crate::input::Direction;
    use crate::snake::{Position, Snake};

    use super::{body_tiles, classify, TileKind};

    const ALL_DIRECTIONS: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    #[test]
    fn matching_directions_classify_as_straight() {
        for direction in ALL_DIRECTIONS {
            assert_eq!(
                classify(direction, direction, false),
                TileKind::Straight(direction)
            );
        }
    }

    #[test]
    fn turning_directions_classify_as_bend() {
        assert_eq!(
            classify(Direction::Right, Direction::Up, false),
            TileKind::Bend {
                from: Direction::Right,
                to: Direction::Up,
            }
        );
        assert_eq!(
            classify(Direction::Down, Direction::Left, false),
            TileKind::Bend {
                from: Direction::Down,
                to: Direction::Left,
            }
        );
    }

    #[test]
    fn tail_cells_classify_by_exit_direction_alone() {
        for from in ALL_DIRECTIONS {
            for to in ALL_DIRECTIONS {
                assert_eq!(classify(from, to, true), TileKind::Tail(to));
            }
        }
    }

    #[test]
    fn every_reachable_direction_pair_has_a_stable_kind() {
        for from in ALL_DIRECTIONS {
            for to in ALL_DIRECTIONS {
                if to == from.opposite() {
                    continue;
                }

                let kind = classify(from, to, false);
                if from == to {
                    assert_eq!(kind, TileKind::Straight(to));
                } else {
                    assert_eq!(kind, TileKind::Bend { from, to });
                }
                assert_eq!(classify(from, to, false), kind);
            }
        }
    }

    #[test]
    #[should_panic(expected = "no bend tile")]
    fn reversal_bends_fail_loudly() {
        let _ = classify(Direction::Right, Direction::Left, false);
    }

    #[test]
    fn straight_body_yields_straight_tiles_and_one_tail() {
        let mut snake = Snake::new(Direction::Right);
        snake.grow(Direction::Right);
        snake.grow(Direction::Right);

        let tiles = body_tiles(&snake, Position { x: 4, y: 2 });

        assert_eq!(
            tiles,
            vec![
                (Position { x: 3, y: 2 }, TileKind::Straight(Direction::Right)),
                (Position { x: 2, y: 2 }, TileKind::Tail(Direction::Right)),
            ]
        );
    }

    #[test]
    fn corner_cells_bend_from_their_run_toward_the_next() {
        let mut snake = Snake::new(Direction::Right);
        snake.grow(Direction::Right);
        snake.grow(Direction::Right);
        snake.grow(Direction::Up);

        let tiles = body_tiles(&snake, Position { x: 2, y: 1 });

        assert_eq!(
            tiles,
            vec![
                (
                    Position { x: 2, y: 2 },
                    TileKind::Bend {
                        from: Direction::Right,
                        to: Direction::Up,
                    },
                ),
                (Position { x: 1, y: 2 }, TileKind::Straight(Direction::Right)),
                (Position { x: 0, y: 2 }, TileKind::Tail(Direction::Right)),
            ]
        );
    }

    #[test]
    fn spent_tail_run_points_the_tail_at_its_neighbor() {
        // Three collinear cells whose tail run still records the rightward
        // move that laid it; the tail glyph must open upward regardless.
        let mut snake = Snake::new(Direction::Right);
        snake.grow(Direction::Right);
        snake.grow(Direction::Up);
        snake.grow(Direction::Up);
        snake.shrink();

        assert_eq!(snake.tail_facing(), Direction::Right);

        let tiles = body_tiles(&snake, Position { x: 0, y: 0 });

        assert_eq!(
            tiles,
            vec![
                (Position { x: 0, y: 1 }, TileKind::Straight(Direction::Up)),
                (Position { x: 0, y: 2 }, TileKind::Tail(Direction::Up)),
            ]
        );
    }

    #[test]
    fn reversed_single_cell_growth_still_classifies() {
        // A one-cell snake may legally reverse while eating, leaving the
        // tail run pointing opposite the head run.
        let mut snake = Snake::new(Direction::Right);
        snake.grow(Direction::Left);

        let tiles = body_tiles(&snake, Position { x: 0, y: 0 });

        assert_eq!(
            tiles,
            vec![(Position { x: 1, y: 0 }, TileKind::Tail(Direction::Left))]
        );
    }

    #[test]
    fn zig_zag_body_classifies_every_cell() {
        let mut snake = Snake::new(Direction::Up);
        snake.grow(Direction::Up);
        snake.grow(Direction::Right);
        snake.grow(Direction::Right);
        snake.grow(Direction::Down);
        snake.grow(Direction::Down);

        let tiles = body_tiles(&snake, Position { x: 3, y: 2 });

        assert_eq!(
            tiles,
            vec![
                (Position { x: 3, y: 1 }, TileKind::Straight(Direction::Down)),
                (
                    Position { x: 3, y: 0 },
                    TileKind::Bend {
                        from: Direction::Right,
                        to: Direction::Down,
                    },
                ),
                (Position { x: 2, y: 0 }, TileKind::Straight(Direction::Right)),
                (
                    Position { x: 1, y: 0 },
                    TileKind::Bend {
                        from: Direction::Up,
                        to: Direction::Right,
                    },
                ),
                (Position { x: 1, y: 1 }, TileKind::Tail(Direction::Up)),
            ]
        );
    }

    #[test]
    fn single_cell_body_has_no_body_tiles() {
        let snake = Snake::new(Direction::Down);

        let tiles = body_tiles(&snake, Position { x: 5, y: 5 });

        assert!(tiles.is_empty());
    }
}
