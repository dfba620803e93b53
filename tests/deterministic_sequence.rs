use runsnake::config::ArenaBounds;
use runsnake::controller::DeathReason;
use runsnake::food::Food;
use runsnake::game::{GameSession, GameStatus};
use runsnake::input::{Direction, GameInput};
use runsnake::snake::Position;

fn arena(width: u16, height: u16) -> ArenaBounds {
    ArenaBounds::from_size(width, height).expect("test arena should be valid")
}

#[test]
fn stepwise_food_collection_and_wall_collision() {
    let mut session = GameSession::new_with_seed(arena(6, 4), 42);
    assert_eq!(session.controller().head(), Position { x: 2, y: 1 });

    // Eat once; growth is deferred until the next move.
    session.food = Food::new(Position { x: 3, y: 1 });
    session.tick();
    assert_eq!(session.status, GameStatus::Playing);
    assert_eq!(session.score, 1);
    assert_eq!(session.snake_length(), 1);
    assert_eq!(session.controller().head(), Position { x: 3, y: 1 });

    // Eat again while the first growth lands.
    session.food = Food::new(Position { x: 4, y: 1 });
    session.tick();
    assert_eq!(session.score, 2);
    assert_eq!(session.snake_length(), 2);
    assert_eq!(session.controller().head(), Position { x: 4, y: 1 });

    session.apply_input(GameInput::Direction(Direction::Up));
    session.tick();
    assert_eq!(session.status, GameStatus::Playing);
    assert_eq!(session.snake_length(), 3);
    assert_eq!(session.controller().head(), Position { x: 4, y: 0 });

    // One more step up leaves the arena.
    session.tick();
    assert_eq!(session.status, GameStatus::GameOver);
    assert_eq!(session.death_reason(), Some(DeathReason::WallCollision));
    assert_eq!(session.controller().head(), Position { x: 4, y: 0 });
}

#[test]
fn reversing_into_the_body_ends_the_run() {
    let mut session = GameSession::new_with_seed(arena(8, 8), 7);
    assert_eq!(session.controller().head(), Position { x: 3, y: 3 });

    session.food = Food::new(Position { x: 4, y: 3 });
    session.tick();
    session.tick();
    assert_eq!(session.snake_length(), 2);
    assert_eq!(session.controller().head(), Position { x: 5, y: 3 });

    // Heading right at length two, a left press turns back into the neck.
    session.apply_input(GameInput::Direction(Direction::Left));
    session.tick();
    assert_eq!(session.status, GameStatus::GameOver);
    assert_eq!(session.death_reason(), Some(DeathReason::SelfCollision));
    assert_eq!(session.controller().head(), Position { x: 5, y: 3 });
    assert_eq!(session.snake_length(), 2);
}

#[test]
fn tail_cell_is_fair_game_until_growth_pins_it() {
    let mut session = GameSession::new_with_seed(arena(6, 6), 11);
    assert_eq!(session.controller().head(), Position { x: 2, y: 2 });

    // Grow to length four along the middle row.
    for x in [3, 4, 5] {
        session.food = Food::new(Position { x, y: 2 });
        session.tick();
    }
    session.food = Food::new(Position { x: 0, y: 0 });
    session.apply_input(GameInput::Direction(Direction::Up));
    session.tick();
    assert_eq!(session.score, 3);
    assert_eq!(session.snake_length(), 4);
    assert_eq!(session.controller().head(), Position { x: 5, y: 1 });

    // A length-four snake circles a two-by-two block, entering the tail
    // cell on every step just as the tail vacates it.
    let loop_turns = [
        Direction::Left,
        Direction::Down,
        Direction::Right,
        Direction::Up,
        Direction::Left,
    ];
    for direction in loop_turns {
        session.apply_input(GameInput::Direction(direction));
        session.tick();
        assert_eq!(session.status, GameStatus::Playing);
        assert_eq!(session.snake_length(), 4);
    }
    assert_eq!(session.controller().head(), Position { x: 4, y: 1 });

    // Eating pins the tail for one tick, so the same loop move now lands
    // on a cell that never vacates.
    session.food = Food::new(Position { x: 4, y: 2 });
    session.apply_input(GameInput::Direction(Direction::Down));
    session.tick();
    assert_eq!(session.score, 4);
    assert_eq!(session.status, GameStatus::Playing);

    session.apply_input(GameInput::Direction(Direction::Right));
    session.tick();
    assert_eq!(session.status, GameStatus::GameOver);
    assert_eq!(session.death_reason(), Some(DeathReason::SelfCollision));
    assert_eq!(session.snake_length(), 4);
}
