use std::io;
use std::panic;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use log::warn;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use runsnake::config::{
    theme_named, ArenaBounds, Theme, DEFAULT_ARENA_HEIGHT, DEFAULT_ARENA_WIDTH,
    DEFAULT_MOVES_PER_SECOND, THEMES,
};
use runsnake::game::{tick_interval, GameSession, GameStatus};
use runsnake::input::{GameInput, InputHandler};
use runsnake::renderer;
use runsnake::score::{self, ScoreRecord};
use runsnake::ui::hud::HudInfo;

#[derive(Debug, Parser)]
#[command(version, about = "Terminal snake with a run-length body model")]
struct Cli {
    /// Arena width in cells.
    #[arg(long, default_value_t = DEFAULT_ARENA_WIDTH,
          value_parser = clap::value_parser!(u16).range(4..=256))]
    width: u16,

    /// Arena height in cells.
    #[arg(long, default_value_t = DEFAULT_ARENA_HEIGHT,
          value_parser = clap::value_parser!(u16).range(4..=256))]
    height: u16,

    /// Base snake speed in moves per second.
    #[arg(long, default_value_t = DEFAULT_MOVES_PER_SECOND)]
    speed: f32,

    /// Seed for reproducible food placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Color theme to render with.
    #[arg(long, default_value = "classic")]
    theme: String,
}

fn main() -> io::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let theme = resolve_theme(&cli.theme)?;
    let bounds = ArenaBounds::from_size(cli.width, cli.height)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidInput, error))?;

    // Read the saved record before raw mode so a corrupt file warns on a
    // usable terminal instead of garbling the alternate screen.
    let record = match score::load_record() {
        Ok(record) => record,
        Err(error) => {
            eprintln!("Could not read saved scores, starting fresh: {error}");
            ScoreRecord::default()
        }
    };

    install_panic_hook();

    run(&cli, theme, bounds, record)?;
    cleanup_terminal()?;
    Ok(())
}

fn run(
    cli: &Cli,
    theme: &'static Theme,
    bounds: ArenaBounds,
    mut record: ScoreRecord,
) -> io::Result<()> {
    let mut terminal = setup_terminal()?;
    let mut input = InputHandler::new();
    let mut session = new_session(bounds, cli.seed);

    let mut last_tick = Instant::now();
    let mut last_status = session.status;

    loop {
        terminal.draw(|frame| renderer::render(frame, &session, &HudInfo { record, theme }))?;

        let mut quit = false;
        while let Some(game_input) = input.poll_input()? {
            if matches!(game_input, GameInput::Quit) {
                quit = true;
                break;
            }

            handle_input(&mut session, game_input, cli.seed);
        }
        if quit {
            break;
        }

        if let Some(interval) = tick_interval(cli.speed, session.speed_level) {
            if last_tick.elapsed() >= interval {
                session.tick();
                last_tick = Instant::now();
            }
        }

        if session.status != last_status {
            if matches!(session.status, GameStatus::GameOver | GameStatus::Victory)
                && record.absorb(session.score, session.snake_length())
            {
                if let Err(error) = score::save_record(record) {
                    warn!("could not save scores: {error}");
                }
            }

            last_status = session.status;
        }

        thread::sleep(Duration::from_millis(16));
    }

    Ok(())
}

fn handle_input(session: &mut GameSession, input: GameInput, seed: Option<u64>) {
    match input {
        GameInput::Confirm if session.is_start_screen() => {
            session.status = GameStatus::Playing;
        }
        GameInput::Confirm
            if matches!(session.status, GameStatus::GameOver | GameStatus::Victory) =>
        {
            *session = new_session(session.bounds(), seed);
        }
        other => session.apply_input(other),
    }
}

/// Builds a fresh session parked on the start screen.
fn new_session(bounds: ArenaBounds, seed: Option<u64>) -> GameSession {
    let mut session = match seed {
        Some(seed) => GameSession::new_with_seed(bounds, seed),
        None => GameSession::new(bounds),
    };
    session.status = GameStatus::Paused;
    session
}

fn resolve_theme(name: &str) -> io::Result<&'static Theme> {
    theme_named(name).ok_or_else(|| {
        let known = THEMES
            .iter()
            .map(|theme| theme.name)
            .collect::<Vec<_>>()
            .join(", ");
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("unknown theme {name:?}, expected one of: {known}"),
        )
    })
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn cleanup_terminal() -> io::Result<()> {
    disable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)?;

    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal_after_panic();
        default_hook(panic_info);
    }));
}

fn restore_terminal_after_panic() {
    let _ = disable_raw_mode();

    let mut stdout = io::stdout();
    let _ = execute!(stdout, Show, LeaveAlternateScreen);
}
