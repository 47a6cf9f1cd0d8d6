use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use connect_four_minimax::ai::MinimaxAgent;
use connect_four_minimax::config::AppConfig;
use connect_four_minimax::game::GameState;
use connect_four_minimax::ui::{run_console, App};

/// Play Connect Four against a minimax computer opponent.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against the computer")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override search depth in plies
    #[arg(long)]
    depth: Option<usize>,

    /// Seed the computer's tie-breaks for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Let the computer make the first move
    #[arg(long)]
    computer_first: bool,

    /// Play in a plain line-based console instead of the terminal UI
    #[arg(long)]
    plain: bool,

    /// In plain mode, also print the board as JSON after every move
    #[arg(long, requires = "plain")]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(depth) = cli.depth {
        app_config.search.depth = depth;
    }
    if cli.seed.is_some() {
        app_config.search.seed = cli.seed;
    }
    if cli.computer_first {
        app_config.game.human_first = false;
    }
    app_config.validate().context("invalid settings")?;

    info!(
        depth = app_config.search.depth,
        seed = ?app_config.search.seed,
        first = app_config.game.first_player().name(),
        "starting game"
    );

    let agent = MinimaxAgent::from_config(&app_config.search);
    let first = app_config.game.first_player();

    if cli.plain {
        let mut state = GameState::with_first_player(first);
        let mut agent = agent;
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        run_console(&mut state, &mut agent, stdin.lock(), &mut stdout, cli.json)?;
        return Ok(());
    }

    run_tui(App::new(Box::new(agent), first)).context("terminal UI failed")
}

fn run_tui(mut app: App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal even when the app errored
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
