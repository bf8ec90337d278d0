use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use stonehenge::ai::StrategyKind;
use stonehenge::config::AppConfig;
use stonehenge::game::{Game, Player};
use stonehenge::play::{play_game, play_match};

/// Play Stonehenge between people and search strategies.
#[derive(Parser)]
#[command(name = "stonehenge", about = "Play Stonehenge against minimax search")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "stonehenge.toml")]
    config: PathBuf,

    /// Override the board size
    #[arg(long)]
    board_size: Option<usize>,

    /// Strategy for p1: interactive, random, recursive, iterative or rough
    #[arg(long)]
    p1: Option<StrategyKind>,

    /// Strategy for p2
    #[arg(long)]
    p2: Option<StrategyKind>,

    /// Let p2 move first
    #[arg(long)]
    second: bool,

    /// Number of games to play
    #[arg(long)]
    games: Option<usize>,

    /// Seed for the random strategy
    #[arg(long)]
    seed: Option<u64>,

    /// Do not print the board after each move
    #[arg(long)]
    quiet: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(size) = cli.board_size {
        config.board.size = size;
    }
    if let Some(kind) = cli.p1 {
        config.players.p1 = kind;
    }
    if let Some(kind) = cli.p2 {
        config.players.p2 = kind;
    }
    if cli.second {
        config.players.first = Player::Two;
    }
    if let Some(games) = cli.games {
        config.play.games = games;
    }
    if cli.seed.is_some() {
        config.players.seed = cli.seed;
    }
    if cli.quiet {
        config.play.show_board = false;
    }
    config.validate().context("invalid configuration")?;

    let game = config.build_game().context("building the board")?;
    let mut p1 = config.players.p1.build(config.players.seed);
    // Distinct streams when both sides play randomly
    let mut p2 = config
        .players
        .p2
        .build(config.players.seed.map(|seed| seed.wrapping_add(1)));

    if config.play.games == 1 {
        let show_board = config.play.show_board;
        if show_board {
            println!("{}\n", Game::instructions());
            print_position(&game);
        }
        let record = play_game(game, p1.as_mut(), p2.as_mut(), |game| {
            if show_board {
                print_position(game);
            }
        })
        .context("playing the game")?;

        match record.winner {
            Some(winner) => println!("{winner} wins after {} moves", record.game_length()),
            None => println!("No winner after {} moves", record.game_length()),
        }
    } else {
        let results = play_match(&game, config.play.games, p1.as_mut(), p2.as_mut())
            .context("playing the match")?;
        println!(
            "{} ({}) vs {} ({}) over {} games",
            p1.name(),
            Player::One,
            p2.name(),
            Player::Two,
            results.games()
        );
        println!(
            "  p1 wins: {} ({:.1}%)",
            results.p1_wins,
            results.win_rate(Player::One) * 100.0
        );
        println!(
            "  p2 wins: {} ({:.1}%)",
            results.p2_wins,
            results.win_rate(Player::Two) * 100.0
        );
        println!("  draws:   {}", results.draws);
        println!("  average length: {:.1} moves", results.average_game_length());
    }

    Ok(())
}

fn print_position(game: &Game) {
    let state = game.current_state();
    println!("{state}\n{}\n", state.summary());
}
