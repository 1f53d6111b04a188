use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use minimax_lib::engine;
use minimax_lib::random::{CustomNumberGenerator, StandardRandomGenerator};
use minimax_lib::session::{ENGINE, GameSession, HUMAN, Phase};
use minimax_lib::strategy::{Minimax, RandomStrategy, Strategy};
use std::io::{self, BufRead, Write};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Tic-tac-toe against an engine that never loses
#[derive(Parser, Debug)]
#[command(name = "console")]
#[command(version)]
struct Args {
    /// Let the engine open the first game instead of asking
    #[arg(long)]
    ai_first: bool,

    /// How the engine picks its moves
    #[arg(long, value_enum, default_value_t = Opponent::Minimax)]
    opponent: Opponent,

    /// Seed for the random opponent; omit for a fresh sequence each run
    #[arg(long)]
    seed: Option<i64>,

    /// Pause before the engine answers, in milliseconds
    #[arg(long, default_value_t = 500)]
    delay_ms: u64,

    /// Print the value of every move before asking for yours
    #[arg(long)]
    hints: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Opponent {
    Minimax,
    Random,
}

const POSITION_GUIDE: &str = " 0 | 1 | 2 \n---|---|---\n 3 | 4 | 5 \n---|---|---\n 6 | 7 | 8 ";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    info!(?args, "starting console game");

    let strategy: Box<dyn Strategy> = match (args.opponent, args.seed) {
        (Opponent::Minimax, _) => Box::new(Minimax),
        (Opponent::Random, Some(seed)) => {
            Box::new(RandomStrategy::new(CustomNumberGenerator::new(seed)))
        }
        (Opponent::Random, None) => Box::new(RandomStrategy::<StandardRandomGenerator>::default()),
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("{}", "=".repeat(50));
    println!("Welcome to Tic-Tac-Toe!");
    println!("{}", "=".repeat(50));
    println!(
        "\nYou are '{}' and the engine is '{}'\n",
        HUMAN.symbol(),
        ENGINE.symbol()
    );

    let human_first = if args.ai_first {
        false
    } else {
        ask(&mut lines, "Do you want to go first? (y/n): ")?
    };

    let mut session = GameSession::builder(strategy)
        .with_human_first(human_first)
        .with_engine_delay(Duration::from_millis(args.delay_ms))
        .build();

    loop {
        play(&mut session, &mut lines, args.hints)?;
        if !ask(&mut lines, "\nPlay again? (y/n): ")? {
            break;
        }
        session.reset();
    }

    println!("\nThanks for playing! Goodbye!");
    Ok(())
}

fn play<S, L>(session: &mut GameSession<S>, lines: &mut L, hints: bool) -> Result<()>
where
    S: Strategy,
    L: Iterator<Item = io::Result<String>>,
{
    while !session.is_finished() {
        print_board(session);

        match session.phase() {
            Phase::AwaitingHumanMove => {
                println!("Your turn ({})", HUMAN.symbol());
                if hints {
                    print_hints(session);
                }
                let input = prompt(lines, "Enter position (0-8): ")?;
                let position = match input.trim().parse::<usize>() {
                    Ok(position) => position,
                    Err(_) => {
                        println!("Please enter a valid number!");
                        continue;
                    }
                };
                if let Err(err) = session.play_human(position) {
                    println!("{err}");
                }
            }
            Phase::AwaitingEngineMove => {
                println!("Engine is thinking...");
                std::thread::sleep(session.engine_delay());
                let position = session.play_engine()?;
                println!("Engine played position {position}");
            }
            _ => {}
        }
    }

    print_board(session);
    match session.phase() {
        Phase::Won => println!("Congratulations! You won!"),
        Phase::Lost => println!("The engine wins! Better luck next time!"),
        _ => println!("It's a draw! Well played!"),
    }
    Ok(())
}

fn print_board<S: Strategy>(session: &GameSession<S>) {
    println!("\n{}", session.board());
    println!("Position numbers:\n{POSITION_GUIDE}\n");
}

fn print_hints<S: Strategy>(session: &GameSession<S>) {
    for hint in engine::score_moves(session.board(), HUMAN) {
        let verdict = match hint.score {
            1 => "loses",
            -1 => "wins",
            _ => "draws",
        };
        println!("  {} {}", hint.position, verdict);
    }
}

fn prompt<L>(lines: &mut L, message: &str) -> Result<String>
where
    L: Iterator<Item = io::Result<String>>,
{
    print!("{message}");
    io::stdout().flush()?;
    lines
        .next()
        .context("standard input closed")?
        .context("failed to read standard input")
}

fn ask<L>(lines: &mut L, message: &str) -> Result<bool>
where
    L: Iterator<Item = io::Result<String>>,
{
    Ok(prompt(lines, message)?.trim().eq_ignore_ascii_case("y"))
}
