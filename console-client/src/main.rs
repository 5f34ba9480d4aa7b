mod commands;
mod config;
mod render;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use tictactoe_engine::config::{Opponent, SessionConfig};
use tictactoe_engine::games::SessionRng;
use tictactoe_engine::games::tictactoe::{Difficulty, GameController, Player};
use tictactoe_engine::{log, logger};

use commands::{parse_command, parse_difficulty, parse_player, Command, HELP};
use config::{get_config_manager, ConfigOverrides};
use render::{render_board, render_scores};

#[derive(Parser)]
#[command(name = "tictactoe_console", about = "Tic-tac-toe against a friend or the computer")]
struct Args {
    /// Settings file (defaults to tictactoe_console.yaml next to the executable)
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_parser = parse_opponent)]
    opponent: Option<Opponent>,

    #[arg(long, value_parser = parse_player)]
    computer_plays: Option<Player>,

    #[arg(long, value_parser = parse_difficulty)]
    difficulty: Option<Difficulty>,

    /// Seed for the computer's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Write the effective settings back to the settings file
    #[arg(long)]
    save_config: bool,

    /// Log engine events to stderr
    #[arg(long)]
    verbose: bool,
}

fn parse_opponent(value: &str) -> Result<Opponent, String> {
    match value.to_ascii_lowercase().as_str() {
        "human" => Ok(Opponent::Human),
        "computer" => Ok(Opponent::Computer),
        other => Err(format!("Unknown opponent '{}'", other)),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config.clone());
    let overrides = ConfigOverrides {
        opponent: args.opponent,
        computer_plays: args.computer_plays,
        difficulty: args.difficulty,
        seed: args.seed,
    };
    let session_config = overrides.apply(config_manager.get_config()?);

    if args.verbose {
        logger::init_logger(session_config.log_prefix.clone());
    }

    if args.save_config {
        config_manager.set_config(&session_config)?;
        log!("Settings saved");
    }

    let mut controller = create_controller(&session_config);
    log!("Session seed {}", controller.rng().seed());

    run(&mut controller, io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}

fn create_controller(session_config: &SessionConfig) -> GameController<SessionRng> {
    let rng = match session_config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    GameController::with_rng(session_config.mode(), session_config.difficulty, rng)
}

fn run<I: BufRead, O: Write>(
    controller: &mut GameController<SessionRng>,
    input: I,
    mut output: O,
) -> io::Result<()> {
    writeln!(output, "{}", HELP)?;
    print_game(controller, &mut output)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => writeln!(output, "{}", HELP)?,
            Ok(Command::Place(index)) => {
                if let Err(err) = controller.apply_human_move(index) {
                    writeln!(output, "{}", err)?;
                    continue;
                }
                print_game(controller, &mut output)?;
            }
            Ok(Command::NewRound) => {
                controller.reset_round();
                print_game(controller, &mut output)?;
            }
            Ok(Command::FullReset) => {
                controller.full_reset();
                print_game(controller, &mut output)?;
            }
            Ok(Command::SetMode(mode)) => {
                controller.set_mode(mode);
                print_game(controller, &mut output)?;
            }
            Ok(Command::SetDifficulty(difficulty)) => {
                controller.set_difficulty(difficulty);
                writeln!(output, "Difficulty: {}", difficulty)?;
            }
            Err(message) => writeln!(output, "{}", message)?,
        }
    }

    Ok(())
}

fn print_game<O: Write>(controller: &GameController<SessionRng>, output: &mut O) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "{}", render_board(&controller.current_board(), controller.winning_line()))?;
    writeln!(output, "{}", controller.status_message())?;
    writeln!(output, "{}", render_scores(controller.scores(), controller.mode()))?;
    output.flush()
}
