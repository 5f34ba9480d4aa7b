use tictactoe_engine::games::tictactoe::{Difficulty, Mode, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(usize),
    NewRound,
    FullReset,
    SetMode(Mode),
    SetDifficulty(Difficulty),
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  1-9                      mark a cell (numbered left to right, top to bottom)
  new                      start a new round, scores are kept
  reset                    start over and clear the scores
  mode two|x|o             two players, or a computer playing X or O
  difficulty easy|medium|hard
  help                     show this text
  quit";

pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Err("Empty command".to_string());
    };
    let argument = words.next();

    if let Ok(cell) = head.parse::<usize>() {
        return match cell {
            1..=9 => Ok(Command::Place(cell - 1)),
            _ => Err(format!("Cell must be between 1 and 9, got {}", cell)),
        };
    }

    match head.to_ascii_lowercase().as_str() {
        "new" | "n" => Ok(Command::NewRound),
        "reset" => Ok(Command::FullReset),
        "help" | "h" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        "mode" | "m" => argument
            .ok_or_else(|| "Usage: mode two|x|o".to_string())
            .and_then(parse_mode)
            .map(Command::SetMode),
        "difficulty" | "d" => argument
            .ok_or_else(|| "Usage: difficulty easy|medium|hard".to_string())
            .and_then(parse_difficulty)
            .map(Command::SetDifficulty),
        other => Err(format!("Unknown command '{}', type 'help'", other)),
    }
}

pub fn parse_difficulty(value: &str) -> Result<Difficulty, String> {
    match value.to_ascii_lowercase().as_str() {
        "easy" => Ok(Difficulty::Easy),
        "medium" => Ok(Difficulty::Medium),
        "hard" => Ok(Difficulty::Hard),
        other => Err(format!("Unknown difficulty '{}'", other)),
    }
}

pub fn parse_player(value: &str) -> Result<Player, String> {
    match value.to_ascii_lowercase().as_str() {
        "x" => Ok(Player::X),
        "o" => Ok(Player::O),
        other => Err(format!("Unknown player '{}'", other)),
    }
}

fn parse_mode(value: &str) -> Result<Mode, String> {
    match value.to_ascii_lowercase().as_str() {
        "two" | "pvp" => Ok(Mode::TwoPlayer),
        other => parse_player(other).map(Mode::VsComputer),
    }
}
