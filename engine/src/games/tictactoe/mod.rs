mod board;
mod bot_controller;
mod error;
mod game_controller;
mod minimax;
mod types;
mod win_detector;

pub use board::{Board, CELL_COUNT};
pub use bot_controller::{calculate_move, EASY_RANDOM_CHANCE, MEDIUM_RANDOM_CHANCE};
pub use error::IllegalMove;
pub use game_controller::GameController;
pub use minimax::{best_move, search};
pub use types::{Cell, Difficulty, GameStatus, Mode, Player, ScoreLedger, WinningLine, WINNING_LINES};
pub use win_detector::{check_win, check_win_with_line, is_draw};
