use crate::games::{MoveRng, SessionRng};
use crate::log;
use super::board::Board;
use super::bot_controller::calculate_move;
use super::error::IllegalMove;
use super::types::{Cell, Difficulty, GameStatus, Mode, Player, ScoreLedger, WinningLine};
use super::win_detector::{check_win, check_win_with_line};

/// One game session: board, status, scores and the computer opponent.
///
/// Every mutation goes through [`GameController::apply_move`] or the reset
/// methods. When the side to move belongs to the computer, its move is chosen
/// and applied before the triggering call returns.
pub struct GameController<R: MoveRng = SessionRng> {
    board: Board,
    status: GameStatus,
    scores: ScoreLedger,
    mode: Mode,
    difficulty: Difficulty,
    rng: R,
}

impl GameController<SessionRng> {
    pub fn new_session(mode: Mode, difficulty: Difficulty) -> Self {
        Self::with_rng(mode, difficulty, SessionRng::from_random())
    }
}

impl<R: MoveRng> GameController<R> {
    pub fn with_rng(mode: Mode, difficulty: Difficulty, rng: R) -> Self {
        let mut controller = Self {
            board: Board::new(),
            status: GameStatus::InProgress(Player::X),
            scores: ScoreLedger::default(),
            mode,
            difficulty,
            rng,
        };
        controller.reset_round();
        controller
    }

    pub fn current_board(&self) -> Board {
        self.board
    }

    pub fn current_status(&self) -> GameStatus {
        self.status
    }

    pub fn scores(&self) -> ScoreLedger {
        self.scores
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    pub fn computer_player(&self) -> Option<Player> {
        self.mode.computer_player()
    }

    pub fn is_computer_turn(&self) -> bool {
        matches!(self.status, GameStatus::InProgress(player) if Some(player) == self.computer_player())
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        match self.status {
            GameStatus::Won(_) => check_win_with_line(&self.board),
            _ => None,
        }
    }

    pub fn status_message(&self) -> String {
        match self.status {
            GameStatus::InProgress(_) if self.is_computer_turn() => "AI PROCESSING...".to_string(),
            GameStatus::InProgress(player) => format!("PLAYER {} TURN", player),
            GameStatus::Won(player) => format!("PLAYER {} VICTORY", player),
            GameStatus::Draw => "DRAW".to_string(),
        }
    }

    /// Takes effect on the computer's next decision.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if self.difficulty != difficulty {
            log!("Difficulty changed from {} to {}", self.difficulty, difficulty);
        }
        self.difficulty = difficulty;
    }

    /// Switching mode abandons the current round and starts a fresh one.
    pub fn set_mode(&mut self, mode: Mode) {
        log!("Mode changed from {:?} to {:?}", self.mode, mode);
        self.mode = mode;
        self.reset_round();
    }

    /// Move for whoever is on turn. Rejected when the computer is on turn.
    pub fn apply_human_move(&mut self, index: usize) -> Result<GameStatus, IllegalMove> {
        let current = self.status.current_player().ok_or(IllegalMove::GameOver)?;
        if self.computer_player() == Some(current) {
            return Err(IllegalMove::NotCurrentTurn);
        }
        self.apply_move(index, current)
    }

    /// Applies `player`'s mark at `index`, then lets the computer answer if
    /// it is now on turn. Returns the status after both.
    pub fn apply_move(&mut self, index: usize, player: Player) -> Result<GameStatus, IllegalMove> {
        self.place_mark(index, player)?;
        self.play_computer_turn();
        Ok(self.status)
    }

    /// Clears the board and hands the first move to X. Scores are kept.
    pub fn reset_round(&mut self) {
        self.board = Board::new();
        self.status = GameStatus::InProgress(Player::X);
        log!("New round started ({:?}, {})", self.mode, self.difficulty);
        self.play_computer_turn();
    }

    pub fn full_reset(&mut self) {
        self.scores = ScoreLedger::default();
        log!("Scores cleared");
        self.reset_round();
    }

    fn place_mark(&mut self, index: usize, player: Player) -> Result<(), IllegalMove> {
        let current = self.status.current_player().ok_or(IllegalMove::GameOver)?;
        if player != current {
            return Err(IllegalMove::NotCurrentTurn);
        }

        match self.board.get(index) {
            None => return Err(IllegalMove::OutOfRange { index }),
            Some(Cell::Mark(_)) => return Err(IllegalMove::CellOccupied { index }),
            Some(Cell::Empty) => {}
        }

        self.board.place(index, player);
        log!("{} marked cell {}", player, index);

        self.status = if let Some(winner) = check_win(&self.board) {
            self.scores.record_win(winner);
            log!("{} won ({} : {})", winner, self.scores.x_wins, self.scores.o_wins);
            GameStatus::Won(winner)
        } else if self.board.is_full() {
            log!("Round ended in a draw");
            GameStatus::Draw
        } else {
            GameStatus::InProgress(player.opponent())
        };

        Ok(())
    }

    fn play_computer_turn(&mut self) {
        let Some(computer) = self.computer_player() else {
            return;
        };
        if self.status != GameStatus::InProgress(computer) {
            return;
        }

        let Some(index) = calculate_move(&self.board, computer, self.difficulty, &mut self.rng) else {
            return;
        };
        log!("Computer ({}, {}) chose cell {}", computer, self.difficulty, index);

        if let Err(err) = self.place_mark(index, computer) {
            log!("Computer move rejected: {}", err);
        }
    }
}
