use super::board::Board;
use super::types::Player;
use super::win_detector::check_win;

const WIN_SCORE: i32 = 10;

/// Exhaustive minimax to terminal positions.
///
/// Scores are from `bot_player`'s point of view and depth-adjusted: a win
/// found at `depth` scores `10 - depth`, a loss `depth - 10`, a draw `0`.
/// Every hypothetical placement is undone before returning, so `board` is
/// left as it was passed in.
pub fn search(board: &mut Board, bot_player: Player, ply_player: Player, depth: i32) -> i32 {
    match check_win(board) {
        Some(winner) if winner == bot_player => return WIN_SCORE - depth,
        Some(_) => return depth - WIN_SCORE,
        None => {}
    }

    if board.is_full() {
        return 0;
    }

    let is_maximizing = ply_player == bot_player;
    let mut best = if is_maximizing { i32::MIN } else { i32::MAX };

    for index in board.empty_indices() {
        board.place(index, ply_player);
        let score = search(board, bot_player, ply_player.opponent(), depth + 1);
        board.clear(index);

        best = if is_maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

/// Optimal move for `player`, or `None` on a full board.
///
/// Ties go to the lowest index: the best score is only replaced by a
/// strictly greater one.
pub fn best_move(board: &Board, player: Player) -> Option<usize> {
    let mut scratch = *board;
    let mut best: Option<(usize, i32)> = None;

    for index in board.empty_indices() {
        scratch.place(index, player);
        let score = search(&mut scratch, player, player.opponent(), 0);
        scratch.clear(index);

        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((index, score)),
        }
    }

    best.map(|(index, _)| index)
}
