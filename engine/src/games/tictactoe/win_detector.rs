use super::board::Board;
use super::types::{Cell, Player, WinningLine, WINNING_LINES};

pub fn check_win(board: &Board) -> Option<Player> {
    check_win_with_line(board).map(|line| line.winner)
}

/// First fully occupied line in [`WINNING_LINES`] order.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    for line in WINNING_LINES {
        let [a, b, c] = line;
        if let Cell::Mark(player) = cells[a]
            && cells[b] == cells[a]
            && cells[c] == cells[a]
        {
            return Some(WinningLine::new(player, line));
        }
    }
    None
}

pub fn is_draw(board: &Board) -> bool {
    board.is_full() && check_win(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(check_win(&Board::new()), None);
    }

    #[test]
    fn test_row_win() {
        let board = Board::from_pattern("... OOO XX.");
        assert_eq!(check_win(&board), Some(Player::O));
        assert_eq!(check_win_with_line(&board).map(|l| l.cells), Some([3, 4, 5]));
    }

    #[test]
    fn test_column_win() {
        let board = Board::from_pattern("OX. .X. OX.");
        assert_eq!(check_win(&board), Some(Player::X));
        assert_eq!(check_win_with_line(&board).map(|l| l.cells), Some([1, 4, 7]));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = Board::from_pattern("XXO XO. O..");
        assert_eq!(
            check_win_with_line(&board),
            Some(WinningLine::new(Player::O, [2, 4, 6]))
        );
    }

    #[test]
    fn test_rows_scanned_before_diagonals() {
        let board = Board::from_pattern("XXX .X. ..X");
        assert_eq!(check_win_with_line(&board).map(|l| l.cells), Some([0, 1, 2]));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_pattern("XOX XOO OXX");
        assert_eq!(check_win(&board), None);
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        let board = Board::from_pattern("XXX OOX OXO");
        assert!(board.is_full());
        assert!(!is_draw(&board));
    }

    fn collect_reachable(board: &mut Board, to_move: Player, seen: &mut Vec<Board>) {
        seen.push(*board);
        if check_win(board).is_some() || board.is_full() {
            return;
        }
        for index in board.empty_indices() {
            board.place(index, to_move);
            collect_reachable(board, to_move.opponent(), seen);
            board.clear(index);
        }
    }

    #[test]
    fn test_reachable_boards_never_have_two_winners() {
        let mut seen = Vec::new();
        collect_reachable(&mut Board::new(), Player::X, &mut seen);
        for board in seen {
            let winners: Vec<Player> = WINNING_LINES
                .iter()
                .filter_map(|&[a, b, c]| {
                    let cells = board.cells();
                    match cells[a] {
                        Cell::Mark(p) if cells[b] == cells[a] && cells[c] == cells[a] => Some(p),
                        _ => None,
                    }
                })
                .collect();
            assert!(
                winners.windows(2).all(|pair| pair[0] == pair[1]),
                "two winners on\n{}",
                board
            );
        }
    }
}
