use tictactoe_engine::games::tictactoe::{Board, Cell, Mode, Player, ScoreLedger, WinningLine};

/// Empty cells show the number to type for them; winning cells are starred.
pub fn render_board(board: &Board, winning_line: Option<WinningLine>) -> String {
    let cells: Vec<String> = board
        .cells()
        .iter()
        .enumerate()
        .map(|(index, cell)| {
            let highlighted = winning_line.is_some_and(|line| line.contains(index));
            match cell {
                Cell::Empty => format!(" {} ", index + 1),
                Cell::Mark(player) if highlighted => format!("*{}*", player),
                Cell::Mark(player) => format!(" {} ", player),
            }
        })
        .collect();

    cells
        .chunks(3)
        .map(|row| row.join("|"))
        .collect::<Vec<_>>()
        .join("\n---+---+---\n")
}

pub fn render_scores(scores: ScoreLedger, mode: Mode) -> String {
    let label = |player: Player| match mode.computer_player() {
        Some(computer) if computer == player => format!("{} (computer)", player),
        _ => player.to_string(),
    };
    format!(
        "{}: {}   {}: {}",
        label(Player::X),
        scores.x_wins,
        label(Player::O),
        scores.o_wins
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::games::tictactoe::Difficulty;
    use tictactoe_engine::games::tictactoe::GameController;
    use tictactoe_engine::games::SessionRng;

    #[test]
    fn test_empty_board_shows_cell_numbers() {
        let rendered = render_board(&Board::new(), None);
        assert_eq!(rendered, " 1 | 2 | 3 \n---+---+---\n 4 | 5 | 6 \n---+---+---\n 7 | 8 | 9 ");
    }

    #[test]
    fn test_winning_line_is_starred() {
        let mut controller = GameController::with_rng(Mode::TwoPlayer, Difficulty::Hard, SessionRng::new(42));
        for index in [0, 4, 1, 5, 2] {
            controller.apply_human_move(index).unwrap();
        }
        let rendered = render_board(&controller.current_board(), controller.winning_line());
        let first_row = rendered.lines().next().unwrap();
        assert_eq!(first_row, "*X*|*X*|*X*");
        assert!(rendered.contains(" 4 | O | O "));
    }

    #[test]
    fn test_scores_mark_the_computer() {
        let scores = ScoreLedger { x_wins: 2, o_wins: 1 };
        assert_eq!(render_scores(scores, Mode::TwoPlayer), "X: 2   O: 1");
        assert_eq!(
            render_scores(scores, Mode::VsComputer(Player::O)),
            "X: 2   O (computer): 1"
        );
    }
}
