use crate::games::MoveRng;
use super::board::Board;
use super::minimax::best_move;
use super::types::{Difficulty, Player};

pub const EASY_RANDOM_CHANCE: f64 = 0.6;
pub const MEDIUM_RANDOM_CHANCE: f64 = 0.3;

/// Picks the computer's move for `player`, or `None` on a full board.
///
/// The tiers form one cascade: Easy first rolls its own chance of a random
/// move, and on a miss falls through to Medium's roll, which in turn falls
/// through to the optimal move. Hard never rolls.
pub fn calculate_move<R: MoveRng + ?Sized>(
    board: &Board,
    player: Player,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<usize> {
    let available_moves = board.empty_indices();
    if available_moves.is_empty() {
        return None;
    }

    if difficulty <= Difficulty::Easy && rng.random_unit() < EASY_RANDOM_CHANCE {
        return Some(random_move(&available_moves, rng));
    }

    if difficulty <= Difficulty::Medium && rng.random_unit() < MEDIUM_RANDOM_CHANCE {
        return Some(random_move(&available_moves, rng));
    }

    best_move(board, player)
}

fn random_move<R: MoveRng + ?Sized>(available_moves: &[usize], rng: &mut R) -> usize {
    available_moves[rng.random_index(available_moves.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::{ScriptedRng, SessionRng};

    // O to move; the only sound reply is 2. Empty cells: 2, 3, 5, 6, 7, 8.
    fn threatened_board() -> Board {
        Board::from_pattern("XX. .O. ...")
    }

    #[test]
    fn test_hard_never_rolls() {
        let mut rng = ScriptedRng::new(&[0.0, 0.0], &[5]);
        let chosen = calculate_move(&threatened_board(), Player::O, Difficulty::Hard, &mut rng);
        assert_eq!(chosen, Some(2));
        assert_eq!(rng.units_drawn, 0);
    }

    #[test]
    fn test_easy_random_hit() {
        let mut rng = ScriptedRng::new(&[0.5], &[2]);
        let chosen = calculate_move(&threatened_board(), Player::O, Difficulty::Easy, &mut rng);
        assert_eq!(chosen, Some(5));
        assert_eq!(rng.units_drawn, 1);
    }

    #[test]
    fn test_easy_miss_falls_into_medium_roll() {
        let mut rng = ScriptedRng::new(&[0.7, 0.1], &[4]);
        let chosen = calculate_move(&threatened_board(), Player::O, Difficulty::Easy, &mut rng);
        assert_eq!(chosen, Some(7));
        assert_eq!(rng.units_drawn, 2);
    }

    #[test]
    fn test_easy_double_miss_plays_optimally() {
        let mut rng = ScriptedRng::new(&[0.7, 0.5], &[]);
        let chosen = calculate_move(&threatened_board(), Player::O, Difficulty::Easy, &mut rng);
        assert_eq!(chosen, Some(2));
        assert_eq!(rng.units_drawn, 2);
    }

    #[test]
    fn test_medium_random_hit() {
        let mut rng = ScriptedRng::new(&[0.2], &[1]);
        let chosen = calculate_move(&threatened_board(), Player::O, Difficulty::Medium, &mut rng);
        assert_eq!(chosen, Some(3));
        assert_eq!(rng.units_drawn, 1);
    }

    #[test]
    fn test_medium_threshold_is_exclusive() {
        let mut rng = ScriptedRng::new(&[MEDIUM_RANDOM_CHANCE], &[]);
        let chosen = calculate_move(&threatened_board(), Player::O, Difficulty::Medium, &mut rng);
        assert_eq!(chosen, Some(2));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = Board::from_pattern("XOX XOO OXX");
        let mut rng = SessionRng::new(42);
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(calculate_move(&board, Player::X, difficulty, &mut rng), None);
        }
    }

    #[test]
    fn test_seeded_moves_are_always_empty_cells() {
        let board = threatened_board();
        let mut rng = SessionRng::new(42);
        for _ in 0..200 {
            let chosen = calculate_move(&board, Player::O, Difficulty::Easy, &mut rng).unwrap();
            assert!(board.empty_indices().contains(&chosen));
        }
    }
}
