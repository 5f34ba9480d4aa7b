use std::fmt;
use super::types::{Cell, Player};

pub const CELL_COUNT: usize = 9;
pub const SIDE: usize = 3;

/// 3x3 grid stored row-major: indices 0-2 are the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Builds a board from a 9 character pattern of `X`, `O` and `.`.
    #[cfg(test)]
    pub fn from_pattern(pattern: &str) -> Self {
        let mut board = Self::new();
        let marks: Vec<char> = pattern.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(marks.len(), CELL_COUNT, "pattern must describe 9 cells");
        for (index, mark) in marks.into_iter().enumerate() {
            board.cells[index] = match mark {
                'X' => Cell::Mark(Player::X),
                'O' => Cell::Mark(Player::O),
                _ => Cell::Empty,
            };
        }
        board
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Empty cells in ascending index order.
    pub fn empty_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    pub(crate) fn place(&mut self, index: usize, player: Player) {
        self.cells[index] = Cell::Mark(player);
    }

    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = Cell::Empty;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(SIDE).enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                match cell {
                    Cell::Empty => write!(f, ".")?,
                    Cell::Mark(player) => write!(f, "{}", player)?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.cells().iter().all(|cell| cell.is_empty()));
        assert!(!board.is_full());
        assert_eq!(board.empty_indices(), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_indices_ascending() {
        let board = Board::from_pattern("X.O .X. O..");
        assert_eq!(board.empty_indices(), vec![1, 3, 5, 7, 8]);
    }

    #[test]
    fn test_full_board() {
        let board = Board::from_pattern("XOX XOO OXX");
        assert!(board.is_full());
        assert!(board.empty_indices().is_empty());
    }

    #[test]
    fn test_get_out_of_range() {
        let board = Board::new();
        assert_eq!(board.get(8), Some(Cell::Empty));
        assert_eq!(board.get(9), None);
    }

    #[test]
    fn test_place_and_clear() {
        let mut board = Board::new();
        board.place(4, Player::O);
        assert_eq!(board.get(4), Some(Cell::Mark(Player::O)));
        board.clear(4);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_display_grid() {
        let board = Board::from_pattern("XX. .OO ...");
        assert_eq!(board.to_string(), "X X .\n. O O\n. . .");
    }
}
