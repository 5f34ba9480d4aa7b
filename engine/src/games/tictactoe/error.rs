use thiserror::Error;

/// Rejected move. The board is never modified when one of these is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    #[error("Cell index {index} is outside the board (0-8)")]
    OutOfRange { index: usize },

    #[error("Cell {index} is already marked")]
    CellOccupied { index: usize },

    #[error("Not your turn")]
    NotCurrentTurn,

    #[error("Game is already over")]
    GameOver,
}
