use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid command! Use 'row col' or 'f row col'.")]
    InvalidCommandShape,
    #[error("Invalid cell coordinates")]
    InvalidCellCoordinate,
    #[error("Invalid cell for flagging!")]
    CellNotFlaggable,
    #[error("Too many mines")]
    TooManyMines,
    #[error("Board must be at least 1x1")]
    InvalidBoardShape,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("Mines have not been placed yet")]
    NotStarted,
    #[error("Mines are already placed for this game")]
    AlreadyStarted,
}

pub type Result<T> = core::result::Result<T, GameError>;
