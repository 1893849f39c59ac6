use thiserror::Error;

use crate::cell::Position;

/// Rejected maze construction arguments.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MazeError {
    #[error("proportion_blocked must be a number between 0 and 1, got {0}")]
    InvalidProportion(f64),
    #[error("maze dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("{what} position {position} lies outside the {rows}x{cols} grid")]
    OutOfBounds {
        what: &'static str,
        position: Position,
        rows: usize,
        cols: usize,
    },
    #[error("start and goal must differ, both are {0}")]
    StartIsGoal(Position),
    #[error("cannot block {0}, it is the start or goal")]
    BlockedEndpoint(Position),
}

/// Returned by removal and peek operations on an empty container.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("cannot {operation} from an empty {container}")]
pub struct EmptyError {
    pub container: &'static str,
    pub operation: &'static str,
}

impl EmptyError {
    pub(crate) fn new(container: &'static str, operation: &'static str) -> Self {
        EmptyError {
            container,
            operation,
        }
    }
}
