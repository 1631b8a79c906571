use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("index {index} out of bounds for length {len}")]
    OutOfBounds { index: usize, len: usize },
    #[error(transparent)]
    InvalidBoard(#[from] BuildErrors),
}

pub type Result<T> = core::result::Result<T, GameError>;

/// A single problem found while validating a board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("unrecognized cell: {0}")]
    UnrecognizedCell(String),
    #[error("negative tile: {0}")]
    NegativeTile(i32),
    #[error("board not square")]
    NotSquare,
    #[error("board has no rows")]
    Empty,
}

/// Every problem found by [`BoardBuilder::build`](crate::BoardBuilder::build), in the order
/// they were found. Displays as one message per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildErrors(Vec<BoardError>);

impl BuildErrors {
    pub(crate) fn new(errors: Vec<BoardError>) -> Self {
        Self(errors)
    }

    pub fn errors(&self) -> &[BoardError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, error: &BoardError) -> bool {
        self.0.contains(error)
    }
}

impl fmt::Display for BuildErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.0 {
            if !first {
                f.write_str("\n")?;
            }
            write!(f, "{error}")?;
            first = false;
        }
        Ok(())
    }
}

impl core::error::Error for BuildErrors {}
