use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;
use serde::{Deserialize, Serialize};

use crate::*;

/// Immutable square grid of tiles.
///
/// The only way to obtain one is through [`BoardBuilder`] (deserialising goes through it as
/// well), so every board is non-empty, `N` x `N` and holds only valid tiles. Updates return a
/// new board that shares every untouched row with the old one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Tile>>", into = "Vec<Vec<Tile>>")]
pub struct Board {
    rows: Vec<Arc<Row>>,
}

impl Board {
    pub fn builder() -> BoardBuilder {
        BoardBuilder::new()
    }

    pub(crate) fn from_rows(rows: Vec<Row>) -> Self {
        Self {
            rows: rows.into_iter().map(Arc::new).collect(),
        }
    }

    /// Number of rows, which is also the number of columns.
    pub fn dimension(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().map(Arc::as_ref)
    }

    pub fn row(&self, row: usize) -> Result<&Row> {
        self.rows
            .get(row)
            .map(Arc::as_ref)
            .ok_or(GameError::OutOfBounds {
                index: row,
                len: self.rows.len(),
            })
    }

    pub fn tile_at(&self, row: usize, col: usize) -> Result<Tile> {
        self.row(row)?.get(col)
    }

    pub fn with_updated_tile(&self, row: usize, col: usize, tile: Tile) -> Result<Self> {
        let updated = self.row(row)?.update(col, tile)?;
        let mut rows = self.rows.clone();
        rows[row] = Arc::new(updated);
        Ok(Self { rows })
    }

    /// Left fold over every tile, row-major.
    pub fn fold<A, F>(&self, initial: A, mut combine: F) -> A
    where
        F: FnMut(A, Tile) -> A,
    {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .fold(initial, |acc, tile| combine(acc, tile))
    }

    /// Number of tiles matching `predicate`.
    pub fn count_tiles<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(Tile) -> bool,
    {
        self.fold(0, |acc, tile| if predicate(tile) { acc + 1 } else { acc })
    }

    pub fn mine_count(&self) -> usize {
        self.count_tiles(Tile::is_mine)
    }

    pub fn hidden_count(&self) -> usize {
        self.count_tiles(Tile::is_hidden)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let dimension = self.dimension();
        if coords.0 < dimension && coords.1 < dimension {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }
}

impl Index<Coord2> for Board {
    type Output = Tile;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.rows[row].tiles()[col]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for row in &self.rows {
            if !first {
                f.write_str("\n")?;
            }
            write!(f, "{row}")?;
            first = false;
        }
        Ok(())
    }
}

impl TryFrom<Vec<Vec<Tile>>> for Board {
    type Error = BuildErrors;

    fn try_from(rows: Vec<Vec<Tile>>) -> core::result::Result<Self, Self::Error> {
        rows.into_iter()
            .fold(BoardBuilder::new(), |builder, row| builder.row(row))
            .build()
    }
}

impl From<Board> for Vec<Vec<Tile>> {
    fn from(board: Board) -> Self {
        board.rows().map(|row| row.tiles().to_vec()).collect()
    }
}
