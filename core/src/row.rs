use alloc::vec::Vec;
use core::fmt;

use crate::*;

/// One horizontal line of a board, tagged with its zero-based index.
///
/// Rows never change after construction, [`Row::update`] hands back a modified copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    index: usize,
    tiles: Vec<Tile>,
}

impl Row {
    pub fn new(index: usize, tiles: Vec<Tile>) -> Self {
        Self { index, tiles }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn iter(&self) -> impl Iterator<Item = Tile> + '_ {
        self.tiles.iter().copied()
    }

    pub fn get(&self, col: usize) -> Result<Tile> {
        self.validate_col(col)?;
        Ok(self.tiles[col])
    }

    pub fn update(&self, col: usize, tile: Tile) -> Result<Self> {
        self.validate_col(col)?;
        let mut tiles = self.tiles.clone();
        tiles[col] = tile;
        Ok(Self::new(self.index, tiles))
    }

    fn validate_col(&self, col: usize) -> Result<()> {
        if col < self.tiles.len() {
            Ok(())
        } else {
            Err(GameError::OutOfBounds {
                index: col,
                len: self.tiles.len(),
            })
        }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for tile in &self.tiles {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{tile}")?;
            first = false;
        }
        Ok(())
    }
}
