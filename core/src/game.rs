use alloc::format;
use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::*;

/// Outcome of revealing a tile
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The tile was already uncovered
    NoChange,
    /// A safe tile was uncovered and hidden tiles remain
    Revealed(u32),
    /// The tile holds a mine, the caller decides whether the game is over
    HitMine,
    /// A safe tile was uncovered and no hidden tiles remain
    Won(u32),
}

impl RevealOutcome {
    /// Whether this outcome could have caused an update to the board
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed(_) => true,
            HitMine => false,
            Won(_) => true,
        }
    }
}

/// A single game session: the current board snapshot and its fixed dimension.
///
/// Moves are taken strictly one after another. Revealing a mine is reported to the caller but
/// does not stop the game from accepting further moves.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "Board", into = "Board")]
pub struct Game {
    current: Board,
    dimension: usize,
}

impl Game {
    pub fn new(board: Board) -> Self {
        let dimension = board.dimension();
        log::debug!("New game on a {dimension}x{dimension} board");
        Self {
            current: board,
            dimension,
        }
    }

    pub fn board(&self) -> &Board {
        &self.current
    }

    pub fn into_board(self) -> Board {
        self.current
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    fn validate_coords(&self, row: usize, col: usize) -> Result<Coord2> {
        self.current.validate_coords((row, col))
    }

    /// The tile that revealing `(row, col)` would produce, without touching the board.
    ///
    /// Mines and uncovered tiles come back unchanged, a hidden tile becomes
    /// [`Tile::Uncovered`] with its adjacent mine count.
    pub fn compute_tile(&self, row: usize, col: usize) -> Result<Tile> {
        let coords = self.validate_coords(row, col)?;

        Ok(match self.current[coords] {
            Tile::Hidden => Tile::Uncovered(self.adjacent_mine_count(row, col)?),
            tile => tile,
        })
    }

    /// Number of mines among the up to eight cells touching `(row, col)`.
    pub fn adjacent_mine_count(&self, row: usize, col: usize) -> Result<u32> {
        let coords = self.validate_coords(row, col)?;

        let count = NeighborIter::new(coords, self.dimension)
            .filter(|&pos| {
                let is_mine = self.current[pos].is_mine();
                log::trace!("Neighbor {pos:?} of {coords:?}, mine: {is_mine}");
                is_mine
            })
            .count();
        Ok(count as u32)
    }

    /// Replaces `(row, col)` with [`compute_tile`](Self::compute_tile) and returns the tile
    /// that was placed.
    pub fn advance_game(&mut self, row: usize, col: usize) -> Result<Tile> {
        let tile = self.compute_tile(row, col)?;
        self.update_board(row, col, tile)?;
        log::debug!("Advanced at {:?} to {}", (row, col), tile);
        Ok(tile)
    }

    /// False only when revealing `(row, col)` would hit a mine.
    pub fn should_advance_game(&self, row: usize, col: usize) -> Result<bool> {
        Ok(!self.compute_tile(row, col)?.is_mine())
    }

    /// Reveals `(row, col)` and classifies the result.
    pub fn reveal(&mut self, row: usize, col: usize) -> Result<RevealOutcome> {
        use RevealOutcome::*;

        let coords = self.validate_coords(row, col)?;
        let before = self.current[coords];
        let tile = self.advance_game(row, col)?;

        Ok(match (before, tile) {
            (_, Tile::Mine) => HitMine,
            (Tile::Uncovered(_), _) => NoChange,
            (_, Tile::Uncovered(count)) if self.in_win_state() => Won(count),
            (_, Tile::Uncovered(count)) => Revealed(count),
            (_, Tile::Hidden) => NoChange,
        })
    }

    /// Puts `tile` at `(row, col)` as is, without computing adjacency.
    pub fn update_board(&mut self, row: usize, col: usize, tile: Tile) -> Result<()> {
        let (row, col) = self.validate_coords(row, col)?;
        self.current = self.current.with_updated_tile(row, col, tile)?;
        Ok(())
    }

    pub fn mine_count(&self) -> usize {
        self.current.mine_count()
    }

    pub fn hidden_count(&self) -> usize {
        self.current.hidden_count()
    }

    /// True once no hidden tiles remain.
    pub fn in_win_state(&self) -> bool {
        self.hidden_count() == 0
    }

    /// The board followed by the mine and remaining hidden tile counts.
    pub fn render_game_state(&self) -> String {
        format!(
            "{}\nmine ct: {}\nremaining hidden ct: {}",
            self.current,
            self.mine_count(),
            self.hidden_count()
        )
    }
}

impl From<Board> for Game {
    fn from(board: Board) -> Self {
        Self::new(board)
    }
}

impl From<Game> for Board {
    fn from(game: Game) -> Self {
        game.current
    }
}

impl Default for Game {
    /// A game on the first sample board.
    fn default() -> Self {
        Self::new(SampleBoard::first().board())
    }
}
