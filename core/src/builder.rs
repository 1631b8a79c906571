use alloc::string::String;
use alloc::vec::Vec;

use crate::*;

/// Raw cell specification accepted by [`BoardBuilder::row`].
///
/// Text tokens go through [`Tile::from_token`], counts through [`Tile::from_count`] and tiles
/// are taken as they are.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RawCell {
    Text(String),
    Count(i32),
    Tile(Tile),
}

impl RawCell {
    pub fn into_tile(self) -> core::result::Result<Tile, BoardError> {
        match self {
            Self::Text(token) => Tile::from_token(&token),
            Self::Count(count) => Tile::from_count(count),
            Self::Tile(tile) => Ok(tile),
        }
    }
}

impl From<char> for RawCell {
    fn from(c: char) -> Self {
        let mut token = String::new();
        token.push(c);
        Self::Text(token)
    }
}

impl From<&str> for RawCell {
    fn from(token: &str) -> Self {
        Self::Text(token.into())
    }
}

impl From<String> for RawCell {
    fn from(token: String) -> Self {
        Self::Text(token)
    }
}

impl From<i32> for RawCell {
    fn from(count: i32) -> Self {
        Self::Count(count)
    }
}

impl From<Tile> for RawCell {
    fn from(tile: Tile) -> Self {
        Self::Tile(tile)
    }
}

/// Collects rows of raw cells and validates them into a [`Board`].
///
/// Problems are accumulated rather than reported one at a time: [`build`](Self::build) returns
/// every bad cell across the whole grid, row-major, followed by the shape check.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    rows: Vec<Vec<Tile>>,
    widths: Vec<usize>,
    errors: Vec<BoardError>,
}

impl BoardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a row. Each token is converted on its own.
    pub fn row<I>(mut self, tokens: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<RawCell>,
    {
        self.push_row(tokens);
        self
    }

    /// Appends a row of single-character tokens, the layout used by board files.
    pub fn row_text(self, line: &str) -> Self {
        self.row(line.chars())
    }

    pub fn push_row<I>(&mut self, tokens: I)
    where
        I: IntoIterator,
        I::Item: Into<RawCell>,
    {
        let row_index = self.widths.len();
        let mut tiles = Vec::new();
        let mut width = 0;

        for token in tokens {
            width += 1;
            match token.into().into_tile() {
                Ok(tile) => tiles.push(tile),
                Err(err) => {
                    log::trace!("Row {row_index}, col {}: {err}", width - 1);
                    self.errors.push(err);
                }
            }
        }

        self.widths.push(width);
        self.rows.push(tiles);
    }

    /// Number of rows appended so far.
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    pub fn build(self) -> core::result::Result<Board, BuildErrors> {
        let Self {
            rows,
            widths,
            mut errors,
        } = self;
        let n = widths.len();

        if n == 0 {
            errors.push(BoardError::Empty);
        } else if widths.iter().any(|&width| width != n) {
            errors.push(BoardError::NotSquare);
        }

        if !errors.is_empty() {
            log::debug!("Rejected board with {} problem(s)", errors.len());
            return Err(BuildErrors::new(errors));
        }

        log::debug!("Built {n}x{n} board");
        Ok(Board::from_rows(
            rows.into_iter()
                .enumerate()
                .map(|(index, tiles)| Row::new(index, tiles))
                .collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn rejects_unrecognized_cell() {
        let err = BoardBuilder::new()
            .row(['_', 'a'])
            .row(['_', '_'])
            .build()
            .unwrap_err();

        assert_eq!(err.to_string(), "unrecognized cell: a");
    }

    #[test]
    fn rejects_too_many_rows() {
        let err = BoardBuilder::new()
            .row(['_', '*'])
            .row(['_', '_'])
            .row(['_', '_'])
            .build()
            .unwrap_err();

        assert_eq!(err.to_string(), "board not square");
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = BoardBuilder::new()
            .row(['_', '*', '_'])
            .row(['_'])
            .row(['_', '_'])
            .build()
            .unwrap_err();

        assert_eq!(err.to_string(), "board not square");
    }

    #[test]
    fn reports_every_problem_in_order() {
        let err = BoardBuilder::new()
            .row(['$', '*', '+'])
            .row(['_'])
            .row(['&', '_'])
            .build()
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "unrecognized cell: $\nunrecognized cell: +\nunrecognized cell: &\nboard not square"
        );
        assert_eq!(err.len(), 4);
    }

    #[test]
    fn accepts_structurally_valid_boards() {
        assert!(BoardBuilder::new().row(['_', '*']).row(['_', '_']).build().is_ok());
        assert!(BoardBuilder::new().row(['*', '*']).row(['0', '0']).build().is_ok());
        assert!(BoardBuilder::new().row(['*', '*']).row(['8', '0']).build().is_ok());
        assert!(BoardBuilder::new().row(['*']).build().is_ok());
        assert!(BoardBuilder::new().row(['4']).build().is_ok());
        assert!(BoardBuilder::new().row([Tile::Uncovered(2)]).build().is_ok());
    }

    #[test]
    fn square_of_known_tokens_has_matching_dimension() {
        for n in 1..=6 {
            let line = "_*0".chars().cycle().take(n).collect::<String>();
            let board = (0..n)
                .fold(BoardBuilder::new(), |builder, _| builder.row_text(&line))
                .build()
                .unwrap();

            assert_eq!(board.dimension(), n);
            assert!(board.rows().all(|row| row.len() == n));
        }
    }

    #[test]
    fn rows_are_numbered_in_append_order() {
        let board = BoardBuilder::new()
            .row_text("_*")
            .row_text("1_")
            .build()
            .unwrap();

        let indices: Vec<_> = board.rows().map(Row::index).collect();

        assert_eq!(indices, [0, 1]);
    }

    #[test]
    fn tile_rows_must_still_be_square() {
        let err = BoardBuilder::new()
            .row([Tile::Uncovered(2), Tile::Uncovered(2)])
            .build()
            .unwrap_err();

        assert_eq!(err.to_string(), "board not square");
    }

    #[test]
    fn negative_counts_are_rejected() {
        let err = BoardBuilder::new()
            .row([RawCell::from(Tile::Mine), RawCell::Count(2)])
            .row([RawCell::Count(-3)])
            .build()
            .unwrap_err();
        assert_eq!(err.to_string(), "negative tile: -3\nboard not square");

        let err = BoardBuilder::new()
            .row([RawCell::from(Tile::Mine), RawCell::Count(-12)])
            .row([RawCell::from(Tile::Hidden), RawCell::Count(-3)])
            .build()
            .unwrap_err();
        assert_eq!(err.to_string(), "negative tile: -12\nnegative tile: -3");
    }

    #[test]
    fn negative_text_tokens_are_rejected() {
        let err = BoardBuilder::new()
            .row(["-1", "_"])
            .row(["_", "x1"])
            .build()
            .unwrap_err();

        assert_eq!(err.to_string(), "negative tile: -1\nunrecognized cell: x1");
        assert!(err.contains(&BoardError::NegativeTile(-1)));
    }

    #[test]
    fn empty_builder_is_rejected() {
        let err = BoardBuilder::new().build().unwrap_err();

        assert_eq!(err.errors(), [BoardError::Empty]);
    }

    #[test]
    fn push_row_matches_chained_rows() {
        let mut builder = BoardBuilder::new();
        builder.push_row("_*".chars());
        builder.push_row("__".chars());
        assert_eq!(builder.len(), 2);

        let chained = BoardBuilder::new().row_text("_*").row_text("__");

        assert_eq!(builder.build(), chained.build());
    }
}
