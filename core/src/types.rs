/// Zero-based `(row, col)` position on a board.
pub type Coord2 = (usize, usize);

/// Offsets of the eight cells touching a position, orthogonal first.
const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, 1),
    (0, -1),
    (1, -1),
    (1, 1),
    (-1, -1),
    (-1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains inside a
/// `dimension` x `dimension` grid.
fn apply_delta(coords: Coord2, delta: (isize, isize), dimension: usize) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;

    let next_row = row.checked_add_signed(d_row)?;
    if next_row >= dimension {
        return None;
    }

    let next_col = col.checked_add_signed(d_col)?;
    if next_col >= dimension {
        return None;
    }

    Some((next_row, next_col))
}

/// Iterates the in-bounds neighbours of a cell, without wraparound.
#[derive(Debug, Clone)]
pub struct NeighborIter {
    center: Coord2,
    dimension: usize,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, dimension: usize) -> Self {
        Self {
            center,
            dimension,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item = apply_delta(
                self.center,
                DISPLACEMENTS[usize::from(self.index)],
                self.dimension,
            );
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}
