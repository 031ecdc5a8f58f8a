use core::fmt;
use core::str::FromStr;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::{GameError, Result};

/// Single coordinate axis used for grid rows, columns and positions.
pub type Coord = u8;

/// Count type used for lit-cell and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        let (rows, cols) = self.dim();
        let size = (
            Coord::try_from(rows).unwrap_or(Coord::MAX),
            Coord::try_from(cols).unwrap_or(Coord::MAX),
        );
        NeighborIter::new(index, size)
    }
}

/// Up, down, left, right. Diagonals are not neighbors.
const DISPLACEMENTS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (max_row, max_col) = bounds;

    let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
    if next_row >= max_row {
        return None;
    }

    let next_col = col.checked_add_signed(d_col.try_into().ok()?)?;
    if next_col >= max_col {
        return None;
    }

    Some((next_row, next_col))
}

/// Orthogonal neighbors of a cell that lie inside the grid bounds, yielded in the order up, down,
/// left, right.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
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

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

/// Textual `"row-col"` identifier the presentation layer attaches to each cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellKey(pub Coord2);

impl CellKey {
    pub const fn coords(self) -> Coord2 {
        self.0
    }
}

impl From<Coord2> for CellKey {
    fn from(coords: Coord2) -> Self {
        Self(coords)
    }
}

impl From<CellKey> for Coord2 {
    fn from(key: CellKey) -> Self {
        key.0
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.0.0, self.0.1)
    }
}

impl FromStr for CellKey {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let (row, col) = s.trim().split_once('-').ok_or(GameError::InvalidCoords)?;
        let row = row.parse().map_err(|_| GameError::InvalidCoords)?;
        let col = col.parse().map_err(|_| GameError::InvalidCoords)?;
        Ok(Self((row, col)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    fn neighbors(center: Coord2, bounds: Coord2) -> Vec<Coord2> {
        NeighborIter::new(center, bounds).collect()
    }

    #[test]
    fn corner_has_two_neighbors() {
        assert_eq!(neighbors((0, 0), (3, 3)), [(1, 0), (0, 1)]);
        assert_eq!(neighbors((2, 2), (3, 3)), [(1, 2), (2, 1)]);
    }

    #[test]
    fn edge_has_three_neighbors() {
        assert_eq!(neighbors((0, 1), (3, 3)), [(1, 1), (0, 0), (0, 2)]);
    }

    #[test]
    fn interior_has_four_neighbors() {
        assert_eq!(
            neighbors((1, 1), (3, 3)),
            [(0, 1), (2, 1), (1, 0), (1, 2)]
        );
    }

    #[test]
    fn single_cell_has_no_neighbors() {
        assert!(neighbors((0, 0), (1, 1)).is_empty());
    }

    #[test]
    fn array_neighbors_use_array_shape() {
        let cells: Array2<bool> = Array2::default((2, 4));
        let found: Vec<_> = cells.iter_neighbors((1, 3)).collect();
        assert_eq!(found, [(0, 3), (1, 2)]);
    }

    #[test]
    fn cell_key_round_trips_through_text() {
        let key: CellKey = "3-14".parse().unwrap();
        assert_eq!(key.coords(), (3, 14));
        assert_eq!(key.to_string(), "3-14");
    }

    #[test]
    fn cell_key_rejects_malformed_text() {
        for input in ["", "3", "3-", "-1-0", "a-b", "3-300", "1-2-3"] {
            assert_eq!(input.parse::<CellKey>(), Err(GameError::InvalidCoords), "{input:?}");
        }
    }
}
