#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;
use core::str::FromStr;
use ndarray::{Array2, ArrayView1};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub use error::*;
pub use game::*;
pub use generator::*;
pub use types::*;

mod error;
mod game;
mod generator;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub nrows: Coord,
    pub ncols: Coord,
    /// Probability for each cell to start lit.
    pub chance: f64,
}

impl GameConfig {
    pub const DEFAULT: Self = Self::new_unchecked(5, 5, 0.5);

    pub const fn new_unchecked(nrows: Coord, ncols: Coord, chance: f64) -> Self {
        Self {
            nrows,
            ncols,
            chance,
        }
    }

    pub fn new(nrows: Coord, ncols: Coord, chance: f64) -> Result<Self> {
        let config = Self::new_unchecked(nrows, ncols, chance);
        config.validate()?;
        Ok(config)
    }

    /// Like [`GameConfig::new`] but recovers instead of rejecting: dimensions are raised to 1 and
    /// the chance is clamped into `[0, 1]`, with NaN treated as 0.
    pub fn clamped(nrows: Coord, ncols: Coord, chance: f64) -> Self {
        let clamped = Self::new_unchecked(
            nrows.max(1),
            ncols.max(1),
            if chance.is_nan() {
                0.0
            } else {
                chance.clamp(0.0, 1.0)
            },
        );
        if clamped != Self::new_unchecked(nrows, ncols, chance) {
            log::warn!(
                "Config clamped, requested {}x{} with chance {}, using {}x{} with chance {}",
                nrows,
                ncols,
                chance,
                clamped.nrows,
                clamped.ncols,
                clamped.chance
            );
        }
        clamped
    }

    pub fn validate(&self) -> Result<()> {
        if self.nrows == 0 || self.ncols == 0 {
            return Err(GameError::InvalidDimensions);
        }
        if !(0.0..=1.0).contains(&self.chance) {
            return Err(GameError::InvalidChance);
        }
        Ok(())
    }

    pub const fn size(&self) -> Coord2 {
        (self.nrows, self.ncols)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.nrows, self.ncols)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Row-major grid of lights, `true` meaning lit.
///
/// Both dimensions are within `1..=Coord::MAX` for any grid built through this API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Array2<bool>", into = "Array2<bool>")]
pub struct Grid {
    cells: Array2<bool>,
}

impl Grid {
    pub fn from_cells(cells: Array2<bool>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        let in_range = |len: usize| (1..=usize::from(Coord::MAX)).contains(&len);
        if in_range(rows) && in_range(cols) {
            Ok(Self { cells })
        } else {
            Err(GameError::InvalidDimensions)
        }
    }

    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        let ncols = rows
            .first()
            .map(|row| row.as_ref().len())
            .ok_or(GameError::InvalidBoardShape)?;
        if ncols == 0 || rows.iter().any(|row| row.as_ref().len() != ncols) {
            return Err(GameError::InvalidBoardShape);
        }

        let cells =
            Array2::from_shape_fn((rows.len(), ncols), |(row, col)| rows[row].as_ref()[col]);
        Self::from_cells(cells)
    }

    /// A grid with every light in the same state.
    pub fn filled((nrows, ncols): Coord2, lit: bool) -> Result<Self> {
        Self::from_cells(Array2::from_elem((nrows, ncols).to_nd_index(), lit))
    }

    /// Lights each cell independently when a uniform sample from `[0, 1)` falls below
    /// `config.chance`. Fails without consuming randomness when the config is invalid.
    pub fn random<R: Rng>(config: &GameConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let cells = Array2::from_shape_fn(config.size().to_nd_index(), |_| {
            rng.random::<f64>() < config.chance
        });
        Ok(Self { cells })
    }

    pub fn create<R: Rng>(nrows: Coord, ncols: Coord, chance: f64, rng: &mut R) -> Result<Self> {
        Self::random(&GameConfig::new_unchecked(nrows, ncols, chance), rng)
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (
            Coord::try_from(rows).unwrap_or(Coord::MAX),
            Coord::try_from(cols).unwrap_or(Coord::MAX),
        )
    }

    pub fn nrows(&self) -> Coord {
        self.size().0
    }

    pub fn ncols(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        let (nrows, ncols) = self.size();
        mult(nrows, ncols)
    }

    pub fn lit_count(&self) -> CellCount {
        let lit = self.cells.iter().filter(|&&lit| lit).count();
        CellCount::try_from(lit).unwrap_or(CellCount::MAX)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// Converts raw signed coordinates, rejecting negative and out-of-bounds values.
    pub fn locate(&self, row: isize, col: isize) -> Result<Coord2> {
        let row = Coord::try_from(row).map_err(|_| GameError::InvalidCoords)?;
        let col = Coord::try_from(col).map_err(|_| GameError::InvalidCoords)?;
        self.validate_coords((row, col))
    }

    pub fn get(&self, coords: Coord2) -> Option<bool> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    /// Flips the light at `coords` and its orthogonal neighbors that are on the grid.
    ///
    /// Coordinates are checked before anything is flipped, so on error the grid is untouched.
    pub fn toggle_around(&mut self, coords: Coord2) -> Result<()> {
        let coords = self.validate_coords(coords)?;

        self.cells[coords.to_nd_index()] ^= true;
        for pos in self.cells.iter_neighbors(coords) {
            self.cells[pos.to_nd_index()] ^= true;
        }
        Ok(())
    }

    /// Same as [`Grid::toggle_around`], but leaves `self` as is and returns the next grid.
    pub fn toggled_around(&self, coords: Coord2) -> Result<Self> {
        let mut next = self.clone();
        next.toggle_around(coords)?;
        Ok(next)
    }

    /// Every light is off. Vacuously true for a grid without cells.
    pub fn has_won(&self) -> bool {
        !self.cells.iter().any(|&lit| lit)
    }

    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, bool>> {
        self.cells.rows().into_iter()
    }

    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.rows().map(|row| row.to_vec()).collect()
    }

    pub fn as_array(&self) -> &Array2<bool> {
        &self.cells
    }
}

impl Index<Coord2> for Grid {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl TryFrom<Array2<bool>> for Grid {
    type Error = GameError;

    fn try_from(cells: Array2<bool>) -> Result<Self> {
        Self::from_cells(cells)
    }
}

impl From<Grid> for Array2<bool> {
    fn from(grid: Grid) -> Self {
        grid.cells
    }
}

const LIT: char = 'O';
const UNLIT: char = '.';

/// One line per row, `O` for lit and `.` for unlit.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &lit in row {
                write!(f, "{}", if lit { LIT } else { UNLIT })?;
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(|c| match c {
                        LIT | 'o' => Ok(true),
                        UNLIT => Ok(false),
                        _ => Err(GameError::InvalidBoardShape),
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_rows(&rows)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    Toggled,
    Won,
}

impl ToggleOutcome {
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Won)
    }
}
