use core::fmt;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Square grid of optional marks, stored row-major.
///
/// The board performs no validation of its own; the engine checks bounds and occupancy before
/// writing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Option<Mark>>,
    filled: CellCount,
}

impl Board {
    pub fn new(size: Coord) -> Result<Self> {
        if size < MIN_BOARD_SIZE {
            return Err(GameError::invalid_size(size));
        }
        let size = size as usize;
        Ok(Self {
            cells: Array2::default([size, size]),
            filled: 0,
        })
    }

    pub fn size(&self) -> Coord {
        // Construction only accepts a `Coord` sized board.
        self.cells.nrows() as Coord
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size(), self.size())
    }

    pub fn filled_cells(&self) -> CellCount {
        self.filled
    }

    pub fn is_full(&self) -> bool {
        self.filled == self.total_cells()
    }

    pub fn is_in_bounds(&self, (row, col): Coord2) -> bool {
        row < self.size() && col < self.size()
    }

    /// Out of bounds cells are reported as not empty.
    pub fn is_empty(&self, coords: Coord2) -> bool {
        self.get(coords).is_some_and(|cell| cell.is_none())
    }

    pub fn get(&self, coords: Coord2) -> Option<Option<Mark>> {
        if self.is_in_bounds(coords) {
            Some(self.cells[coords.to_nd_index()])
        } else {
            None
        }
    }

    /// Letter at `coords`, or `None` when the cell is empty or off the board.
    pub fn letter_at(&self, coords: Coord2) -> Option<Letter> {
        self.get(coords).flatten().map(|mark| mark.letter)
    }

    /// Writes `mark` into an empty, in-bounds cell. The caller guarantees both.
    pub fn place(&mut self, coords: Coord2, mark: Mark) {
        let cell = &mut self.cells[coords.to_nd_index()];
        debug_assert!(cell.is_none(), "cell {coords:?} already holds {cell:?}");
        *cell = Some(mark);
        self.filled += 1;
    }

    pub fn clear(&mut self) {
        self.cells.fill(None);
        self.filled = 0;
    }

    /// Temporarily writes `mark` into the empty cell at `coords`, runs `f`, then empties the cell
    /// again. The board is identical before and after, even if `f` unwinds.
    pub fn probe<T>(&mut self, coords: Coord2, mark: Mark, f: impl FnOnce(&Board) -> T) -> T {
        self.place(coords, mark);
        let guard = ProbeGuard {
            board: self,
            coords,
        };
        f(&*guard.board)
    }

    fn unplace(&mut self, coords: Coord2) {
        self.cells[coords.to_nd_index()] = None;
        self.filled -= 1;
    }

    /// Empty cells in row-major order.
    pub fn iter_empty(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| cell.is_none())
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }

    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = Option<Mark>> + '_> + '_ {
        self.cells.rows().into_iter().map(|row| row.into_iter().copied())
    }
}

/// Empties the probed cell when dropped.
struct ProbeGuard<'a> {
    board: &'a mut Board,
    coords: Coord2,
}

impl Drop for ProbeGuard<'_> {
    fn drop(&mut self) {
        self.board.unplace(self.coords);
    }
}

impl Index<Coord2> for Board {
    type Output = Option<Mark>;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

/// Text grid with one character per cell and `.` for empty cells.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let mut first = true;
            for cell in row {
                if !first {
                    f.write_str(" ")?;
                }
                first = false;
                match cell {
                    Some(mark) => write!(f, "{}", mark.letter)?,
                    None => f.write_str(".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
