/// Single coordinate axis used for the board size and positions.
pub type Coord = u8;

/// Count type used for total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Smallest board that is accepted; anything at or below is rejected.
pub const MIN_BOARD_SIZE: Coord = 3;

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

/// All eight compass directions as `(d_row, d_col)`.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// One half of each undirected line through a cell: vertical, horizontal and both diagonals.
pub const AXES: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Moves `steps` times along `delta` from `coords`, returning a value only when it remains on a
/// `size` x `size` board.
pub fn step(coords: Coord2, delta: (isize, isize), steps: isize, size: Coord) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;

    let next_row = row.checked_add_signed((d_row * steps).try_into().ok()?)?;
    if next_row >= size {
        return None;
    }

    let next_col = col.checked_add_signed((d_col * steps).try_into().ok()?)?;
    if next_col >= size {
        return None;
    }

    Some((next_row, next_col))
}
