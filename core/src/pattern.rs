//! Detection of S-O-S lines completed by a single placement.
//!
//! Only letters matter; who owns the cells of a line is irrelevant. A placement can close up to
//! eight lines at once (an `S` in the middle of a star of `O`s) so results are kept inline.

use smallvec::SmallVec;

use crate::*;

/// Matches completed by one placement.
pub type Matches = SmallVec<[Match; 8]>;

/// Lines closed by the `S` just written at `coords`: in each direction the neighbor must be an `O`
/// and the cell after it an `S`.
pub fn matches_completed_by_s(board: &Board, coords: Coord2) -> Matches {
    let size = board.size();
    DIRECTIONS
        .iter()
        .filter_map(|&delta| {
            let middle = step(coords, delta, 1, size)?;
            let far = step(coords, delta, 2, size)?;
            let is_line = board.letter_at(middle) == Some(Letter::O)
                && board.letter_at(far) == Some(Letter::S);
            is_line.then(|| Match::new(coords, far))
        })
        .collect()
}

/// Lines closed by the `O` just written at `coords`: along each axis both opposite neighbors must
/// be an `S`.
pub fn matches_completed_by_o(board: &Board, coords: Coord2) -> Matches {
    let size = board.size();
    AXES.iter()
        .filter_map(|&delta| {
            let before = step(coords, delta, -1, size)?;
            let after = step(coords, delta, 1, size)?;
            let is_line = board.letter_at(before) == Some(Letter::S)
                && board.letter_at(after) == Some(Letter::S);
            is_line.then(|| Match::new(before, after))
        })
        .collect()
}

/// Dispatches on the letter found at `coords`; an empty cell completes nothing.
pub fn matches_completed_at(board: &Board, coords: Coord2) -> Matches {
    match board.letter_at(coords) {
        Some(Letter::S) => matches_completed_by_s(board, coords),
        Some(Letter::O) => matches_completed_by_o(board, coords),
        None => Matches::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn board_from(rows: &[&str]) -> Board {
        let mut board = Board::new(rows.len() as Coord).unwrap();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                if let Ok(letter) = Letter::try_from(ch) {
                    let coords = (row as Coord, col as Coord);
                    board.place(coords, Mark::new(letter, Player::Blue));
                }
            }
        }
        board
    }

    fn sorted(matches: Matches) -> Vec<Match> {
        let mut matches = matches.into_vec();
        matches.sort();
        matches
    }

    #[test]
    fn s_closes_line_in_every_direction() {
        let board = board_from(&["S.S.S", ".OOO.", "SOSOS", ".OOO.", "S.S.S"]);

        let found = sorted(matches_completed_by_s(&board, (2, 2)));

        assert_eq!(found.len(), 8);
        assert!(found.contains(&Match::new((0, 0), (2, 2))));
        assert!(found.contains(&Match::new((2, 2), (4, 4))));
        assert!(found.contains(&Match::new((2, 0), (2, 2))));
        assert!(found.contains(&Match::new((0, 4), (2, 2))));
    }

    #[test]
    fn s_ignores_lines_running_off_the_board() {
        let board = board_from(&["SO.", "...", "..."]);

        assert!(matches_completed_by_s(&board, (0, 0)).is_empty());
    }

    #[test]
    fn s_requires_o_in_the_middle() {
        let board = board_from(&["SSS", "...", "..."]);

        assert!(matches_completed_by_s(&board, (0, 2)).is_empty());
    }

    #[test]
    fn o_closes_horizontal_and_diagonal_together() {
        let board = board_from(&["S..", "SOS", "..S"]);

        let found = sorted(matches_completed_by_o(&board, (1, 1)));

        assert_eq!(
            found,
            [Match::new((0, 0), (2, 2)), Match::new((1, 0), (1, 2))]
        );
    }

    #[test]
    fn o_needs_both_neighbors() {
        let board = board_from(&["S..", ".O.", "..."]);

        assert!(matches_completed_by_o(&board, (1, 1)).is_empty());
        assert!(matches_completed_at(&board, (2, 2)).is_empty());
    }

    #[test]
    fn ownership_does_not_matter() {
        let mut board = Board::new(3).unwrap();
        board.place((0, 0), Mark::new(Letter::S, Player::Red));
        board.place((0, 1), Mark::new(Letter::O, Player::Blue));
        board.place((0, 2), Mark::new(Letter::S, Player::Red));

        assert_eq!(
            sorted(matches_completed_at(&board, (0, 2))),
            [Match::new((0, 0), (0, 2))]
        );
    }
}
