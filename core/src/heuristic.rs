use alloc::vec::Vec;
use rand::prelude::*;

use crate::*;

/// Picks moves for a computer player: any move that completes a match right now, otherwise a
/// random empty cell with a random letter. There is no lookahead and no blocking.
#[derive(Clone, Debug)]
pub struct MoveHeuristic {
    rng: SmallRng,
}

impl MoveHeuristic {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Proposes a move for the engine's current player, or `None` when the board is full.
    pub fn computer_move(&mut self, engine: &mut GameEngine) -> Option<Move> {
        let scoring = engine.find_potential_match_moves();
        if let Some(&mv) = self.pick(&scoring) {
            log::debug!("heuristic found scoring move {mv:?}");
            return Some(mv);
        }
        self.random_move(engine)
    }

    /// A uniformly random empty cell paired with a uniformly random letter.
    pub fn random_move(&mut self, engine: &GameEngine) -> Option<Move> {
        let empty: Vec<Coord2> = engine.valid_moves().collect();
        let &coords = self.pick(&empty)?;
        let &letter = self.pick(&Letter::ALL)?;
        Some(Move::new(coords, letter))
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.rng.random_range(0..items.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_gets_a_legal_random_move() {
        let mut engine = GameEngine::new(3, Variant::Simple).unwrap();
        let mut heuristic = MoveHeuristic::new(7);

        let mv = heuristic.computer_move(&mut engine).unwrap();

        assert!(engine.is_move_valid(mv.coords));
        assert!(Letter::ALL.contains(&mv.letter));
        assert_eq!(engine.board().filled_cells(), 0);
    }

    #[test]
    fn takes_the_only_scoring_move() {
        let mut engine = GameEngine::new(3, Variant::Simple).unwrap();
        engine.apply_move((0, 0), 'S').unwrap();
        engine.apply_move((0, 1), 'O').unwrap();

        for seed in 0..16 {
            let mut heuristic = MoveHeuristic::new(seed);
            assert_eq!(
                heuristic.computer_move(&mut engine),
                Some(Move::new((0, 2), Letter::S))
            );
        }
    }

    #[test]
    fn picks_among_scoring_moves() {
        let mut engine = GameEngine::new(3, Variant::General).unwrap();
        for (coords, letter) in [((0, 0), 'S'), ((2, 2), 'S'), ((0, 2), 'S'), ((2, 0), 'S')] {
            engine.apply_move(coords, letter).unwrap();
        }
        let scoring = engine.find_potential_match_moves();

        let mv = MoveHeuristic::new(3).computer_move(&mut engine).unwrap();

        assert!(scoring.contains(&mv));
    }

    #[test]
    fn same_seed_same_moves() {
        let engine = GameEngine::new(6, Variant::General).unwrap();
        let mut a = MoveHeuristic::new(42);
        let mut b = MoveHeuristic::new(42);

        for _ in 0..10 {
            assert_eq!(a.random_move(&engine), b.random_move(&engine));
        }
    }

    #[test]
    fn full_board_has_no_move() {
        let mut engine = GameEngine::new(3, Variant::General).unwrap();
        for row in 0..3 {
            for col in 0..3 {
                engine.apply_move((row, col), 'O').unwrap();
            }
        }

        assert_eq!(MoveHeuristic::new(1).computer_move(&mut engine), None);
    }
}
