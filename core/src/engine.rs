use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    #[default]
    Active,
    Finished(Outcome),
}

impl EngineState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Finished(_))
    }

    pub const fn outcome(self) -> Option<Outcome> {
        match self {
            Self::Active => None,
            Self::Finished(outcome) => Some(outcome),
        }
    }
}

/// Result of a placement that passed validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// No match was formed and the turn passed to the opponent.
    Placed,
    /// The mover formed this many matches and keeps the turn.
    Scored(usize),
    /// The mover formed a match that ended the game.
    Won,
}

impl MoveOutcome {
    pub const fn keeps_turn(self) -> bool {
        matches!(self, Self::Scored(_))
    }
}

/// Rule engine for a single game of SOS.
///
/// All mutation goes through [`GameEngine::play`]/[`GameEngine::apply_move`] and
/// [`GameEngine::check_game_over`]; the variant decides how matches affect the turn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameEngine {
    variant: Variant,
    board: Board,
    current_player: Player,
    state: EngineState,
    matches: PlayerMap<Vec<Match>>,
}

impl GameEngine {
    pub fn new(size: Coord, variant: Variant) -> Result<Self> {
        Ok(Self {
            variant,
            board: Board::new(size)?,
            current_player: Player::Blue,
            state: EngineState::Active,
            matches: PlayerMap::default(),
        })
    }

    /// Clears the board and every piece of game state, keeping size and variant.
    pub fn start_new_game(&mut self) {
        log::debug!("new {} game on {size}x{size}", self.variant, size = self.size());
        self.board.clear();
        self.current_player = Player::Blue;
        self.state = EngineState::Active;
        self.matches = PlayerMap::default();
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn size(&self) -> Coord {
        self.board.size()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_finished()
    }

    pub fn winner(&self) -> Option<Outcome> {
        self.state.outcome()
    }

    pub fn matches(&self, player: Player) -> &[Match] {
        &self.matches[player]
    }

    pub fn matches_by_owner(&self) -> &PlayerMap<Vec<Match>> {
        &self.matches
    }

    pub fn is_move_valid(&self, coords: Coord2) -> bool {
        self.board.is_empty(coords)
    }

    fn validate(&self, coords: Coord2) -> Result<Coord2> {
        if !self.board.is_in_bounds(coords) {
            Err(GameError::InvalidCoords)
        } else if !self.board.is_empty(coords) {
            Err(GameError::CellOccupied)
        } else {
            Ok(coords)
        }
    }

    /// Like [`GameEngine::play`] but takes the letter as typed, in either case.
    pub fn apply_move(&mut self, coords: Coord2, letter: char) -> Result<MoveOutcome> {
        let letter = Letter::try_from(letter)?;
        self.play(Move::new(coords, letter))
    }

    /// Writes the current player's letter and applies the variant's turn rules. Nothing changes
    /// when the move is rejected.
    pub fn play(&mut self, mv: Move) -> Result<MoveOutcome> {
        let coords = self.validate(mv.coords)?;
        let mover = self.current_player;

        self.board.place(coords, Mark::new(mv.letter, mover));
        let found = pattern::matches_completed_at(&self.board, coords);
        log::debug!(
            "{mover} placed {} at {coords:?}, {} match(es)",
            mv.letter,
            found.len()
        );

        let transition = self.variant.policy().on_matches_formed(&found, mover);
        self.matches[mover].extend_from_slice(&found);

        Ok(match transition {
            Transition::PassTurn => {
                self.switch_player();
                MoveOutcome::Placed
            }
            Transition::ExtraTurn => MoveOutcome::Scored(found.len()),
            Transition::Win => {
                self.finish(Outcome::Winner(mover));
                MoveOutcome::Won
            }
        })
    }

    /// Reports whether the game is over, settling the outcome once the board is full.
    pub fn check_game_over(&mut self) -> bool {
        if self.state.is_finished() {
            return true;
        }
        if !self.board.is_full() {
            return false;
        }

        let outcome = self.variant.policy().decide_on_full(&self.matches);
        self.finish(outcome);
        true
    }

    /// Hands the turn to the other player. Does not look at whether the game has ended.
    pub fn switch_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Puts `player` on turn, used when replaying a recorded game.
    pub fn force_current_player(&mut self, player: Player) {
        self.current_player = player;
    }

    /// Every empty cell in row-major order.
    pub fn valid_moves(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.board.iter_empty()
    }

    /// Every move that would complete at least one match for the current player right now.
    ///
    /// Each candidate is probed on the live board and removed again, so the board is left exactly
    /// as it was.
    pub fn find_potential_match_moves(&mut self) -> Vec<Move> {
        let owner = self.current_player;
        let empty: Vec<Coord2> = self.board.iter_empty().collect();
        let mut found = Vec::new();

        for coords in empty {
            for letter in Letter::ALL {
                let completes = self.board.probe(coords, Mark::new(letter, owner), |board| {
                    !pattern::matches_completed_at(board, coords).is_empty()
                });
                if completes {
                    found.push(Move::new(coords, letter));
                }
            }
        }

        log::trace!("{} potential match move(s) for {owner}", found.len());
        found
    }

    fn finish(&mut self, outcome: Outcome) {
        if self.state.is_finished() {
            return;
        }
        log::info!("game over: {outcome}");
        self.state = EngineState::Finished(outcome);
    }
}
