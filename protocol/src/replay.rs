use sos_core::{GameEngine, Move, MoveOutcome, Player};

use crate::*;

/// One move re-applied from a recording.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ReplayStep {
    pub index: usize,
    pub mover: Player,
    pub mv: Move,
    pub outcome: MoveOutcome,
    pub game_over: bool,
}

/// Drives a fresh engine through a recorded move list using only the public move contract.
#[derive(Clone, Debug)]
pub struct Replay<'a> {
    recording: &'a Recording,
    engine: GameEngine,
    next: usize,
}

impl<'a> Replay<'a> {
    pub fn new(recording: &'a Recording) -> Result<Self, RecordingError> {
        Ok(Self {
            recording,
            engine: recording.new_engine()?,
            next: 0,
        })
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn into_engine(self) -> GameEngine {
        self.engine
    }

    /// Moves not yet replayed.
    pub fn remaining(&self) -> usize {
        self.recording.moves.len() - self.next
    }

    /// Applies the next recorded move, putting the recorded mover on turn first. Returns `None`
    /// once the moves run out or the game has ended.
    pub fn step(&mut self) -> Result<Option<ReplayStep>, RecordingError> {
        if self.engine.is_game_over() {
            return Ok(None);
        }
        let Some(recorded) = self.recording.moves.get(self.next) else {
            self.engine.check_game_over();
            return Ok(None);
        };

        let index = self.next;
        let invalid = |source| RecordingError::InvalidMove { index, source };
        let mv = recorded.to_move().map_err(invalid)?;

        self.engine.force_current_player(recorded.player);
        let outcome = self.engine.play(mv).map_err(invalid)?;
        let game_over = self.engine.check_game_over();
        self.next += 1;

        log::debug!("replayed move #{index}: {} {mv:?} -> {outcome:?}", recorded.player);
        Ok(Some(ReplayStep {
            index,
            mover: recorded.player,
            mv,
            outcome,
            game_over,
        }))
    }

    /// Replays every remaining move and returns the final engine state.
    pub fn run_to_end(mut self) -> Result<GameEngine, RecordingError> {
        while self.step()?.is_some() {}
        Ok(self.engine)
    }
}
