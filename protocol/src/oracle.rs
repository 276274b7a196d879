//! Boundary to an optional external move-suggestion service.
//!
//! The engine knows nothing about the oracle. A request is a plain snapshot, the reply is free
//! text, and anything that goes wrong ends in the heuristic's move instead.

use sos_core::{Coord, GameEngine, Letter, Move, MoveHeuristic, Player, Variant};
use std::fmt::Write;

use crate::*;

/// Everything the oracle is told about the position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OracleRequest {
    pub board_size: Coord,
    pub current_player: Player,
    pub variant: Variant,
    /// One line per row, cells separated by a space, `.` for empty.
    pub grid: String,
}

impl OracleRequest {
    pub fn from_engine(engine: &GameEngine) -> Self {
        Self {
            board_size: engine.size(),
            current_player: engine.current_player(),
            variant: engine.variant(),
            grid: engine.board().to_string(),
        }
    }

    pub fn prompt(&self) -> String {
        let mut prompt = String::new();
        let size = self.board_size;
        // Writing to a String cannot fail.
        let _ = write!(
            prompt,
            "You are playing an SOS game on a {size}x{size} board.\n\
             The current player is {}. Game mode is {}.\n\
             Here is the board state ('.' for empty):\n{}\n\
             Suggest a single move in the format: row col letter\n\
             Choose a move that creates an SOS if possible, otherwise choose a valid random move.\n\
             Only return the move, nothing else.\n",
            self.current_player, self.variant, self.grid,
        );
        prompt
    }
}

/// A source of move suggestions, typically backed by a network service.
pub trait MoveOracle {
    fn suggest(&mut self, request: &OracleRequest) -> Result<String, OracleError>;
}

/// Parses a reply of exactly `row col letter` for a `size` x `size` board.
pub fn parse_suggestion(reply: &str, size: Coord) -> Result<Move, OracleError> {
    let unparsable = || OracleError::Unparsable(reply.to_string());

    let tokens: Vec<&str> = reply.split_whitespace().collect();
    let [row, col, letter] = tokens[..] else {
        return Err(unparsable());
    };

    let coord = |token: &str| {
        token
            .parse::<Coord>()
            .ok()
            .filter(|&value| value < size)
            .ok_or_else(unparsable)
    };
    let coords = (coord(row)?, coord(col)?);

    let mut chars = letter.chars();
    let letter = match (chars.next(), chars.next()) {
        (Some(ch), None) => Letter::try_from(ch).map_err(|_| unparsable())?,
        _ => return Err(unparsable()),
    };

    Ok(Move::new(coords, letter))
}

/// Chooses the computer's move, asking `oracle` only when no match can be completed right now.
///
/// An unavailable oracle, an unparsable reply, or a suggestion for an occupied cell all fall back
/// to the heuristic.
pub fn choose_move<O: MoveOracle + ?Sized>(
    engine: &mut GameEngine,
    heuristic: &mut MoveHeuristic,
    oracle: Option<&mut O>,
) -> Option<Move> {
    let Some(oracle) = oracle else {
        return heuristic.computer_move(engine);
    };
    if !engine.find_potential_match_moves().is_empty() {
        return heuristic.computer_move(engine);
    }

    let request = OracleRequest::from_engine(engine);
    let suggestion = oracle
        .suggest(&request)
        .and_then(|reply| parse_suggestion(&reply, engine.size()));

    match suggestion {
        Ok(mv) if engine.is_move_valid(mv.coords) => {
            log::debug!("oracle suggested {mv:?}");
            Some(mv)
        }
        Ok(mv) => {
            log::warn!("oracle suggested occupied cell {:?}, using heuristic", mv.coords);
            heuristic.random_move(engine)
        }
        Err(err) => {
            log::warn!("{err}, using heuristic");
            heuristic.random_move(engine)
        }
    }
}
