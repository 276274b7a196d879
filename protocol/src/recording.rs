use serde::{Deserialize, Serialize};
use sos_core::{Coord, Coord2, GameEngine, GameError, Letter, Move, Player, PlayerMap, Variant};
use std::fmt;
use std::io::{Read, Write};
use std::str::FromStr;

use crate::*;

/// Who controls one side of a recorded game.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerKind {
    #[default]
    Human,
    Computer,
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Human => "Human",
            Self::Computer => "Computer",
        })
    }
}

impl FromStr for PlayerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("human") {
            Ok(Self::Human)
        } else if s.eq_ignore_ascii_case("computer") {
            Ok(Self::Computer)
        } else {
            Err(format!("unknown player kind {s:?}, expected human or computer"))
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedMove {
    pub row: u32,
    pub col: u32,
    pub letter: Letter,
    pub player: Player,
}

impl RecordedMove {
    pub fn new(mover: Player, mv: Move) -> Self {
        let (row, col) = mv.coords;
        Self {
            row: row.into(),
            col: col.into(),
            letter: mv.letter,
            player: mover,
        }
    }

    /// Coordinates as board coordinates; values that cannot fit any board are rejected.
    pub fn coords(&self) -> Result<Coord2, GameError> {
        let row = Coord::try_from(self.row).map_err(|_| GameError::InvalidCoords)?;
        let col = Coord::try_from(self.col).map_err(|_| GameError::InvalidCoords)?;
        Ok((row, col))
    }

    pub fn to_move(&self) -> Result<Move, GameError> {
        Ok(Move::new(self.coords()?, self.letter))
    }
}

/// A complete game as written to disk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recording {
    pub board_size: u32,
    #[serde(alias = "game_mode")]
    pub variant: Variant,
    #[serde(default)]
    pub player_types: PlayerMap<PlayerKind>,
    pub moves: Vec<RecordedMove>,
}

impl Recording {
    pub fn from_json(json: &str) -> Result<Self, RecordingError> {
        let recording: Self = serde_json::from_str(json)?;
        recording.board_size()?;
        Ok(recording)
    }

    pub fn to_json(&self) -> Result<String, RecordingError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn read_from(reader: impl Read) -> Result<Self, RecordingError> {
        let recording: Self = serde_json::from_reader(reader)?;
        recording.board_size()?;
        Ok(recording)
    }

    pub fn write_to(&self, mut writer: impl Write) -> Result<(), RecordingError> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    /// Board size as accepted by the engine.
    pub fn board_size(&self) -> Result<Coord, GameError> {
        match Coord::try_from(self.board_size) {
            Ok(size) if size >= sos_core::MIN_BOARD_SIZE => Ok(size),
            _ => Err(GameError::InvalidConfiguration {
                size: self.board_size,
            }),
        }
    }

    /// A fresh engine configured the way the recorded game started.
    pub fn new_engine(&self) -> Result<GameEngine, GameError> {
        GameEngine::new(self.board_size()?, self.variant)
    }
}

/// Collects moves as they are played.
#[derive(Clone, Debug)]
pub struct Recorder {
    recording: Recording,
}

impl Recorder {
    pub fn new(engine: &GameEngine, player_types: PlayerMap<PlayerKind>) -> Self {
        Self {
            recording: Recording {
                board_size: engine.size().into(),
                variant: engine.variant(),
                player_types,
                moves: Vec::new(),
            },
        }
    }

    /// Records `mv` as played by `mover`, who must be captured before the move is applied.
    pub fn record(&mut self, mover: Player, mv: Move) {
        log::trace!("recording {mover} {mv:?}");
        self.recording.moves.push(RecordedMove::new(mover, mv));
    }

    pub fn recording(&self) -> &Recording {
        &self.recording
    }

    pub fn finish(self) -> Recording {
        self.recording
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "board_size": 3,
        "game_mode": "simple",
        "player_types": {"Blue": "Human", "Red": "Computer"},
        "moves": [
            {"row": 0, "col": 0, "letter": "S", "player": "Blue"},
            {"row": 1, "col": 1, "letter": "O", "player": "Red"}
        ]
    }"#;

    #[test]
    fn reads_recordings_with_game_mode_key() {
        let recording = Recording::from_json(SAMPLE).unwrap();

        assert_eq!(recording.board_size, 3);
        assert_eq!(recording.variant, Variant::Simple);
        assert_eq!(recording.player_types[Player::Red], PlayerKind::Computer);
        assert_eq!(
            recording.moves[1],
            RecordedMove {
                row: 1,
                col: 1,
                letter: Letter::O,
                player: Player::Red,
            }
        );
    }

    #[test]
    fn player_types_default_to_humans() {
        let json = r#"{"board_size": 4, "variant": "general", "moves": []}"#;

        let recording = Recording::from_json(json).unwrap();

        assert_eq!(recording.variant, Variant::General);
        assert_eq!(recording.player_types, PlayerMap::new(PlayerKind::Human, PlayerKind::Human));
    }

    #[test]
    fn writes_variant_and_players_by_name() {
        let engine = GameEngine::new(3, Variant::General).unwrap();
        let mut recorder = Recorder::new(&engine, PlayerMap::new(PlayerKind::Computer, PlayerKind::Human));
        recorder.record(Player::Blue, Move::new((2, 1), Letter::S));

        let json = recorder.recording().to_json().unwrap();

        assert!(json.contains(r#""variant": "general""#));
        assert!(json.contains(r#""Blue": "Computer""#));
        assert!(json.contains(r#""letter": "S""#));
        assert_eq!(Recording::from_json(&json).unwrap(), recorder.finish());
    }

    #[test]
    fn rejects_invalid_board_size() {
        let json = r#"{"board_size": 2, "variant": "simple", "moves": []}"#;

        assert!(matches!(
            Recording::from_json(json),
            Err(RecordingError::Game(GameError::InvalidConfiguration { size: 2 }))
        ));
        assert!(matches!(
            Recording::from_json("not json"),
            Err(RecordingError::Json(_))
        ));
    }

    #[test]
    fn player_kind_names() {
        assert_eq!("computer".parse::<PlayerKind>(), Ok(PlayerKind::Computer));
        assert_eq!("Human".parse::<PlayerKind>(), Ok(PlayerKind::Human));
        assert!("robot".parse::<PlayerKind>().is_err());
        assert_eq!(PlayerKind::Computer.to_string(), "Computer");
    }

    #[test]
    fn oversized_coordinates_do_not_fit() {
        let mv = RecordedMove {
            row: 300,
            col: 0,
            letter: Letter::S,
            player: Player::Blue,
        };

        assert_eq!(mv.coords(), Err(GameError::InvalidCoords));
    }
}
