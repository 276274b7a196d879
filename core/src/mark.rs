use core::fmt;
use core::ops::{Index, IndexMut};
use serde::{Deserialize, Serialize};

use crate::*;

/// The two letters that may be written into a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Letter {
    S,
    O,
}

impl Letter {
    pub const ALL: [Letter; 2] = [Letter::S, Letter::O];

    pub const fn as_char(self) -> char {
        match self {
            Self::S => 'S',
            Self::O => 'O',
        }
    }
}

impl TryFrom<char> for Letter {
    type Error = GameError;

    fn try_from(value: char) -> Result<Self> {
        match value.to_ascii_uppercase() {
            'S' => Ok(Self::S),
            'O' => Ok(Self::O),
            _ => Err(GameError::InvalidLetter(value)),
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Always moves first.
    #[default]
    Blue,
    Red,
}

impl Player {
    pub const fn opponent(self) -> Self {
        match self {
            Self::Blue => Self::Red,
            Self::Red => Self::Blue,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Blue => "Blue",
            Self::Red => "Red",
        })
    }
}

/// Content of an occupied cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mark {
    pub letter: Letter,
    pub owner: Player,
}

impl Mark {
    pub const fn new(letter: Letter, owner: Player) -> Self {
        Self { letter, owner }
    }
}

/// A completed S-O-S line, identified by its two `S` endpoints. The middle `O` is implied.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Match {
    pub start: Coord2,
    pub end: Coord2,
}

impl Match {
    /// Builds a match from its endpoints in any order; `start <= end` always holds afterwards.
    pub fn new(a: Coord2, b: Coord2) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }
}

/// A move request: where to write and which letter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub coords: Coord2,
    pub letter: Letter,
}

impl Move {
    pub const fn new(coords: Coord2, letter: Letter) -> Self {
        Self { coords, letter }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Winner(player) => write!(f, "{player} wins"),
            Self::Draw => f.write_str("Draw"),
        }
    }
}

/// One value per player, indexable by [`Player`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    #[serde(rename = "Blue")]
    pub blue: T,
    #[serde(rename = "Red")]
    pub red: T,
}

impl<T> PlayerMap<T> {
    pub const fn new(blue: T, red: T) -> Self {
        Self { blue, red }
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        match player {
            Player::Blue => &self.blue,
            Player::Red => &self.red,
        }
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        match player {
            Player::Blue => &mut self.blue,
            Player::Red => &mut self.red,
        }
    }
}
