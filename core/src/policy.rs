use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// What happens to the turn after a successful placement.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// No match; the opponent moves next.
    PassTurn,
    /// The mover scored and moves again.
    ExtraTurn,
    /// The mover scored and the game is over.
    Win,
}

/// The rules that differ between variants: how matches affect the turn, and who wins once the
/// board is full.
pub trait TurnPolicy {
    fn on_matches_formed(&self, matches: &[Match], mover: Player) -> Transition;

    fn decide_on_full(&self, matches: &PlayerMap<Vec<Match>>) -> Outcome;
}

/// First match wins outright; a full board without one is a draw.
#[derive(Copy, Clone, Debug, Default)]
pub struct SimplePolicy;

impl TurnPolicy for SimplePolicy {
    fn on_matches_formed(&self, matches: &[Match], _mover: Player) -> Transition {
        if matches.is_empty() {
            Transition::PassTurn
        } else {
            Transition::Win
        }
    }

    fn decide_on_full(&self, _matches: &PlayerMap<Vec<Match>>) -> Outcome {
        Outcome::Draw
    }
}

/// Matches accumulate and earn an extra turn; the most matches on a full board wins.
#[derive(Copy, Clone, Debug, Default)]
pub struct GeneralPolicy;

impl TurnPolicy for GeneralPolicy {
    fn on_matches_formed(&self, matches: &[Match], _mover: Player) -> Transition {
        if matches.is_empty() {
            Transition::PassTurn
        } else {
            Transition::ExtraTurn
        }
    }

    fn decide_on_full(&self, matches: &PlayerMap<Vec<Match>>) -> Outcome {
        use core::cmp::Ordering::*;
        match matches.blue.len().cmp(&matches.red.len()) {
            Greater => Outcome::Winner(Player::Blue),
            Less => Outcome::Winner(Player::Red),
            Equal => Outcome::Draw,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Simple,
    General,
}

impl Variant {
    pub fn policy(self) -> &'static dyn TurnPolicy {
        match self {
            Self::Simple => &SimplePolicy,
            Self::General => &GeneralPolicy,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::General => "general",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UnknownVariant;

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected \"simple\" or \"general\"")
    }
}

impl core::error::Error for UnknownVariant {}

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("simple") {
            Ok(Self::Simple)
        } else if s.eq_ignore_ascii_case("general") {
            Ok(Self::General)
        } else {
            Err(UnknownVariant)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    const ONE: [Match; 1] = [Match {
        start: (0, 0),
        end: (0, 2),
    }];

    #[test]
    fn simple_policy_ends_on_first_match() {
        let policy = Variant::Simple.policy();

        assert_eq!(policy.on_matches_formed(&[], Player::Blue), Transition::PassTurn);
        assert_eq!(policy.on_matches_formed(&ONE, Player::Red), Transition::Win);
        assert_eq!(policy.decide_on_full(&PlayerMap::default()), Outcome::Draw);
    }

    #[test]
    fn general_policy_counts_matches() {
        let policy = Variant::General.policy();

        assert_eq!(policy.on_matches_formed(&ONE, Player::Blue), Transition::ExtraTurn);

        let red_ahead = PlayerMap::new(vec![ONE[0]], vec![ONE[0], ONE[0]]);
        assert_eq!(policy.decide_on_full(&red_ahead), Outcome::Winner(Player::Red));

        let level = PlayerMap::new(vec![ONE[0]], vec![ONE[0]]);
        assert_eq!(policy.decide_on_full(&level), Outcome::Draw);
    }

    #[test]
    fn variant_names() {
        assert_eq!("General".parse::<Variant>(), Ok(Variant::General));
        assert_eq!("simple".parse::<Variant>(), Ok(Variant::Simple));
        assert_eq!("hard".parse::<Variant>(), Err(UnknownVariant));
        assert_eq!(Variant::General.as_str(), "general");
    }
}
