use anyhow::Context;
use serde::Deserialize;
use sos_core::{Coord, PlayerMap, Variant};
use sos_protocol::{CommandOracle, PlayerKind};
use std::path::{Path, PathBuf};

/// Game defaults read from a TOML file; command-line flags override each field.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub board_size: Coord,
    pub variant: Variant,
    pub blue: PlayerKind,
    pub red: PlayerKind,
    pub seed: Option<u64>,
    pub record: Option<PathBuf>,
    /// Program consulted for computer moves, see [`sos_protocol::CommandOracle`].
    pub oracle: Option<PathBuf>,
    pub oracle_args: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board_size: 3,
            variant: Variant::Simple,
            blue: PlayerKind::Human,
            red: PlayerKind::Computer,
            seed: None,
            record: None,
            oracle: None,
            oracle_args: Vec::new(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn player_types(&self) -> PlayerMap<PlayerKind> {
        PlayerMap::new(self.blue, self.red)
    }

    pub fn oracle(&self) -> Option<CommandOracle> {
        let program = self.oracle.as_ref()?;
        Some(CommandOracle::new(program, &self.oracle_args))
    }
}
