//! Data exchanged with collaborators outside the rule engine: recorded games and their replay,
//! and the text boundary to an optional move-suggestion oracle.

pub use command::*;
pub use error::*;
pub use oracle::*;
pub use recording::*;
pub use replay::*;

mod command;
mod error;
mod oracle;
mod recording;
mod replay;
