//! Rules of SOS: the board, detection of S-O-S lines, the simple and general turn policies and
//! a naive computer opponent.

#![no_std]

extern crate alloc;

pub use board::*;
pub use engine::*;
pub use error::*;
pub use heuristic::*;
pub use mark::*;
pub use pattern::*;
pub use policy::*;
pub use types::*;

mod board;
mod engine;
mod error;
mod heuristic;
mod mark;
mod pattern;
mod policy;
mod types;
