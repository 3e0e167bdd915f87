//! Balloon Shooter: a terminal arcade game.
//!
//! - `entities`: plain data for the cannon, projectiles, balloons and state
//! - `difficulty`: level → spawn/speed/rarity parameters
//! - `compute`: the per-tick simulation step
//! - `input`: terminal events → per-tick input, termination signals
//! - `persistence`: the high-score file
//! - `config`: command-line options

pub mod compute;
pub mod config;
pub mod difficulty;
pub mod entities;
pub mod input;
pub mod persistence;

pub use compute::{init_state, tick};
pub use config::Config;
pub use difficulty::{difficulty, Difficulty};
pub use entities::{FrameSnapshot, GameState, TickInput};
pub use persistence::{HighScoreStore, LoadError};
