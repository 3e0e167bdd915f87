//! Command-line configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::persistence::HighScoreStore;

/// Pop falling balloons with a cannon.  ← → / A D move, SPACE fires,
/// P pauses, Q quits.
#[derive(Debug, Clone, Parser)]
#[command(name = "balloon_shooter", version)]
pub struct Config {
    /// Where the high score is kept (default: $HOME/.balloon_shooter.json).
    #[arg(long, value_name = "PATH")]
    pub score_file: Option<PathBuf>,

    /// Seed for balloon spawning; omit for a different game every run.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Target simulation rate in ticks per second.
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=240))]
    pub fps: u32,
}

impl Config {
    pub fn score_path(&self) -> PathBuf {
        self.score_file
            .clone()
            .unwrap_or_else(HighScoreStore::default_path)
    }

    /// Wall-clock budget for one tick.
    pub fn frame_budget(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }
}
