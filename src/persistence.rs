//! High-score persistence.
//!
//! The record is a small JSON object, `{"high_score": N}`.  Reads never
//! fail from the caller's point of view: a missing, unreadable or malformed
//! file is logged and treated as a score of 0.

use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// On-disk shape of the score file.  Unknown fields are ignored.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ScoreRecord {
    #[serde(default)]
    high_score: u32,
}

/// Why a stored high score could not be read.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no score file at {}", .0.display())]
    Missing(PathBuf),
    #[error("cannot read {}: {source}", .path.display())]
    Unreadable { path: PathBuf, source: io::Error },
    #[error("malformed score file {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// File-backed store for the single best score.
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$HOME/.balloon_shooter.json`, or the working directory without `HOME`.
    pub fn default_path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".balloon_shooter.json")
    }

    /// Read the stored score, reporting why it could not be read.
    pub fn try_load(&self) -> Result<u32, LoadError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(LoadError::Missing(self.path.clone()))
            }
            Err(source) => {
                return Err(LoadError::Unreadable {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        let record: ScoreRecord =
            serde_json::from_str(&text).map_err(|source| LoadError::Malformed {
                path: self.path.clone(),
                source,
            })?;
        Ok(record.high_score)
    }

    /// Stored score, or 0 when there is none worth trusting.
    pub fn load(&self) -> u32 {
        match self.try_load() {
            Ok(score) => {
                log::info!("loaded high score {} from {}", score, self.path.display());
                score
            }
            Err(e @ LoadError::Missing(_)) => {
                log::info!("{e}; starting from 0");
                0
            }
            Err(e) => {
                log::warn!("{e}; starting from 0");
                0
            }
        }
    }

    /// Persist `max(stored, candidate)` and return it.  A failed write is
    /// logged; the returned value is still the best known score.
    pub fn save(&self, candidate: u32) -> u32 {
        let best = self.load().max(candidate);
        let record = ScoreRecord { high_score: best };
        match serde_json::to_string(&record) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&self.path, json) {
                    log::warn!("cannot write {}: {}", self.path.display(), e);
                } else {
                    log::info!("high score {} saved to {}", best, self.path.display());
                }
            }
            Err(e) => log::warn!("cannot encode high score: {}", e),
        }
        best
    }
}
