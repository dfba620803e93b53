use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const APP_DIR_NAME: &str = "runsnake";
const SCORE_FILE_NAME: &str = "scores.json";

/// Persistent bests across sessions.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreRecord {
    pub high_score: u32,
    pub best_length: u32,
}

impl ScoreRecord {
    /// Folds one finished run into the record. Returns true when either
    /// best improved and the record is worth saving.
    pub fn absorb(&mut self, score: u32, length: u32) -> bool {
        let mut improved = false;

        if score > self.high_score {
            self.high_score = score;
            improved = true;
        }
        if length > self.best_length {
            self.best_length = length;
            improved = true;
        }

        improved
    }
}

/// Returns the platform-correct score file path.
#[must_use]
pub fn scores_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SCORE_FILE_NAME);
    base
}

/// Loads the score record from disk.
///
/// Returns the default record when the file does not yet exist (first run).
/// Returns `Err` when the file exists but cannot be read or parsed, so the
/// caller can surface a warning before entering raw terminal mode.
pub fn load_record() -> io::Result<ScoreRecord> {
    load_record_from_path(&scores_path())
}

/// Saves the score record to disk, creating parent directories when needed.
pub fn save_record(record: ScoreRecord) -> io::Result<()> {
    save_record_to_path(&scores_path(), record)
}

fn load_record_from_path(path: &Path) -> io::Result<ScoreRecord> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(ScoreRecord::default()),
        Err(e) => return Err(e),
    };

    serde_json::from_str(&raw).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn save_record_to_path(path: &Path, record: ScoreRecord) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(&record)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))?;

    fs::write(path, json)
}
