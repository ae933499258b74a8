use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use uuid::Uuid;

use crate::error::HtError;
use crate::models::TrackerState;

/// JSON-backed storage for the tracker state
///
/// The whole document is read on load and rewritten on every save:
///
/// ```text
/// {
///   "tracked_hours": { "2023-06-01": { "PTO": 3600, "PROJECT_X": 0 } },
///   "time_codes": ["PTO", "PROJECT_X"]
/// }
/// ```
///
/// # Example
///
/// ```no_run
/// use ht::store::LedgerFile;
///
/// let file = LedgerFile::new("tracked_hours.json");
/// let mut state = file.load().unwrap();
/// state.time_codes.register("PTO");
/// file.save(&state).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct LedgerFile {
    path: PathBuf,
}

impl LedgerFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        LedgerFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the tracker state
    ///
    /// A missing file yields an empty state. A file that does not match the
    /// expected document shape is reported and also yields an empty state.
    pub fn load(&self) -> Result<TrackerState> {
        if !self.path.exists() {
            log::debug!("No data file at {}, starting empty", self.path.display());
            return Ok(TrackerState::new());
        }

        // Invalid UTF-8 is a malformed document, not an I/O failure
        let content = fs::read(&self.path)
            .with_context(|| format!("Failed to read data file: {}", self.path.display()))?;

        match Self::decode(&content) {
            Ok(state) => {
                log::debug!(
                    "Loaded {} day(s) and {} time code(s) from {}",
                    state.tracked_hours.len(),
                    state.time_codes.len(),
                    self.path.display()
                );
                Ok(state)
            }
            Err(err) => {
                log::debug!("Discarding unreadable data file {}", self.path.display());
                eprintln!("{}", err);
                Ok(TrackerState::new())
            }
        }
    }

    /// Decode a data document into a typed state
    pub fn decode(content: &[u8]) -> Result<TrackerState, HtError> {
        serde_json::from_slice(content).map_err(|e| HtError::PersistenceLoad(e.to_string()))
    }

    /// Write the complete state, replacing the data file atomically
    pub fn save(&self, state: &TrackerState) -> Result<()> {
        let content =
            serde_json::to_string_pretty(state).context("Failed to serialize tracked hours")?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|source| HtError::PersistenceWrite {
            path: dir.clone(),
            source,
        })?;

        let tmp_path = dir.join(format!(".tracked_hours-{}.tmp", Uuid::new_v4()));
        let write_err = |source| HtError::PersistenceWrite {
            path: self.path.clone(),
            source,
        };

        fs::write(&tmp_path, content).map_err(write_err)?;
        if let Err(source) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(write_err(source).into());
        }

        log::debug!(
            "Saved {} day(s) and {} time code(s) to {}",
            state.tracked_hours.len(),
            state.time_codes.len(),
            self.path.display()
        );
        Ok(())
    }
}
