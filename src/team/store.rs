//! Persisted team storage.
//!
//! The confirmed team is kept as a JSON array of character IDs under a
//! single fixed key. Absent or malformed data reads back as "no team";
//! only writes can fail.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::builder::TeamSelection;
use crate::core::StoreError;

/// Storage key of the persisted team.
pub const TEAM_STORAGE_KEY: &str = "selectedTeam";

/// Client-local storage for the confirmed team.
pub trait TeamStore {
    /// Read the saved team. `None` when absent or unreadable.
    fn load(&self) -> Option<TeamSelection>;

    /// Overwrite the saved team.
    fn save(&mut self, selection: &TeamSelection) -> Result<(), StoreError>;

    /// Forget the saved team.
    fn clear(&mut self) -> Result<(), StoreError>;
}

fn decode(raw: &str) -> Option<TeamSelection> {
    match serde_json::from_str(raw) {
        Ok(selection) => Some(selection),
        Err(err) => {
            tracing::warn!(error = %err, "Ignoring malformed persisted team");
            None
        }
    }
}

/// In-memory store holding the raw encoded value.
#[derive(Clone, Debug, Default)]
pub struct MemoryTeamStore {
    raw: Option<String>,
}

impl MemoryTeamStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an arbitrary stored value.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }

    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl TeamStore for MemoryTeamStore {
    fn load(&self) -> Option<TeamSelection> {
        self.raw.as_deref().and_then(decode)
    }

    fn save(&mut self, selection: &TeamSelection) -> Result<(), StoreError> {
        self.raw = Some(serde_json::to_string(selection)?);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.raw = None;
        Ok(())
    }
}

/// File-backed store: one JSON file named after the storage key.
#[derive(Clone, Debug)]
pub struct FileTeamStore {
    path: PathBuf,
}

impl FileTeamStore {
    /// Store the team inside `dir`.
    #[must_use]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{}.json", TEAM_STORAGE_KEY)),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TeamStore for FileTeamStore {
    fn load(&self) -> Option<TeamSelection> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => decode(&raw),
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "Could not read persisted team");
                None
            }
        }
    }

    fn save(&mut self, selection: &TeamSelection) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let raw = serde_json::to_string(selection)?;
        std::fs::write(&self.path, raw)?;
        tracing::debug!(path = %self.path.display(), "Saved team");
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
