use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, warn};

use super::team::Team;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not write team file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not serialize teams: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The persisted slot holding the full team collection. Loads fail soft:
/// an absent or unreadable slot yields the empty collection, never an error.
/// Saves are full snapshots, overwriting whatever was stored before.
pub trait TeamStore {
    fn load(&self) -> Vec<Team>;
    fn save(&self, teams: &[Team]) -> Result<(), StoreError>;
}

/// Production store: one JSON file, an array of `{id, name, points, color}`
/// objects.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl TeamStore for JsonFileStore {
    fn load(&self) -> Vec<Team> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) => {
                debug!(path = %self.path.display(), error = %err, "No stored teams, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(teams) => teams,
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "Stored team data is unreadable, starting from an empty collection"
                );
                Vec::new()
            }
        }
    }

    fn save(&self, teams: &[Team]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(teams)?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), team_count = teams.len(), "Saved team collection");
        Ok(())
    }
}

/// In-memory substitute for tests; same contract, no disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    teams: RefCell<Vec<Team>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_teams(teams: Vec<Team>) -> Self {
        Self {
            teams: RefCell::new(teams),
        }
    }
}

impl TeamStore for MemoryStore {
    fn load(&self) -> Vec<Team> {
        self.teams.borrow().clone()
    }

    fn save(&self, teams: &[Team]) -> Result<(), StoreError> {
        *self.teams.borrow_mut() = teams.to_vec();
        Ok(())
    }
}
