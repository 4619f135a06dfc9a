pub mod team;
pub mod team_store;

pub use team::{IdSource, PaletteCursor, Team, PALETTE};
pub use team_store::{JsonFileStore, MemoryStore, StoreError, TeamStore};
