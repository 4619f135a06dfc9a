pub mod admin;
pub mod config;
pub mod leaderboard;
pub mod logging;
pub mod output;
pub mod store;
pub mod util;

pub type Error = Box<dyn std::error::Error + Send + Sync + 'static>;
