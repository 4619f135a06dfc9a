use clap::{Parser, Subcommand};
use tracing::info;

use scoreboard::store::{JsonFileStore, TeamStore};
use scoreboard::{admin, config, leaderboard, logging, Error};

#[derive(Debug, Parser)]
#[command(name = "scoreboard", about = "Local team scoreboard", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive admin panel: create/delete teams, adjust points
    Admin,
    /// Render the ranked leaderboard (the default)
    Leaderboard,
}

fn main() -> Result<(), Error> {
    if std::env::var("RUST_BACKTRACE").is_err() {
        std::env::set_var("RUST_BACKTRACE", "1");
    }

    let cli = Cli::parse();
    let cfg = config::load_config()?;
    logging::init(&cfg.log)?;

    let store = JsonFileStore::new(cfg.teams_path.clone());
    info!(teams_path = %store.path().display(), "Scoreboard starting");

    match cli.command.unwrap_or(Command::Leaderboard) {
        Command::Admin => admin::run(&store),
        Command::Leaderboard => {
            let teams = store.load();
            print!("{}", leaderboard::render(&teams));
            Ok(())
        }
    }
}
