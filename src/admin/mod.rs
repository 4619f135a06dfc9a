pub mod adjust_points;
pub mod create_team;
pub mod delete_team;
pub mod reset_points;
pub mod stats;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::info;

use crate::leaderboard;
use crate::output::{TableBuilder, Text};
use crate::store::{IdSource, PaletteCursor, Team, TeamStore};
use crate::{fmt, str, Error};

/// One interactive admin session: a working copy of the collection loaded
/// at startup, persisted in full after every mutation.
pub struct AdminSession<'a, S: TeamStore> {
    store: &'a S,
    teams: Vec<Team>,
    ids: IdSource,
    palette: PaletteCursor,
}

pub fn run<S: TeamStore>(store: &S) -> Result<(), Error> {
    let mut session = AdminSession::new(store);
    let mut editor = DefaultEditor::new()?;

    println!("🔧 Admin panel (type 'help' for commands, 'quit' to leave)");
    loop {
        match editor.readline("admin> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line);
                if !session.dispatch(line, &mut editor)? {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

impl<'a, S: TeamStore> AdminSession<'a, S> {
    pub fn new(store: &'a S) -> Self {
        let teams = store.load();
        Self {
            ids: IdSource::seeded_from(&teams),
            teams,
            store,
            palette: PaletteCursor::new(),
        }
    }

    /// Returns `Ok(false)` when the session should end.
    fn dispatch(&mut self, line: &str, editor: &mut DefaultEditor) -> Result<bool, Error> {
        let (command, args) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "add" => self.handle_add(args)?,
            "remove" => self.handle_remove(args)?,
            "plus" => self.handle_adjust(args, 1)?,
            "minus" => self.handle_adjust(args, -1)?,
            "reset" => self.handle_reset(editor)?,
            "stats" => self.handle_stats(),
            "list" => self.handle_list(),
            "leaderboard" => print!("{}", leaderboard::render(&self.teams)),
            "help" => print_help(),
            "quit" | "exit" => return Ok(false),
            other => println!("Unknown command '{other}'. Type 'help' for the command list."),
        }
        Ok(true)
    }

    fn handle_add(&mut self, name: &str) -> Result<(), Error> {
        match create_team::create_team(&mut self.teams, &mut self.ids, &mut self.palette, name) {
            Some(team) => {
                self.persist()?;
                info!(team_id = %team.id, team_name = %team.name, color = %team.color, "Created team");
                println!(
                    "Created team {} (id {}, color {}).",
                    team.name, team.id, team.color
                );
            }
            None => println!("A team needs a non-empty name."),
        }
        Ok(())
    }

    fn handle_remove(&mut self, args: &str) -> Result<(), Error> {
        let Some(id) = args.split_whitespace().next() else {
            println!("Usage: remove <id>");
            return Ok(());
        };

        match delete_team::delete_team(&mut self.teams, id) {
            Some(team) => {
                self.persist()?;
                info!(team_id = %team.id, team_name = %team.name, "Deleted team");
                println!("Deleted team {}.", team.name);
            }
            None => println!("No team with id {id}."),
        }
        Ok(())
    }

    fn handle_adjust(&mut self, args: &str, sign: i64) -> Result<(), Error> {
        let mut tokens = args.split_whitespace();
        let Some(id) = tokens.next() else {
            println!("Usage: plus <id> [n] / minus <id> [n]");
            return Ok(());
        };
        let amount = match tokens.next() {
            None => 1,
            Some(raw) => match raw.parse::<u32>() {
                Ok(amount) => amount,
                Err(_) => {
                    println!("'{raw}' is not a point amount.");
                    return Ok(());
                }
            },
        };

        let delta = sign * i64::from(amount);
        match adjust_points::adjust_points(&mut self.teams, id, delta) {
            Some(points) => {
                self.persist()?;
                let name = self
                    .teams
                    .iter()
                    .find(|team| team.id == id)
                    .map(|team| team.name.as_str())
                    .unwrap_or(id);
                info!(team_id = %id, delta, points, "Adjusted points");
                println!("{name} now has {points} pts.");
            }
            None => println!("No team with id {id}."),
        }
        Ok(())
    }

    fn handle_reset(&mut self, editor: &mut DefaultEditor) -> Result<(), Error> {
        // A declined or interrupted prompt aborts with no state change.
        let confirmed = matches!(
            editor.readline("Reset all points to zero? [y/N] "),
            Ok(answer) if matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
        );
        if !confirmed {
            println!("Reset cancelled.");
            return Ok(());
        }

        reset_points::reset_all_points(&mut self.teams);
        self.persist()?;
        info!(team_count = self.teams.len(), "Reset all points to zero");
        println!("All points reset to zero.");
        Ok(())
    }

    fn handle_stats(&self) {
        let stats = stats::calculate(&self.teams);
        println!("📊 Statistics");
        println!("  Teams:        {}", stats.team_count);
        println!("  Total points: {}", stats.total_points);
        println!("  Max score:    {}", stats.max_points);
        println!("  Average:      {}", stats.average_points);
    }

    fn handle_list(&self) {
        if self.teams.is_empty() {
            println!("No teams have been created yet.");
            return;
        }

        let section = TableBuilder::new(fmt!("🔧 Teams ({})", self.teams.len()))
            .add_column(Text::new(
                "Id",
                self.teams.iter().map(|team| str!(team.id)).collect(),
            ))
            .add_column(Text::new(
                "Team",
                self.teams.iter().map(|team| str!(team.name)).collect(),
            ))
            .add_column(Text::new(
                "Color",
                self.teams.iter().map(|team| str!(team.color)).collect(),
            ))
            .add_column(Text::new(
                "Points",
                self.teams
                    .iter()
                    .map(|team| fmt!("{} pts", team.points))
                    .collect(),
            ))
            .build();
        print!("{}", section.render());
    }

    fn persist(&self) -> Result<(), Error> {
        self.store.save(&self.teams)?;
        Ok(())
    }
}

fn print_help() {
    println!("Commands:");
    println!("  add <name>      create a team (next palette color, 0 pts)");
    println!("  remove <id>     delete a team");
    println!("  plus <id> [n]   add points (default 1)");
    println!("  minus <id> [n]  remove points (floor of zero, default 1)");
    println!("  reset           set every team's points to zero (asks first)");
    println!("  stats           team count, total, max, and average points");
    println!("  list            teams in creation order");
    println!("  leaderboard     ranked view, points descending");
    println!("  quit            leave the admin panel");
}
