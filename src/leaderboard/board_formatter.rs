use crate::leaderboard::ranking::{rank_teams, RankedTeam};
use crate::leaderboard::section::Section;
use crate::output::{TableBuilder, Text};
use crate::store::Team;
use crate::{fmt, str};

const TITLE: &str = "🏆 Team Leaderboard";

/// Renders the full leaderboard view: title, ranked table, and the
/// leading-team footer. An empty collection gets an explicit empty-state
/// message rather than an empty table.
pub fn render(teams: &[Team]) -> String {
    let ranked = rank_teams(teams);
    if ranked.is_empty() {
        return fmt!("{TITLE}\n\nNo teams have been created yet.\n");
    }

    let mut out = build_board_section(&ranked).render();
    if let Some(first) = ranked.first() {
        if first.leading {
            out.push('\n');
            out.push_str(&fmt!("🥇 {} is in the lead!\n", first.team.name));
        }
    }
    out
}

fn build_board_section(ranked: &[RankedTeam]) -> Section {
    TableBuilder::new(TITLE)
        .add_column(Text::new(
            "Rank",
            ranked.iter().map(|r| r.badge.label()).collect(),
        ))
        .add_column(Text::new(
            "Team",
            ranked.iter().map(|r| str!(r.team.name)).collect(),
        ))
        .add_column(Text::new(
            "Color",
            ranked.iter().map(|r| str!(r.team.color)).collect(),
        ))
        .add_column(Text::new(
            "Points",
            ranked.iter().map(|r| fmt!("{} pts", r.team.points)).collect(),
        ))
        .build()
}
