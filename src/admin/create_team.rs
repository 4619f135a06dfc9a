use crate::store::{IdSource, PaletteCursor, Team};

/// Creates a team from the pending name, assigning a fresh id and the next
/// palette swatch. A blank or whitespace-only name is rejected: nothing is
/// appended and the palette cursor does not advance.
pub fn create_team(
    teams: &mut Vec<Team>,
    ids: &mut IdSource,
    palette: &mut PaletteCursor,
    name: &str,
) -> Option<Team> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    let team = Team::new(ids.next(), name, palette.advance());
    teams.push(team.clone());
    Some(team)
}
