use crate::store::Team;

/// Removes the team matching `id`, returning it; `None` when no team has
/// that id (the collection is left untouched).
pub fn delete_team(teams: &mut Vec<Team>, id: &str) -> Option<Team> {
    let index = teams.iter().position(|team| team.id == id)?;
    Some(teams.remove(index))
}
