use crate::store::Team;

/// Applies a signed delta to the matching team's points, clamped at zero.
/// Returns the new total, or `None` when no team has that id.
pub fn adjust_points(teams: &mut [Team], id: &str, delta: i64) -> Option<u32> {
    let team = teams.iter_mut().find(|team| team.id == id)?;
    Some(team.adjust_points(delta))
}
