use crate::store::Team;

/// Zeroes every team's points. Ids, names, colors, and membership are left
/// untouched. Confirmation happens at the session layer before this runs.
pub fn reset_all_points(teams: &mut [Team]) {
    for team in teams {
        team.points = 0;
    }
}
