use crate::store::Team;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeamStatistics {
    pub team_count: usize,
    pub total_points: u64,
    pub max_points: u32,
    /// Arithmetic mean rounded to the nearest integer; 0 for an empty
    /// collection.
    pub average_points: u32,
}

pub fn calculate(teams: &[Team]) -> TeamStatistics {
    if teams.is_empty() {
        return TeamStatistics::default();
    }

    let total_points: u64 = teams.iter().map(|team| u64::from(team.points)).sum();
    let max_points = teams.iter().map(|team| team.points).max().unwrap_or(0);
    let average_points = (total_points as f64 / teams.len() as f64).round() as u32;

    TeamStatistics {
        team_count: teams.len(),
        total_points,
        max_points,
        average_points,
    }
}
