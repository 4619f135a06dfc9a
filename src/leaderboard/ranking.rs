use crate::store::Team;
use crate::{fmt, str};

/// Decoration for a leaderboard position: the top three get distinct
/// badges, everyone below gets a plain numeric rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankBadge {
    Trophy,
    Medal,
    Award,
    Numeric(usize),
}

impl RankBadge {
    pub fn for_position(position: usize) -> Self {
        match position {
            0 => RankBadge::Trophy,
            1 => RankBadge::Medal,
            2 => RankBadge::Award,
            n => RankBadge::Numeric(n + 1),
        }
    }

    pub fn label(&self) -> String {
        match self {
            RankBadge::Trophy => str!("🏆"),
            RankBadge::Medal => str!("🥈"),
            RankBadge::Award => str!("🥉"),
            RankBadge::Numeric(rank) => fmt!("#{rank}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RankedTeam {
    pub team: Team,
    pub badge: RankBadge,
    /// Set on the first-placed team only when its score is strictly
    /// positive; a board of all-zero scores has no leader.
    pub leading: bool,
}

/// Projects the collection into leaderboard order: points descending,
/// stable, so teams on equal points keep their insertion order.
pub fn rank_teams(teams: &[Team]) -> Vec<RankedTeam> {
    let mut sorted: Vec<Team> = teams.to_vec();
    sorted.sort_by_key(|team| std::cmp::Reverse(team.points));

    sorted
        .into_iter()
        .enumerate()
        .map(|(position, team)| RankedTeam {
            badge: RankBadge::for_position(position),
            leading: position == 0 && team.points > 0,
            team,
        })
        .collect()
}
