use pretty_assertions::assert_eq;

use scoreboard::leaderboard::{self, rank_teams, RankBadge};
use scoreboard::store::Team;

fn team(id: &str, name: &str, points: u32) -> Team {
    let mut team = Team::new(id, name, "#ef4444");
    team.adjust_points(i64::from(points));
    team
}

#[test]
fn ranking_orders_by_points_descending() {
    let teams = vec![
        team("1", "Reds", 2),
        team("2", "Blues", 9),
        team("3", "Greens", 5),
        team("4", "Yellows", 7),
    ];

    let ranked = rank_teams(&teams);
    for pair in ranked.windows(2) {
        assert!(
            pair[0].team.points >= pair[1].team.points,
            "{} should not outrank {}",
            pair[1].team.name,
            pair[0].team.name
        );
    }
    assert_eq!(
        ranked.iter().map(|r| r.team.name.as_str()).collect::<Vec<_>>(),
        vec!["Blues", "Yellows", "Greens", "Reds"]
    );
}

#[test]
fn equal_points_keep_insertion_order() {
    let teams = vec![
        team("1", "Reds", 5),
        team("2", "Blues", 5),
        team("3", "Greens", 7),
        team("4", "Yellows", 5),
    ];

    let ranked = rank_teams(&teams);
    assert_eq!(
        ranked.iter().map(|r| r.team.name.as_str()).collect::<Vec<_>>(),
        vec!["Greens", "Reds", "Blues", "Yellows"]
    );
}

#[test]
fn top_three_get_badges_and_the_rest_numeric_ranks() {
    let teams: Vec<Team> = (0u32..5)
        .map(|i| team(&i.to_string(), &format!("Team {i}"), 50 - i))
        .collect();

    let ranked = rank_teams(&teams);
    let badges: Vec<RankBadge> = ranked.iter().map(|r| r.badge).collect();
    assert_eq!(
        badges,
        vec![
            RankBadge::Trophy,
            RankBadge::Medal,
            RankBadge::Award,
            RankBadge::Numeric(4),
            RankBadge::Numeric(5),
        ]
    );
    assert_eq!(RankBadge::Numeric(4).label(), "#4");
}

#[test]
fn trophy_and_medal_scenario() {
    let teams = vec![team("1", "Reds", 3), team("2", "Blues", 5)];

    let ranked = rank_teams(&teams);
    assert_eq!(ranked[0].team.name, "Blues");
    assert_eq!(ranked[0].badge, RankBadge::Trophy);
    assert_eq!(ranked[1].team.name, "Reds");
    assert_eq!(ranked[1].badge, RankBadge::Medal);

    let rendered = leaderboard::render(&teams);
    let blues_at = rendered.find("Blues").expect("Blues should be rendered");
    let reds_at = rendered.find("Reds").expect("Reds should be rendered");
    assert!(blues_at < reds_at, "Blues must be listed before Reds");
    assert!(rendered.contains("🏆"));
    assert!(rendered.contains("🥈"));
    assert!(rendered.contains("🥇 Blues is in the lead!"));
}

#[test]
fn no_leading_footer_when_the_top_score_is_zero() {
    let teams = vec![team("1", "Reds", 0), team("2", "Blues", 0)];

    let ranked = rank_teams(&teams);
    assert!(!ranked[0].leading);

    let rendered = leaderboard::render(&teams);
    assert!(!rendered.contains("in the lead"));
}

#[test]
fn empty_collection_renders_the_empty_state() {
    let rendered = leaderboard::render(&[]);
    assert!(rendered.contains("No teams have been created yet."));
    assert!(!rendered.contains('|'), "no table rows expected:\n{rendered}");
}
