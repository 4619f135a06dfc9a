pub mod board_formatter;
pub mod ranking;
pub mod section;

pub use board_formatter::render;
pub use ranking::{rank_teams, RankBadge, RankedTeam};
pub use section::Section;
