use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Fixed swatch palette, assigned round-robin at team creation.
pub const PALETTE: [&str; 8] = [
    "#ef4444", "#f97316", "#eab308", "#22c55e", "#06b6d4", "#3b82f6", "#8b5cf6", "#ec4899",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub points: u32,
    pub color: String,
}

impl Team {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            points: 0,
            color: color.into(),
        }
    }

    /// Applies a signed delta to the team's points, clamped so the total
    /// never drops below zero. Any delta is accepted; the sum saturates
    /// rather than overflowing at the i64 extremes. Returns the new total.
    pub fn adjust_points(&mut self, delta: i64) -> u32 {
        let adjusted = i64::from(self.points).saturating_add(delta);
        self.points = adjusted.clamp(0, i64::from(u32::MAX)) as u32;
        self.points
    }
}

/// Cycles through [`PALETTE`], wrapping back to the first entry after the
/// last. Each admin session starts a fresh cursor at the first swatch.
#[derive(Debug, Default)]
pub struct PaletteCursor {
    index: usize,
}

impl PaletteCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// The swatch the next created team will receive.
    pub fn peek(&self) -> &'static str {
        PALETTE[self.index]
    }

    /// Takes the current swatch and moves the cursor forward.
    pub fn advance(&mut self) -> &'static str {
        let color = PALETTE[self.index];
        self.index = (self.index + 1) % PALETTE.len();
        color
    }
}

/// Issues team ids from the millisecond clock. Ids stay strictly increasing
/// even when two creations land on the same millisecond.
#[derive(Debug, Default)]
pub struct IdSource {
    last: i64,
}

impl IdSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts past the highest numeric id already in the collection, so a
    /// session opened within the same millisecond as a stored creation
    /// cannot reissue that id. Non-numeric ids are ignored.
    pub fn seeded_from(teams: &[Team]) -> Self {
        let last = teams
            .iter()
            .filter_map(|team| team.id.parse::<i64>().ok())
            .max()
            .unwrap_or(0);
        Self { last }
    }

    pub fn next(&mut self) -> String {
        let now = Utc::now().timestamp_millis();
        self.last = if now > self.last { now } else { self.last + 1 };
        self.last.to_string()
    }
}
