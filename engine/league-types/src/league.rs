use crate::player::Position;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Errors from league settings validation
#[derive(Debug, Error)]
pub enum LeagueError {
    #[error("invalid week {0}: must be between 1 and {max}", max = LeagueSettings::MAX_WEEK)]
    InvalidWeek(u32),

    #[error("invalid max roster size {0}: must be at least 1")]
    InvalidRosterSize(usize),
}

/// League scoring format; affects pass-catcher valuation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScoringType {
    Standard,
    Ppr,
    HalfPpr,
}

/// Required starter counts per position.
///
/// Doubles as the starter/bench cutoff for the suggestion engine: a player
/// ranked below the starter count at their position is a bench asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterRequirements {
    pub starters: HashMap<Position, u32>,
}

impl Default for RosterRequirements {
    fn default() -> Self {
        let mut starters = HashMap::new();
        starters.insert(Position::QB, 1);
        starters.insert(Position::RB, 2);
        starters.insert(Position::WR, 2);
        starters.insert(Position::TE, 1);
        starters.insert(Position::K, 1);
        starters.insert(Position::DEF, 1);

        Self { starters }
    }
}

impl RosterRequirements {
    /// Required starters at a position; positions without a slot return 0
    pub fn starters_at(&self, position: Position) -> u32 {
        self.starters.get(&position).copied().unwrap_or(0)
    }
}

/// Read-only snapshot of the league configuration a valuation runs under
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueSettings {
    /// Scoring format
    pub scoring: ScoringType,

    /// Current NFL season (e.g., 2025)
    pub season: i32,

    /// Current week, 1-based
    pub current_week: u32,

    /// Starter requirements per position
    #[serde(default)]
    pub roster_requirements: RosterRequirements,

    /// Hard cap on roster size
    pub max_roster_size: usize,

    /// Trades evaluated after this instant are rejected
    #[serde(default)]
    pub trade_deadline: Option<DateTime<Utc>>,
}

impl LeagueSettings {
    /// Week 18 is allowed so a completed regular season still valuates
    /// (remaining-season fraction bottoms out at zero).
    pub const MAX_WEEK: u32 = 18;

    pub fn new(scoring: ScoringType, season: i32, current_week: u32) -> Result<Self, LeagueError> {
        let settings = Self {
            scoring,
            season,
            current_week,
            roster_requirements: RosterRequirements::default(),
            max_roster_size: 16,
            trade_deadline: None,
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), LeagueError> {
        if self.current_week < 1 || self.current_week > Self::MAX_WEEK {
            return Err(LeagueError::InvalidWeek(self.current_week));
        }
        if self.max_roster_size == 0 {
            return Err(LeagueError::InvalidRosterSize(self.max_roster_size));
        }
        Ok(())
    }
}
