use serde::{Deserialize, Serialize};
use std::fmt;

/// Fantasy-relevant roster position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    K,
    DEF,
    FLEX,
}

impl Position {
    /// The positions the impact analyzer reports depth for.
    ///
    /// FLEX is deliberately excluded: a FLEX slot is filled from the other
    /// positions, so it has no depth count of its own.
    pub const TRACKED: [Position; 6] = [
        Position::QB,
        Position::RB,
        Position::WR,
        Position::TE,
        Position::K,
        Position::DEF,
    ];
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::K => "K",
            Position::DEF => "DEF",
            Position::FLEX => "FLEX",
        };
        write!(f, "{s}")
    }
}

/// League-reported injury designation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InjuryStatus {
    #[default]
    Active,
    Questionable,
    Doubtful,
    Out,
    Ir,
    Suspended,
}

/// Direction of a player's recent scoring trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceTrend {
    Up,
    Down,
    Stable,
}

/// Summary of a player's recent output, supplied by the stats provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentPerformance {
    /// Average fantasy points per game over the summary window
    pub average_points: f64,
    /// Direction the per-game output is moving
    pub trend: PerformanceTrend,
    /// 0.0 - 1.0, higher means steadier week-to-week output
    pub consistency: f64,
}

/// A rostered fantasy player as supplied by the data layer.
///
/// Immutable within a single valuation call. Stat history and projections
/// are optional in practice (rookies, deep bench players) and every
/// consumer treats an empty list as "no data", never as an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Stable player ID from the league's player pool
    pub id: u64,

    /// Display name (e.g., "Lamar Jackson")
    pub name: String,

    /// Primary roster position
    pub position: Position,

    /// Current injury designation
    #[serde(default)]
    pub injury_status: InjuryStatus,

    /// Fantasy points per completed game, most recent first
    #[serde(default)]
    pub recent_points: Vec<f64>,

    /// Forward-looking per-week point projections for the rest of the season
    #[serde(default)]
    pub projected_points: Vec<f64>,

    /// Optional provider-computed summary of recent output
    #[serde(default)]
    pub recent_performance: Option<RecentPerformance>,
}

impl Player {
    /// Create a player with no stat history or projections
    pub fn new(id: u64, name: impl Into<String>, position: Position) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            injury_status: InjuryStatus::Active,
            recent_points: Vec::new(),
            projected_points: Vec::new(),
            recent_performance: None,
        }
    }

    /// Total projected points over the remaining season
    pub fn projected_total(&self) -> f64 {
        self.projected_points.iter().sum()
    }

    /// Mean projected points per remaining game, 0.0 with no projections
    pub fn projected_average(&self) -> f64 {
        if self.projected_points.is_empty() {
            0.0
        } else {
            self.projected_total() / self.projected_points.len() as f64
        }
    }

    /// Whether the player carries any injury designation
    pub fn is_healthy(&self) -> bool {
        self.injury_status == InjuryStatus::Active
    }
}

/// A draft pick held as a tradeable asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftPick {
    /// Draft round, 1-based
    pub round: u32,

    /// Season the pick will be exercised in
    pub season: i32,

    /// Team the pick originally belonged to, if it has already been traded
    #[serde(default)]
    pub original_owner: Option<u64>,
}

impl DraftPick {
    pub fn new(round: u32, season: i32) -> Self {
        Self { round, season, original_owner: None }
    }
}

/// Either kind of tradeable roster asset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RosterAsset {
    Player(Player),
    Pick(DraftPick),
}

/// The set of assets one side of a trade gives or receives
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TradeBundle {
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub picks: Vec<DraftPick>,
}

impl TradeBundle {
    pub fn from_players(players: Vec<Player>) -> Self {
        Self { players, picks: Vec::new() }
    }

    pub fn from_picks(picks: Vec<DraftPick>) -> Self {
        Self { players: Vec::new(), picks }
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty() && self.picks.is_empty()
    }

    pub fn asset_count(&self) -> usize {
        self.players.len() + self.picks.len()
    }

    /// IDs of the players in the bundle
    pub fn player_ids(&self) -> Vec<u64> {
        self.players.iter().map(|p| p.id).collect()
    }
}
