//! Shared domain types for the Astral Draft trade engine
//!
//! Closed value types for players, draft picks, trade bundles, and league
//! settings. Every other engine crate consumes these; none of them carry
//! behavior beyond construction, lookup helpers, and validation.

pub mod league;
pub mod player;

pub use league::{LeagueError, LeagueSettings, RosterRequirements, ScoringType};
pub use player::{
    DraftPick, InjuryStatus, PerformanceTrend, Player, Position, RecentPerformance, RosterAsset,
    TradeBundle,
};
