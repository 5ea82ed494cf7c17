//! # Trade Analyzer
//!
//! Fairness analysis, structural validation, advisory text, and swap
//! suggestions for proposed trades in an Astral Draft league.
//!
//! The whole pipeline is synchronous, stateless, and pure: every entry
//! point takes immutable snapshots (rosters, bundles, league settings)
//! and returns a value. It is safe to call from any number of request
//! handlers concurrently; there is no shared state to protect.

pub mod advisor;
pub mod analysis;
pub mod cli;
pub mod error;
pub mod impact;
pub mod suggestions;
pub mod validation;

// Re-export main types for easy usage
pub use analysis::{
    fairness_score, grade_for_ratio, grade_for_side, SideAnalysis, TradeAnalysis, TradeAnalyzer,
    TradeGrade,
};
pub use error::{AnalyzerError, Result};
pub use impact::{position_impact, win_probability_delta, PositionImpact};
pub use suggestions::{TradeSuggestion, MAX_SUGGESTIONS, MIN_SUGGESTION_FAIRNESS};
pub use validation::{validate_trade_constraints, TradeConstraints, TradeValidation};
