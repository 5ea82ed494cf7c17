//! Advisory text generation
//!
//! Purely informational warnings and recommendations attached to an
//! analysis. Nothing here blocks a trade; structural rejection lives in
//! the validation module.

use crate::impact::PositionImpact;
use league_types::{Player, Position, TradeBundle};

/// Below this fairness the league is likely to veto
pub const VETO_FAIRNESS_THRESHOLD: f64 = 30.0;

/// Below this fairness the trade clearly favors one side
pub const LOPSIDED_FAIRNESS_THRESHOLD: f64 = 50.0;

/// Above this fairness the trade reads as balanced for both sides
pub const FAIR_TRADE_THRESHOLD: f64 = 70.0;

/// Minimum comfortable depth at the high-volume skill positions (RB, WR)
pub const MIN_SKILL_DEPTH: i32 = 4;

/// Minimum comfortable QB depth
pub const MIN_QB_DEPTH: i32 = 2;

/// Build warnings and recommendations from the initiator's perspective
pub(crate) fn build_advice(
    fairness: f64,
    receives: &TradeBundle,
    initiator_impact: &PositionImpact,
) -> (Vec<String>, Vec<String>) {
    let mut warnings = Vec::new();
    let mut recommendations = Vec::new();

    if fairness < VETO_FAIRNESS_THRESHOLD {
        warnings.push("This trade is very lopsided and may be vetoed by the league".to_string());
    } else if fairness < LOPSIDED_FAIRNESS_THRESHOLD {
        warnings.push("This trade favors one side".to_string());
    }

    for position in [Position::RB, Position::WR] {
        if initiator_impact.is_weakened(position)
            && initiator_impact.depth_at(position) < MIN_SKILL_DEPTH
        {
            warnings.push(format!(
                "Trading away {position} depth leaves only {} at the position",
                initiator_impact.depth_at(position)
            ));
        }
    }
    if initiator_impact.is_weakened(Position::QB)
        && initiator_impact.depth_at(Position::QB) < MIN_QB_DEPTH
    {
        warnings.push(format!(
            "Trading away QB depth leaves only {} at the position",
            initiator_impact.depth_at(Position::QB)
        ));
    }

    let injured_count = receives.players.iter().filter(|p| !p.is_healthy()).count();
    if injured_count > 0 {
        warnings.push(format!(
            "Receiving {injured_count} player(s) with an injury designation"
        ));
    }

    if initiator_impact.is_improved(Position::RB) {
        recommendations.push("Improves RB depth, the scarcest position".to_string());
    }

    if !receives.picks.is_empty() {
        recommendations.push("Acquiring draft capital supports future team building".to_string());
    }

    if fairness > FAIR_TRADE_THRESHOLD {
        recommendations.push("Fair trade for both sides".to_string());
    }

    for player in &receives.players {
        if is_buy_low_candidate(player) {
            recommendations.push(format!(
                "{} is a buy-low candidate: trending down but projected to rebound",
                player.name
            ));
        }
    }

    (warnings, recommendations)
}

/// A player trending down whose per-game projection still exceeds their
/// recent average is likely undervalued by the market right now.
fn is_buy_low_candidate(player: &Player) -> bool {
    match &player.recent_performance {
        Some(perf) => {
            perf.trend == league_types::PerformanceTrend::Down
                && player.projected_average() > perf.average_points
        }
        None => false,
    }
}
