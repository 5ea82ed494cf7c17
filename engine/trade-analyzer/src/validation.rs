//! Structural trade validation
//!
//! Independent of fairness analysis: these checks gate whether a trade
//! can be committed at all. Failures accumulate as user-facing messages
//! so a trade UI can show every problem at once.

use chrono::{DateTime, Utc};
use league_types::{LeagueSettings, Player};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Structural constraints a trade must satisfy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeConstraints {
    /// Hard cap on post-trade roster size for both sides
    pub max_roster_size: usize,

    /// Trades evaluated after this instant are rejected
    pub trade_deadline: Option<DateTime<Utc>>,
}

impl From<&LeagueSettings> for TradeConstraints {
    fn from(settings: &LeagueSettings) -> Self {
        Self {
            max_roster_size: settings.max_roster_size,
            trade_deadline: settings.trade_deadline,
        }
    }
}

/// Result of structural validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeValidation {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Validate a proposed trade against the structural constraints.
///
/// `given_ids` are players the initiator sends, `received_ids` players
/// the initiator gets back. Never panics; returns every violated rule.
pub fn validate_trade_constraints(
    initiator_roster: &[Player],
    partner_roster: &[Player],
    given_ids: &[u64],
    received_ids: &[u64],
    constraints: &TradeConstraints,
) -> TradeValidation {
    let mut errors = Vec::new();

    if let Some(deadline) = constraints.trade_deadline {
        if Utc::now() > deadline {
            errors.push("The trade deadline has passed".to_string());
        }
    }

    let initiator_new_size =
        initiator_roster.len().saturating_sub(given_ids.len()) + received_ids.len();
    if initiator_new_size > constraints.max_roster_size {
        errors.push(format!(
            "Trade would put your roster at {initiator_new_size} players, above the limit of {}",
            constraints.max_roster_size
        ));
    }

    let partner_new_size =
        partner_roster.len().saturating_sub(received_ids.len()) + given_ids.len();
    if partner_new_size > constraints.max_roster_size {
        errors.push(format!(
            "Trade would put your partner's roster at {partner_new_size} players, above the limit of {}",
            constraints.max_roster_size
        ));
    }

    let initiator_ids: HashSet<u64> = initiator_roster.iter().map(|p| p.id).collect();
    let partner_ids: HashSet<u64> = partner_roster.iter().map(|p| p.id).collect();
    let given: HashSet<u64> = given_ids.iter().copied().collect();

    for &id in received_ids {
        if initiator_ids.contains(&id) && !given.contains(&id) {
            errors.push(format!("Player {id} is already on your roster"));
        }
    }

    for &id in given_ids {
        if !initiator_ids.contains(&id) {
            errors.push(format!("Cannot trade away player {id}: not on your roster"));
        }
    }

    for &id in received_ids {
        if !partner_ids.contains(&id) {
            errors.push(format!("Cannot receive player {id}: your partner does not own them"));
        }
    }

    TradeValidation { valid: errors.is_empty(), errors }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use league_types::Position;

    fn roster(ids: &[u64]) -> Vec<Player> {
        ids.iter().map(|&id| Player::new(id, format!("Player {id}"), Position::RB)).collect()
    }

    fn constraints(max: usize) -> TradeConstraints {
        TradeConstraints { max_roster_size: max, trade_deadline: None }
    }

    #[test]
    fn clean_swap_passes() {
        let result = validate_trade_constraints(
            &roster(&[1, 2, 3]),
            &roster(&[10, 11, 12]),
            &[1],
            &[10],
            &constraints(16),
        );
        assert!(result.valid, "unexpected errors: {:?}", result.errors);
    }

    #[test]
    fn one_for_one_swap_at_max_roster_size_passes() {
        let result = validate_trade_constraints(
            &roster(&[1, 2, 3, 4]),
            &roster(&[10, 11, 12, 13]),
            &[1],
            &[10],
            &constraints(4),
        );
        assert!(result.valid, "unexpected errors: {:?}", result.errors);
    }

    #[test]
    fn passed_deadline_rejects() {
        let mut c = constraints(16);
        c.trade_deadline = Some(Utc::now() - Duration::hours(1));
        let result =
            validate_trade_constraints(&roster(&[1]), &roster(&[10]), &[1], &[10], &c);
        assert!(!result.valid);
        assert!(result.errors.iter().any(|e| e.contains("deadline")));
    }

    #[test]
    fn future_deadline_accepts() {
        let mut c = constraints(16);
        c.trade_deadline = Some(Utc::now() + Duration::hours(1));
        let result =
            validate_trade_constraints(&roster(&[1]), &roster(&[10]), &[1], &[10], &c);
        assert!(result.valid);
    }

    #[test]
    fn uneven_trade_over_roster_cap_rejects() {
        let result = validate_trade_constraints(
            &roster(&[1, 2, 3, 4]),
            &roster(&[10, 11, 12]),
            &[1],
            &[10, 11],
            &constraints(4),
        );
        assert!(!result.valid);
        assert!(result.errors.iter().any(|e| e.contains("above the limit")));
    }

    #[test]
    fn giving_unowned_player_rejects() {
        let result = validate_trade_constraints(
            &roster(&[1, 2]),
            &roster(&[10]),
            &[99],
            &[10],
            &constraints(16),
        );
        assert!(!result.valid);
        assert!(result.errors.iter().any(|e| e.contains("not on your roster")));
    }

    #[test]
    fn receiving_player_partner_does_not_own_rejects() {
        let result = validate_trade_constraints(
            &roster(&[1, 2]),
            &roster(&[10]),
            &[1],
            &[99],
            &constraints(16),
        );
        assert!(!result.valid);
        assert!(result.errors.iter().any(|e| e.contains("does not own")));
    }

    #[test]
    fn receiving_a_player_already_kept_rejects() {
        // player 2 is on the initiator's roster and not part of the give
        let result = validate_trade_constraints(
            &roster(&[1, 2]),
            &roster(&[2, 10]),
            &[1],
            &[2],
            &constraints(16),
        );
        assert!(!result.valid);
        assert!(result.errors.iter().any(|e| e.contains("already on your roster")));
    }

    #[test]
    fn all_violations_are_reported_together() {
        let mut c = constraints(2);
        c.trade_deadline = Some(Utc::now() - Duration::hours(1));
        let result = validate_trade_constraints(
            &roster(&[1, 2]),
            &roster(&[10]),
            &[99],
            &[98, 97],
            &c,
        );
        assert!(!result.valid);
        assert!(result.errors.len() >= 3);
    }
}
