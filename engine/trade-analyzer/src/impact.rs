//! Positional depth and roster strength impact

use league_types::{Player, Position};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Post-trade positional depth changes for one side
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionImpact {
    /// Positions where the side gained more players than it lost
    pub improved: Vec<Position>,

    /// Positions where the side lost more players than it gained
    pub weakened: Vec<Position>,

    /// Post-trade player count per tracked position
    pub depth: HashMap<Position, i32>,
}

impl PositionImpact {
    pub fn is_improved(&self, position: Position) -> bool {
        self.improved.contains(&position)
    }

    pub fn is_weakened(&self, position: Position) -> bool {
        self.weakened.contains(&position)
    }

    /// Post-trade depth at a position, 0 for untracked positions
    pub fn depth_at(&self, position: Position) -> i32 {
        self.depth.get(&position).copied().unwrap_or(0)
    }
}

fn count_by_position(players: &[Player]) -> HashMap<Position, i32> {
    let mut counts = HashMap::new();
    for player in players {
        *counts.entry(player.position).or_insert(0) += 1;
    }
    counts
}

/// Depth deltas for one side of a trade: depth = current - lost + gained
/// over the tracked positions. Ties (gained == lost) are neither improved
/// nor weakened.
pub fn position_impact(roster: &[Player], gained: &[Player], lost: &[Player]) -> PositionImpact {
    let current = count_by_position(roster);
    let gained_counts = count_by_position(gained);
    let lost_counts = count_by_position(lost);

    let mut improved = Vec::new();
    let mut weakened = Vec::new();
    let mut depth = HashMap::new();

    for position in Position::TRACKED {
        let g = gained_counts.get(&position).copied().unwrap_or(0);
        let l = lost_counts.get(&position).copied().unwrap_or(0);
        let c = current.get(&position).copied().unwrap_or(0);

        depth.insert(position, c - l + g);

        if g > l {
            improved.push(position);
        } else if l > g {
            weakened.push(position);
        }
    }

    PositionImpact { improved, weakened, depth }
}

/// The roster as it would look after the trade settles
pub fn post_trade_roster(roster: &[Player], gained: &[Player], lost: &[Player]) -> Vec<Player> {
    let lost_ids: HashSet<u64> = lost.iter().map(|p| p.id).collect();
    let mut result: Vec<Player> =
        roster.iter().filter(|p| !lost_ids.contains(&p.id)).cloned().collect();
    result.extend(gained.iter().cloned());
    result
}

/// Relative roster-strength change as a percentage.
///
/// A simplified proxy for win-probability movement, not a calibrated
/// model. A roster with zero current strength has nothing to measure
/// against, so its delta is defined as 0.
pub fn win_probability_delta(old_strength: u32, new_strength: u32) -> f64 {
    if old_strength == 0 {
        return 0.0;
    }
    (new_strength as f64 - old_strength as f64) / old_strength as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Player> {
        vec![
            Player::new(1, "QB One", Position::QB),
            Player::new(2, "RB One", Position::RB),
            Player::new(3, "RB Two", Position::RB),
            Player::new(4, "WR One", Position::WR),
        ]
    }

    #[test]
    fn depth_reflects_gained_and_lost() {
        let gained = vec![Player::new(10, "WR New", Position::WR)];
        let lost = vec![Player::new(2, "RB One", Position::RB)];
        let impact = position_impact(&roster(), &gained, &lost);

        assert_eq!(impact.depth_at(Position::RB), 1);
        assert_eq!(impact.depth_at(Position::WR), 2);
        assert_eq!(impact.depth_at(Position::QB), 1);
        assert!(impact.is_improved(Position::WR));
        assert!(impact.is_weakened(Position::RB));
        assert!(!impact.is_improved(Position::QB));
        assert!(!impact.is_weakened(Position::QB));
    }

    #[test]
    fn equal_swap_at_position_is_neither_improved_nor_weakened() {
        let gained = vec![Player::new(10, "RB New", Position::RB)];
        let lost = vec![Player::new(2, "RB One", Position::RB)];
        let impact = position_impact(&roster(), &gained, &lost);

        assert!(!impact.is_improved(Position::RB));
        assert!(!impact.is_weakened(Position::RB));
        assert_eq!(impact.depth_at(Position::RB), 2);
    }

    #[test]
    fn post_trade_roster_swaps_players_by_id() {
        let gained = vec![Player::new(10, "RB New", Position::RB)];
        let lost = vec![Player::new(2, "RB One", Position::RB)];
        let after = post_trade_roster(&roster(), &gained, &lost);

        assert_eq!(after.len(), 4);
        assert!(after.iter().any(|p| p.id == 10));
        assert!(!after.iter().any(|p| p.id == 2));
    }

    #[test]
    fn win_probability_delta_guards_zero_strength() {
        assert_eq!(win_probability_delta(0, 500), 0.0);
        assert_eq!(win_probability_delta(100, 150), 50.0);
        assert_eq!(win_probability_delta(200, 100), -50.0);
        assert_eq!(win_probability_delta(100, 100), 0.0);
    }
}
