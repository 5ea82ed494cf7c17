//! Trade suggestion generation
//!
//! Scans two rosters for complementary surpluses and proposes balanced
//! one-for-one swaps. Policy thresholds are named constants; they encode
//! product decisions, not algorithmic necessities.

use crate::analysis::{fairness_score, TradeAnalyzer};
use league_types::{LeagueSettings, Player, Position, RosterRequirements};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Suggestions below this fairness are discarded
pub const MIN_SUGGESTION_FAIRNESS: f64 = 40.0;

/// Maximum suggestions returned per scan
pub const MAX_SUGGESTIONS: usize = 5;

/// A proposed one-for-one swap between two rosters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeSuggestion {
    /// Player sent from the scanning roster
    pub give: Player,

    /// Player received from the target roster
    pub receive: Player,

    /// Fairness of the swap, 0-100
    pub fairness: f64,

    /// Why this swap was proposed
    pub rationale: String,
}

/// Players at each position ranked outside the starter cutoff.
///
/// Ranking is by projected season total, so a player with no projections
/// ranks behind every projected teammate at the position.
fn bench_by_position<'a>(
    roster: &'a [Player],
    requirements: &RosterRequirements,
) -> HashMap<Position, Vec<&'a Player>> {
    let mut by_position: HashMap<Position, Vec<&'a Player>> = HashMap::new();
    for player in roster {
        by_position.entry(player.position).or_default().push(player);
    }

    let mut bench = HashMap::new();
    for (position, mut players) in by_position {
        players.sort_by(|a, b| {
            b.projected_total().partial_cmp(&a.projected_total()).unwrap_or(std::cmp::Ordering::Equal)
        });
        let starters = requirements.starters_at(position) as usize;
        if players.len() > starters {
            bench.insert(position, players.split_off(starters));
        }
    }
    bench
}

impl TradeAnalyzer {
    /// Propose one-for-one swaps that shore up `my_roster`'s thin
    /// positions from `target_roster`'s surplus.
    ///
    /// A position is a need when the roster holds no more than its starter
    /// count; the target has surplus there when at least two bench players
    /// remain behind their starters. Gives come from the scanning roster's
    /// own bench, weakest first. Results are filtered to fairness above
    /// [`MIN_SUGGESTION_FAIRNESS`] and capped at [`MAX_SUGGESTIONS`],
    /// sorted by descending fairness.
    pub fn generate_suggestions(
        &self,
        my_roster: &[Player],
        target_roster: &[Player],
        settings: &LeagueSettings,
    ) -> Vec<TradeSuggestion> {
        let requirements = &settings.roster_requirements;

        let mut my_counts: HashMap<Position, usize> = HashMap::new();
        for player in my_roster {
            *my_counts.entry(player.position).or_insert(0) += 1;
        }

        let my_bench = bench_by_position(my_roster, requirements);
        let target_bench = bench_by_position(target_roster, requirements);

        // Gives: my own surplus bench, weakest first
        let mut give_candidates: Vec<&Player> =
            my_bench.values().flat_map(|players| players.iter().copied()).collect();
        give_candidates.sort_by_key(|p| self.valuator().valuate_player(p, settings));

        let mut suggestions = Vec::new();

        for need_position in Position::TRACKED {
            let starters = requirements.starters_at(need_position) as usize;
            let have = my_counts.get(&need_position).copied().unwrap_or(0);
            if have > starters {
                continue;
            }

            let Some(surplus) = target_bench.get(&need_position) else { continue };
            if surplus.len() < 2 {
                continue;
            }

            for give in &give_candidates {
                for receive in surplus {
                    let give_value = self.valuator().valuate_player(give, settings);
                    let receive_value = self.valuator().valuate_player(receive, settings);
                    let fairness = fairness_score(give_value, receive_value);
                    if fairness <= MIN_SUGGESTION_FAIRNESS {
                        continue;
                    }
                    suggestions.push(TradeSuggestion {
                        give: (*give).clone(),
                        receive: (*receive).clone(),
                        fairness,
                        rationale: format!(
                            "Adds {need_position} depth by trading from your {} surplus",
                            give.position
                        ),
                    });
                }
            }
        }

        suggestions.sort_by(|a, b| {
            b.fairness.partial_cmp(&a.fairness).unwrap_or(std::cmp::Ordering::Equal)
        });
        suggestions.truncate(MAX_SUGGESTIONS);

        debug!(count = suggestions.len(), "generated trade suggestions");
        suggestions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use league_types::ScoringType;

    fn settings() -> LeagueSettings {
        LeagueSettings::new(ScoringType::Standard, 2025, 1).unwrap()
    }

    fn projected(id: u64, position: Position, per_week: f64) -> Player {
        let mut p = Player::new(id, format!("{position} {id}"), position);
        p.projected_points = vec![per_week; 16];
        p.recent_points = vec![per_week; 5];
        p
    }

    /// My roster: thin at RB (one, starter count two), deep at WR.
    fn my_roster() -> Vec<Player> {
        vec![
            projected(1, Position::QB, 20.0),
            projected(2, Position::RB, 14.0),
            projected(3, Position::WR, 13.0),
            projected(4, Position::WR, 12.0),
            projected(5, Position::WR, 11.0),
            projected(6, Position::WR, 10.0),
        ]
    }

    /// Target roster: four RBs behind two starters is a real surplus.
    fn target_roster() -> Vec<Player> {
        vec![
            projected(11, Position::RB, 16.0),
            projected(12, Position::RB, 15.0),
            projected(13, Position::RB, 12.0),
            projected(14, Position::RB, 11.0),
            projected(15, Position::QB, 19.0),
        ]
    }

    #[test]
    fn suggests_swaps_toward_the_thin_position() {
        let analyzer = TradeAnalyzer::default();
        let suggestions =
            analyzer.generate_suggestions(&my_roster(), &target_roster(), &settings());

        assert!(!suggestions.is_empty());
        for suggestion in &suggestions {
            assert_eq!(suggestion.receive.position, Position::RB);
            assert_ne!(suggestion.give.position, Position::RB);
            assert!(suggestion.fairness > MIN_SUGGESTION_FAIRNESS);
        }
    }

    #[test]
    fn suggestions_are_sorted_and_capped() {
        let analyzer = TradeAnalyzer::default();
        let suggestions =
            analyzer.generate_suggestions(&my_roster(), &target_roster(), &settings());

        assert!(suggestions.len() <= MAX_SUGGESTIONS);
        for pair in suggestions.windows(2) {
            assert!(pair[0].fairness >= pair[1].fairness);
        }
    }

    #[test]
    fn no_suggestions_without_target_surplus() {
        let analyzer = TradeAnalyzer::default();
        // Target has exactly its starters at RB; nothing tradeable there
        let thin_target = vec![
            projected(11, Position::RB, 16.0),
            projected(12, Position::RB, 15.0),
            projected(15, Position::QB, 19.0),
        ];
        let suggestions =
            analyzer.generate_suggestions(&my_roster(), &thin_target, &settings());
        assert!(suggestions.is_empty());
    }

    #[test]
    fn no_suggestions_when_every_position_is_stocked() {
        let analyzer = TradeAnalyzer::default();
        let stocked: Vec<Player> = vec![
            projected(1, Position::QB, 20.0),
            projected(2, Position::QB, 18.0),
            projected(3, Position::RB, 14.0),
            projected(4, Position::RB, 13.0),
            projected(5, Position::RB, 12.0),
            projected(6, Position::WR, 13.0),
            projected(7, Position::WR, 12.0),
            projected(8, Position::WR, 11.0),
            projected(9, Position::TE, 10.0),
            projected(10, Position::TE, 9.0),
            projected(16, Position::K, 8.0),
            projected(17, Position::K, 7.0),
            projected(18, Position::DEF, 8.0),
            projected(19, Position::DEF, 7.0),
        ];
        let suggestions =
            analyzer.generate_suggestions(&stocked, &target_roster(), &settings());
        assert!(suggestions.is_empty());
    }
}
