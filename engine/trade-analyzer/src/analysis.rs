//! Trade aggregation: fairness scoring, letter grades, full analysis

use crate::advisor;
use crate::impact::{self, PositionImpact};
use league_types::{LeagueSettings, Player, TradeBundle};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;
use valuation_engine::{AssetValuator, ValuationConfig};

/// Letter grade for one side of a trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TradeGrade {
    F,
    D,
    CMinus,
    C,
    CPlus,
    BMinus,
    B,
    BPlus,
    AMinus,
    A,
    APlus,
}

impl fmt::Display for TradeGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TradeGrade::APlus => "A+",
            TradeGrade::A => "A",
            TradeGrade::AMinus => "A-",
            TradeGrade::BPlus => "B+",
            TradeGrade::B => "B",
            TradeGrade::BMinus => "B-",
            TradeGrade::CPlus => "C+",
            TradeGrade::C => "C",
            TradeGrade::CMinus => "C-",
            TradeGrade::D => "D",
            TradeGrade::F => "F",
        };
        write!(f, "{s}")
    }
}

/// Grade for a received/given value ratio. Step thresholds, monotonic in
/// the ratio.
pub fn grade_for_ratio(ratio: f64) -> TradeGrade {
    if ratio >= 1.5 {
        TradeGrade::APlus
    } else if ratio >= 1.3 {
        TradeGrade::A
    } else if ratio >= 1.15 {
        TradeGrade::AMinus
    } else if ratio >= 1.05 {
        TradeGrade::BPlus
    } else if ratio >= 0.95 {
        TradeGrade::B
    } else if ratio >= 0.85 {
        TradeGrade::BMinus
    } else if ratio >= 0.75 {
        TradeGrade::CPlus
    } else if ratio >= 0.65 {
        TradeGrade::C
    } else if ratio >= 0.55 {
        TradeGrade::CMinus
    } else if ratio >= 0.45 {
        TradeGrade::D
    } else {
        TradeGrade::F
    }
}

/// Grade one side by what it receives against what it gives.
/// The denominator is floored at 1 so an all-take trade still grades.
pub fn grade_for_side(given: u32, received: u32) -> TradeGrade {
    grade_for_ratio(received as f64 / given.max(1) as f64)
}

/// Fairness of a trade on a 0-100 scale; 100 is perfectly balanced.
///
/// The value gap is measured against the average of both sides, which
/// deliberately matches the product's established behavior when one side
/// is near zero. A nothing-for-nothing trade is defined as balanced.
pub fn fairness_score(give: u32, receive: u32) -> f64 {
    let give = give as f64;
    let receive = receive as f64;
    let average = (give + receive) / 2.0;
    if average == 0.0 {
        return 100.0;
    }
    (100.0 - ((receive - give).abs() / average) * 100.0).max(0.0)
}

/// Analysis of one participant's end of the trade
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SideAnalysis {
    /// Aggregate value of the assets this side gives up
    pub total_given: u32,

    /// Aggregate value of the assets this side receives
    pub total_received: u32,

    /// Letter grade from this side's perspective
    pub grade: TradeGrade,

    /// Estimated relative roster-strength change, percent
    pub win_probability_delta: f64,

    /// Positional depth changes for this side
    pub position_impact: PositionImpact,
}

/// Complete analysis of a proposed trade.
///
/// Ephemeral: produced per call, never stored by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeAnalysis {
    /// 0-100 balance score shared by both sides
    pub fairness_score: f64,

    /// The proposing side
    pub initiator: SideAnalysis,

    /// The receiving side
    pub partner: SideAnalysis,

    /// Advisory warnings, from the initiator's perspective
    pub warnings: Vec<String>,

    /// Advisory recommendations, from the initiator's perspective
    pub recommendations: Vec<String>,
}

/// Trade analyzer: aggregates asset values into a full trade analysis
pub struct TradeAnalyzer {
    valuator: AssetValuator,
}

impl Default for TradeAnalyzer {
    fn default() -> Self {
        Self::new(ValuationConfig::default())
    }
}

impl TradeAnalyzer {
    /// Create an analyzer with the given valuation policy
    pub fn new(config: ValuationConfig) -> Self {
        Self { valuator: AssetValuator::new(config) }
    }

    pub fn valuator(&self) -> &AssetValuator {
        &self.valuator
    }

    /// Analyze a proposed trade from the initiator's side.
    ///
    /// `gives` and `receives` are the initiator's outgoing and incoming
    /// bundles; the partner's side is the mirror. Rosters are the
    /// pre-trade rosters of each participant.
    pub fn analyze_trade(
        &self,
        gives: &TradeBundle,
        receives: &TradeBundle,
        initiator_roster: &[Player],
        partner_roster: &[Player],
        settings: &LeagueSettings,
    ) -> TradeAnalysis {
        let given_value = self.valuator.valuate_bundle(gives, settings);
        let received_value = self.valuator.valuate_bundle(receives, settings);

        let fairness = fairness_score(given_value, received_value);

        let initiator =
            self.analyze_side(initiator_roster, receives, gives, given_value, received_value, settings);
        let partner =
            self.analyze_side(partner_roster, gives, receives, received_value, given_value, settings);

        let (warnings, recommendations) =
            advisor::build_advice(fairness, receives, &initiator.position_impact);

        info!(
            given_value,
            received_value,
            fairness,
            initiator_grade = %initiator.grade,
            partner_grade = %partner.grade,
            "analyzed trade"
        );

        TradeAnalysis { fairness_score: fairness, initiator, partner, warnings, recommendations }
    }

    fn analyze_side(
        &self,
        roster: &[Player],
        incoming: &TradeBundle,
        outgoing: &TradeBundle,
        given_value: u32,
        received_value: u32,
        settings: &LeagueSettings,
    ) -> SideAnalysis {
        let old_strength = self.valuator.roster_strength(roster, settings);
        let after = impact::post_trade_roster(roster, &incoming.players, &outgoing.players);
        let new_strength = self.valuator.roster_strength(&after, settings);

        SideAnalysis {
            total_given: given_value,
            total_received: received_value,
            grade: grade_for_side(given_value, received_value),
            win_probability_delta: impact::win_probability_delta(old_strength, new_strength),
            position_impact: impact::position_impact(roster, &incoming.players, &outgoing.players),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use league_types::{Position, ScoringType};

    fn settings() -> LeagueSettings {
        LeagueSettings::new(ScoringType::Standard, 2025, 1).unwrap()
    }

    fn scorer(id: u64, position: Position, per_game: f64) -> Player {
        let mut p = Player::new(id, format!("Player {id}"), position);
        p.recent_points = vec![per_game; 5];
        p
    }

    #[test]
    fn fairness_is_bounded_and_balanced_at_equal_values() {
        assert_eq!(fairness_score(500, 500), 100.0);
        assert_eq!(fairness_score(0, 0), 100.0);
        assert_eq!(fairness_score(0, 1000), 0.0);
        let score = fairness_score(300, 400);
        assert!(score > 0.0 && score < 100.0);
    }

    #[test]
    fn fairness_is_symmetric_in_give_and_receive() {
        for (a, b) in [(100, 300), (250, 260), (0, 40), (999, 1)] {
            assert_eq!(fairness_score(a, b), fairness_score(b, a));
        }
    }

    #[test]
    fn grades_are_monotonic_in_the_ratio() {
        let ratios = [0.1, 0.45, 0.5, 0.55, 0.6, 0.65, 0.75, 0.85, 0.95, 1.0, 1.05, 1.15, 1.3, 1.5, 2.0];
        let grades: Vec<TradeGrade> = ratios.iter().map(|&r| grade_for_ratio(r)).collect();
        for pair in grades.windows(2) {
            assert!(pair[0] <= pair[1], "grade regressed across increasing ratios: {grades:?}");
        }
        assert_eq!(grade_for_ratio(1.5), TradeGrade::APlus);
        assert_eq!(grade_for_ratio(0.44), TradeGrade::F);
    }

    #[test]
    fn grade_denominator_floors_at_one() {
        assert_eq!(grade_for_side(0, 2), TradeGrade::APlus);
        assert_eq!(grade_for_side(0, 0), TradeGrade::F);
    }

    #[test]
    fn equal_trade_is_perfectly_fair_with_b_grades() {
        let analyzer = TradeAnalyzer::default();
        let settings = settings();

        let give = scorer(1, Position::RB, 15.0);
        let get = scorer(2, Position::RB, 15.0);
        let my_roster = vec![give.clone(), scorer(3, Position::QB, 20.0)];
        let their_roster = vec![get.clone(), scorer(4, Position::QB, 20.0)];

        let analysis = analyzer.analyze_trade(
            &TradeBundle::from_players(vec![give]),
            &TradeBundle::from_players(vec![get]),
            &my_roster,
            &their_roster,
            &settings,
        );

        assert_eq!(analysis.fairness_score, 100.0);
        assert_eq!(analysis.initiator.grade, TradeGrade::B);
        assert_eq!(analysis.partner.grade, TradeGrade::B);
        assert_eq!(analysis.initiator.total_given, analysis.initiator.total_received);
    }

    #[test]
    fn sides_mirror_given_and_received() {
        let analyzer = TradeAnalyzer::default();
        let settings = settings();

        let give = scorer(1, Position::RB, 20.0);
        let get = scorer(2, Position::WR, 10.0);
        let my_roster = vec![give.clone()];
        let their_roster = vec![get.clone()];

        let analysis = analyzer.analyze_trade(
            &TradeBundle::from_players(vec![give]),
            &TradeBundle::from_players(vec![get]),
            &my_roster,
            &their_roster,
            &settings,
        );

        assert_eq!(analysis.initiator.total_given, analysis.partner.total_received);
        assert_eq!(analysis.initiator.total_received, analysis.partner.total_given);
    }

    #[test]
    fn lopsided_trade_moves_win_probability_both_ways() {
        let analyzer = TradeAnalyzer::default();
        let settings = settings();

        let stud = scorer(1, Position::RB, 25.0);
        let scrub = scorer(2, Position::RB, 2.0);
        let my_roster = vec![stud.clone(), scorer(3, Position::QB, 18.0)];
        let their_roster = vec![scrub.clone(), scorer(4, Position::QB, 18.0)];

        let analysis = analyzer.analyze_trade(
            &TradeBundle::from_players(vec![stud]),
            &TradeBundle::from_players(vec![scrub]),
            &my_roster,
            &their_roster,
            &settings,
        );

        assert!(analysis.initiator.win_probability_delta < 0.0);
        assert!(analysis.partner.win_probability_delta > 0.0);
        assert!(analysis.fairness_score < 50.0);
    }
}
