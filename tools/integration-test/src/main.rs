use anyhow::{bail, Result};
use chrono::{Duration, Utc};

// Import our core components
use league_types::{
    DraftPick, InjuryStatus, LeagueSettings, Player, Position, ScoringType, TradeBundle,
};
use trade_analyzer::{validate_trade_constraints, TradeAnalyzer, TradeConstraints, TradeGrade};
use valuation_engine::AssetValuator;

fn player(id: u64, name: &str, position: Position, per_game: f64) -> Player {
    let mut p = Player::new(id, name, position);
    p.recent_points = vec![per_game; 5];
    p.projected_points = vec![per_game; 16];
    p
}

fn main() -> Result<()> {
    println!("🚀 Starting Astral Draft Trade Engine Integration Test");

    let mut settings = LeagueSettings::new(ScoringType::Ppr, 2025, 6)?;
    settings.trade_deadline = Some(Utc::now() + Duration::days(30));

    let initiator_roster = vec![
        player(1, "Franchise QB", Position::QB, 21.0),
        player(2, "Workhorse RB", Position::RB, 17.0),
        player(3, "Change-of-Pace RB", Position::RB, 9.0),
        player(4, "Alpha WR", Position::WR, 16.0),
        player(5, "Slot WR", Position::WR, 11.0),
        player(6, "Deep WR", Position::WR, 8.0),
        player(7, "Starting TE", Position::TE, 9.0),
        player(8, "Kicker", Position::K, 8.0),
        player(9, "Defense", Position::DEF, 7.0),
    ];
    let partner_roster = vec![
        player(11, "Partner QB", Position::QB, 19.0),
        player(12, "Stud RB", Position::RB, 18.0),
        player(13, "Committee RB", Position::RB, 12.0),
        player(14, "Handcuff RB", Position::RB, 8.0),
        player(15, "Bench RB", Position::RB, 7.0),
        player(16, "Partner WR1", Position::WR, 14.0),
        player(17, "Partner WR2", Position::WR, 12.0),
        player(18, "Partner TE", Position::TE, 10.0),
    ];

    let mut failures = 0;

    // Test 1: Asset valuation
    println!("\n📊 Test 1: Valuating rosters...");
    let valuator = AssetValuator::default();
    let initiator_strength = valuator.roster_strength(&initiator_roster, &settings);
    let partner_strength = valuator.roster_strength(&partner_roster, &settings);
    println!("   Initiator strength: {initiator_strength}");
    println!("   Partner strength: {partner_strength}");
    if initiator_strength > 0 && partner_strength > 0 {
        println!("✅ Both rosters valuate to positive strength");
    } else {
        println!("❌ Expected positive roster strength on both sides");
        failures += 1;
    }

    let first_round_pick = DraftPick::new(1, 2026);
    let pick_value = valuator.valuate_pick(&first_round_pick, &settings);
    println!("   2026 first-round pick: {pick_value}");
    if pick_value == 850 {
        println!("✅ Future first-round pick discounts to 850");
    } else {
        println!("❌ Expected 850 for a 2026 first-rounder at week 6, got {pick_value}");
        failures += 1;
    }

    // Test 2: Full trade analysis (WR surplus for RB depth)
    println!("\n🔁 Test 2: Analyzing a two-for-one trade...");
    let gives = TradeBundle::from_players(vec![
        initiator_roster[4].clone(),
        initiator_roster[5].clone(),
    ]);
    let receives = TradeBundle::from_players(vec![partner_roster[2].clone()]);
    let analyzer = TradeAnalyzer::default();
    let analysis =
        analyzer.analyze_trade(&gives, &receives, &initiator_roster, &partner_roster, &settings);
    println!(
        "   Fairness {:.1}, initiator grade {}, partner grade {}",
        analysis.fairness_score, analysis.initiator.grade, analysis.partner.grade
    );
    if (0.0..=100.0).contains(&analysis.fairness_score) {
        println!("✅ Fairness score is within bounds");
    } else {
        println!("❌ Fairness score out of bounds: {}", analysis.fairness_score);
        failures += 1;
    }
    if analysis.initiator.position_impact.is_improved(Position::RB) {
        println!("✅ Initiator RB depth improves");
    } else {
        println!("❌ Expected initiator RB depth to improve");
        failures += 1;
    }
    if analysis.partner.position_impact.is_weakened(Position::RB) {
        println!("✅ Partner RB depth weakens");
    } else {
        println!("❌ Expected partner RB depth to weaken");
        failures += 1;
    }

    // Test 3: Symmetric trade grades
    println!("\n⚖️ Test 3: Analyzing an equal swap...");
    let mirror = analyzer.analyze_trade(
        &TradeBundle::from_players(vec![initiator_roster[1].clone()]),
        &TradeBundle::from_players(vec![initiator_roster[1].clone()]),
        &initiator_roster,
        &partner_roster,
        &settings,
    );
    if mirror.fairness_score == 100.0
        && mirror.initiator.grade == TradeGrade::B
        && mirror.partner.grade == TradeGrade::B
    {
        println!("✅ Equal swap scores 100 fairness with B grades");
    } else {
        println!(
            "❌ Equal swap produced fairness {} grades {}/{}",
            mirror.fairness_score, mirror.initiator.grade, mirror.partner.grade
        );
        failures += 1;
    }

    // Test 4: Structural validation
    println!("\n🛡️ Test 4: Validating constraints...");
    let constraints = TradeConstraints::from(&settings);
    let ok = validate_trade_constraints(
        &initiator_roster,
        &partner_roster,
        &gives.player_ids(),
        &receives.player_ids(),
        &constraints,
    );
    if ok.valid {
        println!("✅ Legitimate trade passes validation");
    } else {
        println!("❌ Legitimate trade rejected: {:?}", ok.errors);
        failures += 1;
    }

    let bad = validate_trade_constraints(
        &initiator_roster,
        &partner_roster,
        &[999],
        &receives.player_ids(),
        &constraints,
    );
    if !bad.valid {
        println!("✅ Giving an unowned player is rejected");
    } else {
        println!("❌ Unowned give should have been rejected");
        failures += 1;
    }

    let mut expired = constraints.clone();
    expired.trade_deadline = Some(Utc::now() - Duration::hours(1));
    let late = validate_trade_constraints(
        &initiator_roster,
        &partner_roster,
        &gives.player_ids(),
        &receives.player_ids(),
        &expired,
    );
    if !late.valid {
        println!("✅ Trade after the deadline is rejected");
    } else {
        println!("❌ Post-deadline trade should have been rejected");
        failures += 1;
    }

    // Test 5: Injury discounting
    println!("\n🏥 Test 5: Injury discounting...");
    let healthy = player(50, "Healthy RB", Position::RB, 15.0);
    let mut hurt = healthy.clone();
    hurt.injury_status = InjuryStatus::Out;
    let healthy_value = valuator.valuate_player(&healthy, &settings);
    let hurt_value = valuator.valuate_player(&hurt, &settings);
    println!("   ACTIVE {healthy_value} vs OUT {hurt_value}");
    if healthy_value > hurt_value {
        println!("✅ Injured player is worth less");
    } else {
        println!("❌ Expected injury discount");
        failures += 1;
    }

    // Test 6: Suggestions
    println!("\n💡 Test 6: Generating suggestions...");
    let suggestions = analyzer.generate_suggestions(&initiator_roster, &partner_roster, &settings);
    println!("   Found {} suggestion(s)", suggestions.len());
    for suggestion in &suggestions {
        println!(
            "   give {} for {} (fairness {:.1})",
            suggestion.give.name, suggestion.receive.name, suggestion.fairness
        );
    }
    if suggestions.len() <= 5 && suggestions.windows(2).all(|w| w[0].fairness >= w[1].fairness) {
        println!("✅ Suggestions are capped and sorted");
    } else {
        println!("❌ Suggestion list violates cap or ordering");
        failures += 1;
    }

    println!();
    if failures == 0 {
        println!("🎉 All integration scenarios passed");
        Ok(())
    } else {
        bail!("{failures} integration scenario(s) failed")
    }
}
