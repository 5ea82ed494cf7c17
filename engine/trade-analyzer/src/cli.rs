//! Command line interface
//!
//! Runs the analysis pipeline over JSON proposal files: a proposal holds
//! both rosters, the two bundles from the initiator's perspective, and
//! the league settings snapshot.

use crate::analysis::TradeAnalyzer;
use crate::error::Result;
use crate::validation::{validate_trade_constraints, TradeConstraints};
use clap::{Parser, Subcommand};
use league_types::{LeagueSettings, Player, TradeBundle};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use valuation_engine::ValuationConfig;

/// Trade CLI for analyzing league trade proposals
#[derive(Parser)]
#[command(name = "trade-cli")]
#[command(about = "Trade analysis CLI for Astral Draft leagues")]
pub struct Cli {
    /// Optional valuation config TOML; defaults apply when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full fairness and impact analysis on a proposal
    Analyze {
        /// Path to a JSON trade proposal
        proposal: PathBuf,
    },
    /// Check a proposal against the league's structural constraints
    Validate {
        /// Path to a JSON trade proposal
        proposal: PathBuf,
    },
    /// Propose balanced swaps between the proposal's two rosters
    Suggest {
        /// Path to a JSON trade proposal
        proposal: PathBuf,
    },
}

/// A trade proposal as submitted by the application layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeProposal {
    pub league: LeagueSettings,
    pub initiator_roster: Vec<Player>,
    pub partner_roster: Vec<Player>,
    pub initiator_gives: TradeBundle,
    pub initiator_receives: TradeBundle,
}

impl TradeProposal {
    /// Load a proposal from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let proposal: TradeProposal = serde_json::from_str(&content)?;
        proposal.league.validate()?;
        Ok(proposal)
    }
}

/// CLI handler
pub struct CliHandler {
    analyzer: TradeAnalyzer,
}

impl CliHandler {
    /// Create a handler, loading the valuation config override if given
    pub fn new(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => ValuationConfig::from_file(path)?,
            None => ValuationConfig::from_env(),
        };
        Ok(Self { analyzer: TradeAnalyzer::new(config) })
    }

    /// Handle CLI commands
    pub fn handle_command(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Analyze { proposal } => {
                let proposal = TradeProposal::from_file(proposal)?;
                self.show_analysis(&proposal);
            }
            Commands::Validate { proposal } => {
                let proposal = TradeProposal::from_file(proposal)?;
                self.show_validation(&proposal);
            }
            Commands::Suggest { proposal } => {
                let proposal = TradeProposal::from_file(proposal)?;
                self.show_suggestions(&proposal);
            }
        }
        Ok(())
    }

    fn show_analysis(&self, proposal: &TradeProposal) {
        let analysis = self.analyzer.analyze_trade(
            &proposal.initiator_gives,
            &proposal.initiator_receives,
            &proposal.initiator_roster,
            &proposal.partner_roster,
            &proposal.league,
        );

        println!("=== Trade Analysis ===");
        println!("Fairness: {:.1}/100", analysis.fairness_score);
        println!();
        for (label, side) in [("Initiator", &analysis.initiator), ("Partner", &analysis.partner)] {
            println!(
                "{label}: gives {} / receives {} -> grade {} (win probability {:+.1}%)",
                side.total_given, side.total_received, side.grade, side.win_probability_delta
            );
            if !side.position_impact.improved.is_empty() {
                let improved: Vec<String> =
                    side.position_impact.improved.iter().map(|p| p.to_string()).collect();
                println!("  improved: {}", improved.join(", "));
            }
            if !side.position_impact.weakened.is_empty() {
                let weakened: Vec<String> =
                    side.position_impact.weakened.iter().map(|p| p.to_string()).collect();
                println!("  weakened: {}", weakened.join(", "));
            }
        }
        if !analysis.warnings.is_empty() {
            println!();
            println!("Warnings:");
            for warning in &analysis.warnings {
                println!("  ! {warning}");
            }
        }
        if !analysis.recommendations.is_empty() {
            println!();
            println!("Recommendations:");
            for recommendation in &analysis.recommendations {
                println!("  * {recommendation}");
            }
        }
    }

    fn show_validation(&self, proposal: &TradeProposal) {
        let result = validate_trade_constraints(
            &proposal.initiator_roster,
            &proposal.partner_roster,
            &proposal.initiator_gives.player_ids(),
            &proposal.initiator_receives.player_ids(),
            &TradeConstraints::from(&proposal.league),
        );

        if result.valid {
            println!("Trade is structurally valid");
        } else {
            println!("Trade is INVALID:");
            for error in &result.errors {
                println!("  - {error}");
            }
        }
    }

    fn show_suggestions(&self, proposal: &TradeProposal) {
        let suggestions = self.analyzer.generate_suggestions(
            &proposal.initiator_roster,
            &proposal.partner_roster,
            &proposal.league,
        );

        if suggestions.is_empty() {
            println!("No balanced swaps found between these rosters");
            return;
        }
        println!("Top suggestions:");
        for suggestion in &suggestions {
            println!(
                "  give {} ({}) for {} ({}) - fairness {:.1}: {}",
                suggestion.give.name,
                suggestion.give.position,
                suggestion.receive.name,
                suggestion.receive.position,
                suggestion.fairness,
                suggestion.rationale
            );
        }
    }
}
