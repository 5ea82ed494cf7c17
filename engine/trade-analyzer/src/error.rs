//! Error types for the trade analyzer

use thiserror::Error;

/// Result type for trade analyzer operations
pub type Result<T> = std::result::Result<T, AnalyzerError>;

/// Errors that can occur at the trade analyzer's file-loading seams.
///
/// The analysis functions themselves are pure and total; only proposal
/// and config loading can fail.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("proposal parse error: {0}")]
    Proposal(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(#[from] valuation_engine::ConfigError),

    #[error("invalid league settings: {0}")]
    League(#[from] league_types::LeagueError),
}
