use league_types::{InjuryStatus, Position};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Errors from loading or saving valuation configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Configuration for the asset valuator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuationConfig {
    /// Player valuation parameters
    pub player: PlayerValuationParams,

    /// Draft-pick valuation parameters
    pub picks: PickValuationParams,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerValuationParams {
    /// Completed games considered for the recent-performance base
    pub recent_games_window: usize,

    /// Value units per fantasy point of recent average
    pub points_to_value: f64,

    /// Regular-season length in weeks
    pub season_length: u32,

    /// Valuation multiplier per injury status
    pub injury_multipliers: HashMap<InjuryStatus, f64>,

    /// Multiplier for statuses not in the table
    pub injury_default: f64,

    /// Positional scarcity multipliers
    pub scarcity_multipliers: HashMap<Position, f64>,

    /// Multiplier for positions not in the table
    pub scarcity_default: f64,

    /// Bonus multiplier for pass catchers under PPR scoring
    pub ppr_bonus: f64,

    /// Positions the PPR bonus applies to
    pub ppr_positions: Vec<Position>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickValuationParams {
    /// Base value per round, index 0 = round 1
    pub round_base_values: Vec<f64>,

    /// Base value for rounds beyond the table
    pub round_default_value: f64,

    /// Compounding discount per year until a future pick is exercised
    pub future_year_discount: f64,

    /// Premium applied once team needs are known late in the season
    pub late_season_premium: f64,

    /// Week after which the late-season premium kicks in
    pub late_season_week: u32,
}

impl Default for ValuationConfig {
    fn default() -> Self {
        let mut injury_multipliers = HashMap::new();
        injury_multipliers.insert(InjuryStatus::Active, 1.0);
        injury_multipliers.insert(InjuryStatus::Questionable, 0.85);
        injury_multipliers.insert(InjuryStatus::Doubtful, 0.5);
        injury_multipliers.insert(InjuryStatus::Out, 0.3);
        injury_multipliers.insert(InjuryStatus::Ir, 0.1);
        injury_multipliers.insert(InjuryStatus::Suspended, 0.2);

        let mut scarcity_multipliers = HashMap::new();
        scarcity_multipliers.insert(Position::RB, 1.3);
        scarcity_multipliers.insert(Position::QB, 1.2);
        scarcity_multipliers.insert(Position::TE, 1.15);
        scarcity_multipliers.insert(Position::WR, 1.0);
        scarcity_multipliers.insert(Position::FLEX, 0.9);
        scarcity_multipliers.insert(Position::K, 0.5);
        scarcity_multipliers.insert(Position::DEF, 0.6);

        Self {
            player: PlayerValuationParams {
                recent_games_window: 5,
                points_to_value: 10.0,
                season_length: 17,
                injury_multipliers,
                injury_default: 1.0,
                scarcity_multipliers,
                scarcity_default: 1.0,
                ppr_bonus: 1.1,
                ppr_positions: vec![Position::WR, Position::RB, Position::TE],
            },
            picks: PickValuationParams {
                // Round 1 through 16, roughly geometric decay
                round_base_values: vec![
                    1000.0, 630.0, 400.0, 250.0, 160.0, 100.0, 63.0, 40.0, 25.0, 16.0, 10.0, 6.0,
                    4.0, 3.0, 2.0, 1.0,
                ],
                round_default_value: 1.0,
                future_year_discount: 0.85,
                late_season_premium: 1.2,
                late_season_week: 8,
            },
        }
    }
}

impl ValuationConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: ValuationConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load defaults with environment-variable overrides
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(points_to_value) = std::env::var("VALUATION_POINTS_TO_VALUE") {
            config.player.points_to_value = points_to_value.parse().unwrap_or(10.0);
        }

        if let Ok(window) = std::env::var("VALUATION_RECENT_WINDOW") {
            config.player.recent_games_window = window.parse().unwrap_or(5);
        }

        if let Ok(ppr_bonus) = std::env::var("VALUATION_PPR_BONUS") {
            config.player.ppr_bonus = ppr_bonus.parse().unwrap_or(1.1);
        }

        if let Ok(discount) = std::env::var("VALUATION_PICK_DISCOUNT") {
            config.picks.future_year_discount = discount.parse().unwrap_or(0.85);
        }

        config
    }

    /// Injury multiplier for a status
    pub fn injury_multiplier(&self, status: InjuryStatus) -> f64 {
        self.player
            .injury_multipliers
            .get(&status)
            .copied()
            .unwrap_or(self.player.injury_default)
    }

    /// Scarcity multiplier for a position
    pub fn scarcity_multiplier(&self, position: Position) -> f64 {
        self.player
            .scarcity_multipliers
            .get(&position)
            .copied()
            .unwrap_or(self.player.scarcity_default)
    }

    /// Base value for a draft round, 1-based
    pub fn pick_base_value(&self, round: u32) -> f64 {
        if round == 0 {
            return self.picks.round_default_value;
        }
        self.picks
            .round_base_values
            .get((round - 1) as usize)
            .copied()
            .unwrap_or(self.picks.round_default_value)
    }
}
