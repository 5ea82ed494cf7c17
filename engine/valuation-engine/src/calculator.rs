use crate::config::ValuationConfig;
use league_types::{DraftPick, LeagueSettings, Player, RosterAsset, ScoringType, TradeBundle};
use tracing::debug;

/// Valuator for roster assets
///
/// All methods are pure over the held config: same asset and settings in,
/// same value out. Values are non-negative by construction.
pub struct AssetValuator {
    config: ValuationConfig,
}

impl Default for AssetValuator {
    fn default() -> Self {
        Self::new(ValuationConfig::default())
    }
}

impl AssetValuator {
    /// Create a valuator with the given policy tables
    pub fn new(config: ValuationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValuationConfig {
        &self.config
    }

    /// Trade value of a player under the given league settings.
    ///
    /// Base = recent per-game average x points_to_value, blended 50/50 with
    /// the total remaining-season projection when one exists. The blend is
    /// intentionally per-game against whole-season: a strong rest-of-season
    /// projection outweighs a short recent sample.
    pub fn valuate_player(&self, player: &Player, settings: &LeagueSettings) -> u32 {
        let params = &self.config.player;

        let mut value = if player.recent_points.is_empty() {
            0.0
        } else {
            let window = player.recent_points.len().min(params.recent_games_window);
            let recent_avg: f64 = player.recent_points[..window].iter().sum::<f64>() / window as f64;
            recent_avg * params.points_to_value
        };

        if !player.projected_points.is_empty() {
            value = (value + player.projected_total()) / 2.0;
        }

        value *= self.config.injury_multiplier(player.injury_status);

        let weeks_remaining = params.season_length.saturating_sub(settings.current_week);
        value *= weeks_remaining as f64 / params.season_length as f64;

        value *= self.config.scarcity_multiplier(player.position);

        if settings.scoring == ScoringType::Ppr && params.ppr_positions.contains(&player.position) {
            value *= params.ppr_bonus;
        }

        let rounded = value.max(0.0).round() as u32;
        debug!(
            player = %player.name,
            position = %player.position,
            value = rounded,
            "valuated player"
        );
        rounded
    }

    /// Trade value of a draft pick under the given league settings.
    ///
    /// Future-season picks compound the annual discount; picks gain a flat
    /// premium late in the season once team needs are known.
    pub fn valuate_pick(&self, pick: &DraftPick, settings: &LeagueSettings) -> u32 {
        let params = &self.config.picks;

        let mut value = self.config.pick_base_value(pick.round);

        let years_ahead = (pick.season - settings.season).max(0);
        if years_ahead > 0 {
            value *= params.future_year_discount.powi(years_ahead);
        }

        if settings.current_week > params.late_season_week {
            value *= params.late_season_premium;
        }

        let rounded = value.max(0.0).round() as u32;
        debug!(round = pick.round, season = pick.season, value = rounded, "valuated pick");
        rounded
    }

    /// Trade value of either kind of asset
    pub fn valuate_asset(&self, asset: &RosterAsset, settings: &LeagueSettings) -> u32 {
        match asset {
            RosterAsset::Player(player) => self.valuate_player(player, settings),
            RosterAsset::Pick(pick) => self.valuate_pick(pick, settings),
        }
    }

    /// Aggregate value of a bundle
    pub fn valuate_bundle(&self, bundle: &TradeBundle, settings: &LeagueSettings) -> u32 {
        let players: u32 = bundle.players.iter().map(|p| self.valuate_player(p, settings)).sum();
        let picks: u32 = bundle.picks.iter().map(|p| self.valuate_pick(p, settings)).sum();
        players + picks
    }

    /// Total roster strength: sum of player values, picks excluded
    pub fn roster_strength(&self, roster: &[Player], settings: &LeagueSettings) -> u32 {
        roster.iter().map(|p| self.valuate_player(p, settings)).sum()
    }
}
