#[cfg(feature = "python")]
use pyo3::prelude::*;
use serde::Serialize;
use statrs::statistics::Statistics;

use crate::constants::{EMPTY_TEAM_MEAN, EMPTY_TEAM_STD_DEV};
use crate::player::Player;

/// Level summary for one team.
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TeamStats {
    /// Arithmetic mean of the levels
    pub mean: f64,

    /// Population standard deviation of the levels
    pub std_dev: f64,
}

impl TeamStats {
    /// Stats reported for a team without players
    pub const EMPTY: TeamStats = TeamStats {
        mean: EMPTY_TEAM_MEAN,
        std_dev: EMPTY_TEAM_STD_DEV,
    };

    /// Stats over the levels of a team's players.
    pub fn of_team(team: &[Player]) -> Self {
        let levels: Vec<i64> = team.iter().map(|p| p.level).collect();
        team_stats(&levels)
    }
}

/// Compute mean and population standard deviation of `levels`.
///
/// An empty list yields [`TeamStats::EMPTY`] (both fields zero) instead of NaN.
pub fn team_stats(levels: &[i64]) -> TeamStats {
    if levels.is_empty() {
        return TeamStats::EMPTY;
    }

    let values: Vec<f64> = levels.iter().map(|&l| l as f64).collect();

    TeamStats {
        mean: values.iter().mean(),
        std_dev: values.iter().population_std_dev(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_and_population_std_dev() {
        let stats = team_stats(&[2, 4, 6]);
        assert!((stats.mean - 4.0).abs() < 1e-10);
        assert!((stats.std_dev - (8.0f64 / 3.0).sqrt()).abs() < 1e-10);
        assert!((stats.std_dev - 1.633).abs() < 1e-3);
    }

    #[test]
    fn test_empty_team_sentinel() {
        let stats = team_stats(&[]);
        assert_eq!(stats, TeamStats::EMPTY);
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.std_dev, 0.0);
        assert!(!stats.std_dev.is_nan());
    }

    #[test]
    fn test_single_player_has_zero_spread() {
        let stats = team_stats(&[7]);
        assert!((stats.mean - 7.0).abs() < 1e-10);
        assert!(stats.std_dev.abs() < 1e-10);
    }

    #[test]
    fn test_negative_levels() {
        let stats = team_stats(&[-1, 1]);
        assert!(stats.mean.abs() < 1e-10);
        assert!((stats.std_dev - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_of_team() {
        let team = vec![Player::new("a", "A", 1), Player::new("b", "B", 3)];
        let stats = TeamStats::of_team(&team);
        assert!((stats.mean - 2.0).abs() < 1e-10);
        assert!((stats.std_dev - 1.0).abs() < 1e-10);
    }
}
