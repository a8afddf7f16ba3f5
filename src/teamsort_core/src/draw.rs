use serde::Serialize;
use tracing::info;

use crate::constants::DEFAULT_NUM_TEAMS;
use crate::error::Result;
use crate::partition::deal_with;
use crate::player::Player;
use crate::shuffle::Shuffler;
use crate::stats::TeamStats;

/// Parameters of a team draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawRequest {
    pub num_teams: usize,

    /// Keep at most this many players per team
    pub max_team_size: Option<usize>,
}

impl Default for DrawRequest {
    fn default() -> Self {
        DrawRequest {
            num_teams: DEFAULT_NUM_TEAMS,
            max_team_size: None,
        }
    }
}

/// One generated team and its level summary.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DrawnTeam {
    pub players: Vec<Player>,
    pub stats: TeamStats,
}

/// Result of a draw. Rebuilt from scratch on every request.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TeamDraw {
    pub teams: Vec<DrawnTeam>,

    /// Enabled players left off every team by the size limit
    pub benched: Vec<Player>,
}

impl TeamDraw {
    /// Number of players placed on a team
    pub fn seated(&self) -> usize {
        self.teams.iter().map(|t| t.players.len()).sum()
    }
}

/// Draw teams from a roster snapshot.
///
/// Disabled players are filtered out, the rest are partitioned and each team
/// gets its stats. Players cut by the size limit are collected in team order.
pub fn draw_teams<S: Shuffler>(
    players: &[Player],
    request: DrawRequest,
    shuffler: &mut S,
) -> Result<TeamDraw> {
    let enabled: Vec<Player> = players.iter().filter(|p| p.enabled).cloned().collect();

    let mut teams = deal_with(&enabled, request.num_teams, shuffler)?;

    let mut benched = Vec::new();
    if let Some(limit) = request.max_team_size {
        for team in &mut teams {
            if team.len() > limit {
                benched.extend(team.split_off(limit));
            }
        }
    }

    let teams: Vec<DrawnTeam> = teams
        .into_iter()
        .map(|players| DrawnTeam {
            stats: TeamStats::of_team(&players),
            players,
        })
        .collect();

    info!(
        teams = teams.len(),
        enabled = enabled.len(),
        benched = benched.len(),
        "teams drawn"
    );

    Ok(TeamDraw { teams, benched })
}
