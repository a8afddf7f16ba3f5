use crate::draw::TeamDraw;
use crate::player::Player;

/// Render a draw as plain text, one block per team.
pub fn render_draw(draw: &TeamDraw) -> String {
    let mut out = String::new();

    for (idx, team) in draw.teams.iter().enumerate() {
        out.push_str(&format!(
            "Team {} (mean {:.2}, std dev {:.2})\n",
            idx + 1,
            team.stats.mean,
            team.stats.std_dev
        ));
        push_names(&mut out, &team.players);
    }

    if !draw.benched.is_empty() {
        out.push_str("Benched\n");
        push_names(&mut out, &draw.benched);
    }

    out
}

fn push_names(out: &mut String, players: &[Player]) {
    for player in players {
        out.push_str("  ");
        out.push_str(&player.name);
        out.push('\n');
    }
}

/// Render the roster with enabled markers and ids.
pub fn render_roster(players: &[Player]) -> String {
    if players.is_empty() {
        return "No players\n".to_string();
    }

    players
        .iter()
        .map(|player| {
            let mark = if player.enabled { 'x' } else { ' ' };
            format!("[{}] {}  {} - level {}\n", mark, player.id, player.name, player.level)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::DrawnTeam;
    use crate::stats::{team_stats, TeamStats};

    #[test]
    fn test_render_draw() {
        let draw = TeamDraw {
            teams: vec![
                DrawnTeam {
                    players: vec![Player::new("1", "Ana", 2), Player::new("2", "Bia", 4)],
                    stats: team_stats(&[2, 4]),
                },
                DrawnTeam {
                    players: vec![],
                    stats: TeamStats::EMPTY,
                },
            ],
            benched: vec![],
        };

        let text = render_draw(&draw);
        assert_eq!(
            text,
            "Team 1 (mean 3.00, std dev 1.00)\n  Ana\n  Bia\nTeam 2 (mean 0.00, std dev 0.00)\n"
        );
    }

    #[test]
    fn test_render_benched() {
        let draw = TeamDraw {
            teams: vec![],
            benched: vec![Player::new("9", "Zeca", 1)],
        };
        assert_eq!(render_draw(&draw), "Benched\n  Zeca\n");
    }

    #[test]
    fn test_render_teams_then_benched() {
        let draw = TeamDraw {
            teams: vec![DrawnTeam {
                players: vec![Player::new("1", "Ana", 5)],
                stats: team_stats(&[5]),
            }],
            benched: vec![Player::new("2", "Bia", 1), Player::new("3", "Caio", 1)],
        };
        assert_eq!(
            render_draw(&draw),
            "Team 1 (mean 5.00, std dev 0.00)\n  Ana\nBenched\n  Bia\n  Caio\n"
        );
    }

    #[test]
    fn test_render_roster() {
        let mut off = Player::new("b", "Bia", 1);
        off.enabled = false;
        let text = render_roster(&[Player::new("a", "Ana", 3), off]);

        assert_eq!(text, "[x] a  Ana - level 3\n[ ] b  Bia - level 1\n");
        assert_eq!(render_roster(&[]), "No players\n");
    }
}
