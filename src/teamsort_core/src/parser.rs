use rand::Rng;
use tracing::warn;

use crate::constants::{PLAYER_ID_ALPHABET, PLAYER_ID_LEN};
use crate::player::Player;

/// Generate a short lowercase base-36 player id.
pub fn generate_id<R: Rng>(rng: &mut R) -> String {
    (0..PLAYER_ID_LEN)
        .map(|_| PLAYER_ID_ALPHABET[rng.gen_range(0..PLAYER_ID_ALPHABET.len())] as char)
        .collect()
}

/// Parse free text with one `Name - Level` entry per line.
///
/// Blank lines are skipped. The name is the text before the first `-` and the
/// level is read from the text between the first and second `-`; a missing or
/// unreadable level becomes 0, so parsed levels are never negative. Every
/// player gets a fresh id and starts enabled. Lines without a name are
/// dropped.
pub fn parse_players<R: Rng>(text: &str, rng: &mut R) -> Vec<Player> {
    let mut players = Vec::new();

    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (name, level) = match line.split_once('-') {
            Some((name, rest)) => {
                let level_text = rest.split('-').next().unwrap_or_default();
                (name.trim(), parse_leading_int(level_text))
            }
            None => (line, 0),
        };

        if name.is_empty() {
            warn!(line = lineno + 1, "skipping entry without a name");
            continue;
        }

        players.push(Player::new(generate_id(rng), name, level));
    }

    players
}

/// Read a leading integer, ignoring leading whitespace and an optional `+`.
/// Anything unreadable counts as 0.
fn parse_leading_int(text: &str) -> i64 {
    let text = text.trim_start();
    let digits = text.strip_prefix('+').unwrap_or(text);

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    digits[..end].parse::<i64>().unwrap_or(0)
}
