use std::collections::BTreeMap;
use tracing::debug;

use crate::constants::MAX_TEAMS;
use crate::error::{Error, Result};
use crate::player::Player;
use crate::shuffle::{RandomShuffler, Shuffler};

/// Check a signed team count coming from user input.
///
/// Returns the count as `usize` when it lies in `1..=MAX_TEAMS`.
pub fn validate_team_count(num_teams: i64) -> Result<usize> {
    match usize::try_from(num_teams) {
        Ok(n) if (1..=MAX_TEAMS).contains(&n) => Ok(n),
        _ => Err(Error::invalid_team_count(num_teams)),
    }
}

/// Split players into `num_teams` teams with an entropy-seeded shuffle.
///
/// See [`partition_with`] for the algorithm.
pub fn partition(
    players: &[Player],
    num_teams: usize,
    max_team_size: Option<usize>,
) -> Result<Vec<Vec<Player>>> {
    partition_with(players, num_teams, max_team_size, &mut RandomShuffler::new())
}

/// Split players into `num_teams` teams.
///
/// Players are bucketed by level, each bucket is permuted by `shuffler`, the
/// buckets are concatenated from the highest level to the lowest and the
/// resulting sequence is dealt round-robin: flat index `i` joins team
/// `i % num_teams`. With `max_team_size = Some(k)` each team then keeps only
/// its first `k` players; dropped players are not reassigned.
///
/// # Errors
/// `InvalidArgument` if `num_teams` is zero or above [`MAX_TEAMS`].
pub fn partition_with<S: Shuffler>(
    players: &[Player],
    num_teams: usize,
    max_team_size: Option<usize>,
    shuffler: &mut S,
) -> Result<Vec<Vec<Player>>> {
    let mut teams = deal_with(players, num_teams, shuffler)?;

    if let Some(limit) = max_team_size {
        for team in &mut teams {
            team.truncate(limit);
        }
    }

    Ok(teams)
}

/// Bucket, shuffle and deal without any size limit.
pub(crate) fn deal_with<S: Shuffler>(
    players: &[Player],
    num_teams: usize,
    shuffler: &mut S,
) -> Result<Vec<Vec<Player>>> {
    if !(1..=MAX_TEAMS).contains(&num_teams) {
        return Err(Error::invalid_team_count(num_teams));
    }

    let mut buckets: BTreeMap<i64, Vec<Player>> = BTreeMap::new();
    for player in players {
        buckets.entry(player.level).or_default().push(player.clone());
    }

    let mut teams: Vec<Vec<Player>> = vec![Vec::new(); num_teams];
    let mut idx = 0;

    // BTreeMap iterates levels ascending; deal from the strongest bucket down
    for (level, mut bucket) in buckets.into_iter().rev() {
        debug!(level, size = bucket.len(), "dealing level bucket");
        shuffler.shuffle(&mut bucket);
        for player in bucket {
            teams[idx % num_teams].push(player);
            idx += 1;
        }
    }

    Ok(teams)
}
