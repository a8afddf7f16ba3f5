/// Key under which the roster is stored in the roster document
pub const ROSTER_KEY: &str = "players";

/// Team count used when neither the config nor the command line sets one
pub const DEFAULT_NUM_TEAMS: usize = 2;

/// Length of generated player ids
pub const PLAYER_ID_LEN: usize = 7;

/// Alphabet for generated player ids (lowercase base 36)
pub const PLAYER_ID_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Sentinel mean reported for a team with no players
pub const EMPTY_TEAM_MEAN: f64 = 0.0;

/// Sentinel standard deviation reported for a team with no players
pub const EMPTY_TEAM_STD_DEV: f64 = 0.0;

/// Largest team count accepted by the partitioner
pub const MAX_TEAMS: usize = 10_000;
