//! Teamsort Core - level-aware team sorting.
//!
//! Players are bucketed by level, shuffled within each bucket and dealt
//! round-robin into teams from the strongest bucket down. Optional Python
//! bindings are available behind the `python` feature.

pub mod config;
pub mod constants;
pub mod draw;
pub mod error;
pub mod logging;
pub mod parser;
pub mod partition;
pub mod player;
pub mod report;
pub mod roster;
pub mod shuffle;
pub mod stats;

#[cfg(feature = "python")]
mod python;

pub use config::{Config, ConfigError};
pub use constants::{DEFAULT_NUM_TEAMS, MAX_TEAMS, ROSTER_KEY};
pub use draw::{draw_teams, DrawRequest, DrawnTeam, TeamDraw};
pub use error::{Error, Result};
pub use parser::parse_players;
pub use partition::{partition, partition_with, validate_team_count};
pub use player::Player;
pub use roster::{JsonFileStore, MemoryStore, Roster, RosterStore};
pub use shuffle::{IdentityShuffler, RandomShuffler, Shuffler};
pub use stats::{team_stats, TeamStats};
