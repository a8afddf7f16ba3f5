#[cfg(feature = "python")]
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};

/// A roster entry.
///
/// `level` is only used for bucketing and team statistics; `id` stays stable
/// across edits.
#[cfg_attr(feature = "python", pyclass(get_all, set_all))]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,

    pub name: String,

    /// Skill rating, higher is stronger
    #[serde(default)]
    pub level: i64,

    /// Whether the player takes part in the next draw. Absent means enabled.
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

impl Player {
    /// Create an enabled player.
    pub fn new(id: impl Into<String>, name: impl Into<String>, level: i64) -> Self {
        Player {
            id: id.into(),
            name: name.into(),
            level,
            enabled: true,
        }
    }

    /// Copy of this player with a different level
    pub(crate) fn with_level(&self, level: i64) -> Self {
        Player {
            level,
            ..self.clone()
        }
    }

    /// Copy of this player with the enabled flag flipped
    pub fn toggled(&self) -> Self {
        Player {
            enabled: !self.enabled,
            ..self.clone()
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.name, self.level)
    }
}
