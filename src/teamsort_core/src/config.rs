// Settings loaded from teamsort.toml.

use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::{DEFAULT_NUM_TEAMS, MAX_TEAMS};

pub const CONFIG_FILE_NAME: &str = "teamsort.toml";
pub const ROSTER_FILE_NAME: &str = "roster.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Where the roster document lives; platform data dir when unset
    pub roster_path: Option<PathBuf>,

    pub default_teams: usize,

    pub default_max_team_size: Option<usize>,

    /// Fallback filter when RUST_LOG is unset
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            roster_path: None,
            default_teams: DEFAULT_NUM_TEAMS,
            default_max_team_size: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load from `path`, or from the platform config dir when `path` is None.
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match project_dirs() {
                Some(dirs) => dirs.config_dir().join(CONFIG_FILE_NAME),
                None => return Ok(Config::default()),
            },
        };

        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(source) => return Err(ConfigError::ReadError { path, source }),
        };

        Self::from_toml(&text).map_err(|e| match e {
            ConfigError::ParseError { source, .. } => ConfigError::ParseError { path, source },
            other => other,
        })
    }

    /// Parse and validate config text.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text).map_err(|source| ConfigError::ParseError {
            path: PathBuf::from(CONFIG_FILE_NAME),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_TEAMS).contains(&self.default_teams) {
            return Err(ConfigError::ValidationError {
                field: "default_teams".to_string(),
                message: format!("must be between 1 and {MAX_TEAMS}"),
            });
        }
        Ok(())
    }

    /// Roster location: configured path, else the platform data dir, else
    /// the working directory.
    pub fn resolved_roster_path(&self) -> PathBuf {
        if let Some(path) = &self.roster_path {
            return path.clone();
        }
        match project_dirs() {
            Some(dirs) => dirs.data_dir().join(ROSTER_FILE_NAME),
            None => PathBuf::from(ROSTER_FILE_NAME),
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "teamsort")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_all_fields() {
        let config = Config::from_toml(
            r#"
            roster_path = "/tmp/r.json"
            default_teams = 4
            default_max_team_size = 5
            log_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.roster_path, Some(PathBuf::from("/tmp/r.json")));
        assert_eq!(config.default_teams, 4);
        assert_eq!(config.default_max_team_size, Some(5));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.resolved_roster_path(), PathBuf::from("/tmp/r.json"));
    }

    #[test]
    fn test_zero_teams_rejected() {
        let err = Config::from_toml("default_teams = 0").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { field, .. } if field == "default_teams"));

        let err = Config::from_toml(&format!("default_teams = {}", MAX_TEAMS + 1)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(matches!(
            Config::from_toml("teams = 3"),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(dir.path().join("absent.toml").as_path())).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "default_teams = \"two\"").unwrap();

        match Config::load(Some(path.as_path())) {
            Err(ConfigError::ParseError { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
