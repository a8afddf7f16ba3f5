//! PyO3 bindings, built with the `python` feature.

use pyo3::exceptions::{PyIOError, PyKeyError, PyValueError};
use pyo3::prelude::*;

use crate::error::Error;
use crate::parser;
use crate::partition::{partition_with, validate_team_count};
use crate::player::Player;
use crate::shuffle::RandomShuffler;
use crate::stats::{self, TeamStats};

impl From<Error> for PyErr {
    fn from(err: Error) -> PyErr {
        match err {
            Error::InvalidArgument { .. } | Error::Config(_) => PyValueError::new_err(err.to_string()),
            Error::PlayerNotFound(_) => PyKeyError::new_err(err.to_string()),
            Error::Io { .. } | Error::Json { .. } => PyIOError::new_err(err.to_string()),
        }
    }
}

#[pymethods]
impl Player {
    #[new]
    #[pyo3(signature = (id, name, level = 0, enabled = true))]
    fn py_new(id: String, name: String, level: i64, enabled: bool) -> Self {
        Player {
            id,
            name,
            level,
            enabled,
        }
    }

    fn __str__(&self) -> String {
        self.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "Player({:?}, {:?}, level={}, enabled={})",
            self.id, self.name, self.level, self.enabled
        )
    }
}

#[pymethods]
impl TeamStats {
    fn __repr__(&self) -> String {
        format!("TeamStats(mean={:.4}, std_dev={:.4})", self.mean, self.std_dev)
    }
}

/// Split players into teams.
///
/// Disabled players are dropped first. A seed makes the draw reproducible.
#[pyfunction]
#[pyo3(signature = (players, num_teams, max_team_size = None, seed = None))]
fn partition(
    players: Vec<Player>,
    num_teams: i64,
    max_team_size: Option<usize>,
    seed: Option<u64>,
) -> PyResult<Vec<Vec<Player>>> {
    let num_teams = validate_team_count(num_teams)?;
    let enabled: Vec<Player> = players.into_iter().filter(|p| p.enabled).collect();
    let mut shuffler = RandomShuffler::from_seed(seed);
    Ok(partition_with(&enabled, num_teams, max_team_size, &mut shuffler)?)
}

/// Mean and population standard deviation of a team's levels.
#[pyfunction]
fn team_stats(levels: Vec<i64>) -> TeamStats {
    stats::team_stats(&levels)
}

/// Parse `Name - Level` lines into players.
#[pyfunction]
#[pyo3(signature = (text, seed = None))]
fn parse_players(text: &str, seed: Option<u64>) -> Vec<Player> {
    let mut shuffler = RandomShuffler::from_seed(seed);
    parser::parse_players(text, shuffler.rng())
}

/// Python module definition
#[pymodule]
fn teamsort_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Player>()?;
    m.add_class::<TeamStats>()?;

    m.add_function(wrap_pyfunction!(partition, m)?)?;
    m.add_function(wrap_pyfunction!(team_stats, m)?)?;
    m.add_function(wrap_pyfunction!(parse_players, m)?)?;

    m.add("DEFAULT_NUM_TEAMS", crate::constants::DEFAULT_NUM_TEAMS)?;
    m.add("MAX_TEAMS", crate::constants::MAX_TEAMS)?;

    Ok(())
}
