use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::constants::ROSTER_KEY;
use crate::error::{Error, Result};
use crate::player::Player;

/// Whole-roster storage: read everything, replace everything.
pub trait RosterStore {
    fn get_all(&self) -> Result<Vec<Player>>;

    fn replace_all(&mut self, players: &[Player]) -> Result<()>;
}

/// In-memory store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    players: Vec<Player>,
}

impl MemoryStore {
    pub fn with_players(players: Vec<Player>) -> Self {
        MemoryStore { players }
    }
}

impl RosterStore for MemoryStore {
    fn get_all(&self) -> Result<Vec<Player>> {
        Ok(self.players.clone())
    }

    fn replace_all(&mut self, players: &[Player]) -> Result<()> {
        self.players = players.to_vec();
        Ok(())
    }
}

/// JSON document on disk holding a key-value map; the roster lives under
/// [`ROSTER_KEY`]. Other keys are preserved on write.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_err(&self, source: std::io::Error) -> Error {
        Error::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn json_err(&self, source: serde_json::Error) -> Error {
        Error::Json {
            path: self.path.clone(),
            source,
        }
    }

    /// Read the whole document; a missing file is an empty map.
    fn read_document(&self) -> Result<Map<String, Value>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "roster file missing, starting empty");
                return Ok(Map::new());
            }
            Err(e) => return Err(self.io_err(e)),
        };

        if text.trim().is_empty() {
            return Ok(Map::new());
        }

        serde_json::from_str(&text).map_err(|e| self.json_err(e))
    }
}

impl RosterStore for JsonFileStore {
    fn get_all(&self) -> Result<Vec<Player>> {
        let mut document = self.read_document()?;
        match document.remove(ROSTER_KEY) {
            Some(value) => serde_json::from_value(value).map_err(|e| self.json_err(e)),
            None => Ok(Vec::new()),
        }
    }

    fn replace_all(&mut self, players: &[Player]) -> Result<()> {
        let mut document = self.read_document()?;
        let value = serde_json::to_value(players).map_err(|e| self.json_err(e))?;
        document.insert(ROSTER_KEY.to_string(), value);

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_err(e))?;
        }

        let text = serde_json::to_string_pretty(&document).map_err(|e| self.json_err(e))?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, text).map_err(|e| self.io_err(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_err(e))?;

        debug!(path = %self.path.display(), count = players.len(), "roster written");
        Ok(())
    }
}

/// Roster editing on top of a store. Every edit reads the full list,
/// modifies it and replaces it.
pub struct Roster<S: RosterStore> {
    store: S,
}

impl<S: RosterStore> Roster<S> {
    pub fn new(store: S) -> Self {
        Roster { store }
    }

    pub fn players(&self) -> Result<Vec<Player>> {
        self.store.get_all()
    }

    /// Players eligible for the next draw
    pub fn enabled_players(&self) -> Result<Vec<Player>> {
        Ok(self
            .store
            .get_all()?
            .into_iter()
            .filter(|p| p.enabled)
            .collect())
    }

    /// Append players to the roster.
    pub fn add_players(&mut self, new_players: Vec<Player>) -> Result<()> {
        let mut players = self.store.get_all()?;
        info!(added = new_players.len(), "adding players");
        players.extend(new_players);
        self.store.replace_all(&players)
    }

    pub fn delete_player(&mut self, id: &str) -> Result<Player> {
        let mut players = self.store.get_all()?;
        let pos = Self::position(&players, id)?;
        let removed = players.remove(pos);
        self.store.replace_all(&players)?;
        info!(id, name = %removed.name, "player deleted");
        Ok(removed)
    }

    /// Replace the player with the same id.
    pub fn update_player(&mut self, updated: Player) -> Result<()> {
        let mut players = self.store.get_all()?;
        let pos = Self::position(&players, &updated.id)?;
        players[pos] = updated;
        self.store.replace_all(&players)
    }

    pub fn rename_player(&mut self, id: &str, name: &str) -> Result<Player> {
        self.modify(id, |p| p.name = name.to_string())
    }

    pub fn set_level(&mut self, id: &str, level: i64) -> Result<Player> {
        self.modify(id, |p| *p = p.with_level(level))
    }

    /// Flip the enabled flag; returns the updated player.
    pub fn toggle_enabled(&mut self, id: &str) -> Result<Player> {
        self.modify(id, |p| *p = p.toggled())
    }

    pub fn clear(&mut self) -> Result<()> {
        self.store.replace_all(&[])
    }

    fn modify<F: FnOnce(&mut Player)>(&mut self, id: &str, f: F) -> Result<Player> {
        let mut players = self.store.get_all()?;
        let pos = Self::position(&players, id)?;
        f(&mut players[pos]);
        let updated = players[pos].clone();
        self.store.replace_all(&players)?;
        Ok(updated)
    }

    fn position(players: &[Player], id: &str) -> Result<usize> {
        players
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| Error::PlayerNotFound(id.to_string()))
    }
}
