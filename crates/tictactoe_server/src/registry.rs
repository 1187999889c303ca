//! In-memory game registry.
//!
//! Maps game identifiers to the latest [`GameState`] snapshot. Each game sits
//! behind its own lock so moves on one game are serialized without blocking
//! the others.

use crate::error::RegistryError;
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tictactoe_engine::{GameState, Player, new_game};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Unique identifier for a game.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GameId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

type Entry = Arc<Mutex<GameState>>;

/// Thread-safe registry of active games.
#[derive(Debug, Default)]
pub struct GameRegistry {
    games: RwLock<HashMap<GameId, Entry>>,
    max_games: Option<usize>,
}

impl GameRegistry {
    /// Creates an unbounded registry.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating game registry");
        Self::default()
    }

    /// Creates a registry that refuses new games beyond `max_games`.
    #[instrument]
    pub fn with_capacity_limit(max_games: usize) -> Self {
        info!(max_games, "Creating bounded game registry");
        Self {
            games: RwLock::default(),
            max_games: Some(max_games),
        }
    }

    /// Starts a new game and stores its initial snapshot.
    #[instrument(skip(self))]
    pub fn create(
        &self,
        starting_player: Option<Player>,
    ) -> Result<(GameId, GameState), RegistryError> {
        let state = new_game(starting_player);
        let mut games = self.games.write();

        if let Some(limit) = self.max_games {
            if games.len() >= limit {
                warn!(limit, "Registry full, refusing new game");
                return Err(RegistryError::CapacityExceeded(limit));
            }
        }

        let mut id = GameId::generate();
        while games.contains_key(&id) {
            id = GameId::generate();
        }
        games.insert(id.clone(), Arc::new(Mutex::new(state)));

        info!(game_id = %id, starting_player = %state.current_player(), "Created game");
        Ok((id, state))
    }

    /// Returns the current snapshot of a game.
    #[instrument(skip(self))]
    pub fn get(&self, id: &GameId) -> Option<GameState> {
        let entry = self.entry(id)?;
        let state = *entry.lock();
        Some(state)
    }

    /// Validates and applies a move, installing the successor snapshot.
    ///
    /// The game's lock is held from read to install, so two concurrent moves
    /// on the same game never both build on the same snapshot.
    #[instrument(skip(self))]
    pub fn apply_move(
        &self,
        id: &GameId,
        index: usize,
        marker: Player,
    ) -> Result<GameState, RegistryError> {
        let entry = self
            .entry(id)
            .ok_or_else(|| RegistryError::NotFound(id.clone()))?;

        let mut state = entry.lock();
        let next = state.make_move(index, marker)?;
        *state = next;

        debug!(game_id = %id, index, %marker, status = %next.status(), "Installed new snapshot");
        Ok(next)
    }

    /// Removes a game. Returns `true` if it existed.
    #[instrument(skip(self))]
    pub fn remove(&self, id: &GameId) -> bool {
        let removed = self.games.write().remove(id).is_some();
        if removed {
            info!(game_id = %id, "Removed game");
        } else {
            debug!(game_id = %id, "Remove requested for unknown game");
        }
        removed
    }

    /// Number of active games.
    pub fn len(&self) -> usize {
        self.games.read().len()
    }

    /// True when no games are active.
    pub fn is_empty(&self) -> bool {
        self.games.read().is_empty()
    }

    /// Lists all active game ids, sorted.
    #[instrument(skip(self))]
    pub fn ids(&self) -> Vec<GameId> {
        let mut ids: Vec<_> = self.games.read().keys().cloned().collect();
        ids.sort();
        debug!(count = ids.len(), "Listed games");
        ids
    }

    fn entry(&self, id: &GameId) -> Option<Entry> {
        let entry = self.games.read().get(id).cloned();
        if entry.is_none() {
            debug!(game_id = %id, "Game not found");
        }
        entry
    }
}
