//! In-memory game store.
//!
//! One entry per game, sharded by id; mutations on different games never
//! contend. The optimistic-concurrency check happens under the entry lock,
//! so a stale writer always observes `VERSION_CONFLICT` rather than
//! clobbering a concurrent commit.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::state::GameId;
use crate::errors::domain::{ConflictKind, DomainError};
use crate::repos::games::{GameRecord, GameRepo};

#[derive(Debug, Default)]
pub struct InMemoryGames {
    games: DashMap<GameId, GameRecord>,
    next_id: AtomicI64,
}

impl InMemoryGames {
    pub fn new() -> Self {
        Self {
            games: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

#[async_trait]
impl GameRepo for InMemoryGames {
    async fn next_game_id(&self) -> Result<GameId, DomainError> {
        Ok(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    async fn insert(&self, record: GameRecord) -> Result<(), DomainError> {
        let id = record.game.id;
        if self.games.contains_key(&id) {
            return Err(DomainError::conflict(
                ConflictKind::Other("DUPLICATE_GAME".into()),
                format!("Game {id} already exists"),
            ));
        }
        self.games.insert(id, record);
        Ok(())
    }

    async fn find_by_id(&self, id: GameId) -> Result<Option<GameRecord>, DomainError> {
        Ok(self.games.get(&id).map(|entry| entry.value().clone()))
    }

    async fn save(&self, record: GameRecord, expected_version: i32) -> Result<(), DomainError> {
        let id = record.game.id;
        let Some(mut entry) = self.games.get_mut(&id) else {
            return Err(DomainError::not_found(
                crate::errors::domain::NotFoundKind::Game,
                format!("Game {id} does not exist"),
            ));
        };
        let stored_version = entry.value().game.version;
        if stored_version != expected_version {
            return Err(DomainError::conflict(
                ConflictKind::OptimisticLock,
                format!(
                    "Game {id} was modified concurrently (expected version {expected_version}, \
                     actual version {stored_version}). Please refresh and retry."
                ),
            ));
        }
        *entry.value_mut() = record;
        Ok(())
    }
}
