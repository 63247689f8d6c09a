//! Game repository: the narrow persistence interface the engine consumes.
//!
//! The engine is persistence-agnostic. Any storage technology providing
//! serializable isolation per game and honoring the optimistic-concurrency
//! contract below satisfies it; the crate ships an in-memory adapter.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::rules::PLAYERS;
use crate::domain::state::{Game, GameId, Player, Round};
use crate::errors::domain::{DomainError, NotFoundKind};

/// The per-game aggregate: the engine's unit of isolation and the unit of
/// optimistic concurrency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub game: Game,
    pub players: [Player; PLAYERS],
    /// Resolved rounds, oldest first. `game.current_round` moves here when a
    /// successor round begins or the game ends.
    pub rounds: Vec<Round>,
}

impl GameRecord {
    pub fn new(game: Game, players: [Player; PLAYERS]) -> Self {
        Self {
            game,
            players,
            rounds: Vec::new(),
        }
    }

    /// Archive a lingering resolved round into history.
    pub fn archive_resolved_round(&mut self) {
        if let Some(round) = self.game.current_round.take() {
            if round.is_active() {
                // Still live; put it back.
                self.game.current_round = Some(round);
            } else {
                self.rounds.push(round);
            }
        }
    }
}

/// Storage contract for game aggregates.
#[async_trait]
pub trait GameRepo: Send + Sync {
    /// Allocate a fresh game id.
    async fn next_game_id(&self) -> Result<GameId, DomainError>;

    /// Store a brand-new aggregate.
    async fn insert(&self, record: GameRecord) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: GameId) -> Result<Option<GameRecord>, DomainError>;

    /// Replace the stored aggregate iff its version still equals
    /// `expected_version`; otherwise fail with `VERSION_CONFLICT`, forcing
    /// the caller to re-fetch and retry.
    async fn save(&self, record: GameRecord, expected_version: i32) -> Result<(), DomainError>;
}

/// Find a game or convert its absence into a `GAME_NOT_FOUND` error,
/// eliminating the repetitive `ok_or_else` at call sites.
pub async fn require_game(repo: &dyn GameRepo, id: GameId) -> Result<GameRecord, DomainError> {
    repo.find_by_id(id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Game, format!("Game {id} does not exist"))
    })
}
