//! Game flow orchestration.
//!
//! The service owns the load / mutate / save-with-version / notify cycle
//! around the pure domain transitions. Storage and delivery stay behind the
//! [`GameRepo`] and [`GameNotifier`] traits.

mod lifecycle;
mod player_actions;

use std::sync::Arc;

use crate::config::RulesConfig;
use crate::domain::game_transition::GameLifecycleView;
use crate::domain::state::{Game, GameId};
use crate::errors::domain::{ConflictKind, DomainError};
use crate::repos::games::{require_game, GameRecord, GameRepo};
use crate::services::notifier::GameNotifier;

pub struct GameFlowService {
    repo: Arc<dyn GameRepo>,
    notifier: Arc<dyn GameNotifier>,
    rules: RulesConfig,
}

impl GameFlowService {
    pub fn new(repo: Arc<dyn GameRepo>, notifier: Arc<dyn GameNotifier>) -> Self {
        Self::with_rules(repo, notifier, RulesConfig::default())
    }

    pub fn with_rules(
        repo: Arc<dyn GameRepo>,
        notifier: Arc<dyn GameNotifier>,
        rules: RulesConfig,
    ) -> Self {
        Self {
            repo,
            notifier,
            rules,
        }
    }

    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    /// Load the aggregate and enforce the caller's version expectation, if
    /// given. Callers that pass `None` accept last-writer-wins on their read.
    async fn load_checked(
        &self,
        game_id: GameId,
        expected_version: Option<i32>,
    ) -> Result<GameRecord, DomainError> {
        let record = require_game(self.repo.as_ref(), game_id).await?;
        if let Some(expected) = expected_version {
            let actual = record.game.version;
            if actual != expected {
                return Err(DomainError::conflict(
                    ConflictKind::OptimisticLock,
                    format!(
                        "Game {game_id} was modified concurrently (expected version \
                         {expected}, actual version {actual}). Please refresh and retry."
                    ),
                ));
            }
        }
        Ok(record)
    }
}

fn lifecycle_view(game: &Game) -> GameLifecycleView {
    GameLifecycleView {
        version: game.version,
        turn: game.turn,
        status: game.status,
    }
}
