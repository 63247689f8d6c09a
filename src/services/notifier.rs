//! Notification collaborator.
//!
//! After every successful mutation the game flow service hands the resulting
//! transitions to a [`GameNotifier`]. The engine never performs delivery
//! itself; a realtime layer subscribes and broadcasts.

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::warn;

use crate::domain::game_transition::GameTransition;
use crate::domain::state::GameId;

/// Envelope a transport layer can serialize and ship as-is. The version lets
/// clients fetch a matching snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    pub game_id: GameId,
    pub version: i32,
    pub transition: GameTransition,
}

#[async_trait]
pub trait GameNotifier: Send + Sync {
    /// Called once per committed mutation. Must not fail the mutation:
    /// delivery problems are the notifier's to log and absorb.
    async fn notify(&self, game_id: GameId, version: i32, transitions: &[GameTransition]);
}

/// Discards everything. The default when no realtime layer is attached.
#[derive(Debug, Default)]
pub struct NullNotifier;

#[async_trait]
impl GameNotifier for NullNotifier {
    async fn notify(&self, _game_id: GameId, _version: i32, _transitions: &[GameTransition]) {}
}

/// Collects events for inspection; used by tests.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<GameEvent>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<GameEvent> {
        self.events.lock().clone()
    }

    pub fn transitions_for(&self, game_id: GameId) -> Vec<GameTransition> {
        self.events
            .lock()
            .iter()
            .filter(|e| e.game_id == game_id)
            .map(|e| e.transition.clone())
            .collect()
    }
}

#[async_trait]
impl GameNotifier for RecordingNotifier {
    async fn notify(&self, game_id: GameId, version: i32, transitions: &[GameTransition]) {
        let mut events = self.events.lock();
        for transition in transitions {
            events.push(GameEvent {
                game_id,
                version,
                transition: transition.clone(),
            });
        }
    }
}

/// Fans events out over a tokio broadcast channel.
#[derive(Debug)]
pub struct BroadcastNotifier {
    tx: broadcast::Sender<GameEvent>,
}

impl BroadcastNotifier {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<GameEvent> {
        self.tx.subscribe()
    }
}

#[async_trait]
impl GameNotifier for BroadcastNotifier {
    async fn notify(&self, game_id: GameId, version: i32, transitions: &[GameTransition]) {
        for transition in transitions {
            let event = GameEvent {
                game_id,
                version,
                transition: transition.clone(),
            };
            if self.tx.send(event).is_err() {
                // No live subscribers; nothing to deliver.
                warn!(game_id, version, "dropping game event: no subscribers");
            }
        }
    }
}
