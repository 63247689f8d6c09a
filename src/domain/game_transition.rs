//! Lifecycle transitions emitted after successful mutations.
//!
//! The engine does not deliver anything itself; a realtime layer subscribes
//! through the notifier and broadcasts these.

use serde::{Deserialize, Serialize};

use crate::domain::cards::CreatureType;
use crate::domain::state::{GameStatus, PlayerId};

/// Before/after view of a game's lifecycle fields, sufficient to derive
/// edge-triggered transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameLifecycleView {
    pub version: i32,
    pub turn: Option<PlayerId>,
    pub status: GameStatus,
}

/// A description of what changed, for the notification collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameTransition {
    /// Edge-triggered: the turn became a specific player.
    TurnBecame { player_id: PlayerId },

    /// Edge-triggered: Waiting -> InProgress.
    GameStarted,

    /// Edge-triggered: InProgress -> Ended.
    GameEnded { winner: Option<PlayerId> },

    /// Explicit: a claim opened a new round.
    RoundStarted { round_no: u32 },

    /// Explicit: the responder declined to judge and returned the card.
    RoundPassedBack { round_no: u32, pass_count: u8 },

    /// Explicit: a believe/disbelieve closed the round.
    RoundResolved {
        round_no: u32,
        penalty_receiver: PlayerId,
    },

    /// Explicit: a card landed on a penalty pile.
    PenaltyApplied {
        player_id: PlayerId,
        creature: CreatureType,
        pile_count: u8,
    },
}

/// Derive edge-triggered transitions from before/after lifecycle state.
pub fn derive_game_transitions(
    before: &GameLifecycleView,
    after: &GameLifecycleView,
    winner: Option<PlayerId>,
) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    if before.status == GameStatus::Waiting && after.status == GameStatus::InProgress {
        transitions.push(GameTransition::GameStarted);
    }

    if before.status != GameStatus::Ended && after.status == GameStatus::Ended {
        transitions.push(GameTransition::GameEnded { winner });
    }

    if let Some(player_id) = after.turn {
        if before.turn != Some(player_id) {
            transitions.push(GameTransition::TurnBecame { player_id });
        }
    }

    transitions
}
