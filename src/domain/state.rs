//! Game, player, and round state containers.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::cards::{Card, CreatureType};
use crate::domain::rules::{CREATURES, PLAYERS};
use crate::errors::domain::DomainError;

pub type GameId = i64;
pub type PlayerId = i64;

/// Overall game lifecycle.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// Game created, hands not dealt yet.
    Waiting,
    /// Hands dealt, rounds being played.
    InProgress,
    /// A player lost; terminal, no further mutation is valid.
    Ended,
}

/// Lifecycle of a single card pass.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundStatus {
    Active,
    Resolved,
}

/// The responding player's decision on an active round.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundResponse {
    Believe,
    Disbelieve,
    PassBack,
}

/// The truth-object for one card pass.
///
/// Created by the claim resolver, mutated only by the response resolver
/// (pass-back bumps `pass_count` and flips `target_player`; a final
/// believe/disbelieve resolves it), then immutable history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// 1-based position within the game; doubles as the round's identity.
    pub round_no: u32,
    /// The physical card being passed. Its true creature stays hidden from
    /// the target until resolution.
    pub card_in_play: Card,
    pub claiming_player: PlayerId,
    /// What the claiming player asserts the card is. Possibly a lie.
    pub claimed_creature: CreatureType,
    /// Who must respond next.
    pub target_player: PlayerId,
    pub pass_count: u8,
    pub status: RoundStatus,
    /// Set on resolution.
    pub response: Option<RoundResponse>,
    /// Set on resolution: did the claim match the card?
    pub actual_is_truthful: Option<bool>,
    /// Set on resolution: who took the card as a penalty.
    pub penalty_receiver: Option<PlayerId>,
}

impl Round {
    pub fn is_active(&self) -> bool {
        self.status == RoundStatus::Active
    }
}

/// Per-player, per-creature penalty accumulation. Append-only for the
/// lifetime of a game; order within a pile is insertion order (display only).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltyPiles([Vec<Card>; CREATURES]);

impl PenaltyPiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pile(&self, creature: CreatureType) -> &[Card] {
        &self.0[creature.index()]
    }

    pub fn push(&mut self, card: Card) -> u8 {
        let pile = &mut self.0[card.creature.index()];
        pile.push(card);
        pile.len() as u8
    }

    pub fn count(&self, creature: CreatureType) -> u8 {
        self.0[creature.index()].len() as u8
    }

    /// Pile sizes in [`CreatureType::ALL`] order.
    pub fn counts(&self) -> [u8; CREATURES] {
        let mut out = [0u8; CREATURES];
        for (i, pile) in self.0.iter().enumerate() {
            out[i] = pile.len() as u8;
        }
        out
    }

    pub fn total(&self) -> usize {
        self.0.iter().map(Vec::len).sum()
    }
}

/// One side of the match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// Cards currently held; shrinks by one per claim, never regains cards.
    pub hand: Vec<Card>,
    pub penalties: PenaltyPiles,
    pub has_lost: bool,
    /// Set only when `has_lost` becomes true.
    pub losing_creature: Option<CreatureType>,
}

impl Player {
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            hand: Vec::new(),
            penalties: PenaltyPiles::new(),
            has_lost: false,
            losing_creature: None,
        }
    }
}

/// Entire per-game container, sufficient for pure domain operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub status: GameStatus,
    /// Exactly 2 participants, fixed at creation.
    pub players: [PlayerId; PLAYERS],
    /// Player expected to act. None before start and after the game ends.
    pub turn: Option<PlayerId>,
    /// Monotonic count of rounds started.
    pub round_number: u32,
    /// At most one round may be active at a time — the central invariant.
    /// A resolved round lingers here until a successor begins.
    pub current_round: Option<Round>,
    /// Set only when `status` is Ended.
    pub winner: Option<PlayerId>,
    /// Optimistic-concurrency token; bumped on every committed mutation.
    pub version: i32,
    /// Base seed for the shuffle; set at start for deterministic replay.
    pub rng_seed: Option<i64>,
    /// The 6 cards nobody holds. Never revealed during play.
    pub hidden: Vec<Card>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub started_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub ended_at: Option<OffsetDateTime>,
}

impl Game {
    pub fn new(id: GameId, players: [PlayerId; PLAYERS], created_at: OffsetDateTime) -> Self {
        Self {
            id,
            status: GameStatus::Waiting,
            players,
            turn: None,
            round_number: 0,
            current_round: None,
            winner: None,
            version: 0,
            rng_seed: None,
            hidden: Vec::new(),
            created_at,
            started_at: None,
            ended_at: None,
        }
    }

    pub fn is_participant(&self, player: PlayerId) -> bool {
        self.players.contains(&player)
    }

    /// The other participant. None when `player` is not in this game.
    pub fn opponent_of(&self, player: PlayerId) -> Option<PlayerId> {
        match self.players {
            [a, b] if a == player => Some(b),
            [a, b] if b == player => Some(a),
            _ => None,
        }
    }

    pub fn bump_version(&mut self) {
        self.version += 1;
    }

    /// The active round, if any.
    pub fn active_round(&self) -> Option<&Round> {
        self.current_round.as_ref().filter(|r| r.is_active())
    }

    pub fn active_round_mut(&mut self) -> Option<&mut Round> {
        self.current_round.as_mut().filter(|r| r.is_active())
    }
}

pub fn require_turn(game: &Game, ctx: &'static str) -> Result<PlayerId, DomainError> {
    game.turn.ok_or_else(|| {
        DomainError::validation_other(format!("Invariant violated: turn must be set ({ctx})"))
    })
}
