//! Per-viewer redacted snapshots.
//!
//! The engine holds perfect information; what each player may see is a
//! domain rule. A transport layer can serialize these as-is.

use serde::Serialize;

use crate::domain::cards::{Card, CreatureType};
use crate::domain::rules::{CREATURES, PLAYERS};
use crate::domain::state::{
    Game, GameStatus, Player, PlayerId, Round, RoundResponse, RoundStatus,
};
use crate::errors::domain::{DomainError, NotFoundKind};

/// The viewer's own side: full hand visibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YouView {
    pub id: PlayerId,
    pub hand: Vec<Card>,
    pub penalty_counts: [u8; CREATURES],
    pub has_lost: bool,
    pub losing_creature: Option<CreatureType>,
}

/// The opponent: hand exposed as a count only. Penalty piles are public.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpponentView {
    pub id: PlayerId,
    pub hand_count: u8,
    pub penalty_counts: [u8; CREATURES],
    pub has_lost: bool,
    pub losing_creature: Option<CreatureType>,
}

/// The round as the viewer may see it. `card_in_play` is present only for
/// the claimant while the round is active (they played it from their own
/// hand); on resolution the card and its truthfulness become public.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundView {
    pub round_no: u32,
    pub status: RoundStatus,
    pub claiming_player: PlayerId,
    pub claimed_creature: CreatureType,
    pub target_player: PlayerId,
    pub pass_count: u8,
    pub card_in_play: Option<Card>,
    pub response: Option<RoundResponse>,
    pub actual_is_truthful: Option<bool>,
    pub penalty_receiver: Option<PlayerId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerSnapshot {
    pub game_id: i64,
    pub status: GameStatus,
    pub version: i32,
    pub round_number: u32,
    pub winner: Option<PlayerId>,
    pub your_turn: bool,
    pub you: YouView,
    pub opponent: OpponentView,
    pub round: Option<RoundView>,
}

fn redact_round(round: &Round, viewer: PlayerId) -> RoundView {
    let card_visible = round.status == RoundStatus::Resolved || round.claiming_player == viewer;
    RoundView {
        round_no: round.round_no,
        status: round.status,
        claiming_player: round.claiming_player,
        claimed_creature: round.claimed_creature,
        target_player: round.target_player,
        pass_count: round.pass_count,
        card_in_play: card_visible.then_some(round.card_in_play),
        response: round.response,
        actual_is_truthful: round.actual_is_truthful.filter(|_| card_visible),
        penalty_receiver: round.penalty_receiver,
    }
}

/// Build the snapshot `viewer` is allowed to see. The hidden pool is never
/// included for anyone.
pub fn build_player_snapshot(
    game: &Game,
    players: &[Player; PLAYERS],
    viewer: PlayerId,
) -> Result<PlayerSnapshot, DomainError> {
    let you = players.iter().find(|p| p.id == viewer).ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::Player,
            format!("Player {viewer} is not a participant of game {}", game.id),
        )
    })?;
    let opponent = players
        .iter()
        .find(|p| p.id != viewer)
        .ok_or_else(|| DomainError::validation_other("Opponent record missing from game"))?;

    Ok(PlayerSnapshot {
        game_id: game.id,
        status: game.status,
        version: game.version,
        round_number: game.round_number,
        winner: game.winner,
        your_turn: game.turn == Some(viewer),
        you: YouView {
            id: you.id,
            hand: you.hand.clone(),
            penalty_counts: you.penalties.counts(),
            has_lost: you.has_lost,
            losing_creature: you.losing_creature,
        },
        opponent: OpponentView {
            id: opponent.id,
            hand_count: opponent.hand.len() as u8,
            penalty_counts: opponent.penalties.counts(),
            has_lost: opponent.has_lost,
            losing_creature: opponent.losing_creature,
        },
        round: game.current_round.as_ref().map(|r| redact_round(r, viewer)),
    })
}
