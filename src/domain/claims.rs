//! Claim resolver: pass a card with a (possibly false) creature claim.

use crate::domain::cards::{CardId, CreatureType};
use crate::domain::rules::PLAYERS;
use crate::domain::state::{Game, Player, PlayerId, Round, RoundStatus};
use crate::domain::turns::{advance_turn, is_player_turn};
use crate::errors::domain::{DomainError, ValidationKind};

/// Result of a successful claim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayCardOutcome {
    /// Identity of the round the claim opened.
    pub round_no: u32,
}

/// Play a card from `acting`'s hand, claiming it is `claimed`, to `target`.
///
/// Opens a new active round and hands the turn to the target. The claim's
/// truthfulness is not examined here — the claim is opaque to this operation,
/// preserving the bluff until the responder commits.
///
/// All preconditions are checked before any state changes; a failure leaves
/// game and players untouched.
pub fn play_card(
    game: &mut Game,
    players: &mut [Player; PLAYERS],
    acting: PlayerId,
    card_id: CardId,
    claimed: CreatureType,
    target: PlayerId,
) -> Result<PlayCardOutcome, DomainError> {
    if game.status != crate::domain::state::GameStatus::InProgress {
        return Err(DomainError::validation(
            ValidationKind::GameNotActive,
            format!("Game {} is not in progress", game.id),
        ));
    }
    if !is_player_turn(game, acting) {
        return Err(DomainError::validation(
            ValidationKind::NotPlayerTurn,
            format!("Player {acting} does not hold the turn"),
        ));
    }
    if target == acting {
        return Err(DomainError::validation(
            ValidationKind::CannotTargetSelf,
            "Claim cannot target the acting player",
        ));
    }
    if !game.is_participant(target) {
        return Err(DomainError::validation(
            ValidationKind::InvalidTargetPlayer,
            format!("Player {target} is not a participant of game {}", game.id),
        ));
    }
    // One active round per game, the central invariant. The turn holder with
    // an open round must respond, not claim.
    if game.active_round().is_some() {
        return Err(DomainError::validation(
            ValidationKind::Other("ROUND_IN_PROGRESS".into()),
            "A round is already active; respond to it first",
        ));
    }

    let actor = players
        .iter_mut()
        .find(|p| p.id == acting)
        .ok_or_else(|| DomainError::validation_other("Acting player record missing from game"))?;

    let pos = actor.hand.iter().position(|c| c.id == card_id);
    let Some(pos) = pos else {
        return Err(DomainError::validation(
            ValidationKind::CardNotInHand,
            format!("Card {card_id} is not in player {acting}'s hand"),
        ));
    };

    // All preconditions hold; mutate.
    let card = actor.hand.remove(pos);
    let round_no = game.round_number + 1;
    game.round_number = round_no;
    game.current_round = Some(Round {
        round_no,
        card_in_play: card,
        claiming_player: acting,
        claimed_creature: claimed,
        target_player: target,
        pass_count: 0,
        status: RoundStatus::Active,
        response: None,
        actual_is_truthful: None,
        penalty_receiver: None,
    });
    advance_turn(game, target);
    game.bump_version();

    Ok(PlayCardOutcome { round_no })
}
