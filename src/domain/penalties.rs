//! Penalty tracking and win evaluation.

use time::OffsetDateTime;

use crate::domain::cards::{Card, CreatureType};
use crate::domain::rules::PLAYERS;
use crate::domain::state::{Game, GameStatus, Player, PlayerId};
use crate::errors::domain::DomainError;

/// Append `card` to the receiver's pile for the card's creature.
///
/// Returns the new pile size. Piles only grow, never shrink.
pub fn apply_penalty(player: &mut Player, card: Card) -> u8 {
    player.penalties.push(card)
}

/// Check whether any pile has reached the win condition.
///
/// Returns the losing creature, or None. At most one pile can be at the
/// threshold because the game ends on the round that first reaches it.
pub fn check_loss(player: &Player, win_condition: u8) -> Option<CreatureType> {
    CreatureType::ALL
        .into_iter()
        .find(|&creature| player.penalties.count(creature) >= win_condition)
}

/// Terminate the game: mark the loser, crown the other participant.
///
/// Terminal — no further mutation is valid on the game afterwards.
pub fn end_game(
    game: &mut Game,
    players: &mut [Player; PLAYERS],
    loser: PlayerId,
    losing_creature: CreatureType,
    ended_at: OffsetDateTime,
) -> Result<(), DomainError> {
    let winner = game.opponent_of(loser).ok_or_else(|| {
        DomainError::validation_other(format!("Loser {loser} is not a participant"))
    })?;

    let loser_record = players
        .iter_mut()
        .find(|p| p.id == loser)
        .ok_or_else(|| DomainError::validation_other("Loser record missing from game"))?;
    loser_record.has_lost = true;
    loser_record.losing_creature = Some(losing_creature);

    game.status = GameStatus::Ended;
    game.winner = Some(winner);
    game.turn = None;
    game.ended_at = Some(ended_at);
    game.bump_version();
    Ok(())
}
