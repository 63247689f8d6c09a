//! Response resolver: believe, disbelieve, or pass the card back.

use time::OffsetDateTime;

use crate::config::RulesConfig;
use crate::domain::cards::CreatureType;
use crate::domain::penalties::{apply_penalty, check_loss, end_game};
use crate::domain::rules::PLAYERS;
use crate::domain::state::{Game, Player, PlayerId, RoundResponse, RoundStatus};
use crate::domain::turns::advance_turn;
use crate::errors::domain::{DomainError, ValidationKind};

/// What a final believe/disbelieve did to the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResolution {
    pub round_no: u32,
    pub response: RoundResponse,
    /// Did the card actually match the claim?
    pub actual_is_truthful: bool,
    /// Did the responder read the claimant correctly?
    pub guess_is_correct: bool,
    /// Who took the card: the claimant on a correct guess, else the guesser.
    pub penalty_receiver: PlayerId,
    pub penalty_creature: CreatureType,
    /// Size of the receiver's pile for that creature after the append.
    pub pile_count: u8,
    pub game_ended: bool,
}

/// Result of responding to the active round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RespondOutcome {
    pub round_no: u32,
    pub response: RoundResponse,
    /// Pass count after this action (unchanged for believe/disbelieve).
    pub pass_count: u8,
    /// Present iff the round was resolved (not passed back).
    pub resolution: Option<RoundResolution>,
}

/// Apply the target player's decision to the game's active round.
///
/// Pass-back keeps the claim and the physical card unchanged — bluff
/// information is preserved across passes — and is bounded by
/// `rules.max_passes`. A final believe/disbelieve resolves the round,
/// assigns the penalty, and either ends the game or hands the turn to the
/// stung player, who leads the next round.
///
/// All preconditions are checked before any state changes; a failure leaves
/// game and players untouched.
pub fn respond_to_round(
    game: &mut Game,
    players: &mut [Player; PLAYERS],
    responder: PlayerId,
    response: RoundResponse,
    rules: &RulesConfig,
    now: OffsetDateTime,
) -> Result<RespondOutcome, DomainError> {
    if game.status != crate::domain::state::GameStatus::InProgress {
        return Err(DomainError::validation(
            ValidationKind::GameNotActive,
            format!("Game {} is not in progress", game.id),
        ));
    }
    let Some(round) = game.active_round() else {
        return Err(DomainError::validation(
            ValidationKind::RoundNotActive,
            "No active round to respond to",
        ));
    };
    if round.target_player != responder {
        return Err(DomainError::validation(
            ValidationKind::NotTargetPlayer,
            format!(
                "Player {responder} is not the round's target (expected {})",
                round.target_player
            ),
        ));
    }

    match response {
        RoundResponse::PassBack => {
            if round.pass_count >= rules.max_passes {
                return Err(DomainError::validation(
                    ValidationKind::MaxPassLimitReached,
                    format!(
                        "Pass limit of {} reached; respond believe or disbelieve",
                        rules.max_passes
                    ),
                ));
            }
            let round_no = round.round_no;
            // The card goes back across the table: the other participant
            // becomes the target. On the first pass that is the claimant.
            let new_target = game.opponent_of(responder).ok_or_else(|| {
                DomainError::validation_other("Responder is not a participant")
            })?;
            let pass_count = {
                let round = game
                    .active_round_mut()
                    .ok_or_else(|| DomainError::validation_other("Active round vanished"))?;
                round.pass_count += 1;
                round.target_player = new_target;
                round.pass_count
            };
            advance_turn(game, new_target);
            game.bump_version();
            Ok(RespondOutcome {
                round_no,
                response,
                pass_count,
                resolution: None,
            })
        }
        RoundResponse::Believe | RoundResponse::Disbelieve => {
            let card = round.card_in_play;
            let claimant = round.claiming_player;
            let round_no = round.round_no;
            let pass_count = round.pass_count;
            let actual_is_truthful = card.creature == round.claimed_creature;
            let guess_is_correct = (response == RoundResponse::Believe) == actual_is_truthful;
            // A correct guess punishes the claimant (their bluff or honesty
            // was seen through); an incorrect guess punishes the guesser.
            let penalty_receiver = if guess_is_correct { claimant } else { responder };

            {
                let round = game
                    .active_round_mut()
                    .ok_or_else(|| DomainError::validation_other("Active round vanished"))?;
                round.status = RoundStatus::Resolved;
                round.response = Some(response);
                round.actual_is_truthful = Some(actual_is_truthful);
                round.penalty_receiver = Some(penalty_receiver);
            }

            let receiver = players
                .iter_mut()
                .find(|p| p.id == penalty_receiver)
                .ok_or_else(|| {
                    DomainError::validation_other("Penalty receiver record missing from game")
                })?;
            let pile_count = apply_penalty(receiver, card);

            let loss = check_loss(receiver, rules.win_condition);
            let game_ended = loss.is_some();
            if let Some(creature) = loss {
                end_game(game, players, penalty_receiver, creature, now)?;
            } else {
                // The stung player leads the next round.
                advance_turn(game, penalty_receiver);
            }
            game.bump_version();

            Ok(RespondOutcome {
                round_no,
                response,
                pass_count,
                resolution: Some(RoundResolution {
                    round_no,
                    response,
                    actual_is_truthful,
                    guess_is_correct,
                    penalty_receiver,
                    penalty_creature: card.creature,
                    pile_count,
                    game_ended,
                }),
            })
        }
    }
}
