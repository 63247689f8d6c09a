//! Claims, responses, and per-viewer reads.

use time::OffsetDateTime;
use tracing::{debug, info};

use super::{lifecycle_view, GameFlowService};
use crate::domain::cards::{CardId, CreatureType};
use crate::domain::claims::{self, PlayCardOutcome};
use crate::domain::game_transition::{derive_game_transitions, GameTransition};
use crate::domain::player_view::{build_player_snapshot, PlayerSnapshot};
use crate::domain::responses::{self, RespondOutcome};
use crate::domain::state::{GameId, PlayerId, RoundResponse};
use crate::domain::validator::{validate_game_state, GameStateReport};
use crate::errors::domain::DomainError;
use crate::repos::games::GameRecord;

impl GameFlowService {
    /// Play a card from `acting`'s hand with a creature claim against
    /// `target`, opening a new round.
    ///
    /// `expected_version` makes the write conditional on the version the
    /// caller read; a mismatch fails with `VERSION_CONFLICT` before any
    /// rule is evaluated.
    pub async fn play_card(
        &self,
        game_id: GameId,
        acting: PlayerId,
        card_id: CardId,
        claimed: CreatureType,
        target: PlayerId,
        expected_version: Option<i32>,
    ) -> Result<(GameRecord, PlayCardOutcome), DomainError> {
        let mut record = self.load_checked(game_id, expected_version).await?;
        let loaded_version = record.game.version;
        let before = lifecycle_view(&record.game);

        // A resolved predecessor round moves to history as its successor
        // begins.
        record.archive_resolved_round();
        let outcome = claims::play_card(
            &mut record.game,
            &mut record.players,
            acting,
            card_id,
            claimed,
            target,
        )?;

        self.repo.save(record.clone(), loaded_version).await?;

        let after = lifecycle_view(&record.game);
        let mut transitions = vec![GameTransition::RoundStarted {
            round_no: outcome.round_no,
        }];
        transitions.extend(derive_game_transitions(&before, &after, None));
        self.notifier
            .notify(game_id, record.game.version, &transitions)
            .await;

        debug!(
            game_id,
            acting,
            target,
            round_no = outcome.round_no,
            claimed = ?claimed,
            "Card played with claim"
        );
        Ok((record, outcome))
    }

    /// Apply the target player's believe / disbelieve / pass-back decision
    /// to the active round.
    pub async fn respond(
        &self,
        game_id: GameId,
        responder: PlayerId,
        response: RoundResponse,
        expected_version: Option<i32>,
    ) -> Result<(GameRecord, RespondOutcome), DomainError> {
        let mut record = self.load_checked(game_id, expected_version).await?;
        let loaded_version = record.game.version;
        let before = lifecycle_view(&record.game);

        let outcome = responses::respond_to_round(
            &mut record.game,
            &mut record.players,
            responder,
            response,
            &self.rules,
            OffsetDateTime::now_utc(),
        )?;
        if outcome
            .resolution
            .as_ref()
            .is_some_and(|r| r.game_ended)
        {
            // No successor round will archive it.
            record.archive_resolved_round();
        }

        self.repo.save(record.clone(), loaded_version).await?;

        let mut transitions = Vec::new();
        match &outcome.resolution {
            None => transitions.push(GameTransition::RoundPassedBack {
                round_no: outcome.round_no,
                pass_count: outcome.pass_count,
            }),
            Some(resolution) => {
                transitions.push(GameTransition::RoundResolved {
                    round_no: resolution.round_no,
                    penalty_receiver: resolution.penalty_receiver,
                });
                transitions.push(GameTransition::PenaltyApplied {
                    player_id: resolution.penalty_receiver,
                    creature: resolution.penalty_creature,
                    pile_count: resolution.pile_count,
                });
            }
        }
        let after = lifecycle_view(&record.game);
        transitions.extend(derive_game_transitions(&before, &after, record.game.winner));
        self.notifier
            .notify(game_id, record.game.version, &transitions)
            .await;

        match &outcome.resolution {
            None => debug!(
                game_id,
                responder,
                round_no = outcome.round_no,
                pass_count = outcome.pass_count,
                "Round passed back"
            ),
            Some(resolution) => {
                debug!(
                    game_id,
                    responder,
                    round_no = resolution.round_no,
                    penalty_receiver = resolution.penalty_receiver,
                    creature = ?resolution.penalty_creature,
                    pile_count = resolution.pile_count,
                    "Round resolved"
                );
                if resolution.game_ended {
                    info!(game_id, winner = ?record.game.winner, "Game ended");
                }
            }
        }
        Ok((record, outcome))
    }

    /// The game as `viewer` may see it: own hand in full, opponent's hand as
    /// a count, in-play card only where the rules allow.
    pub async fn snapshot(
        &self,
        game_id: GameId,
        viewer: PlayerId,
    ) -> Result<PlayerSnapshot, DomainError> {
        let record = self.load_checked(game_id, None).await?;
        build_player_snapshot(&record.game, &record.players, viewer)
    }

    /// Run the structural invariant checks against the stored aggregate.
    pub async fn validate(&self, game_id: GameId) -> Result<GameStateReport, DomainError> {
        let record = self.load_checked(game_id, None).await?;
        Ok(validate_game_state(&record.game, &record.players))
    }
}
