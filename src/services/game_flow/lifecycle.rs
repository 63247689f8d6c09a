//! Game creation and start.

use time::OffsetDateTime;
use tracing::info;

use super::{lifecycle_view, GameFlowService};
use crate::domain::dealing::{build_deck, deal, derive_shuffle_seed, shuffle};
use crate::domain::state::{Game, GameId, GameStatus, Player, PlayerId};
use crate::errors::domain::{DomainError, InfraErrorKind, ValidationKind};
use crate::repos::games::GameRecord;

impl GameFlowService {
    /// Create a game between two distinct players. Hands are not dealt yet;
    /// the game waits for [`start_game`](Self::start_game).
    pub async fn create_game(
        &self,
        player_a: PlayerId,
        player_b: PlayerId,
    ) -> Result<GameRecord, DomainError> {
        if player_a == player_b {
            return Err(DomainError::validation(
                ValidationKind::DuplicatePlayers,
                format!("A game needs two distinct players, got {player_a} twice"),
            ));
        }

        let game_id = self.repo.next_game_id().await?;
        let game = Game::new(game_id, [player_a, player_b], OffsetDateTime::now_utc());
        let record = GameRecord::new(game, [Player::new(player_a), Player::new(player_b)]);
        self.repo.insert(record.clone()).await?;

        info!(game_id, player_a, player_b, "Created game");
        Ok(record)
    }

    /// Shuffle, deal, and open play.
    ///
    /// With `seed` the whole deal (and first-turn choice) is reproducible;
    /// without it a random seed is drawn and stored on the game, so any
    /// finished game can still be replayed.
    pub async fn start_game(
        &self,
        game_id: GameId,
        seed: Option<i64>,
    ) -> Result<GameRecord, DomainError> {
        let mut record = self.load_checked(game_id, None).await?;
        if record.game.status != GameStatus::Waiting {
            return Err(DomainError::validation(
                ValidationKind::Other("ALREADY_STARTED".into()),
                format!("Game {game_id} has already started"),
            ));
        }
        let loaded_version = record.game.version;
        let before = lifecycle_view(&record.game);

        let seed = seed.unwrap_or_else(rand::random);
        let deck = shuffle(&build_deck(), derive_shuffle_seed(seed));
        let dealt = deal(&deck).map_err(|err| {
            DomainError::infra(InfraErrorKind::Initialization, format!("Deal failed: {err}"))
        })?;

        record.players[0].hand = dealt.hand_a;
        record.players[1].hand = dealt.hand_b;
        record.game.hidden = dealt.hidden;
        record.game.rng_seed = Some(seed);
        record.game.status = GameStatus::InProgress;
        record.game.started_at = Some(OffsetDateTime::now_utc());
        // The seed also picks who leads the first round.
        let first = record.game.players[seed.rem_euclid(2) as usize];
        record.game.turn = Some(first);
        record.game.bump_version();

        self.repo.save(record.clone(), loaded_version).await?;

        let after = lifecycle_view(&record.game);
        let transitions = crate::domain::game_transition::derive_game_transitions(
            &before, &after, None,
        );
        self.notifier
            .notify(game_id, record.game.version, &transitions)
            .await;

        info!(game_id, seed, first_turn = first, "Started game");
        Ok(record)
    }
}
