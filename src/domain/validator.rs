//! Cross-checks of game invariants for diagnostics and tests.
//!
//! Never on the hot path — gameplay operations validate their own
//! preconditions; this is for test assertions and debug endpoints.

use crate::domain::rules::{DECK_SIZE, PLAYERS};
use crate::domain::state::{Game, GameStatus, Player};

/// Outcome of [`validate_game_state`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStateReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Check structural invariants of a game and its player records.
pub fn validate_game_state(game: &Game, players: &[Player; PLAYERS]) -> GameStateReport {
    let mut errors = Vec::new();

    if game.players[0] == game.players[1] {
        errors.push(format!(
            "game {} lists the same player twice: {}",
            game.id, game.players[0]
        ));
    }
    for player in players.iter() {
        if !game.is_participant(player.id) {
            errors.push(format!(
                "player record {} does not match game {} participants",
                player.id, game.id
            ));
        }
    }
    if let Some(turn) = game.turn {
        if !game.is_participant(turn) {
            errors.push(format!("turn holder {turn} is not a participant"));
        }
    }
    if let Some(round) = &game.current_round {
        if !game.is_participant(round.claiming_player) {
            errors.push(format!(
                "round {} claimant {} is not a participant",
                round.round_no, round.claiming_player
            ));
        }
        if !game.is_participant(round.target_player) {
            errors.push(format!(
                "round {} target {} is not a participant",
                round.round_no, round.target_player
            ));
        }
    }

    // Card conservation: once dealt, every canonical card is in exactly one
    // container (hand, penalty pile, in-play slot, hidden pool).
    if game.status != GameStatus::Waiting {
        let mut total = game.hidden.len();
        for player in players.iter() {
            total += player.hand.len() + player.penalties.total();
        }
        if game.active_round().is_some() {
            total += 1;
        }
        if total != DECK_SIZE {
            errors.push(format!(
                "card conservation violated: {total} cards accounted for, expected {DECK_SIZE}"
            ));
        }
    }

    GameStateReport {
        valid: errors.is_empty(),
        errors,
    }
}
