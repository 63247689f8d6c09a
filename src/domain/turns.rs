//! Turn tracking.
//!
//! Turn state is a single scalar on `Game` rather than derived, so every
//! consumer has O(1) access and the version counter gives a total order for
//! conflict detection.

use crate::domain::state::{Game, PlayerId};

pub fn is_player_turn(game: &Game, player: PlayerId) -> bool {
    game.turn == Some(player)
}

/// Hand the turn to `next` and bump the version.
///
/// Pure mutation, no validation — callers must have already validated that
/// `next` is a participant and the move is legal.
pub fn advance_turn(game: &mut Game, next: PlayerId) {
    game.turn = Some(next);
    game.bump_version();
}
