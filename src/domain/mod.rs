//! Domain layer: pure game logic types and transition functions.

pub mod cards;
pub mod claims;
pub mod dealing;
pub mod game_transition;
pub mod penalties;
pub mod player_view;
pub mod responses;
pub mod rules;
pub mod state;
pub mod turns;
pub mod validator;


#[cfg(test)]
mod tests_props_rounds;
#[cfg(test)]
mod tests_responses;
#[cfg(test)]
mod tests_scenarios;

// Re-exports for ergonomics
pub use cards::{Card, CardId, CreatureType};
pub use claims::{play_card, PlayCardOutcome};
pub use dealing::{build_deck, deal, derive_shuffle_seed, shuffle, DealtHands};
pub use game_transition::{derive_game_transitions, GameLifecycleView, GameTransition};
pub use penalties::{apply_penalty, check_loss, end_game};
pub use player_view::{build_player_snapshot, PlayerSnapshot};
pub use responses::{respond_to_round, RespondOutcome, RoundResolution};
pub use state::{Game, GameId, GameStatus, Player, PlayerId, Round, RoundResponse, RoundStatus};
pub use turns::{advance_turn, is_player_turn};
pub use validator::{validate_game_state, GameStateReport};
