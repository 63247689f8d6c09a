//! Error codes for the vermin engine.
//!
//! This module defines all error codes surfaced by the engine. Add new codes
//! here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! callers (a service layer, a transport layer) show to users or log.

use core::fmt;

/// Centralized error codes for the vermin engine.
///
/// This enum ensures type safety and prevents the use of ad-hoc error codes.
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Setup & dealing
    /// Deck does not contain exactly 24 cards at deal time
    DeckSizeMismatch,
    /// Game initialized with the same player twice
    DuplicatePlayers,
    /// Unexpected failure during deck build, deal, or turn selection
    InitializationError,

    // Claim validation
    /// Action attempted on a game that is not in progress
    GameNotActive,
    /// Claim attempted by a player who does not hold the turn
    NotPlayerTurn,
    /// Claim targets the acting player
    CannotTargetSelf,
    /// Claim targets a non-participant
    InvalidTargetPlayer,
    /// Claimed card id not present in the acting player's hand
    CardNotInHand,

    // Response validation
    /// Response attempted on a resolved or absent round
    RoundNotActive,
    /// Response attempted by someone other than the round's target
    NotTargetPlayer,
    /// Pass-back attempted after the configured cap
    MaxPassLimitReached,

    // Persistence conflicts
    /// Optimistic-concurrency save collided with a concurrent write
    VersionConflict,

    // Resource not found
    /// Game not found
    GameNotFound,
    /// Player not found
    PlayerNotFound,
    /// General not found error
    NotFound,

    /// General validation error
    ValidationError,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,
    /// Configuration error
    ConfigError,
    /// Internal engine error
    Internal,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DeckSizeMismatch => "DECK_SIZE_MISMATCH",
            Self::DuplicatePlayers => "DUPLICATE_PLAYERS",
            Self::InitializationError => "INITIALIZATION_ERROR",

            Self::GameNotActive => "GAME_NOT_ACTIVE",
            Self::NotPlayerTurn => "NOT_PLAYER_TURN",
            Self::CannotTargetSelf => "CANNOT_TARGET_SELF",
            Self::InvalidTargetPlayer => "INVALID_TARGET_PLAYER",
            Self::CardNotInHand => "CARD_NOT_IN_HAND",

            Self::RoundNotActive => "ROUND_NOT_ACTIVE",
            Self::NotTargetPlayer => "NOT_TARGET_PLAYER",
            Self::MaxPassLimitReached => "MAX_PASS_LIMIT_REACHED",

            Self::VersionConflict => "VERSION_CONFLICT",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::ValidationError => "VALIDATION_ERROR",
            Self::Conflict => "CONFLICT",
            Self::ConfigError => "CONFIG_ERROR",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
