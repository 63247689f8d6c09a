//! Fixed rule constants for the one game this engine encodes.

pub const PLAYERS: usize = 2;
pub const CREATURES: usize = 4;
pub const CARDS_PER_CREATURE: usize = 6;
pub const DECK_SIZE: usize = CREATURES * CARDS_PER_CREATURE; // 24
pub const HAND_SIZE: usize = 9;
pub const HIDDEN_SIZE: usize = DECK_SIZE - PLAYERS * HAND_SIZE; // 6

/// Pass-backs allowed per round before the responder must commit.
pub const DEFAULT_MAX_PASSES: u8 = 3;
/// Penalty-pile size that loses the game.
pub const DEFAULT_WIN_CONDITION: u8 = 3;
