//! Persistence collaborator traits.

pub mod games;

pub use games::{require_game, GameRecord, GameRepo};
