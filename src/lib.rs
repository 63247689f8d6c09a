//! Round-resolution engine for a two-player creature-bluffing card game.
//!
//! A 24-card deck (4 creatures, 6 cards each) is dealt into two 9-card hands
//! and a 6-card hidden pool. Players pass cards face down with creature
//! claims that may be lies; the target believes, disbelieves, or passes the
//! card back. Wrong reads collect penalty cards, and three of one creature
//! loses the game.
//!
//! Layering follows hexagonal lines: `domain` holds pure transition
//! functions, `repos` the persistence traits, `adapters` the in-memory
//! store, and `services` the load / mutate / save / notify orchestration.

#![deny(clippy::wildcard_imports)]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod errors;
pub mod repos;
pub mod services;

pub use config::RulesConfig;
pub use errors::{DomainError, ErrorCode};
