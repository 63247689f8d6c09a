//! Deterministic deck building, shuffling, and dealing.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::cards::{Card, CreatureType};
use crate::domain::rules::{DECK_SIZE, HAND_SIZE};
use crate::errors::domain::{DomainError, ValidationKind};

/// The three slices of a dealt deck: 9 cards per player, 6 face-down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealtHands {
    pub hand_a: Vec<Card>,
    pub hand_b: Vec<Card>,
    pub hidden: Vec<Card>,
}

/// Build the canonical 24-card deck: 6 cards of each creature, ids 0..24.
///
/// Composition is identical on every call; only [`shuffle`] introduces order.
pub fn build_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    let mut id = 0u8;
    for creature in CreatureType::ALL {
        for _ in 0..crate::domain::rules::CARDS_PER_CREATURE {
            deck.push(Card { id, creature });
            id += 1;
        }
    }
    deck
}

/// Fisher-Yates shuffle with a ChaCha8 generator seeded from `seed`.
///
/// Returns a new ordering; the input is untouched and card identity is
/// preserved. Equal seeds produce equal orderings on every platform.
pub fn shuffle(deck: &[Card], seed: u64) -> Vec<Card> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut shuffled = deck.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.random_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}

/// Deal a shuffled deck into two 9-card hands and the 6-card hidden pool.
///
/// Positions [0,9) and [9,18) become the hands, [18,24) stays face down.
pub fn deal(deck: &[Card]) -> Result<DealtHands, DomainError> {
    if deck.len() != DECK_SIZE {
        return Err(DomainError::validation(
            ValidationKind::DeckSizeMismatch,
            format!("Deck must hold {DECK_SIZE} cards, got {}", deck.len()),
        ));
    }
    Ok(DealtHands {
        hand_a: deck[..HAND_SIZE].to_vec(),
        hand_b: deck[HAND_SIZE..2 * HAND_SIZE].to_vec(),
        hidden: deck[2 * HAND_SIZE..].to_vec(),
    })
}

/// Derive the shuffle seed for a game from its base seed.
///
/// Keeps the shuffle sequence separated from any other consumer of the game
/// seed, so adding one later cannot silently change existing deals.
pub fn derive_shuffle_seed(game_seed: i64) -> u64 {
    let base = game_seed as u64;
    base.wrapping_mul(0x9E37_79B9_7F4A_7C15).wrapping_add(1)
}
