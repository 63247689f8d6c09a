//! Core card types: CreatureType and Card.

use serde::{Deserialize, Serialize};

use crate::domain::rules::CREATURES;

/// The four creature types on the cards. Closed set; claims and penalty
/// piles are both keyed by it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreatureType {
    Cockroach,
    Mouse,
    Frog,
    Bat,
}

impl CreatureType {
    /// Canonical order, used for deck construction and pile indexing.
    pub const ALL: [CreatureType; CREATURES] = [
        CreatureType::Cockroach,
        CreatureType::Mouse,
        CreatureType::Frog,
        CreatureType::Bat,
    ];

    /// Stable pile index for this creature.
    pub const fn index(self) -> usize {
        match self {
            CreatureType::Cockroach => 0,
            CreatureType::Mouse => 1,
            CreatureType::Frog => 2,
            CreatureType::Bat => 3,
        }
    }
}

/// Unique id of a physical card within the canonical deck (0..24).
pub type CardId = u8;

/// A physical card. Immutable for its whole life; only its container
/// changes (hand, in-play slot, penalty pile, hidden pool).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub creature: CreatureType,
}

// Ord on Card is only for stable sorting by id. Card identity is the id;
// the creature is derivable from it in the canonical deck.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
