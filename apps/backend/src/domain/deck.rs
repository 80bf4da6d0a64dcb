//! Deck entity: a fixed 52-card collection that at most one game may claim.

use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use super::cards::{Card, FaceValue, Suit};

pub const DECK_SIZE: usize = 52;

/// A full deck of 52 cards.
///
/// The card list is generated once at construction and never mutated: one
/// card per (suit, face value) combination, all face values per suit, suits
/// in declaration order. The `used` flag transitions false -> true exactly
/// once, when the deck is added to a game, and is never reset -- not even
/// when that game is deleted.
#[derive(Debug, Serialize)]
pub struct Deck {
    pub id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    used: AtomicBool,
    cards: Vec<Card>,
}

impl Deck {
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for face_value in FaceValue::ALL {
                cards.push(Card::new(suit, face_value));
            }
        }

        Self {
            id: Uuid::new_v4(),
            created_at: OffsetDateTime::now_utc(),
            used: AtomicBool::new(false),
            cards,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn is_used(&self) -> bool {
        self.used.load(Ordering::Acquire)
    }

    /// Atomically claim the deck for a game. Returns true for exactly one
    /// caller; every later attempt (from any game) sees false.
    pub fn try_claim(&self) -> bool {
        self.used
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
