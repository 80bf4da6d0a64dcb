//! Game session operations: lifecycle, deck/player attachment, shuffle,
//! dealing, and the derived reports.
//!
//! Every mutating operation locks the game's table for its full critical
//! section, so concurrent callers on the same game serialize and the three
//! owned collections never tear. Precondition checks run in a fixed order;
//! the order is part of the observable contract.

use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::{Card, Deck, Game, Player};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};
use crate::repos::{DeckStore, GameStore, PlayerStore};

/// One row of the hand-value ranking report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerHandValue {
    pub player_id: Uuid,
    pub player_name: String,
    pub hand_value: u32,
}

/// One row of the remaining-cards-by-suit report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemainingCardsCountBySuit {
    pub suit: String,
    pub cards_left: u32,
}

/// Serializable point-in-time view of a whole game session, taken under a
/// single lock so the three collections are mutually consistent.
#[derive(Debug, Clone, Serialize)]
pub struct GameView {
    pub id: Uuid,
    pub shoe: Vec<Arc<Deck>>,
    pub players: Vec<Player>,
    pub game_deck_cards: Vec<Card>,
}

/// Game domain service.
pub struct GameService;

impl GameService {
    pub fn new() -> Self {
        Self
    }

    pub fn create_game(&self, games: &GameStore) -> Result<Arc<Game>, DomainError> {
        let game = games.insert(Game::new())?;
        debug!(game_id = %game.id, "created game");
        Ok(game)
    }

    pub fn get_game(&self, games: &GameStore, game_id: Uuid) -> Result<Arc<Game>, DomainError> {
        games.get(game_id).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Game, format!("Game {game_id} not found"))
        })
    }

    pub fn list_games(&self, games: &GameStore) -> Vec<Arc<Game>> {
        games.list()
    }

    /// Consistent snapshot of one game session.
    pub fn game_view(&self, games: &GameStore, game_id: Uuid) -> Result<GameView, DomainError> {
        let game = self.get_game(games, game_id)?;
        let table = game.table();
        Ok(GameView {
            id: game.id,
            shoe: table.shoe.clone(),
            players: table.players.iter().map(|p| p.lock().clone()).collect(),
            game_deck_cards: table.game_deck_cards.clone(),
        })
    }

    /// Delete a game session. Attached decks keep their `used` flag and
    /// players keep their hands; only the session itself goes away.
    pub fn delete_game(&self, games: &GameStore, game_id: Uuid) -> Result<(), DomainError> {
        if games.remove(game_id) {
            info!(game_id = %game_id, "deleted game");
            Ok(())
        } else {
            Err(DomainError::not_found(
                NotFoundKind::Game,
                format!("Game {game_id} not found"),
            ))
        }
    }

    /// Snapshot of the decks attached to a game, in addition order.
    pub fn decks_in_game(
        &self,
        games: &GameStore,
        game_id: Uuid,
    ) -> Result<Vec<Arc<Deck>>, DomainError> {
        let game = self.get_game(games, game_id)?;
        let table = game.table();
        Ok(table.shoe.clone())
    }

    /// Snapshot of the seated players, in seating order, hands included.
    pub fn players_in_game(
        &self,
        games: &GameStore,
        game_id: Uuid,
    ) -> Result<Vec<Player>, DomainError> {
        let game = self.get_game(games, game_id)?;
        let table = game.table();
        Ok(table.players.iter().map(|p| p.lock().clone()).collect())
    }

    /// Snapshot of the in-play card pool, top of the deck first.
    pub fn game_deck_cards(
        &self,
        games: &GameStore,
        game_id: Uuid,
    ) -> Result<Vec<Card>, DomainError> {
        let game = self.get_game(games, game_id)?;
        let table = game.table();
        Ok(table.game_deck_cards.clone())
    }

    /// Attach a deck to a game's shoe and merge its cards into the pool.
    ///
    /// Check order: game exists, deck exists, deck not already in this shoe,
    /// deck not already claimed anywhere. The claim itself is an atomic
    /// flag flip, so two games racing for the same deck admit exactly one.
    pub fn add_deck_to_game(
        &self,
        games: &GameStore,
        decks: &DeckStore,
        game_id: Uuid,
        deck_id: Uuid,
    ) -> Result<Vec<Arc<Deck>>, DomainError> {
        let game = self.get_game(games, game_id)?;
        let deck = decks.get(deck_id).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Deck, format!("Deck {deck_id} not found"))
        })?;

        let mut table = game.table();
        if table.contains_deck(deck_id) {
            return Err(DomainError::conflict(
                ConflictKind::DeckAlreadyInShoe,
                format!("Deck {deck_id} is already in game {game_id}"),
            ));
        }
        if !deck.try_claim() {
            return Err(DomainError::conflict(
                ConflictKind::DeckAlreadyUsed,
                format!("Deck {deck_id} has already been used"),
            ));
        }

        table.add_deck(deck);
        info!(
            game_id = %game_id,
            deck_id = %deck_id,
            pool_size = table.game_deck_cards.len(),
            "added deck to game"
        );
        Ok(table.shoe.clone())
    }

    /// Seat a player. A player may sit in several games at once, but only
    /// once per game.
    pub fn add_player_to_game(
        &self,
        games: &GameStore,
        players: &PlayerStore,
        game_id: Uuid,
        player_id: Uuid,
    ) -> Result<Player, DomainError> {
        let game = self.get_game(games, game_id)?;
        let player = players.get(player_id).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Player, format!("Player {player_id} not found"))
        })?;

        let mut table = game.table();
        if table.seat_of(player_id).is_some() {
            return Err(DomainError::conflict(
                ConflictKind::PlayerAlreadySeated,
                format!("Player {player_id} is already seated in game {game_id}"),
            ));
        }

        let snapshot = player.lock().clone();
        table.players.push(player);
        info!(game_id = %game_id, player_id = %player_id, "seated player");
        Ok(snapshot)
    }

    /// Unseat a player and clear their entire hand. The hand is shared
    /// state, so the clear is visible in every game the player sits in.
    pub fn remove_player_from_game(
        &self,
        games: &GameStore,
        game_id: Uuid,
        player_id: Uuid,
    ) -> Result<(), DomainError> {
        let game = self.get_game(games, game_id)?;

        let mut table = game.table();
        let seat = table.seat_of(player_id).ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Player,
                format!("Player {player_id} is not seated in game {game_id}"),
            )
        })?;

        let player = table.players.remove(seat);
        player.lock().clear_hand();
        info!(game_id = %game_id, player_id = %player_id, "removed player from game");
        Ok(())
    }

    /// Fisher-Yates shuffle of the in-play pool. Returns the shuffled pool.
    pub fn shuffle_game_deck(
        &self,
        games: &GameStore,
        game_id: Uuid,
    ) -> Result<Vec<Card>, DomainError> {
        let game = self.get_game(games, game_id)?;

        let mut table = game.table();
        table.shuffle();
        debug!(game_id = %game_id, pool_size = table.game_deck_cards.len(), "shuffled game deck");
        Ok(table.game_deck_cards.clone())
    }

    /// Deal the top `count` cards to a seated player and return the batch.
    ///
    /// The deal is atomic: either all `count` cards move from the front of
    /// the pool to the player's hand, or nothing does.
    pub fn deal_cards_to_player(
        &self,
        games: &GameStore,
        players: &PlayerStore,
        game_id: Uuid,
        player_id: Uuid,
        count: i64,
    ) -> Result<Vec<Card>, DomainError> {
        let game = self.get_game(games, game_id)?;
        if players.get(player_id).is_none() {
            return Err(DomainError::not_found(
                NotFoundKind::Player,
                format!("Player {player_id} not found"),
            ));
        }

        let mut table = game.table();
        let seat = table.seat_of(player_id).ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Player,
                format!("Player {player_id} is not seated in game {game_id}"),
            )
        })?;

        if count <= 0 {
            return Err(DomainError::validation(
                ValidationKind::DealCountNotPositive,
                format!("Deal count must be a positive integer, got {count}"),
            ));
        }
        let count = count as usize;
        if count > table.game_deck_cards.len() {
            return Err(DomainError::validation(
                ValidationKind::DealCountExceedsRemaining,
                format!(
                    "Cannot deal {count} cards, only {} remaining",
                    table.game_deck_cards.len()
                ),
            ));
        }

        let dealt = table.deal(count);
        let player = Arc::clone(&table.players[seat]);
        player.lock().receive_cards(&dealt);
        info!(
            game_id = %game_id,
            player_id = %player_id,
            dealt = dealt.len(),
            remaining = table.game_deck_cards.len(),
            "dealt cards"
        );
        Ok(dealt)
    }

    /// Seated players ranked by hand value, highest first. The sort is
    /// stable, so ties keep seating order.
    pub fn players_hand_values(
        &self,
        games: &GameStore,
        game_id: Uuid,
    ) -> Result<Vec<PlayerHandValue>, DomainError> {
        let game = self.get_game(games, game_id)?;
        let table = game.table();

        let mut values: Vec<PlayerHandValue> = table
            .players
            .iter()
            .map(|handle| {
                let player = handle.lock();
                PlayerHandValue {
                    player_id: player.id,
                    player_name: player.name.clone(),
                    hand_value: player.hand_value(),
                }
            })
            .collect();
        values.sort_by(|a, b| b.hand_value.cmp(&a.hand_value));
        Ok(values)
    }

    /// Remaining in-play cards grouped by suit, suit names in ascending
    /// lexical order. Suits with no cards left are omitted.
    pub fn remaining_cards_by_suit(
        &self,
        games: &GameStore,
        game_id: Uuid,
    ) -> Result<Vec<RemainingCardsCountBySuit>, DomainError> {
        let game = self.get_game(games, game_id)?;
        let table = game.table();

        let mut counts: BTreeMap<&'static str, u32> = BTreeMap::new();
        for card in &table.game_deck_cards {
            *counts.entry(card.suit.name()).or_insert(0) += 1;
        }

        Ok(counts
            .into_iter()
            .map(|(suit, cards_left)| RemainingCardsCountBySuit {
                suit: suit.to_string(),
                cards_left,
            })
            .collect())
    }

    /// Remaining in-play cards grouped by (suit, face value), labelled
    /// "{Suit} - {FaceValue}". Suits ascend by name; face values descend by
    /// ordinal within each suit.
    pub fn remaining_cards_counts(
        &self,
        games: &GameStore,
        game_id: Uuid,
    ) -> Result<Vec<(String, u32)>, DomainError> {
        let game = self.get_game(games, game_id)?;
        let table = game.table();

        let mut counts: BTreeMap<(&'static str, Reverse<u32>), (String, u32)> = BTreeMap::new();
        for card in &table.game_deck_cards {
            let key = (card.suit.name(), Reverse(card.value()));
            let entry = counts
                .entry(key)
                .or_insert_with(|| (format!("{} - {}", card.suit, card.face_value), 0));
            entry.1 += 1;
        }

        Ok(counts.into_values().collect())
    }
}

impl Default for GameService {
    fn default() -> Self {
        Self::new()
    }
}
