// src/domain/deck.rs
use serde::Serialize;

use crate::domain::Card;

/// An ordered collection of cards. Card order is stable for a given load but
/// carries no scheduling meaning.
#[derive(Debug, Clone, Serialize)]
pub struct Deck {
    pub id: i64,
    pub name: String,
    pub cards: Vec<Card>,
}

/// Listing projection of a deck: counts instead of the full card set.
#[derive(Debug, Clone, Serialize)]
pub struct DeckSummary {
    pub id: i64,
    pub name: String,
    pub card_count: usize,
    pub due_count: usize,
}
