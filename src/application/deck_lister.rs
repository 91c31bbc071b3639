// src/application/deck_lister.rs
use crate::application::CardRepository;
use crate::domain::{Deck, DeckSummary, DomainError};

pub struct DeckLister<R: CardRepository> {
    repository: R,
}

impl<R: CardRepository> DeckLister<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// All decks with card/due counts, for the deck overview.
    pub fn list_decks(&mut self) -> Result<Vec<DeckSummary>, DomainError> {
        self.repository.list_decks()
    }

    /// A deck with its full card set, for browsing.
    pub fn get_deck(&mut self, deck_id: i64) -> Result<Deck, DomainError> {
        self.repository.get_deck(deck_id)
    }
}
