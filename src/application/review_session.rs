// src/application/review_session.rs
use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::{Card, Deck, DeckSummary, DomainError, Rating};

/// Storage seam the use cases depend on. Implemented by the SQLite backend
/// and by the mock repository in `util::testing`.
pub trait CardRepository {
    /// Cards of a deck with `due_at` at or before now, in stable order.
    fn load_due_cards(&mut self, deck_id: i64) -> Result<Vec<Card>, DomainError>;

    /// Upsert a card's mutable review state (`due_at`, `level`).
    fn save_card(&mut self, card: &Card) -> Result<(), DomainError>;

    /// Insert a new card and return it with its assigned id.
    fn add_card(&mut self, card: &Card) -> Result<Card, DomainError>;

    fn get_deck(&mut self, deck_id: i64) -> Result<Deck, DomainError>;

    fn create_deck(&mut self, name: &str) -> Result<DeckSummary, DomainError>;

    fn list_decks(&mut self) -> Result<Vec<DeckSummary>, DomainError>;
}

impl<R: CardRepository + ?Sized> CardRepository for &mut R {
    fn load_due_cards(&mut self, deck_id: i64) -> Result<Vec<Card>, DomainError> {
        (**self).load_due_cards(deck_id)
    }

    fn save_card(&mut self, card: &Card) -> Result<(), DomainError> {
        (**self).save_card(card)
    }

    fn add_card(&mut self, card: &Card) -> Result<Card, DomainError> {
        (**self).add_card(card)
    }

    fn get_deck(&mut self, deck_id: i64) -> Result<Deck, DomainError> {
        (**self).get_deck(deck_id)
    }

    fn create_deck(&mut self, name: &str) -> Result<DeckSummary, DomainError> {
        (**self).create_deck(name)
    }

    fn list_decks(&mut self) -> Result<Vec<DeckSummary>, DomainError> {
        (**self).list_decks()
    }
}

/// Presentation seam for a review session. Injected into the loop instead of
/// a global console helper so tests can script the interaction.
///
/// The two `await_*` calls are the only blocking points of a session; neither
/// enforces a timeout.
pub trait Presenter {
    fn show_prompt(&mut self, text: &str);

    fn show_answer(&mut self, text: &str);

    /// Block until the learner asks to flip the card.
    fn await_flip(&mut self);

    /// Block for a rating. `None` means the input was not a recognized
    /// rating key; the policy treats it as `Repeat`.
    fn await_rating(&mut self) -> Option<Rating>;
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn show_prompt(&mut self, text: &str) {
        (**self).show_prompt(text)
    }

    fn show_answer(&mut self, text: &str) {
        (**self).show_answer(text)
    }

    fn await_flip(&mut self) {
        (**self).await_flip()
    }

    fn await_rating(&mut self) -> Option<Rating> {
        (**self).await_rating()
    }
}

/// Outcome of one session run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionSummary {
    pub reviewed: usize,
    pub save_failures: usize,
}

/// Runs one review pass over a deck's currently-due cards.
///
/// Strictly sequential: one card at a time, prompt → flip → answer → rating →
/// reschedule → persist. A failed save is logged and the loop moves on; that
/// card's progress for the cycle is lost, all other cards are unaffected.
pub struct ReviewSession<R: CardRepository, P: Presenter> {
    repository: R,
    presenter: P,
}

impl<R: CardRepository, P: Presenter> ReviewSession<R, P> {
    pub fn new(repository: R, presenter: P) -> Self {
        Self {
            repository,
            presenter,
        }
    }

    pub fn run(&mut self, deck_id: i64) -> Result<SessionSummary, DomainError> {
        let cards = self.repository.load_due_cards(deck_id)?;
        info!(deck_id, due = cards.len(), "Starting review session");

        let mut summary = SessionSummary::default();
        for mut card in cards {
            debug!(card_id = card.id, "Presenting card");
            self.presenter.show_prompt(&card.prompt);
            self.presenter.await_flip();
            self.presenter.show_answer(&card.answer);

            let rating = self.presenter.await_rating();
            card.apply_review(rating, Utc::now());
            summary.reviewed += 1;

            if let Err(e) = self.repository.save_card(&card) {
                warn!(card_id = card.id, error = %e, "Failed to persist review result");
                summary.save_failures += 1;
            }
        }

        info!(
            reviewed = summary.reviewed,
            save_failures = summary.save_failures,
            "Review session finished"
        );
        Ok(summary)
    }
}
