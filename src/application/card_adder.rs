// src/application/card_adder.rs
use std::path::Path;

use tracing::{debug, info};

use crate::application::CardRepository;
use crate::domain::{Card, DomainError};

pub struct CardAdder<R: CardRepository> {
    repository: R,
}

impl<R: CardRepository> CardAdder<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Add a single card to a deck, immediately due at level 0.
    pub fn add_card(
        &mut self,
        deck_id: i64,
        prompt: &str,
        answer: &str,
    ) -> Result<Card, DomainError> {
        // Reject unknown decks up front.
        self.repository.get_deck(deck_id)?;
        let card = Card::new(deck_id, prompt, answer);
        self.repository.add_card(&card)
    }

    /// Bulk-import cards from a CSV-style file: one card per line, prompt and
    /// answer separated by a comma. Lines with fewer than two fields are
    /// skipped. Returns the number of cards added.
    pub fn import_csv(&mut self, deck_id: i64, path: &Path) -> Result<usize, DomainError> {
        self.repository.get_deck(deck_id)?;

        let content = std::fs::read_to_string(path).map_err(|e| {
            DomainError::ImportError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let mut added = 0;
        for line in content.lines() {
            match line.split_once(',') {
                Some((prompt, answer)) if !prompt.trim().is_empty() => {
                    let card = Card::new(deck_id, prompt.trim(), answer.trim());
                    self.repository.add_card(&card)?;
                    added += 1;
                }
                _ => {
                    debug!(line, "Skipping malformed import line");
                }
            }
        }

        info!(deck_id, added, "Imported cards");
        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::MockCardRepository;
    use chrono::Utc;
    use std::io::Write;

    #[test]
    fn given_existing_deck_when_adding_card_then_card_is_due_at_level_zero() {
        // Arrange
        let mut repo = MockCardRepository::builder().with_deck(1, "Basics").build();
        let mut adder = CardAdder::new(&mut repo);

        // Act
        let card = adder.add_card(1, "Hello", "Olá").expect("Add should succeed");

        // Assert
        assert_eq!(card.deck_id, 1);
        assert_eq!(card.level, 0);
        assert!(card.is_due(Utc::now()));
        assert!(card.id > 0, "Persistence layer should assign an id");
    }

    #[test]
    fn given_unknown_deck_when_adding_card_then_returns_error() {
        // Arrange
        let mut repo = MockCardRepository::builder().build();
        let mut adder = CardAdder::new(&mut repo);

        // Act
        let result = adder.add_card(9, "Hello", "Olá");

        // Assert
        assert!(matches!(result, Err(DomainError::DeckNotFound(9))));
    }

    #[test]
    fn given_csv_with_malformed_lines_when_importing_then_only_valid_lines_added() {
        // Arrange
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "Hello,Olá").expect("write");
        writeln!(file, "no-comma-line").expect("write");
        writeln!(file, "Goodbye,Tchau").expect("write");
        file.flush().expect("flush");

        let mut repo = MockCardRepository::builder().with_deck(1, "Basics").build();

        // Act
        let added = CardAdder::new(&mut repo)
            .import_csv(1, file.path())
            .expect("Import should succeed");

        // Assert
        assert_eq!(added, 2);
        let deck = repo.get_deck(1).expect("Deck should exist");
        assert_eq!(deck.cards.len(), 2);
        assert_eq!(deck.cards[0].prompt, "Hello");
        assert_eq!(deck.cards[1].answer, "Tchau");
    }

    #[test]
    fn given_missing_file_when_importing_then_returns_import_error() {
        // Arrange
        let mut repo = MockCardRepository::builder().with_deck(1, "Basics").build();

        // Act
        let result = CardAdder::new(&mut repo).import_csv(1, Path::new("/nonexistent.csv"));

        // Assert
        assert!(matches!(result, Err(DomainError::ImportError(_))));
    }
}
