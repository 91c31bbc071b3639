// src/util/testing.rs

use anyhow::Result;
use chrono::{DateTime, Utc};
use std::collections::{HashSet, VecDeque};
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{CardRepository, Presenter};
use crate::domain::{Card, Deck, DeckSummary, DomainError, Rating};

// Common test environment variables
pub const TEST_ENV_VARS: &[&str] = &["RUST_LOG", "NO_CLEANUP"];

/// Shared in-memory repository for testing use cases that depend on
/// CardRepository.
///
/// Cards keep insertion order; saves are recorded so tests can assert which
/// cards were persisted and in what order.
///
/// # Examples
///
/// ```
/// use flashrev::util::testing::MockCardRepository;
///
/// let repo = MockCardRepository::builder()
///     .with_deck(1, "Basics")
///     .with_due_card(1, 1, "Hello", "Olá")
///     .with_save_failure(1)
///     .build();
/// ```
pub struct MockCardRepository {
    decks: Vec<(i64, String)>,
    cards: Vec<Card>,
    save_failures: HashSet<i64>,
    saved: Vec<Card>,
    next_id: i64,
}

impl MockCardRepository {
    pub fn builder() -> MockCardRepositoryBuilder {
        MockCardRepositoryBuilder::new()
    }

    /// Cards successfully persisted via `save_card`, in call order.
    pub fn saved_cards(&self) -> &[Card] {
        &self.saved
    }
}

impl CardRepository for MockCardRepository {
    fn load_due_cards(&mut self, deck_id: i64) -> Result<Vec<Card>, DomainError> {
        let now = Utc::now();
        Ok(self
            .cards
            .iter()
            .filter(|c| c.deck_id == deck_id && c.is_due(now))
            .cloned()
            .collect())
    }

    fn save_card(&mut self, card: &Card) -> Result<(), DomainError> {
        if self.save_failures.contains(&card.id) {
            return Err(DomainError::StorageError(format!(
                "simulated save failure for card {}",
                card.id
            )));
        }
        if let Some(stored) = self.cards.iter_mut().find(|c| c.id == card.id) {
            stored.due_at = card.due_at;
            stored.level = card.level;
        }
        self.saved.push(card.clone());
        Ok(())
    }

    fn add_card(&mut self, card: &Card) -> Result<Card, DomainError> {
        let mut stored = card.clone();
        stored.id = self.next_id;
        self.next_id += 1;
        self.cards.push(stored.clone());
        Ok(stored)
    }

    fn get_deck(&mut self, deck_id: i64) -> Result<Deck, DomainError> {
        let name = self
            .decks
            .iter()
            .find(|(id, _)| *id == deck_id)
            .map(|(_, name)| name.clone())
            .ok_or(DomainError::DeckNotFound(deck_id))?;

        Ok(Deck {
            id: deck_id,
            name,
            cards: self
                .cards
                .iter()
                .filter(|c| c.deck_id == deck_id)
                .cloned()
                .collect(),
        })
    }

    fn create_deck(&mut self, name: &str) -> Result<DeckSummary, DomainError> {
        let id = self.next_id;
        self.next_id += 1;
        self.decks.push((id, name.to_string()));
        Ok(DeckSummary {
            id,
            name: name.to_string(),
            card_count: 0,
            due_count: 0,
        })
    }

    fn list_decks(&mut self) -> Result<Vec<DeckSummary>, DomainError> {
        let now = Utc::now();
        Ok(self
            .decks
            .iter()
            .map(|(id, name)| DeckSummary {
                id: *id,
                name: name.clone(),
                card_count: self.cards.iter().filter(|c| c.deck_id == *id).count(),
                due_count: self
                    .cards
                    .iter()
                    .filter(|c| c.deck_id == *id && c.is_due(now))
                    .count(),
            })
            .collect())
    }
}

/// Builder for MockCardRepository
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockCardRepositoryBuilder {
    decks: Vec<(i64, String)>,
    cards: Vec<Card>,
    save_failures: HashSet<i64>,
    next_id: i64,
}

impl MockCardRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            decks: Vec::new(),
            cards: Vec::new(),
            save_failures: HashSet::new(),
            next_id: 1,
        }
    }

    pub fn with_deck(mut self, id: i64, name: &str) -> Self {
        self.decks.push((id, name.to_string()));
        self.next_id = self.next_id.max(id + 1);
        self
    }

    /// Add a card with an explicit due date and level.
    pub fn with_card(
        mut self,
        id: i64,
        deck_id: i64,
        prompt: &str,
        answer: &str,
        level: i64,
        due_at: DateTime<Utc>,
    ) -> Self {
        self.cards.push(Card {
            id,
            deck_id,
            prompt: prompt.to_string(),
            answer: answer.to_string(),
            level,
            due_at,
        });
        self.next_id = self.next_id.max(id + 1);
        self
    }

    /// Add a card that is immediately due at level 0.
    pub fn with_due_card(self, id: i64, deck_id: i64, prompt: &str, answer: &str) -> Self {
        let due_at = Utc::now();
        self.with_card(id, deck_id, prompt, answer, 0, due_at)
    }

    /// Configure save_card to fail for a specific card id.
    pub fn with_save_failure(mut self, card_id: i64) -> Self {
        self.save_failures.insert(card_id);
        self
    }

    pub fn build(self) -> MockCardRepository {
        MockCardRepository {
            decks: self.decks,
            cards: self.cards,
            save_failures: self.save_failures,
            saved: Vec::new(),
            next_id: self.next_id,
        }
    }
}

impl Default for MockCardRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Presenter double driven by a pre-scripted list of ratings.
///
/// Records every display call so tests can assert the exact interaction a
/// session performed.
pub struct ScriptedPresenter {
    ratings: VecDeque<Option<Rating>>,
    pub prompts_shown: Vec<String>,
    pub answers_shown: Vec<String>,
    pub flips: usize,
}

impl ScriptedPresenter {
    pub fn new(ratings: Vec<Option<Rating>>) -> Self {
        Self {
            ratings: ratings.into(),
            prompts_shown: Vec::new(),
            answers_shown: Vec::new(),
            flips: 0,
        }
    }
}

impl Presenter for ScriptedPresenter {
    fn show_prompt(&mut self, text: &str) {
        self.prompts_shown.push(text.to_string());
    }

    fn show_answer(&mut self, text: &str) {
        self.answers_shown.push(text.to_string());
    }

    fn await_flip(&mut self) {
        self.flips += 1;
    }

    fn await_rating(&mut self) -> Option<Rating> {
        self.ratings
            .pop_front()
            .expect("ScriptedPresenter ran out of scripted ratings")
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["rusqlite", "mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

pub fn print_active_env_vars() {
    for var in TEST_ENV_VARS {
        if let Ok(value) = env::var(var) {
            println!("{var}={value}");
        } else {
            println!("{var} is not set");
        }
    }
}
