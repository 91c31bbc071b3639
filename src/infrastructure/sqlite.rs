// src/infrastructure/sqlite.rs
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};
use tracing::{debug, info, instrument};

use crate::application::CardRepository;
use crate::domain::{Card, Deck, DeckSummary, DomainError};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS decks (
    id   INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS cards (
    id      INTEGER PRIMARY KEY AUTOINCREMENT,
    deck_id INTEGER NOT NULL REFERENCES decks(id),
    prompt  TEXT NOT NULL,
    answer  TEXT NOT NULL,
    level   INTEGER NOT NULL DEFAULT 0,
    due_at  INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_cards_deck_due ON cards(deck_id, due_at);
";

/// SQLite-backed card store. Timestamps are stored as unix seconds.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    pub fn new<P: AsRef<Path>>(database_path: P) -> Result<Self> {
        let path = database_path.as_ref();
        debug!(?path, "Opening card database");

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create data directory {}", parent.display())
            })?;
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open card database {}", path.display()))?;
        conn.pragma_update(None, "foreign_keys", "ON")
            .context("Failed to enable foreign keys")?;
        conn.execute_batch(SCHEMA)
            .context("Failed to initialize database schema")?;

        info!(?path, "Card database ready");
        Ok(Self { conn })
    }

    fn deck_name(&self, deck_id: i64) -> Result<String, DomainError> {
        self.conn
            .query_row(
                "SELECT name FROM decks WHERE id = ?1",
                params![deck_id],
                |row| row.get(0),
            )
            .map_err(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => DomainError::DeckNotFound(deck_id),
                other => DomainError::StorageError(other.to_string()),
            })
    }
}

fn row_to_card(row: &Row<'_>) -> rusqlite::Result<Card> {
    let due_secs: i64 = row.get(5)?;
    let due_at = DateTime::<Utc>::from_timestamp(due_secs, 0).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            5,
            rusqlite::types::Type::Integer,
            "due_at out of range".into(),
        )
    })?;

    Ok(Card {
        id: row.get(0)?,
        deck_id: row.get(1)?,
        prompt: row.get(2)?,
        answer: row.get(3)?,
        level: row.get(4)?,
        due_at,
    })
}

impl CardRepository for SqliteRepository {
    #[instrument(level = "debug", skip(self))]
    fn load_due_cards(&mut self, deck_id: i64) -> Result<Vec<Card>, DomainError> {
        let now = Utc::now().timestamp();
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, deck_id, prompt, answer, level, due_at
                 FROM cards
                 WHERE deck_id = ?1 AND due_at <= ?2
                 ORDER BY due_at, id",
            )
            .map_err(|e| DomainError::StorageError(e.to_string()))?;

        let cards = stmt
            .query_map(params![deck_id, now], row_to_card)
            .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
            .map_err(|e| DomainError::StorageError(e.to_string()))?;

        debug!(deck_id, due = cards.len(), "Loaded due cards");
        Ok(cards)
    }

    #[instrument(level = "debug", skip(self, card), fields(card_id = card.id))]
    fn save_card(&mut self, card: &Card) -> Result<(), DomainError> {
        let updated = self
            .conn
            .execute(
                "UPDATE cards SET due_at = ?1, level = ?2 WHERE id = ?3",
                params![card.due_at.timestamp(), card.level, card.id],
            )
            .map_err(|e| DomainError::StorageError(e.to_string()))?;

        if updated == 0 {
            return Err(DomainError::CardNotFound(card.id));
        }
        Ok(())
    }

    #[instrument(level = "debug", skip(self, card), fields(deck_id = card.deck_id))]
    fn add_card(&mut self, card: &Card) -> Result<Card, DomainError> {
        self.conn
            .execute(
                "INSERT INTO cards (deck_id, prompt, answer, level, due_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    card.deck_id,
                    card.prompt,
                    card.answer,
                    card.level,
                    card.due_at.timestamp()
                ],
            )
            .map_err(|e| DomainError::StorageError(e.to_string()))?;

        let mut stored = card.clone();
        stored.id = self.conn.last_insert_rowid();
        // due_at round-trips through unix seconds, keep the card consistent
        // with what a reload would return.
        stored.due_at = DateTime::<Utc>::from_timestamp(card.due_at.timestamp(), 0)
            .ok_or_else(|| DomainError::StorageError("due_at out of range".to_string()))?;
        Ok(stored)
    }

    #[instrument(level = "debug", skip(self))]
    fn get_deck(&mut self, deck_id: i64) -> Result<Deck, DomainError> {
        let name = self.deck_name(deck_id)?;

        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, deck_id, prompt, answer, level, due_at
                 FROM cards WHERE deck_id = ?1 ORDER BY id",
            )
            .map_err(|e| DomainError::StorageError(e.to_string()))?;

        let cards = stmt
            .query_map(params![deck_id], row_to_card)
            .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
            .map_err(|e| DomainError::StorageError(e.to_string()))?;

        Ok(Deck {
            id: deck_id,
            name,
            cards,
        })
    }

    #[instrument(level = "debug", skip(self))]
    fn create_deck(&mut self, name: &str) -> Result<DeckSummary, DomainError> {
        self.conn
            .execute("INSERT INTO decks (name) VALUES (?1)", params![name])
            .map_err(|e| DomainError::StorageError(e.to_string()))?;

        Ok(DeckSummary {
            id: self.conn.last_insert_rowid(),
            name: name.to_string(),
            card_count: 0,
            due_count: 0,
        })
    }

    #[instrument(level = "debug", skip(self))]
    fn list_decks(&mut self) -> Result<Vec<DeckSummary>, DomainError> {
        let now = Utc::now().timestamp();
        let mut stmt = self
            .conn
            .prepare(
                "SELECT d.id, d.name,
                        COUNT(c.id),
                        COALESCE(SUM(CASE WHEN c.due_at <= ?1 THEN 1 ELSE 0 END), 0)
                 FROM decks d
                 LEFT JOIN cards c ON c.deck_id = d.id
                 GROUP BY d.id, d.name
                 ORDER BY d.id",
            )
            .map_err(|e| DomainError::StorageError(e.to_string()))?;

        let decks = stmt
            .query_map(params![now], |row| {
                Ok(DeckSummary {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    card_count: row.get::<_, i64>(2)? as usize,
                    due_count: row.get::<_, i64>(3)? as usize,
                })
            })
            .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
            .map_err(|e| DomainError::StorageError(e.to_string()))?;

        Ok(decks)
    }
}
