use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use flashrev::application::CardRepository;
use flashrev::domain::Card;
use flashrev::infrastructure::SqliteRepository;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture for working with temporary card databases
#[allow(dead_code)]
pub struct TestDatabase {
    _temp_dir: TempDir,
    pub database_path: PathBuf,
}

#[allow(dead_code)]
impl TestDatabase {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let database_path = temp_dir.path().join("cards.db3");

        Ok(Self {
            _temp_dir: temp_dir,
            database_path,
        })
    }

    /// Open a repository on this database
    pub fn open_repository(&self) -> Result<SqliteRepository> {
        SqliteRepository::new(&self.database_path)
    }

    /// Seed a "Basics" deck with two overdue cards and one future card.
    /// Returns the deck id.
    pub fn seed_basics(&self) -> Result<i64> {
        let mut repo = self.open_repository()?;
        let deck = repo.create_deck("Basics")?;
        let now = Utc::now();

        let mut hello = Card::new(deck.id, "Hello", "Olá");
        hello.due_at = now - Duration::hours(1);
        repo.add_card(&hello)?;

        let mut goodbye = Card::new(deck.id, "Goodbye", "Tchau");
        goodbye.due_at = now - Duration::hours(2);
        repo.add_card(&goodbye)?;

        let mut future = Card::new(deck.id, "Thanks", "Obrigado");
        future.due_at = now + Duration::days(5);
        future.level = 3;
        repo.add_card(&future)?;

        Ok(deck.id)
    }
}
