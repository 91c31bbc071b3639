// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Deck not found: {0}")]
    DeckNotFound(i64),
    #[error("Card not found: {0}")]
    CardNotFound(i64),
    #[error("Storage error: {0}")]
    StorageError(String),
    #[error("Import error: {0}")]
    ImportError(String),
}
