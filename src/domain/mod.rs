// src/domain/mod.rs
pub mod card;
pub mod deck;
pub mod error;
pub mod policy;
pub mod rating;

pub use card::Card;
pub use deck::{Deck, DeckSummary};
pub use error::DomainError;
pub use rating::Rating;
