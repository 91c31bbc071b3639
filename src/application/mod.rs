// src/application/mod.rs
pub mod card_adder;
pub mod deck_lister;
pub mod review_session;

pub use card_adder::CardAdder;
pub use deck_lister::DeckLister;
pub use review_session::{CardRepository, Presenter, ReviewSession, SessionSummary};
