// src/domain/card.rs
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{policy, Rating};

/// A single flashcard with its review state.
///
/// `level` counts completed reviews for bookkeeping; it does not currently
/// influence the review interval.
#[derive(Debug, Clone, Serialize)]
pub struct Card {
    pub id: i64,
    pub deck_id: i64,
    pub prompt: String,
    pub answer: String,
    pub level: i64,
    pub due_at: DateTime<Utc>,
}

impl Card {
    /// New cards are immediately due at level 0. The id is assigned by the
    /// persistence layer on insert.
    pub fn new(deck_id: i64, prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id: 0,
            deck_id,
            prompt: prompt.into(),
            answer: answer.into(),
            level: 0,
            due_at: Utc::now(),
        }
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.due_at <= now
    }

    /// Apply a review outcome: reschedule via the interval policy and bump
    /// the review counter. The caller persists the card afterwards.
    pub fn apply_review(&mut self, rating: Option<Rating>, now: DateTime<Utc>) {
        self.due_at = policy::next_due_at(rating, now);
        self.level += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn given_new_card_when_created_then_immediately_due_at_level_zero() {
        let card = Card::new(1, "Hello", "Olá");

        assert_eq!(card.level, 0);
        assert!(card.is_due(Utc::now()));
    }

    #[test]
    fn given_fluent_review_when_applied_then_due_in_three_days_and_level_bumped() {
        let now = Utc::now();
        let mut card = Card::new(1, "Hello", "Olá");

        card.apply_review(Some(Rating::Fluent), now);

        assert_eq!(card.due_at, now + Duration::days(3));
        assert_eq!(card.level, 1);
        assert!(!card.is_due(now));
    }

    #[test]
    fn given_repeat_review_when_applied_then_card_stays_due() {
        let now = Utc::now();
        let mut card = Card::new(1, "Hello", "Olá");

        card.apply_review(Some(Rating::Repeat), now);

        assert_eq!(card.due_at, now);
        assert_eq!(card.level, 1);
        assert!(card.is_due(now));
    }
}
