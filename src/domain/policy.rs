// src/domain/policy.rs
use chrono::{DateTime, Duration, Utc};

use crate::constants::{EASY_INTERVAL_DAYS, FLUENT_INTERVAL_DAYS, VERY_EASY_INTERVAL_DAYS};
use crate::domain::Rating;

/// Days until the next review for a given rating.
///
/// Fixed offsets, no per-card difficulty factor. The card's `level` counter
/// does not feed into this calculation.
pub fn interval_days(rating: Rating) -> i64 {
    match rating {
        Rating::Repeat => 0,
        Rating::Easy => EASY_INTERVAL_DAYS,
        Rating::VeryEasy => VERY_EASY_INTERVAL_DAYS,
        Rating::Fluent => FLUENT_INTERVAL_DAYS,
    }
}

/// Compute the next due timestamp for a review outcome.
///
/// `None` (unrecognized input) falls open to `Repeat`: the card stays
/// immediately due rather than crashing or re-prompting mid-session.
pub fn next_due_at(rating: Option<Rating>, now: DateTime<Utc>) -> DateTime<Utc> {
    now + Duration::days(interval_days(rating.unwrap_or(Rating::Repeat)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Rating::Repeat, 0)]
    #[case(Rating::Easy, 1)]
    #[case(Rating::VeryEasy, 2)]
    #[case(Rating::Fluent, 3)]
    fn given_rating_when_computing_interval_then_returns_fixed_days(
        #[case] rating: Rating,
        #[case] days: i64,
    ) {
        assert_eq!(interval_days(rating), days);
    }

    #[test]
    fn given_repeat_when_computing_due_date_then_card_stays_due_now() {
        let now = Utc::now();
        assert_eq!(next_due_at(Some(Rating::Repeat), now), now);
    }

    #[test]
    fn given_unrecognized_rating_when_computing_due_date_then_behaves_like_repeat() {
        let now = Utc::now();
        assert_eq!(next_due_at(None, now), next_due_at(Some(Rating::Repeat), now));
    }

    #[test]
    fn given_positive_ratings_when_computing_due_date_then_ordering_holds() {
        let now = Utc::now();
        let easy = next_due_at(Some(Rating::Easy), now);
        let very_easy = next_due_at(Some(Rating::VeryEasy), now);
        let fluent = next_due_at(Some(Rating::Fluent), now);

        assert!(easy > now);
        assert!(very_easy > easy);
        assert!(fluent > very_easy);
        assert_eq!(fluent - now, Duration::days(3));
    }
}
