mod helpers;

use anyhow::Result;
use chrono::{Duration, Utc};
use flashrev::application::{CardRepository, ReviewSession};
use flashrev::domain::Rating;
use flashrev::util::testing::ScriptedPresenter;
use helpers::TestDatabase;

#[test]
fn given_due_cards_when_running_session_then_ratings_persist_to_database() -> Result<()> {
    // Arrange: "Goodbye" is the most overdue and is presented first
    let db = TestDatabase::new()?;
    let deck_id = db.seed_basics()?;
    let mut repo = db.open_repository()?;
    let start = Utc::now();
    let mut presenter = ScriptedPresenter::new(vec![Some(Rating::Repeat), Some(Rating::Fluent)]);

    // Act
    let summary = ReviewSession::new(&mut repo, &mut presenter).run(deck_id)?;

    // Assert
    assert_eq!(summary.reviewed, 2);
    assert_eq!(summary.save_failures, 0);
    assert_eq!(
        presenter.prompts_shown,
        vec!["Goodbye".to_string(), "Hello".to_string()]
    );

    let deck = repo.get_deck(deck_id)?;
    let goodbye = deck.cards.iter().find(|c| c.prompt == "Goodbye").expect("card");
    let hello = deck.cards.iter().find(|c| c.prompt == "Hello").expect("card");

    // Repeat keeps the card due, Fluent schedules it three days out
    assert!(goodbye.is_due(Utc::now()));
    assert_eq!(goodbye.level, 1);
    assert!(hello.due_at >= start + Duration::days(3));
    assert_eq!(hello.level, 1);
    Ok(())
}

#[test]
fn given_empty_deck_when_running_session_then_no_input_is_awaited() -> Result<()> {
    // Arrange
    let db = TestDatabase::new()?;
    let mut repo = db.open_repository()?;
    let deck = repo.create_deck("Empty")?;
    // An empty script panics on any await_rating call, proving none happens
    let presenter = ScriptedPresenter::new(vec![]);

    // Act
    let summary = ReviewSession::new(&mut repo, presenter).run(deck.id)?;

    // Assert
    assert_eq!(summary.reviewed, 0);
    assert_eq!(summary.save_failures, 0);
    Ok(())
}

#[test]
fn given_unrecognized_rating_when_running_session_then_card_remains_due() -> Result<()> {
    // Arrange
    let db = TestDatabase::new()?;
    let deck_id = db.seed_basics()?;
    let mut repo = db.open_repository()?;
    let presenter = ScriptedPresenter::new(vec![None, None]);

    // Act
    let summary = ReviewSession::new(&mut repo, presenter).run(deck_id)?;

    // Assert: fail-open, both cards scheduled like Repeat
    assert_eq!(summary.reviewed, 2);
    let due = repo.load_due_cards(deck_id)?;
    assert_eq!(due.len(), 2);
    assert!(due.iter().all(|c| c.level == 1));
    Ok(())
}

#[test]
fn given_two_sessions_when_second_runs_then_rescheduled_cards_are_skipped() -> Result<()> {
    // Arrange
    let db = TestDatabase::new()?;
    let deck_id = db.seed_basics()?;
    let mut repo = db.open_repository()?;
    let first = ScriptedPresenter::new(vec![Some(Rating::Easy), Some(Rating::Easy)]);
    ReviewSession::new(&mut repo, first).run(deck_id)?;

    // Act: everything was pushed a day out, so there is nothing left
    let second = ScriptedPresenter::new(vec![]);
    let summary = ReviewSession::new(&mut repo, second).run(deck_id)?;

    // Assert
    assert_eq!(summary.reviewed, 0);
    Ok(())
}
