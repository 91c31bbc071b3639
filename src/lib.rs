// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{debug, info};

use crate::application::{CardAdder, CardRepository, DeckLister, ReviewSession};
use crate::cli::args::{Args, Command};
use crate::constants::{DATABASE_FILE_NAME, DATA_DIR_NAME};
use crate::infrastructure::SqliteRepository;
use crate::ports::ConsolePresenter;

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting flashrev with arguments");

    // Initialize infrastructure
    let database_path = match args.database {
        Some(path) => {
            debug!(?path, "Using provided database path");
            path
        }
        None => default_database_path()?,
    };
    let mut repository = SqliteRepository::new(&database_path)?;

    // Execute use case
    match args.command {
        Command::Review { deck_id } => {
            info!(deck_id, "Starting review");
            let presenter = ConsolePresenter::new();
            let summary = ReviewSession::new(&mut repository, presenter).run(deck_id)?;
            if summary.reviewed == 0 {
                println!("Nothing to review.");
            } else {
                println!(
                    "Reviewed {} card(s), {} save failure(s).",
                    summary.reviewed, summary.save_failures
                );
            }
        }
        Command::Decks { json } => {
            let decks = DeckLister::new(&mut repository).list_decks()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&decks)?);
            } else {
                println!("To review a deck run: flashrev review <DECK_ID>\n");
                for deck in decks {
                    println!(
                        "{:>4}  {} ({} cards, {} due)",
                        deck.id, deck.name, deck.card_count, deck.due_count
                    );
                }
            }
        }
        Command::Cards { deck_id, due, json } => {
            let deck = DeckLister::new(&mut repository).get_deck(deck_id)?;
            let now = Utc::now();
            let cards: Vec<_> = deck
                .cards
                .into_iter()
                .filter(|c| !due || c.is_due(now))
                .collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&cards)?);
            } else {
                for card in cards {
                    println!(
                        "{:>4}  {} -> {} (level {}, due {})",
                        card.id,
                        card.prompt,
                        card.answer,
                        card.level,
                        card.due_at.to_rfc3339()
                    );
                }
            }
        }
        Command::AddDeck { name } => {
            let deck = repository.create_deck(&name)?;
            println!("Created deck {} ({})", deck.name, deck.id);
        }
        Command::Add {
            deck_id,
            prompt,
            answer,
        } => {
            let card = CardAdder::new(&mut repository).add_card(deck_id, &prompt, &answer)?;
            println!("Added card {} to deck {}", card.id, deck_id);
        }
        Command::Import { deck_id, path } => {
            let added = CardAdder::new(&mut repository).import_csv(deck_id, &path)?;
            println!("Imported {} card(s) into deck {}", added, deck_id);
        }
    }

    Ok(())
}

pub fn default_database_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().context("Could not determine data directory")?;
    Ok(data_dir.join(DATA_DIR_NAME).join(DATABASE_FILE_NAME))
}
