// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to the card database (optional)
    #[arg(short, long, value_name = "DATABASE", global = true)]
    pub database: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Review the due cards of a deck
    Review {
        /// Deck ID to review
        #[arg(value_name = "DECK_ID")]
        deck_id: i64,
    },

    /// List decks with card and due counts
    Decks {
        /// Output decks as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the cards of a deck
    Cards {
        /// Deck ID to list
        #[arg(value_name = "DECK_ID")]
        deck_id: i64,

        /// Only show cards that are currently due
        #[arg(long)]
        due: bool,

        /// Output cards as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a new deck
    AddDeck {
        /// Display name of the deck
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Add a single card to a deck
    Add {
        /// Deck ID to add the card to
        #[arg(value_name = "DECK_ID")]
        deck_id: i64,

        /// Front of the card
        #[arg(value_name = "PROMPT")]
        prompt: String,

        /// Back of the card
        #[arg(value_name = "ANSWER")]
        answer: String,
    },

    /// Bulk-import cards from a comma-separated file
    Import {
        /// Deck ID to import into
        #[arg(value_name = "DECK_ID")]
        deck_id: i64,

        /// Path to the file (one "prompt,answer" pair per line)
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
}
