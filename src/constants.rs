// src/constants.rs
//
// Application-wide constants extracted from magic numbers throughout the codebase.

/// Review interval in days after an "Easy" rating.
///
/// Used in: `domain/policy.rs`
pub const EASY_INTERVAL_DAYS: i64 = 1;

/// Review interval in days after a "Very Easy" rating.
///
/// Used in: `domain/policy.rs`
pub const VERY_EASY_INTERVAL_DAYS: i64 = 2;

/// Review interval in days after a "Fluent" rating.
///
/// Used in: `domain/policy.rs`
pub const FLUENT_INTERVAL_DAYS: i64 = 3;

/// File name of the SQLite database inside the application data directory.
///
/// Used in: `lib.rs` (`default_database_path`)
pub const DATABASE_FILE_NAME: &str = "cards.db3";

/// Directory under the platform data dir holding application state.
///
/// Used in: `lib.rs` (`default_database_path`)
pub const DATA_DIR_NAME: &str = "flashrev";
