// src/domain/rating.rs
use serde::Serialize;

/// Self-assessed recall quality for a single card review.
///
/// Parsed from the single-key console scheme (q/w/e/r). Anything else is
/// "no rating" and is treated as [`Rating::Repeat`] by the interval policy,
/// so a typo never aborts a running session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rating {
    Repeat,
    Easy,
    VeryEasy,
    Fluent,
}

impl Rating {
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'q' => Some(Rating::Repeat),
            'w' => Some(Rating::Easy),
            'e' => Some(Rating::VeryEasy),
            'r' => Some(Rating::Fluent),
            _ => None,
        }
    }
}
