//! Scoring rules.
//!
//! Sessions are generic over `ScoringRule`:
//! - `StandardScoring`: `(n - 1)^2` per region, 500 for a cleared board
//! - `PopStarScoring`: `5 * n^2` per region, remaining-tile end bonus

pub mod scoring;

pub use scoring::{PopStarScoring, ScoringRule, StandardScoring, CLEAR_BONUS};
