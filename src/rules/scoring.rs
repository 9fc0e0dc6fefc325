//! Scoring rule trait for session implementations.
//!
//! A rule decides:
//! - Points for removing a region of a given size
//! - The flat bonus for clearing the board
//! - Any bonus when the game ends with tiles left
//!
//! The session calls into `ScoringRule` but never computes points itself.

use serde::{Deserialize, Serialize};

/// Bonus for clearing the whole board under the standard rules.
pub const CLEAR_BONUS: u64 = 500;

/// Scoring rule trait.
///
/// ## Implementation Notes
///
/// - `region_points`: only called with sizes >= `MIN_REGION_SIZE`
/// - `clear_bonus`: awarded once, when the bottom row is empty after a turn
/// - `end_bonus`: awarded once, when no move remains and tiles are left
pub trait ScoringRule {
    /// Points for removing a region of `size` tiles.
    fn region_points(&self, size: usize) -> u64;

    /// Bonus for clearing the board.
    fn clear_bonus(&self) -> u64;

    /// Bonus when the game ends with `remaining` tiles on the board.
    fn end_bonus(&self, _remaining: usize) -> u64 {
        0
    }
}

/// Classic SameGame scoring: `(n - 1)^2` per region, a flat bonus for a
/// cleared board, nothing for a stuck one.
///
/// ```
/// use same_game::rules::{ScoringRule, StandardScoring};
///
/// let rule = StandardScoring::default();
/// assert_eq!(rule.region_points(2), 1);
/// assert_eq!(rule.region_points(3), 4);
/// assert_eq!(rule.region_points(10), 81);
/// assert_eq!(rule.clear_bonus(), 500);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardScoring {
    pub clear_bonus: u64,
}

impl Default for StandardScoring {
    fn default() -> Self {
        Self {
            clear_bonus: CLEAR_BONUS,
        }
    }
}

impl ScoringRule for StandardScoring {
    fn region_points(&self, size: usize) -> u64 {
        let n = size.saturating_sub(1) as u64;
        n.saturating_mul(n)
    }

    fn clear_bonus(&self) -> u64 {
        self.clear_bonus
    }
}

/// PopStar-style scoring: `5 * n^2` per region and an end bonus of
/// `2000 - 20 * r^2` for fewer than ten remaining tiles.
///
/// An alternative rule set; sessions use it only when built through
/// `GameSession::with_scoring`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopStarScoring;

impl PopStarScoring {
    const MAX_END_BONUS: u64 = 2000;
    const BONUS_CUTOFF: usize = 10;
}

impl ScoringRule for PopStarScoring {
    fn region_points(&self, size: usize) -> u64 {
        let n = size as u64;
        n.saturating_mul(n).saturating_mul(5)
    }

    fn clear_bonus(&self) -> u64 {
        self.end_bonus(0)
    }

    fn end_bonus(&self, remaining: usize) -> u64 {
        if remaining >= Self::BONUS_CUTOFF {
            return 0;
        }
        let r = remaining as u64;
        Self::MAX_END_BONUS.saturating_sub(20 * r * r)
    }
}
