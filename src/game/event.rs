//! Events raised toward the presentation layer.
//!
//! A turn produces, in order:
//! - `TileRemoved` for every tile in the cleared region
//! - `ScoreChanged` for the region points
//! - `TileMoved` for every tile displaced by gravity (falls, then shifts)
//! - on game over, `ScoreChanged` for a non-zero bonus, then `GameOver`
//!
//! Consumers either read `TurnReport::events` or implement `GameListener`
//! and call `TurnReport::dispatch`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::board::TileMove;
use crate::core::{Position, Tile};

use super::session::Phase;

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// Score including the bonus.
    pub final_score: u64,
    /// Bonus added on the final turn (0 when none was earned).
    pub bonus: u64,
    /// True when the board was cleared.
    pub cleared: bool,
    /// Tiles left on the board.
    pub remaining: usize,
    /// How long the game-over notice should stay up.
    pub notice_timeout: Duration,
}

/// Something the presentation layer should react to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    TileRemoved { tile: Tile, position: Position },
    TileMoved(TileMove),
    ScoreChanged { score: u64, delta: u64 },
    GameOver(GameOutcome),
}

/// Callback-style consumer of game events.
///
/// Every method has a no-op default, so listeners only implement what they
/// animate.
pub trait GameListener {
    fn tile_removed(&mut self, _tile: &Tile, _position: Position) {}

    fn tile_moved(&mut self, _tile_move: &TileMove) {}

    fn score_changed(&mut self, _score: u64, _delta: u64) {}

    fn game_over(&mut self, _outcome: &GameOutcome) {}
}

impl GameEvent {
    /// Deliver this event to the matching listener method.
    pub fn dispatch(&self, listener: &mut dyn GameListener) {
        match self {
            GameEvent::TileRemoved { tile, position } => listener.tile_removed(tile, *position),
            GameEvent::TileMoved(tile_move) => listener.tile_moved(tile_move),
            GameEvent::ScoreChanged { score, delta } => listener.score_changed(*score, *delta),
            GameEvent::GameOver(outcome) => listener.game_over(outcome),
        }
    }
}

/// Result of one accepted turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Tiles removed by the click (always >= 2).
    pub removed: usize,
    /// Region points earned, excluding any bonus.
    pub points: u64,
    /// Score after the turn, including any bonus.
    pub score: u64,
    /// Phase after the turn.
    pub phase: Phase,
    /// Set when this turn ended the game.
    pub outcome: Option<GameOutcome>,
    /// Everything that happened, in order.
    pub events: Vec<GameEvent>,
}

impl TurnReport {
    /// Replay every event of this turn into a listener, in order.
    pub fn dispatch(&self, listener: &mut dyn GameListener) {
        for event in &self.events {
            event.dispatch(listener);
        }
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Moves produced by gravity this turn.
    pub fn moves(&self) -> impl Iterator<Item = &TileMove> {
        self.events.iter().filter_map(|e| match e {
            GameEvent::TileMoved(m) => Some(m),
            _ => None,
        })
    }
}
