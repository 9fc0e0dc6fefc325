//! Game session and the events it raises.
//!
//! `GameSession` is the only per-turn entry point; it lends the grid to the
//! board routines, applies a `ScoringRule`, and reports what happened as a
//! `TurnReport`.

pub mod event;
pub mod session;

pub use event::{GameEvent, GameListener, GameOutcome, TurnReport};
pub use session::{GameSession, Phase};
