//! # same-game
//!
//! Board simulation and game-state rules for SameGame, the tile-matching
//! elimination puzzle.
//!
//! ## Rules
//!
//! 1. **Regions**: Clicking a tile removes its 4-connected group of
//!    same-colored tiles, provided the group has at least two tiles.
//!
//! 2. **Gravity**: Tiles fall into the gaps below them, then empty columns
//!    close up to the left.
//!
//! 3. **Scoring**: A region of `n` tiles scores `(n - 1)^2`; clearing the
//!    board adds a flat 500.
//!
//! 4. **Game over**: The board is cleared or no two neighbors share a color.
//!
//! ## Architecture
//!
//! - **Owned board**: The session owns the `Grid` and lends it to one board
//!   routine at a time.
//!
//! - **Injected randomness**: Boards are dealt from a seedable `GameRng`, so
//!   any layout can be reproduced.
//!
//! - **Reported, not rendered**: Each turn returns the removals and moves a
//!   presentation layer needs to animate.
//!
//! ## Modules
//!
//! - `core`: Positions, tiles, RNG, configuration, errors
//! - `board`: Grid, region finder, gravity, move availability
//! - `rules`: Scoring rules
//! - `game`: Session state machine and events
//!
//! ```
//! use same_game::{GameSession, GameConfig, Grid, Phase};
//!
//! let mut session = GameSession::new(GameConfig::new(3, 1)).unwrap();
//! session.load_grid(Grid::from_colors(3, 1, &[Some(0), Some(0), Some(0)]).unwrap()).unwrap();
//!
//! let report = session.handle_click(0, 0).unwrap();
//! assert_eq!(report.removed, 3);
//! assert_eq!(session.score(), 4 + 500);
//! assert_eq!(session.phase(), Phase::GameOver);
//! ```

pub mod core;
pub mod board;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Position, Color, Tile, TileId,
    GameRng, GameRngState,
    GameConfig, BoardLayout, MoveCheck,
    ConfigError,
};

pub use crate::board::{
    Grid, CellView, Region, Removal, TileMove, Axis, MIN_REGION_SIZE,
};

pub use crate::rules::{ScoringRule, StandardScoring, PopStarScoring};

pub use crate::game::{
    GameSession, Phase,
    GameEvent, GameListener, GameOutcome, TurnReport,
};
