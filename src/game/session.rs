//! Game session: turn orchestration and the phase state machine.
//!
//! ```text
//! NotStarted --start--> Playing --turn--> Playing
//!                          |                 |
//!                          +-----turn--> GameOver --start--> Playing
//! ```
//!
//! A turn is one accepted click: remove the region, score it, compact the
//! board, then check for the end of the game. Clicks that cannot start a
//! turn are ignored and reported as `None`.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::board::{self, CellView, Grid, Region};
use crate::core::{ConfigError, GameConfig, GameRng, GameRngState, Position};
use crate::rules::{ScoringRule, StandardScoring};

use super::event::{GameEvent, GameOutcome, TurnReport};

/// Session phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No board has been dealt yet.
    #[default]
    NotStarted,
    /// Clicks are accepted.
    Playing,
    /// Terminal until the next `start_new_game`.
    GameOver,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::NotStarted => "not started",
            Phase::Playing => "playing",
            Phase::GameOver => "game over",
        };
        f.write_str(name)
    }
}

/// One play session: board, score, phase.
///
/// ```
/// use same_game::{GameConfig, GameRng, GameSession, Phase};
///
/// let mut session = GameSession::new(GameConfig::new(6, 6)).unwrap();
/// assert_eq!(session.phase(), Phase::NotStarted);
///
/// session.start_new_game(GameConfig::new(6, 6), &mut GameRng::new(42)).unwrap();
/// assert_eq!(session.phase(), Phase::Playing);
/// assert_eq!(session.score(), 0);
/// assert_eq!(session.grid().tile_count(), 36);
/// ```
#[derive(Clone, Debug)]
pub struct GameSession<S: ScoringRule = StandardScoring> {
    config: GameConfig,
    scoring: S,
    grid: Grid,
    score: u64,
    phase: Phase,
    turns: u32,
    outcome: Option<GameOutcome>,
    deal: Option<GameRngState>,
}

impl GameSession<StandardScoring> {
    /// Create a session with standard scoring. No board is dealt until
    /// `start_new_game`.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_scoring(config, StandardScoring::default())
    }
}

impl<S: ScoringRule> GameSession<S> {
    /// Create a session with a custom scoring rule.
    pub fn with_scoring(config: GameConfig, scoring: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::new(config.columns, config.rows)?;
        Ok(Self {
            config,
            scoring,
            grid,
            score: 0,
            phase: Phase::NotStarted,
            turns: 0,
            outcome: None,
            deal: None,
        })
    }

    /// Deal a fresh random board and start playing.
    ///
    /// On error the session is left as it was.
    pub fn start_new_game(&mut self, config: GameConfig, rng: &mut GameRng) -> Result<(), ConfigError> {
        config.validate()?;
        let deal = rng.state();
        let grid = Grid::random(config.columns, config.rows, config.palette_size, rng)?;
        self.config = config;
        self.begin(grid, Some(deal));
        info!(
            columns = self.config.columns,
            rows = self.config.rows,
            palette = self.config.palette_size,
            seed = deal.seed,
            "new game"
        );
        Ok(())
    }

    /// Deal a fresh board with the current configuration.
    pub fn restart(&mut self, rng: &mut GameRng) -> Result<(), ConfigError> {
        self.start_new_game(self.config.clone(), rng)
    }

    /// Deal again the board recorded by `deal_state`, with the current
    /// configuration.
    ///
    /// ```
    /// use same_game::{GameConfig, GameRng, GameSession};
    ///
    /// let mut session = GameSession::new(GameConfig::new(5, 5)).unwrap();
    /// let mut rng = GameRng::new(3);
    /// session.start_new_game(GameConfig::new(5, 5), &mut rng).unwrap();
    /// let dealt = session.grid().clone();
    /// let state = *session.deal_state().unwrap();
    ///
    /// session.restart(&mut rng).unwrap();
    /// session.replay_deal(&state).unwrap();
    /// assert_eq!(session.grid(), &dealt);
    /// ```
    pub fn replay_deal(&mut self, state: &GameRngState) -> Result<(), ConfigError> {
        self.restart(&mut GameRng::from_state(state))
    }

    /// Start playing on a fixed board, e.g. a puzzle preset.
    ///
    /// The board dimensions replace the configured ones. Every tile must use
    /// a color of the configured palette; on error the session is left as
    /// it was.
    pub fn load_grid(&mut self, grid: Grid) -> Result<(), ConfigError> {
        grid.check_palette(self.config.palette_size)?;
        self.config.columns = grid.columns();
        self.config.rows = grid.rows();
        self.begin(grid, None);
        info!(columns = self.config.columns, rows = self.config.rows, "loaded board");
        Ok(())
    }

    fn begin(&mut self, grid: Grid, deal: Option<GameRngState>) {
        self.grid = grid;
        self.deal = deal;
        self.score = 0;
        self.turns = 0;
        self.outcome = None;
        self.phase = Phase::Playing;
    }

    /// Play the cell at `(col, row)`.
    ///
    /// Returns `None` without touching the session when the game is not in
    /// progress, the cell is empty or off the board, or the tile has no
    /// same-colored neighbor.
    pub fn handle_click(&mut self, col: usize, row: usize) -> Option<TurnReport> {
        if self.phase != Phase::Playing {
            trace!(col, row, phase = %self.phase, "click ignored");
            return None;
        }
        let pos = Position::new(col, row);
        if !self.grid.is_occupied(pos) {
            trace!(col, row, "click on empty cell");
            return None;
        }

        let removal = board::find_and_remove_region(&mut self.grid, pos);
        if removal.is_empty() {
            trace!(col, row, "lone tile");
            return None;
        }

        let mut events: Vec<GameEvent> = removal
            .removed
            .iter()
            .map(|&(position, tile)| GameEvent::TileRemoved { tile, position })
            .collect();

        let removed = removal.count();
        let points = self.scoring.region_points(removed);
        self.score = self.score.saturating_add(points);
        self.turns += 1;
        events.push(GameEvent::ScoreChanged { score: self.score, delta: points });

        events.extend(board::compact(&mut self.grid).into_iter().map(GameEvent::TileMoved));

        debug!(col, row, removed, points, score = self.score, "turn");

        let outcome = self.check_terminal();
        if let Some(outcome) = outcome {
            if outcome.bonus > 0 {
                events.push(GameEvent::ScoreChanged { score: self.score, delta: outcome.bonus });
            }
            events.push(GameEvent::GameOver(outcome));
        }

        Some(TurnReport {
            removed,
            points,
            score: self.score,
            phase: self.phase,
            outcome,
            events,
        })
    }

    /// Play the cell under a pixel of the board.
    pub fn handle_pixel_click(&mut self, x: i64, y: i64) -> Option<TurnReport> {
        let pos = self.config.layout().cell_at(x, y)?;
        self.handle_click(pos.col, pos.row)
    }

    /// Decide whether the turn just played ended the game.
    fn check_terminal(&mut self) -> Option<GameOutcome> {
        let cleared = self.grid.bottom_row_is_empty();
        let remaining = self.grid.tile_count();

        let bonus = if cleared {
            self.scoring.clear_bonus()
        } else if !board::has_any_move(&self.grid, self.config.move_check) {
            self.scoring.end_bonus(remaining)
        } else {
            return None;
        };

        self.score = self.score.saturating_add(bonus);
        self.phase = Phase::GameOver;

        let outcome = GameOutcome {
            final_score: self.score,
            bonus,
            cleared,
            remaining,
            notice_timeout: self.config.notice_timeout,
        };
        self.outcome = Some(outcome);

        info!(score = self.score, bonus, cleared, remaining, turns = self.turns, "game over");
        Some(outcome)
    }

    // === Accessors ===

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn scoring(&self) -> &S {
        &self.scoring
    }

    /// Turns played since the board was dealt.
    #[must_use]
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// How the game ended, once it has.
    #[must_use]
    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    /// Color stream position the current board was dealt from. `None` for
    /// boards given to `load_grid`.
    #[must_use]
    pub fn deal_state(&self) -> Option<&GameRngState> {
        self.deal.as_ref()
    }

    /// Render view of every cell, row-major, top row first.
    pub fn cells(&self) -> impl Iterator<Item = CellView> + '_ {
        self.grid.cells()
    }

    /// Every region a click would remove.
    #[must_use]
    pub fn available_moves(&self) -> Vec<Region> {
        board::removable_regions(&self.grid)
    }

    /// The move worth the most points right now, if any.
    #[must_use]
    pub fn hint(&self) -> Option<Region> {
        self.available_moves()
            .into_iter()
            .max_by_key(|region| self.scoring.region_points(region.len()))
    }
}
