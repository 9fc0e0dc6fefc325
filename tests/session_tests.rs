//! Session integration tests.
//!
//! These tests drive `GameSession` through whole turns and games and check
//! the score, the phase transitions, and the events handed to listeners.

use std::time::Duration;

use same_game::{
    Axis, ConfigError, GameConfig, GameEvent, GameListener, GameOutcome, GameRng, GameRngState,
    GameSession, Grid, Phase, Position, Tile, TileMove,
};

fn loaded(columns: usize, rows: usize, colors: &[Option<u8>]) -> GameSession {
    let mut session = GameSession::new(GameConfig::new(columns, rows)).unwrap();
    session.load_grid(Grid::from_colors(columns, rows, colors).unwrap()).unwrap();
    session
}

// =============================================================================
// Scenario Tests
// =============================================================================

/// A 3x1 row of one color clears the board in one click.
#[test]
fn test_row_of_three_scenario() {
    let mut session = loaded(3, 1, &[Some(2), Some(2), Some(2)]);

    let report = session.handle_click(0, 0).unwrap();

    assert_eq!(report.removed, 3);
    assert_eq!(report.points, 4);
    assert!(session.grid().is_cleared());
    assert_eq!(session.score(), 4 + 500);
    assert_eq!(session.phase(), Phase::GameOver);

    let outcome = session.outcome().unwrap();
    assert!(outcome.cleared);
    assert_eq!(outcome.bonus, 500);
    assert_eq!(outcome.final_score, 504);
}

/// A 2x2 block of four colors has no legal click.
#[test]
fn test_checkerboard_scenario() {
    let mut session = loaded(2, 2, &[Some(0), Some(1), Some(2), Some(3)]);
    let before = session.grid().clone();

    assert!(session.handle_click(1, 1).is_none());
    assert_eq!(session.score(), 0);
    assert_eq!(session.grid(), &before);
    assert_eq!(session.phase(), Phase::Playing);
}

/// Single column: A, A on top of B. Clicking A leaves B on the bottom row.
#[test]
fn test_single_column_scenario() {
    let mut session = loaded(1, 3, &[Some(0), Some(0), Some(1)]);
    let b = *session.grid().at(0, 2).unwrap();

    let report = session.handle_click(0, 1).unwrap();

    assert_eq!(report.removed, 2);
    assert_eq!(report.points, 1);
    assert_eq!(session.grid().at(0, 2), Some(&b));
    assert_eq!(session.grid().tile_count(), 1);
    assert_eq!(report.moves().count(), 0);
}

// =============================================================================
// Event Tests
// =============================================================================

#[derive(Default)]
struct Animator {
    removed: Vec<(Tile, Position)>,
    moves: Vec<TileMove>,
    score: u64,
    over: Option<GameOutcome>,
}

impl GameListener for Animator {
    fn tile_removed(&mut self, tile: &Tile, position: Position) {
        self.removed.push((*tile, position));
    }

    fn tile_moved(&mut self, tile_move: &TileMove) {
        self.moves.push(*tile_move);
    }

    fn score_changed(&mut self, score: u64, _delta: u64) {
        self.score = score;
    }

    fn game_over(&mut self, outcome: &GameOutcome) {
        self.over = Some(*outcome);
    }
}

#[test]
fn test_events_describe_the_turn() {
    #[rustfmt::skip]
    let mut session = loaded(3, 3, &[
        Some(1), Some(2), Some(3),
        Some(0), Some(2), Some(3),
        Some(0), Some(0), Some(1),
    ]);

    let report = session.handle_click(0, 2).unwrap();
    let mut animator = Animator::default();
    report.dispatch(&mut animator);

    assert_eq!(animator.removed.len(), 3);
    assert!(animator
        .removed
        .iter()
        .all(|(tile, _)| tile.color.0 == 0));
    assert_eq!(animator.score, session.score());

    // Every moved tile ends where the last move for it says
    for m in &animator.moves {
        let last = animator.moves.iter().rev().find(|n| n.tile.id == m.tile.id).unwrap();
        assert_eq!(session.grid().get(last.to).map(|t| t.id), Some(m.tile.id));
    }

    #[rustfmt::skip]
    assert_eq!(session.grid().colors(), vec![
        None,    None,    Some(3),
        None,    Some(2), Some(3),
        Some(1), Some(2), Some(1),
    ]);
    assert!(animator.moves.iter().all(|m| m.axis == Axis::Fall));
    assert_eq!(report.phase, Phase::Playing);
    assert!(animator.over.is_none());
}

#[test]
fn test_event_order() {
    let mut session = loaded(3, 1, &[Some(1), Some(1), Some(0)]);

    let report = session.handle_click(0, 0).unwrap();

    let kinds: Vec<&str> = report
        .events
        .iter()
        .map(|e| match e {
            GameEvent::TileRemoved { .. } => "removed",
            GameEvent::TileMoved(_) => "moved",
            GameEvent::ScoreChanged { .. } => "score",
            GameEvent::GameOver(_) => "over",
        })
        .collect();

    // Lone tile left: game over without bonus, so only one score event
    assert_eq!(kinds, vec!["removed", "removed", "score", "moved", "over"]);
}

#[test]
fn test_game_over_carries_notice_timeout() {
    let config = GameConfig::new(2, 1).with_notice_timeout(Duration::from_millis(1500));
    let mut session = GameSession::new(config).unwrap();
    session.load_grid(Grid::from_colors(2, 1, &[Some(0), Some(0)]).unwrap()).unwrap();

    let report = session.handle_click(0, 0).unwrap();
    let mut animator = Animator::default();
    report.dispatch(&mut animator);

    let over = animator.over.unwrap();
    assert_eq!(over.notice_timeout, Duration::from_millis(1500));
    assert_eq!(over.bonus, 500);
    assert_eq!(animator.score, 501);
}

// =============================================================================
// Whole Game Tests
// =============================================================================

/// Always click the first available region until the game ends.
fn play_out(session: &mut GameSession) -> usize {
    let mut turns = 0;
    while session.phase() == Phase::Playing {
        let Some(region) = session.available_moves().into_iter().next() else {
            break;
        };
        let start = region.positions[0];
        let before = session.score();
        let report = session.handle_click(start.col, start.row).unwrap();
        assert!(report.score >= before);
        turns += 1;
    }
    turns
}

#[test]
fn test_random_games_reach_game_over() {
    for seed in 0..20 {
        let config = GameConfig::new(10, 15);
        let mut session = GameSession::new(config.clone()).unwrap();
        session.start_new_game(config, &mut GameRng::new(seed)).unwrap();

        let turns = play_out(&mut session);

        assert!(turns > 0, "seed {seed} dealt a board without moves");
        assert_eq!(session.phase(), Phase::GameOver);
        assert!(session.available_moves().is_empty());
        assert_eq!(session.turns() as usize, turns);
    }
}

#[test]
fn test_deterministic_replay() {
    let config = GameConfig::new(8, 8).with_palette_size(3);

    let mut first = GameSession::new(config.clone()).unwrap();
    let mut second = GameSession::new(config.clone()).unwrap();
    first.start_new_game(config.clone(), &mut GameRng::new(2024)).unwrap();
    second.start_new_game(config, &mut GameRng::new(2024)).unwrap();

    play_out(&mut first);
    play_out(&mut second);

    assert_eq!(first.score(), second.score());
    assert_eq!(first.grid(), second.grid());
}

#[test]
fn test_saved_deal_replays_the_same_game() {
    let config = GameConfig::new(8, 8).with_palette_size(3);
    let mut session = GameSession::new(config.clone()).unwrap();
    session.start_new_game(config, &mut GameRng::new(99)).unwrap();
    let saved = serde_json::to_string(session.deal_state().unwrap()).unwrap();
    let dealt = session.grid().clone();

    play_out(&mut session);
    let first_score = session.score();

    let state: GameRngState = serde_json::from_str(&saved).unwrap();
    session.replay_deal(&state).unwrap();
    assert_eq!(session.grid(), &dealt);

    play_out(&mut session);
    assert_eq!(session.score(), first_score);
}

#[test]
fn test_new_game_after_game_over() {
    let mut session = loaded(2, 1, &[Some(0), Some(0)]);
    session.handle_click(0, 0).unwrap();
    assert_eq!(session.phase(), Phase::GameOver);

    session
        .start_new_game(GameConfig::new(4, 4), &mut GameRng::new(3))
        .unwrap();

    assert_eq!(session.phase(), Phase::Playing);
    assert_eq!(session.score(), 0);
    assert_eq!(session.grid().columns(), 4);
    assert_eq!(session.grid().tile_count(), 16);
}

// =============================================================================
// Configuration Tests
// =============================================================================

#[test]
fn test_foreign_colors_are_rejected() {
    let mut session = GameSession::new(GameConfig::new(2, 1)).unwrap();
    let grid = Grid::from_colors(2, 1, &[Some(200), Some(200)]).unwrap();

    let err = session.load_grid(grid).unwrap_err();

    assert_eq!(err, ConfigError::ColorOutOfPalette { color: 200, palette_size: 4 });
    assert_eq!(session.phase(), Phase::NotStarted);
    assert!(session.handle_click(0, 0).is_none());
}

#[test]
fn test_oversized_board_is_an_error() {
    assert!(matches!(
        GameConfig::from_layout(u32::MAX, u32::MAX, 1),
        Err(ConfigError::TooLarge { .. })
    ));

    let config = GameConfig::new(usize::MAX / 4, 3);
    assert!(matches!(
        GameSession::new(config.clone()),
        Err(ConfigError::TooLarge { .. })
    ));

    let mut session = GameSession::new(GameConfig::new(3, 3)).unwrap();
    assert!(session.start_new_game(config, &mut GameRng::new(1)).is_err());
    assert_eq!(session.phase(), Phase::NotStarted);
}
