//! Game driver integration tests: presenter wiring and best-score handling.

use std::path::PathBuf;

use tile_merge::{
    BestScoreStore, Direction, Effect, Game, Grid, JsonFileStore, MemoryStore, RecordingPresenter,
    Session, TextPresenter,
};

fn one_move_from_game_over() -> Session {
    let mut session = Session::with_seed(5);
    session.load_grid(Grid::from_rows(&[
        [0, 4, 2, 4],
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
    ]));
    session
}

fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("tile-merge-game-{}", std::process::id()))
        .join(name)
}

// =============================================================================
// Presentation
// =============================================================================

/// The text presenter mirrors the session board after every command.
#[test]
fn test_text_presenter_tracks_session() {
    let mut game = Game::new(
        Session::with_seed(31),
        MemoryStore::new(),
        TextPresenter::new(4, 4),
    );
    assert_eq!(game.presenter().board(), game.session().grid());

    for dir in [Direction::Left, Direction::Down, Direction::Right, Direction::Up] {
        game.handle_move(dir);
        assert_eq!(game.presenter().board(), game.session().grid());
        assert_eq!(game.presenter().score(), game.session().score());
    }
}

/// Key codes drive moves; everything else is ignored.
#[test]
fn test_handle_key() {
    let mut game = Game::new(
        Session::with_seed(8),
        MemoryStore::new(),
        RecordingPresenter::new(),
    );
    assert!(game.handle_key("ArrowLeft").is_some());
    assert!(game.handle_key("KeyW").is_some());
    assert!(game.handle_key("Escape").is_none());
}

/// Game-over shows the indicator and records the best score.
#[test]
fn test_game_over_records_best() {
    let session = one_move_from_game_over();
    let mut game = Game::new(session, MemoryStore::new(), RecordingPresenter::new());
    game.presenter_mut().take();

    // Nothing merges, so score stays 0 and the store is untouched
    let outcome = game.handle_move(Direction::Left);
    assert!(outcome.game_over);
    assert!(game
        .presenter()
        .effects
        .contains(&Effect::GameOverChanged(true)));
    assert_eq!(game.store().writes(), 0);
}

/// A score earned before game-over is persisted when the game ends.
#[test]
fn test_game_over_persists_higher_score() {
    let mut session = Session::with_seed(5);
    // Merging the 2s in row 0 scores 4; the spawn fills the last gap and
    // no pair remains.
    session.load_grid(Grid::from_rows(&[
        [2, 2, 8, 16],
        [8, 16, 32, 64],
        [16, 32, 64, 128],
        [32, 64, 128, 256],
    ]));
    let mut game = Game::new(session, MemoryStore::with_best(2), RecordingPresenter::new());
    game.presenter_mut().take();

    let outcome = game.handle_move(Direction::Left);
    assert!(outcome.moved);
    assert_eq!(outcome.spawned, Some((0, 3)));
    assert!(outcome.game_over);
    assert_eq!(game.session().score(), 4);
    assert_eq!(game.store().read(), 4);
    assert_eq!(game.best_score(), 4);

    let effects = game.presenter().effects.clone();
    let over = effects
        .iter()
        .position(|e| *e == Effect::GameOverChanged(true))
        .unwrap();
    let best = effects
        .iter()
        .position(|e| *e == Effect::BestScoreChanged(4))
        .unwrap();
    assert!(over < best);
}

/// Restart hides the indicator and resets the score display.
#[test]
fn test_restart_after_game_over() {
    let mut session = Session::with_seed(5);
    session.load_grid(Grid::from_rows(&[
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [4, 2, 4, 2],
    ]));
    session.check_game_over();
    let mut game = Game::new(session, MemoryStore::new(), TextPresenter::new(4, 4));
    assert!(game.presenter().game_over());

    game.restart();
    assert!(!game.presenter().game_over());
    assert!(!game.session().is_game_over());
    assert_eq!(game.presenter().score(), 0);
    assert_eq!(game.presenter().board().empty_count(), 14);
}

/// Restart records the old score before the new board goes out.
#[test]
fn test_restart_effect_order() {
    let mut session = Session::with_seed(8);
    session.load_grid(Grid::from_rows(&[
        [4, 4, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ]));
    let mut game = Game::new(session, MemoryStore::new(), RecordingPresenter::new());
    game.handle_move(Direction::Left);
    game.presenter_mut().take();

    game.restart();
    let effects = game.presenter_mut().take();

    assert_eq!(effects.len(), 4);
    assert_eq!(effects[0], Effect::BestScoreChanged(8));
    match &effects[1] {
        Effect::GridRedrawn(grid) => assert_eq!(grid, game.session().grid()),
        other => panic!("expected a redraw, got {other:?}"),
    }
    assert_eq!(effects[2], Effect::ScoreChanged(0));
    assert_eq!(effects[3], Effect::GameOverChanged(false));
}

// =============================================================================
// File store
// =============================================================================

/// Best score survives across games through the JSON file.
#[test]
fn test_file_store_across_games() {
    let path = temp_file("best.json");
    let _ = std::fs::remove_file(&path);

    let mut session = Session::with_seed(3);
    session.load_grid(Grid::from_rows(&[
        [4, 4, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ]));
    let mut game = Game::new(session, JsonFileStore::new(&path), RecordingPresenter::new());
    game.handle_move(Direction::Left);
    game.end_session();
    assert_eq!(JsonFileStore::new(&path).read(), 8);

    let next = Game::new(
        Session::with_seed(4),
        JsonFileStore::new(&path),
        TextPresenter::new(4, 4),
    );
    assert_eq!(next.best_score(), 8);
    assert_eq!(next.presenter().best(), 8);

    let _ = std::fs::remove_file(path);
}
