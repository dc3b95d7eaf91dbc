//! Effect phase: connects a `Session` to its presenter and best-score store.
//!
//! Every command runs in two steps. The session performs the pure state
//! transition, then `Game` drains the queued effects, forwards them to the
//! presenter, and records a new best score when the session ends.

use log::{info, warn};

use super::effect::Effect;
use super::session::{MoveOutcome, Session};
use crate::core::Direction;
use crate::input::direction_for_key;
use crate::store::BestScoreStore;
use crate::view::Presenter;

/// A session wired to its collaborators.
pub struct Game<S, P> {
    session: Session,
    store: S,
    presenter: P,
    best_score: u64,
}

impl<S: BestScoreStore, P: Presenter> Game<S, P> {
    /// Wrap a session, publish the stored best score and the initial board.
    pub fn new(session: Session, store: S, presenter: P) -> Self {
        let best_score = store.read();
        let mut game = Self {
            session,
            store,
            presenter,
            best_score,
        };
        game.presenter.present(&Effect::BestScoreChanged(best_score));
        game.flush();
        game
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Best score as last read or written.
    #[must_use]
    pub fn best_score(&self) -> u64 {
        self.best_score
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Run a move and present its effects.
    pub fn handle_move(&mut self, direction: Direction) -> MoveOutcome {
        let outcome = self.session.apply_move(direction);
        self.flush();
        outcome
    }

    /// Run the move bound to a key code. Other keys are ignored.
    pub fn handle_key(&mut self, code: &str) -> Option<MoveOutcome> {
        direction_for_key(code).map(|dir| self.handle_move(dir))
    }

    /// Record the finished session's score, then start a fresh one.
    pub fn restart(&mut self) {
        self.record_best();
        self.session.new_game();
        self.flush();
    }

    /// Record the score of the session being abandoned.
    pub fn end_session(&mut self) {
        self.record_best();
    }

    fn flush(&mut self) {
        for effect in self.session.drain_effects() {
            self.presenter.present(&effect);
            if effect == Effect::GameOverChanged(true) {
                self.record_best();
            }
        }
    }

    fn record_best(&mut self) {
        let score = self.session.score();
        let stored = self.store.read();
        if score <= stored {
            self.best_score = stored;
            return;
        }

        self.best_score = score;
        if let Err(err) = self.store.write(score) {
            warn!("could not persist best score {score}: {err}");
        } else {
            info!("new best score {score}");
        }
        self.presenter.present(&Effect::BestScoreChanged(score));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Grid;
    use crate::store::MemoryStore;
    use crate::view::RecordingPresenter;

    fn game(best: u64) -> Game<MemoryStore, RecordingPresenter> {
        Game::new(
            Session::with_seed(42),
            MemoryStore::with_best(best),
            RecordingPresenter::new(),
        )
    }

    #[test]
    fn test_startup_publishes_best_and_board() {
        let game = game(300);
        let effects = &game.presenter().effects;
        assert_eq!(effects[0], Effect::BestScoreChanged(300));
        assert!(matches!(effects[1], Effect::GridRedrawn(_)));
        assert_eq!(game.best_score(), 300);
    }

    #[test]
    fn test_unknown_key_ignored() {
        let mut game = game(0);
        game.presenter_mut().take();
        assert_eq!(game.handle_key("Space"), None);
        assert!(game.presenter().effects.is_empty());
    }

    #[test]
    fn test_restart_records_higher_score() {
        let mut game = game(0);
        game.session.load_grid(Grid::from_rows(&[
            [2, 2, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]));
        game.handle_move(Direction::Left);
        assert_eq!(game.session().score(), 4);

        game.restart();
        assert_eq!(game.store().read(), 4);
        assert_eq!(game.best_score(), 4);
        assert_eq!(game.session().score(), 0);
    }

    #[test]
    fn test_lower_score_does_not_overwrite() {
        let mut game = game(1000);
        game.restart();
        assert_eq!(game.store().writes(), 0);
        assert_eq!(game.best_score(), 1000);
    }
}
