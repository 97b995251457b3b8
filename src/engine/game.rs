//! The puzzle engine: one `GameState` behind a `Store`, plus the operations
//! UI code calls in response to player input.
//!
//! ## Auto-solve guard
//!
//! While an auto-solve sequence is running, player operations
//! (`select_tile`, `shuffle_tiles`, `deselect_all`, `submit_guess`) are
//! ignored: they neither change state nor notify subscribers. This keeps the
//! sequence's selections and the solved prefix consistent.

use std::time::Duration;

use tracing::{debug, instrument, trace};

use crate::core::{
    EngineConfig, GameRng, GameState, GuessOutcome, GuessVerdict, LoadError, ShapeError,
};
use crate::share;

use super::autosolve::{AutoSolve, Scheduler, SolveAction};
use super::reducer;
use super::store::{Store, SubscriptionId};

/// A live puzzle session.
#[derive(Debug)]
pub struct Engine {
    store: Store<GameState>,
    rng: GameRng,
    config: EngineConfig,
    solve: Option<AutoSolve>,
}

impl Engine {
    /// Create an engine with the default configuration.
    ///
    /// `rows` must hold 4 groups of 4 words followed by a label.
    ///
    /// ```
    /// use connections_engine::Engine;
    ///
    /// let engine = Engine::create(&[
    ///     ["A", "B", "C", "D", "Fruits"],
    ///     ["E", "F", "G", "H", "Colors"],
    ///     ["I", "J", "K", "L", "Tools"],
    ///     ["M", "N", "O", "P", "Verbs"],
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(engine.state().positions.len(), 16);
    /// ```
    pub fn create<G, S>(rows: &[G]) -> Result<Self, ShapeError>
    where
        G: AsRef<[S]>,
        S: AsRef<str>,
    {
        Self::with_config(rows, EngineConfig::default())
    }

    /// Create an engine with an explicit configuration.
    #[instrument(skip(rows), fields(groups = rows.len()))]
    pub fn with_config<G, S>(rows: &[G], config: EngineConfig) -> Result<Self, ShapeError>
    where
        G: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let state = GameState::from_groups(rows, &mut rng)?;
        debug!(seed = rng.seed(), "puzzle created");

        Ok(Self {
            store: Store::new(state),
            rng,
            config,
            solve: None,
        })
    }

    /// Decode a share code and create an engine from it.
    pub fn from_code(code: &str, config: EngineConfig) -> Result<Self, LoadError> {
        let rows = share::decode(code)?;
        Ok(Self::with_config(&rows, config)?)
    }

    // === Queries ===

    /// Current snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        self.store.get()
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Check if an auto-solve sequence is in progress.
    #[must_use]
    pub fn is_solving(&self) -> bool {
        self.solve.is_some()
    }

    // === Subscribers ===

    /// Register a callback for state changes. It runs immediately with the
    /// current state, then after every committed update.
    pub fn subscribe(&mut self, callback: impl FnMut(&GameState) + 'static) -> SubscriptionId {
        self.store.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    // === Player Operations ===

    /// Toggle selection of the tile at grid `position`.
    #[instrument(skip(self))]
    pub fn select_tile(&mut self, position: usize) {
        if self.ignored("select_tile") {
            return;
        }
        self.store.update(|state| reducer::select_tile(state, position));
    }

    /// Shuffle the unsolved tiles.
    #[instrument(skip(self))]
    pub fn shuffle_tiles(&mut self) {
        if self.ignored("shuffle_tiles") {
            return;
        }
        let rng = &mut self.rng;
        self.store.update(|state| reducer::shuffle_unsolved(state, rng));
    }

    #[instrument(skip(self))]
    pub fn deselect_all(&mut self) {
        if self.ignored("deselect_all") {
            return;
        }
        self.store.update(reducer::deselect_all);
    }

    /// Submit the current selection.
    ///
    /// Rejections (wrong size, no mistakes left, repeated guess, auto-solve
    /// running) are reported in the outcome's `verdict`, never as errors.
    /// Every call is rejected as `Busy` while auto-solve runs, whatever
    /// `user_submitted` says.
    #[instrument(skip(self))]
    pub fn submit_guess(&mut self, user_submitted: bool) -> GuessOutcome {
        if self.ignored("submit_guess") {
            return GuessOutcome::unscored(GuessVerdict::Busy, false);
        }
        self.commit_guess(user_submitted)
    }

    fn commit_guess(&mut self, user_submitted: bool) -> GuessOutcome {
        let outcome = self
            .store
            .update_with(|state| reducer::submit_guess(state, user_submitted));
        debug!(
            verdict = ?outcome.verdict,
            off_by = outcome.off_by,
            already_guessed = outcome.already_guessed,
            "guess submitted"
        );
        outcome
    }

    // === Auto-solve ===

    /// Begin revealing the remaining groups.
    ///
    /// Clears the selection and sorts the unsolved tiles into group order in
    /// one update, then returns the delay before the first `advance_solve`.
    /// Returns `None` without doing anything if a sequence is already running.
    #[instrument(skip(self))]
    pub fn start_solve(&mut self) -> Option<Duration> {
        if self.solve.is_some() {
            debug!("auto-solve already running");
            return None;
        }

        self.store.update(|state| reducer::sort_unsolved(&reducer::deselect_all(state)));
        let plan = AutoSolve::new(self.state().first_unsolved_index());
        debug!(groups = plan.groups_remaining(), "auto-solve started");
        self.solve = Some(plan);
        Some(self.config.timing.settle)
    }

    /// Apply the next auto-solve step.
    ///
    /// Returns the delay to wait before calling again, or `None` once the
    /// sequence has finished or was cancelled.
    pub fn advance_solve(&mut self) -> Option<Duration> {
        let action = self.solve.as_mut()?.next();
        match action {
            Some(SolveAction::Select(position)) => {
                trace!(position, "auto-solve select");
                self.store.update(|state| reducer::append_selection(state, position));
                Some(self.config.timing.select)
            }
            Some(SolveAction::Submit) => {
                self.commit_guess(false);
                Some(self.config.timing.reveal)
            }
            None => {
                debug!("auto-solve finished");
                self.solve = None;
                None
            }
        }
    }

    /// Stop a running auto-solve sequence. Returns false if none was running.
    #[instrument(skip(self))]
    pub fn cancel_solve(&mut self) -> bool {
        self.solve.take().is_some()
    }

    /// Reveal every remaining group, waiting between steps with `scheduler`.
    ///
    /// Does nothing if a sequence is already running.
    pub fn solve_remaining(&mut self, scheduler: &mut impl Scheduler) {
        let mut delay = self.start_solve();
        while let Some(wait) = delay {
            scheduler.wait(wait);
            delay = self.advance_solve();
        }
    }

    fn ignored(&self, operation: &'static str) -> bool {
        if self.solve.is_some() {
            debug!(operation, "ignored during auto-solve");
            return true;
        }
        false
    }
}
