//! The matching engine: selection, resolution, scoring, countdown.
//!
//! ## State machine
//!
//! Idle (0 selected) → OneSelected (1) → Resolving (2, resolution
//! scheduled) → Idle. The engine starts with a freshly shuffled,
//! fully face-down deck and a running countdown.
//!
//! ## Timing
//!
//! The embedding calls [`MatchEngine::tick`] once per second. A tick
//! advances the virtual clock — firing any due resolution or flip-back
//! first — and then decrements the countdown. Nothing happens between
//! ticks, so a paused engine freezes pending resolutions rather than
//! canceling them; they fire on the first tick after resuming.
//!
//! ## Invalid input
//!
//! Selecting a face-up, matched, or unknown tile, selecting while two
//! tiles are already up, and acting on a paused or ended session are all
//! silent no-ops. The engine prefers permissive interaction over errors;
//! the only logged condition is the internal invariant violation of a
//! resolution firing without exactly two selected tiles.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::cards::{Tile, TileId};
use crate::clock::TimerQueue;
use crate::core::{EndReason, EventRecord, GameEvent, GameRng, GameStatus, SessionState};
use crate::rules::{FlipBack, GameRules};

/// Timed effects the engine schedules against its virtual clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
enum TimerTask {
    /// Evaluate the two selected tiles.
    Resolve,
    /// Return a mismatched pair to face-down.
    FlipBack { tiles: [TileId; 2] },
}

/// The matching-game engine, parameterized by a variant's rules.
///
/// Owns the deck, the selection buffer, the session counters, and the
/// virtual clock. All mutation goes through [`select_tile`],
/// [`tick`], and [`toggle_pause`].
///
/// [`select_tile`]: MatchEngine::select_tile
/// [`tick`]: MatchEngine::tick
/// [`toggle_pause`]: MatchEngine::toggle_pause
///
/// ```
/// use pairmatch::engine::MatchEngine;
/// use pairmatch::games::EmojiRules;
///
/// let mut game = MatchEngine::new(EmojiRules::new(), 42);
/// assert_eq!(game.tiles().len(), 16);
/// assert_eq!(game.total_pairs(), 8);
/// assert!(game.is_running());
/// ```
#[derive(Clone, Debug)]
pub struct MatchEngine<R: GameRules> {
    rules: R,
    tiles: Vec<Tile>,
    selected: SmallVec<[TileId; 2]>,
    timers: TimerQueue<TimerTask>,
    session: SessionState,
    history: Vec<EventRecord>,
}

impl<R: GameRules> MatchEngine<R> {
    /// Create an engine with a deck shuffled from the given seed.
    #[must_use]
    pub fn new(rules: R, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let tiles = rules.build_deck(&mut rng);
        assert!(
            !tiles.is_empty() && tiles.len() % 2 == 0,
            "Deck must hold a positive whole number of pairs"
        );

        let session = SessionState::new(rules.config().initial_seconds);
        Self {
            rules,
            tiles,
            selected: SmallVec::new(),
            timers: TimerQueue::new(),
            session,
            history: Vec::new(),
        }
    }

    // === Transition operations ===

    /// Select a tile, flipping it face-up.
    ///
    /// No-op when two tiles are already selected, the target is face-up
    /// or matched, the id is unknown, or the session is not running.
    /// The second selection of a pair schedules the resolution one
    /// resolve-delay ahead on the virtual clock.
    pub fn select_tile(&mut self, id: TileId) {
        if !self.session.is_running() || self.selected.len() == 2 {
            return;
        }
        match self.tiles.get(id.index()) {
            Some(tile) if tile.is_selectable() => {}
            _ => return,
        }

        self.tiles[id.index()].face_up = true;
        self.selected.push(id);
        self.record(GameEvent::TileFlipped { tile: id });

        if self.selected.len() == 2 {
            self.timers
                .schedule(self.rules.config().resolve_delay, TimerTask::Resolve);
        }
    }

    /// Advance the clock by one second.
    ///
    /// Fires due resolutions and flip-backs first, then decrements the
    /// countdown; at zero the session ends. No-op while paused or after
    /// the session has ended.
    pub fn tick(&mut self) {
        if !self.session.is_running() {
            return;
        }

        for task in self.timers.advance() {
            match task {
                TimerTask::Resolve => self.resolve(),
                TimerTask::FlipBack { tiles } => self.flip_back(tiles),
            }
        }

        // A resolution can clear the board and end the session mid-tick.
        if !self.session.is_running() {
            return;
        }

        self.session.remaining_seconds = self.session.remaining_seconds.saturating_sub(1);
        if self.session.remaining_seconds == 0 {
            self.end(EndReason::TimeUp);
        }
    }

    /// Pause or resume the session.
    ///
    /// While paused, `select_tile` and `tick` are no-ops and pending
    /// timers are frozen. No-op once the session has ended.
    pub fn toggle_pause(&mut self) {
        match self.session.status {
            GameStatus::Running => {
                self.session.status = GameStatus::Paused;
                self.record(GameEvent::Paused);
            }
            GameStatus::Paused => {
                self.session.status = GameStatus::Running;
                self.record(GameEvent::Resumed);
            }
            GameStatus::Ended(_) => {}
        }
    }

    // === Read accessors ===

    /// All tiles, in board order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Look up one tile.
    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.index())
    }

    /// The tiles currently selected and awaiting resolution.
    #[must_use]
    pub fn selected(&self) -> &[TileId] {
        &self.selected
    }

    /// The session counters.
    #[must_use]
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.session.score
    }

    /// Running maximum score, for variants that track it.
    #[must_use]
    pub fn high_score(&self) -> Option<i64> {
        self.rules
            .tracks_high_score()
            .then_some(self.session.high_score)
    }

    /// Current consecutive-match streak.
    #[must_use]
    pub fn combo(&self) -> u32 {
        self.session.combo
    }

    /// Pairs found so far.
    #[must_use]
    pub fn pairs_found(&self) -> u32 {
        self.session.pairs_found
    }

    /// Total pairs on the board.
    #[must_use]
    pub fn total_pairs(&self) -> u32 {
        (self.tiles.len() / 2) as u32
    }

    /// Seconds left on the countdown.
    #[must_use]
    pub fn remaining_seconds(&self) -> u32 {
        self.session.remaining_seconds
    }

    /// Is the session live (not paused, not ended)?
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.session.is_running()
    }

    /// Run status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.session.status
    }

    /// The countdown rendered as `M:SS`.
    #[must_use]
    pub fn clock(&self) -> String {
        self.session.clock()
    }

    /// Every transition recorded this session, in order.
    #[must_use]
    pub fn events(&self) -> &[EventRecord] {
        &self.history
    }

    /// The variant rules driving this engine.
    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    // === Internal transitions ===

    /// Evaluate the selected pair. Fired only from the scheduled task.
    fn resolve(&mut self) {
        let [first, second] = match self.selected.as_slice() {
            &[a, b] => [a, b],
            _ => {
                // Internal invariant violation, not bad input: log and
                // abort this resolution without touching state.
                warn!(
                    selected = self.selected.len(),
                    "resolution fired without exactly two selected tiles"
                );
                return;
            }
        };
        self.selected.clear();

        let first_face = self.tiles[first.index()].face.clone();
        let second_face = self.tiles[second.index()].face.clone();

        if first_face.matches(&second_face) {
            let points = self
                .rules
                .match_points(&first_face, &second_face, self.session.combo);
            self.tiles[first.index()].matched = true;
            self.tiles[second.index()].matched = true;
            self.session.pairs_found += 1;
            self.session.combo += 1;
            self.session.score += points;
            self.touch_high_score();

            debug!(%first_face, %second_face, points, combo = self.session.combo, "pair matched");
            self.record(GameEvent::PairMatched {
                tiles: [first, second],
                points,
            });

            if self.session.pairs_found == self.total_pairs() {
                self.end(EndReason::Cleared);
            }
        } else {
            self.session.combo = 0;
            self.session.score = self.rules.mismatch_score(self.session.score);

            debug!(%first_face, %second_face, "pair missed");
            self.record(GameEvent::PairMissed {
                tiles: [first, second],
            });

            match self.rules.flip_back() {
                FlipBack::Immediate => self.flip_back([first, second]),
                FlipBack::Deferred => {
                    self.timers.schedule(
                        self.rules.config().flip_back_delay,
                        TimerTask::FlipBack {
                            tiles: [first, second],
                        },
                    );
                }
            }
        }
    }

    /// Return a mismatched pair to face-down.
    fn flip_back(&mut self, tiles: [TileId; 2]) {
        for id in tiles {
            self.tiles[id.index()].face_up = false;
        }
        self.record(GameEvent::FlippedBack { tiles });
    }

    /// End the session. `Ended` is terminal.
    fn end(&mut self, reason: EndReason) {
        self.session.status = GameStatus::Ended(reason);
        debug!(?reason, score = self.session.score, "session ended");
        self.record(GameEvent::Ended { reason });
    }

    fn touch_high_score(&mut self) {
        if self.rules.tracks_high_score() && self.session.score > self.session.high_score {
            self.session.high_score = self.session.score;
        }
    }

    fn record(&mut self, event: GameEvent) {
        let sequence = self.history.len() as u32;
        self.history.push(EventRecord { sequence, event });
    }
}
