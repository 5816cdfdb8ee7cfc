//! Session driver
//!
//! Owns one `GameState` plus everything around the tick that is not
//! simulation: the input edge queue, the high score, the level-up banner
//! timer and the latest published snapshot. Any cooperative loop (browser
//! animation frames, a native loop, a test) drives it by calling
//! [`Session::frame`] and stopping when it returns [`FrameStatus::Stop`].

use crate::consts::LEVEL_UP_BANNER_MS;
use crate::highscores::HighScore;
use crate::levels::LevelTable;
use crate::sim::{GameEvent, GamePhase, GameState, Snapshot, TickInput, progression, tick};

pub use crate::sim::{FrameStatus, InputEdge};

/// Input edges waiting for the next tick.
///
/// Repeated jump-starts while the jump is already held (key repeat, a
/// second pointer) are dropped, as are releases with nothing held. Hosts
/// can lose a release (blur, pointer leaving the window, touch cancel), so
/// the latch is also cleared by [`InputQueue::reset`].
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pending: Vec<InputEdge>,
    held: bool,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an edge; returns false if it was debounced away
    pub fn push(&mut self, edge: InputEdge) -> bool {
        match edge {
            InputEdge::JumpStart if self.held => return false,
            InputEdge::JumpEnd if !self.held => return false,
            InputEdge::JumpStart => self.held = true,
            InputEdge::JumpEnd => self.held = false,
        }
        self.pending.push(edge);
        true
    }

    /// Take everything queued since the last drain
    pub fn drain(&mut self) -> TickInput {
        TickInput {
            edges: std::mem::take(&mut self.pending),
        }
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drop pending edges but keep the held state
    pub fn clear_pending(&mut self) {
        self.pending.clear();
    }

    /// Forget the held state and everything pending
    pub fn reset(&mut self) {
        self.pending.clear();
        self.held = false;
    }
}

/// Wall-clock timer for the transient "level up" advisory.
///
/// Raising it again before it expires restarts the countdown.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LevelUpBanner {
    deadline_ms: Option<f64>,
}

impl LevelUpBanner {
    pub fn raise(&mut self, now_ms: f64) {
        self.deadline_ms = Some(now_ms + LEVEL_UP_BANNER_MS);
    }

    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }

    /// Expire the banner if its time is up; returns whether it is still shown
    pub fn poll(&mut self, now_ms: f64) -> bool {
        if let Some(deadline) = self.deadline_ms {
            if now_ms >= deadline {
                self.deadline_ms = None;
            }
        }
        self.is_visible()
    }

    pub fn is_visible(&self) -> bool {
        self.deadline_ms.is_some()
    }
}

/// One player's game: state machine, tick driver and read model
#[derive(Debug)]
pub struct Session {
    state: GameState,
    levels: LevelTable,
    high_score: HighScore,
    input: InputQueue,
    banner: LevelUpBanner,
    snapshot: Snapshot,
    base_seed: u64,
    runs: u64,
}

impl Session {
    pub fn new(levels: LevelTable, high_score: HighScore, base_seed: u64) -> Self {
        let state = GameState::new(base_seed);
        let snapshot = Snapshot::capture(&state, &levels, high_score.best(), false);
        Self {
            state,
            levels,
            high_score,
            input: InputQueue::new(),
            banner: LevelUpBanner::default(),
            snapshot,
            base_seed,
            runs: 0,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Read-only access to the simulation (never mid-tick)
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn high_score(&self) -> u64 {
        self.high_score.best()
    }

    /// Latest published snapshot
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Whether the driver should be requesting frames
    pub fn is_running(&self) -> bool {
        self.state.phase == GamePhase::Playing
    }

    /// Feed an input edge.
    ///
    /// Outside `Playing`, a jump-start begins a fresh run instead of being
    /// queued. Returns `Continue` when the driver should (keep) scheduling
    /// frames.
    pub fn push_input(&mut self, edge: InputEdge) -> FrameStatus {
        // Outside a run a press is always fresh, even if the previous
        // release never arrived
        if edge == InputEdge::JumpStart && !self.is_running() {
            self.input.reset();
        }
        if !self.input.push(edge) {
            return self.status();
        }

        if edge == InputEdge::JumpStart && self.state.phase != GamePhase::Playing {
            self.input.clear_pending();
            self.start_run();
        }
        self.status()
    }

    pub fn jump_start(&mut self) -> FrameStatus {
        self.push_input(InputEdge::JumpStart)
    }

    pub fn jump_end(&mut self) -> FrameStatus {
        self.push_input(InputEdge::JumpEnd)
    }

    /// Treat the jump as released (focus lost, touch cancelled). Queues a
    /// release for the next tick if anything was held.
    pub fn release_all(&mut self) -> FrameStatus {
        if self.input.is_held() {
            self.input.push(InputEdge::JumpEnd);
        }
        self.status()
    }

    /// Advance exactly one tick and publish a snapshot.
    ///
    /// `now_ms` is wall-clock time, used only for the level-up banner.
    pub fn frame(&mut self, now_ms: f64) -> FrameStatus {
        self.poll_timers(now_ms);

        let input = self.input.drain();
        let status = tick(&mut self.state, &input, &self.levels);

        for event in &self.state.events {
            match *event {
                GameEvent::LevelUp { .. } => self.banner.raise(now_ms),
                GameEvent::GameOver { score } | GameEvent::Win { score } => {
                    self.high_score.record(score);
                }
                GameEvent::CoinsCollected { .. } => {}
            }
        }

        self.publish();
        status
    }

    /// Run the banner timer. Touches nothing but the advisory flag, so it
    /// may be called at any rate, including while no frames are scheduled.
    pub fn poll_timers(&mut self, now_ms: f64) {
        let visible = self.banner.poll(now_ms);
        if visible != self.snapshot.show_level_up {
            self.snapshot = Snapshot {
                show_level_up: visible,
                ..self.snapshot.clone()
            };
        }
    }

    fn start_run(&mut self) {
        let seed = self.base_seed.wrapping_add(self.runs);
        self.runs += 1;
        progression::start_run(&mut self.state, seed);
        self.banner.cancel();
        self.publish();
    }

    fn publish(&mut self) {
        self.snapshot = Snapshot::capture(
            &self.state,
            &self.levels,
            self.high_score.best(),
            self.banner.is_visible(),
        );
    }

    fn status(&self) -> FrameStatus {
        if self.is_running() {
            FrameStatus::Continue
        } else {
            FrameStatus::Stop
        }
    }
}
