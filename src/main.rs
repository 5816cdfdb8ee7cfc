//! Capy Run entry point
//!
//! The web build is driven from JavaScript through `capy_run::web`. Natively
//! this runs a headless session, optionally with a simple autopilot, and
//! logs the outcome.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use capy_run::consts::*;
    use capy_run::highscores::{FileStore, HighScore};
    use capy_run::sim::Snapshot;
    use capy_run::{FrameStatus, Session, Settings};

    /// Nominal frame length for the banner timer
    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Start a jump when a hazard's left edge is this close to the player's right edge
    const JUMP_LOOKAHEAD: f32 = 40.0;
    /// Ticks to hold the jump
    const JUMP_HOLD_TICKS: u32 = 12;

    /// Jumps over the nearest hazard ahead
    #[derive(Default)]
    struct Autopilot {
        holding: u32,
    }

    impl Autopilot {
        fn drive(&mut self, session: &mut Session) {
            if self.holding > 0 {
                self.holding -= 1;
                if self.holding == 0 {
                    session.jump_end();
                }
                return;
            }
            if hazard_ahead(session.snapshot()) && session.snapshot().player.grounded {
                session.jump_start();
                self.holding = JUMP_HOLD_TICKS;
            }
        }
    }

    fn hazard_ahead(snap: &Snapshot) -> bool {
        let front = snap.player.x + PLAYER_WIDTH;
        let near = |x: f32, width: f32| x + width > snap.player.x && x - front < JUMP_LOOKAHEAD;
        snap.obstacles.iter().any(|o| near(o.x, OBSTACLE_WIDTH))
            || snap.enemies.iter().any(|e| near(e.x, ENEMY_SIZE))
    }

    fn seed_from_clock() -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default()
    }

    pub fn run() -> std::process::ExitCode {
        let settings = Settings::load();
        let levels = match settings.level_table() {
            Ok(levels) => levels,
            Err(e) => {
                log::error!("Invalid level table: {}", e);
                return std::process::ExitCode::FAILURE;
            }
        };

        let path = settings
            .high_score_path
            .clone()
            .unwrap_or_else(FileStore::default_path);
        let high_score = HighScore::load(Box::new(FileStore::new(path)));
        let seed = settings.seed.unwrap_or_else(seed_from_clock);

        let mut session = Session::new(levels, high_score, seed);
        let mut autopilot = Autopilot::default();

        session.jump_start();
        session.jump_end();

        let mut now_ms = 0.0;
        for _ in 0..settings.demo_max_ticks {
            if settings.autopilot {
                autopilot.drive(&mut session);
            }
            now_ms += FRAME_MS;
            if session.frame(now_ms) == FrameStatus::Stop {
                break;
            }
        }

        let snap = session.snapshot();
        log::info!(
            "Run finished: {:?} after {} ticks, score {}, level {} ({}), high score {}",
            snap.phase,
            snap.frame_count,
            snap.score,
            snap.level,
            snap.level_name,
            snap.high_score
        );
        println!(
            "{:?}: score {} on level {} ({} ticks), high score {}",
            snap.phase, snap.score, snap.level, snap.frame_count, snap.high_score
        );
        std::process::ExitCode::SUCCESS
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    env_logger::init();
    log::info!("Capy Run (native, headless) starting...");
    headless::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is capy_run::web::wasm_main, this is just to satisfy the compiler
}
