//! Browser bridge
//!
//! The page owns the canvas/DOM, the input listeners and the
//! `requestAnimationFrame` loop. It forwards press/release edges here,
//! calls `frame` once per animation frame while it returns true, and reads
//! the published snapshot as JSON.

use wasm_bindgen::prelude::*;

use crate::highscores::{HighScore, LocalStorageStore};
use crate::levels::LevelTable;
use crate::session::{FrameStatus, Session};
use crate::settings::Settings;

#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Capy Run (web) starting...");
}

#[wasm_bindgen]
pub struct WebGame {
    session: Session,
}

#[wasm_bindgen]
impl WebGame {
    /// Create a game. `levels_json` optionally overrides the built-in tiers.
    #[wasm_bindgen(constructor)]
    pub fn new(levels_json: Option<String>) -> Result<WebGame, JsValue> {
        let levels = match levels_json {
            Some(json) => {
                LevelTable::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?
            }
            None => LevelTable::default(),
        };
        let seed = Settings::load()
            .seed
            .unwrap_or_else(|| js_sys::Date::now() as u64);
        let high_score = HighScore::load(Box::new(LocalStorageStore));
        Ok(WebGame {
            session: Session::new(levels, high_score, seed),
        })
    }

    /// Key/pointer/touch press. Returns true if the page should start (or
    /// keep) requesting animation frames.
    pub fn jump_start(&mut self) -> bool {
        self.session.jump_start() == FrameStatus::Continue
    }

    /// Key/pointer/touch release
    pub fn jump_end(&mut self) -> bool {
        self.session.jump_end() == FrameStatus::Continue
    }

    /// Window blur / pointer or touch cancel: the release may never arrive
    pub fn release_all(&mut self) -> bool {
        self.session.release_all() == FrameStatus::Continue
    }

    /// Advance one tick. Returns false when the loop should stop.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        self.session.frame(now_ms) == FrameStatus::Continue
    }

    /// Expire the level-up banner between frames
    pub fn poll_timers(&mut self, now_ms: f64) {
        self.session.poll_timers(now_ms);
    }

    /// Latest snapshot as JSON
    pub fn snapshot_json(&self) -> String {
        match serde_json::to_string(self.session.snapshot()) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Snapshot serialization failed: {}", e);
                String::from("null")
            }
        }
    }
}
