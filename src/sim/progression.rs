//! Score counter and run state machine
//!
//! ```text
//! Start ──jump──▶ Playing ──hazard──▶ GameOver ──jump──▶ Playing
//!                    │                                    ▲
//!                    └──final tier threshold──▶ Win ──jump┘
//! ```
//!
//! Non-final tier thresholds bump `level` and stay in `Playing`.

use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::COIN_VALUE;
use crate::levels::LevelTable;

/// Enter `Playing` with a fully reset session.
///
/// Only valid from `Start`, `GameOver` or `Win`; returns false (and does
/// nothing) while already playing.
pub fn start_run(state: &mut GameState, seed: u64) -> bool {
    if state.phase == GamePhase::Playing {
        return false;
    }
    state.reset(seed);
    state.phase = GamePhase::Playing;
    log::info!("Run started (seed {})", seed);
    true
}

/// Award score for a batch of coins collected on one tick
pub fn award_coins(state: &mut GameState, count: u32) {
    if count == 0 {
        return;
    }
    state.coins_collected += u64::from(count);
    state.score += u64::from(count) * COIN_VALUE;
    state.events.push(GameEvent::CoinsCollected { count });
}

/// Hazard hit: the run is over
pub fn game_over(state: &mut GameState) {
    if state.phase != GamePhase::Playing {
        return;
    }
    state.phase = GamePhase::GameOver;
    state.events.push(GameEvent::GameOver { score: state.score });
    log::info!(
        "Game over at tick {} (score {}, level {})",
        state.frame_count,
        state.score,
        state.level
    );
}

/// Check the active tier's threshold: level up, or win on the final tier
pub fn evaluate(state: &mut GameState, levels: &LevelTable) {
    if state.phase != GamePhase::Playing {
        return;
    }

    let threshold = levels.get(state.level).score_to_next_level;
    if state.score < threshold {
        return;
    }

    if levels.is_final(state.level) {
        state.phase = GamePhase::Win;
        state.events.push(GameEvent::Win { score: state.score });
        log::info!("Run won at tick {} (score {})", state.frame_count, state.score);
    } else {
        state.level += 1;
        state.events.push(GameEvent::LevelUp { level: state.level });
        log::info!(
            "Level up: {} -> {} ({})",
            state.level - 1,
            state.level,
            levels.get(state.level).name
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing() -> GameState {
        let mut state = GameState::new(1);
        assert!(start_run(&mut state, 1));
        state
    }

    #[test]
    fn test_start_only_from_idle_or_terminal() {
        let mut state = GameState::new(1);
        assert!(start_run(&mut state, 2));
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(!start_run(&mut state, 3));
        assert_eq!(state.seed, 2);

        game_over(&mut state);
        assert!(start_run(&mut state, 4));

        state.phase = GamePhase::Win;
        assert!(start_run(&mut state, 5));
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_award_coins_scores_ten_each() {
        let mut state = playing();
        award_coins(&mut state, 3);
        award_coins(&mut state, 0);
        assert_eq!(state.score, 30);
        assert_eq!(state.coins_collected, 3);
        assert_eq!(state.events, vec![GameEvent::CoinsCollected { count: 3 }]);
    }

    #[test]
    fn test_level_up_at_threshold() {
        let levels = LevelTable::default();
        let mut state = playing();
        state.score = 40;
        evaluate(&mut state, &levels);
        assert_eq!(state.level, 1);

        state.score = 50;
        evaluate(&mut state, &levels);
        assert_eq!(state.level, 2);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.events, vec![GameEvent::LevelUp { level: 2 }]);
    }

    #[test]
    fn test_final_tier_wins_instead_of_leveling() {
        let levels = LevelTable::default();
        let mut state = playing();
        state.level = 5;
        state.score = 260;
        evaluate(&mut state, &levels);
        assert_eq!(state.level, 5);
        assert_eq!(state.phase, GamePhase::Win);
        assert_eq!(state.events, vec![GameEvent::Win { score: 260 }]);
    }

    #[test]
    fn test_terminal_states_ignore_evaluation() {
        let levels = LevelTable::default();
        let mut state = playing();
        game_over(&mut state);
        state.score = 500;
        evaluate(&mut state, &levels);
        assert_eq!(state.level, 1);
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_game_over_only_from_playing() {
        let mut state = GameState::new(1);
        game_over(&mut state);
        assert_eq!(state.phase, GamePhase::Start);
        assert!(state.events.is_empty());
    }
}
