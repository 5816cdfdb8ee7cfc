//! Difficulty tiers
//!
//! The table is ordered and 1-indexed: level 1 is `levels[0]`. Reaching a
//! tier's `score_to_next_level` advances to the next tier, or wins the run
//! on the final tier.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, LevelTableError};

/// Tuning for a single difficulty tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelConfig {
    pub name: String,
    /// Cumulative score needed to leave this tier
    pub score_to_next_level: u64,
    /// Horizontal player speed (pixels per tick)
    pub game_speed: f32,
    /// Ticks between obstacle spawns
    pub obstacle_spawn_rate: u32,
    /// Ticks between coin spawns
    pub coin_spawn_rate: u32,
    /// Ticks between enemy spawns
    pub enemy_spawn_rate: u32,
    /// Enemy patrol speed (pixels per tick)
    pub enemy_speed: f32,
}

impl LevelConfig {
    fn tier(
        name: &str,
        score_to_next_level: u64,
        game_speed: f32,
        spawn_rates: (u32, u32, u32),
        enemy_speed: f32,
    ) -> Self {
        Self {
            name: name.to_string(),
            score_to_next_level,
            game_speed,
            obstacle_spawn_rate: spawn_rates.0,
            coin_spawn_rate: spawn_rates.1,
            enemy_spawn_rate: spawn_rates.2,
            enemy_speed,
        }
    }
}

/// Validated, ordered list of tiers
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LevelTable {
    levels: Vec<LevelConfig>,
}

impl Default for LevelTable {
    fn default() -> Self {
        Self {
            levels: vec![
                LevelConfig::tier("Muddy Puddle", 50, 5.0, (150, 70, 300), 1.5),
                LevelConfig::tier("Grassy Plains", 100, 6.0, (90, 80, 200), 2.0),
                LevelConfig::tier("The Bumpy Road", 150, 7.0, (80, 90, 150), 2.5),
                LevelConfig::tier("Germ Warfare", 200, 8.0, (70, 100, 120), 3.0),
                LevelConfig::tier("Capy-pocalypse!", 250, 10.0, (60, 110, 100), 3.5),
            ],
        }
    }
}

impl LevelTable {
    /// Build a table, rejecting zero spawn rates and non-increasing thresholds
    pub fn new(levels: Vec<LevelConfig>) -> Result<Self, LevelTableError> {
        if levels.is_empty() {
            return Err(LevelTableError::Empty);
        }

        let mut previous: Option<u64> = None;
        for (i, config) in levels.iter().enumerate() {
            let level = i + 1;
            for (field, rate) in [
                ("obstacleSpawnRate", config.obstacle_spawn_rate),
                ("coinSpawnRate", config.coin_spawn_rate),
                ("enemySpawnRate", config.enemy_spawn_rate),
            ] {
                if rate == 0 {
                    return Err(LevelTableError::NonPositiveSpawnRate {
                        level,
                        name: config.name.clone(),
                        field,
                        value: i64::from(rate),
                    });
                }
            }

            if let Some(prev) = previous {
                if config.score_to_next_level <= prev {
                    return Err(LevelTableError::NonIncreasingThreshold {
                        level,
                        name: config.name.clone(),
                        threshold: config.score_to_next_level,
                        previous: prev,
                    });
                }
            }
            previous = Some(config.score_to_next_level);
        }

        Ok(Self { levels })
    }

    /// Parse a JSON array of tiers (camelCase keys) and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let levels: Vec<LevelConfig> = serde_json::from_str(json)?;
        Ok(Self::new(levels)?)
    }

    /// Config for a 1-based level (clamped to the table bounds)
    pub fn get(&self, level: u32) -> &LevelConfig {
        let idx = (level.max(1) as usize - 1).min(self.levels.len() - 1);
        &self.levels[idx]
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// True if `level` is the last tier (reaching its threshold wins)
    pub fn is_final(&self, level: u32) -> bool {
        level as usize >= self.levels.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LevelConfig> {
        self.levels.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_is_valid() {
        let table = LevelTable::default();
        assert_eq!(table.len(), 5);
        assert!(LevelTable::new(table.iter().cloned().collect()).is_ok());
        assert_eq!(table.get(1).name, "Muddy Puddle");
        assert_eq!(table.get(5).name, "Capy-pocalypse!");
        assert!(table.is_final(5));
        assert!(!table.is_final(4));
    }

    #[test]
    fn test_get_clamps_out_of_range() {
        let table = LevelTable::default();
        assert_eq!(table.get(0).name, "Muddy Puddle");
        assert_eq!(table.get(99).name, "Capy-pocalypse!");
    }

    #[test]
    fn test_rejects_zero_spawn_rate() {
        let mut levels: Vec<_> = LevelTable::default().iter().cloned().collect();
        levels[2].coin_spawn_rate = 0;
        let err = LevelTable::new(levels).unwrap_err();
        assert!(matches!(
            err,
            LevelTableError::NonPositiveSpawnRate { level: 3, field: "coinSpawnRate", .. }
        ));
    }

    #[test]
    fn test_rejects_non_increasing_thresholds() {
        let mut levels: Vec<_> = LevelTable::default().iter().cloned().collect();
        levels[1].score_to_next_level = 50;
        let err = LevelTable::new(levels).unwrap_err();
        assert_eq!(
            err,
            LevelTableError::NonIncreasingThreshold {
                level: 2,
                name: "Grassy Plains".to_string(),
                threshold: 50,
                previous: 50,
            }
        );
    }

    #[test]
    fn test_rejects_empty_table() {
        assert_eq!(LevelTable::new(Vec::new()), Err(LevelTableError::Empty));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"name": "Only", "scoreToNextLevel": 30, "gameSpeed": 4,
             "obstacleSpawnRate": 100, "coinSpawnRate": 50,
             "enemySpawnRate": 200, "enemySpeed": 1.0}
        ]"#;
        let table = LevelTable::from_json(json).unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.is_final(1));
        assert_eq!(table.get(1).coin_spawn_rate, 50);
    }

    #[test]
    fn test_from_json_rejects_negative_rate() {
        let json = r#"[
            {"name": "Bad", "scoreToNextLevel": 30, "gameSpeed": 4,
             "obstacleSpawnRate": -1, "coinSpawnRate": 50,
             "enemySpawnRate": 200, "enemySpeed": 1.0}
        ]"#;
        assert!(matches!(
            LevelTable::from_json(json),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_json_round_trips_default() {
        let json = serde_json::to_string(&LevelTable::default()).unwrap();
        assert_eq!(LevelTable::from_json(&json).unwrap(), LevelTable::default());
    }
}
