//! Per-board capability table
//!
//! Each supported board gets one `BoardConfig` describing its screen, entity
//! budgets and tuning constants. The config is selected once at startup and
//! injected into the simulation; nothing in `sim` ever sniffs hardware.
//! Unknown boards are a fatal startup error - refusing to run beats playing
//! with undefined tile sizes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Board capability table, the only knobs that vary between targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Board identifier, for logs
    pub name: String,
    /// Display size in pixels
    pub screen_w: u32,
    pub screen_h: u32,
    /// Asteroid pool capacity
    pub num_roids: usize,
    /// Shot pool capacity
    pub num_shots: usize,
    /// Seconds a shot stays live before it ages out
    pub shot_life: f32,
    /// Minimum seconds between fire attempts while the button is held
    pub fire_cooldown: f32,
    /// Seconds between batch reveals of destroyed asteroids; also the
    /// explosion lifetime
    pub respawn_interval: f32,
    /// Velocity kick applied to a newborn shot
    pub accel_shot: f32,
    /// Velocity kick per thrusting tick
    pub accel_ship: f32,
    /// Radians of ship rotation per turning tick
    pub turn_rate: f32,
    /// Per-axis velocity cap for every entity
    pub vmax: f32,
    /// Square sprite tile edge for ship/asteroid/explosion sheets, pixels
    pub tile_size: u32,
    /// Shot sprites use a smaller tile
    pub shot_tile_size: u32,
}

impl BoardConfig {
    /// 128x64 OLED, 12px tiles, three rocks
    pub fn macropad() -> Self {
        Self {
            name: "macropad".into(),
            screen_w: 128,
            screen_h: 64,
            num_roids: 3,
            num_shots: 3,
            shot_life: 0.4,
            fire_cooldown: 0.2,
            respawn_interval: 1.5,
            accel_shot: 4.0,
            accel_ship: 0.08,
            turn_rate: 0.15,
            vmax: 3.0,
            tile_size: 12,
            shot_tile_size: 3,
        }
    }

    /// 240x240 TFT, 30px tiles, four rocks
    pub fn funhouse() -> Self {
        Self {
            name: "funhouse".into(),
            screen_w: 240,
            screen_h: 240,
            num_roids: 4,
            num_shots: 4,
            shot_life: 1.0,
            fire_cooldown: 0.2,
            respawn_interval: 1.5,
            accel_shot: 5.0,
            accel_ship: 0.2,
            turn_rate: 0.15,
            vmax: 3.0,
            tile_size: 30,
            shot_tile_size: 3,
        }
    }

    /// Look up a board preset by name
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "macropad" => Some(Self::macropad()),
            "funhouse" => Some(Self::funhouse()),
            _ => None,
        }
    }

    /// Parse a config override from JSON (same shape `to_json` emits)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Screen size as wrap bounds for the simulation
    #[inline]
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.screen_w as f32, self.screen_h as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(BoardConfig::from_name("macropad"), Some(BoardConfig::macropad()));
        assert_eq!(BoardConfig::from_name("FunHouse"), Some(BoardConfig::funhouse()));
        assert_eq!(BoardConfig::from_name("gamegirl"), None);
    }

    #[test]
    fn test_preset_table() {
        let mp = BoardConfig::macropad();
        assert_eq!((mp.screen_w, mp.screen_h), (128, 64));
        assert_eq!(mp.num_roids, 3);
        assert_eq!(mp.tile_size, 12);

        let fh = BoardConfig::funhouse();
        assert_eq!((fh.screen_w, fh.screen_h), (240, 240));
        assert_eq!(fh.num_roids, 4);
        assert_eq!(fh.tile_size, 30);
        // The big display gets longer-lived, faster shots
        assert!(fh.shot_life > mp.shot_life);
        assert!(fh.accel_shot > mp.accel_shot);
    }

    #[test]
    fn test_json_round_trip() {
        let cfg = BoardConfig::funhouse();
        let json = cfg.to_json().unwrap();
        let back = BoardConfig::from_json(&json).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn test_json_rejects_garbage() {
        assert!(BoardConfig::from_json("{\"name\": \"half a config\"}").is_err());
        assert!(BoardConfig::from_json("not json").is_err());
    }
}
