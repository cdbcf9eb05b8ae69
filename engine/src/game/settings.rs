use serde::{Deserialize, Serialize};

use crate::config::Validate;

use super::types::GridSize;

/// Tuning knobs for one round. Defaults are the reference arcade values; the
/// grid is 40x30 cells (an 800x600 window at 20 px per cell).
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameSettings {
    pub grid: GridSize,
    pub initial_snake_length: usize,
    /// Ticks per second at level 1.
    pub base_tick_rate: u32,
    /// The tick rate never climbs past this, no matter the level.
    pub max_tick_rate: u32,
    pub points_per_level: u32,
    pub burst_particle_count: usize,
    /// Particle age limit, in ticks.
    pub particle_lifespan: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            grid: GridSize::new(40, 30),
            initial_snake_length: 3,
            base_tick_rate: 12,
            max_tick_rate: 25,
            points_per_level: 5,
            burst_particle_count: 10,
            particle_lifespan: 30,
        }
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if self.grid.width < 5 || self.grid.height < 5 {
            return Err("grid dimensions must be at least 5x5".to_string());
        }
        if self.grid.width > 100 || self.grid.height > 100 {
            return Err("grid dimensions must not exceed 100x100".to_string());
        }
        if self.initial_snake_length < 1 {
            return Err("initial snake length must be at least 1".to_string());
        }
        if self.initial_snake_length > self.grid.width.min(self.grid.height) {
            return Err("initial snake length must fit within the grid".to_string());
        }
        if self.base_tick_rate < 1 {
            return Err("base tick rate must be at least 1".to_string());
        }
        if self.max_tick_rate < self.base_tick_rate {
            return Err("max tick rate must not be below the base tick rate".to_string());
        }
        if self.max_tick_rate > 240 {
            return Err("max tick rate must not exceed 240".to_string());
        }
        if self.points_per_level < 1 {
            return Err("points per level must be at least 1".to_string());
        }
        if self.particle_lifespan < 1 {
            return Err("particle lifespan must be at least 1 tick".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(GameSettings::default().validate().is_ok());
    }

    #[test]
    fn test_tiny_grid_is_rejected() {
        let settings = GameSettings {
            grid: GridSize::new(4, 30),
            ..GameSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_max_rate_below_base_is_rejected() {
        let settings = GameSettings {
            base_tick_rate: 12,
            max_tick_rate: 11,
            ..GameSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_snake_longer_than_grid_is_rejected() {
        let settings = GameSettings {
            grid: GridSize::new(10, 10),
            initial_snake_length: 11,
            ..GameSettings::default()
        };
        assert!(settings.validate().is_err());
    }
}
