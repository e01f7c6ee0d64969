use serde::{Deserialize, Serialize};

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// Construction-time tuning of a simulation. The defaults reproduce the
/// classic game: a 20x20 grid, one move every 0.5 s, speeding up by 0.02 s
/// per food down to 0.1 s, 0.2 points per food.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationSettings {
    pub grid_size: i32,
    pub initial_delay: f32,
    pub min_delay: f32,
    pub delay_decrement: f32,
    pub score_increment: f32,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            grid_size: 20,
            initial_delay: 0.5,
            min_delay: 0.1,
            delay_decrement: 0.02,
            score_increment: 0.2,
        }
    }
}

impl Validate for SimulationSettings {
    fn validate(&self) -> Result<(), String> {
        if self.grid_size < 1 {
            return Err(format!(
                "Grid size must be positive, got {}",
                self.grid_size
            ));
        }
        if self.initial_delay <= 0.0 {
            return Err("Initial delay must be positive".to_string());
        }
        if self.min_delay <= 0.0 {
            return Err("Minimum delay must be positive".to_string());
        }
        if self.min_delay > self.initial_delay {
            return Err("Minimum delay must not exceed the initial delay".to_string());
        }
        if self.delay_decrement < 0.0 {
            return Err("Delay decrement must not be negative".to_string());
        }
        if self.score_increment <= 0.0 {
            return Err("Score increment must be positive".to_string());
        }
        Ok(())
    }
}
