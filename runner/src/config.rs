use std::io::ErrorKind;

use serde::{Deserialize, Serialize};
use snake_core::{SimulationSettings, Validate};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunnerConfig {
    pub simulation: SimulationSettings,
    /// Simulated per-frame delta passed to `step`, in seconds.
    pub frame_dt: f32,
    /// Total frame budget across all games.
    pub frames: u64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            simulation: SimulationSettings::default(),
            frame_dt: 1.0 / 60.0,
            frames: 2000,
        }
    }
}

impl Validate for RunnerConfig {
    fn validate(&self) -> Result<(), String> {
        self.simulation.validate()?;
        if self.frame_dt <= 0.0 {
            return Err("Frame delta must be positive".to_string());
        }
        if self.frames < 1 {
            return Err("Frame budget must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Reads a YAML config, falling back to defaults when no path is given or
/// the file does not exist. Parse and validation failures are surfaced.
pub fn load_or_default(path: Option<&str>) -> Result<RunnerConfig, String> {
    let Some(path) = path else {
        return Ok(RunnerConfig::default());
    };

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Ok(RunnerConfig::default());
        }
        Err(err) => return Err(format!("Failed to read config file: {}", err)),
    };

    let config: RunnerConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("Failed to deserialize config: {}", e))?;
    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;
    Ok(config)
}
