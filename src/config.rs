// src/config.rs
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable naming a JSON config file for the demo binary.
pub const CONFIG_ENV_VAR: &str = "HAND_SIGNS_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Quiet period a gesture must survive before it is spoken.
    pub narration_delay_ms: u64,
    /// Directory holding the gesture animations.
    pub asset_dir: PathBuf,
    pub simulation_fps: u32,
    pub simulation_seconds: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            narration_delay_ms: 300,
            asset_dir: PathBuf::from("gifs"),
            simulation_fps: 30,
            simulation_seconds: 12,
        }
    }
}

impl SessionConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("Invalid config in {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        if config.simulation_fps == 0 {
            return Err(anyhow::anyhow!("simulation_fps must be at least 1"));
        }
        Ok(config)
    }

    pub fn narration_delay(&self) -> Duration {
        Duration::from_millis(self.narration_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_timing() {
        let config = SessionConfig::default();
        assert_eq!(config.narration_delay(), Duration::from_millis(300));
        assert_eq!(config.asset_dir, PathBuf::from("gifs"));
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = SessionConfig::from_json(r#"{ "narration_delay_ms": 450 }"#).unwrap();
        assert_eq!(config.narration_delay_ms, 450);
        assert_eq!(config.simulation_fps, 30);
        assert_eq!(config.asset_dir, PathBuf::from("gifs"));
    }

    #[test]
    fn zero_fps_is_rejected() {
        assert!(SessionConfig::from_json(r#"{ "simulation_fps": 0 }"#).is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = SessionConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(format!("{err:#}").contains("/definitely/not/here.json"));
    }
}
