//! Tick-rate settings
//!
//! Arena geometry is fixed; only task cadence and the key-wait mode can be
//! changed, from an optional JSON file and then from the command line.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{AI_BASE_PERIOD_MS, PHYSICS_PERIOD_MS, RENDER_PERIOD_MS};
use crate::error::{Error, Result};

/// How the main loop waits for keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WaitMode {
    /// Redraw on every render tick while waiting
    #[default]
    KeepTimers,
    /// Physics and AI keep running while waiting, but the display only
    /// refreshes after a key
    HaltTimers,
}

impl WaitMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WaitMode::KeepTimers => "keep",
            WaitMode::HaltTimers => "halt",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "keep" | "keep_timers" | "run" => Some(WaitMode::KeepTimers),
            "halt" | "halt_timers" => Some(WaitMode::HaltTimers),
            _ => None,
        }
    }
}

/// Periods handed to the scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickRates {
    pub render: Duration,
    pub physics: Duration,
    pub ai_base: Duration,
}

impl Default for TickRates {
    fn default() -> Self {
        Settings::default().tick_rates()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub render_period_ms: u64,
    pub physics_period_ms: u64,
    /// AI period while the human has no points
    pub ai_base_period_ms: u64,
    pub wait_mode: WaitMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            render_period_ms: RENDER_PERIOD_MS,
            physics_period_ms: PHYSICS_PERIOD_MS,
            ai_base_period_ms: AI_BASE_PERIOD_MS,
            wait_mode: WaitMode::KeepTimers,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| Error::SettingsRead {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from `path` when given, otherwise use the defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.render_period_ms == 0 {
            return Err(Error::ZeroPeriod("render_period_ms"));
        }
        if self.physics_period_ms == 0 {
            return Err(Error::ZeroPeriod("physics_period_ms"));
        }
        if self.ai_base_period_ms == 0 {
            return Err(Error::ZeroPeriod("ai_base_period_ms"));
        }
        Ok(())
    }

    pub fn tick_rates(&self) -> TickRates {
        TickRates {
            render: Duration::from_millis(self.render_period_ms),
            physics: Duration::from_millis(self.physics_period_ms),
            ai_base: Duration::from_millis(self.ai_base_period_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_calculator_timers() {
        let rates = Settings::default().tick_rates();
        assert_eq!(rates.render, Duration::from_millis(25));
        assert_eq!(rates.physics, Duration::from_millis(25));
        assert_eq!(rates.ai_base, Duration::from_millis(50));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "physics_period_ms": 40, "wait_mode": "halt_timers" }"#)
            .unwrap();
        assert_eq!(settings.physics_period_ms, 40);
        assert_eq!(settings.render_period_ms, RENDER_PERIOD_MS);
        assert_eq!(settings.wait_mode, WaitMode::HaltTimers);
    }

    #[test]
    fn test_zero_period_rejected() {
        let err = Settings::from_json(r#"{ "render_period_ms": 0 }"#).unwrap_err();
        assert!(matches!(err, Error::ZeroPeriod("render_period_ms")));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(Error::SettingsParse(_))
        ));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = Settings::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }

    #[test]
    fn test_wait_mode_names() {
        assert_eq!(WaitMode::from_str("HALT"), Some(WaitMode::HaltTimers));
        assert_eq!(WaitMode::from_str("keep"), Some(WaitMode::KeepTimers));
        assert_eq!(WaitMode::from_str("sometimes"), None);
        assert_eq!(WaitMode::from_str(WaitMode::HaltTimers.as_str()), Some(WaitMode::HaltTimers));
    }
}
