use crate::pacer::TickRate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}: {source}")]
    Io { path: String, source: std::io::Error },
    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Pointer settings fixed for the lifetime of a [`Mouse`](crate::Mouse).
///
/// Hold fields left unset derive from the tick rate (a tenth of a second for
/// presses and gestures, half a second after smart magnify).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerSettings {
    pub tick_rate: TickRate,
    #[serde(with = "seconds")]
    pub default_duration: Duration,
    pub default_magnification: f64,
    pub press_hold_ticks: Option<u32>,
    pub gesture_hold_ticks: Option<u32>,
    pub smart_magnify_hold_ticks: Option<u32>,
    pub gesture_steps: u32,
    pub close_enough: f64,
    #[serde(with = "seconds")]
    pub timeout_grace: Duration,
}

impl Default for PointerSettings {
    fn default() -> Self {
        Self {
            tick_rate: TickRate::DEFAULT,
            default_duration: Duration::from_millis(200),
            default_magnification: 1.0,
            press_hold_ticks: None,
            gesture_hold_ticks: None,
            smart_magnify_hold_ticks: None,
            gesture_steps: 50,
            close_enough: 1.0,
            timeout_grace: Duration::from_secs(1),
        }
    }
}

impl PointerSettings {
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        let settings: PointerSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|source| SettingsError::Io { path: path.display().to_string(), source })?;
        Self::from_json_str(&json)
    }

    pub fn with_tick_rate(mut self, tick_rate: TickRate) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn with_default_duration(mut self, duration: Duration) -> Self {
        self.default_duration = duration;
        self
    }

    pub fn with_gesture_steps(mut self, steps: u32) -> Self {
        self.gesture_steps = steps;
        self
    }

    pub fn press_hold_ticks(&self) -> u32 {
        self.press_hold_ticks.unwrap_or_else(|| self.tick_rate.fraction(10))
    }

    pub fn gesture_hold_ticks(&self) -> u32 {
        self.gesture_hold_ticks.unwrap_or_else(|| self.tick_rate.fraction(10))
    }

    pub fn smart_magnify_hold_ticks(&self) -> u32 {
        self.smart_magnify_hold_ticks.unwrap_or_else(|| self.tick_rate.fraction(2))
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.gesture_steps == 0 {
            return Err(SettingsError::Invalid("gesture_steps must be at least 1".into()));
        }
        if !(self.close_enough.is_finite() && self.close_enough > 0.0) {
            return Err(SettingsError::Invalid(format!(
                "close_enough must be a positive number, got {}",
                self.close_enough
            )));
        }
        if !self.default_magnification.is_finite() {
            return Err(SettingsError::Invalid("default_magnification must be finite".into()));
        }
        Ok(())
    }
}

/// Durations as floating point seconds.
mod seconds {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(duration.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
    }
}
