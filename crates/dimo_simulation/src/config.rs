//! Конфигурация симуляции: SimulationConfig (JSON) + ConfigError
//!
//! Все конфиги валидируются при создании (fail fast), а не молча
//! игнорируются в runtime. Поля опциональны — дефолты совпадают с
//! параметрами из редактора сцены.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::logger::LogLevel;
use crate::pursuit::PursuitConfig;
use crate::trigger::TriggerGateConfig;

/// Ошибки конфигурации (валидация + загрузка)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be positive and finite, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must be non-negative and finite, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("tick_hz {value} does not give a non-zero representable timestep")]
    TickRate { value: f64 },

    #[error("{field} must be finite")]
    NotFinite { field: &'static str },

    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Проверка: value > 0 и конечное
pub(crate) fn ensure_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

/// Проверка: value >= 0 и конечное
pub(crate) fn ensure_non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

pub(crate) fn ensure_not_empty(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        Err(ConfigError::Empty { field })
    } else {
        Ok(())
    }
}

/// Конфиг headless симуляции (seed, tick rate, параметры hunter'а и двери)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Seed для DeterministicRng
    pub seed: u64,
    /// Частота FixedUpdate (Hz)
    pub tick_hz: f64,
    /// Минимальный уровень логов
    pub log_level: LogLevel,
    pub hunter: PursuitConfig,
    pub door: TriggerGateConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: crate::DEFAULT_SEED,
            tick_hz: crate::DEFAULT_TICK_HZ,
            log_level: LogLevel::Info,
            hunter: PursuitConfig::default(),
            door: TriggerGateConfig::default(),
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.timestep()?;
        self.hunter.validate()?;
        self.door.validate()
    }

    /// Длительность одного FixedUpdate tick'а (1 / tick_hz)
    ///
    /// Bevy паникует на нулевом timestep, Duration — на непредставимом,
    /// поэтому оба случая отсекаем здесь.
    pub fn timestep(&self) -> Result<Duration, ConfigError> {
        if !(self.tick_hz.is_finite() && self.tick_hz > 0.0) {
            return Err(ConfigError::NotPositive {
                field: "tick_hz",
                value: self.tick_hz as f32,
            });
        }

        match Duration::try_from_secs_f64(1.0 / self.tick_hz) {
            Ok(timestep) if !timestep.is_zero() => Ok(timestep),
            _ => Err(ConfigError::TickRate { value: self.tick_hz }),
        }
    }

    /// Парсинг JSON + валидация
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.seed, crate::DEFAULT_SEED);
        assert_eq!(config.tick_hz, crate::DEFAULT_TICK_HZ);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SimulationConfig::from_json_str(
            r#"{ "seed": 7, "door": { "cooldown_secs": 3.0, "fire_once": true } }"#,
        )
        .unwrap();

        assert_eq!(config.seed, 7);
        assert_eq!(config.door.cooldown_secs, 3.0);
        assert!(config.door.fire_once);
        assert_eq!(config.door.target_tag, "Player");
        assert_eq!(config.hunter, PursuitConfig::default());
    }

    #[test]
    fn test_invalid_tick_rate_rejected() {
        let err = SimulationConfig::from_json_str(r#"{ "tick_hz": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::NotPositive { field: "tick_hz", .. }));

        let err = SimulationConfig::from_json_str(r#"{ "tick_hz": -60.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::NotPositive { field: "tick_hz", .. }));
    }

    #[test]
    fn test_extreme_tick_rate_rejected() {
        // Timestep округляется до нуля
        let err = SimulationConfig::from_json_str(r#"{ "tick_hz": 1e10 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::TickRate { .. }));

        // Timestep не влезает в Duration
        let err = SimulationConfig::from_json_str(r#"{ "tick_hz": 1e-25 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::TickRate { .. }));
    }

    #[test]
    fn test_timestep_from_tick_rate() {
        let config = SimulationConfig {
            tick_hz: 64.0,
            ..Default::default()
        };
        assert_eq!(config.timestep().unwrap(), Duration::from_micros(15_625));
    }

    #[test]
    fn test_nested_validation_error() {
        let err = SimulationConfig::from_json_str(r#"{ "door": { "target_tag": "  " } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Empty { field: "target_tag" }));
    }

    #[test]
    fn test_malformed_json() {
        let err = SimulationConfig::from_json_str("{ seed: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = SimulationConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
