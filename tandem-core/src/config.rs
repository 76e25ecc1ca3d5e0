//! Simulation configuration
//!
//! The configuration is four real numbers in one common time unit (minutes
//! by convention): the mean interarrival time, the mean service time at each
//! station, and the fixed run length. The classic input format is a single
//! whitespace-separated line, e.g. `1.0 0.5 0.3 1000.0`.

use crate::error::ConfigError;
use crate::station::{StationId, DEFAULT_QUEUE_CAPACITY};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Mean time between consecutive arrivals at station 1.
    pub mean_interarrival: f64,
    /// Mean service time at station 1.
    pub mean_service1: f64,
    /// Mean service time at station 2.
    pub mean_service2: f64,
    /// Fixed simulated duration of one replication.
    pub run_length: f64,
    /// Capacity of each station's FIFO queue.
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
}

fn default_queue_capacity() -> usize {
    DEFAULT_QUEUE_CAPACITY
}

impl SimConfig {
    /// Create a validated configuration with the default queue capacity.
    pub fn new(
        mean_interarrival: f64,
        mean_service1: f64,
        mean_service2: f64,
        run_length: f64,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            mean_interarrival,
            mean_service1,
            mean_service2,
            run_length,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        };
        config.validate()?;
        Ok(config)
    }

    /// Override the per-station queue capacity.
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    /// Read a configuration from a file in the classic four-number format.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        std::fs::read_to_string(path)?.parse()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("mean interarrival time", self.mean_interarrival),
            ("mean service time 1", self.mean_service1),
            ("mean service time 2", self.mean_service2),
            ("run length", self.run_length),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        Ok(())
    }

    pub(crate) fn interarrival_mean(&self) -> Duration {
        Duration::from_secs_f64(self.mean_interarrival)
    }

    pub(crate) fn service_mean(&self, station: StationId) -> Duration {
        match station {
            StationId::First => Duration::from_secs_f64(self.mean_service1),
            StationId::Second => Duration::from_secs_f64(self.mean_service2),
        }
    }
}

impl FromStr for SimConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const FIELDS: [&str; 4] = [
            "mean interarrival time",
            "mean service time 1",
            "mean service time 2",
            "run length",
        ];

        let raw: Vec<&str> = s.split_whitespace().collect();
        if raw.len() != FIELDS.len() {
            return Err(ConfigError::WrongValueCount { found: raw.len() });
        }

        let mut values = [0.0_f64; 4];
        for (i, (&field, &token)) in FIELDS.iter().zip(raw.iter()).enumerate() {
            values[i] = token.parse().map_err(|_| ConfigError::Parse {
                field,
                value: token.to_string(),
            })?;
        }

        SimConfig::new(values[0], values[1], values[2], values[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_classic_input_line() {
        let config: SimConfig = "1.0 0.5 0.3 1000.0".parse().unwrap();
        assert_eq!(config.mean_interarrival, 1.0);
        assert_eq!(config.mean_service1, 0.5);
        assert_eq!(config.mean_service2, 0.3);
        assert_eq!(config.run_length, 1000.0);
        assert_eq!(config.queue_capacity, DEFAULT_QUEUE_CAPACITY);
    }

    #[test]
    fn parses_across_lines() {
        let config: SimConfig = "1.0 0.5\n0.3 1000.0\n".parse().unwrap();
        assert_eq!(config.run_length, 1000.0);
    }

    #[test]
    fn rejects_wrong_value_count() {
        let err = "1.0 0.5 0.3".parse::<SimConfig>().unwrap_err();
        assert!(matches!(err, ConfigError::WrongValueCount { found: 3 }));
    }

    #[test]
    fn rejects_unparseable_value() {
        let err = "1.0 fast 0.3 1000.0".parse::<SimConfig>().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Parse {
                field: "mean service time 1",
                ..
            }
        ));
    }

    #[test]
    fn rejects_non_positive_values() {
        assert!(matches!(
            SimConfig::new(0.0, 0.5, 0.3, 1000.0),
            Err(ConfigError::NonPositive {
                field: "mean interarrival time",
                ..
            })
        ));
        assert!(matches!(
            SimConfig::new(1.0, 0.5, 0.3, f64::INFINITY),
            Err(ConfigError::NonPositive {
                field: "run length",
                ..
            })
        ));
    }

    #[test]
    fn queue_capacity_override() {
        let config = SimConfig::new(1.0, 0.5, 0.3, 10.0)
            .unwrap()
            .with_queue_capacity(4);
        assert_eq!(config.queue_capacity, 4);
    }
}
