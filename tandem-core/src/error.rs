//! Error types for the simulation

use crate::station::StationId;
use crate::time::SimTime;
use thiserror::Error;

/// Top-level error type for simulation runs.
///
/// Both simulation variants are fatal: they indicate a configuration
/// mismatch (run too long, queue capacity too small) rather than a
/// recoverable runtime fault, so the driver aborts the entire
/// multi-replication run when one occurs.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("event calendar empty at time {time}")]
    EmptyCalendar { time: SimTime },

    #[error("queue overflow at {station} at time {time} (capacity: {capacity})")]
    QueueOverflow {
        station: StationId,
        time: SimTime,
        capacity: usize,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while reading or validating the simulation configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("expected 4 values (mean interarrival, mean service 1, mean service 2, run length), found {found}")]
    WrongValueCount { found: usize },

    #[error("could not parse {field}: {value:?}")]
    Parse { field: &'static str, value: String },

    #[error("{field} must be strictly positive and finite, got {value}")]
    NonPositive { field: &'static str, value: f64 },
}
