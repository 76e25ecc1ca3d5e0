//! Simulation time management

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::time::Duration;

/// A point in simulated time, stored as integer nanoseconds since the start
/// of the replication.
///
/// The simulation is unit-agnostic: configuration values are plain reals in
/// one common time unit (minutes by convention), and `SimTime` maps one such
/// unit onto one second of nanosecond-resolution storage. Using an integer
/// representation keeps comparisons exact and replays bit-identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SimTime(u64);

impl SimTime {
    /// The start of a replication (time zero).
    pub const fn zero() -> Self {
        SimTime(0)
    }

    /// Create a `SimTime` from raw nanoseconds.
    pub const fn from_nanos(nanos: u64) -> Self {
        SimTime(nanos)
    }

    /// Raw nanosecond value.
    pub const fn as_nanos(&self) -> u64 {
        self.0
    }

    /// Create a `SimTime` from a whole number of time units.
    pub const fn from_units(units: u64) -> Self {
        SimTime(units * 1_000_000_000)
    }

    /// The value expressed in fractional time units.
    pub fn as_units(&self) -> f64 {
        self.0 as f64 / 1_000_000_000.0
    }

    /// Convert to a `Duration` measured from time zero.
    pub fn as_duration(&self) -> Duration {
        Duration::from_nanos(self.0)
    }

    /// Elapsed time since an earlier instant. Saturates at zero rather than
    /// underflowing, so the caller never observes time running backwards.
    pub fn duration_since(&self, earlier: SimTime) -> Duration {
        Duration::from_nanos(self.0.saturating_sub(earlier.0))
    }
}

impl Add<Duration> for SimTime {
    type Output = SimTime;

    fn add(self, rhs: Duration) -> Self::Output {
        SimTime(self.0.saturating_add(rhs.as_nanos() as u64))
    }
}

impl Sub<SimTime> for SimTime {
    type Output = Duration;

    fn sub(self, rhs: SimTime) -> Self::Output {
        self.duration_since(rhs)
    }
}

impl Default for SimTime {
    fn default() -> Self {
        SimTime::zero()
    }
}

impl From<f64> for SimTime {
    /// Convert fractional time units to a `SimTime`.
    ///
    /// # Panics
    ///
    /// Panics if the input is negative, infinite, or NaN. Externally supplied
    /// values go through [`crate::config::SimConfig`] validation first; this
    /// conversion only ever sees values the simulation itself produced.
    fn from(units: f64) -> Self {
        assert!(
            units.is_finite(),
            "SimTime cannot be created from non-finite value: {units}"
        );
        assert!(units >= 0.0, "SimTime cannot be negative: {units}");
        SimTime::from_nanos((units * 1_000_000_000.0) as u64)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.as_units())
    }
}
