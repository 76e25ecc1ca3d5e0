//! Discrete-event simulation of a two-stage tandem queueing network.
//!
//! Customers arrive at station 1, wait for and receive service there, then
//! proceed to station 2 for a second wait and service before departing. A
//! replication runs for a fixed simulated duration and yields steady-state
//! estimates: average delay in each queue, time-average queue lengths, and
//! server utilizations.
//!
//! # Architecture
//!
//! The simulation is built around a single owning aggregate:
//!
//! - [`Replication`]: owns the clock, the [`EventCalendar`], both
//!   [`StationState`]s, and the time-weighted [`Accumulators`] for one run.
//!   Its driver loop pulls the earliest pending event, advances the clock,
//!   updates the accumulators with the pre-transition state, and dispatches
//!   to the handler for the event kind.
//!
//! Randomness enters only through the [`UniformSource`] trait and the
//! [`exponential`] variate transform, so a fixed seed reproduces a run
//! bit for bit.
//!
//! # Basic usage
//!
//! ```
//! use tandem_core::{run_replications, SeededUniform, SimConfig, StationId};
//!
//! let config = SimConfig::new(1.0, 0.5, 0.3, 1000.0)?;
//! let mut source = SeededUniform::new(42);
//!
//! let reports = run_replications(config, &mut source, 10)?;
//! for report in &reports {
//!     println!("server 1 utilization: {:.3}", report.utilization(StationId::First));
//! }
//! # Ok::<(), tandem_core::SimError>(())
//! ```

pub mod calendar;
pub mod config;
pub mod error;
pub mod logging;
pub mod random;
pub mod replication;
pub mod report;
pub mod station;
pub mod stats;
pub mod time;

pub use calendar::{EventCalendar, EventKind};
pub use config::SimConfig;
pub use error::{ConfigError, SimError};
pub use logging::{init_logging, init_logging_with_level};
pub use random::{exponential, ScriptedUniform, SeededUniform, UniformSource};
pub use replication::{run_replications, Replication, Step};
pub use report::Report;
pub use station::{StationId, StationState, DEFAULT_QUEUE_CAPACITY};
pub use stats::{Accumulators, Clock};
pub use time::SimTime;
