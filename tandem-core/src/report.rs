//! Per-replication performance report.
//!
//! The report is the numeric consumer contract of a replication: six
//! steady-state measures plus the delayed-customer count. Textual layout is
//! a presentation concern left to callers.

use crate::stats::Accumulators;
use crate::station::StationId;
use crate::time::SimTime;
use serde::Serialize;

/// Steady-state estimates from one replication.
///
/// All time-valued fields are in the configured time unit. When no customer
/// was ever delayed, or the run ended at time zero, the affected averages
/// are `NaN` rather than a crash; callers render that degenerate case as
/// "undefined".
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Report {
    avg_delay: [f64; 2],
    avg_queue_length: [f64; 2],
    utilization: [f64; 2],
    customers_delayed: u64,
}

impl Report {
    /// Compute the report from final accumulator values and the final clock
    /// reading.
    pub fn from_run(stats: &Accumulators, end_time: SimTime) -> Self {
        let elapsed = end_time.as_units();
        let delayed = stats.customers_delayed();

        let avg_delay = StationId::ALL.map(|s| {
            if delayed == 0 {
                f64::NAN
            } else {
                stats.total_delay(s).as_secs_f64() / delayed as f64
            }
        });
        let avg_queue_length = StationId::ALL.map(|s| {
            if elapsed == 0.0 {
                f64::NAN
            } else {
                stats.area_queue_length(s) / elapsed
            }
        });
        let utilization = StationId::ALL.map(|s| {
            if elapsed == 0.0 {
                f64::NAN
            } else {
                stats.area_server_busy(s) / elapsed
            }
        });

        Self {
            avg_delay,
            avg_queue_length,
            utilization,
            customers_delayed: delayed,
        }
    }

    /// Average delay in the station's queue.
    pub fn avg_delay(&self, station: StationId) -> f64 {
        self.avg_delay[station.index()]
    }

    /// Time-average number of waiting customers at the station.
    pub fn avg_queue_length(&self, station: StationId) -> f64 {
        self.avg_queue_length[station.index()]
    }

    /// Fraction of the run during which the station's server was busy.
    pub fn utilization(&self, station: StationId) -> f64 {
        self.utilization[station.index()]
    }

    /// Total service starts across both stations.
    pub fn customers_delayed(&self) -> u64 {
        self.customers_delayed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::station::StationState;
    use std::time::Duration;

    #[test]
    fn averages_divide_by_count_and_time() {
        let mut stats = Accumulators::new();
        stats.record_delay(StationId::First, Duration::from_secs(6));
        stats.record_delay(StationId::Second, Duration::from_secs(2));

        let mut stations = [StationState::default(), StationState::default()];
        stations[0].begin_service(SimTime::zero());
        stations[0].enqueue(SimTime::zero()).unwrap();
        stats.update(Duration::from_secs(4), &stations);

        let report = Report::from_run(&stats, SimTime::from_units(8));

        assert_eq!(report.customers_delayed(), 2);
        assert_eq!(report.avg_delay(StationId::First), 3.0);
        assert_eq!(report.avg_delay(StationId::Second), 1.0);
        assert_eq!(report.avg_queue_length(StationId::First), 0.5);
        assert_eq!(report.utilization(StationId::First), 0.5);
        assert_eq!(report.utilization(StationId::Second), 0.0);
    }

    #[test]
    fn zero_customers_yields_nan_delays() {
        let stats = Accumulators::new();
        let report = Report::from_run(&stats, SimTime::from_units(10));

        assert!(report.avg_delay(StationId::First).is_nan());
        assert!(report.avg_delay(StationId::Second).is_nan());
        // Time-based averages are still defined: the run did elapse.
        assert_eq!(report.avg_queue_length(StationId::First), 0.0);
        assert_eq!(report.utilization(StationId::First), 0.0);
        assert_eq!(report.customers_delayed(), 0);
    }

    #[test]
    fn zero_elapsed_time_yields_nan_time_averages() {
        let stats = Accumulators::new();
        let report = Report::from_run(&stats, SimTime::zero());

        assert!(report.avg_queue_length(StationId::First).is_nan());
        assert!(report.utilization(StationId::Second).is_nan());
    }
}
