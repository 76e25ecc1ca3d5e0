//! Simulation clock and time-weighted statistics accumulators.

use crate::station::{StationId, StationState};
use crate::time::SimTime;
use std::time::Duration;

/// The simulation clock: current time plus the time of the previous event.
#[derive(Debug, Clone, Copy, Default)]
pub struct Clock {
    now: SimTime,
    time_of_last_event: SimTime,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> SimTime {
        self.now
    }

    pub fn time_of_last_event(&self) -> SimTime {
        self.time_of_last_event
    }

    /// Advance to `time`, returning the elapsed interval. Event times come
    /// from the calendar in non-decreasing order, so the clock never moves
    /// backwards; `duration_since` saturates at zero regardless.
    pub fn advance_to(&mut self, time: SimTime) -> Duration {
        debug_assert!(time >= self.now, "clock moved backwards");
        let elapsed = time.duration_since(self.now);
        self.time_of_last_event = self.now;
        self.now = time;
        elapsed
    }
}

/// Per-replication statistical counters.
///
/// The area accumulators are running integrals over simulated time of the
/// queue lengths and busy indicators; dividing by the total elapsed time at
/// the end of the run yields time averages. `customers_delayed` is a single
/// counter shared by both stations, incremented once per service start
/// wherever it happens. That shared-counter convention is historical and is
/// preserved exactly.
#[derive(Debug, Clone, Default)]
pub struct Accumulators {
    total_delay: [Duration; 2],
    customers_delayed: u64,
    area_queue_length: [f64; 2],
    area_server_busy: [f64; 2],
}

impl Accumulators {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fold `elapsed` into the time-weighted areas. Must be called with the
    /// state that held *during* the interval, i.e. before the event handler
    /// mutates anything.
    pub fn update(&mut self, elapsed: Duration, stations: &[StationState; 2]) {
        let elapsed = elapsed.as_secs_f64();
        for station in StationId::ALL {
            let i = station.index();
            self.area_queue_length[i] += stations[i].queue_len() as f64 * elapsed;
            if stations[i].is_busy() {
                self.area_server_busy[i] += elapsed;
            }
        }
    }

    /// Record one service start: the waiting delay (zero for a customer that
    /// found the server idle) and the shared delayed-customer count.
    pub fn record_delay(&mut self, station: StationId, delay: Duration) {
        self.total_delay[station.index()] += delay;
        self.customers_delayed += 1;
    }

    pub fn total_delay(&self, station: StationId) -> Duration {
        self.total_delay[station.index()]
    }

    pub fn customers_delayed(&self) -> u64 {
        self.customers_delayed
    }

    pub fn area_queue_length(&self, station: StationId) -> f64 {
        self.area_queue_length[station.index()]
    }

    pub fn area_server_busy(&self, station: StationId) -> f64 {
        self.area_server_busy[station.index()]
    }
}
