//! Replication driver: the event-scheduling loop and the per-event handlers.
//!
//! A [`Replication`] owns everything one run from time zero to the fixed run
//! length needs: the clock, the event calendar, both station states, and the
//! statistics accumulators. Nothing is shared across replications; the
//! multi-replication helper constructs a fresh aggregate for each run while
//! drawing from one continuing random stream.
//!
//! Each driver iteration pulls the earliest pending event off the calendar,
//! advances the clock, folds the just-elapsed interval into the
//! time-weighted accumulators using the pre-transition state, and then
//! dispatches to the handler for the event kind.

use crate::calendar::{EventCalendar, EventKind};
use crate::config::SimConfig;
use crate::error::SimError;
use crate::random::{exponential, UniformSource};
use crate::report::Report;
use crate::station::{StationId, StationState};
use crate::stats::{Accumulators, Clock};
use crate::time::SimTime;
use std::time::Duration;
use tracing::{debug, trace};

/// Outcome of one driver iteration.
#[derive(Debug)]
pub enum Step {
    /// An event was processed and the replication continues.
    Advanced { kind: EventKind, time: SimTime },
    /// The end-of-run event fired; the replication is over.
    Finished(Report),
}

/// One independent run of the tandem network from time zero to the
/// configured run length.
pub struct Replication {
    config: SimConfig,
    clock: Clock,
    calendar: EventCalendar,
    stations: [StationState; 2],
    stats: Accumulators,
}

impl Replication {
    /// Construct a replication with the calendar seeded: the first arrival
    /// drawn from the interarrival distribution and the end-of-run event at
    /// the fixed run length. Departures start unscheduled because no
    /// customer is present yet.
    pub fn new(config: SimConfig, source: &mut dyn UniformSource) -> Self {
        let mut calendar = EventCalendar::new();
        calendar.schedule(
            EventKind::Arrival1,
            SimTime::zero() + exponential(source, config.interarrival_mean()),
        );
        calendar.schedule(EventKind::EndOfRun, SimTime::from(config.run_length));

        Self {
            config,
            clock: Clock::new(),
            calendar,
            stations: [
                StationState::new(config.queue_capacity),
                StationState::new(config.queue_capacity),
            ],
            stats: Accumulators::new(),
        }
    }

    /// Current simulated time.
    pub fn time(&self) -> SimTime {
        self.clock.now()
    }

    /// Read access to a station's state, mainly for inspection in tests and
    /// diagnostics.
    pub fn station(&self, id: StationId) -> &StationState {
        &self.stations[id.index()]
    }

    /// Process the next event.
    ///
    /// # Errors
    ///
    /// [`SimError::EmptyCalendar`] if no event kind is pending (a logic
    /// error: the end-of-run event should always remain scheduled), or
    /// [`SimError::QueueOverflow`] from an arrival handler. Both are fatal
    /// to the whole run.
    pub fn step(&mut self, source: &mut dyn UniformSource) -> Result<Step, SimError> {
        let (kind, time) = self
            .calendar
            .next_event()
            .ok_or(SimError::EmptyCalendar {
                time: self.clock.now(),
            })?;

        // Attribute the elapsed interval to the state that held during it,
        // before the handler mutates anything.
        let elapsed = self.clock.advance_to(time);
        self.stats.update(elapsed, &self.stations);

        trace!(%kind, %time, "processing event");
        match kind {
            EventKind::Arrival1 => self.arrival_first(source)?,
            // A standalone station-2 arrival carries no forwarded stamp;
            // the customer is taken to arrive right now.
            EventKind::Arrival2 => self.arrival_second(self.clock.now(), source)?,
            EventKind::Departure1 => self.departure_first(source)?,
            EventKind::Departure2 => self.departure_second(source)?,
            EventKind::EndOfRun => {
                let report = Report::from_run(&self.stats, self.clock.now());
                debug!(
                    customers_delayed = report.customers_delayed(),
                    end_time = %self.clock.now(),
                    "replication finished"
                );
                return Ok(Step::Finished(report));
            }
        }

        Ok(Step::Advanced { kind, time })
    }

    /// Run the replication to completion.
    pub fn run(mut self, source: &mut dyn UniformSource) -> Result<Report, SimError> {
        loop {
            if let Step::Finished(report) = self.step(source)? {
                return Ok(report);
            }
        }
    }

    /// A customer arrives at station 1 from outside: draw the next external
    /// arrival, then join station 1.
    fn arrival_first(&mut self, source: &mut dyn UniformSource) -> Result<(), SimError> {
        let now = self.clock.now();
        self.calendar.schedule(
            EventKind::Arrival1,
            now + exponential(source, self.config.interarrival_mean()),
        );
        self.arrive_at(StationId::First, now, source)
    }

    /// A customer arrives at station 2 carrying `stamp`, its original
    /// station-1 arrival timestamp (not the current time). Invoked
    /// synchronously from [`Self::departure_first`], or standalone from the
    /// calendar.
    fn arrival_second(
        &mut self,
        stamp: SimTime,
        source: &mut dyn UniformSource,
    ) -> Result<(), SimError> {
        self.arrive_at(StationId::Second, stamp, source)
    }

    /// Shared arrival logic: queue behind a busy server, or start service
    /// immediately (zero delay) at an idle one.
    fn arrive_at(
        &mut self,
        station: StationId,
        stamp: SimTime,
        source: &mut dyn UniformSource,
    ) -> Result<(), SimError> {
        let now = self.clock.now();
        let state = &mut self.stations[station.index()];

        if state.is_busy() {
            state.enqueue(stamp).map_err(|full| {
                SimError::QueueOverflow {
                    station,
                    time: now,
                    capacity: full.capacity,
                }
            })?;
            trace!(%station, queue_len = self.stations[station.index()].queue_len(), "customer queued");
        } else {
            state.begin_service(stamp);
            self.stats.record_delay(station, Duration::ZERO);
            let service = exponential(source, self.config.service_mean(station));
            self.calendar.schedule(departure_kind(station), now + service);
            trace!(%station, "service started immediately");
        }
        Ok(())
    }

    /// Service completion at station 1. After the station-1 bookkeeping, the
    /// departing customer is presented to station 2 exactly once, keeping
    /// its original station-1 arrival timestamp.
    fn departure_first(&mut self, source: &mut dyn UniformSource) -> Result<(), SimError> {
        let departing = self.finish_service(StationId::First, source);
        if let Some(stamp) = departing {
            self.arrival_second(stamp, source)?;
        }
        Ok(())
    }

    /// Service completion at station 2, the terminal stage. No chaining.
    fn departure_second(&mut self, source: &mut dyn UniformSource) -> Result<(), SimError> {
        self.finish_service(StationId::Second, source);
        Ok(())
    }

    /// Common departure bookkeeping: release the in-service customer and,
    /// if anyone is waiting, move the head of the queue into service.
    /// Returns the departing customer's arrival stamp.
    fn finish_service(
        &mut self,
        station: StationId,
        source: &mut dyn UniformSource,
    ) -> Option<SimTime> {
        let now = self.clock.now();
        let state = &mut self.stations[station.index()];
        let departing = state.complete_service();

        match state.pop_front() {
            None => {
                // Queue empty: the server goes idle and its departure event
                // drops out of consideration.
                self.calendar.unschedule(departure_kind(station));
                trace!(%station, "server idle");
            }
            Some(head) => {
                let delay = now - head;
                state.begin_service(head);
                self.stats.record_delay(station, delay);
                let service = exponential(source, self.config.service_mean(station));
                self.calendar.schedule(departure_kind(station), now + service);
                trace!(%station, delay_units = delay.as_secs_f64(), "next customer entered service");
            }
        }
        departing
    }
}

fn departure_kind(station: StationId) -> EventKind {
    match station {
        StationId::First => EventKind::Departure1,
        StationId::Second => EventKind::Departure2,
    }
}

/// Run `count` independent replications back to back, drawing every variate
/// from the single continuing `source` stream.
///
/// The first fatal error aborts the remaining replications, matching the
/// historical whole-program abort; callers that want per-replication
/// recovery can drive [`Replication`] themselves.
pub fn run_replications(
    config: SimConfig,
    source: &mut dyn UniformSource,
    count: usize,
) -> Result<Vec<Report>, SimError> {
    let mut reports = Vec::with_capacity(count);
    for replication in 0..count {
        debug!(replication, "starting replication");
        reports.push(Replication::new(config, source).run(source)?);
    }
    Ok(reports)
}
