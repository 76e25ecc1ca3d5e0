//! Event calendar: the next-occurrence time for each event kind.
//!
//! The calendar holds at most one pending occurrence per [`EventKind`].
//! Scheduling a kind that is already pending replaces its time, and an
//! unscheduled kind is simply absent (no sentinel time value). The next
//! event is the pending kind with the smallest time; exact ties go to the
//! lowest-ordinal kind, matching the historical first-match-in-scan rule.

use crate::time::SimTime;
use std::fmt;

/// The closed set of event kinds in the tandem network.
///
/// The ordinal order below is load-bearing: it is the tie-break order of
/// [`EventCalendar::next_event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A customer arrives at station 1 from outside.
    Arrival1,
    /// A customer arrives at station 2 (forwarded from station 1).
    Arrival2,
    /// A service completion at station 1.
    Departure1,
    /// A service completion at station 2.
    Departure2,
    /// The fixed end of the replication.
    EndOfRun,
}

impl EventKind {
    pub const ALL: [EventKind; 5] = [
        EventKind::Arrival1,
        EventKind::Arrival2,
        EventKind::Departure1,
        EventKind::Departure2,
        EventKind::EndOfRun,
    ];

    fn index(self) -> usize {
        match self {
            EventKind::Arrival1 => 0,
            EventKind::Arrival2 => 1,
            EventKind::Departure1 => 2,
            EventKind::Departure2 => 3,
            EventKind::EndOfRun => 4,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventKind::Arrival1 => "arrival at station 1",
            EventKind::Arrival2 => "arrival at station 2",
            EventKind::Departure1 => "departure from station 1",
            EventKind::Departure2 => "departure from station 2",
            EventKind::EndOfRun => "end of run",
        };
        f.write_str(name)
    }
}

/// Pending occurrence times, one slot per event kind.
#[derive(Debug, Clone, Default)]
pub struct EventCalendar {
    entries: [Option<SimTime>; EventKind::ALL.len()],
}

impl EventCalendar {
    /// Empty calendar with nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or replace) the pending time for `kind`.
    pub fn schedule(&mut self, kind: EventKind, time: SimTime) {
        self.entries[kind.index()] = Some(time);
    }

    /// Remove the pending occurrence of `kind`, if any.
    pub fn unschedule(&mut self, kind: EventKind) {
        self.entries[kind.index()] = None;
    }

    /// The pending time for `kind`, if scheduled.
    pub fn scheduled(&self, kind: EventKind) -> Option<SimTime> {
        self.entries[kind.index()]
    }

    /// The pending kind with the smallest time, lowest ordinal winning ties.
    /// `None` means every kind is unscheduled, which the driver treats as a
    /// fatal consistency error.
    pub fn next_event(&self) -> Option<(EventKind, SimTime)> {
        let mut next: Option<(EventKind, SimTime)> = None;
        for kind in EventKind::ALL {
            if let Some(time) = self.scheduled(kind) {
                // Strict comparison keeps the earliest-scanned kind on ties.
                if next.map_or(true, |(_, best)| time < best) {
                    next = Some((kind, time));
                }
            }
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_calendar_has_no_next_event() {
        assert_eq!(EventCalendar::new().next_event(), None);
    }

    #[test]
    fn returns_minimum_scheduled_time() {
        let mut calendar = EventCalendar::new();
        calendar.schedule(EventKind::Arrival1, SimTime::from_units(5));
        calendar.schedule(EventKind::Departure1, SimTime::from_units(2));
        calendar.schedule(EventKind::EndOfRun, SimTime::from_units(10));

        assert_eq!(
            calendar.next_event(),
            Some((EventKind::Departure1, SimTime::from_units(2)))
        );
    }

    #[test]
    fn ties_go_to_lowest_ordinal_kind() {
        let mut calendar = EventCalendar::new();
        let t = SimTime::from_units(3);
        calendar.schedule(EventKind::EndOfRun, t);
        calendar.schedule(EventKind::Departure2, t);
        calendar.schedule(EventKind::Arrival2, t);

        assert_eq!(calendar.next_event(), Some((EventKind::Arrival2, t)));
    }

    #[test]
    fn schedule_replaces_pending_time() {
        let mut calendar = EventCalendar::new();
        calendar.schedule(EventKind::Arrival1, SimTime::from_units(5));
        calendar.schedule(EventKind::Arrival1, SimTime::from_units(1));

        assert_eq!(
            calendar.scheduled(EventKind::Arrival1),
            Some(SimTime::from_units(1))
        );
    }

    #[test]
    fn unschedule_removes_kind_from_consideration() {
        let mut calendar = EventCalendar::new();
        calendar.schedule(EventKind::Departure1, SimTime::from_units(1));
        calendar.schedule(EventKind::EndOfRun, SimTime::from_units(9));
        calendar.unschedule(EventKind::Departure1);

        assert_eq!(calendar.scheduled(EventKind::Departure1), None);
        assert_eq!(
            calendar.next_event(),
            Some((EventKind::EndOfRun, SimTime::from_units(9)))
        );
    }
}
