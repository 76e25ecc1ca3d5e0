//! Per-station service state: the busy/idle server and its FIFO queue.

use crate::time::SimTime;
use std::collections::VecDeque;
use std::fmt;
use thiserror::Error;

/// Queue capacity used when the caller does not override it. Matches the
/// fixed array size of the historical implementation.
pub const DEFAULT_QUEUE_CAPACITY: usize = 2500;

/// Identifies one of the two stations in the tandem network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StationId {
    First,
    Second,
}

impl StationId {
    pub const ALL: [StationId; 2] = [StationId::First, StationId::Second];

    /// Zero-based index for per-station arrays.
    pub const fn index(self) -> usize {
        match self {
            StationId::First => 0,
            StationId::Second => 1,
        }
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StationId::First => f.write_str("station 1"),
            StationId::Second => f.write_str("station 2"),
        }
    }
}

/// Raised when a push would exceed the queue's fixed capacity.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("queue is full (capacity: {capacity})")]
pub struct QueueFull {
    pub capacity: usize,
}

/// One station's mutable state: the customer in service (if any) and the
/// FIFO queue of waiting customers, each represented by its arrival
/// timestamp.
///
/// The server is busy exactly when a customer is in service; there is no
/// separate busy flag to keep in sync. The in-service timestamp is what the
/// departure handler forwards to station 2 when the customer moves on.
#[derive(Debug, Clone)]
pub struct StationState {
    in_service: Option<SimTime>,
    queue: VecDeque<SimTime>,
    capacity: usize,
}

impl StationState {
    pub fn new(capacity: usize) -> Self {
        Self {
            in_service: None,
            queue: VecDeque::new(),
            capacity,
        }
    }

    /// Return to the idle, empty state. Stations are reused across
    /// replications rather than reallocated.
    pub fn reset(&mut self) {
        self.in_service = None;
        self.queue.clear();
    }

    pub fn is_busy(&self) -> bool {
        self.in_service.is_some()
    }

    /// Number of waiting customers (excludes the one in service).
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append an arrival timestamp to the back of the queue.
    ///
    /// # Errors
    ///
    /// Fails with [`QueueFull`] exactly when the push would make the length
    /// `capacity + 1`.
    pub fn enqueue(&mut self, arrival: SimTime) -> Result<(), QueueFull> {
        if self.queue.len() >= self.capacity {
            return Err(QueueFull {
                capacity: self.capacity,
            });
        }
        self.queue.push_back(arrival);
        Ok(())
    }

    /// Pop the head of the queue, if any.
    pub fn pop_front(&mut self) -> Option<SimTime> {
        self.queue.pop_front()
    }

    /// Mark the server busy with a customer whose arrival stamp is `arrival`.
    pub fn begin_service(&mut self, arrival: SimTime) {
        debug_assert!(self.in_service.is_none(), "server already busy");
        self.in_service = Some(arrival);
    }

    /// Finish the in-service customer, returning its arrival stamp and
    /// leaving the server idle.
    pub fn complete_service(&mut self) -> Option<SimTime> {
        self.in_service.take()
    }
}

impl Default for StationState {
    fn default() -> Self {
        Self::new(DEFAULT_QUEUE_CAPACITY)
    }
}
