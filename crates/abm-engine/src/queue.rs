//! `MessageQueue` — the time-ordered bucket map of pending messages.
//!
//! # Why this shape
//!
//! Delivery order has two levels: across timestamps (ascending) and within a
//! timestamp (FIFO insertion order).  A `BTreeMap<SimTime, Vec<_>>` encodes
//! both directly: the map keeps bucket keys sorted, the `Vec` keeps arrival
//! order.  Each timestamp has exactly one bucket, so ties between buckets
//! cannot occur.
//!
//! # Performance note
//!
//! `BTreeMap` gives O(log W) insert and O(log W) pop where W = number of
//! distinct pending timestamps.  Handlers scheduling at the current time
//! re-create the just-removed bucket, which is the same O(log W) path — no
//! special casing needed.

use std::collections::BTreeMap;

use abm_core::{Message, SimTime};

/// A priority map from simulated timestamps to the messages pending at them.
///
/// The queue performs no time validation: callers (the scheduler and its
/// delivery context) check a timestamp against the clock before pushing.
#[derive(Default)]
pub struct MessageQueue {
    buckets: BTreeMap<SimTime, Vec<Box<dyn Message>>>,
    /// Cached total message count for O(1) `len()`.
    total: usize,
}

impl MessageQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `message` to the bucket for `time`, creating it if absent.
    pub fn push(&mut self, time: SimTime, message: Box<dyn Message>) {
        self.buckets.entry(time).or_default().push(message);
        self.total += 1;
    }

    /// Remove and return the whole bucket at exactly `time`, in FIFO order.
    ///
    /// Returns `None` if no messages are pending at that timestamp.
    pub fn take_bucket(&mut self, time: SimTime) -> Option<Vec<Box<dyn Message>>> {
        let bucket = self.buckets.remove(&time)?;
        self.total -= bucket.len();
        Some(bucket)
    }

    /// The earliest timestamp with at least one pending message.
    pub fn next_time(&self) -> Option<SimTime> {
        self.buckets.keys().next().copied()
    }

    /// Total number of pending messages across all buckets.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct timestamps that have at least one pending message.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}
