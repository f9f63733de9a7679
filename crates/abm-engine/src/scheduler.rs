//! The `EventScheduler` struct and its run loop.

use abm_core::{Message, SimClock, SimTime, TimeResult};

use crate::agent::Agent;
use crate::context::{MessageSink, SimContext};
use crate::error::{EngineError, EngineResult};
use crate::observer::{NoopObserver, SimObserver};
use crate::queue::MessageQueue;
use crate::registry::AgentRegistry;

/// The deterministic, time-ordered message dispatcher.
///
/// Owns the three pieces of simulation state: the bounded [`SimClock`], the
/// pending-message [`MessageQueue`], and the [`AgentRegistry`].  All
/// mutation goes through this type's operations (or through the
/// [`SimContext`] it hands to agents mid-delivery), which is what makes the
/// ordering guarantees enforceable:
///
/// 1. The clock never moves backward across a run.
/// 2. Within one timestamp, messages are delivered in the order they were
///    scheduled.
/// 3. A message accepted by `schedule` is delivered exactly once, unless the
///    window closes first or an earlier delivery in its bucket aborts the
///    run.
pub struct EventScheduler {
    clock: SimClock,
    queue: MessageQueue,
    agents: AgentRegistry,
}

impl EventScheduler {
    /// Create a scheduler for the window `[start, end]`.
    ///
    /// Fails with [`TimeError::EmptyWindow`][abm_core::TimeError::EmptyWindow]
    /// unless `start < end`.  The current time begins at `start`.
    pub fn new(start: SimTime, end: SimTime) -> TimeResult<Self> {
        Ok(Self {
            clock: SimClock::new(start, end)?,
            queue: MessageQueue::new(),
            agents: AgentRegistry::new(),
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn start_time(&self) -> SimTime {
        self.clock.start()
    }

    #[inline]
    pub fn end_time(&self) -> SimTime {
        self.clock.end()
    }

    #[inline]
    pub fn current_time(&self) -> SimTime {
        self.clock.current()
    }

    /// Number of messages pending across all future buckets.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// The earliest timestamp with at least one pending message.
    pub fn next_event_time(&self) -> Option<SimTime> {
        self.queue.next_time()
    }

    /// Read access to the agent registry.
    pub fn agents(&self) -> &AgentRegistry {
        &self.agents
    }

    // ── Registration and scheduling ───────────────────────────────────────

    /// Register `agent` under its own identity.
    ///
    /// Last-write-wins on re-registration; the displaced agent is returned
    /// so callers can detect the overwrite.
    pub fn register_agent(&mut self, agent: Box<dyn Agent>) -> Option<Box<dyn Agent>> {
        self.agents.register(agent)
    }

    // ── Run loop ──────────────────────────────────────────────────────────

    /// Run to completion without observation.
    pub fn run(&mut self) -> EngineResult<()> {
        self.run_with(&mut NoopObserver)
    }

    /// Run until the queue is empty or the clock reaches the window end.
    ///
    /// Each iteration advances the clock to the earliest pending timestamp
    /// and drains that bucket in FIFO order.  The earliest timestamp is
    /// re-read every iteration, so buckets inserted by handlers mid-run are
    /// picked up.  Buckets still pending when the clock reaches the end are
    /// silently truncated — never delivered, not an error.
    ///
    /// Aborts with [`EngineError::UnknownAgent`] if a message's destination
    /// has no registered agent: deliveries made before the failure stand,
    /// the remainder of that bucket is discarded.
    pub fn run_with<O: SimObserver>(&mut self, observer: &mut O) -> EngineResult<()> {
        while self.clock.current() < self.clock.end() {
            let Some(time) = self.queue.next_time() else {
                break;
            };
            // Every queued timestamp passed `check` against a clock that has
            // only moved toward it since, so this cannot fail.
            self.clock.advance_to(time)?;
            observer.on_time_advance(time);
            self.drain_bucket(time, observer)?;
        }
        observer.on_run_end(self.clock.current());
        Ok(())
    }

    /// Deliver the bucket at exactly `time`, if one exists.
    ///
    /// Validates `time` under the same rule as `schedule`; with no bucket at
    /// `time` this is a no-op.  Unlike [`run_with`][Self::run_with] the
    /// clock is not advanced — this is the fine-grained stepping primitive
    /// the run loop is built from, exposed for callers (and tests) that
    /// drive delivery one timestamp at a time.
    pub fn run_at<O: SimObserver>(&mut self, time: SimTime, observer: &mut O) -> EngineResult<()> {
        self.clock.check(time)?;
        self.drain_bucket(time, observer)
    }

    /// Drain every message pending at `time`, FIFO, re-checking for a
    /// re-created bucket until none remains.
    ///
    /// The re-check matters: a handler may `send_now` while its own bucket
    /// is draining, landing messages at `time` after the bucket was taken.
    /// Those must go out before the clock moves on — even when `time` is
    /// the window end and the outer loop is about to terminate.
    fn drain_bucket<O: SimObserver>(
        &mut self,
        time: SimTime,
        observer: &mut O,
    ) -> EngineResult<()> {
        while let Some(bucket) = self.queue.take_bucket(time) {
            for message in bucket {
                let destination = message.destination();
                let Some(agent) = self.agents.get_mut(destination) else {
                    observer.on_delivery_failed(time, &*message);
                    return Err(EngineError::UnknownAgent { destination, time });
                };
                observer.on_deliver(time, &*message);
                let mut ctx = SimContext::new(&self.clock, &mut self.queue, observer);
                agent.handle(&*message, &mut ctx);
            }
        }
        Ok(())
    }
}

impl MessageSink for EventScheduler {
    fn send_now(&mut self, message: Box<dyn Message>) {
        // current is always within [start, end], so no check can fail here.
        self.queue.push(self.clock.current(), message);
    }

    fn schedule(&mut self, message: Box<dyn Message>, time: SimTime) -> TimeResult<()> {
        self.clock.check(time)?;
        self.queue.push(time, message);
        Ok(())
    }
}
