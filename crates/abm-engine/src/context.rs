//! Outbound scheduling seams: the `MessageSink` trait and the `SimContext`
//! delivery view.
//!
//! `MessageSink` is the narrow interface everything that produces messages
//! writes to — the social graph's fan-out, the producer crates, and agent
//! handlers all target it.  It has two implementors with identical
//! semantics: [`EventScheduler`][crate::EventScheduler] (between runs) and
//! [`SimContext`] (inside a delivery, where the scheduler itself is
//! mutably borrowed).

use abm_core::{Message, SimClock, SimTime, TimeResult};

use crate::observer::SimObserver;
use crate::queue::MessageQueue;

// ── MessageSink ──────────────────────────────────────────────────────────────

/// A destination for outbound messages.
pub trait MessageSink {
    /// Deliver `message` at the current simulated time.
    ///
    /// Infallible: the current time is always inside the window, so the
    /// time-validity rule cannot reject it.
    fn send_now(&mut self, message: Box<dyn Message>);

    /// Deliver `message` at `time`.
    ///
    /// Fails without side effects when `time` violates the time-validity
    /// rule (before the window start, after the inclusive end, or in the
    /// past relative to the current time).
    fn schedule(&mut self, message: Box<dyn Message>, time: SimTime) -> TimeResult<()>;
}

// ── SimContext ───────────────────────────────────────────────────────────────

/// The scheduler's delivery-time view, handed to [`Agent::handle`].
///
/// Splits the scheduler into the pieces a handler may touch — read access to
/// the clock, write access to the message queue — while the registry (and
/// the agent being delivered to) stays exclusively borrowed by the delivery
/// loop.
///
/// [`Agent::handle`]: crate::Agent::handle
pub struct SimContext<'a> {
    clock: &'a SimClock,
    queue: &'a mut MessageQueue,
    observer: &'a mut (dyn SimObserver + 'a),
}

impl<'a> SimContext<'a> {
    pub(crate) fn new(
        clock: &'a SimClock,
        queue: &'a mut MessageQueue,
        observer: &'a mut (dyn SimObserver + 'a),
    ) -> Self {
        Self {
            clock,
            queue,
            observer,
        }
    }

    /// The current simulated time (the timestamp being delivered).
    #[inline]
    pub fn now(&self) -> SimTime {
        self.clock.current()
    }

    /// First instant of the simulation window.
    #[inline]
    pub fn start_time(&self) -> SimTime {
        self.clock.start()
    }

    /// Last instant of the simulation window (inclusive).
    #[inline]
    pub fn end_time(&self) -> SimTime {
        self.clock.end()
    }
}

impl MessageSink for SimContext<'_> {
    fn send_now(&mut self, message: Box<dyn Message>) {
        let now = self.clock.current();
        self.observer.on_scheduled(now, &*message);
        self.queue.push(now, message);
    }

    fn schedule(&mut self, message: Box<dyn Message>, time: SimTime) -> TimeResult<()> {
        self.clock.check(time)?;
        self.observer.on_scheduled(time, &*message);
        self.queue.push(time, message);
        Ok(())
    }
}
