//! Scheduler observer trait for progress reporting and data collection.
//!
//! The engine carries no logger of its own.  Anything that wants visibility
//! into a run — progress printers, delivery traces, metrics — implements
//! `SimObserver` and passes it to
//! [`EventScheduler::run_with`][crate::EventScheduler::run_with].

use abm_core::{Message, SimTime};

/// Callbacks invoked by the scheduler at key points of a run.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — delivery printer
///
/// ```rust,ignore
/// struct DeliveryPrinter;
///
/// impl SimObserver for DeliveryPrinter {
///     fn on_deliver(&mut self, time: SimTime, message: &dyn Message) {
///         println!("{time}: {} -> {}", message.sender(), message.destination());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called whenever the run loop advances the clock to a new timestamp,
    /// before any message at that timestamp is delivered.
    fn on_time_advance(&mut self, _time: SimTime) {}

    /// Called when a handler schedules a message through its
    /// [`SimContext`][crate::SimContext] (via `send_now` or `schedule`),
    /// after validation succeeded.  Messages scheduled directly on the
    /// scheduler between runs are not reported here.
    fn on_scheduled(&mut self, _time: SimTime, _message: &dyn Message) {}

    /// Called immediately before a message is handed to its destination
    /// agent.
    fn on_deliver(&mut self, _time: SimTime, _message: &dyn Message) {}

    /// Called when a message's destination has no registered agent, just
    /// before the run aborts with
    /// [`EngineError::UnknownAgent`][crate::EngineError::UnknownAgent].
    fn on_delivery_failed(&mut self, _time: SimTime, _message: &dyn Message) {}

    /// Called once when a run finishes without error, with the final clock
    /// position.
    fn on_run_end(&mut self, _final_time: SimTime) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call the run
/// loop but don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
