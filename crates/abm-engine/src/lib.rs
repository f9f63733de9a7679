//! `abm-engine` — the event scheduler at the heart of `rust_abm`.
//!
//! # Crate layout
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`scheduler`] | `EventScheduler` — clock, queue, registry, run loop   |
//! | [`queue`]     | `MessageQueue` (`BTreeMap<SimTime, Vec<Box<dyn Message>>>`) |
//! | [`registry`]  | `AgentRegistry` (identity → agent bindings)           |
//! | [`agent`]     | The `Agent` trait                                     |
//! | [`context`]   | `MessageSink` trait, `SimContext` delivery view       |
//! | [`observer`]  | `SimObserver` hooks, `NoopObserver`                   |
//! | [`error`]     | `EngineError`, `EngineResult<T>`                      |
//!
//! # Delivery model (summary)
//!
//! Messages live in per-timestamp buckets, sorted by timestamp.  The run
//! loop repeatedly advances the clock to the earliest bucket and drains it
//! in FIFO order:
//!
//! ```text
//! while current < end and a bucket remains:
//!     t       = earliest bucket timestamp      (t ≥ current, guaranteed)
//!     current = t
//!     deliver every message at t, FIFO, including ones the handlers
//!     themselves schedule at t while the bucket is draining
//! ```
//!
//! Handlers receive a [`SimContext`] and may schedule further messages
//! through it; those are observed by the same run.  There is no parallelism
//! anywhere — the engine is a deterministic, single-threaded replayer.

pub mod agent;
pub mod context;
pub mod error;
pub mod observer;
pub mod queue;
pub mod registry;
pub mod scheduler;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use agent::Agent;
pub use context::{MessageSink, SimContext};
pub use error::{EngineError, EngineResult};
pub use observer::{NoopObserver, SimObserver};
pub use queue::MessageQueue;
pub use registry::AgentRegistry;
pub use scheduler::EventScheduler;
