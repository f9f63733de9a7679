//! `abm-producer` — convenience producers that feed the scheduler.
//!
//! These are collaborators of the engine, not part of it: everything here
//! reduces to repeated [`MessageSink`][abm_engine::MessageSink] calls at
//! computed future times.  Producers validate their own interval/window
//! arguments before any scheduling is attempted, so a misconfigured
//! producer fails fast instead of half-populating the queue.
//!
//! | Module       | Contents                                    |
//! |--------------|---------------------------------------------|
//! | [`wakeup`]   | `WakeUpMessage` — one-shot self wake-up     |
//! | [`periodic`] | `PeriodicMessage`, `PeriodicSchedule`       |
//! | [`error`]    | `ProducerError`, `ProducerResult<T>`        |

pub mod error;
pub mod periodic;
pub mod wakeup;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ProducerError, ProducerResult};
pub use periodic::{PeriodicMessage, PeriodicSchedule};
pub use wakeup::WakeUpMessage;
