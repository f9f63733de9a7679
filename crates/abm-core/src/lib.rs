//! `abm-core` — foundational types for the `rust_abm` simulation framework.
//!
//! This crate is a dependency of every other `abm-*` crate.  It intentionally
//! has no `abm-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                      |
//! |-------------|-----------------------------------------------|
//! | [`ids`]     | `AgentId`, `MessageId`, `SpecId`              |
//! | [`time`]    | `SimTime`, `SimClock`                         |
//! | [`message`] | The `Message` trait                           |
//! | [`error`]   | `TimeError`, `TimeResult`                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.|

pub mod error;
pub mod ids;
pub mod message;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{TimeError, TimeResult};
pub use ids::{AgentId, MessageId, SpecId};
pub use message::Message;
pub use time::{SimClock, SimTime};
