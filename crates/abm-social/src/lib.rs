//! `abm-social` — social-network message propagation for `rust_abm`.
//!
//! # Crate layout
//!
//! | Module            | Contents                                          |
//! |-------------------|---------------------------------------------------|
//! | [`graph`]         | `SocialGraph` (directed, weighted adjacency)      |
//! | [`message`]       | `SocialMessage` (payload + weight envelope)       |
//! | [`specification`] | `MessageSpecification` (fan-out template)         |
//! | [`simulation`]    | `SocialSimulation` (scheduler + graph bundle)     |
//! | [`error`]         | `GraphError`, `GraphResult<T>`                    |
//!
//! # Propagation model (summary)
//!
//! A [`MessageSpecification`] names a sender and a shared payload.
//! [`SocialGraph::propagate`] expands it over the sender's out-edges — one
//! [`SocialMessage`] per edge, carrying the edge weight — and hands each to
//! a [`MessageSink`][abm_engine::MessageSink] for immediate delivery:
//!
//! ```text
//! spec { sender, payload }
//!   └─ for each edge (sender → target, w), in edge-insertion order:
//!        send_now(SocialMessage { destination: target, weight: w, payload })
//! ```
//!
//! The graph is an explicit adjacency representation rather than a wrapper
//! over a graph library, so removal semantics and iteration order are fully
//! specified here instead of inherited.

pub mod error;
pub mod graph;
pub mod message;
pub mod simulation;
pub mod specification;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{GraphError, GraphResult};
pub use graph::SocialGraph;
pub use message::{DEFAULT_WEIGHT, SocialMessage};
pub use simulation::SocialSimulation;
pub use specification::MessageSpecification;
