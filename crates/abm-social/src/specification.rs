//! `MessageSpecification` — the fan-out template.
//!
//! A specification is a pure value: sender plus shared payload.  Its four
//! entry points all normalize their input to (destination, weight) pairs and
//! produce exactly one [`SocialMessage`] per pair, preserving input order.
//! An empty input yields an empty output, never an error.

use std::sync::Arc;

use abm_core::{AgentId, Message, SpecId};
use abm_engine::Agent;

use crate::message::{DEFAULT_WEIGHT, SocialMessage};

/// A template for expanding one logical message into per-recipient
/// weighted messages.
#[derive(Debug, Clone)]
pub struct MessageSpecification {
    id: SpecId,
    sender: AgentId,
    payload: Arc<dyn Message>,
}

impl MessageSpecification {
    /// Create a specification; with `id: None` a fresh identity is drawn.
    pub fn new(id: Option<SpecId>, sender: AgentId, payload: Arc<dyn Message>) -> Self {
        Self {
            id: id.unwrap_or_else(SpecId::random),
            sender,
            payload,
        }
    }

    #[inline]
    pub fn id(&self) -> SpecId {
        self.id
    }

    #[inline]
    pub fn sender(&self) -> AgentId {
        self.sender
    }

    #[inline]
    pub fn payload(&self) -> &dyn Message {
        &*self.payload
    }

    // ── Fan-out entry points ──────────────────────────────────────────────

    /// One message per destination identity, each with weight 1.0.
    pub fn to_messages_for_ids(
        &self,
        destinations: impl IntoIterator<Item = AgentId>,
    ) -> Vec<SocialMessage> {
        self.to_weighted_messages(destinations.into_iter().map(|id| (id, DEFAULT_WEIGHT)))
    }

    /// One message per destination agent, each with weight 1.0.
    pub fn to_messages_for_agents<'a>(
        &self,
        destinations: impl IntoIterator<Item = &'a dyn Agent>,
    ) -> Vec<SocialMessage> {
        self.to_messages_for_ids(destinations.into_iter().map(|agent| agent.id()))
    }

    /// One message per `(destination, weight)` pair.
    ///
    /// This is the normal form the other entry points reduce to.
    pub fn to_weighted_messages(
        &self,
        destinations: impl IntoIterator<Item = (AgentId, f64)>,
    ) -> Vec<SocialMessage> {
        destinations
            .into_iter()
            .map(|(destination, weight)| {
                SocialMessage::new(
                    destination,
                    self.sender,
                    None,
                    Arc::clone(&self.payload),
                    weight,
                )
            })
            .collect()
    }

    /// One message per `(agent, weight)` pair.
    pub fn to_weighted_messages_for_agents<'a>(
        &self,
        destinations: impl IntoIterator<Item = (&'a dyn Agent, f64)>,
    ) -> Vec<SocialMessage> {
        self.to_weighted_messages(
            destinations
                .into_iter()
                .map(|(agent, weight)| (agent.id(), weight)),
        )
    }
}
