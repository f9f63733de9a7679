//! `SocialMessage` — a weighted envelope around an opaque payload message.

use std::any::Any;
use std::sync::Arc;

use abm_core::{AgentId, Message, MessageId};

/// Edge/message weight used when none is given explicitly.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// A message delivered along a social-graph edge.
///
/// Wraps a shared, opaque payload message together with the weight of the
/// edge it traveled.  The payload is reference-counted because one fan-out
/// produces many `SocialMessage`s all carrying the same payload; it is
/// never mutated.
#[derive(Debug, Clone)]
pub struct SocialMessage {
    id: MessageId,
    sender: AgentId,
    destination: AgentId,
    weight: f64,
    payload: Arc<dyn Message>,
}

impl SocialMessage {
    /// Construct a weighted social message.
    ///
    /// With `id: None` a fresh identity is generated, so every message of a
    /// fan-out is distinct even though they share sender and payload.
    pub fn new(
        destination: AgentId,
        sender: AgentId,
        id: Option<MessageId>,
        payload: Arc<dyn Message>,
        weight: f64,
    ) -> Self {
        Self {
            id: id.unwrap_or_else(MessageId::random),
            sender,
            destination,
            weight,
            payload,
        }
    }

    /// Construct with the default weight of 1.0.
    pub fn unweighted(
        destination: AgentId,
        sender: AgentId,
        id: Option<MessageId>,
        payload: Arc<dyn Message>,
    ) -> Self {
        Self::new(destination, sender, id, payload, DEFAULT_WEIGHT)
    }

    /// The weight of the edge this message traveled.
    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// The wrapped payload message.
    #[inline]
    pub fn payload(&self) -> &dyn Message {
        &*self.payload
    }

    /// A shared handle to the payload, for forwarding it onward in a new
    /// specification.
    pub fn payload_shared(&self) -> Arc<dyn Message> {
        Arc::clone(&self.payload)
    }
}

impl Message for SocialMessage {
    fn id(&self) -> MessageId {
        self.id
    }
    fn sender(&self) -> AgentId {
        self.sender
    }
    fn destination(&self) -> AgentId {
        self.destination
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}
