//! The `Message` trait — the value agents exchange.
//!
//! A message is an immutable envelope: sender, destination, and a unique
//! identity, all fixed at construction.  Concrete message types add whatever
//! payload they need; handlers that care about a specific type recover it
//! through [`Message::as_any`].

use std::any::Any;
use std::fmt;

use crate::ids::{AgentId, MessageId};

/// An immutable, uniquely identified message between two agents.
///
/// Implementations must not mutate after construction; the scheduler hands
/// out shared references during delivery and may hold a message across
/// arbitrary re-entrant scheduling.
pub trait Message: fmt::Debug {
    /// The unique identity of this message instance.
    fn id(&self) -> MessageId;

    /// The agent that sent the message.
    fn sender(&self) -> AgentId;

    /// The agent the message is addressed to.
    fn destination(&self) -> AgentId;

    /// Downcasting support for handlers that dispatch on concrete message
    /// types (`message.as_any().downcast_ref::<SocialMessage>()`).
    fn as_any(&self) -> &dyn Any;
}
