//! `AgentRegistry` — identity → agent bindings.

use abm_core::AgentId;
use rustc_hash::FxHashMap;

use crate::agent::Agent;

/// The set of agents the scheduler can deliver to, keyed by identity.
///
/// Uses `FxHashMap`: identities are already uniformly random 128-bit
/// values, so SipHash's collision resistance buys nothing here.
#[derive(Default)]
pub struct AgentRegistry {
    agents: FxHashMap<AgentId, Box<dyn Agent>>,
}

impl AgentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `agent` under its own identity.
    ///
    /// Re-registering an identity is last-write-wins; the displaced agent is
    /// returned so callers that care about overwrites can detect them.
    pub fn register(&mut self, agent: Box<dyn Agent>) -> Option<Box<dyn Agent>> {
        self.agents.insert(agent.id(), agent)
    }

    /// Look up the agent bound to `id` for delivery.
    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut (dyn Agent + '_)> {
        match self.agents.get_mut(&id) {
            Some(agent) => Some(agent.as_mut()),
            None => None,
        }
    }

    /// Whether any agent is bound to `id`.
    pub fn contains(&self, id: AgentId) -> bool {
        self.agents.contains_key(&id)
    }

    /// Iterator over all registered identities, in unspecified order.
    pub fn ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.agents.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}
