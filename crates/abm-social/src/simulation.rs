//! `SocialSimulation` — an event scheduler bundled with its social graph.
//!
//! The scheduler's agent registry and the graph's vertex set describe the
//! same population, so keeping them in separate values means every caller
//! must update both on registration.  Bundling them couples the two:
//! [`SocialSimulation::register_agent`] registers the agent with the
//! scheduler and inserts its vertex into the graph in one step, so the sets
//! cannot drift apart.

use abm_core::{Message, SimTime, TimeResult};
use abm_engine::{Agent, EngineResult, EventScheduler, MessageSink, SimObserver};

use crate::error::GraphResult;
use crate::graph::SocialGraph;
use crate::specification::MessageSpecification;

/// An [`EventScheduler`] and a [`SocialGraph`] sharing one agent population.
///
/// Use this when agents read the graph only between runs or not at all.
/// Agents that need graph access from inside their own handler must share
/// the graph explicitly (e.g. through `Rc`) and keep registration in sync
/// themselves.
pub struct SocialSimulation {
    scheduler: EventScheduler,
    graph: SocialGraph,
}

impl SocialSimulation {
    /// Create a simulation for the window `[start, end]` around an existing
    /// graph (possibly pre-populated with vertices and edges).
    ///
    /// Fails with [`TimeError::EmptyWindow`][abm_core::TimeError::EmptyWindow]
    /// unless `start < end`.
    pub fn new(start: SimTime, end: SimTime, graph: SocialGraph) -> TimeResult<Self> {
        Ok(Self {
            scheduler: EventScheduler::new(start, end)?,
            graph,
        })
    }

    /// Register `agent` with the scheduler and insert its identity as a
    /// graph vertex, in one step.
    ///
    /// Registration is last-write-wins like
    /// [`EventScheduler::register_agent`]; the displaced agent is returned.
    /// The vertex insert is idempotent, so re-registering keeps the existing
    /// vertex and its edges.
    pub fn register_agent(&mut self, agent: Box<dyn Agent>) -> Option<Box<dyn Agent>> {
        self.graph.add_vertex(agent.id());
        self.scheduler.register_agent(agent)
    }

    /// Expand `spec` over the graph and send the fan-out through the
    /// bundled scheduler.  See [`SocialGraph::propagate`].
    pub fn propagate(&mut self, spec: &MessageSpecification) -> GraphResult<usize> {
        self.graph.propagate(&mut self.scheduler, spec)
    }

    /// Run the bundled scheduler to completion without observation.
    pub fn run(&mut self) -> EngineResult<()> {
        self.scheduler.run()
    }

    /// Run the bundled scheduler to completion under `observer`.
    pub fn run_with<O: SimObserver>(&mut self, observer: &mut O) -> EngineResult<()> {
        self.scheduler.run_with(observer)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn scheduler(&self) -> &EventScheduler {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut EventScheduler {
        &mut self.scheduler
    }

    pub fn graph(&self) -> &SocialGraph {
        &self.graph
    }

    /// Mutable graph access, for wiring edges between registered agents.
    pub fn graph_mut(&mut self) -> &mut SocialGraph {
        &mut self.graph
    }
}

impl MessageSink for SocialSimulation {
    fn send_now(&mut self, message: Box<dyn Message>) {
        self.scheduler.send_now(message);
    }

    fn schedule(&mut self, message: Box<dyn Message>, time: SimTime) -> TimeResult<()> {
        self.scheduler.schedule(message, time)
    }
}
