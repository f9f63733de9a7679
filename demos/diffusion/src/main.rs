//! Rumor diffusion over a small social network.
//!
//! Ten agents sit on a ring with a few long-range shortcuts.  A wake-up
//! message starts one agent spreading a rumor; every agent that hears the
//! rumor for the first time immediately re-propagates it along its own
//! edges, so the cascade ripples through the whole bucket.  The observer
//! prints every delivery, and the run ends when the rumor has nowhere new
//! to go.

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use abm_core::{AgentId, Message, MessageId, SimTime};
use abm_engine::{Agent, EventScheduler, SimContext, SimObserver};
use abm_producer::WakeUpMessage;
use abm_social::{MessageSpecification, SocialGraph, SocialMessage};

const AGENTS: usize = 10;
const SIM_END: SimTime = SimTime(100);

// ── The rumor payload ─────────────────────────────────────────────────────────

#[derive(Debug)]
struct Rumor {
    id: MessageId,
    originator: AgentId,
    text: &'static str,
}

impl Message for Rumor {
    fn id(&self) -> MessageId {
        self.id
    }
    fn sender(&self) -> AgentId {
        self.originator
    }
    fn destination(&self) -> AgentId {
        self.originator
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ── The gossiping agent ───────────────────────────────────────────────────────

/// Spreads any rumor it hears exactly once, one time unit after hearing it.
struct Gossip {
    id: AgentId,
    graph: Rc<SocialGraph>,
    heard: Rc<RefCell<Vec<AgentId>>>,
    spread: bool,
}

impl Gossip {
    fn spread_rumor(&mut self, payload: Arc<dyn Message>, ctx: &mut SimContext<'_>) {
        if self.spread {
            return;
        }
        self.spread = true;
        self.heard.borrow_mut().push(self.id);

        let spec = MessageSpecification::new(None, self.id, payload);
        // Fan out along our edges immediately; neighbors hear the rumor in
        // the same time step and keep the cascade going.
        self.graph
            .propagate(ctx, &spec)
            .expect("every gossip agent is a graph vertex");
    }
}

impl Agent for Gossip {
    fn id(&self) -> AgentId {
        self.id
    }

    fn handle(&mut self, message: &dyn Message, ctx: &mut SimContext<'_>) {
        if let Some(social) = message.as_any().downcast_ref::<SocialMessage>() {
            self.spread_rumor(social.payload_shared(), ctx);
        } else if message.as_any().is::<WakeUpMessage>() {
            // The seed: agent 0 invents the rumor when woken.
            let rumor: Arc<dyn Message> = Arc::new(Rumor {
                id: MessageId::random(),
                originator: self.id,
                text: "the simulation is being watched",
            });
            self.spread_rumor(rumor, ctx);
        }
    }
}

// ── Progress observer ─────────────────────────────────────────────────────────

struct Progress {
    deliveries: usize,
}

impl SimObserver for Progress {
    fn on_time_advance(&mut self, time: SimTime) {
        println!("-- {time}");
    }

    fn on_deliver(&mut self, _time: SimTime, message: &dyn Message) {
        self.deliveries += 1;
        if let Some(social) = message.as_any().downcast_ref::<SocialMessage>() {
            let rumor = social
                .payload()
                .as_any()
                .downcast_ref::<Rumor>()
                .map_or("?", |r| r.text);
            println!(
                "   {} hears \"{rumor}\" (weight {:.2})",
                short(social.destination()),
                social.weight()
            );
        } else {
            println!("   {} wakes up", short(message.destination()));
        }
    }

    fn on_run_end(&mut self, final_time: SimTime) {
        println!("-- run ended at {final_time}");
    }
}

fn short(id: AgentId) -> String {
    format!("agent#{:x}", id.as_u128())
}

// ── Wiring ────────────────────────────────────────────────────────────────────

fn build_graph(ids: &[AgentId]) -> anyhow::Result<SocialGraph> {
    let mut graph = SocialGraph::new();
    for &id in ids {
        graph.add_vertex(id);
    }
    // Ring with decreasing acquaintance weights.
    for i in 0..ids.len() {
        let next = ids[(i + 1) % ids.len()];
        graph.add_edge(ids[i], next, 0.9)?;
    }
    // A few long-range shortcuts.
    graph.add_edge(ids[0], ids[5], 0.4)?;
    graph.add_edge(ids[3], ids[8], 0.3)?;
    graph.add_edge(ids[7], ids[2], 0.2)?;
    Ok(graph)
}

fn main() -> anyhow::Result<()> {
    let ids: Vec<AgentId> = (1..=AGENTS as u128).map(AgentId::from_u128).collect();
    let graph = Rc::new(build_graph(&ids)?);
    let heard = Rc::new(RefCell::new(Vec::new()));

    let mut sched = EventScheduler::new(SimTime(0), SIM_END)?;
    for &id in &ids {
        sched.register_agent(Box::new(Gossip {
            id,
            graph: Rc::clone(&graph),
            heard: Rc::clone(&heard),
            spread: false,
        }));
    }

    WakeUpMessage::schedule(&mut sched, ids[0], SimTime(1), None)?;

    let mut progress = Progress { deliveries: 0 };
    sched.run_with(&mut progress)?;

    println!();
    println!(
        "{} of {AGENTS} agents heard the rumor, {} deliveries, finished at {}",
        heard.borrow().len(),
        progress.deliveries,
        sched.current_time()
    );
    Ok(())
}
