//! Unit and integration tests for abm-engine.

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use abm_core::{AgentId, Message, MessageId, SimTime, TimeError};

use crate::{
    Agent, EngineError, EventScheduler, MessageQueue, MessageSink, NoopObserver, SimContext,
    SimObserver,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Minimal concrete message: just an addressed envelope.
#[derive(Debug)]
struct Ping {
    id: MessageId,
    sender: AgentId,
    destination: AgentId,
}

impl Ping {
    fn new(sender: AgentId, destination: AgentId) -> Ping {
        Ping {
            id: MessageId::random(),
            sender,
            destination,
        }
    }
}

impl Message for Ping {
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

/// Agent that records every delivery it sees.
struct Counter {
    id: AgentId,
    received: Rc<RefCell<Vec<(SimTime, MessageId)>>>,
}

impl Counter {
    fn new(id: AgentId) -> (Counter, Rc<RefCell<Vec<(SimTime, MessageId)>>>) {
        let received = Rc::new(RefCell::new(Vec::new()));
        (
            Counter {
                id,
                received: Rc::clone(&received),
            },
            received,
        )
    }
}

impl Agent for Counter {
    fn id(&self) -> AgentId {
        self.id
    }
    fn handle(&mut self, message: &dyn Message, ctx: &mut SimContext<'_>) {
        self.received.borrow_mut().push((ctx.now(), message.id()));
    }
}

/// Agent that forwards one `Ping` to `to` the first time it is handled,
/// either immediately or `delay` units later.
struct Relay {
    id: AgentId,
    to: AgentId,
    delay: u64,
    fired: bool,
}

impl Agent for Relay {
    fn id(&self) -> AgentId {
        self.id
    }
    fn handle(&mut self, _message: &dyn Message, ctx: &mut SimContext<'_>) {
        if self.fired {
            return;
        }
        self.fired = true;
        let ping = Box::new(Ping::new(self.id, self.to));
        if self.delay == 0 {
            ctx.send_now(ping);
        } else {
            ctx.schedule(ping, ctx.now() + self.delay).unwrap();
        }
    }
}

/// Observer that records every hook invocation.
#[derive(Default)]
struct Recording {
    advances: Vec<SimTime>,
    delivered: Vec<(SimTime, MessageId)>,
    scheduled: Vec<SimTime>,
    failed: Vec<AgentId>,
    run_end: Option<SimTime>,
}

impl SimObserver for Recording {
    fn on_time_advance(&mut self, time: SimTime) {
        self.advances.push(time);
    }
    fn on_scheduled(&mut self, time: SimTime, _message: &dyn Message) {
        self.scheduled.push(time);
    }
    fn on_deliver(&mut self, time: SimTime, message: &dyn Message) {
        self.delivered.push((time, message.id()));
    }
    fn on_delivery_failed(&mut self, _time: SimTime, message: &dyn Message) {
        self.failed.push(message.destination());
    }
    fn on_run_end(&mut self, final_time: SimTime) {
        self.run_end = Some(final_time);
    }
}

fn scheduler(start: u64, end: u64) -> EventScheduler {
    EventScheduler::new(SimTime(start), SimTime(end)).unwrap()
}

// ── MessageQueue ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod queue_tests {
    use super::*;

    #[test]
    fn buckets_keep_fifo_order() {
        let a = AgentId::from_u128(1);
        let m1 = Ping::new(a, a);
        let m2 = Ping::new(a, a);
        let (id1, id2) = (m1.id(), m2.id());

        let mut queue = MessageQueue::new();
        queue.push(SimTime(5), Box::new(m1));
        queue.push(SimTime(5), Box::new(m2));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.bucket_count(), 1);

        let bucket = queue.take_bucket(SimTime(5)).unwrap();
        let ids: Vec<MessageId> = bucket.iter().map(|m| m.id()).collect();
        assert_eq!(ids, vec![id1, id2]);
        assert!(queue.is_empty());
    }

    #[test]
    fn next_time_is_earliest() {
        let a = AgentId::from_u128(1);
        let mut queue = MessageQueue::new();
        assert_eq!(queue.next_time(), None);

        queue.push(SimTime(9), Box::new(Ping::new(a, a)));
        queue.push(SimTime(3), Box::new(Ping::new(a, a)));
        queue.push(SimTime(7), Box::new(Ping::new(a, a)));
        assert_eq!(queue.next_time(), Some(SimTime(3)));
        assert_eq!(queue.bucket_count(), 3);
    }

    #[test]
    fn take_missing_bucket_is_none() {
        let mut queue = MessageQueue::new();
        assert!(queue.take_bucket(SimTime(1)).is_none());
    }
}

// ── Scheduling ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod schedule_tests {
    use super::*;

    #[test]
    fn fresh_scheduler_sits_at_start() {
        let sched = scheduler(10, 100);
        assert_eq!(sched.current_time(), SimTime(10));
        assert_eq!(sched.start_time(), SimTime(10));
        assert_eq!(sched.end_time(), SimTime(100));
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn empty_window_rejected() {
        assert!(matches!(
            EventScheduler::new(SimTime(5), SimTime(5)),
            Err(TimeError::EmptyWindow { .. })
        ));
    }

    #[test]
    fn out_of_window_times_rejected_without_side_effects() {
        let a = AgentId::from_u128(1);
        let mut sched = scheduler(10, 100);

        assert!(matches!(
            sched.schedule(Box::new(Ping::new(a, a)), SimTime(9)),
            Err(TimeError::BeforeStart { .. })
        ));
        assert!(matches!(
            sched.schedule(Box::new(Ping::new(a, a)), SimTime(101)),
            Err(TimeError::AfterEnd { .. })
        ));
        assert_eq!(sched.pending(), 0);
        assert_eq!(sched.next_event_time(), None);
    }

    #[test]
    fn end_is_inclusive() {
        let a = AgentId::from_u128(1);
        let mut sched = scheduler(0, 100);
        assert!(sched.schedule(Box::new(Ping::new(a, a)), SimTime(100)).is_ok());
        assert!(sched.schedule(Box::new(Ping::new(a, a)), SimTime(101)).is_err());
        assert_eq!(sched.pending(), 1);
    }

    #[test]
    fn send_now_lands_at_current_time() {
        let a = AgentId::from_u128(1);
        let mut sched = scheduler(10, 100);
        sched.send_now(Box::new(Ping::new(a, a)));
        assert_eq!(sched.next_event_time(), Some(SimTime(10)));
        assert_eq!(sched.pending(), 1);
    }

    #[test]
    fn re_registration_returns_displaced_agent() {
        let id = AgentId::from_u128(1);
        let (first, _) = Counter::new(id);
        let (second, _) = Counter::new(id);

        let mut sched = scheduler(0, 10);
        assert!(sched.register_agent(Box::new(first)).is_none());
        let displaced = sched.register_agent(Box::new(second));
        assert_eq!(displaced.unwrap().id(), id);
        assert_eq!(sched.agents().len(), 1);
    }
}

// ── Run loop ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn single_message_delivered_once() {
        // Window [0, 24], one message at T1: the agent sees it exactly once
        // and the clock stops where the last delivery happened.
        let a = AgentId::from_u128(1);
        let (agent, received) = Counter::new(a);
        let mut sched = scheduler(0, 24);
        sched.register_agent(Box::new(agent));

        let ping = Ping::new(a, a);
        let ping_id = ping.id();
        sched.schedule(Box::new(ping), SimTime(1)).unwrap();
        sched.run().unwrap();

        assert_eq!(received.borrow().as_slice(), &[(SimTime(1), ping_id)]);
        assert_eq!(sched.current_time(), SimTime(1));
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn delivery_is_time_ordered_and_fifo_within_buckets() {
        let a = AgentId::from_u128(1);
        let (agent, _) = Counter::new(a);
        let mut sched = scheduler(0, 100);
        sched.register_agent(Box::new(agent));

        let (m1, m2, m3) = (Ping::new(a, a), Ping::new(a, a), Ping::new(a, a));
        let (id1, id2, id3) = (m1.id(), m2.id(), m3.id());
        // Scheduled out of time order; m1 and m2 share the T5 bucket.
        sched.schedule(Box::new(m1), SimTime(5)).unwrap();
        sched.schedule(Box::new(m2), SimTime(5)).unwrap();
        sched.schedule(Box::new(m3), SimTime(2)).unwrap();

        let mut obs = Recording::default();
        sched.run_with(&mut obs).unwrap();

        assert_eq!(obs.advances, vec![SimTime(2), SimTime(5)]);
        assert_eq!(
            obs.delivered,
            vec![(SimTime(2), id3), (SimTime(5), id1), (SimTime(5), id2)]
        );
        assert_eq!(obs.run_end, Some(SimTime(5)));
    }

    #[test]
    fn send_now_is_schedule_at_current_time() {
        let a = AgentId::from_u128(1);
        let (agent, received) = Counter::new(a);
        let mut sched = scheduler(10, 100);
        sched.register_agent(Box::new(agent));

        sched.send_now(Box::new(Ping::new(a, a)));
        sched.run().unwrap();

        assert_eq!(received.borrow()[0].0, SimTime(10));
        assert_eq!(sched.current_time(), SimTime(10));
    }

    #[test]
    fn unknown_destination_aborts_with_prior_deliveries_intact() {
        let a = AgentId::from_u128(1);
        let ghost = AgentId::from_u128(0xdead);
        let (agent, received) = Counter::new(a);
        let mut sched = scheduler(0, 10);
        sched.register_agent(Box::new(agent));

        sched.schedule(Box::new(Ping::new(a, a)), SimTime(3)).unwrap();
        sched.schedule(Box::new(Ping::new(a, ghost)), SimTime(3)).unwrap();
        sched.schedule(Box::new(Ping::new(a, a)), SimTime(3)).unwrap();

        let mut obs = Recording::default();
        let err = sched.run_with(&mut obs).unwrap_err();
        assert!(matches!(
            err,
            EngineError::UnknownAgent { destination, time }
                if destination == ghost && time == SimTime(3)
        ));

        // First message delivered, failure reported, third discarded.
        assert_eq!(received.borrow().len(), 1);
        assert_eq!(obs.failed, vec![ghost]);
        assert_eq!(sched.pending(), 0);
        assert!(obs.run_end.is_none());
    }

    #[test]
    fn messages_scheduled_mid_delivery_reach_same_run() {
        let relay_id = AgentId::from_u128(1);
        let counter_id = AgentId::from_u128(2);
        let (counter, received) = Counter::new(counter_id);
        let mut sched = scheduler(0, 100);
        sched.register_agent(Box::new(Relay {
            id: relay_id,
            to: counter_id,
            delay: 5,
            fired: false,
        }));
        sched.register_agent(Box::new(counter));

        sched
            .schedule(Box::new(Ping::new(counter_id, relay_id)), SimTime(2))
            .unwrap();
        sched.run().unwrap();

        assert_eq!(received.borrow().as_slice()[0].0, SimTime(7));
        assert_eq!(sched.current_time(), SimTime(7));
    }

    #[test]
    fn send_now_during_end_bucket_still_delivered() {
        // A handler firing at the window end re-creates the end bucket;
        // the drain must pick it up before the loop terminates.
        let relay_id = AgentId::from_u128(1);
        let counter_id = AgentId::from_u128(2);
        let (counter, received) = Counter::new(counter_id);
        let mut sched = scheduler(0, 10);
        sched.register_agent(Box::new(Relay {
            id: relay_id,
            to: counter_id,
            delay: 0,
            fired: false,
        }));
        sched.register_agent(Box::new(counter));

        sched
            .schedule(Box::new(Ping::new(counter_id, relay_id)), SimTime(10))
            .unwrap();
        sched.run().unwrap();

        assert_eq!(received.borrow().as_slice()[0].0, SimTime(10));
        assert_eq!(sched.current_time(), SimTime(10));
    }

    #[test]
    fn run_at_delivers_exactly_one_bucket_without_advancing() {
        let a = AgentId::from_u128(1);
        let (agent, received) = Counter::new(a);
        let mut sched = scheduler(0, 10);
        sched.register_agent(Box::new(agent));

        sched.schedule(Box::new(Ping::new(a, a)), SimTime(0)).unwrap();
        sched.schedule(Box::new(Ping::new(a, a)), SimTime(4)).unwrap();

        sched.run_at(SimTime(0), &mut NoopObserver).unwrap();
        assert_eq!(received.borrow().len(), 1);
        assert_eq!(sched.current_time(), SimTime(0));
        assert_eq!(sched.pending(), 1);

        // No bucket at T2: a validated no-op.
        sched.run_at(SimTime(2), &mut NoopObserver).unwrap();
        assert_eq!(received.borrow().len(), 1);

        // Out-of-window time is still rejected.
        assert!(sched.run_at(SimTime(11), &mut NoopObserver).is_err());
    }

    #[test]
    fn context_scheduling_is_observed() {
        let relay_id = AgentId::from_u128(1);
        let counter_id = AgentId::from_u128(2);
        let (counter, _) = Counter::new(counter_id);
        let mut sched = scheduler(0, 10);
        sched.register_agent(Box::new(Relay {
            id: relay_id,
            to: counter_id,
            delay: 3,
            fired: false,
        }));
        sched.register_agent(Box::new(counter));

        sched
            .schedule(Box::new(Ping::new(counter_id, relay_id)), SimTime(1))
            .unwrap();
        let mut obs = Recording::default();
        sched.run_with(&mut obs).unwrap();

        // One mid-delivery schedule (the relay's), at T1 + 3.
        assert_eq!(obs.scheduled, vec![SimTime(4)]);
        assert_eq!(obs.delivered.len(), 2);
    }
}
