//! Unit tests for abm-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, MessageId};

    #[test]
    fn raw_roundtrip() {
        let id = AgentId::from_u128(42);
        assert_eq!(id.as_u128(), 42);
        assert_eq!(u128::from(id), 42);
    }

    #[test]
    fn random_ids_are_distinct() {
        let a = MessageId::random();
        let b = MessageId::random();
        assert_ne!(a, b);
    }

    #[test]
    fn ordering() {
        assert!(AgentId::from_u128(0) < AgentId::from_u128(1));
    }

    #[test]
    fn display() {
        let id = MessageId::from_u128(0xff);
        assert_eq!(
            id.to_string(),
            "MessageId(000000000000000000000000000000ff)"
        );
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimTime, TimeError};

    #[test]
    fn sim_time_arithmetic() {
        let t = SimTime(10);
        assert_eq!(t + 5, SimTime(15));
        assert_eq!(t.offset(3), SimTime(13));
        assert_eq!(SimTime(15) - SimTime(10), 5u64);
        assert_eq!(SimTime(15).since(SimTime(10)), 5u64);
    }

    #[test]
    fn subtraction_saturates_at_zero() {
        assert_eq!(SimTime(3) - SimTime(10), 0);
        assert_eq!(SimTime(3).since(SimTime(10)), 0);
    }

    #[test]
    fn new_clock_starts_at_start() {
        let clock = SimClock::new(SimTime(5), SimTime(100)).unwrap();
        assert_eq!(clock.current(), SimTime(5));
        assert_eq!(clock.start(), SimTime(5));
        assert_eq!(clock.end(), SimTime(100));
        assert_eq!(clock.remaining(), 95);
    }

    #[test]
    fn empty_window_rejected() {
        assert_eq!(
            SimClock::new(SimTime(10), SimTime(10)).unwrap_err(),
            TimeError::EmptyWindow {
                start: SimTime(10),
                end: SimTime(10),
            }
        );
        assert!(SimClock::new(SimTime(10), SimTime(3)).is_err());
    }

    #[test]
    fn check_names_the_violated_bound() {
        let mut clock = SimClock::new(SimTime(10), SimTime(20)).unwrap();
        clock.advance_to(SimTime(15)).unwrap();

        assert!(matches!(
            clock.check(SimTime(9)),
            Err(TimeError::BeforeStart { .. })
        ));
        assert!(matches!(
            clock.check(SimTime(21)),
            Err(TimeError::AfterEnd { .. })
        ));
        assert!(matches!(
            clock.check(SimTime(12)),
            Err(TimeError::BeforeCurrent { .. })
        ));
    }

    #[test]
    fn end_is_inclusive() {
        let clock = SimClock::new(SimTime(0), SimTime(20)).unwrap();
        assert!(clock.check(SimTime(20)).is_ok());
        assert!(clock.check(SimTime(21)).is_err());
    }

    #[test]
    fn advance_is_monotonic() {
        let mut clock = SimClock::new(SimTime(0), SimTime(20)).unwrap();
        clock.advance_to(SimTime(7)).unwrap();
        assert_eq!(clock.current(), SimTime(7));

        // Equal time is a permitted no-op move.
        clock.advance_to(SimTime(7)).unwrap();
        assert_eq!(clock.current(), SimTime(7));

        // Backward move fails and leaves the clock untouched.
        assert!(clock.advance_to(SimTime(3)).is_err());
        assert_eq!(clock.current(), SimTime(7));
    }

    #[test]
    fn display() {
        let clock = SimClock::new(SimTime(0), SimTime(9)).unwrap();
        assert_eq!(clock.to_string(), "T0 in [T0, T9]");
        assert_eq!(SimTime(4).to_string(), "T4");
    }
}
