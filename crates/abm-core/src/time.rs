//! Simulation time model.
//!
//! # Design
//!
//! Time is represented as an absolute `SimTime` timestamp in abstract time
//! units.  The engine never interprets the unit — a unit may be a second, an
//! hour, or anything else the application decides.  Using an integer as the
//! canonical time value means all window arithmetic is exact (no
//! floating-point drift) and comparisons are O(1).
//!
//! `SimClock` owns the bounded simulation window: `start` and `end` are
//! fixed at construction (`start < end` enforced), `current` begins at
//! `start` and only ever moves forward via [`SimClock::advance_to`].  The
//! invariant `start ≤ current ≤ end` holds from construction onward, which
//! is why the fields are private.

use std::fmt;

use crate::error::{TimeError, TimeResult};

// ── SimTime ──────────────────────────────────────────────────────────────────

/// An absolute simulated timestamp.
///
/// Stored as `u64`: at one unit per nanosecond a `u64` spans ~585 years of
/// simulated time, and coarser units last far longer than any conceivable
/// run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub u64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);

    /// Return the timestamp `n` units after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> SimTime {
        SimTime(self.0 + n)
    }

    /// Units elapsed from `earlier` to `self`, saturating at zero when
    /// `earlier > self`.
    #[inline]
    pub fn since(self, earlier: SimTime) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: u64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

/// Units elapsed between two timestamps; `self - rhs` saturates at zero
/// when `rhs > self` (same in debug and release builds).
impl std::ops::Sub for SimTime {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: SimTime) -> u64 {
        self.0.saturating_sub(rhs.0)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ─────────────────────────────────────────────────────────────────

/// The bounded, monotonically advancing clock of one simulation run.
///
/// Cheap to copy and intentionally holds no heap data.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    start: SimTime,
    end: SimTime,
    current: SimTime,
}

impl SimClock {
    /// Create a clock for the window `[start, end]`, positioned at `start`.
    ///
    /// Fails with [`TimeError::EmptyWindow`] unless `start < end`.
    pub fn new(start: SimTime, end: SimTime) -> TimeResult<Self> {
        if start >= end {
            return Err(TimeError::EmptyWindow { start, end });
        }
        Ok(Self {
            start,
            end,
            current: start,
        })
    }

    /// First instant of the simulation window.
    #[inline]
    pub fn start(&self) -> SimTime {
        self.start
    }

    /// Last instant of the simulation window (inclusive).
    #[inline]
    pub fn end(&self) -> SimTime {
        self.end
    }

    /// The clock's current position.
    #[inline]
    pub fn current(&self) -> SimTime {
        self.current
    }

    /// Simulated units remaining until the window closes.
    #[inline]
    pub fn remaining(&self) -> u64 {
        self.end - self.current
    }

    /// Validate that `time` is schedulable: within `[start, end]` (inclusive
    /// upper bound) and not in the past relative to `current`.
    ///
    /// The returned error names the violated bound.  Never mutates.
    pub fn check(&self, time: SimTime) -> TimeResult<()> {
        if time < self.start {
            Err(TimeError::BeforeStart {
                time,
                start: self.start,
            })
        } else if time > self.end {
            Err(TimeError::AfterEnd {
                time,
                end: self.end,
            })
        } else if time < self.current {
            Err(TimeError::BeforeCurrent {
                time,
                current: self.current,
            })
        } else {
            Ok(())
        }
    }

    /// Move the clock forward to `time`.
    ///
    /// `time == current` is permitted (no-op move); moving backward or out
    /// of the window fails without changing the clock.
    pub fn advance_to(&mut self, time: SimTime) -> TimeResult<()> {
        self.check(time)?;
        self.current = time;
        Ok(())
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in [{}, {}]", self.current, self.start, self.end)
    }
}
