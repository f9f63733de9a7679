//! Strongly typed, randomly generated identifier wrappers.
//!
//! Every entity in a simulation — agents, messages, message specifications —
//! is addressed by an opaque 128-bit token.  Freshly generated identifiers
//! are drawn uniformly at random, so two independently created entities
//! collide with probability ~2⁻¹²⁸ even across separate runs.  Sequential
//! counters are deliberately avoided: they would make identifiers from two
//! runs (or two simulations in one process) indistinguishable.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  `from_u128` exists for tests and
//! reproducible fixtures that need stable identifiers.

use std::fmt;

/// Generate a typed 128-bit random identifier wrapper.
macro_rules! random_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(u128);

        impl $name {
            /// Draw a fresh identifier from the thread-local RNG.
            pub fn random() -> Self {
                $name(rand::random::<u128>())
            }

            /// Wrap an explicit raw value.  Intended for tests and fixtures
            /// that need stable, human-readable identifiers.
            #[inline(always)]
            pub const fn from_u128(raw: u128) -> Self {
                $name(raw)
            }

            /// The raw 128-bit value.
            #[inline(always)]
            pub const fn as_u128(self) -> u128 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({:032x})", stringify!($name), self.0)
            }
        }

        impl From<$name> for u128 {
            #[inline(always)]
            fn from(id: $name) -> u128 {
                id.0
            }
        }
    };
}

random_id! {
    /// Identity of an agent — the address messages are delivered to.
    pub struct AgentId;
}

random_id! {
    /// Identity of a single message instance.  Fresh per instance; two
    /// messages never share an ID unless one was constructed with an
    /// explicit identifier.
    pub struct MessageId;
}

random_id! {
    /// Identity of a message specification (a fan-out template).
    pub struct SpecId;
}
