//! Simulation iteration counter.
//!
//! One iteration is one full pass over the (freshly shuffled) population.
//! The run length is fixed up front; there is no notion of wall-clock time.

use std::fmt;

/// Zero-based index of a simulation iteration.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Iteration(pub u64);

impl Iteration {
    pub const ZERO: Iteration = Iteration(0);

    /// The iteration immediately after `self`.
    #[inline]
    pub fn next(self) -> Iteration {
        Iteration(self.0 + 1)
    }
}

impl std::ops::Add<u64> for Iteration {
    type Output = Iteration;
    #[inline]
    fn add(self, rhs: u64) -> Iteration {
        Iteration(self.0 + rhs)
    }
}

impl fmt::Display for Iteration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "I{}", self.0)
    }
}
