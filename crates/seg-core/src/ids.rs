//! Agent identity.

use std::fmt;

/// Index of an agent in the SoA columns of the agent store.
///
/// The population is fixed at construction and agents are never removed, so
/// ids are dense (`0..count`) and stay valid for the whole run.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);

impl AgentId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgentId({})", self.0)
    }
}

/// Fails when the population index does not fit in a `u32`.
impl TryFrom<usize> for AgentId {
    type Error = std::num::TryFromIntError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        u32::try_from(n).map(AgentId)
    }
}
