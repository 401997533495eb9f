//! Agent type shared by the simulation and every reporting collaborator.
//!
//! The reference configuration has exactly two kinds (`A` and `B`), but
//! nothing in the engine assumes that: a kind is just a small integer label
//! and the happiness predicate only ever compares kinds for equality.

/// The immutable type of an agent, assigned at construction.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentKind(pub u8);

impl AgentKind {
    /// First kind — the lower half of the population in the reference run.
    pub const A: AgentKind = AgentKind(0);
    /// Second kind — the remainder of the population.
    pub const B: AgentKind = AgentKind(1);

    /// Largest number of distinct kinds a run may declare.
    pub const MAX_KINDS: u8 = 26;

    /// Single-letter label: `A`, `B`, `C`, …
    ///
    /// Kinds past `Z` render as `?`; [`SimConfig::validate`][crate::SimConfig::validate]
    /// rejects configurations that would produce them.
    pub fn label(self) -> char {
        if self.0 < Self::MAX_KINDS {
            (b'A' + self.0) as char
        } else {
            '?'
        }
    }

    /// Cast to `usize` for indexing per-kind tallies.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
