//! Run configuration.
//!
//! Typically built in code or loaded from a JSON file by the application
//! crate (see [`SimConfig::from_json_path`], behind the `serde` feature) and
//! validated once, before any agent is placed.

use crate::{AgentKind, SegError, SegResult};

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Grid width (number of distinct `x` values).
    pub width: u32,

    /// Grid height (number of distinct `y` values).
    pub height: u32,

    /// Total population.  Must not exceed `width * height`.
    pub agent_count: usize,

    /// Minimum number of same-kind occupied neighbors an agent needs to be
    /// happy.  Values above 8 are legal and make every agent permanently
    /// unhappy.
    pub same_preference: u8,

    /// Number of agent kinds.  The population is split into contiguous,
    /// near-equal blocks by index.
    pub kind_count: u8,

    /// Iterations to run.  The loop never stops early.
    pub iterations: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width:           20,
            height:          20,
            agent_count:     200,
            same_preference: 3,
            kind_count:      2,
            iterations:      10,
            seed:            42,
        }
    }
}

impl SimConfig {
    /// Number of cells on the grid.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check every field before the world is built.
    ///
    /// A configuration that passes is guaranteed to place every agent.
    pub fn validate(&self) -> SegResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SegError::Config(format!(
                "grid dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        // Cell indices are computed in `i32`.
        if u64::from(self.width) * u64::from(self.height) > i32::MAX as u64 {
            return Err(SegError::Config(format!(
                "grid dimensions {}x{} exceed the addressable range",
                self.width, self.height
            )));
        }
        if self.iterations == 0 {
            return Err(SegError::Config("iteration count must be positive".into()));
        }
        if self.agent_count == 0 {
            return Err(SegError::Config("agent count must be positive".into()));
        }
        if self.agent_count > u32::MAX as usize {
            return Err(SegError::Config(format!(
                "agent count {} exceeds the AgentId range",
                self.agent_count
            )));
        }
        if self.agent_count > self.capacity() {
            return Err(SegError::Config(format!(
                "{} agents do not fit on a {}x{} grid ({} cells)",
                self.agent_count,
                self.width,
                self.height,
                self.capacity()
            )));
        }
        if self.kind_count == 0 || self.kind_count > AgentKind::MAX_KINDS {
            return Err(SegError::Config(format!(
                "kind count must be between 1 and {}, got {}",
                AgentKind::MAX_KINDS,
                self.kind_count
            )));
        }
        Ok(())
    }

    /// Load a configuration from a JSON file.  Missing fields take their
    /// [`Default`] values.  The result is not validated.
    #[cfg(feature = "serde")]
    pub fn from_json_path(path: &std::path::Path) -> SegResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Parse a configuration from a JSON string.
    #[cfg(feature = "serde")]
    pub fn from_json_str(text: &str) -> SegResult<Self> {
        serde_json::from_str(text).map_err(|e| SegError::Parse(e.to_string()))
    }
}
