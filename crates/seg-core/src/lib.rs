//! `seg-core` — foundational types for the segregation model.
//!
//! This crate is a dependency of every other `seg-*` crate.  It intentionally
//! has no `seg-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`kind`]        | `AgentKind`                                           |
//! | [`position`]    | `Position`, torus wrapping, Moore neighborhood        |
//! | [`iteration`]   | `Iteration`                                           |
//! | [`config`]      | `SimConfig` and its validation rules                  |
//! | [`rng`]         | `SimRng`                                              |
//! | [`error`]       | `SegError`, `SegResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types and     |
//! |         | `SimConfig::from_json_path`.                               |

pub mod config;
pub mod error;
pub mod ids;
pub mod iteration;
pub mod kind;
pub mod position;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{SegError, SegResult};
pub use ids::AgentId;
pub use iteration::Iteration;
pub use kind::AgentKind;
pub use position::{NEIGHBOR_OFFSETS, Position};
pub use rng::SimRng;
