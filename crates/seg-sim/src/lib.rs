//! `seg-sim` — the segregation model engine.
//!
//! # Iteration loop
//!
//! ```text
//! for iteration in 0..config.iterations:
//!   ① Shuffle  — fresh uniformly random activation order (from SimRng).
//!   ② Moves    — for each agent in that order, sequentially:
//!                  happy here          → Stayed
//!                  first happy vacancy → Moved (visible to later agents)
//!                  none                → Stuck
//!   ③ Report   — happy count + read-only grid view to the SimObserver.
//! ```
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`agent`]     | `AgentStore` (SoA), happiness predicate, kind split rule   |
//! | [`grid`]      | `Grid` (torus occupancy), `GridView`                       |
//! | [`world`]     | `World`, `MoveOutcome`                                     |
//! | [`builder`]   | `WorldBuilder`                                             |
//! | [`observer`]  | `SimObserver`, `NoopObserver`, summaries                   |
//! | [`error`]     | `SimError`, `SimResult<T>`                                 |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use seg_core::{SimConfig, SimRng};
//! use seg_sim::{NoopObserver, WorldBuilder};
//!
//! let config = SimConfig::default();
//! let mut rng = SimRng::new(config.seed);
//! let mut world = WorldBuilder::new(config).build(&mut rng)?;
//! world.run(&mut rng, &mut NoopObserver)?;
//! ```

pub mod agent;
pub mod builder;
pub mod error;
pub mod grid;
pub mod observer;
pub mod world;


pub use agent::AgentStore;
pub use builder::WorldBuilder;
pub use error::{SimError, SimResult};
pub use grid::{Grid, GridView};
pub use observer::{IterationSummary, NoopObserver, RunSummary, SimObserver};
pub use world::{MoveOutcome, World};
