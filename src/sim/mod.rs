//! The simulation core: physics, obstacle generation, collision, scoring.
//!
//! The caller controls cadence — `process_tick` advances exactly one frame
//! and is inert outside of `Playing`, so it can be driven from any frame
//! scheduler (or a bare loop in tests).

pub mod logic;
pub mod types;

pub use logic::{flap, process_tick};
pub use types::{Bird, BirdPose, FlappySim, Mode, Pipe, SimConfig, SimSnapshot};
