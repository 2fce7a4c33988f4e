//! The three-stage instruction pipeline.
//!
//! Contains the pipeline orchestrator ([`engine::Pipeline`]), the two
//! inter-stage latches, the [`traits::PipelineLatch`] interface they
//! implement, and the Fetch/Decode/Execute stage functions that mutate the
//! orchestrator's state.

/// The pipeline orchestrator: owns architectural state and both latches,
/// and drives the per-cycle stage sequence.
pub mod engine;

/// IF/ID and ID/EX latch types.
pub mod latches;

/// Fetch, Decode, and Execute stage implementations.
pub mod stages;

/// The `PipelineLatch` interface shared by both latch types.
pub mod traits;

pub use engine::{CycleActivity, Pipeline};
pub use latches::{IdEx, IdExEntry, IfId, IfIdEntry};
pub use traits::PipelineLatch;
