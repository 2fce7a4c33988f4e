//! Execution units used by the Execute stage.

/// The arithmetic/logic unit and condition-flag derivation.
pub mod alu;

pub use alu::{derive_flags, Alu, FlagOp};
