//! Pipeline stage implementations: Fetch, Decode, Execute.
//!
//! No Memory or Writeback stage exists in this pipeline — §4.3 defines
//! exactly three stages, with register and data-memory writes performed
//! directly by Execute (see §5's "sole mutator is Execute").

/// Decode stage: extracts fields, validates immediates, sign-extends,
/// writes ID/EX.
pub mod decode;

/// Execute stage: dispatches on opcode, updates architectural state,
/// handles branch flushes.
pub mod execute;

/// Fetch stage: reads instruction memory, writes IF/ID, advances PC.
pub mod fetch;

pub use decode::decode_stage;
pub use execute::execute_stage;
pub use fetch::fetch_stage;
