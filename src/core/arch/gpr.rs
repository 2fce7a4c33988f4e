//! General-purpose register file.
//!
//! Sixty-four 8-bit two's-complement registers, R0..R63, each initialized
//! to zero. Unlike a RISC-V-style GPR file, no register index is hardwired
//! — every register is freely writable.

/// Number of general-purpose registers.
pub const REGISTER_COUNT: usize = 64;

/// General-purpose register file: R0..R63, each an 8-bit signed integer.
///
/// Also tracks, per Design Note 9, which registers have been referenced as
/// an operand by some instruction that reached Decode — the "touched" set
/// folded in from the original program's file-scope `reg_used` array. This
/// is bookkeeping, not the criterion the trace emitter uses to decide what
/// to print (see [`crate::trace`]).
#[derive(Clone, Debug)]
pub struct Gpr {
    regs: [i8; REGISTER_COUNT],
    touched: [bool; REGISTER_COUNT],
}

impl Default for Gpr {
    fn default() -> Self {
        Self::new()
    }
}

impl Gpr {
    /// Creates a register file with all registers initialized to zero and
    /// no registers marked as touched.
    pub fn new() -> Self {
        Self {
            regs: [0; REGISTER_COUNT],
            touched: [false; REGISTER_COUNT],
        }
    }

    /// Reads register `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= 64`. Callers must validate register indices at
    /// decode time; an out-of-range index reaching here is a bug.
    pub fn read(&self, idx: u8) -> i8 {
        self.regs[idx as usize]
    }

    /// Writes `val` into register `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= 64`.
    pub fn write(&mut self, idx: u8, val: i8) {
        self.regs[idx as usize] = val;
    }

    /// Marks register `idx` as touched (referenced as an operand at
    /// Decode).
    pub fn mark_touched(&mut self, idx: u8) {
        self.touched[idx as usize] = true;
    }

    /// Whether register `idx` has ever been touched.
    pub fn is_touched(&self, idx: u8) -> bool {
        self.touched[idx as usize]
    }

    /// Iterates over all 64 registers as `(index, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (u8, i8)> + '_ {
        self.regs.iter().enumerate().map(|(i, &v)| (i as u8, v))
    }
}
