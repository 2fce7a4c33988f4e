//! Instruction memory and data memory.

/// Number of 16-bit words of instruction memory.
pub const INSTRUCTION_MEMORY_SIZE: usize = 1024;
/// Number of bytes of data memory.
pub const DATA_MEMORY_SIZE: usize = 2048;

/// A single instruction-memory slot: a 16-bit word plus its 1-based
/// instruction number, used for tracing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InstructionSlot {
    /// The raw 16-bit encoded word. Zero means the slot was never loaded.
    pub word: u16,
    /// 1-based instruction number, assigned in load order.
    pub inst_number: u32,
}

/// Read-only-after-load instruction memory: 1024 slots.
#[derive(Clone, Debug)]
pub struct InstructionMemory {
    slots: [InstructionSlot; INSTRUCTION_MEMORY_SIZE],
    /// Number of slots actually populated by the loaded program.
    loaded_count: usize,
}

impl Default for InstructionMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl InstructionMemory {
    /// Creates an empty instruction memory.
    pub fn new() -> Self {
        Self {
            slots: [InstructionSlot::default(); INSTRUCTION_MEMORY_SIZE],
            loaded_count: 0,
        }
    }

    /// Loads `words` into memory starting at address 0, in order,
    /// assigning 1-based instruction numbers. Truncates silently at
    /// capacity; callers (the assembler) are responsible for diagnosing
    /// an over-long program before calling this.
    pub fn load(&mut self, words: &[u16]) {
        let n = words.len().min(INSTRUCTION_MEMORY_SIZE);
        for (i, &word) in words.iter().take(n).enumerate() {
            self.slots[i] = InstructionSlot {
                word,
                inst_number: (i + 1) as u32,
            };
        }
        self.loaded_count = n;
    }

    /// Number of instructions loaded.
    pub fn loaded_count(&self) -> usize {
        self.loaded_count
    }

    /// Reads the slot at `addr`, or `None` if `addr` is out of bounds.
    pub fn get(&self, addr: u16) -> Option<InstructionSlot> {
        self.slots.get(addr as usize).copied()
    }

    /// Iterates over every non-zero instruction-memory slot, in address
    /// order, as `(address, word)`.
    pub fn nonzero(&self) -> impl Iterator<Item = (usize, u16)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.word != 0)
            .map(|(addr, slot)| (addr, slot.word))
    }
}

/// Data memory: 2048 raw bytes, mutated only by STR, read only by LDR.
#[derive(Clone, Debug)]
pub struct DataMemory {
    bytes: [u8; DATA_MEMORY_SIZE],
}

impl Default for DataMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl DataMemory {
    /// Creates a zero-initialized data memory.
    pub fn new() -> Self {
        Self {
            bytes: [0; DATA_MEMORY_SIZE],
        }
    }

    /// Reads the byte at `addr`.
    ///
    /// # Panics
    ///
    /// Panics if `addr >= 2048`. Callers validate the address range at
    /// decode time (immediates for LDR/STR are checked to be 0..63, a
    /// strict subset of the full 2048-byte address space).
    pub fn read(&self, addr: u8) -> u8 {
        self.bytes[addr as usize]
    }

    /// Writes `val` to the byte at `addr`.
    ///
    /// # Panics
    ///
    /// Panics if `addr >= 2048`.
    pub fn write(&mut self, addr: u8, val: u8) {
        self.bytes[addr as usize] = val;
    }

    /// Iterates over every non-zero byte, in address order, as
    /// `(address, value)`.
    pub fn nonzero(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.bytes
            .iter()
            .enumerate()
            .filter(|(_, &b)| b != 0)
            .map(|(addr, &b)| (addr, b))
    }
}
