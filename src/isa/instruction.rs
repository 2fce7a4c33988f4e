//! Sixteen-bit instruction encoding and the decoded instruction variant.
//!
//! Decode produces a tagged [`Instruction`] with one variant per opcode,
//! each carrying only the operand fields its format actually has. This
//! replaces a bare numeric opcode switch with a representation the
//! compiler can check exhaustively, per the design note on opcode
//! dispatch: Decode constructs the variant, Execute matches on it, and a
//! field can never be read under the wrong format.

use crate::common::error::DecodeError;
use crate::isa::opcode::Opcode;

const RD_SHIFT: u16 = 6;
const FIELD_MASK: u16 = 0x3F;
const OPCODE_SHIFT: u16 = 12;

/// A register operand, guaranteed to be in 0..64 once constructed.
pub type Reg = u8;

/// A fully decoded instruction, tagged by opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// `ADD Rd, Rs`.
    Add { rd: Reg, rs: Reg },
    /// `SUB Rd, Rs`.
    Sub { rd: Reg, rs: Reg },
    /// `MUL Rd, Rs`.
    Mul { rd: Reg, rs: Reg },
    /// `MOVI Rd, imm` with `imm` sign-extended from its 6-bit field.
    Movi { rd: Reg, imm: i8 },
    /// `BEQZ Rd, imm` with `imm` sign-extended from its 6-bit field.
    Beqz { rd: Reg, imm: i8 },
    /// `ANDI Rd, imm` with `imm` unsigned 0..63.
    Andi { rd: Reg, imm: u8 },
    /// `EOR Rd, Rs`.
    Eor { rd: Reg, rs: Reg },
    /// `BR Rd, Rs`.
    Br { rd: Reg, rs: Reg },
    /// `SAL Rd, imm` with `imm` unsigned 0..63.
    Sal { rd: Reg, imm: u8 },
    /// `SAR Rd, imm` with `imm` unsigned 0..63.
    Sar { rd: Reg, imm: u8 },
    /// `LDR Rd, imm` with `imm` unsigned 0..63.
    Ldr { rd: Reg, imm: u8 },
    /// `STR Rd, imm` with `imm` unsigned 0..63.
    Str { rd: Reg, imm: u8 },
}

/// Sign-extends a 6-bit two's-complement value (range -32..31) to `i8`.
pub fn sign_extend_6(field: u8) -> i8 {
    let field = field & 0x3F;
    if field & 0x20 != 0 {
        (field | 0xC0) as i8
    } else {
        field as i8
    }
}

/// Narrows a 6-bit signed value back to its raw field representation.
fn narrow_to_6(imm: i8) -> u16 {
    (imm as u8 & 0x3F) as u16
}

impl Instruction {
    /// The opcode this instruction was decoded from / will encode as.
    pub const fn opcode(&self) -> Opcode {
        match self {
            Instruction::Add { .. } => Opcode::Add,
            Instruction::Sub { .. } => Opcode::Sub,
            Instruction::Mul { .. } => Opcode::Mul,
            Instruction::Movi { .. } => Opcode::Movi,
            Instruction::Beqz { .. } => Opcode::Beqz,
            Instruction::Andi { .. } => Opcode::Andi,
            Instruction::Eor { .. } => Opcode::Eor,
            Instruction::Br { .. } => Opcode::Br,
            Instruction::Sal { .. } => Opcode::Sal,
            Instruction::Sar { .. } => Opcode::Sar,
            Instruction::Ldr { .. } => Opcode::Ldr,
            Instruction::Str { .. } => Opcode::Str,
        }
    }

    /// The destination/first operand register, present on every variant.
    pub const fn rd(&self) -> Reg {
        match *self {
            Instruction::Add { rd, .. }
            | Instruction::Sub { rd, .. }
            | Instruction::Mul { rd, .. }
            | Instruction::Movi { rd, .. }
            | Instruction::Beqz { rd, .. }
            | Instruction::Andi { rd, .. }
            | Instruction::Eor { rd, .. }
            | Instruction::Br { rd, .. }
            | Instruction::Sal { rd, .. }
            | Instruction::Sar { rd, .. }
            | Instruction::Ldr { rd, .. }
            | Instruction::Str { rd, .. } => rd,
        }
    }

    /// Decodes a 16-bit instruction word per §4.1's bit layout.
    ///
    /// Opcode occupies bits 15..12; `rd` occupies bits 11..6; the
    /// remaining six bits (5..0) are either `rs` (R-type) or `imm`
    /// (I-type) depending on the opcode.
    pub fn decode(word: u16) -> Result<Instruction, DecodeError> {
        let opcode = Opcode::try_from(((word >> OPCODE_SHIFT) & 0xF) as u8)?;
        let rd = ((word >> RD_SHIFT) & FIELD_MASK) as u8;
        let field = (word & FIELD_MASK) as u8;

        Ok(match opcode {
            Opcode::Add => Instruction::Add { rd, rs: field },
            Opcode::Sub => Instruction::Sub { rd, rs: field },
            Opcode::Mul => Instruction::Mul { rd, rs: field },
            Opcode::Eor => Instruction::Eor { rd, rs: field },
            Opcode::Br => Instruction::Br { rd, rs: field },
            Opcode::Movi => Instruction::Movi { rd, imm: sign_extend_6(field) },
            Opcode::Beqz => Instruction::Beqz { rd, imm: sign_extend_6(field) },
            Opcode::Andi | Opcode::Sal | Opcode::Sar | Opcode::Ldr | Opcode::Str => {
                if field > 63 {
                    return Err(DecodeError::ImmediateOutOfRange(field));
                }
                match opcode {
                    Opcode::Andi => Instruction::Andi { rd, imm: field },
                    Opcode::Sal => Instruction::Sal { rd, imm: field },
                    Opcode::Sar => Instruction::Sar { rd, imm: field },
                    Opcode::Ldr => Instruction::Ldr { rd, imm: field },
                    Opcode::Str => Instruction::Str { rd, imm: field },
                    _ => unreachable!(),
                }
            }
        })
    }

    /// Encodes this instruction back into its 16-bit word representation.
    ///
    /// `Instruction::decode(instr.encode())` reproduces the original
    /// opcode and operand indices (the round-trip property in §8).
    pub fn encode(&self) -> u16 {
        let opcode_bits = (self.opcode().bits() as u16) << OPCODE_SHIFT;
        let rd_bits = (self.rd() as u16 & FIELD_MASK) << RD_SHIFT;

        let field_bits = match *self {
            Instruction::Add { rs, .. }
            | Instruction::Sub { rs, .. }
            | Instruction::Mul { rs, .. }
            | Instruction::Eor { rs, .. }
            | Instruction::Br { rs, .. } => (rs as u16) & FIELD_MASK,
            Instruction::Movi { imm, .. } | Instruction::Beqz { imm, .. } => narrow_to_6(imm),
            Instruction::Andi { imm, .. }
            | Instruction::Sal { imm, .. }
            | Instruction::Sar { imm, .. }
            | Instruction::Ldr { imm, .. }
            | Instruction::Str { imm, .. } => (imm as u16) & FIELD_MASK,
        };

        opcode_bits | rd_bits | field_bits
    }
}
