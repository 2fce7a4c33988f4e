//! Opcode table for the twelve supported instructions.

use crate::common::error::DecodeError;

/// The four-bit operation code occupying bits 15..12 of every instruction
/// word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Opcode {
    /// `ADD Rd, Rs` — R[rd] <- R[rd] + R[rs].
    Add,
    /// `SUB Rd, Rs` — R[rd] <- R[rd] - R[rs].
    Sub,
    /// `MUL Rd, Rs` — R[rd] <- R[rd] * R[rs] (low 8 bits).
    Mul,
    /// `MOVI Rd, imm` — R[rd] <- sign_extend(imm).
    Movi,
    /// `BEQZ Rd, imm` — branch if R[rd] == 0.
    Beqz,
    /// `ANDI Rd, imm` — R[rd] <- R[rd] & imm.
    Andi,
    /// `EOR Rd, Rs` — R[rd] <- R[rd] ^ R[rs].
    Eor,
    /// `BR Rd, Rs` — absolute jump via register concatenation.
    Br,
    /// `SAL Rd, imm` — R[rd] <- R[rd] << imm.
    Sal,
    /// `SAR Rd, imm` — R[rd] <- R[rd] >> imm (arithmetic).
    Sar,
    /// `LDR Rd, imm` — R[rd] <- DataMem[imm].
    Ldr,
    /// `STR Rd, imm` — DataMem[imm] <- R[rd].
    Str,
}

impl Opcode {
    /// Numeric encoding occupying bits 15..12 of the instruction word.
    pub const fn bits(self) -> u8 {
        match self {
            Opcode::Add => 0x0,
            Opcode::Sub => 0x1,
            Opcode::Mul => 0x2,
            Opcode::Movi => 0x3,
            Opcode::Beqz => 0x4,
            Opcode::Andi => 0x5,
            Opcode::Eor => 0x6,
            Opcode::Br => 0x7,
            Opcode::Sal => 0x8,
            Opcode::Sar => 0x9,
            Opcode::Ldr => 0xA,
            Opcode::Str => 0xB,
        }
    }

    /// True if this opcode uses the R-type format (two register operands).
    pub const fn is_r_type(self) -> bool {
        matches!(self, Opcode::Add | Opcode::Sub | Opcode::Mul | Opcode::Eor | Opcode::Br)
    }

    /// True if this opcode's immediate is signed and sign-extended
    /// (MOVI, BEQZ), as opposed to unsigned 0..63.
    pub const fn has_signed_immediate(self) -> bool {
        matches!(self, Opcode::Movi | Opcode::Beqz)
    }

    /// The mnemonic as it appears in assembly source.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Add => "ADD",
            Opcode::Sub => "SUB",
            Opcode::Mul => "MUL",
            Opcode::Movi => "MOVI",
            Opcode::Beqz => "BEQZ",
            Opcode::Andi => "ANDI",
            Opcode::Eor => "EOR",
            Opcode::Br => "BR",
            Opcode::Sal => "SAL",
            Opcode::Sar => "SAR",
            Opcode::Ldr => "LDR",
            Opcode::Str => "STR",
        }
    }
}

impl TryFrom<u8> for Opcode {
    type Error = DecodeError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        match bits {
            0x0 => Ok(Opcode::Add),
            0x1 => Ok(Opcode::Sub),
            0x2 => Ok(Opcode::Mul),
            0x3 => Ok(Opcode::Movi),
            0x4 => Ok(Opcode::Beqz),
            0x5 => Ok(Opcode::Andi),
            0x6 => Ok(Opcode::Eor),
            0x7 => Ok(Opcode::Br),
            0x8 => Ok(Opcode::Sal),
            0x9 => Ok(Opcode::Sar),
            0xA => Ok(Opcode::Ldr),
            0xB => Ok(Opcode::Str),
            other => Err(DecodeError::UnknownOpcode(other)),
        }
    }
}
