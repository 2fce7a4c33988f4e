//! Line grammar: one mnemonic and its operands per line.

use crate::common::error::AssembleError;
use crate::isa::{Instruction, Opcode};

/// Operand-level parse failures, resolved into a full [`AssembleError`] by
/// the caller once it knows the mnemonic and original line text.
enum OperandError {
    Malformed,
    RegisterOutOfRange(i64),
}

/// Parses one already-trimmed, non-empty source line into a decoded
/// [`Instruction`], per §6's grammar:
/// `ADD|SUB|MUL|EOR|BR Rd, Rs` or
/// `MOVI|BEQZ|ANDI|SAL|SAR|LDR|STR Rd, imm`.
pub fn parse_line(line: &str) -> Result<Instruction, AssembleError> {
    let mut parts = line.splitn(2, char::is_whitespace);
    let mnemonic = parts.next().unwrap_or("").to_uppercase();
    let rest = parts.next().unwrap_or("").trim();
    let operands: Vec<&str> = rest.split(',').map(str::trim).collect();

    let opcode =
        mnemonic_to_opcode(&mnemonic).ok_or_else(|| AssembleError::UnknownMnemonic(line.to_string()))?;

    let malformed = || AssembleError::MalformedOperands {
        mnemonic: mnemonic.clone(),
        line: line.to_string(),
    };

    if operands.len() != 2 || operands.iter().any(|o| o.is_empty()) {
        return Err(malformed());
    }

    let rd = parse_register(operands[0]).map_err(|e| resolve_operand_error(e, &malformed))?;

    if opcode.is_r_type() {
        let rs = parse_register(operands[1]).map_err(|e| resolve_operand_error(e, &malformed))?;
        Ok(build_r_type(opcode, rd, rs))
    } else {
        let value: i64 = operands[1].parse().map_err(|_| malformed())?;
        if opcode.has_signed_immediate() {
            if !(-32..=31).contains(&value) {
                return Err(AssembleError::ImmediateOutOfRange {
                    value,
                    min: -32,
                    max: 31,
                });
            }
            Ok(build_signed_i_type(opcode, rd, value as i8))
        } else {
            if !(0..=63).contains(&value) {
                return Err(AssembleError::ImmediateOutOfRange {
                    value,
                    min: 0,
                    max: 63,
                });
            }
            Ok(build_unsigned_i_type(opcode, rd, value as u8))
        }
    }
}

fn resolve_operand_error(error: OperandError, malformed: &impl Fn() -> AssembleError) -> AssembleError {
    match error {
        OperandError::Malformed => malformed(),
        OperandError::RegisterOutOfRange(value) => AssembleError::RegisterOutOfRange(value),
    }
}

/// Parses a register operand of the form `R<0..63>` (case-insensitive `R`).
fn parse_register(operand: &str) -> Result<u8, OperandError> {
    let digits = operand
        .strip_prefix(['R', 'r'])
        .ok_or(OperandError::Malformed)?;
    let value: i64 = digits.parse().map_err(|_| OperandError::Malformed)?;
    if !(0..=63).contains(&value) {
        return Err(OperandError::RegisterOutOfRange(value));
    }
    Ok(value as u8)
}

fn mnemonic_to_opcode(mnemonic: &str) -> Option<Opcode> {
    Some(match mnemonic {
        "ADD" => Opcode::Add,
        "SUB" => Opcode::Sub,
        "MUL" => Opcode::Mul,
        "MOVI" => Opcode::Movi,
        "BEQZ" => Opcode::Beqz,
        "ANDI" => Opcode::Andi,
        "EOR" => Opcode::Eor,
        "BR" => Opcode::Br,
        "SAL" => Opcode::Sal,
        "SAR" => Opcode::Sar,
        "LDR" => Opcode::Ldr,
        "STR" => Opcode::Str,
        _ => return None,
    })
}

fn build_r_type(opcode: Opcode, rd: u8, rs: u8) -> Instruction {
    match opcode {
        Opcode::Add => Instruction::Add { rd, rs },
        Opcode::Sub => Instruction::Sub { rd, rs },
        Opcode::Mul => Instruction::Mul { rd, rs },
        Opcode::Eor => Instruction::Eor { rd, rs },
        Opcode::Br => Instruction::Br { rd, rs },
        _ => unreachable!("caller only reaches here for is_r_type() opcodes"),
    }
}

fn build_signed_i_type(opcode: Opcode, rd: u8, imm: i8) -> Instruction {
    match opcode {
        Opcode::Movi => Instruction::Movi { rd, imm },
        Opcode::Beqz => Instruction::Beqz { rd, imm },
        _ => unreachable!("caller only reaches here for has_signed_immediate() opcodes"),
    }
}

fn build_unsigned_i_type(opcode: Opcode, rd: u8, imm: u8) -> Instruction {
    match opcode {
        Opcode::Andi => Instruction::Andi { rd, imm },
        Opcode::Sal => Instruction::Sal { rd, imm },
        Opcode::Sar => Instruction::Sar { rd, imm },
        Opcode::Ldr => Instruction::Ldr { rd, imm },
        Opcode::Str => Instruction::Str { rd, imm },
        _ => unreachable!("caller only reaches here for unsigned-immediate opcodes"),
    }
}
