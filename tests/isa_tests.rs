use pipesim::common::error::DecodeError;
use pipesim::isa::{Instruction, Opcode};

#[test]
fn round_trip_r_type() {
    let instr = Instruction::Add { rd: 12, rs: 7 };
    let decoded = Instruction::decode(instr.encode()).unwrap();
    assert_eq!(decoded, instr);
}

#[test]
fn round_trip_signed_immediate() {
    let instr = Instruction::Movi { rd: 1, imm: -1 };
    let decoded = Instruction::decode(instr.encode()).unwrap();
    assert_eq!(decoded, instr);
}

#[test]
fn round_trip_unsigned_immediate() {
    let instr = Instruction::Ldr { rd: 9, imm: 63 };
    let decoded = Instruction::decode(instr.encode()).unwrap();
    assert_eq!(decoded, instr);
}

#[test]
fn sign_extend_negative_one() {
    assert_eq!(pipesim::isa::sign_extend_6(0x3F), -1);
}

#[test]
fn sign_extend_max_positive() {
    assert_eq!(pipesim::isa::sign_extend_6(0x1F), 31);
}

#[test]
fn unsigned_immediate_at_the_boundary_decodes() {
    let word = Instruction::Ldr { rd: 0, imm: 63 }.encode();
    assert!(Instruction::decode(word).is_ok());
}

#[test]
fn decode_rejects_unknown_opcode() {
    let word = 0xF000;
    assert_eq!(Instruction::decode(word), Err(DecodeError::UnknownOpcode(0xF)));
}

#[test]
fn opcode_bits_round_trip() {
    for opcode in [
        Opcode::Add,
        Opcode::Sub,
        Opcode::Mul,
        Opcode::Movi,
        Opcode::Beqz,
        Opcode::Andi,
        Opcode::Eor,
        Opcode::Br,
        Opcode::Sal,
        Opcode::Sar,
        Opcode::Ldr,
        Opcode::Str,
    ] {
        assert_eq!(Opcode::try_from(opcode.bits()).unwrap(), opcode);
    }
}
