use pipesim::asm;
use pipesim::common::error::AssembleError;
use pipesim::isa::Instruction;

#[test]
fn assembles_r_type_and_i_type_lines() {
    let output = asm::assemble("ADD R1, R2\nMOVI R3, 5\n");
    assert!(output.diagnostics.is_empty());
    assert_eq!(output.words.len(), 2);
    assert_eq!(
        Instruction::decode(output.words[0].0).unwrap(),
        Instruction::Add { rd: 1, rs: 2 }
    );
    assert_eq!(
        Instruction::decode(output.words[1].0).unwrap(),
        Instruction::Movi { rd: 3, imm: 5 }
    );
}

#[test]
fn blank_lines_are_silently_skipped() {
    let output = asm::assemble("MOVI R1, 1\n\n   \nMOVI R2, 2\n");
    assert!(output.diagnostics.is_empty());
    assert_eq!(output.words.len(), 2);
}

#[test]
fn unknown_mnemonic_is_diagnosed_and_skipped() {
    let output = asm::assemble("FOO R1, R2\nMOVI R1, 1\n");
    assert_eq!(output.words.len(), 1);
    assert_eq!(output.diagnostics.len(), 1);
    assert!(matches!(
        output.diagnostics[0].error,
        AssembleError::UnknownMnemonic(_)
    ));
}

#[test]
fn out_of_range_unsigned_immediate_is_diagnosed() {
    let output = asm::assemble("ANDI R1, 200\n");
    assert!(output.words.is_empty());
    assert_eq!(output.diagnostics.len(), 1);
    assert!(matches!(
        output.diagnostics[0].error,
        AssembleError::ImmediateOutOfRange { value: 200, min: 0, max: 63 }
    ));
}

#[test]
fn out_of_range_signed_immediate_is_diagnosed() {
    let output = asm::assemble("MOVI R1, 100\n");
    assert!(output.words.is_empty());
    assert!(matches!(
        output.diagnostics[0].error,
        AssembleError::ImmediateOutOfRange { value: 100, min: -32, max: 31 }
    ));
}

#[test]
fn out_of_range_register_is_diagnosed() {
    let output = asm::assemble("ADD R70, R2\n");
    assert!(output.words.is_empty());
    assert!(matches!(
        output.diagnostics[0].error,
        AssembleError::RegisterOutOfRange(70)
    ));
}

#[test]
fn malformed_operands_are_diagnosed() {
    let output = asm::assemble("ADD R1\n");
    assert!(output.words.is_empty());
    assert!(matches!(
        output.diagnostics[0].error,
        AssembleError::MalformedOperands { .. }
    ));
}

#[test]
fn remaining_program_still_assembles_after_an_error() {
    let output = asm::assemble("ANDI R1, 200\nMOVI R2, 9\n");
    assert_eq!(output.words.len(), 1);
    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(
        Instruction::decode(output.words[0].0).unwrap(),
        Instruction::Movi { rd: 2, imm: 9 }
    );
}

#[test]
fn negative_immediate_is_accepted_for_movi() {
    let output = asm::assemble("MOVI R1, -1\n");
    assert!(output.diagnostics.is_empty());
    assert_eq!(
        Instruction::decode(output.words[0].0).unwrap(),
        Instruction::Movi { rd: 1, imm: -1 }
    );
}
