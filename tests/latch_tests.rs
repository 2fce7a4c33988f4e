use pipesim::core::pipeline::{IdEx, IfId, PipelineLatch};
use pipesim::isa::Instruction;

#[test]
fn new_latches_are_empty() {
    assert!(IfId::default().is_empty());
    assert!(IdEx::default().is_empty());
}

#[test]
fn if_id_set_then_peek_then_clear() {
    let mut latch = IfId::default();
    latch.set(0x3105, 1);
    assert!(!latch.is_empty());
    let entry = latch.peek().unwrap();
    assert_eq!(entry.word, 0x3105);
    assert_eq!(entry.inst_number, 1);
    latch.clear();
    assert!(latch.is_empty());
}

#[test]
fn id_ex_set_then_peek_then_clear() {
    let mut latch = IdEx::default();
    latch.set(Instruction::Add { rd: 1, rs: 2 }, 4);
    assert!(!latch.is_empty());
    let entry = latch.peek().unwrap();
    assert_eq!(entry.instruction, Instruction::Add { rd: 1, rs: 2 });
    latch.clear();
    assert!(latch.is_empty());
}

#[test]
fn flush_empties_a_populated_latch() {
    let mut if_id = IfId::default();
    if_id.set(0x3105, 1);
    if_id.flush();
    assert!(if_id.is_empty());

    let mut id_ex = IdEx::default();
    id_ex.set(Instruction::Add { rd: 1, rs: 2 }, 1);
    id_ex.flush();
    assert!(id_ex.is_empty());
}
