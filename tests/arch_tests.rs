use pipesim::core::arch::{ArchState, DataMemory, InstructionMemory};

#[test]
fn new_register_file_is_zeroed() {
    let arch = ArchState::new();
    for (_, value) in arch.gpr.iter() {
        assert_eq!(value, 0);
    }
}

#[test]
fn pc_and_sreg_start_at_zero() {
    let arch = ArchState::new();
    assert_eq!(arch.pc, 0);
    assert_eq!(arch.sreg.bits(), 0);
}

#[test]
fn sreg_reserved_bits_are_always_zero() {
    let sreg = pipesim::core::arch::Sreg::from_flags(true, true, true, true, true);
    assert_eq!(sreg.bits() & 0xE0, 0);
}

#[test]
fn register_touched_tracking_is_independent_of_value() {
    let mut arch = ArchState::new();
    assert!(!arch.gpr.is_touched(3));
    arch.gpr.mark_touched(3);
    assert!(arch.gpr.is_touched(3));
    assert_eq!(arch.gpr.read(3), 0);
}

#[test]
fn instruction_memory_loads_in_order_with_one_based_numbers() {
    let mut imem = InstructionMemory::new();
    imem.load(&[0x3105, 0x3203]);
    assert_eq!(imem.loaded_count(), 2);
    assert_eq!(imem.get(0).unwrap().inst_number, 1);
    assert_eq!(imem.get(1).unwrap().inst_number, 2);
}

#[test]
fn instruction_memory_truncates_at_capacity() {
    let words = vec![0x3101; 2000];
    let mut imem = InstructionMemory::new();
    imem.load(&words);
    assert_eq!(imem.loaded_count(), 1024);
}

#[test]
fn data_memory_nonzero_iteration_is_in_address_order() {
    let mut dmem = DataMemory::new();
    dmem.write(5, 9);
    dmem.write(2, 4);
    let nonzero: Vec<_> = dmem.nonzero().collect();
    assert_eq!(nonzero, vec![(2, 4), (5, 9)]);
}
