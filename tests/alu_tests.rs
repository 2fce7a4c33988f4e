use pipesim::core::units::{derive_flags, Alu, FlagOp};

#[test]
fn add_sets_carry_on_unsigned_overflow() {
    let result = Alu::add(-1, -1);
    let sreg = derive_flags(FlagOp::Add, -1, -1, result);
    assert!(sreg.carry());
}

#[test]
fn add_no_carry_when_unsigned_sum_fits_in_8_bits() {
    let result = Alu::add(100, 100);
    let sreg = derive_flags(FlagOp::Add, 100, 100, result);
    assert!(!sreg.carry());
}

#[test]
fn add_sets_overflow_on_signed_overflow() {
    let result = Alu::add(100, 50);
    let sreg = derive_flags(FlagOp::Add, 100, 50, result);
    assert!(sreg.overflow());
}

#[test]
fn add_no_flags_for_small_positive_sum() {
    let result = Alu::add(5, 3);
    let sreg = derive_flags(FlagOp::Add, 5, 3, result);
    assert_eq!(result, 8);
    assert!(!sreg.carry());
    assert!(!sreg.overflow());
    assert!(!sreg.zero());
    assert!(!sreg.negative());
}

#[test]
fn sub_zero_result_sets_zero_flag() {
    let result = Alu::sub(5, 5);
    let sreg = derive_flags(FlagOp::Sub, 5, 5, result);
    assert_eq!(result, 0);
    assert!(sreg.zero());
    assert!(!sreg.negative());
}

#[test]
fn sub_overflow_when_signs_differ_and_result_flips() {
    let a = -100i8;
    let b = 50i8;
    let result = Alu::sub(a, b);
    let sreg = derive_flags(FlagOp::Sub, a, b, result);
    assert!(sreg.overflow());
}

#[test]
fn sign_flag_is_negative_xor_overflow() {
    let result = Alu::add(100, 50);
    let sreg = derive_flags(FlagOp::Add, 100, 50, result);
    assert_eq!(sreg.sign(), sreg.negative() ^ sreg.overflow());
}

#[test]
fn other_ops_never_set_carry_or_overflow() {
    let result = Alu::mul(-10, -10);
    let sreg = derive_flags(FlagOp::Other, -10, -10, result);
    assert!(!sreg.carry());
    assert!(!sreg.overflow());
}

#[test]
fn sal_shifts_and_fills_with_zero() {
    assert_eq!(Alu::sal(1, 3), 8);
    assert_eq!(Alu::sal(1, 8), 0);
    assert_eq!(Alu::sal(1, 63), 0);
}

#[test]
fn sar_preserves_sign() {
    assert_eq!(Alu::sar(-8, 1), -4);
    assert_eq!(Alu::sar(-1, 10), -1);
    assert_eq!(Alu::sar(4, 10), 0);
}

#[test]
fn andi_masks_with_unsigned_immediate() {
    assert_eq!(Alu::andi(-1, 0x0F), 0x0F);
}
