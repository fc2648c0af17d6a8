use um_vm::prelude::*;

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

use std::io::Cursor;

fn assemble(ops: &[Opcode]) -> Vec<Platter> {
    ops.iter().copied().map(Platter::from).collect()
}

fn load_const(reg: RegisterId, value: Platter) -> Vec<Opcode> {
    let hi = value >> 25;
    let lo = value & 0x01ff_ffff;
    if hi == 0 {
        return vec![Opcode::ORTH(reg, lo)];
    }
    vec![
        Opcode::ORTH(reg, lo),
        Opcode::ORTH(6, hi),
        Opcode::ORTH(7, 1 << 24),
        Opcode::ADD(7, 7, 7),
        Opcode::MUL(6, 6, 7),
        Opcode::ADD(reg, reg, 6),
    ]
}

/// Run `op r0, r1, r2` with the given operand values and return `r0`.
fn binary_op(
    op: fn(RegisterId, RegisterId, RegisterId) -> Opcode,
    lhs: Platter,
    rhs: Platter,
) -> Platter {
    let mut ops = Vec::new();
    ops.extend(load_const(1, lhs));
    ops.extend(load_const(2, rhs));
    ops.push(op(0, 1, 2));
    ops.push(Opcode::HALT);

    let mut vm = Interpreter::with_program(&assemble(&ops), Cursor::new(Vec::new()), Vec::new());
    vm.run().expect("arithmetic programs halt");
    vm.registers()[0]
}

#[quickcheck]
fn addition_wraps(lhs: u32, rhs: u32) -> bool {
    binary_op(Opcode::ADD, lhs, rhs) == lhs.wrapping_add(rhs)
}

#[quickcheck]
fn multiplication_wraps(lhs: u32, rhs: u32) -> bool {
    binary_op(Opcode::MUL, lhs, rhs) == lhs.wrapping_mul(rhs)
}

#[quickcheck]
fn division_is_unsigned_floor(lhs: u32, rhs: u32) -> TestResult {
    if rhs == 0 {
        return TestResult::discard();
    }
    TestResult::from_bool(binary_op(Opcode::DIV, lhs, rhs) == lhs / rhs)
}

#[quickcheck]
fn nand_inverts_the_conjunction(lhs: u32, rhs: u32) -> bool {
    binary_op(Opcode::NAND, lhs, rhs) == !(lhs & rhs)
}

#[quickcheck]
fn any_platter_can_be_materialized(value: u32) -> bool {
    let mut ops = load_const(0, value);
    ops.push(Opcode::HALT);

    let mut vm = Interpreter::with_program(&assemble(&ops), Cursor::new(Vec::new()), Vec::new());
    vm.run().expect("load sequences halt");
    vm.registers()[0] == value
}

#[test]
fn division_by_zero_traps() {
    let mut vm = Interpreter::with_program(
        &assemble(&[Opcode::ORTH(1, 5), Opcode::DIV(0, 1, 2), Opcode::HALT]),
        Cursor::new(Vec::new()),
        Vec::new(),
    );

    match vm.run() {
        Err(InterpreterError::PanicInstruction { reason, pc, .. }) => {
            assert_eq!(PanicReason::DivisionByZero, reason);
            assert_eq!(1, pc);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}
