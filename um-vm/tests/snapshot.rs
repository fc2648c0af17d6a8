use um_vm::prelude::*;

use std::io::Cursor;

type TestVm = Interpreter<Cursor<Vec<u8>>, Vec<u8>>;

fn assemble(ops: &[Opcode]) -> Vec<Platter> {
    ops.iter().copied().map(Platter::from).collect()
}

/// A machine that allocated two arrays, freed one, wrote to the other, and
/// produced some terminal output before halting.
fn busy_vm() -> TestVm {
    let ops = vec![
        Opcode::ORTH(0, 4),
        Opcode::ALOC(1, 0),  // r1 = new(4)
        Opcode::ALOC(2, 0),  // r2 = new(4)
        Opcode::ABAN(2),     // free it again
        Opcode::ORTH(3, 2),  // offset
        Opcode::ORTH(4, 77), // value
        Opcode::AAMD(1, 3, 4),
        Opcode::ORTH(5, 0x21),
        Opcode::OUT(5),
        Opcode::OUT(5),
        Opcode::HALT,
    ];
    let mut vm: TestVm =
        Interpreter::with_program(&assemble(&ops), Cursor::new(Vec::new()), Vec::new());
    vm.run().expect("machine halts cleanly");
    vm
}

#[test]
fn snapshots_start_with_the_magic_and_core_state() {
    let vm = busy_vm();

    let mut bytes = Vec::new();
    vm.save_snapshot(&mut bytes).expect("snapshot writes");

    assert_eq!(b"UMX\x01", &bytes[..4]);
    assert_eq!(vm.pc().to_le_bytes(), bytes[4..8]);
    assert_eq!(vm.registers()[0].to_le_bytes(), bytes[8..12]);
}

#[test]
fn save_load_save_is_byte_identical() {
    let vm = busy_vm();

    let mut first = Vec::new();
    vm.save_snapshot(&mut first).expect("snapshot writes");

    let mut restored: TestVm =
        Interpreter::with_program(&[0x7000_0000], Cursor::new(Vec::new()), Vec::new());
    restored
        .load_snapshot(&mut first.as_slice())
        .expect("snapshot reads");

    let mut second = Vec::new();
    restored.save_snapshot(&mut second).expect("snapshot writes");

    assert_eq!(first, second);
}

#[test]
fn restored_machines_match_observably() {
    let vm = busy_vm();

    let mut bytes = Vec::new();
    vm.save_snapshot(&mut bytes).expect("snapshot writes");

    let mut restored: TestVm =
        Interpreter::with_program(&[0x7000_0000], Cursor::new(Vec::new()), Vec::new());
    restored
        .load_snapshot(&mut bytes.as_slice())
        .expect("snapshot reads");

    assert_eq!(vm.registers(), restored.registers());
    assert_eq!(vm.pc(), restored.pc());
    assert_eq!(
        vm.arena().program().unwrap(),
        restored.arena().program().unwrap()
    );
    let written = vm.registers()[1];
    assert_eq!(vm.arena().get(written).unwrap(), restored.arena().get(written).unwrap());
    assert_eq!(77, restored.arena().read(written, 2).unwrap());

    // the freed identifier is free again on the restored side
    let freed = vm.registers()[2];
    assert!(!restored.arena().is_live(freed));

    // the backlog came across: replaying it shows the two output bytes
    restored.print_backlog();
    let replay = restored.output().clone();
    assert_eq!(b"!!", &replay[replay.len() - 2..]);
}

#[test]
fn corrupted_snapshots_are_rejected_up_front() {
    let mut vm = busy_vm();
    let registers = *vm.registers();
    let pc = vm.pc();

    let garbage = b"NOPE this is not a snapshot";
    match vm.load_snapshot(&mut garbage.as_slice()) {
        Err(SnapshotError::BadMagic) => {}
        other => panic!("unexpected result: {other:?}"),
    }

    // nothing was touched
    assert_eq!(&registers, vm.registers());
    assert_eq!(pc, vm.pc());
    assert_eq!(77, vm.arena().read(vm.registers()[1], 2).unwrap());
}

#[test]
fn free_slots_are_encoded_as_minus_one() {
    let vm = busy_vm();

    let mut bytes = Vec::new();
    vm.save_snapshot(&mut bytes).expect("snapshot writes");

    // core: magic + pc + 8 registers
    let mut offset = 4 + 4 + 8 * 4;
    let capacity = i32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap());
    offset += 4;
    assert_eq!(4, capacity, "slots 0..4 were reserved");

    let mut free_slots = 0;
    for _ in 0..capacity {
        let len = i32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap());
        offset += 4;
        if len == -1 {
            free_slots += 1;
        } else {
            offset += 4 * len as usize;
        }
    }
    assert_eq!(2, free_slots, "identifiers 2 and 3 are free");
}
