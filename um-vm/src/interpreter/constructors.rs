use super::Interpreter;
use crate::arena::Arena;
use crate::consts::VM_REGISTER_COUNT;
use crate::io::IoMediator;

use um_asm::Platter;

impl<R, W> Interpreter<R, W> {
    /// Create a machine with no program installed.
    pub fn new(input: R, output: W) -> Self {
        Self {
            registers: [0; VM_REGISTER_COUNT],
            pc: 0,
            arena: Arena::new(),
            io: IoMediator::new(),
            instructions: 0,
            input,
            output,
        }
    }

    /// Create a machine with `program` installed as identifier 0.
    pub fn with_program(program: &[Platter], input: R, output: W) -> Self {
        let mut vm = Self::new(input, output);
        vm.arena.install_program(program);
        vm
    }
}
